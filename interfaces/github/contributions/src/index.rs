use serde::Serialize;
use thiserror::Error;

use crate::transport::{GitHubGraphQLResult, GraphQLTransport, TransportError};

pub const CONTRIBUTIONS_QUERY: &str = r#"
    query ($userName: String!, $startDate: DateTime!, $endDate: DateTime!) {
        user(login: $userName) {
            contributionsCollection(from: $startDate, to: $endDate) {
                contributionCalendar {
                    totalContributions
                }
            }
        }
    }
"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionVariables {
    pub user_name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: &'a ContributionVariables,
}

#[derive(Debug, Error)]
pub enum FetchContributionsError {
    #[error("Error marshalling JSON: {source}")]
    EncodeRequest {
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport {
        #[from]
        source: TransportError,
    },
}

pub fn encode_request(variables: &ContributionVariables) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&GraphQLRequest {
        query: CONTRIBUTIONS_QUERY,
        variables,
    })
}

pub async fn fetch_contributions<T: GraphQLTransport>(
    transport: &T,
    variables: &ContributionVariables,
) -> Result<GitHubGraphQLResult, FetchContributionsError> {
    let payload = encode_request(variables)
        .map_err(|source| FetchContributionsError::EncodeRequest { source })?;

    Ok(transport.send(payload).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables() -> ContributionVariables {
        ContributionVariables {
            user_name: "octocat".into(),
            start_date: "2024-03-09T00:00:00Z".into(),
            end_date: "2024-03-09T23:59:59Z".into(),
        }
    }

    #[test]
    fn envelope_has_query_and_exactly_three_string_variables() {
        let encoded = encode_request(&variables()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();

        assert_eq!(value["query"], CONTRIBUTIONS_QUERY);

        let vars = value["variables"].as_object().unwrap();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars["userName"], "octocat");
        assert_eq!(vars["startDate"], "2024-03-09T00:00:00Z");
        assert_eq!(vars["endDate"], "2024-03-09T23:59:59Z");
        assert!(vars.values().all(serde_json::Value::is_string));
    }

    #[test]
    fn query_declares_every_variable_it_sends() {
        for name in ["$userName", "$startDate", "$endDate"] {
            assert!(CONTRIBUTIONS_QUERY.contains(name), "missing {name}");
        }
        assert!(CONTRIBUTIONS_QUERY.contains("totalContributions"));
    }
}
