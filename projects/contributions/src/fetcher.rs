use interfaces_github_contributions::index::{
    fetch_contributions, ContributionVariables, FetchContributionsError,
};
use interfaces_github_contributions::response::GraphQLResponse;
use interfaces_github_contributions::transport::{GitHubGraphQLResult, GraphQLTransport};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::window::ContributionWindow;

#[derive(Debug, Error)]
pub enum FetchDailyContributionsError {
    #[error(transparent)]
    FetchContributions {
        #[from]
        source: FetchContributionsError,
    },

    #[error("Error unmarshalling JSON: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("GitHub returned errors: {}", messages.join("; "))]
    GraphQlErrors { messages: Vec<String> },

    #[error("Unexpected response status {status}")]
    UnexpectedStatus { status: StatusCode },

    #[error("User not found: {login}")]
    UserNotFound { login: String },

    #[error("Missing data in GraphQL response")]
    MissingData,
}

pub struct ContributionFetcher<'a, T> {
    config: &'a Config,
    transport: &'a T,
}

impl<'a, T: GraphQLTransport> ContributionFetcher<'a, T> {
    pub fn new(config: &'a Config, transport: &'a T) -> Self {
        Self { config, transport }
    }

    pub fn variables(&self, window: &ContributionWindow) -> ContributionVariables {
        ContributionVariables {
            user_name: self.config.account.clone(),
            start_date: window.start(),
            end_date: window.end(),
        }
    }

    /// Total contributions recorded for the configured account inside `window`.
    pub async fn fetch(
        &self,
        window: &ContributionWindow,
    ) -> Result<u64, FetchDailyContributionsError> {
        let variables = self.variables(window);
        info!(
            account = %variables.user_name,
            from = %variables.start_date,
            to = %variables.end_date,
            "Querying contribution calendar"
        );

        let result = fetch_contributions(self.transport, &variables).await?;
        self.extract(result)
    }

    fn extract(
        &self,
        GitHubGraphQLResult { body, status }: GitHubGraphQLResult,
    ) -> Result<u64, FetchDailyContributionsError> {
        let parsed: GraphQLResponse = serde_json::from_str(&body)?;

        if let Some(errors) = parsed.errors() {
            for error in errors {
                let kind = error.kind.as_deref().unwrap_or("-");
                let path = error.path_display().unwrap_or_default();
                warn!(%status, kind, path = %path, "GraphQL error: {}", error.describe());
            }
            return Err(FetchDailyContributionsError::GraphQlErrors {
                messages: errors.iter().map(|e| e.describe()).collect(),
            });
        }

        if let Some(total) = parsed.total_contributions() {
            return Ok(total);
        }

        if !status.is_success() {
            return Err(FetchDailyContributionsError::UnexpectedStatus { status });
        }

        match parsed.data {
            Some(ref data) if data.user.is_none() => {
                Err(FetchDailyContributionsError::UserNotFound {
                    login: self.config.account.clone(),
                })
            }
            _ => Err(FetchDailyContributionsError::MissingData),
        }
    }
}

pub fn render_total(total: u64) -> String {
    format!("Total Contributions: {total}")
}
