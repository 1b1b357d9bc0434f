use serde::Deserialize;

/// Reply envelope for the contributions query. Every level is optional so
/// error payloads and reshaped replies still deserialize.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub contributions_collection: Option<ContributionsCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    #[serde(default)]
    pub total_contributions: Option<u64>,
}

/// GitHub fills `message`, `type` and `path`; other servers may send only
/// `extensions`, so nothing here is required.
#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

impl GraphQLError {
    pub fn describe(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match (&self.kind, &self.extensions) {
            (Some(kind), _) => kind.clone(),
            (None, Some(extensions)) => extensions.to_string(),
            (None, None) => "unspecified error".to_string(),
        }
    }

    /// Dotted field path, e.g. `user.contributionsCollection`.
    pub fn path_display(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        Some(
            path.iter()
                .map(|segment| match segment {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("."),
        )
    }
}

impl GraphQLResponse {
    pub fn user(&self) -> Option<&User> {
        self.data.as_ref()?.user.as_ref()
    }

    pub fn total_contributions(&self) -> Option<u64> {
        self.user()?
            .contributions_collection
            .as_ref()?
            .contribution_calendar
            .as_ref()?
            .total_contributions
    }

    /// `None` when the reply carried no errors or an empty list.
    pub fn errors(&self) -> Option<&[GraphQLError]> {
        self.errors.as_deref().filter(|errors| !errors.is_empty())
    }
}
