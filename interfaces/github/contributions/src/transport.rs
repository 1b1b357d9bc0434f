use std::future::Future;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = "github-contributions";

pub struct GitHubGraphQLResult {
    pub body: String,
    pub status: StatusCode,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Error creating HTTP request: {source}")]
    RequestBuild {
        source: reqwest::Error,
    },

    #[error("Error sending HTTP request: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("Error reading response body: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

/// Posts an already encoded GraphQL payload and hands back the raw reply.
pub trait GraphQLTransport {
    fn send(
        &self,
        payload: Vec<u8>,
    ) -> impl Future<Output = Result<GitHubGraphQLResult, TransportError>> + Send;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
    token: String,
}

impl HttpTransport {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_endpoint(token, GITHUB_GRAPHQL_ENDPOINT)
    }

    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), token, endpoint)
    }

    pub fn with_client(
        client: Client,
        token: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn build_request(&self, payload: Vec<u8>) -> Result<reqwest::Request, TransportError> {
        self.client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .header("User-Agent", USER_AGENT)
            .body(payload)
            .build()
            .map_err(|source| TransportError::RequestBuild { source })
    }
}

impl GraphQLTransport for HttpTransport {
    async fn send(&self, payload: Vec<u8>) -> Result<GitHubGraphQLResult, TransportError> {
        let request = self.build_request(payload)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| TransportError::RequestSend { source })?;

        let status = response.status();
        debug!(%status, "GitHub GraphQL responded");

        let body = response
            .text()
            .await
            .map_err(|source| TransportError::ResponseRead { source })?;

        Ok(GitHubGraphQLResult { body, status })
    }
}
