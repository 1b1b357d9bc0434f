use std::path::Path;
use std::process::ExitCode;

use interfaces_github_contributions::transport::HttpTransport;
use projects_contributions::{config::DEFAULT_ENV_FILE, fetcher::render_total, run};
use thiserror::Error;
use tracing::error;
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, MainError> {
    tracing_init("info").map_err(|source| MainError::TracingInit { source })?;

    let today = chrono::Local::now().date_naive();
    let outcome = run(Path::new(DEFAULT_ENV_FILE), today, |config| {
        HttpTransport::new(config.token.clone())
    })
    .await;

    match outcome {
        Ok(total) => {
            println!("{}", render_total(total));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(error = ?err, "Failed to fetch contributions");
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
