//! Prior-day GitHub contribution counter
//!
//! - `config`: `GITHUB_TOKEN` / `GITHUB_ACCOUNT` from a `.env` file
//! - `window`: the UTC day being counted
//! - `fetcher`: query, extraction and the printed report line

pub mod config;
pub mod fetcher;
pub mod window;

use std::path::Path;

use chrono::NaiveDate;
use interfaces_github_contributions::transport::GraphQLTransport;
use thiserror::Error;
use tracing::debug;

use crate::config::{Config, ConfigError};
use crate::fetcher::{ContributionFetcher, FetchDailyContributionsError};
use crate::window::{ContributionWindow, WindowError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    LoadConfig {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    ComputeWindow {
        #[from]
        source: WindowError,
    },

    #[error(transparent)]
    FetchDailyContributions {
        #[from]
        source: FetchDailyContributionsError,
    },
}

/// Loads the settings file, then counts the contributions made on the day
/// before `today`. The transport is only built once configuration succeeded.
pub async fn run<T, F>(
    env_file: &Path,
    today: NaiveDate,
    make_transport: F,
) -> Result<u64, RunError>
where
    T: GraphQLTransport,
    F: FnOnce(&Config) -> T,
{
    let config = Config::load(env_file)?;
    debug!(?config, "Configuration loaded");

    let transport = make_transport(&config);
    run_with_config(&config, today, &transport).await
}

pub async fn run_with_config<T: GraphQLTransport>(
    config: &Config,
    today: NaiveDate,
    transport: &T,
) -> Result<u64, RunError> {
    let window = ContributionWindow::previous_day(today)?;
    let total = ContributionFetcher::new(config, transport)
        .fetch(&window)
        .await?;

    Ok(total)
}
