use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const ACCOUNT_VAR: &str = "GITHUB_ACCOUNT";

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub account: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("account", &self.account)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error loading {}: {source}", path.display())]
    ReadEnvFile {
        path: PathBuf,
        source: dotenvy::Error,
    },

    #[error("Error loading configuration: {name} is not set")]
    MissingVar { name: &'static str },
}

impl Config {
    /// Reads the settings file at `path` without touching the process
    /// environment. Values already present in the process environment win.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    pub fn load_with<F>(path: impl AsRef<Path>, process_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        let read_error = |source| ConfigError::ReadEnvFile {
            path: path.to_path_buf(),
            source,
        };

        let file_vars = dotenvy::from_path_iter(path)
            .map_err(read_error)?
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(read_error)?;

        let lookup = |name: &'static str| {
            process_env(name)
                .or_else(|| file_vars.get(name).cloned())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::MissingVar { name })
        };

        Ok(Self {
            token: lookup(TOKEN_VAR)?,
            account: lookup(ACCOUNT_VAR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn no_process_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn reads_token_and_account_from_file() {
        let file = env_file("GITHUB_TOKEN=ghp_file\nGITHUB_ACCOUNT=octocat\n");
        let config = Config::load_with(file.path(), no_process_env).unwrap();

        assert_eq!(config.token, "ghp_file");
        assert_eq!(config.account, "octocat");
    }

    #[test]
    fn process_env_takes_precedence_over_file() {
        let file = env_file("GITHUB_TOKEN=ghp_file\nGITHUB_ACCOUNT=octocat\n");
        let config = Config::load_with(file.path(), |name| {
            (name == ACCOUNT_VAR).then(|| "hubot".to_string())
        })
        .unwrap();

        assert_eq!(config.token, "ghp_file");
        assert_eq!(config.account, "hubot");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with(dir.path().join(".env"), no_process_env).unwrap_err();

        assert!(matches!(err, ConfigError::ReadEnvFile { .. }));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let file = env_file("GITHUB_TOKEN=ghp_file\nGITHUB_ACCOUNT=\n");
        let err = Config::load_with(file.path(), no_process_env).unwrap_err();

        assert!(matches!(err, ConfigError::MissingVar { name: ACCOUNT_VAR }));
        assert_eq!(
            err.to_string(),
            "Error loading configuration: GITHUB_ACCOUNT is not set"
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let config = Config {
            token: "ghp_secret".into(),
            account: "octocat".into(),
        };
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("octocat"));
    }
}
