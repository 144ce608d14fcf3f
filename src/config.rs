use crate::error::{Error, Result};
use crate::explorer::MAX_PRIORITIZED_FILES;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub max_files: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        // MAX_FILES can only lower the per-run file budget, never raise it.
        let max_files = env::var("MAX_FILES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MAX_PRIORITIZED_FILES)
            .min(MAX_PRIORITIZED_FILES);

        Ok(Self {
            github_token,
            max_files,
        })
    }
}
