use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Everything is optional with a sensible default — a client app must boot
/// with zero environment. A `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the state file lives.
    pub data_dir: PathBuf,
    /// Where exported PDFs are written.
    pub export_dir: PathBuf,
    /// Remote scoring endpoint. `None` selects the local heuristic scorer.
    pub score_endpoint: Option<String>,
    /// Timeout for scoring requests, seconds.
    pub score_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = match std::env::var("VITAE_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_data_dir(),
        };
        let export_dir = match std::env::var("VITAE_EXPORT_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_export_dir(),
        };

        Ok(Config {
            data_dir,
            export_dir,
            score_endpoint: std::env::var("VITAE_SCORE_URL").ok(),
            score_timeout_secs: std::env::var("VITAE_SCORE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".to_string())
                .parse::<u64>()
                .context("VITAE_SCORE_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vitae")
}

fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(default_data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_need_no_environment() {
        // The vars may or may not be set in the test environment; either way
        // loading must succeed.
        let config = Config::from_env().unwrap();
        assert!(!config.data_dir.as_os_str().is_empty());
        assert!(config.score_timeout_secs > 0);
    }
}
