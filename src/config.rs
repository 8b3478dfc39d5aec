// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Zendesk upstream settings
    #[serde(default)]
    pub zendesk: ZenDeskConfig,

    /// Examiner worker pool and refresh thresholds
    #[serde(default)]
    pub examiner: ExaminerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.as_ref().display(),
                error = %e,
                "config load failed, using defaults"
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.zendesk.request_timeout_sec == 0 {
            return Err(AppError::config("zendesk.request_timeout_sec must be > 0"));
        }
        if self.zendesk.auth_token.trim().is_empty() {
            return Err(AppError::config("zendesk.auth_token is empty"));
        }
        if self.examiner.max_pool_size == 0 {
            return Err(AppError::config("examiner.max_pool_size must be > 0"));
        }
        if self.examiner.max_worker_size == 0 {
            return Err(AppError::config("examiner.max_worker_size must be > 0"));
        }
        Ok(())
    }
}

/// Zendesk upstream client settings.
///
/// One base URL per country tenant; an unconfigured country resolves to an
/// empty base URL and fails at the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZenDeskConfig {
    /// Already-encoded Basic credential pair for authenticated endpoints
    #[serde(default)]
    pub auth_token: String,

    /// Per-request timeout in seconds
    #[serde(default = "defaults::request_timeout")]
    pub request_timeout_sec: u64,

    #[serde(default)]
    pub hk_base_url: String,
    #[serde(default)]
    pub id_base_url: String,
    #[serde(default)]
    pub jp_base_url: String,
    #[serde(default)]
    pub my_base_url: String,
    #[serde(default)]
    pub ph_base_url: String,
    #[serde(default)]
    pub sg_base_url: String,
    #[serde(default)]
    pub th_base_url: String,
    #[serde(default)]
    pub tw_base_url: String,
}

impl Default for ZenDeskConfig {
    fn default() -> Self {
        Self {
            auth_token: String::new(),
            request_timeout_sec: defaults::request_timeout(),
            hk_base_url: String::new(),
            id_base_url: String::new(),
            jp_base_url: String::new(),
            my_base_url: String::new(),
            ph_base_url: String::new(),
            sg_base_url: String::new(),
            th_base_url: String::new(),
            tw_base_url: String::new(),
        }
    }
}

/// Examiner pool sizing and per-subject refresh limits.
///
/// Limit semantics:
/// - `<= 0`: the counter is incremented but a sync is never triggered
/// - `== 1`: every check syncs
/// - `> 1`: sync triggers when the post-increment count reaches the limit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExaminerConfig {
    /// Task queue capacity; enqueue blocks when full
    #[serde(default = "defaults::max_pool_size")]
    pub max_pool_size: usize,

    /// Number of concurrent workers
    #[serde(default = "defaults::max_worker_size")]
    pub max_worker_size: usize,

    #[serde(default = "defaults::refresh_limit")]
    pub categories_refresh_limit: i64,
    #[serde(default = "defaults::refresh_limit")]
    pub sections_refresh_limit: i64,
    #[serde(default = "defaults::refresh_limit")]
    pub articles_refresh_limit: i64,
    #[serde(default = "defaults::refresh_limit")]
    pub ticket_forms_refresh_limit: i64,
}

impl Default for ExaminerConfig {
    fn default() -> Self {
        Self {
            max_pool_size: defaults::max_pool_size(),
            max_worker_size: defaults::max_worker_size(),
            categories_refresh_limit: defaults::refresh_limit(),
            sections_refresh_limit: defaults::refresh_limit(),
            articles_refresh_limit: defaults::refresh_limit(),
            ticket_forms_refresh_limit: defaults::refresh_limit(),
        }
    }
}

mod defaults {
    pub fn request_timeout() -> u64 {
        60
    }
    pub fn max_pool_size() -> usize {
        100
    }
    pub fn max_worker_size() -> usize {
        5
    }
    pub fn refresh_limit() -> i64 {
        100
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn configured() -> Config {
        let mut config = Config::default();
        config.zendesk.auth_token = "dG9rZW4=".to_string();
        config
    }

    #[test]
    fn validate_configured_ok() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_auth_token() {
        let mut config = configured();
        config.zendesk.auth_token = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = configured();
        config.zendesk.request_timeout_sec = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let mut config = configured();
        config.examiner.max_worker_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[zendesk]
auth_token = "dG9rZW4="
request_timeout_sec = 30
tw_base_url = "https://help-tw.example.com"

[examiner]
max_pool_size = 10
max_worker_size = 3
categories_refresh_limit = 1
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.zendesk.request_timeout_sec, 30);
        assert_eq!(config.zendesk.tw_base_url, "https://help-tw.example.com");
        assert_eq!(config.examiner.max_worker_size, 3);
        assert_eq!(config.examiner.categories_refresh_limit, 1);
        // untouched keys fall back to defaults
        assert_eq!(config.examiner.sections_refresh_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let config = Config::load_or_default("/nonexistent/zenmirror.toml");
        assert_eq!(config.examiner.max_worker_size, 5);
    }
}
