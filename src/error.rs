// src/error.rs

//! Unified error handling for the mirror.

use std::fmt;

use thiserror::Error;

/// Result type alias for mirror operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Acquiring a subject's counter lock failed because another holder owns
    /// it. Two situations produce this:
    /// 1. another worker (possibly in another process) is syncing the subject
    /// 2. a previous sync failed and the lock is waiting to expire via TTL
    ///
    /// Expected contention, not a fault: callers propagate it unwrapped and
    /// workers do not log it.
    #[error("acquire counter lock failed")]
    AcquireLockFailed,

    /// HTTP transport failed before a status could be read
    #[error("transport error for {url}: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    /// Upstream answered with a status other than the declared expectation
    #[error("unexpected status for {url}: expect {expected}, actual {actual}")]
    UnexpectedStatus {
        url: String,
        expected: u16,
        actual: u16,
    },

    /// Upstream response body failed to decode as the declared shape
    #[error("decode error for {url}: {message}")]
    Decode { url: String, message: String },

    /// A listing endpoint returned zero items; treated as an anomaly so a
    /// broken upstream cannot wipe the mirror
    #[error("empty listing pulled for {item}")]
    EmptyListing { item: String },

    /// Failure surfaced by the Service port
    #[error("service error in {context}: {message}")]
    Service { context: String, message: String },

    /// Sync step failure outside the Service port (upstream pull, marshal,
    /// task deadline)
    #[error("sync error in {context}: {message}")]
    Sync { context: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create a service-port error with the protocol step it occurred in.
    pub fn service(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Service {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a sync error with context.
    pub fn sync(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Sync {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for the lock-contention sentinel.
    pub fn is_lock_contention(&self) -> bool {
        matches!(self, Self::AcquireLockFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_recognized() {
        assert!(AppError::AcquireLockFailed.is_lock_contention());
        assert!(!AppError::config("boom").is_lock_contention());
    }

    #[test]
    fn wrapped_errors_carry_context() {
        let err = AppError::sync("categories_sync", "listing length is 0");
        assert_eq!(
            err.to_string(),
            "sync error in categories_sync: listing length is 0"
        );
    }
}
