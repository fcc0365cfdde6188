//! Error types shared by the droid-launch crates

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types organized by layer/domain
///
/// "Nothing found" outcomes (no SDK configured, no platform installed) are
/// not errors; they surface as `Ok(None)` from the resolvers.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Android SDK Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read SDK directory {path}: {reason}")]
    SdkRead { path: PathBuf, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Launch Option Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn sdk_read(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::SdkRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error comes from bad user input (arguments or config)
    ///
    /// The CLI reports these without a backtrace and exits with status 2.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::ConfigInvalid { .. }
                | Error::InvalidArgument { .. }
        )
    }

    /// Check if this error came from the filesystem capability
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_) | Error::SdkRead { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::invalid_argument("missing --pkg");
        assert_eq!(err.to_string(), "Invalid argument: missing --pkg");

        let err = Error::config_invalid("expected a table");
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.is_io());
    }

    #[test]
    fn test_sdk_read_error_includes_path() {
        let err = Error::sdk_read("/opt/sdk/platforms", "permission denied");
        assert!(err.to_string().contains("/opt/sdk/platforms"));
        assert!(err.to_string().contains("permission denied"));
        assert!(err.is_io());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::config_not_found("/tmp/config.toml").is_fatal());
        assert!(Error::config_invalid("bad").is_fatal());
        assert!(Error::invalid_argument("missing --pkg").is_fatal());
        assert!(!Error::sdk_read("/sdk", "denied").is_fatal());
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = res.context("listing platforms").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::sdk_read("/sdk", "test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
        let _ = Error::invalid_argument("test");
    }
}
