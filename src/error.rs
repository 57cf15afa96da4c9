//! Centralized error types for icinga-mailer using thiserror.
//!
//! Every failure is fatal: `main` logs it and exits non-zero. The enums only
//! exist so the failure class stays visible in the log line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before any file or network I/O takes place.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    LoadError(String),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
    #[error("required environment variable {0} is not set")]
    MissingEnvVar(&'static str),
    #[error("environment variable {name}='{value}' is invalid: {reason}")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        reason: String,
    },
    #[error("missing required argument --{0}")]
    MissingArgument(&'static str),
    #[error("invalid {field} address '{address}': {message}")]
    InvalidAddress {
        field: &'static str,
        address: String,
        message: String,
    },
}

/// Errors related to local resources read before sending.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("cannot read logo '{}': {source}", path.display())]
    LogoUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to building and sending the notification email.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("template render failed: {0}")]
    TemplateError(String),
    #[error("failed to build email: {0}")]
    BuildFailed(String),
    #[error("failed to send notification: {0}")]
    SendFailed(String),
}
