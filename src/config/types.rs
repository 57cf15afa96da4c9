//! Core configuration type and loading.

use super::smtp::SmtpConfig;
use crate::error::ConfigError;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base URL of the Icinga Web 2 console.
pub const DEFAULT_ICINGAWEB2_URL: &str = "https://icinga2/icingaweb2";

/// Logo shipped with Icinga Web 2, embedded inline into the HTML body.
pub const DEFAULT_LOGO_PATH: &str = "/usr/share/icingaweb2/public/img/logo_icinga.png";

/// Timezone used for rendered timestamps.
pub const DEFAULT_TIMESTAMP_TIMEZONE: &str = "UTC";

/// Main configuration structure.
///
/// Every key is optional; the defaults target a local relay and a stock
/// Icinga Web 2 installation.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SMTP relay settings.
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Base URL for the details and acknowledge links.
    #[serde(default = "default_icingaweb2_url")]
    pub icingaweb2_url: String,
    /// Image embedded into the HTML body.
    #[serde(default = "default_logo_path")]
    pub logo_path: PathBuf,
    /// Timezone for formatted timestamps (e.g., "UTC", "Europe/Berlin").
    #[serde(default = "default_timestamp_timezone")]
    pub timestamp_timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smtp: SmtpConfig::default(),
            icingaweb2_url: default_icingaweb2_url(),
            logo_path: default_logo_path(),
            timestamp_timezone: default_timestamp_timezone(),
        }
    }
}

fn default_icingaweb2_url() -> String {
    DEFAULT_ICINGAWEB2_URL.to_string()
}

fn default_logo_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOGO_PATH)
}

fn default_timestamp_timezone() -> String {
    DEFAULT_TIMESTAMP_TIMEZONE.to_string()
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// An empty file yields the defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::LoadError`] if the file cannot be read.
    /// Returns [`ConfigError::ValidationError`] if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadError(format!("{}: {}", path.display(), e)))?;

        Self::from_yaml(&content)
    }

    /// Load the file at `path` if given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Validate every setting and report all problems at once.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();

        if self.smtp.host.trim().is_empty() {
            errors.push(ConfigError::ValidationError(
                "smtp.host must not be empty".to_string(),
            ));
        }

        if self.smtp.port == 0 {
            errors.push(ConfigError::ValidationError(
                "smtp.port must not be 0".to_string(),
            ));
        }

        if let Err(e) = self.smtp.credentials() {
            errors.push(e);
        }

        if !(self.icingaweb2_url.starts_with("http://")
            || self.icingaweb2_url.starts_with("https://"))
        {
            errors.push(ConfigError::ValidationError(format!(
                "icingaweb2_url '{}' must start with http:// or https://",
                self.icingaweb2_url
            )));
        }

        if self.logo_path.as_os_str().is_empty() {
            errors.push(ConfigError::ValidationError(
                "logo_path must not be empty".to_string(),
            ));
        }

        if self.timestamp_timezone.parse::<Tz>().is_err() {
            errors.push(ConfigError::ValidationError(format!(
                "timestamp_timezone '{}' is not a valid timezone",
                self.timestamp_timezone
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Console base URL without trailing slash.
    pub fn console_url(&self) -> &str {
        self.icingaweb2_url.trim_end_matches('/')
    }

    /// Parsed timestamp timezone.
    ///
    /// Validated at startup, so an invalid value only logs and falls back to UTC.
    pub fn timezone(&self) -> Tz {
        self.timestamp_timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(timezone = %self.timestamp_timezone, "Invalid timezone, falling back to UTC");
            chrono_tz::UTC
        })
    }
}
