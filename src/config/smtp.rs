//! SMTP relay configuration.

use super::env::resolve_env_vars;
use super::secret::SecretString;
use crate::error::ConfigError;
use serde::Deserialize;

/// Relay used when no configuration file is given.
pub const DEFAULT_SMTP_HOST: &str = "localhost";

/// Plain SMTP port.
pub const DEFAULT_SMTP_PORT: u16 = 25;

/// SMTP relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional username (supports `${ENV_VAR}` substitution).
    #[serde(default)]
    pub username: Option<String>,
    /// Optional password (supports `${ENV_VAR}` substitution).
    #[serde(default)]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub tls: TlsMode,
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            tls: TlsMode::default(),
            tls_verify: true,
        }
    }
}

/// TLS mode for the relay connection.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain SMTP, as spoken by a local relay.
    #[default]
    None,
    Starttls,
    Tls,
}

/// Resolved SMTP credentials.
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub username: String,
    pub password: SecretString,
}

impl SmtpConfig {
    /// Resolve `${VAR}` references in the credentials.
    ///
    /// Returns `Ok(None)` when the relay needs no authentication.
    pub fn credentials(&self) -> Result<Option<SmtpCredentials>, ConfigError> {
        match (&self.username, &self.password) {
            (None, None) => Ok(None),
            (Some(username), Some(password)) => {
                let username = resolve_env_vars(username).map_err(|e| {
                    ConfigError::ValidationError(format!("smtp.username: {}", e))
                })?;
                let password = resolve_env_vars(password.expose()).map_err(|e| {
                    ConfigError::ValidationError(format!("smtp.password: {}", e))
                })?;
                Ok(Some(SmtpCredentials {
                    username,
                    password: SecretString::new(password),
                }))
            }
            (Some(_), None) => Err(ConfigError::ValidationError(
                "smtp.password required when smtp.username is set".to_string(),
            )),
            (None, Some(_)) => Err(ConfigError::ValidationError(
                "smtp.username required when smtp.password is set".to_string(),
            )),
        }
    }
}

fn default_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_true() -> bool {
    true
}
