//! Configuration loading and validation for icinga-mailer.
//!
//! The configuration file is optional. Without it the mailer talks plain
//! SMTP to a relay on localhost and links to a stock Icinga Web 2 console.

mod env;
mod secret;
mod smtp;
mod types;

pub use env::resolve_env_vars;
pub use secret::SecretString;
pub use smtp::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, SmtpConfig, SmtpCredentials, TlsMode};
pub use types::{
    Config, DEFAULT_ICINGAWEB2_URL, DEFAULT_LOGO_PATH, DEFAULT_TIMESTAMP_TIMEZONE,
};
