//! Command-line interface for icinga-mailer using clap.
//!
//! Icinga 2 invokes the binary as a notification command, passing the event
//! through environment variables and the envelope through these flags.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::event::ObjectType;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format for log aggregation.
    Json,
}

/// Send an Icinga 2 notification as a multi-part HTML email.
#[derive(Parser, Debug)]
#[command(name = "icinga-mailer")]
#[command(version)]
#[command(about = "Send an Icinga 2 notification as a multi-part HTML email")]
pub struct Cli {
    /// Object type of the notification. Inferred from SERVICENAME when omitted.
    #[arg(short = 't', long = "object-type", value_enum)]
    pub object_type: Option<ObjectType>,

    /// Sender address.
    #[arg(short = 's', long = "sender")]
    pub sender: Option<String>,

    /// Recipient address.
    #[arg(short = 'r', long = "recipient")]
    pub recipient: Option<String>,

    /// Path to an optional YAML configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log format: text or json.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, env = "LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Sender and recipient, both of which must be present.
    pub fn envelope(&self) -> Result<(&str, &str), ConfigError> {
        let sender = self
            .sender
            .as_deref()
            .ok_or(ConfigError::MissingArgument("sender"))?;
        let recipient = self
            .recipient
            .as_deref()
            .ok_or(ConfigError::MissingArgument("recipient"))?;
        Ok((sender, recipient))
    }
}
