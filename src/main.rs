//! icinga-mailer - Icinga 2 notifications as multi-part HTML emails.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{error, info};

use icinga_mailer::cli::{Cli, LogFormat};
use icinga_mailer::config::Config;
use icinga_mailer::{EmailNotifier, InlineImage, MessageRenderer, NotificationEvent};

/// Initialize the tracing subscriber with the specified log format.
///
/// Logs go to stderr; stdout stays empty.
fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .with_env_filter(filter)
                .init();
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    if let Err(e) = run(&cli) {
        error!(error = %e, "Notification failed");
        std::process::exit(1);
    }
}

/// Load everything, render the message and send it once.
///
/// Configuration and environment problems surface before the logo is read
/// or the relay is contacted.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!(error = %e, "Configuration validation error");
        }
        anyhow::bail!(
            "configuration validation failed with {} error(s)",
            errors.len()
        );
    }

    let (sender, recipient) = cli.envelope()?;
    let notifier = EmailNotifier::from_config(&config.smtp, sender, recipient)?;
    let event = NotificationEvent::from_env(cli.object_type)?;

    info!(
        notification_type = %event.notification_type,
        host = %event.host_name,
        "Sending notification"
    );

    let renderer = MessageRenderer::new(&config)?;
    let message = renderer.render(&event, Utc::now())?;
    let logo = InlineImage::load(&config.logo_path)?;

    notifier.send(&message, &logo)?;
    Ok(())
}
