//! Email notifier: MIME assembly and the single send.
//!
//! # Testability
//!
//! The `EmailNotifier` supports transport injection for testing:
//! - Production: uses [`SmtpRelay`]
//! - Testing: any [`MailTransport`] that records messages

use super::logo::InlineImage;
use super::transport::{MailTransport, SmtpRelay};
use crate::config::SmtpConfig;
use crate::error::{ConfigError, NotifyError};
use crate::template::RenderedMessage;
use lettre::Message;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use std::sync::Arc;

/// Sends one rendered notification from a sender to a recipient.
///
/// The message layout is:
///
/// ```text
/// multipart/alternative
/// ├── text/plain
/// └── multipart/related
///     ├── text/html
///     └── inline logo (Content-ID)
/// ```
pub struct EmailNotifier {
    /// Transport for sending emails (abstracted for testability).
    transport: Arc<dyn MailTransport>,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    /// Create a notifier sending through the configured SMTP relay.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidAddress`] for unparseable addresses and
    /// propagates relay configuration errors.
    pub fn from_config(
        config: &SmtpConfig,
        sender: &str,
        recipient: &str,
    ) -> Result<Self, ConfigError> {
        let from = parse_address("sender", sender)?;
        let to = parse_address("recipient", recipient)?;
        let transport = SmtpRelay::from_config(config)?;

        Ok(Self::with_transport(Arc::new(transport), from, to))
    }

    /// Create an EmailNotifier with a custom transport.
    pub fn with_transport(transport: Arc<dyn MailTransport>, from: Mailbox, to: Mailbox) -> Self {
        Self {
            transport,
            from,
            to,
        }
    }

    /// Build the multi-part message for `rendered` with `logo` attached inline.
    pub fn build_message(
        &self,
        rendered: &RenderedMessage,
        logo: &InlineImage,
    ) -> Result<Message, NotifyError> {
        let html_with_logo = MultiPart::related()
            .singlepart(SinglePart::html(rendered.html.clone()))
            .singlepart(logo.to_part()?);

        let body = MultiPart::alternative()
            .singlepart(SinglePart::plain(rendered.text.clone()))
            .multipart(html_with_logo);

        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(rendered.subject.clone())
            .multipart(body)
            .map_err(|e| NotifyError::BuildFailed(e.to_string()))
    }

    /// Build the message and hand it to the transport once. No retries.
    pub fn send(&self, rendered: &RenderedMessage, logo: &InlineImage) -> Result<(), NotifyError> {
        let span = tracing::info_span!(
            "send_email",
            recipient = %self.to,
            subject = %rendered.subject
        );
        let _guard = span.enter();

        let message = self.build_message(rendered, logo)?;

        self.transport.send(&message).map_err(|e| {
            tracing::error!(error = %e, "Failed to send notification email");
            NotifyError::SendFailed(e)
        })?;

        tracing::info!("Notification email sent");
        Ok(())
    }
}

/// Parse an address given on the command line.
pub fn parse_address(field: &'static str, address: &str) -> Result<Mailbox, ConfigError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| ConfigError::InvalidAddress {
            field,
            address: address.to_string(),
            message: e.to_string(),
        })
}

impl std::fmt::Debug for EmailNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailNotifier")
            .field("from", &self.from.to_string())
            .field("to", &self.to.to_string())
            .finish()
    }
}
