//! Mail transport abstraction and the SMTP relay implementation.

use crate::config::{SmtpConfig, TlsMode};
use crate::error::ConfigError;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};

/// Synchronous mail transport.
///
/// Allows injecting a recording transport in tests while production code
/// talks to the SMTP relay.
pub trait MailTransport {
    /// Deliver one message.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Message accepted by the transport
    /// * `Err(String)` - Error message describing the failure
    fn send(&self, message: &Message) -> Result<(), String>;
}

/// Blocking SMTP client for the configured relay.
///
/// Each send opens a connection, runs one transaction and closes it.
pub struct SmtpRelay {
    inner: SmtpTransport,
}

impl SmtpRelay {
    /// Build the relay client. No connection is made until the first send.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, ConfigError> {
        let host = &config.host;

        let tls_parameters = || {
            TlsParameters::builder(host.clone())
                .dangerous_accept_invalid_certs(!config.tls_verify)
                .build()
                .map_err(|e| {
                    ConfigError::ValidationError(format!("smtp TLS configuration error: {}", e))
                })
        };

        let builder = SmtpTransport::builder_dangerous(host.as_str()).port(config.port);
        let builder = match config.tls {
            TlsMode::None => builder,
            TlsMode::Starttls => builder.tls(Tls::Required(tls_parameters()?)),
            TlsMode::Tls => builder.tls(Tls::Wrapper(tls_parameters()?)),
        };

        let builder = match config.credentials()? {
            Some(credentials) => builder.credentials(Credentials::new(
                credentials.username,
                credentials.password.expose().to_string(),
            )),
            None => builder,
        };

        tracing::debug!(
            host = %host,
            port = config.port,
            tls = ?config.tls,
            "SMTP relay configured"
        );

        Ok(Self {
            inner: builder.build(),
        })
    }
}

impl MailTransport for SmtpRelay {
    fn send(&self, message: &Message) -> Result<(), String> {
        self.inner
            .send(message)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

impl std::fmt::Debug for SmtpRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpRelay").finish_non_exhaustive()
    }
}
