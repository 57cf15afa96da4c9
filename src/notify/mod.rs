//! Email assembly and dispatch.
//!
//! The rendered bodies and the logo are wrapped into one multi-part message
//! which is handed to a [`MailTransport`] exactly once. Production uses
//! [`SmtpRelay`]; tests inject their own transport.

pub mod email;
pub mod logo;
pub mod transport;

pub use email::EmailNotifier;
pub use logo::InlineImage;
pub use transport::{MailTransport, SmtpRelay};

/// Content-ID of the inline logo, referenced as `cid:icinga2_logo` in HTML.
pub const LOGO_CONTENT_ID: &str = "icinga2_logo";
