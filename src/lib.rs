// src/lib.rs
//! icinga-mailer - Icinga 2 notifications as multi-part HTML emails.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod notify;
pub mod perfdata;
pub mod template;
pub mod timestamp;

// Re-export commonly used types
pub use cli::LogFormat;
pub use event::{NotificationEvent, NotificationType, ObjectType, Subject};
pub use notify::{EmailNotifier, InlineImage, LOGO_CONTENT_ID, MailTransport, SmtpRelay};
pub use perfdata::{Perfdata, perfdata_table};
pub use template::{MessageRenderer, RenderedMessage};
