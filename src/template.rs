//! Message rendering for notification emails.
//!
//! The plain-text and HTML bodies are rendered from two built-in minijinja
//! templates that list the same fields in the same order. The HTML template
//! auto-escapes event fields; the performance data table and the console
//! links are inserted as trusted markup.
//!
//! # Example
//!
//! ```ignore
//! let renderer = MessageRenderer::new(&config)?;
//! let message = renderer.render(&event, chrono::Utc::now())?;
//! println!("{}", message.subject);
//! ```

use crate::config::Config;
use crate::error::NotifyError;
use crate::event::NotificationEvent;
use crate::notify::LOGO_CONTENT_ID;
use crate::perfdata::perfdata_table;
use crate::timestamp::{format_elapsed, format_timestamp};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use minijinja::{AutoEscape, Environment, context};

const TEXT_TEMPLATE_NAME: &str = "notification.txt";
const HTML_TEMPLATE_NAME: &str = "notification.html";

const TEXT_TEMPLATE: &str = include_str!("../templates/notification.txt.j2");
const HTML_TEMPLATE: &str = include_str!("../templates/notification.html.j2");

/// Shown in place of absent performance data.
const NO_PERFDATA: &str = "-";

/// Rendered notification ready to be wrapped into an email.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage {
    pub subject: String,
    /// Plain-text body.
    pub text: String,
    /// HTML body referencing the inline logo.
    pub html: String,
}

/// Renders [`NotificationEvent`]s into [`RenderedMessage`]s.
pub struct MessageRenderer {
    env: Environment<'static>,
    console_url: String,
    timezone: Tz,
}

impl MessageRenderer {
    /// Create a renderer for the console URL and timezone of `config`.
    pub fn new(config: &Config) -> Result<Self, NotifyError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".html") {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });
        env.add_template(TEXT_TEMPLATE_NAME, TEXT_TEMPLATE)
            .map_err(|e| NotifyError::TemplateError(e.to_string()))?;
        env.add_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)
            .map_err(|e| NotifyError::TemplateError(e.to_string()))?;

        Ok(Self {
            env,
            console_url: config.console_url().to_string(),
            timezone: config.timezone(),
        })
    }

    /// Render subject, text and HTML body. `now` anchors the "since" timestamp.
    pub fn render(
        &self,
        event: &NotificationEvent,
        now: DateTime<Utc>,
    ) -> Result<RenderedMessage, NotifyError> {
        let check = event.subject.check();
        let problem_since = check.problem_since(now).ok_or_else(|| {
            NotifyError::TemplateError("state start time is out of range".to_string())
        })?;
        let acknowledge_url = event
            .notification_type
            .offers_acknowledge()
            .then(|| event.subject.acknowledge_url(&self.console_url, &event.host_name));

        let ctx = context! {
            logo_cid => LOGO_CONTENT_ID,
            notification_type => event.notification_type.to_string(),
            host_name => &event.host_name,
            host_address => &event.host_address,
            service => event.subject.service_display_name(),
            state => &check.state,
            state_type => &check.state_type,
            last_state => &event.last_state,
            last_state_type => &event.last_state_type,
            output => &check.output,
            perfdata => check.perfdata.as_deref().unwrap_or(NO_PERFDATA),
            perfdata_table => check.perfdata.as_deref().map(|raw| perfdata_table(Some(raw))),
            last_check => format_timestamp(event.last_check, self.timezone),
            duration => format_elapsed(check.duration),
            problem_since => format_timestamp(problem_since, self.timezone),
            acknowledgement => &event.acknowledgement,
            details_url => event.subject.details_url(&self.console_url, &event.host_name),
            acknowledge_url => acknowledge_url,
        };

        let text = self.render_template(TEXT_TEMPLATE_NAME, &ctx)?;
        let html = self.render_template(HTML_TEMPLATE_NAME, &ctx)?;

        tracing::trace!(
            text_len = text.len(),
            html_len = html.len(),
            "Notification rendered"
        );

        Ok(RenderedMessage {
            subject: event.subject_line(),
            text,
            html,
        })
    }

    fn render_template(&self, name: &str, ctx: &minijinja::Value) -> Result<String, NotifyError> {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(ctx))
            .map_err(|e| NotifyError::TemplateError(format!("{}: {}", name, e)))
    }
}

impl std::fmt::Debug for MessageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRenderer")
            .field("console_url", &self.console_url)
            .field("timezone", &self.timezone)
            .finish()
    }
}
