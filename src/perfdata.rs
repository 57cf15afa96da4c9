//! Performance data parsing and HTML table rendering.
//!
//! Check plugins report metrics as a whitespace separated list of
//! `label=valueUOM;warn;crit;min;max` tokens. Everything after the value is
//! optional. This module turns such a string into [`Metric`] rows and renders
//! them as the table embedded in the HTML email. Cell text is HTML-escaped
//! like every other field of the message.
//!
//! # Example
//!
//! ```
//! use icinga_mailer::perfdata::Perfdata;
//!
//! let perfdata = Perfdata::parse("time=165ms;200;500;0;1000 load=3.50");
//! assert_eq!(perfdata.len(), 2);
//! assert_eq!(perfdata.metrics()[0].display_name(), "time (ms)");
//! assert_eq!(perfdata.metrics()[1].warning, "");
//! ```

use minijinja::HtmlEscape;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// One `label=value` token per match. Tokens without `=` never match.
static PERFDATA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?(.+?=\S+)").expect("valid regex"));

const TABLE_HEADER: &str = "<table><thead><tr>\
    <td>Metric</td><td>Value</td><td>Warning</td><td>Critical</td><td>Minimum</td><td>Maximum</td>\
    </tr></thead><tbody>";

const TABLE_FOOTER: &str = "</tbody></table>";

/// A single performance data entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Label with quote characters removed.
    pub label: String,
    /// Raw value token, unit suffix included.
    pub value: String,
    /// Trailing non-digit characters of the value, if any.
    pub uom: Option<String>,
    pub warning: String,
    pub critical: String,
    pub minimum: String,
    pub maximum: String,
}

impl Metric {
    /// Parse one `label=value[;warn;crit;min;max]` token.
    ///
    /// Returns `None` when the token has no `=`.
    pub fn parse(token: &str) -> Option<Self> {
        let (label, rest) = token.split_once('=')?;

        // value, warning, critical, minimum, maximum; padded with "" and
        // anything past the fifth field dropped
        let mut fields = [""; 5];
        for (slot, field) in fields.iter_mut().zip(rest.split(';')) {
            *slot = field;
        }
        let [value, warning, critical, minimum, maximum] = fields;

        Some(Self {
            label: sanitize_label(label),
            value: value.to_string(),
            uom: unit_of_measure(value).map(str::to_string),
            warning: warning.to_string(),
            critical: critical.to_string(),
            minimum: minimum.to_string(),
            maximum: maximum.to_string(),
        })
    }

    /// Label as shown in the Metric column, e.g. `time (ms)`.
    pub fn display_name(&self) -> String {
        match &self.uom {
            Some(uom) => format!("{} ({})", self.label, uom),
            None => self.label.clone(),
        }
    }
}

/// Ordered list of metrics parsed from one performance data string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Perfdata {
    metrics: Vec<Metric>,
}

impl Perfdata {
    /// Parse a raw performance data string. Malformed tokens are skipped.
    pub fn parse(raw: &str) -> Self {
        let metrics = PERFDATA_TOKEN
            .captures_iter(raw)
            .filter_map(|cap| Metric::parse(&cap[1]))
            .collect();
        Self { metrics }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Render the metrics as an HTML table with a fixed six column header.
    ///
    /// Only labels are sanitized; every cell is escaped on output.
    pub fn to_html_table(&self) -> String {
        let mut html = String::from(TABLE_HEADER);
        for metric in &self.metrics {
            // Writing into a String cannot fail
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                HtmlEscape(&metric.display_name()),
                HtmlEscape(&metric.value),
                HtmlEscape(&metric.warning),
                HtmlEscape(&metric.critical),
                HtmlEscape(&metric.minimum),
                HtmlEscape(&metric.maximum),
            );
        }
        html.push_str(TABLE_FOOTER);
        html
    }
}

/// Render optional performance data as an HTML table.
///
/// Absent or empty input yields the header and an empty body.
pub fn perfdata_table(raw: Option<&str>) -> String {
    raw.map(Perfdata::parse).unwrap_or_default().to_html_table()
}

fn sanitize_label(label: &str) -> String {
    label
        .trim_start()
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect()
}

/// Everything after the last ASCII digit of the value.
fn unit_of_measure(value: &str) -> Option<&str> {
    let numeric_len = value.trim_end_matches(|c: char| !c.is_ascii_digit()).len();
    let uom = &value[numeric_len..];
    (!uom.is_empty()).then_some(uom)
}
