//! Notification event context loaded from the Icinga 2 environment.
//!
//! Icinga 2 passes everything it knows about the event as environment
//! variables of the notification command. [`NotificationEvent::load`] reads
//! them through a lookup function so callers decide where values come from;
//! [`NotificationEvent::from_env`] uses the process environment.

use crate::error::ConfigError;
use crate::timestamp::from_epoch_seconds;
use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub const ENV_NOTIFICATION_TYPE: &str = "NOTIFICATIONTYPE";
pub const ENV_HOST_NAME: &str = "HOSTNAME";
pub const ENV_HOST_ADDRESS: &str = "HOSTADDRESS";
pub const ENV_LAST_CHECK: &str = "LASTCHECK";
pub const ENV_LAST_STATE: &str = "LASTSTATE";
pub const ENV_LAST_STATE_TYPE: &str = "LASTSTATETYPE";
pub const ENV_NOTIFICATION_COMMENT: &str = "NOTIFICATIONCOMMENT";
pub const ENV_NOTIFICATION_AUTHOR: &str = "NOTIFICATIONAUTHORNAME";
pub const ENV_SERVICE_NAME: &str = "SERVICENAME";
pub const ENV_SERVICE_DISPLAY_NAME: &str = "SERVICEDISPLAYNAME";

/// Longest accepted state duration, 10000 years.
const MAX_DURATION: TimeDelta = TimeDelta::days(365 * 10_000);

/// Environment variable names of one check result.
struct CheckVars {
    state: &'static str,
    state_type: &'static str,
    output: &'static str,
    duration: &'static str,
    perfdata: &'static str,
}

const SERVICE_CHECK_VARS: CheckVars = CheckVars {
    state: "SERVICESTATE",
    state_type: "SERVICESTATETYPE",
    output: "SERVICEOUTPUT",
    duration: "SERVICEDURATION",
    perfdata: "SERVICEPERFDATA",
};

const HOST_CHECK_VARS: CheckVars = CheckVars {
    state: "HOSTSTATE",
    state_type: "HOSTSTATETYPE",
    output: "HOSTOUTPUT",
    duration: "HOSTDURATION",
    perfdata: "HOSTPERFDATA",
};

/// Kind of monitored object the notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "PascalCase")]
pub enum ObjectType {
    Service,
    Host,
}

impl ObjectType {
    /// Use the explicit type if given, otherwise infer it from `SERVICENAME`.
    pub fn resolve<F>(explicit: Option<ObjectType>, lookup: F) -> ObjectType
    where
        F: Fn(&str) -> Option<String>,
    {
        explicit.unwrap_or_else(|| {
            if lookup(ENV_SERVICE_NAME).is_some() {
                ObjectType::Service
            } else {
                ObjectType::Host
            }
        })
    }
}

/// Icinga 2 notification type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Problem,
    Recovery,
    Acknowledgement,
    Custom,
    FlappingStart,
    FlappingEnd,
    /// `DOWNTIME`, `DOWNTIMESTART`, `DOWNTIMEEND` or `DOWNTIMEREMOVED`.
    Downtime(String),
    Other(String),
}

impl NotificationType {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "PROBLEM" => Self::Problem,
            "RECOVERY" => Self::Recovery,
            "ACKNOWLEDGEMENT" => Self::Acknowledgement,
            "CUSTOM" => Self::Custom,
            "FLAPPINGSTART" => Self::FlappingStart,
            "FLAPPINGEND" => Self::FlappingEnd,
            "DOWNTIME" | "DOWNTIMESTART" | "DOWNTIMEEND" | "DOWNTIMEREMOVED" => {
                Self::Downtime(raw.to_string())
            }
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether the email should offer an "Acknowledge" link.
    pub fn offers_acknowledge(&self) -> bool {
        !matches!(
            self,
            Self::Recovery | Self::Downtime(_) | Self::FlappingStart | Self::FlappingEnd
        )
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Problem => "PROBLEM",
            Self::Recovery => "RECOVERY",
            Self::Acknowledgement => "ACKNOWLEDGEMENT",
            Self::Custom => "CUSTOM",
            Self::FlappingStart => "FLAPPINGSTART",
            Self::FlappingEnd => "FLAPPINGEND",
            Self::Downtime(raw) | Self::Other(raw) => raw,
        };
        f.write_str(s)
    }
}

/// Latest check result of the host or service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub state: String,
    pub state_type: String,
    pub output: String,
    /// Time spent in the current state.
    pub duration: TimeDelta,
    /// Raw performance data, `None` when the check reported none.
    pub perfdata: Option<String>,
}

impl CheckResult {
    /// When the current state started, relative to `now`.
    ///
    /// Returns `None` when the start lies outside chrono's range.
    pub fn problem_since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        now.checked_sub_signed(self.duration)
    }
}

/// The monitored object, with the fields only that kind of object has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Host {
        check: CheckResult,
    },
    Service {
        name: String,
        display_name: String,
        check: CheckResult,
    },
}

impl Subject {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Subject::Host { .. } => ObjectType::Host,
            Subject::Service { .. } => ObjectType::Service,
        }
    }

    pub fn check(&self) -> &CheckResult {
        match self {
            Subject::Host { check } | Subject::Service { check, .. } => check,
        }
    }

    /// Display name of the service, `None` for host events.
    pub fn service_display_name(&self) -> Option<&str> {
        match self {
            Subject::Host { .. } => None,
            Subject::Service { display_name, .. } => Some(display_name.as_str()),
        }
    }

    /// Icinga Web 2 link to the object details.
    pub fn details_url(&self, base_url: &str, host_name: &str) -> String {
        self.console_url(base_url, host_name, "show")
    }

    /// Icinga Web 2 link to the acknowledge form.
    pub fn acknowledge_url(&self, base_url: &str, host_name: &str) -> String {
        self.console_url(base_url, host_name, "acknowledge-problem")
    }

    // Values are concatenated as-is; Icinga object names are URL safe.
    fn console_url(&self, base_url: &str, host_name: &str, action: &str) -> String {
        match self {
            Subject::Host { .. } => {
                format!("{}/monitoring/host/{}?host={}", base_url, action, host_name)
            }
            Subject::Service { name, .. } => format!(
                "{}/monitoring/service/{}?host={}&service={}",
                base_url, action, host_name, name
            ),
        }
    }
}

/// Comment and author attached to an acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub comment: String,
    pub author: String,
}

/// Everything known about one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub notification_type: NotificationType,
    pub host_name: String,
    pub host_address: String,
    pub last_check: DateTime<Utc>,
    pub last_state: String,
    pub last_state_type: String,
    pub subject: Subject,
    /// Present for `ACKNOWLEDGEMENT` notifications only.
    pub acknowledgement: Option<Acknowledgement>,
}

impl NotificationEvent {
    /// Load the event from the process environment.
    pub fn from_env(object_type: Option<ObjectType>) -> Result<Self, ConfigError> {
        Self::load(object_type, |name| std::env::var(name).ok())
    }

    /// Load the event through `lookup`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvVar`] for the first required variable
    /// that is absent and [`ConfigError::InvalidEnvVar`] for unparseable
    /// timestamps or durations.
    pub fn load<F>(object_type: Option<ObjectType>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = EnvReader { lookup: &lookup };
        let object_type = ObjectType::resolve(object_type, &lookup);

        let notification_type = NotificationType::parse(&vars.required(ENV_NOTIFICATION_TYPE)?);
        let host_name = vars.required(ENV_HOST_NAME)?;
        let host_address = vars.required(ENV_HOST_ADDRESS)?;
        let last_check = vars.timestamp(ENV_LAST_CHECK)?;
        let last_state = vars.required(ENV_LAST_STATE)?;
        let last_state_type = vars.required(ENV_LAST_STATE_TYPE)?;

        let acknowledgement = if notification_type == NotificationType::Acknowledgement {
            Some(Acknowledgement {
                comment: vars.required(ENV_NOTIFICATION_COMMENT)?,
                author: vars.required(ENV_NOTIFICATION_AUTHOR)?,
            })
        } else {
            None
        };

        let subject = match object_type {
            ObjectType::Service => Subject::Service {
                name: vars.required(ENV_SERVICE_NAME)?,
                display_name: vars.required(ENV_SERVICE_DISPLAY_NAME)?,
                check: vars.check_result(&SERVICE_CHECK_VARS)?,
            },
            ObjectType::Host => Subject::Host {
                check: vars.check_result(&HOST_CHECK_VARS)?,
            },
        };

        tracing::debug!(
            notification_type = %notification_type,
            host = %host_name,
            object_type = ?object_type,
            "Notification context loaded"
        );

        Ok(Self {
            notification_type,
            host_name,
            host_address,
            last_check,
            last_state,
            last_state_type,
            subject,
            acknowledgement,
        })
    }

    /// Subject line, e.g. `PROBLEM - web01/HTTP is CRITICAL`.
    pub fn subject_line(&self) -> String {
        let mut line = format!("{} - {}", self.notification_type, self.host_name);
        if let Some(display_name) = self.subject.service_display_name() {
            line.push('/');
            line.push_str(display_name);
        }
        line.push_str(" is ");
        line.push_str(&self.subject.check().state);
        line
    }
}

struct EnvReader<'a, F> {
    lookup: &'a F,
}

impl<F> EnvReader<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        (self.lookup)(name).ok_or(ConfigError::MissingEnvVar(name))
    }

    fn optional(&self, name: &'static str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn number(&self, name: &'static str) -> Result<f64, ConfigError> {
        let raw = self.required(name)?;
        let value: f64 = raw.trim().parse().map_err(|e: std::num::ParseFloatError| {
            ConfigError::InvalidEnvVar {
                name,
                value: raw.clone(),
                reason: e.to_string(),
            }
        })?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidEnvVar {
                name,
                value: raw,
                reason: "not a finite number".to_string(),
            });
        }
        Ok(value)
    }

    fn timestamp(&self, name: &'static str) -> Result<DateTime<Utc>, ConfigError> {
        let seconds = self.number(name)?;
        from_epoch_seconds(seconds).ok_or_else(|| ConfigError::InvalidEnvVar {
            name,
            value: seconds.to_string(),
            reason: "timestamp out of range".to_string(),
        })
    }

    fn duration(&self, name: &'static str) -> Result<TimeDelta, ConfigError> {
        let seconds = self.number(name)?;
        if seconds < 0.0 {
            return Err(ConfigError::InvalidEnvVar {
                name,
                value: seconds.to_string(),
                reason: "duration must not be negative".to_string(),
            });
        }
        TimeDelta::try_seconds(seconds.trunc() as i64)
            .filter(|delta| *delta <= MAX_DURATION)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name,
                value: seconds.to_string(),
                reason: "duration out of range".to_string(),
            })
    }

    fn check_result(&self, vars: &CheckVars) -> Result<CheckResult, ConfigError> {
        Ok(CheckResult {
            state: self.required(vars.state)?,
            state_type: self.required(vars.state_type)?,
            output: self.required(vars.output)?,
            duration: self.duration(vars.duration)?,
            perfdata: self.optional(vars.perfdata),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn service_env() -> HashMap<&'static str, String> {
        [
            ("NOTIFICATIONTYPE", "PROBLEM"),
            ("HOSTNAME", "web01"),
            ("HOSTADDRESS", "192.0.2.10"),
            ("LASTCHECK", "1768474175"),
            ("LASTSTATE", "OK"),
            ("LASTSTATETYPE", "HARD"),
            ("SERVICENAME", "http"),
            ("SERVICEDISPLAYNAME", "HTTP"),
            ("SERVICESTATE", "CRITICAL"),
            ("SERVICESTATETYPE", "HARD"),
            ("SERVICEOUTPUT", "HTTP CRITICAL - 503 Service Unavailable"),
            ("SERVICEDURATION", "3725"),
            ("SERVICEPERFDATA", "time=165ms;200;500;0;1000"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn host_env() -> HashMap<&'static str, String> {
        [
            ("NOTIFICATIONTYPE", "RECOVERY"),
            ("HOSTNAME", "db01"),
            ("HOSTADDRESS", "192.0.2.20"),
            ("LASTCHECK", "1768474175.25"),
            ("LASTSTATE", "DOWN"),
            ("LASTSTATETYPE", "HARD"),
            ("HOSTSTATE", "UP"),
            ("HOSTSTATETYPE", "HARD"),
            ("HOSTOUTPUT", "PING OK - Packet loss = 0%"),
            ("HOSTDURATION", "42.9"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn load(
        object_type: Option<ObjectType>,
        env: &HashMap<&'static str, String>,
    ) -> Result<NotificationEvent, ConfigError> {
        NotificationEvent::load(object_type, |name| env.get(name).cloned())
    }

    #[test]
    fn load_service_event() {
        let event = load(Some(ObjectType::Service), &service_env()).unwrap();

        assert_eq!(event.notification_type, NotificationType::Problem);
        assert_eq!(event.host_name, "web01");
        assert_eq!(event.host_address, "192.0.2.10");
        assert_eq!(event.last_check.timestamp(), 1_768_474_175);
        assert_eq!(event.last_state, "OK");
        assert_eq!(event.last_state_type, "HARD");
        assert!(event.acknowledgement.is_none());

        match &event.subject {
            Subject::Service {
                name,
                display_name,
                check,
            } => {
                assert_eq!(name, "http");
                assert_eq!(display_name, "HTTP");
                assert_eq!(check.state, "CRITICAL");
                assert_eq!(check.duration, TimeDelta::seconds(3725));
                assert_eq!(check.perfdata.as_deref(), Some("time=165ms;200;500;0;1000"));
            }
            other => panic!("Expected service subject, got {:?}", other),
        }
    }

    #[test]
    fn load_host_event() {
        let event = load(Some(ObjectType::Host), &host_env()).unwrap();

        assert_eq!(event.subject.object_type(), ObjectType::Host);
        assert_eq!(event.subject.service_display_name(), None);
        let check = event.subject.check();
        assert_eq!(check.state, "UP");
        assert_eq!(check.output, "PING OK - Packet loss = 0%");
        assert_eq!(check.duration, TimeDelta::seconds(42));
        assert_eq!(check.perfdata, None);
        assert_eq!(event.last_check.timestamp(), 1_768_474_175);
    }

    #[test]
    fn object_type_inferred_from_service_name() {
        let event = load(None, &service_env()).unwrap();
        assert_eq!(event.subject.object_type(), ObjectType::Service);

        let event = load(None, &host_env()).unwrap();
        assert_eq!(event.subject.object_type(), ObjectType::Host);
    }

    #[test]
    fn explicit_host_type_ignores_service_variables() {
        let mut env = service_env();
        env.insert("HOSTSTATE", "DOWN".to_string());
        env.insert("HOSTSTATETYPE", "SOFT".to_string());
        env.insert("HOSTOUTPUT", "CRITICAL - Host Unreachable".to_string());
        env.insert("HOSTDURATION", "10".to_string());

        let event = load(Some(ObjectType::Host), &env).unwrap();
        assert_eq!(event.subject.object_type(), ObjectType::Host);
        assert_eq!(event.subject.check().state, "DOWN");
    }

    #[test]
    fn missing_required_variable_is_reported_by_name() {
        for name in [
            "NOTIFICATIONTYPE",
            "HOSTNAME",
            "HOSTADDRESS",
            "LASTCHECK",
            "LASTSTATE",
            "LASTSTATETYPE",
            "SERVICENAME",
            "SERVICEDISPLAYNAME",
            "SERVICESTATE",
            "SERVICESTATETYPE",
            "SERVICEOUTPUT",
            "SERVICEDURATION",
        ] {
            let mut env = service_env();
            env.remove(name);
            match load(Some(ObjectType::Service), &env) {
                Err(ConfigError::MissingEnvVar(missing)) => assert_eq!(missing, name),
                other => panic!("Expected MissingEnvVar({}), got {:?}", name, other),
            }
        }
    }

    #[test]
    fn missing_host_check_variable_fails() {
        let mut env = host_env();
        env.remove("HOSTOUTPUT");
        match load(Some(ObjectType::Host), &env) {
            Err(ConfigError::MissingEnvVar("HOSTOUTPUT")) => {}
            other => panic!("Expected MissingEnvVar(HOSTOUTPUT), got {:?}", other),
        }
    }

    #[test]
    fn perfdata_is_optional() {
        let mut env = service_env();
        env.remove("SERVICEPERFDATA");
        let event = load(Some(ObjectType::Service), &env).unwrap();
        assert_eq!(event.subject.check().perfdata, None);

        env.insert("SERVICEPERFDATA", "  ".to_string());
        let event = load(Some(ObjectType::Service), &env).unwrap();
        assert_eq!(event.subject.check().perfdata, None);
    }

    #[test]
    fn invalid_last_check_is_rejected() {
        let mut env = service_env();
        env.insert("LASTCHECK", "yesterday".to_string());
        match load(Some(ObjectType::Service), &env) {
            Err(ConfigError::InvalidEnvVar { name, value, .. }) => {
                assert_eq!(name, "LASTCHECK");
                assert_eq!(value, "yesterday");
            }
            other => panic!("Expected InvalidEnvVar, got {:?}", other),
        }

        env.insert("LASTCHECK", "NaN".to_string());
        assert!(matches!(
            load(Some(ObjectType::Service), &env),
            Err(ConfigError::InvalidEnvVar { name: "LASTCHECK", .. })
        ));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut env = service_env();
        env.insert("SERVICEDURATION", "-5".to_string());
        assert!(matches!(
            load(Some(ObjectType::Service), &env),
            Err(ConfigError::InvalidEnvVar { name: "SERVICEDURATION", .. })
        ));
    }

    #[test]
    fn huge_duration_is_rejected() {
        let mut env = host_env();
        env.insert("HOSTDURATION", "1e13".to_string());
        assert!(matches!(
            load(Some(ObjectType::Host), &env),
            Err(ConfigError::InvalidEnvVar { name: "HOSTDURATION", .. })
        ));

        // ten thousand years is still accepted
        env.insert("HOSTDURATION", "315360000000".to_string());
        let event = load(Some(ObjectType::Host), &env).unwrap();
        assert_eq!(event.subject.check().duration, MAX_DURATION);
    }

    #[test]
    fn acknowledgement_requires_comment_and_author() {
        let mut env = service_env();
        env.insert("NOTIFICATIONTYPE", "ACKNOWLEDGEMENT".to_string());

        match load(Some(ObjectType::Service), &env) {
            Err(ConfigError::MissingEnvVar("NOTIFICATIONCOMMENT")) => {}
            other => panic!("Expected MissingEnvVar(NOTIFICATIONCOMMENT), got {:?}", other),
        }

        env.insert("NOTIFICATIONCOMMENT", "Working on it".to_string());
        match load(Some(ObjectType::Service), &env) {
            Err(ConfigError::MissingEnvVar("NOTIFICATIONAUTHORNAME")) => {}
            other => panic!("Expected MissingEnvVar(NOTIFICATIONAUTHORNAME), got {:?}", other),
        }

        env.insert("NOTIFICATIONAUTHORNAME", "jdoe".to_string());
        let event = load(Some(ObjectType::Service), &env).unwrap();
        assert_eq!(
            event.acknowledgement,
            Some(Acknowledgement {
                comment: "Working on it".to_string(),
                author: "jdoe".to_string(),
            })
        );
    }

    #[test]
    fn comment_ignored_for_other_notification_types() {
        let mut env = service_env();
        env.insert("NOTIFICATIONCOMMENT", "stale comment".to_string());
        env.insert("NOTIFICATIONAUTHORNAME", "jdoe".to_string());
        let event = load(Some(ObjectType::Service), &env).unwrap();
        assert!(event.acknowledgement.is_none());
    }

    #[test]
    fn service_urls_carry_host_and_service() {
        let event = load(Some(ObjectType::Service), &service_env()).unwrap();
        let base = "https://icinga2/icingaweb2";
        assert_eq!(
            event.subject.details_url(base, &event.host_name),
            "https://icinga2/icingaweb2/monitoring/service/show?host=web01&service=http"
        );
        assert_eq!(
            event.subject.acknowledge_url(base, &event.host_name),
            "https://icinga2/icingaweb2/monitoring/service/acknowledge-problem?host=web01&service=http"
        );
    }

    #[test]
    fn host_urls_carry_host_only() {
        let event = load(Some(ObjectType::Host), &host_env()).unwrap();
        let base = "https://icinga2/icingaweb2";
        assert_eq!(
            event.subject.details_url(base, &event.host_name),
            "https://icinga2/icingaweb2/monitoring/host/show?host=db01"
        );
        assert_eq!(
            event.subject.acknowledge_url(base, &event.host_name),
            "https://icinga2/icingaweb2/monitoring/host/acknowledge-problem?host=db01"
        );
    }

    #[test]
    fn subject_line_for_service_and_host() {
        let event = load(Some(ObjectType::Service), &service_env()).unwrap();
        assert_eq!(event.subject_line(), "PROBLEM - web01/HTTP is CRITICAL");

        let event = load(Some(ObjectType::Host), &host_env()).unwrap();
        assert_eq!(event.subject_line(), "RECOVERY - db01 is UP");
    }

    #[test]
    fn problem_since_subtracts_duration() {
        let event = load(Some(ObjectType::Service), &service_env()).unwrap();
        let now = DateTime::from_timestamp(1_768_480_000, 0).unwrap();
        assert_eq!(
            event.subject.check().problem_since(now).unwrap().timestamp(),
            1_768_480_000 - 3725
        );
    }

    #[test]
    fn problem_since_out_of_range_is_none() {
        let mut event = load(Some(ObjectType::Service), &service_env()).unwrap();
        if let Subject::Service { check, .. } = &mut event.subject {
            check.duration = TimeDelta::MAX;
        }
        let now = DateTime::from_timestamp(1_768_480_000, 0).unwrap();
        assert_eq!(event.subject.check().problem_since(now), None);
    }

    #[test]
    fn notification_type_round_trips_raw_value() {
        for raw in [
            "PROBLEM",
            "RECOVERY",
            "ACKNOWLEDGEMENT",
            "CUSTOM",
            "FLAPPINGSTART",
            "FLAPPINGEND",
            "DOWNTIMESTART",
            "DOWNTIMEREMOVED",
            "SOMETHINGNEW",
        ] {
            assert_eq!(NotificationType::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn acknowledge_link_suppressed_for_informational_types() {
        for raw in [
            "RECOVERY",
            "DOWNTIME",
            "DOWNTIMESTART",
            "DOWNTIMEEND",
            "DOWNTIMEREMOVED",
            "FLAPPINGSTART",
            "FLAPPINGEND",
        ] {
            assert!(!NotificationType::parse(raw).offers_acknowledge(), "{}", raw);
        }
        for raw in ["PROBLEM", "ACKNOWLEDGEMENT", "CUSTOM"] {
            assert!(NotificationType::parse(raw).offers_acknowledge(), "{}", raw);
        }
    }

    #[test]
    fn object_type_parses_from_cli_values() {
        assert_eq!(
            ObjectType::from_str("Service", false).unwrap(),
            ObjectType::Service
        );
        assert_eq!(ObjectType::from_str("Host", false).unwrap(), ObjectType::Host);
        assert!(ObjectType::from_str("Hostgroup", false).is_err());
    }
}
