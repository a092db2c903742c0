//! Structured logging with session context.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use web_time::Instant;

use crate::session::SessionId;
use crate::sink::LogSink;

/// Severity of a log entry, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Upper-case label used in human output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// One emitted log line.
///
/// Extra fields are flattened into the JSON object next to the fixed keys.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Microseconds since the logger was created.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// One-line JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[LEVEL] component: message (elapsed) | key=value ...`
    pub fn to_human(&self) -> String {
        let mut line = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };
        line.push_str(&format!(" ({}us)", self.elapsed_us));

        let pairs: Vec<String> = self
            .fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        if !pairs.is_empty() {
            line.push_str(" | ");
            line.push_str(&pairs.join(" "));
        }
        line
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// How entries are rendered before they reach the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    /// For the developer console.
    Human,
}

/// Logger bound to one page session.
///
/// Clones share nothing mutable; [`StructuredLogger::for_component`] derives a
/// copy whose entries carry a component name.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    page: Option<String>,
    component: Option<String>,
    started: Instant,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

macro_rules! level_methods {
    ($($plain:ident, $builder:ident => $level:ident;)+) => {
        $(
            pub fn $plain(&self, message: &str) {
                self.emit(LogLevel::$level, message.to_string(), Map::new());
            }

            pub fn $builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
                LogBuilder {
                    logger: self,
                    level: LogLevel::$level,
                    message: message.into(),
                    fields: Map::new(),
                }
            }
        )+
    };
}

impl StructuredLogger {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            page: None,
            component: None,
            started: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Raise the threshold to `level`. A stricter threshold already set is kept.
    pub fn at_least(mut self, level: LogLevel) -> Self {
        self.min_level = self.min_level.max(level);
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Derive a logger whose entries carry `component`.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..self.clone()
        }
    }

    level_methods! {
        debug, debug_builder => Debug;
        info, info_builder => Info;
        warn, warn_builder => Warn;
        error, error_builder => Error;
    }

    fn emit(&self, level: LogLevel, message: String, fields: Map<String, Value>) {
        if level < self.min_level {
            return;
        }
        let entry = LogEntry {
            level,
            message,
            session_id: self.session_id.to_string(),
            page: self.page.clone(),
            component: self.component.clone(),
            fields,
            elapsed_us: self.started.elapsed().as_micros() as u64,
        };
        let line = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        self.sink.write(&entry, &line);
    }
}

/// An entry under construction. Nothing is written until [`LogBuilder::emit`].
#[must_use = "call .emit() to write the entry"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Map<String, Value>,
}

impl LogBuilder<'_> {
    /// Attach a field. Strings, integers, floats and booleans all convert.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn emit(self) {
        self.logger.emit(self.level, self.message, self.fields);
    }
}
