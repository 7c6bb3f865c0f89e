//! Structured payloads attached to log records.
//!
//! Payloads stay strongly typed inside the logger and are serialized to a
//! JSON string only when an entry is handed to the transport. The wire
//! never sees the variant tag, only the flat JSON object.

use crate::core::error::DomainError;
use crate::util::now_iso8601;
use serde::Serialize;
use serde_json::{Map, Value};

/// Structured data carried alongside a log message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogPayload {
    /// Arbitrary caller-supplied key/value data
    Fields(Map<String, Value>),
    /// A caught failure, see [`ErrorInfo`]
    Error(ErrorInfo),
    /// A timing measurement, see [`PerformanceInfo`]
    Performance(PerformanceInfo),
}

impl LogPayload {
    /// Serialize to the transport string form.
    pub fn to_transport(&self) -> Result<String, DomainError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Convert to a JSON value (for local sinks that embed the payload).
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<Map<String, Value>> for LogPayload {
    fn from(map: Map<String, Value>) -> Self {
        LogPayload::Fields(map)
    }
}

impl From<Value> for LogPayload {
    /// Objects become [`LogPayload::Fields`]; any other value is wrapped
    /// under a `"value"` key.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => LogPayload::Fields(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                LogPayload::Fields(map)
            }
        }
    }
}

impl From<ErrorInfo> for LogPayload {
    fn from(info: ErrorInfo) -> Self {
        LogPayload::Error(info)
    }
}

impl From<PerformanceInfo> for LogPayload {
    fn from(info: PerformanceInfo) -> Self {
        LogPayload::Performance(info)
    }
}

/// Description of a caught failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// The error followed by its `source()` chain, one cause per line
    pub stack: String,
    pub context: String,
    pub timestamp: String,
}

impl ErrorInfo {
    pub fn new(
        message: impl Into<String>,
        stack: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            stack: stack.into(),
            context: context.into(),
            timestamp: now_iso8601(),
        }
    }

    /// Build from any error, rendering its cause chain as the stack.
    pub fn from_error<E>(error: &E, context: impl Into<String>) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::new(error.to_string(), render_chain(error), context)
    }
}

fn render_chain<E>(error: &E) -> String
where
    E: std::error::Error + ?Sized,
{
    let mut stack = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        stack.push_str("\n    caused by: ");
        stack.push_str(&cause.to_string());
        source = cause.source();
    }
    stack
}

/// Timing measurement for a named operation.
///
/// Serialized as one flat object: `operation`, `duration` (milliseconds) and
/// `timestamp`, followed by the caller's extra fields. An extra field with
/// the same name as a fixed one replaces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PerformanceInfo {
    fields: Map<String, Value>,
}

impl PerformanceInfo {
    pub fn new(
        operation: impl Into<String>,
        duration_ms: f64,
        extra: Option<Map<String, Value>>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("operation".to_string(), Value::String(operation.into()));
        fields.insert("duration".to_string(), Value::from(duration_ms));
        fields.insert("timestamp".to_string(), Value::String(now_iso8601()));
        if let Some(extra) = extra {
            fields.extend(extra);
        }
        Self { fields }
    }

    pub fn operation(&self) -> Option<&str> {
        self.fields.get("operation").and_then(Value::as_str)
    }

    pub fn duration(&self) -> Option<f64> {
        self.fields.get("duration").and_then(Value::as_f64)
    }

    /// Fixed and extra fields merged
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
