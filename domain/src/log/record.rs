//! Log record entity

use super::component::ComponentName;
use super::entry::ComponentLogEntry;
use super::level::LogLevel;
use super::payload::LogPayload;
use crate::core::error::DomainError;

/// One log event as described by the calling component.
///
/// Records are ephemeral. The session binding is not part of the record;
/// the logging service stamps events with the session on its side.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub component: ComponentName,
    pub level: LogLevel,
    pub message: String,
    pub record_id: Option<String>,
    pub additional_data: Option<LogPayload>,
}

impl LogRecord {
    pub fn new(component: ComponentName, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            component,
            level,
            message: message.into(),
            record_id: None,
            additional_data: None,
        }
    }

    pub fn with_record_id(mut self, record_id: Option<String>) -> Self {
        self.record_id = record_id;
        self
    }

    pub fn with_data(mut self, data: Option<LogPayload>) -> Self {
        self.additional_data = data;
        self
    }

    /// Convert to the transport form, serializing the payload.
    pub fn to_entry(&self) -> Result<ComponentLogEntry, DomainError> {
        let additional_data = self
            .additional_data
            .as_ref()
            .map(LogPayload::to_transport)
            .transpose()?;

        Ok(ComponentLogEntry {
            component: self.component.to_string(),
            level: self.level.as_str().to_string(),
            message: self.message.clone(),
            record_id: self.record_id.clone(),
            additional_data,
        })
    }
}
