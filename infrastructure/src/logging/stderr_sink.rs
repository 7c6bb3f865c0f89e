//! Console fallback sink.
//!
//! Undelivered records are written as
//!
//! ```text
//! Logging failed: Connection error: offline
//! [INFO] ExampleComponent: Component initialized {"recordId":"001xx","additionalData":{...}}
//! ```

use colored::Colorize;
use complog_application::{FallbackSink, SinkEvent};
use complog_domain::{LogLevel, LogRecord};
use std::io::Write;

/// [`FallbackSink`] writing to the process's standard error.
pub struct StderrFallbackSink {
    color: bool,
}

impl StderrFallbackSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render an event as the lines written to stderr.
    pub fn format_event(&self, event: &SinkEvent<'_>) -> Vec<String> {
        match event {
            SinkEvent::InitializationFailed { error, fallback_id } => vec![format!(
                "Failed to get transaction ID: {} (using {})",
                error, fallback_id
            )],
            SinkEvent::DeliveryFailed { record, error } => {
                vec![error.to_string(), self.format_record(record)]
            }
            SinkEvent::DetachedFailed { reason } => {
                vec![format!("Async logging failed: {}", reason)]
            }
        }
    }

    fn format_record(&self, record: &LogRecord) -> String {
        let context = serde_json::json!({
            "recordId": record.record_id,
            "additionalData": record.additional_data.as_ref().map(|data| data.to_value()),
        });
        format!(
            "{} {}: {} {}",
            self.level_tag(record.level),
            record.component,
            record.message,
            context
        )
    }

    fn level_tag(&self, level: LogLevel) -> String {
        let tag = format!("[{}]", level);
        if !self.color {
            return tag;
        }
        match level {
            LogLevel::Debug => tag.dimmed().to_string(),
            LogLevel::Info => tag.green().to_string(),
            LogLevel::Warn => tag.yellow().to_string(),
            LogLevel::Error => tag.red().to_string(),
            LogLevel::Fatal => tag.red().bold().to_string(),
        }
    }
}

impl Default for StderrFallbackSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FallbackSink for StderrFallbackSink {
    fn emit(&self, event: SinkEvent<'_>) {
        let lines = self.format_event(&event);
        let mut stderr = std::io::stderr().lock();
        for line in lines {
            // Nothing sensible to do if stderr itself is gone
            let _ = writeln!(stderr, "{}", line);
        }
    }
}
