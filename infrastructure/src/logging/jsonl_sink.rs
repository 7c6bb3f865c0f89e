//! JSONL file writer for fallback events.
//!
//! Each [`SinkEvent`] is serialized as a single JSON line with a `type`
//! field and `timestamp`, appended to the file via a buffered writer.

use complog_application::{FallbackSink, SinkEvent};
use serde_json::{Value, json};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL fallback sink that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Appends to an existing file.
/// Flushes on `Drop`.
pub struct JsonlFallbackSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlFallbackSink {
    /// Create a sink appending to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create fallback log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open fallback log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn event_to_json(event: &SinkEvent<'_>) -> Value {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    match event {
        SinkEvent::InitializationFailed { error, fallback_id } => json!({
            "type": "initialization_failed",
            "timestamp": timestamp,
            "error": error.to_string(),
            "fallbackId": fallback_id.as_str(),
        }),
        SinkEvent::DeliveryFailed { record, error } => json!({
            "type": "delivery_failed",
            "timestamp": timestamp,
            "error": error.to_string(),
            "component": record.component.as_str(),
            "level": record.level.as_str(),
            "message": record.message,
            "recordId": record.record_id,
            "additionalData": record.additional_data.as_ref().map(|data| data.to_value()),
        }),
        SinkEvent::DetachedFailed { reason } => json!({
            "type": "detached_failed",
            "timestamp": timestamp,
            "error": reason,
        }),
    }
}

impl FallbackSink for JsonlFallbackSink {
    fn emit(&self, event: SinkEvent<'_>) {
        let Ok(line) = serde_json::to_string(&event_to_json(&event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            // Flush per line so a crash loses at most the current event
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlFallbackSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
