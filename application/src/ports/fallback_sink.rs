//! Port for the local fallback sink.
//!
//! Defines the [`FallbackSink`] trait that receives everything the logger
//! could not hand to the logging service: records whose delivery failed,
//! session initialization failures and failures of detached log tasks.
//!
//! This is separate from `tracing`-based operation logs: tracing carries the
//! logger's own diagnostics, while this port is the degraded delivery path
//! for the caller's events, so nothing logged is silently lost.

use super::log_endpoint::EndpointError;
use complog_domain::{DomainError, LogRecord, TransactionId};
use std::sync::Mutex;
use thiserror::Error;

/// Why a record could not be delivered to the logging service
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Logging failed: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("Logging failed: {0}")]
    Serialization(#[from] DomainError),

    #[error("Logging failed: no async runtime available for detached delivery")]
    NoRuntime,
}

/// Something the logger has to report locally.
#[derive(Debug, Clone, Copy)]
pub enum SinkEvent<'a> {
    /// The transaction id could not be fetched; a local one is used instead.
    InitializationFailed {
        error: &'a EndpointError,
        fallback_id: &'a TransactionId,
    },
    /// A record did not reach the logging service.
    DeliveryFailed {
        record: &'a LogRecord,
        error: &'a DeliveryError,
    },
    /// A fire-and-forget log task died after its issuer moved on.
    DetachedFailed { reason: &'a str },
}

/// Port for writing events to local output.
///
/// Implementations write each event as a single record (e.g., one stderr
/// line). The `emit` method is intentionally synchronous and non-fallible:
/// a sink that cannot write drops the event and never retries.
pub trait FallbackSink: Send + Sync {
    /// Record an event.
    fn emit(&self, event: SinkEvent<'_>);
}

/// No-op implementation for when local output is not wanted.
pub struct NoFallbackSink;

impl FallbackSink for NoFallbackSink {
    fn emit(&self, _event: SinkEvent<'_>) {}
}

/// Owned copy of a [`SinkEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum OwnedSinkEvent {
    InitializationFailed {
        error: String,
        fallback_id: TransactionId,
    },
    DeliveryFailed {
        record: LogRecord,
        error: String,
    },
    DetachedFailed {
        reason: String,
    },
}

impl From<SinkEvent<'_>> for OwnedSinkEvent {
    fn from(event: SinkEvent<'_>) -> Self {
        match event {
            SinkEvent::InitializationFailed { error, fallback_id } => {
                OwnedSinkEvent::InitializationFailed {
                    error: error.to_string(),
                    fallback_id: fallback_id.clone(),
                }
            }
            SinkEvent::DeliveryFailed { record, error } => OwnedSinkEvent::DeliveryFailed {
                record: record.clone(),
                error: error.to_string(),
            },
            SinkEvent::DetachedFailed { reason } => OwnedSinkEvent::DetachedFailed {
                reason: reason.to_string(),
            },
        }
    }
}

/// Sink that keeps every event in memory.
///
/// Useful for tests and for hosts that want to surface undelivered records
/// themselves.
#[derive(Default)]
pub struct MemoryFallbackSink {
    events: Mutex<Vec<OwnedSinkEvent>>,
}

impl MemoryFallbackSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events so far
    pub fn events(&self) -> Vec<OwnedSinkEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Records that failed delivery, in the order they were reported
    pub fn undelivered(&self) -> Vec<LogRecord> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                OwnedSinkEvent::DeliveryFailed { record, .. } => Some(record),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FallbackSink for MemoryFallbackSink {
    fn emit(&self, event: SinkEvent<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.into());
        }
    }
}
