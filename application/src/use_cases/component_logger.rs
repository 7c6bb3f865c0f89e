//! Component logger
//!
//! The single entry point UI components use to record events. A logger is
//! constructed once per process and passed to every component; clones share
//! the same session, component tag and detached-task tracker.
//!
//! # Delivery
//!
//! ```text
//! log(level, message, ...)
//!        ↓
//! SessionContext::ensure_initialized()   (waits while another call initializes)
//!        ↓
//! LogRecord → ComponentLogEntry          (payload serialized here)
//!        ↓
//! LogEndpoint::log_from_component()
//!        ↓ on any failure
//! FallbackSink::emit(DeliveryFailed)
//! ```
//!
//! No failure on this path reaches the caller.
//!
//! # Component tag
//!
//! The tag set by [`ComponentLogger::set_component_name`] is one shared field
//! with last-writer-wins semantics. Components sharing a logger should use
//! [`ComponentLogger::scoped`] instead, which carries its own name.

use super::scoped_logger::ScopedLogger;
use super::session_context::SessionContext;
use crate::config::LoggerConfig;
use crate::ports::fallback_sink::{DeliveryError, FallbackSink, SinkEvent};
use crate::ports::log_endpoint::LogEndpoint;
use complog_domain::{
    ComponentName, DomainError, ErrorInfo, LogLevel, LogPayload, LogRecord, PerformanceInfo,
    SessionState, TransactionId,
};
use futures::FutureExt;
use serde_json::{Map, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;
use tracing::{debug, trace, warn};

struct Inner {
    session: SessionContext,
    endpoint: Arc<dyn LogEndpoint>,
    sink: Arc<dyn FallbackSink>,
    component: RwLock<ComponentName>,
    config: LoggerConfig,
    detached: TaskTracker,
    flush_lock: Mutex<()>,
}

/// Degrading asynchronous logger.
#[derive(Clone)]
pub struct ComponentLogger {
    inner: Arc<Inner>,
}

impl ComponentLogger {
    pub fn new(endpoint: Arc<dyn LogEndpoint>, sink: Arc<dyn FallbackSink>) -> Self {
        Self::with_config(endpoint, sink, LoggerConfig::default())
    }

    pub fn with_config(
        endpoint: Arc<dyn LogEndpoint>,
        sink: Arc<dyn FallbackSink>,
        config: LoggerConfig,
    ) -> Self {
        let session = SessionContext::new(Arc::clone(&endpoint), Arc::clone(&sink));
        Self {
            inner: Arc::new(Inner {
                session,
                endpoint,
                sink,
                component: RwLock::new(config.component.clone()),
                config,
                detached: TaskTracker::new(),
                flush_lock: Mutex::new(()),
            }),
        }
    }

    // ==================== Session ====================

    /// Initialize the session eagerly and return its id.
    pub async fn init(&self) -> TransactionId {
        self.inner.session.ensure_initialized().await.clone()
    }

    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    pub fn state(&self) -> SessionState {
        self.inner.session.state()
    }

    // ==================== Component Tag ====================

    /// Replace the shared component tag for all subsequent log calls.
    pub fn set_component_name(&self, name: impl Into<ComponentName>) {
        let name = name.into();
        match self.inner.component.write() {
            Ok(mut component) => *component = name,
            Err(poisoned) => *poisoned.into_inner() = name,
        }
    }

    pub fn component_name(&self) -> ComponentName {
        match self.inner.component.read() {
            Ok(component) => component.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// A view of this logger that tags every record with `name`, leaving the
    /// shared tag untouched.
    pub fn scoped(&self, name: impl Into<ComponentName>) -> ScopedLogger {
        ScopedLogger::new(self.clone(), name.into())
    }

    // ==================== Leveled Logging ====================

    /// Log one event. Delivery failures go to the fallback sink.
    pub async fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        let record = build_record(
            self.component_name(),
            level,
            message,
            record_id,
            additional_data,
        );
        self.deliver(record).await;
    }

    /// Log with a level given as a string.
    ///
    /// The level must be one of `DEBUG`, `INFO`, `WARN`, `ERROR`, `FATAL`
    /// (case-sensitive); anything else is rejected and nothing is sent.
    pub async fn log_str(
        &self,
        level: &str,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) -> Result<(), DomainError> {
        let level: LogLevel = level.parse()?;
        self.log(level, message, record_id, additional_data).await;
        Ok(())
    }

    pub async fn debug(
        &self,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        self.log(LogLevel::Debug, message, record_id, additional_data)
            .await
    }

    pub async fn info(
        &self,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        self.log(LogLevel::Info, message, record_id, additional_data)
            .await
    }

    pub async fn warn(
        &self,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        self.log(LogLevel::Warn, message, record_id, additional_data)
            .await
    }

    pub async fn error(
        &self,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        self.log(LogLevel::Error, message, record_id, additional_data)
            .await
    }

    pub async fn fatal(
        &self,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        self.log(LogLevel::Fatal, message, record_id, additional_data)
            .await
    }

    // ==================== Structured Helpers ====================

    /// Log a caught failure at ERROR as `"Error in <context>: <message>"`.
    pub async fn log_error<E>(&self, error: &E, context: &str, record_id: Option<&str>)
    where
        E: std::error::Error + ?Sized,
    {
        let (message, payload) = error_entry(error, context);
        self.error(message, record_id, Some(payload)).await
    }

    /// Log a timing at INFO as `"Performance: <operation> took <duration>ms"`.
    pub async fn log_performance(
        &self,
        operation: &str,
        duration_ms: f64,
        extra: Option<Map<String, Value>>,
    ) {
        let (message, payload) = performance_entry(operation, duration_ms, extra);
        self.info(message, None, Some(payload)).await
    }

    /// [`log_performance`](Self::log_performance) with the time elapsed since `start`.
    pub async fn log_performance_since(
        &self,
        operation: &str,
        start: Instant,
        extra: Option<Map<String, Value>>,
    ) {
        self.log_performance(operation, elapsed_ms(start), extra)
            .await
    }

    // ==================== Fire-and-Forget ====================

    /// Log without waiting.
    ///
    /// Returns immediately; delivery runs as a detached task. Calls made this
    /// way have no ordering guarantee relative to each other or to awaited
    /// calls.
    pub fn log_sync(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        let record = build_record(
            self.component_name(),
            level,
            message,
            record_id,
            additional_data,
        );
        self.spawn_detached(record);
    }

    /// Wait for all detached log tasks issued so far.
    ///
    /// The logger stays usable afterwards. Concurrent flushes run one at a
    /// time so none of them reopens the tracker while another is waiting.
    pub async fn flush(&self) {
        let _guard = self.inner.flush_lock.lock().await;
        let tracker = &self.inner.detached;
        tracker.close();
        tracker.wait().await;
        tracker.reopen();
    }

    /// Number of detached log tasks still running
    pub fn pending_detached(&self) -> usize {
        self.inner.detached.len()
    }

    // ==================== Internals ====================

    pub(crate) async fn deliver(&self, record: LogRecord) {
        if !self.inner.config.enabled(record.level) {
            trace!(level = %record.level, "Record below threshold, dropped");
            return;
        }

        self.inner.session.ensure_initialized().await;

        let entry = match record.to_entry() {
            Ok(entry) => entry,
            Err(e) => return self.fall_back(&record, DeliveryError::from(e)),
        };

        match self.inner.endpoint.log_from_component(&entry).await {
            Ok(()) => {
                debug!(
                    component = %record.component,
                    level = %record.level,
                    "Log record delivered"
                );
            }
            Err(e) => self.fall_back(&record, DeliveryError::from(e)),
        }
    }

    pub(crate) fn spawn_detached(&self, record: LogRecord) {
        let Ok(handle) = Handle::try_current() else {
            return self.fall_back(&record, DeliveryError::NoRuntime);
        };

        let logger = self.clone();
        self.inner.detached.spawn_on(
            async move {
                if let Err(panic) = AssertUnwindSafe(logger.deliver(record)).catch_unwind().await
                {
                    let reason = panic_message(panic.as_ref());
                    warn!(reason = %reason, "Detached log task panicked");
                    logger.inner.sink.emit(SinkEvent::DetachedFailed { reason: &reason });
                }
            },
            &handle,
        );
    }

    fn fall_back(&self, record: &LogRecord, error: DeliveryError) {
        warn!(
            component = %record.component,
            level = %record.level,
            error = %error,
            "Log delivery failed, writing to fallback sink"
        );
        self.inner.sink.emit(SinkEvent::DeliveryFailed {
            record,
            error: &error,
        });
    }
}

pub(crate) fn build_record(
    component: ComponentName,
    level: LogLevel,
    message: impl Into<String>,
    record_id: Option<&str>,
    additional_data: Option<LogPayload>,
) -> LogRecord {
    LogRecord::new(component, level, message)
        .with_record_id(record_id.map(str::to_string))
        .with_data(additional_data)
}

pub(crate) fn error_entry<E>(error: &E, context: &str) -> (String, LogPayload)
where
    E: std::error::Error + ?Sized,
{
    let info = ErrorInfo::from_error(error, context);
    let message = format!("Error in {}: {}", context, info.message);
    (message, LogPayload::Error(info))
}

pub(crate) fn performance_entry(
    operation: &str,
    duration_ms: f64,
    extra: Option<Map<String, Value>>,
) -> (String, LogPayload) {
    let message = format!("Performance: {} took {}ms", operation, duration_ms);
    let info = PerformanceInfo::new(operation, duration_ms, extra);
    (message, LogPayload::Performance(info))
}

pub(crate) fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
