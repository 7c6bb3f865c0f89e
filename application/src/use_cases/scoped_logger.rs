//! Scoped logger
//!
//! A [`ScopedLogger`] shares the session and sink of the
//! [`ComponentLogger`] it was created from but tags records with its own
//! component name, so several components can log through one logger without
//! racing on the shared tag.

use super::component_logger::{
    ComponentLogger, build_record, elapsed_ms, error_entry, performance_entry,
};
use complog_domain::{ComponentName, LogLevel, LogPayload};
use serde_json::{Map, Value};
use std::time::Instant;

/// Logger view bound to one component name.
#[derive(Clone)]
pub struct ScopedLogger {
    logger: ComponentLogger,
    component: ComponentName,
}

impl ScopedLogger {
    pub(crate) fn new(logger: ComponentLogger, component: ComponentName) -> Self {
        Self { logger, component }
    }

    pub fn component(&self) -> &ComponentName {
        &self.component
    }

    /// The shared logger behind this view
    pub fn logger(&self) -> &ComponentLogger {
        &self.logger
    }

    pub async fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        let record = build_record(
            self.component.clone(),
            level,
            message,
            record_id,
            additional_data,
        );
        self.logger.deliver(record).await;
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

    pub async fn log_error<E>(&self, error: &E, context: &str, record_id: Option<&str>)
    where
        E: std::error::Error + ?Sized,
    {
        let (message, payload) = error_entry(error, context);
        self.error(message, record_id, Some(payload)).await
    }

    pub async fn log_performance(
        &self,
        operation: &str,
        duration_ms: f64,
        extra: Option<Map<String, Value>>,
    ) {
        let (message, payload) = performance_entry(operation, duration_ms, extra);
        self.info(message, None, Some(payload)).await
    }

    pub async fn log_performance_since(
        &self,
        operation: &str,
        start: Instant,
        extra: Option<Map<String, Value>>,
    ) {
        self.log_performance(operation, elapsed_ms(start), extra)
            .await
    }

    pub fn log_sync(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        record_id: Option<&str>,
        additional_data: Option<LogPayload>,
    ) {
        let record = build_record(
            self.component.clone(),
            level,
            message,
            record_id,
            additional_data,
        );
        self.logger.spawn_detached(record);
    }
}
