//! Demo UI component
//!
//! Mirrors how a real UI component uses the logger across its lifecycle:
//!
//! | Hook / handler          | Logger call                              |
//! |-------------------------|------------------------------------------|
//! | `connected`             | set component name, awaited INFO         |
//! | button handlers         | awaited DEBUG / INFO / ERROR             |
//! | `handle_load_data`      | DEBUG, then performance + INFO or error  |
//! | `handle_simulate_error` | WARN, then `log_error`                   |
//! | `error_callback`        | fire-and-forget FATAL                    |
//! | `disconnected`          | fire-and-forget INFO                     |
//!
//! Teardown hooks cannot await, so they use `log_sync`.

use complog_application::ComponentLogger;
use complog_domain::LogLevel;
use complog_domain::util::now_iso8601;
use serde::Serialize;
use serde_json::json;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// One row of the component's data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// Failure of the simulated data source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Simulated API error - network timeout")]
    Timeout,

    #[error("This is a simulated error for testing logging")]
    Simulated,
}

/// Data source with a fixed delay and a random failure rate.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    pub delay: Duration,
    pub failure_rate: f64,
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            failure_rate: 0.2,
        }
    }
}

impl SimulatedSource {
    pub fn reliable() -> Self {
        Self {
            delay: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    pub fn broken() -> Self {
        Self {
            delay: Duration::ZERO,
            failure_rate: 1.0,
        }
    }

    pub async fn fetch(&self) -> Result<Vec<Item>, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if fastrand::f64() < self.failure_rate {
            return Err(FetchError::Timeout);
        }
        Ok((1..=3)
            .map(|i| Item {
                id: i.to_string(),
                name: format!("Item {}", i),
            })
            .collect())
    }
}

/// A UI component that logs through an injected [`ComponentLogger`].
pub struct ExampleComponent {
    logger: ComponentLogger,
    record_id: Option<String>,
    source: SimulatedSource,
    data: Vec<Item>,
    error: Option<String>,
}

impl ExampleComponent {
    pub const NAME: &'static str = "ExampleComponent";

    pub fn new(logger: ComponentLogger, record_id: Option<String>) -> Self {
        Self {
            logger,
            record_id,
            source: SimulatedSource::default(),
            data: Vec::new(),
            error: None,
        }
    }

    pub fn with_source(mut self, source: SimulatedSource) -> Self {
        self.source = source;
        self
    }

    pub fn data(&self) -> &[Item] {
        &self.data
    }

    /// Message of the last failure shown to the user
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    // ==================== Lifecycle Hooks ====================

    pub async fn connected(&self) {
        self.logger.set_component_name(Self::NAME);
        self.logger
            .info(
                "Component initialized",
                self.record_id(),
                Some(
                    json!({
                        "timestamp": now_iso8601(),
                        "platform": std::env::consts::OS,
                    })
                    .into(),
                ),
            )
            .await;
    }

    pub fn disconnected(&self) {
        self.logger
            .log_sync(LogLevel::Info, "Component disconnected", self.record_id(), None);
    }

    /// Hook for failures the component did not handle itself.
    pub fn error_callback(&self, error: &dyn std::error::Error, stack: &str) {
        self.logger.log_sync(
            LogLevel::Fatal,
            format!("Unexpected component error: {}", error),
            self.record_id(),
            Some(
                json!({
                    "stack": stack,
                    "component": Self::NAME,
                    "timestamp": now_iso8601(),
                })
                .into(),
            ),
        );
    }

    // ==================== Handlers ====================

    pub async fn handle_debug_log(&self) {
        self.logger
            .debug(
                "Debug button clicked",
                self.record_id(),
                Some(button_data("debug")),
            )
            .await;
    }

    pub async fn handle_info_log(&self) {
        self.logger
            .info(
                "Info button clicked",
                self.record_id(),
                Some(button_data("info")),
            )
            .await;
    }

    pub async fn handle_error_log(&self) {
        self.logger
            .error(
                "Manual error log triggered",
                self.record_id(),
                Some(button_data("error")),
            )
            .await;
    }

    pub async fn handle_load_data(&mut self) {
        let start = Instant::now();
        self.error = None;

        self.logger
            .debug("Starting data load operation", self.record_id(), None)
            .await;

        match self.source.fetch().await {
            Ok(items) => {
                let count = items.len();
                self.data = items;
                let load_time = start.elapsed().as_secs_f64() * 1000.0;

                self.logger
                    .log_performance(
                        "Data Load",
                        load_time,
                        json!({"recordCount": count, "recordId": self.record_id})
                            .as_object()
                            .cloned(),
                    )
                    .await;
                self.logger
                    .info(
                        "Data loaded successfully",
                        self.record_id(),
                        Some(json!({"recordCount": count, "loadTime": load_time}).into()),
                    )
                    .await;
            }
            Err(e) => {
                debug!(error = %e, "Data load failed");
                self.logger
                    .log_error(&e, "handleLoadData", self.record_id())
                    .await;
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn handle_simulate_error(&mut self) {
        self.logger
            .warn("About to simulate an error", self.record_id(), None)
            .await;

        let e = FetchError::Simulated;
        self.logger
            .log_error(&e, "handleSimulateError", self.record_id())
            .await;
        self.error = Some(e.to_string());
    }

    /// Drive the component through its whole lifecycle once.
    pub async fn run_lifecycle(&mut self) {
        self.connected().await;
        self.handle_debug_log().await;
        self.handle_info_log().await;
        self.handle_load_data().await;
        self.handle_simulate_error().await;
        self.handle_error_log().await;
        self.error_callback(&FetchError::Simulated, "ExampleComponent.render");
        self.disconnected();
    }
}

fn button_data(kind: &str) -> complog_domain::LogPayload {
    json!({"buttonType": kind, "clickTime": now_iso8601()}).into()
}
