//! In-memory logging service.
//!
//! Stands in for the remote service in demos and tests. Latency, random
//! failures and a hard offline switch make the degraded paths reachable.

use async_trait::async_trait;
use complog_application::{EndpointError, LogEndpoint};
use complog_domain::ComponentLogEntry;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Simulated [`LogEndpoint`] that keeps accepted entries in memory.
#[derive(Default)]
pub struct SimulatedLogEndpoint {
    latency: Duration,
    failure_rate: f64,
    offline: AtomicBool,
    id_calls: AtomicUsize,
    log_calls: AtomicUsize,
    entries: Mutex<Vec<ComponentLogEntry>>,
}

impl SimulatedLogEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay applied to every call
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Probability in `[0, 1]` that a call fails
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_offline(self, offline: bool) -> Self {
        self.set_offline(offline);
        self
    }

    /// Switch the service on or off while in use
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Entries accepted so far, in arrival order
    pub fn entries(&self) -> Vec<ComponentLogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn id_calls(&self) -> usize {
        self.id_calls.load(Ordering::SeqCst)
    }

    pub fn log_calls(&self) -> usize {
        self.log_calls.load(Ordering::SeqCst)
    }

    async fn round_trip(&self) -> Result<(), EndpointError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.offline.load(Ordering::SeqCst) {
            return Err(EndpointError::Unavailable);
        }
        if self.failure_rate > 0.0 && fastrand::f64() < self.failure_rate {
            return Err(EndpointError::Connection(
                "simulated network failure".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl LogEndpoint for SimulatedLogEndpoint {
    async fn get_transaction_id(&self) -> Result<String, EndpointError> {
        self.id_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip().await?;
        Ok(format!("SIM-{:016x}", fastrand::u64(..)))
    }

    async fn log_from_component(&self, entry: &ComponentLogEntry) -> Result<(), EndpointError> {
        self.log_calls.fetch_add(1, Ordering::SeqCst);
        self.round_trip().await?;
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
        Ok(())
    }
}
