//! Session context
//!
//! Owns the transaction id of the process. The id is fetched lazily from the
//! logging service on first use; when that fails a local id is generated
//! instead, so initialization always succeeds.
//!
//! # Concurrency
//!
//! The in-flight initialization is shared through a [`OnceCell`]: callers
//! that arrive while the first `get_transaction_id` call is pending wait for
//! it and observe its outcome. At most one remote call is ever made.

use crate::ports::fallback_sink::{FallbackSink, SinkEvent};
use crate::ports::log_endpoint::{EndpointError, LogEndpoint};
use complog_domain::{SessionState, TransactionId};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Exactly-once holder of the process's transaction id.
pub struct SessionContext {
    endpoint: Arc<dyn LogEndpoint>,
    sink: Arc<dyn FallbackSink>,
    transaction_id: OnceCell<TransactionId>,
    started: AtomicBool,
}

impl SessionContext {
    pub fn new(endpoint: Arc<dyn LogEndpoint>, sink: Arc<dyn FallbackSink>) -> Self {
        Self {
            endpoint,
            sink,
            transaction_id: OnceCell::new(),
            started: AtomicBool::new(false),
        }
    }

    /// Initialize the session if needed and return its id.
    ///
    /// Never fails: a failed remote call is reported to the fallback sink and
    /// replaced by [`TransactionId::fallback`].
    pub async fn ensure_initialized(&self) -> &TransactionId {
        self.transaction_id.get_or_init(|| self.initialize()).await
    }

    async fn initialize(&self) -> TransactionId {
        self.started.store(true, Ordering::Release);

        let result = match self.endpoint.get_transaction_id().await {
            Ok(id) if id.trim().is_empty() => Err(EndpointError::UnexpectedResponse(
                "empty transaction id".to_string(),
            )),
            other => other,
        };

        match result {
            Ok(id) => {
                debug!(transaction_id = %id, "Session initialized");
                TransactionId::new(id)
            }
            Err(e) => {
                let fallback_id = TransactionId::fallback();
                warn!(
                    error = %e,
                    fallback_id = %fallback_id,
                    "Failed to get transaction id, using local fallback"
                );
                self.sink.emit(SinkEvent::InitializationFailed {
                    error: &e,
                    fallback_id: &fallback_id,
                });
                fallback_id
            }
        }
    }

    /// The transaction id, if initialization has completed
    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.transaction_id.initialized()
    }

    pub fn state(&self) -> SessionState {
        if self.transaction_id.initialized() {
            SessionState::Ready
        } else if self.started.load(Ordering::Acquire) {
            SessionState::Initializing
        } else {
            SessionState::Uninitialized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fallback_sink::{MemoryFallbackSink, OwnedSinkEvent};
    use async_trait::async_trait;
    use complog_domain::ComponentLogEntry;
    use std::sync::atomic::AtomicUsize;

    struct IdEndpoint {
        result: Result<&'static str, ()>,
        calls: AtomicUsize,
    }

    impl IdEndpoint {
        fn ok(id: &'static str) -> Self {
            Self {
                result: Ok(id),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LogEndpoint for IdEndpoint {
        async fn get_transaction_id(&self) -> Result<String, EndpointError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Give concurrent callers a chance to pile up
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            self.result
                .map(str::to_string)
                .map_err(|_| EndpointError::Connection("offline".to_string()))
        }

        async fn log_from_component(&self, _entry: &ComponentLogEntry) -> Result<(), EndpointError> {
            Ok(())
        }
    }

    fn context(endpoint: Arc<IdEndpoint>) -> (SessionContext, Arc<MemoryFallbackSink>) {
        let sink = Arc::new(MemoryFallbackSink::new());
        (SessionContext::new(endpoint, sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_initialization_is_idempotent() {
        let endpoint = Arc::new(IdEndpoint::ok("TX-1"));
        let (session, sink) = context(endpoint.clone());

        assert_eq!(session.state(), SessionState::Uninitialized);
        assert!(session.transaction_id().is_none());

        for _ in 0..5 {
            assert_eq!(session.ensure_initialized().await.as_str(), "TX-1");
        }

        assert_eq!(endpoint.calls(), 1);
        assert!(session.is_initialized());
        assert_eq!(session.state(), SessionState::Ready);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_failure_uses_fallback_id() {
        let endpoint = Arc::new(IdEndpoint::failing());
        let (session, sink) = context(endpoint.clone());

        let id = session.ensure_initialized().await.clone();
        assert!(id.as_str().starts_with(TransactionId::FALLBACK_PREFIX));
        assert!(session.is_initialized());

        // No retry once the fallback is in place
        assert_eq!(session.ensure_initialized().await, &id);
        assert_eq!(endpoint.calls(), 1);

        match sink.events().as_slice() {
            [OwnedSinkEvent::InitializationFailed { error, fallback_id }] => {
                assert_eq!(error, "Connection error: offline");
                assert_eq!(fallback_id, &id);
            }
            other => panic!("Expected one InitializationFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_remote_id_is_treated_as_failure() {
        let endpoint = Arc::new(IdEndpoint::ok("  "));
        let (session, sink) = context(endpoint);

        assert!(session.ensure_initialized().await.is_fallback());
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_use_makes_one_call() {
        let endpoint = Arc::new(IdEndpoint::ok("TX-shared"));
        let (session, _sink) = context(endpoint.clone());

        let (a, b, c, d) = tokio::join!(
            session.ensure_initialized(),
            session.ensure_initialized(),
            session.ensure_initialized(),
            session.ensure_initialized(),
        );

        assert_eq!(endpoint.calls(), 1);
        for id in [a, b, c, d] {
            assert_eq!(id.as_str(), "TX-shared");
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_use_across_threads() {
        let endpoint = Arc::new(IdEndpoint::ok("TX-mt"));
        let (session, _sink) = context(endpoint.clone());
        let session = Arc::new(session);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let session = Arc::clone(&session);
            handles.push(tokio::spawn(async move {
                session.ensure_initialized().await.clone()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().as_str(), "TX-mt");
        }

        assert_eq!(endpoint.calls(), 1);
    }
}
