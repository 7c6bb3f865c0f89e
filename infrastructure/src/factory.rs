//! Builds the logger and its adapters from a [`FileConfig`].

use crate::config::{EndpointKind, FileConfig, SinkKind};
use crate::endpoint::{JsonRpcLogEndpoint, SimulatedLogEndpoint};
use crate::logging::{JsonlFallbackSink, StderrFallbackSink};
use complog_application::{ComponentLogger, EndpointError, FallbackSink, LogEndpoint};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Create the logging service adapter selected by `endpoint.kind`.
pub fn build_endpoint(config: &FileConfig) -> Result<Arc<dyn LogEndpoint>, EndpointError> {
    match config.endpoint.kind {
        EndpointKind::JsonRpc => {
            let url = config.endpoint.url.as_deref().ok_or_else(|| {
                EndpointError::Other("endpoint.url is not configured".to_string())
            })?;
            info!(url, "Using JSON-RPC logging endpoint");
            Ok(Arc::new(JsonRpcLogEndpoint::new(
                url,
                config.endpoint.timeout(),
            )?))
        }
        EndpointKind::Simulated => {
            info!("Using simulated logging endpoint");
            Ok(Arc::new(
                SimulatedLogEndpoint::new()
                    .with_latency(Duration::from_millis(config.simulated.latency_ms))
                    .with_failure_rate(config.simulated.failure_rate)
                    .with_offline(config.simulated.offline),
            ))
        }
    }
}

/// Create the fallback sink selected by `fallback.sink`.
///
/// A JSONL sink that cannot open its file degrades to stderr.
pub fn build_sink(config: &FileConfig) -> Arc<dyn FallbackSink> {
    let stderr = || Arc::new(StderrFallbackSink::new(config.fallback.color));

    match (config.fallback.sink, &config.fallback.path) {
        (SinkKind::Jsonl, Some(path)) => match JsonlFallbackSink::new(path) {
            Some(sink) => Arc::new(sink),
            None => {
                warn!(path = %path.display(), "JSONL fallback sink unavailable, using stderr");
                stderr()
            }
        },
        (SinkKind::Jsonl, None) => {
            warn!("fallback.path is not configured, using stderr");
            stderr()
        }
        (SinkKind::Stderr, _) => stderr(),
    }
}

/// Create a logger wired to the configured endpoint and sink.
pub fn build_logger(config: &FileConfig) -> Result<ComponentLogger, EndpointError> {
    let endpoint = build_endpoint(config)?;
    let sink = build_sink(config);
    Ok(ComponentLogger::with_config(
        endpoint,
        sink,
        config.logger_config(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use complog_domain::SessionState;

    #[tokio::test]
    async fn test_default_config_builds_working_logger() {
        let logger = build_logger(&FileConfig::default()).unwrap();
        assert_eq!(logger.state(), SessionState::Uninitialized);

        logger.info("hello", None, None).await;

        assert_eq!(logger.state(), SessionState::Ready);
        assert!(logger.init().await.as_str().starts_with("SIM-"));
    }

    #[tokio::test]
    async fn test_offline_simulation_falls_back_to_local_id() {
        let mut config = FileConfig::default();
        config.simulated.offline = true;
        config.fallback.color = false;

        let logger = build_logger(&config).unwrap();
        assert!(logger.init().await.is_fallback());
    }

    #[test]
    fn test_json_rpc_without_url_is_an_error() {
        let mut config = FileConfig::default();
        config.endpoint.kind = EndpointKind::JsonRpc;
        assert!(build_endpoint(&config).is_err());
    }

    #[test]
    fn test_jsonl_sink_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = FileConfig::default();
        config.fallback.sink = SinkKind::Jsonl;
        config.fallback.path = Some(dir.path().join("fallback.jsonl"));

        let _sink = build_sink(&config);
        assert!(dir.path().join("fallback.jsonl").exists());
    }
}
