//! Infrastructure layer for complog
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod endpoint;
pub mod factory;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, EndpointKind, FileConfig, FileEndpointConfig,
    FileFallbackConfig, FileLoggerConfig, FileSimulatedConfig, SinkKind,
};
pub use endpoint::{JsonRpcLogEndpoint, SimulatedLogEndpoint};
pub use factory::{build_endpoint, build_logger, build_sink};
pub use logging::{JsonlFallbackSink, StderrFallbackSink};
