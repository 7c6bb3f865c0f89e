//! Application layer for complog
//!
//! This crate contains the logger facade, the session context, port
//! definitions and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use ports::{
    fallback_sink::{
        DeliveryError, FallbackSink, MemoryFallbackSink, NoFallbackSink, OwnedSinkEvent, SinkEvent,
    },
    log_endpoint::{EndpointError, LogEndpoint},
};
pub use use_cases::component_logger::ComponentLogger;
pub use use_cases::scoped_logger::ScopedLogger;
pub use use_cases::session_context::SessionContext;
