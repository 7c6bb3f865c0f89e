//! Log endpoint port
//!
//! Defines the interface of the remote logging service. The service is an
//! opaque asynchronous RPC with two operations; either may fail with any
//! error, and the logger treats every failure the same way.

use async_trait::async_trait;
use complog_domain::ComponentLogEntry;
use thiserror::Error;

/// Errors that can occur when talking to the logging service
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error (code {code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Logging service unavailable")]
    Unavailable,

    #[error("Other error: {0}")]
    Other(String),
}

/// Remote logging service
///
/// This port defines how the logger talks to the service that persists log
/// events. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LogEndpoint: Send + Sync {
    /// Obtain the session/transaction id for this process.
    async fn get_transaction_id(&self) -> Result<String, EndpointError>;

    /// Persist one log event.
    async fn log_from_component(&self, entry: &ComponentLogEntry) -> Result<(), EndpointError>;
}
