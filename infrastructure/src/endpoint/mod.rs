//! Logging service adapters.
//!
//! - [`JsonRpcLogEndpoint`] — the real service, JSON-RPC 2.0 over HTTP
//! - [`SimulatedLogEndpoint`] — in-memory stand-in with latency and failures

mod json_rpc;
pub mod protocol;
mod simulated;

pub use json_rpc::JsonRpcLogEndpoint;
pub use simulated::SimulatedLogEndpoint;
