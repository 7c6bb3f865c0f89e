//! Domain layer for complog
//!
//! This crate contains the value objects of the component logger.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Log records
//!
//! A [`LogRecord`] is what a UI component wants to tell the logging service:
//! a [`ComponentName`] tag, a [`LogLevel`], a message, an optional record id
//! and an optional structured [`LogPayload`]. Records are ephemeral and are
//! turned into a [`ComponentLogEntry`] only at the transport boundary.
//!
//! ## Sessions
//!
//! Every log event belongs to one [`TransactionId`], obtained once per
//! process from the logging service or generated locally when the service
//! is unreachable.

pub mod core;
pub mod log;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use log::{
    component::ComponentName,
    entry::ComponentLogEntry,
    level::LogLevel,
    payload::{ErrorInfo, LogPayload, PerformanceInfo},
    record::LogRecord,
};
pub use session::{state::SessionState, transaction_id::TransactionId};
