//! Session identity.
//!
//! - [`transaction_id::TransactionId`] — the opaque id grouping a process's log events
//! - [`state::SessionState`] — the one-way initialization lifecycle

pub mod state;
pub mod transaction_id;
