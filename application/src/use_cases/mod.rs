//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod component_logger;
pub mod scoped_logger;
pub mod session_context;
