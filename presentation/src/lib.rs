//! Presentation layer for complog
//!
//! This crate contains the CLI definitions and a demo UI component that
//! exercises the logger through simulated lifecycle hooks.

pub mod cli;
pub mod demo;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use demo::example_component::{ExampleComponent, FetchError, Item, SimulatedSource};
