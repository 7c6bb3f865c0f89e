//! Demo component driving the logger through a UI-style lifecycle.

pub mod example_component;
