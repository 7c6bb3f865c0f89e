//! Application-level configuration.
//!
//! - [`LoggerConfig`] — initial component tag and level threshold

pub mod logger_config;

pub use logger_config::LoggerConfig;
