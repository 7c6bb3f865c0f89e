//! Configuration file loading for complog
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COMPLOG_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./complog.toml` or `./.complog.toml`
//! 4. Global: `$XDG_CONFIG_HOME/complog/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, EndpointKind, FileConfig, FileEndpointConfig, FileFallbackConfig,
    FileLoggerConfig, FileSimulatedConfig, SinkKind,
};
pub use loader::ConfigLoader;
