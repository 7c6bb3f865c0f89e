//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use complog_application::LoggerConfig;
use complog_domain::{ComponentName, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("endpoint.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("endpoint.url is required when endpoint.kind = \"json_rpc\"")]
    MissingEndpointUrl,

    #[error("simulated.failure_rate must be between 0 and 1, got {0}")]
    InvalidFailureRate(f64),

    #[error("fallback.path is required when fallback.sink = \"jsonl\"")]
    MissingFallbackPath,

    #[error("logger.component cannot be empty")]
    EmptyComponentName,
}

/// Raw logger configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Component tag used until a component names itself
    pub component: Option<String>,
    /// Minimum level sent anywhere
    pub min_level: LogLevel,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self {
            component: None,
            min_level: LogLevel::Debug,
        }
    }
}

/// Which logging service adapter to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    /// JSON-RPC 2.0 over HTTP
    JsonRpc,
    /// In-memory stand-in
    #[default]
    Simulated,
}

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    pub kind: EndpointKind,
    /// Service URL (json_rpc only)
    pub url: Option<String>,
    /// Timeout in seconds for each request
    pub timeout_seconds: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            kind: EndpointKind::default(),
            url: None,
            timeout_seconds: 10,
        }
    }
}

impl FileEndpointConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw simulated-endpoint configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulatedConfig {
    /// Delay applied to every call, in milliseconds
    pub latency_ms: u64,
    /// Probability in [0, 1] that a call fails
    pub failure_rate: f64,
    /// Reject every call
    pub offline: bool,
}

/// Which fallback sink to write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    #[default]
    Stderr,
    Jsonl,
}

/// Raw fallback sink configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFallbackConfig {
    pub sink: SinkKind,
    /// File path (jsonl only)
    pub path: Option<PathBuf>,
    /// Enable colored level tags (stderr only)
    pub color: bool,
}

impl Default for FileFallbackConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::default(),
            path: None,
            color: true,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub logger: FileLoggerConfig,
    pub endpoint: FileEndpointConfig,
    pub simulated: FileSimulatedConfig,
    pub fallback: FileFallbackConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.endpoint.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.endpoint.kind == EndpointKind::JsonRpc
            && self
                .endpoint
                .url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigValidationError::MissingEndpointUrl);
        }

        let rate = self.simulated.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigValidationError::InvalidFailureRate(rate));
        }

        if self.fallback.sink == SinkKind::Jsonl && self.fallback.path.is_none() {
            return Err(ConfigValidationError::MissingFallbackPath);
        }

        if let Some(component) = &self.logger.component
            && component.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyComponentName);
        }

        Ok(())
    }

    /// Application-level logger settings
    pub fn logger_config(&self) -> LoggerConfig {
        let config = LoggerConfig::default().with_min_level(self.logger.min_level);
        match &self.logger.component {
            Some(name) => config.with_component(ComponentName::from(name.as_str())),
            None => config,
        }
    }
}
