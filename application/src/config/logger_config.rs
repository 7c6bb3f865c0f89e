//! Logger configuration

use complog_domain::{ComponentName, LogLevel};

/// Static settings for a [`ComponentLogger`](crate::ComponentLogger).
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Component tag used until a component sets its own name.
    pub component: ComponentName,
    /// Records below this level are dropped before any I/O.
    pub min_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            component: ComponentName::default(),
            min_level: LogLevel::Debug,
        }
    }
}

impl LoggerConfig {
    pub fn with_component(mut self, component: impl Into<ComponentName>) -> Self {
        self.component = component.into();
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Check if a record at `level` passes the threshold
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passes_everything() {
        let config = LoggerConfig::default();
        assert!(config.component.is_unknown());
        for level in LogLevel::ALL {
            assert!(config.enabled(level));
        }
    }

    #[test]
    fn test_min_level_threshold() {
        let config = LoggerConfig::default().with_min_level(LogLevel::Warn);
        assert!(!config.enabled(LogLevel::Info));
        assert!(config.enabled(LogLevel::Warn));
        assert!(config.enabled(LogLevel::Fatal));
    }
}
