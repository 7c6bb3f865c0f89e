//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown log level: {0} (expected DEBUG, INFO, WARN, ERROR or FATAL)")]
    UnknownLevel(String),

    #[error("Invalid component name: {0}")]
    InvalidComponentName(String),

    #[error("Payload serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DomainError {
    /// Check if this error was caused by an unrecognized level string
    pub fn is_unknown_level(&self) -> bool {
        matches!(self, DomainError::UnknownLevel(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_display() {
        let error = DomainError::UnknownLevel("TRACE".to_string());
        assert!(error.to_string().starts_with("Unknown log level: TRACE"));
    }

    #[test]
    fn test_is_unknown_level_check() {
        assert!(DomainError::UnknownLevel("x".to_string()).is_unknown_level());
        assert!(!DomainError::InvalidComponentName(String::new()).is_unknown_level());
    }
}
