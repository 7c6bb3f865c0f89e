//! Component name value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag identifying the UI unit that emitted a log event.
///
/// Defaults to the sentinel `"Unknown"` until a component names itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Sentinel used before any component sets its name
    pub const UNKNOWN: &'static str = "Unknown";

    /// Create a component name, rejecting blank input.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidComponentName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is still the default sentinel
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl Default for ComponentName {
    fn default() -> Self {
        Self(Self::UNKNOWN.to_string())
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    /// Blank names fall back to the sentinel.
    fn from(name: &str) -> Self {
        Self::new(name).unwrap_or_default()
    }
}

impl From<String> for ComponentName {
    fn from(name: String) -> Self {
        Self::new(name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        let name = ComponentName::default();
        assert_eq!(name.as_str(), "Unknown");
        assert!(name.is_unknown());
    }

    #[test]
    fn test_new_rejects_blank() {
        assert!(ComponentName::new("").is_err());
        assert!(ComponentName::new("   ").is_err());
        assert_eq!(ComponentName::new("Widget").unwrap().as_str(), "Widget");
    }

    #[test]
    fn test_from_blank_falls_back_to_sentinel() {
        assert!(ComponentName::from("").is_unknown());
        assert_eq!(ComponentName::from("Widget").to_string(), "Widget");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&ComponentName::from("Widget")).unwrap();
        assert_eq!(json, "\"Widget\"");
    }
}
