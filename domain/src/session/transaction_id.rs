//! Transaction id value object

use crate::util::random_base36;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier correlating all log events of one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Prefix of locally generated ids
    pub const FALLBACK_PREFIX: &'static str = "LOCAL_";

    const SUFFIX_LEN: usize = 9;

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a local id for when the logging service cannot provide one.
    ///
    /// Format: `LOCAL_<unix millis>_<9 base36 chars>`.
    pub fn fallback() -> Self {
        Self(format!(
            "{}{}_{}",
            Self::FALLBACK_PREFIX,
            chrono::Utc::now().timestamp_millis(),
            random_base36(Self::SUFFIX_LEN)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this id was generated locally
    pub fn is_fallback(&self) -> bool {
        self.0.starts_with(Self::FALLBACK_PREFIX)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
