//! Shared utility functions.

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an ISO-8601 string with millisecond precision,
/// e.g. `2024-05-01T12:30:45.123Z`.
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base36 string of the given length.
pub fn random_base36(len: usize) -> String {
    (0..len)
        .map(|_| BASE36[fastrand::usize(..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_utc_millis() {
        let ts = now_iso8601();
        assert!(ts.ends_with('Z'));
        // 2024-05-01T12:30:45.123Z
        assert_eq!(ts.len(), 24);
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn base36_has_requested_length() {
        assert_eq!(random_base36(9).len(), 9);
        assert!(random_base36(0).is_empty());
    }

    #[test]
    fn base36_alphabet_only() {
        let s = random_base36(64);
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
