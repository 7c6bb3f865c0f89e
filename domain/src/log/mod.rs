//! Log record value objects.
//!
//! - [`level::LogLevel`] — the fixed severity taxonomy
//! - [`component::ComponentName`] — tag identifying the calling UI unit
//! - [`payload::LogPayload`] — typed structured data attached to a record
//! - [`record::LogRecord`] — one log event as the caller describes it
//! - [`entry::ComponentLogEntry`] — the transport form sent to the endpoint

pub mod component;
pub mod entry;
pub mod level;
pub mod payload;
pub mod record;
