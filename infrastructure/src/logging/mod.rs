//! Fallback sinks — local output for undelivered log events.
//!
//! Provides [`StderrFallbackSink`], the default console sink, and
//! [`JsonlFallbackSink`], a JSONL file writer for later inspection. Both
//! implement the [`FallbackSink`](complog_application::FallbackSink) port.

mod jsonl_sink;
mod stderr_sink;

pub use jsonl_sink::JsonlFallbackSink;
pub use stderr_sink::StderrFallbackSink;
