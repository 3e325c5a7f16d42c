//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives with the CLI presentation code.

mod json;

pub use json::JsonEventSink;
