//! Domain Services
//!
//! Pure functions over domain types; no I/O.

pub mod remote_script;

pub use remote_script::{render, shell_quote, PROBE_TOOL_MISSING};
