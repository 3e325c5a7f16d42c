//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compose;
mod health;
mod log_entry;
mod secret;
mod ssh_target;
mod step;

pub use compose::ComposeProject;
pub use health::HealthStatus;
pub use log_entry::{DeployLogEntry, UNKNOWN_DIGEST};
pub use secret::Secret;
pub use ssh_target::SshTarget;
pub use step::{Fatality, Step};
