//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Runs the remote deploy pipeline
//!
//! ## Executors
//!
//! - `LiveExecutor` / `DryRunExecutor` - chosen once per run

pub mod deploy;
pub mod executor;

pub use deploy::{DeployReport, DeployUseCase};
pub use executor::{DryRunExecutor, LiveExecutor};
