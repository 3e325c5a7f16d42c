//! Deploy Module
//!
//! Orchestrates a deployment to a remote compose host.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployReport`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use remote_deploy::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(&config, trust, executor);
//! let report = use_case.execute(&events)?;
//! ```

mod result;
mod use_case;

pub use result::DeployReport;
pub use use_case::DeployUseCase;
