//! Domain Layer
//!
//! Pure deploy vocabulary without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (SshTarget, Step, DeployLogEntry)
//! - `services/` - Pure helpers (remote shell script rendering)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
