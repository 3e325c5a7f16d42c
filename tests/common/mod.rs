//! Common test utilities for remote-deploy integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus fake OpenSSH tools
//! - Fixtures: compose stack files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
