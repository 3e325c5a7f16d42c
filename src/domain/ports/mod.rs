//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod executor;
pub mod remote_host;
pub mod trust_provider;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use executor::{Action, ExecutionError, ExecutionMode, Executor, Outcome};
pub use remote_host::{CommandOutput, RemoteCommand, RemoteError, RemoteHost};
pub use trust_provider::{AgentEnv, TrustError, TrustProvider};
