//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//! - `remote` - SshHost (ssh + rsync)
//! - `trust` - SystemTrust (known_hosts + ssh-agent)
//! - `events` - JsonEventSink

pub mod events;
pub mod remote;
pub mod trust;

pub use events::JsonEventSink;
pub use remote::SshHost;
pub use trust::SystemTrust;
