//! Domain layer: pure value types, validation, and connection resolution.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod eam;
pub mod error;

pub use config::{ConnectionOverrides, ConnectionSettings, EamConfig, resolve_connection};
pub use eam::{AgencyEntry, AgentResolution, AgentView, ObjectContent, VmDescriptor};
pub use error::{ConfigError, ConnectionError, RemoteError};
