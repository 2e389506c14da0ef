//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the SOAP/HTTP client for
//! vSphere and EAM, and the YAML config file store.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod eam_client;
pub mod soap;
pub mod xml;
