//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Connection errors ─────────────────────────────────────────────────────────

/// Errors raised while resolving settings or opening a session.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("No vSphere URL configured. Pass --url, set GOVC_URL, or add `url` to the config file.")]
    MissingUrl,

    #[error("Invalid vSphere URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("No credentials for {host}. Pass --username/--password or embed them in the URL.")]
    MissingCredentials { host: String },

    #[error("Login to {host} failed: {message}")]
    LoginFailed { host: String, message: String },

    #[error("Login to {host} returned no session cookie.")]
    NoSessionCookie { host: String },
}

// ── Remote call errors ────────────────────────────────────────────────────────

/// Errors returned by a remote SOAP call.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// A SOAP fault from the server, e.g. `ServerFaultCode: ...`.
    #[error("{code}: {message}")]
    Fault {
        code: String,
        message: String,
        /// Name of the first element under `<detail>`, e.g. `NotFoundFault`.
        kind: Option<String>,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Http { status: u16, endpoint: String },

    #[error("Malformed {method} response: {detail}")]
    Malformed { method: String, detail: String },
}

impl RemoteError {
    /// Returns `true` for protocol-level SOAP faults.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault { .. })
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the on-disk configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {message}")]
    Invalid { path: String, message: String },

    #[error("Cannot determine home directory. Set EAMCTL_CONFIG instead.")]
    NoHome,
}
