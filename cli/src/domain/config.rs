//! Connection configuration: file schema, precedence, and URL resolution.
//!
//! Pure functions only: no I/O and no filesystem access.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::error::ConnectionError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Path of the vSphere SDK endpoint (session manager, property collector).
pub const VIM_SDK_PATH: &str = "/sdk";
/// Path of the ESX Agent Manager SDK endpoint.
pub const EAM_SDK_PATH: &str = "/eam/sdk";

// ── Config schema ────────────────────────────────────────────────────────────

/// Configuration stored in `~/.eamctl/config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EamConfig {
    /// vSphere endpoint, e.g. `vc.example.com` or `https://vc.example.com/sdk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}

/// Connection values given as flags or environment variables.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub insecure: bool,
}

impl EamConfig {
    /// Layer command-line overrides on top of the file values.
    #[must_use]
    pub fn merge(self, overrides: &ConnectionOverrides) -> Self {
        Self {
            url: overrides.url.clone().or(self.url),
            username: overrides.username.clone().or(self.username),
            password: overrides.password.clone().or(self.password),
            insecure: overrides.insecure || self.insecure,
        }
    }
}

/// Fully resolved settings for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// `/sdk` endpoint with user info stripped.
    pub sdk_url: Url,
    pub username: String,
    pub password: String,
    pub insecure: bool,
}

impl ConnectionSettings {
    /// The EAM endpoint on the same origin as the SDK endpoint.
    #[must_use]
    pub fn eam_url(&self) -> Url {
        let mut url = self.sdk_url.clone();
        url.set_path(EAM_SDK_PATH);
        url.set_query(None);
        url
    }

    /// Host name used in user-facing messages.
    #[must_use]
    pub fn host(&self) -> &str {
        self.sdk_url.host_str().unwrap_or("vSphere")
    }
}

// ── Resolution ───────────────────────────────────────────────────────────────

/// Parse a vSphere URL the way `govc` does: a bare host gets `https://`, an
/// empty path becomes `/sdk`.
///
/// # Errors
///
/// Returns [`ConnectionError::InvalidUrl`] if the value cannot be parsed or has
/// no host.
pub fn parse_sdk_url(raw: &str) -> Result<Url, ConnectionError> {
    let invalid = |reason: String| ConnectionError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty URL".to_string()));
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    if url.path().is_empty() || url.path() == "/" {
        url.set_path(VIM_SDK_PATH);
    }
    Ok(url)
}

fn decoded(part: &str) -> Option<String> {
    if part.is_empty() {
        return None;
    }
    Some(percent_decode_str(part).decode_utf8_lossy().into_owned())
}

/// Resolve merged configuration into session settings.
///
/// Credentials given explicitly win over user info embedded in the URL.
///
/// # Errors
///
/// Returns a [`ConnectionError`] when the URL is missing or invalid, or when
/// no username/password can be found.
pub fn resolve_connection(config: &EamConfig) -> Result<ConnectionSettings, ConnectionError> {
    let raw = config.url.as_deref().ok_or(ConnectionError::MissingUrl)?;
    let mut sdk_url = parse_sdk_url(raw)?;

    let url_user = decoded(sdk_url.username());
    let url_password = sdk_url.password().and_then(decoded);
    // Url::set_username only fails for cannot-be-a-base URLs, which parse_sdk_url rejects.
    let _ = sdk_url.set_username("");
    let _ = sdk_url.set_password(None);

    let host = sdk_url.host_str().unwrap_or_default().to_string();
    let username = config.username.clone().or(url_user);
    let password = config.password.clone().or(url_password);
    let (Some(username), Some(password)) = (username, password) else {
        return Err(ConnectionError::MissingCredentials { host });
    };

    Ok(ConnectionSettings {
        sdk_url,
        username,
        password,
        insecure: config.insecure,
    })
}

// ── Unit tests ───────────────────────────────────────────────────────────────
