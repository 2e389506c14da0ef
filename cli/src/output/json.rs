//! JSON output: listing documents and the error object used by all `--json`
//! code paths when a command fails.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{
    AgencyEntry, AgentView, ConfigError, ConnectionError, EamConfig, RemoteError, VmDescriptor,
};

/// Renders domain types as pretty-printed JSON documents.
pub struct JsonRenderer;

#[derive(Serialize)]
struct AgencyRow<'a> {
    id: &'a str,
    name: &'a str,
    agent_name: &'a str,
}

#[derive(Serialize)]
struct AgentRow<'a> {
    agency: &'a str,
    agent: &'a str,
    vm: VmRow<'a>,
}

#[derive(Serialize)]
struct VmRow<'a> {
    moref: &'a str,
    name: &'a str,
}

impl<'a> From<&'a VmDescriptor> for VmRow<'a> {
    fn from(vm: &'a VmDescriptor) -> Self {
        Self {
            moref: &vm.moref.value,
            name: &vm.name,
        }
    }
}

impl JsonRenderer {
    /// Render `{"agencies": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn render_agencies(&self, out: &mut impl Write, entries: &[AgencyEntry]) -> Result<()> {
        let agencies: Vec<AgencyRow<'_>> = entries
            .iter()
            .map(|e| AgencyRow {
                id: &e.agency.value,
                name: &e.config.agency_name,
                agent_name: &e.config.agent_name,
            })
            .collect();
        write_pretty(out, &serde_json::json!({ "agencies": agencies }))
    }

    /// Render `{"agents": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn render_agents(&self, out: &mut impl Write, views: &[AgentView]) -> Result<()> {
        let agents: Vec<AgentRow<'_>> = views
            .iter()
            .map(|v| AgentRow {
                agency: &v.agency.value,
                agent: &v.agent.value,
                vm: VmRow::from(&v.vm),
            })
            .collect();
        write_pretty(out, &serde_json::json!({ "agents": agents }))
    }

    /// Render the effective configuration with the password masked.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn render_config(
        &self,
        out: &mut impl Write,
        config: &EamConfig,
        path: &std::path::Path,
    ) -> Result<()> {
        let masked = EamConfig {
            password: config.password.as_ref().map(|_| "********".to_string()),
            ..config.clone()
        };
        write_pretty(
            out,
            &serde_json::json!({ "path": path.display().to_string(), "config": masked }),
        )
    }

    /// Render `{"version": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn render_version(&self, out: &mut impl Write, version: &str) -> Result<()> {
        write_pretty(out, &serde_json::json!({ "version": version }))
    }
}

fn write_pretty(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    writeln!(out, "{text}")?;
    Ok(())
}

/// Machine-readable code for a failed command.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<ConnectionError>().is_some() {
        "CONNECTION_ERROR"
    } else if let Some(remote) = err.downcast_ref::<RemoteError>() {
        if remote.is_fault() {
            "REMOTE_FAULT"
        } else {
            "REMOTE_ERROR"
        }
    } else if err.downcast_ref::<ConfigError>().is_some() {
        "CONFIG_ERROR"
    } else {
        "ERROR"
    }
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
