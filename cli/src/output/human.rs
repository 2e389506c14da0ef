//! Human-readable terminal renderer.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::domain::{AgencyEntry, AgentView, EamConfig};
use crate::output::OutputContext;
use crate::output::table::TabularWriter;

/// Column headers of `list agencies`.
pub const AGENCY_HEADERS: [&str; 3] = ["Agency ID", "Agency Name", "Agent name"];
/// Column headers of `list agents`.
pub const AGENT_HEADERS: [&str; 4] = ["Agency", "Agent ID", "Agent VM moref", "Agent VM name"];

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the agency table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_agencies(&self, out: &mut impl Write, entries: &[AgencyEntry]) -> Result<()> {
        let mut table = TabularWriter::new(&AGENCY_HEADERS);
        for entry in entries {
            table.add_row([
                entry.agency.value.as_str(),
                entry.config.agency_name.as_str(),
                entry.config.agent_name.as_str(),
            ]);
        }
        table.write_to(out)?;
        Ok(())
    }

    /// Render the agent table.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_agents(&self, out: &mut impl Write, views: &[AgentView]) -> Result<()> {
        let mut table = TabularWriter::new(&AGENT_HEADERS);
        for view in views {
            table.add_row([
                view.agency.value.as_str(),
                view.agent.value.as_str(),
                view.vm.moref.value.as_str(),
                view.vm.name.as_str(),
            ]);
        }
        table.write_to(out)?;
        Ok(())
    }

    /// Render the effective connection configuration, password masked.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_config(
        &self,
        out: &mut impl Write,
        config: &EamConfig,
        path: &std::path::Path,
    ) -> Result<()> {
        let unset = "(not set)";
        writeln!(
            out,
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.title_style)
        )?;
        writeln!(out)?;
        let rows = [
            ("url:", config.url.as_deref().unwrap_or(unset)),
            ("username:", config.username.as_deref().unwrap_or(unset)),
            ("password:", config.password.as_ref().map_or(unset, |_| "********")),
            ("insecure:", if config.insecure { "true" } else { "false" }),
        ];
        for (key, value) in rows {
            writeln!(out, "  {:<12}{value}", key.style(self.ctx.label_style))?;
        }
        Ok(())
    }

    /// Render the CLI version information.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_version(&self, out: &mut impl Write, version: &str) -> Result<()> {
        writeln!(out, "eamctl {version}")?;
        Ok(())
    }
}
