//! `eamctl list`: tabulate agencies or agents.

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::ports::{EamApi, ProgressReporter};
use crate::application::services::{agency_list, agent_list};
use crate::commands::EamCommand;

/// List subcommands.
#[derive(Subcommand)]
pub enum ListCommand {
    /// List all agencies with their names
    Agencies(AgenciesArgs),
    /// List all agents with their VMs
    Agents(AgentsArgs),
}

/// Arguments for `list agencies`.
#[derive(Args, Debug, Default)]
pub struct AgenciesArgs {}

/// Arguments for `list agents`.
#[derive(Args, Debug, Default)]
pub struct AgentsArgs {}

impl EamCommand for AgenciesArgs {
    async fn run(&self, api: &impl EamApi, app: &AppContext, out: &mut impl Write) -> Result<()> {
        let reporter = app.reporter();
        let entries = agency_list::list_agencies(api, &reporter).await?;
        reporter.finish();
        app.renderer().render_agencies(out, &entries)
    }
}

impl EamCommand for AgentsArgs {
    async fn run(&self, api: &impl EamApi, app: &AppContext, out: &mut impl Write) -> Result<()> {
        let reporter = app.reporter();
        let views = agent_list::list_agents(api, &reporter).await?;
        reporter.finish();
        app.renderer().render_agents(out, &views)
    }
}
