//! `eamctl destroy`: remove an agency and its agents.

use std::io::Write;

use anyhow::{Result, ensure};
use clap::{Args, Subcommand};

use crate::app::AppContext;
use crate::application::ports::EamApi;
use crate::application::services::agency_destroy;
use crate::commands::EamCommand;

/// Destroy subcommands.
#[derive(Subcommand)]
pub enum DestroyCommand {
    /// Destroy an agency
    Agency(DestroyAgencyArgs),
}

/// Arguments for `destroy agency`.
#[derive(Args, Debug)]
pub struct DestroyAgencyArgs {
    /// Agency identifier, e.g. `agency-12` as shown by `list agencies`
    #[arg(long, value_name = "ID")]
    pub agency: String,
}

impl EamCommand for DestroyAgencyArgs {
    fn process(&self) -> Result<()> {
        ensure!(
            !self.agency.trim().is_empty(),
            "--agency must name an agency id"
        );
        Ok(())
    }

    async fn run(&self, api: &impl EamApi, _app: &AppContext, _out: &mut impl Write) -> Result<()> {
        agency_destroy::destroy_agency(api, &self.agency).await
    }
}
