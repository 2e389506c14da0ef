//! `eamctl config`: inspect the effective connection configuration.

use std::io::Write;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration (password masked)
    Show,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or output fails.
pub fn run(
    app: &AppContext,
    cmd: &ConfigCommand,
    store: &impl ConfigStore,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = store.load()?.merge(&app.overrides);
            let path = store.path()?;
            app.renderer().render_config(out, &config, &path)
        }
    }
}
