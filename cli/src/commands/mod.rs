//! Command implementations

pub mod config;
pub mod destroy;
pub mod list;
pub mod version;

use std::io::Write;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::EamApi;

/// A remote EAM command.
///
/// Each command owns its arguments. `process` validates them before any
/// connection is opened; `run` performs the remote calls against an already
/// connected client and writes the result to `out`.
#[allow(async_fn_in_trait)]
pub trait EamCommand: clap::Args {
    /// Add this command's flags to `cmd`.
    #[must_use]
    fn register(cmd: clap::Command) -> clap::Command {
        Self::augment_args(cmd)
    }

    /// Validate parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is unusable.
    fn process(&self) -> Result<()> {
        Ok(())
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns the first remote error unchanged, or an error if writing fails.
    async fn run(&self, api: &impl EamApi, app: &AppContext, out: &mut impl Write) -> Result<()>;
}
