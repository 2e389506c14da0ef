//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Application services report each remote step; the reporter shows them on a
//! stderr spinner so stdout stays reserved for the table or JSON document.

use indicatif::ProgressBar;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter.
///
/// Draws nothing when stderr is not a TTY or `--quiet` is set.
pub struct TerminalReporter {
    spinner: Option<ProgressBar>,
}

impl TerminalReporter {
    /// Create a reporter for the given output context.
    #[must_use]
    pub fn new(ctx: &OutputContext) -> Self {
        Self {
            spinner: ctx.show_progress().then(|| progress::spinner("contacting ESX Agent Manager...")),
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn step(&self, message: &str) {
        tracing::trace!(message, "progress");
        if let Some(pb) = &self.spinner {
            pb.set_message(message.to_string());
        }
    }

    fn finish(&self) {
        if let Some(pb) = &self.spinner {
            pb.finish_and_clear();
        }
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
