//! Application context: unified state passed to every command handler.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::{ConnectionOverrides, ConnectionSettings, resolve_connection};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress progress output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()`.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Connection values from flags and environment.
    pub overrides: ConnectionOverrides,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags, overrides: ConnectionOverrides) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            overrides,
        }
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter drawing on stderr.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter {
        TerminalReporter::new(&self.output)
    }

    /// Resolve the session settings: flags and environment over the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is unreadable, or if no usable URL
    /// or credentials remain after merging.
    pub fn connection_settings(&self, store: &impl ConfigStore) -> Result<ConnectionSettings> {
        let config = store.load()?.merge(&self.overrides);
        Ok(resolve_connection(&config)?)
    }
}
