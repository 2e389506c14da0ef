//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod table;

use std::io::Write;

use anyhow::Result;
use console::Term;
use owo_colors::{OwoColorize as _, Style};

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::TerminalReporter;

use crate::domain::{AgencyEntry, AgentView, EamConfig};

/// Output context carrying styling and terminal state.
///
/// Styles are plain (`Style::new()`) unless colors are enabled.
pub struct OutputContext {
    /// `Error:` prefix on stderr.
    pub error_style: Style,
    /// Section titles, e.g. the `config show` heading.
    pub title_style: Style,
    /// `key:` labels in `config show`.
    pub label_style: Style,
    /// Whether stderr is a TTY (progress is drawn there).
    pub stderr_is_tty: bool,
    /// Whether to suppress progress output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var_os("NO_COLOR").is_none();
        Self::with_colors(use_colors, quiet)
    }

    /// Create output context with colors forced on or off.
    #[must_use]
    pub fn with_colors(use_colors: bool, quiet: bool) -> Self {
        let paint = |style: Style| if use_colors { style } else { Style::new() };
        Self {
            error_style: paint(Style::new().red()),
            title_style: paint(Style::new().bold().cyan()),
            label_style: paint(Style::new().dimmed()),
            stderr_is_tty: Term::stderr().is_term(),
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.stderr_is_tty && !self.quiet
    }

    /// Print an error message to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "Error:".style(self.error_style));
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the agency listing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_agencies(&self, out: &mut impl Write, entries: &[AgencyEntry]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_agencies(out, entries),
            Self::Json(r) => r.render_agencies(out, entries),
        }
    }

    /// Render the agent listing.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_agents(&self, out: &mut impl Write, views: &[AgentView]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_agents(out, views),
            Self::Json(r) => r.render_agents(out, views),
        }
    }

    /// Render the effective configuration.
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
        match self {
            Self::Human(r) => r.render_config(out, config, path),
            Self::Json(r) => r.render_config(out, config, path),
        }
    }

    /// Render the version.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_version(&self, out: &mut impl Write, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => r.render_version(out, version),
            Self::Json(r) => r.render_version(out, version),
        }
    }
}
