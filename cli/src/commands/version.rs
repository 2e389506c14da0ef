//! Version command

use std::io::Write;

use anyhow::Result;

use crate::app::AppContext;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run(app: &AppContext, out: &mut impl Write) -> Result<()> {
    app.renderer().render_version(out, env!("CARGO_PKG_VERSION"))
}
