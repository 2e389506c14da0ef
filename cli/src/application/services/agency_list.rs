//! Application service: list agencies with their configuration.

use anyhow::Result;

use crate::application::ports::{AgencyManager, ProgressReporter};
use crate::domain::AgencyEntry;

/// Enumerate all agencies and fetch each one's configuration.
///
/// Entries keep the order the server returned the agencies in.
///
/// # Errors
///
/// Returns the first remote error unchanged; nothing is returned on failure.
pub async fn list_agencies(
    api: &impl AgencyManager,
    reporter: &impl ProgressReporter,
) -> Result<Vec<AgencyEntry>> {
    reporter.step("querying agencies...");
    let agencies = api.agencies().await?;
    tracing::debug!(count = agencies.len(), "enumerated agencies");

    let mut entries = Vec::with_capacity(agencies.len());
    for agency in agencies {
        reporter.step(&format!("reading config of {}...", agency.value));
        let config = api.agency_config(&agency).await?;
        entries.push(AgencyEntry { agency, config });
    }
    Ok(entries)
}
