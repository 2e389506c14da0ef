//! Application service: destroy an agency by identifier.

use anyhow::Result;
use eam_common::ManagedObjectReference;

use crate::application::ports::AgencyManager;
use crate::domain::RemoteError;

/// Destroy the agency with the given identifier.
///
/// The reference is built with the fixed `Agency` type tag; no lookup is made
/// first, so an unknown id surfaces as the server's fault.
///
/// # Errors
///
/// Returns the remote error unchanged.
pub async fn destroy_agency(api: &impl AgencyManager, id: &str) -> Result<()> {
    let agency = ManagedObjectReference::agency(id);
    tracing::debug!(%agency, "destroying agency");

    if let Err(err) = api.destroy_agency(&agency).await {
        if let Some(fault) = err.downcast_ref::<RemoteError>().filter(|e| e.is_fault()) {
            tracing::debug!(%agency, %fault, "DestroyAgency faulted");
        }
        return Err(err);
    }
    Ok(())
}
