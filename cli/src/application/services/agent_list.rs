//! Application service: list agents across all agencies with their VMs.

use anyhow::{Result, anyhow};
use eam_common::ManagedObjectReference;

use crate::application::ports::{
    AgencyManager, AgentInspector, ProgressReporter, PropertyCollector,
};
use crate::domain::{AgentResolution, AgentView, RemoteError, VmDescriptor};

/// VM property shown in the agent listing.
const VM_NAME_PROPERTY: &str = "name";

/// Enumerate every agent of every agency and resolve its VM.
///
/// Rows are ordered by agency, then by agent within the agency. Agents whose
/// runtime names no VM are skipped.
///
/// # Errors
///
/// Returns the first remote error unchanged; nothing is returned on failure.
pub async fn list_agents(
    api: &(impl AgencyManager + AgentInspector + PropertyCollector),
    reporter: &impl ProgressReporter,
) -> Result<Vec<AgentView>> {
    reporter.step("querying agencies...");
    let agencies = api.agencies().await?;

    let mut views = Vec::new();
    for agency in agencies {
        reporter.step(&format!("querying agents of {}...", agency.value));
        let agents = api.agents(&agency).await?;
        tracing::debug!(agency = %agency, count = agents.len(), "enumerated agents");

        for agent in agents {
            match resolve_agent(api, &agency, agent).await? {
                AgentResolution::Resolved(view) => views.push(view),
                AgentResolution::NoVm { agent } => {
                    tracing::debug!(%agency, %agent, "agent has no VM, skipping");
                }
            }
        }
    }
    Ok(views)
}

/// Resolve one agent's runtime VM and fetch the VM's name.
///
/// # Errors
///
/// Returns an error if either remote call fails, or if the property collector
/// answers without a `name` for the VM.
pub async fn resolve_agent(
    api: &(impl AgentInspector + PropertyCollector),
    agency: &ManagedObjectReference,
    agent: ManagedObjectReference,
) -> Result<AgentResolution> {
    let runtime = api.agent_runtime(&agent).await?;
    let Some(vm) = runtime.vm else {
        return Ok(AgentResolution::NoVm { agent });
    };

    let content = api.retrieve_one(&vm, &[VM_NAME_PROPERTY]).await?;
    let name = content
        .property(VM_NAME_PROPERTY)
        .ok_or_else(|| {
            anyhow!(RemoteError::Malformed {
                method: "RetrievePropertiesEx".to_string(),
                detail: format!("no `{VM_NAME_PROPERTY}` property for {vm}"),
            })
        })?
        .to_string();

    Ok(AgentResolution::Resolved(AgentView {
        agency: agency.clone(),
        agent,
        vm: VmDescriptor { moref: vm, name },
    }))
}
