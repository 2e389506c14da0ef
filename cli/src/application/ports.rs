//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `eam_common`, never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use anyhow::Result;
use eam_common::{AgencyConfigInfo, AgentRuntimeInfo, ManagedObjectReference};

use crate::domain::{EamConfig, ObjectContent};

// ── EAM Port Traits ───────────────────────────────────────────────────────────

/// Agency operations on the ESX Agent Manager.
#[allow(async_fn_in_trait)]
pub trait AgencyManager {
    /// Enumerate every agency, in server order.
    async fn agencies(&self) -> Result<Vec<ManagedObjectReference>>;
    /// Fetch the configuration of one agency.
    async fn agency_config(&self, agency: &ManagedObjectReference) -> Result<AgencyConfigInfo>;
    /// Enumerate the agents of one agency, in server order.
    async fn agents(
        &self,
        agency: &ManagedObjectReference,
    ) -> Result<Vec<ManagedObjectReference>>;
    /// Destroy an agency. The server removes its agents as well.
    async fn destroy_agency(&self, agency: &ManagedObjectReference) -> Result<()>;
}

/// Agent runtime inspection.
#[allow(async_fn_in_trait)]
pub trait AgentInspector {
    /// Fetch the runtime info of one agent.
    async fn agent_runtime(&self, agent: &ManagedObjectReference) -> Result<AgentRuntimeInfo>;
}

/// Generic property retrieval on the vSphere side.
#[allow(async_fn_in_trait)]
pub trait PropertyCollector {
    /// Retrieve the named properties of a single object.
    async fn retrieve_one(
        &self,
        obj: &ManagedObjectReference,
        properties: &[&str],
    ) -> Result<ObjectContent>;
}

/// Composite trait: everything the EAM commands need from a connected client.
pub trait EamApi: AgencyManager + AgentInspector + PropertyCollector {}

/// Blanket implementation: any type implementing all three sub-traits is an `EamApi`.
impl<T> EamApi for T where T: AgencyManager + AgentInspector + PropertyCollector {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait, no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Clear any progress display before results are printed.
    fn finish(&self);
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading of the on-disk configuration.
pub trait ConfigStore {
    /// Load the configuration, returning defaults if no file exists.
    fn load(&self) -> Result<EamConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<std::path::PathBuf>;
}
