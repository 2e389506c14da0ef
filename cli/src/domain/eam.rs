//! View types assembled from EAM responses for a single command run.

use std::collections::BTreeMap;

use eam_common::{AgencyConfigInfo, ManagedObjectReference};

/// An agency together with its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyEntry {
    pub agency: ManagedObjectReference,
    pub config: AgencyConfigInfo,
}

/// The VM backing an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VmDescriptor {
    pub moref: ManagedObjectReference,
    pub name: String,
}

/// An agent joined with the agency it was enumerated under and its VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentView {
    pub agency: ManagedObjectReference,
    pub agent: ManagedObjectReference,
    pub vm: VmDescriptor,
}

/// Outcome of resolving a single agent's VM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentResolution {
    Resolved(AgentView),
    /// The agent's runtime names no VM; it is left out of listings.
    NoVm { agent: ManagedObjectReference },
}

/// Properties of one managed object, as returned by the property collector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectContent {
    pub obj: Option<ManagedObjectReference>,
    pub properties: BTreeMap<String, String>,
}

impl ObjectContent {
    /// Value of a single property, if the server returned it.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
