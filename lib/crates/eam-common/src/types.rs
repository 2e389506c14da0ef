//! Wire-level value types shared by the ESX Agent Manager client and CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag of an EAM agency.
pub const AGENCY_TYPE: &str = "Agency";
/// Type tag of an EAM agent.
pub const AGENT_TYPE: &str = "Agent";
/// Type tag of a vSphere virtual machine.
pub const VIRTUAL_MACHINE_TYPE: &str = "VirtualMachine";

/// Opaque `(type, value)` identifier for a remotely managed entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManagedObjectReference {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl ManagedObjectReference {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Reference to an agency with the given identifier.
    #[must_use]
    pub fn agency(id: &str) -> Self {
        Self::new(AGENCY_TYPE, id)
    }

    /// The EAM root object every agency hangs off.
    #[must_use]
    pub fn esx_agent_manager() -> Self {
        Self::new("EsxAgentManager", "EsxAgentManager")
    }

    /// The vSphere property collector singleton.
    #[must_use]
    pub fn property_collector() -> Self {
        Self::new("PropertyCollector", "propertyCollector")
    }

    /// The vSphere session manager singleton.
    #[must_use]
    pub fn session_manager() -> Self {
        Self::new("SessionManager", "SessionManager")
    }
}

impl fmt::Display for ManagedObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// The subset of an agency's configuration shown by the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgencyConfigInfo {
    #[serde(default)]
    pub agency_name: String,
    #[serde(default)]
    pub agent_name: String,
}

/// Runtime state of a single agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRuntimeInfo {
    /// The agent VM, absent while EAM has not provisioned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm: Option<ManagedObjectReference>,
}
