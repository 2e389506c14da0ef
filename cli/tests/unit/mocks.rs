//! Shared fake infrastructure for unit tests.
//!
//! [`FakeEam`] answers every port call from in-memory tables and records the
//! calls it receives. Any call can be made to fail with a SOAP fault.

#![allow(clippy::expect_used, dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, bail};
use eam_cli::application::ports::{
    AgencyManager, AgentInspector, ProgressReporter, PropertyCollector,
};
use eam_cli::domain::{ObjectContent, RemoteError};
use eam_common::{
    AGENT_TYPE, AgencyConfigInfo, AgentRuntimeInfo, ManagedObjectReference, VIRTUAL_MACHINE_TYPE,
};

pub fn agency(id: &str) -> ManagedObjectReference {
    ManagedObjectReference::agency(id)
}

pub fn agent(id: &str) -> ManagedObjectReference {
    ManagedObjectReference::new(AGENT_TYPE, id)
}

pub fn vm(id: &str) -> ManagedObjectReference {
    ManagedObjectReference::new(VIRTUAL_MACHINE_TYPE, id)
}

pub fn fault(message: &str) -> RemoteError {
    RemoteError::Fault {
        code: "ServerFaultCode".to_string(),
        message: message.to_string(),
        kind: None,
    }
}

/// In-memory EAM server.
#[derive(Default)]
pub struct FakeEam {
    agencies: Vec<ManagedObjectReference>,
    configs: HashMap<String, AgencyConfigInfo>,
    agents: HashMap<String, Vec<ManagedObjectReference>>,
    runtimes: HashMap<String, Option<ManagedObjectReference>>,
    vm_names: HashMap<String, String>,
    /// Method name (and optional object id) that should fault, e.g.
    /// `("QueryConfig", Some("agency-2"))`.
    failure: Option<(&'static str, Option<String>)>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeEam {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agency(mut self, id: &str, name: &str, agent_name: &str) -> Self {
        self.agencies.push(agency(id));
        self.configs.insert(
            id.to_string(),
            AgencyConfigInfo {
                agency_name: name.to_string(),
                agent_name: agent_name.to_string(),
            },
        );
        self
    }

    /// Attach an agent to an agency. `vm` is `(moref, name)` or `None` when
    /// the agent has no VM yet.
    pub fn with_agent(mut self, agency_id: &str, agent_id: &str, vm: Option<(&str, &str)>) -> Self {
        self.agents
            .entry(agency_id.to_string())
            .or_default()
            .push(agent(agent_id));
        self.runtimes
            .insert(agent_id.to_string(), vm.map(|(id, _)| self::vm(id)));
        if let Some((id, name)) = vm {
            self.vm_names.insert(id.to_string(), name.to_string());
        }
        self
    }

    /// Drop the `name` property of a VM, as a collector without read
    /// permission on it would.
    pub fn without_vm_name(mut self, vm_id: &str) -> Self {
        self.vm_names.remove(vm_id);
        self
    }

    /// Make `method` fault, optionally only for the object with `id`.
    pub fn failing(mut self, method: &'static str, id: Option<&str>) -> Self {
        self.failure = Some((method, id.map(str::to_string)));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, method: &'static str, id: Option<&str>) -> Result<()> {
        let entry = match id {
            Some(id) => format!("{method}({id})"),
            None => method.to_string(),
        };
        self.calls.lock().expect("lock").push(entry);

        match &self.failure {
            Some((fail_method, fail_id))
                if *fail_method == method && (fail_id.is_none() || fail_id.as_deref() == id) =>
            {
                Err(fault(&format!("{method} failed")).into())
            }
            _ => Ok(()),
        }
    }
}

impl AgencyManager for FakeEam {
    async fn agencies(&self) -> Result<Vec<ManagedObjectReference>> {
        self.record("QueryAgency", None)?;
        Ok(self.agencies.clone())
    }

    async fn agency_config(&self, agency: &ManagedObjectReference) -> Result<AgencyConfigInfo> {
        self.record("QueryConfig", Some(&agency.value))?;
        match self.configs.get(&agency.value) {
            Some(config) => Ok(config.clone()),
            None => bail!("unknown agency {agency}"),
        }
    }

    async fn agents(&self, agency: &ManagedObjectReference) -> Result<Vec<ManagedObjectReference>> {
        self.record("QueryAgent", Some(&agency.value))?;
        Ok(self.agents.get(&agency.value).cloned().unwrap_or_default())
    }

    async fn destroy_agency(&self, agency: &ManagedObjectReference) -> Result<()> {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("DestroyAgency({agency})"));
        if matches!(&self.failure, Some(("DestroyAgency", _))) {
            return Err(fault(&format!("The object '{agency}' has already been deleted")).into());
        }
        Ok(())
    }
}

impl AgentInspector for FakeEam {
    async fn agent_runtime(&self, agent: &ManagedObjectReference) -> Result<AgentRuntimeInfo> {
        self.record("AgentQueryRuntime", Some(&agent.value))?;
        Ok(AgentRuntimeInfo {
            vm: self.runtimes.get(&agent.value).cloned().flatten(),
        })
    }
}

impl PropertyCollector for FakeEam {
    async fn retrieve_one(
        &self,
        obj: &ManagedObjectReference,
        properties: &[&str],
    ) -> Result<ObjectContent> {
        self.record("RetrievePropertiesEx", Some(&obj.value))?;
        let mut content = ObjectContent {
            obj: Some(obj.clone()),
            ..ObjectContent::default()
        };
        if properties.contains(&"name")
            && let Some(name) = self.vm_names.get(&obj.value)
        {
            content.properties.insert("name".to_string(), name.clone());
        }
        Ok(content)
    }
}

/// Reporter that records step messages.
#[derive(Default)]
pub struct RecordingReporter {
    pub steps: Mutex<Vec<String>>,
    pub finished: Mutex<bool>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.lock().expect("lock").push(message.to_string());
    }

    fn finish(&self) {
        *self.finished.lock().expect("lock") = true;
    }
}
