//! Infrastructure implementation of the EAM ports over SOAP/HTTP.
//!
//! One [`VsphereClient`] holds one vCenter session. Calls are issued one at a
//! time; every method awaits its response before returning.

use anyhow::{Context, Result};
use eam_common::{AgencyConfigInfo, AgentRuntimeInfo, ManagedObjectReference};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use url::Url;

use crate::application::ports::{AgencyManager, AgentInspector, PropertyCollector};
use crate::domain::{ConnectionError, ConnectionSettings, ObjectContent, RemoteError};
use crate::infra::soap::{self, Service};
use crate::infra::xml::XmlNode;

/// Name of the vSphere session cookie.
const SESSION_COOKIE: &str = "vmware_soap_session";

/// A logged-in vSphere session able to reach both `/sdk` and `/eam/sdk`.
pub struct VsphereClient {
    http: reqwest::Client,
    sdk_url: Url,
    eam_url: Url,
    host: String,
    /// Raw cookie value as sent by the server, quotes included.
    session: String,
}

impl VsphereClient {
    /// Open an HTTP client and log in with the resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::LoginFailed`] if the endpoint cannot be
    /// reached or rejects the login.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(settings.insecure)
            .build()?;
        let mut client = Self {
            http,
            sdk_url: settings.sdk_url.clone(),
            eam_url: settings.eam_url(),
            host: settings.host().to_string(),
            session: String::new(),
        };
        client.login(&settings.username, &settings.password).await?;
        Ok(client)
    }

    async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let params = format!(
            "{}{}",
            soap::text_element("userName", username),
            soap::text_element("password", password)
        );
        let body = soap::envelope(
            Service::Vim,
            "Login",
            &ManagedObjectReference::session_manager(),
            &params,
            "",
        );
        tracing::debug!(host = %self.host, %username, "logging in");

        let response = self
            .post(Service::Vim, "Login", body)
            .await
            .map_err(|e| login_failed(&self.host, e))?;
        let session = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(session_cookie)
            .map(str::to_string);
        let document = response
            .text()
            .await
            .map_err(|e| login_failed(&self.host, e.into()))?;
        decode(&document, "Login").map_err(|e| login_failed(&self.host, e))?;

        self.session = session.ok_or_else(|| ConnectionError::NoSessionCookie {
            host: self.host.clone(),
        })?;
        Ok(())
    }

    /// End the session. Failures are logged and otherwise ignored.
    pub async fn logout(&self) {
        let body = soap::envelope(
            Service::Vim,
            "Logout",
            &ManagedObjectReference::session_manager(),
            "",
            "",
        );
        if let Err(err) = self.call(Service::Vim, "Logout", body).await {
            tracing::debug!(host = %self.host, error = %err, "logout failed");
        }
    }

    async fn post(
        &self,
        service: Service,
        method: &str,
        body: String,
    ) -> Result<reqwest::Response> {
        let url = match service {
            Service::Vim => &self.sdk_url,
            Service::Eam => &self.eam_url,
        };
        let mut request = self
            .http
            .post(url.clone())
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", service.soap_action())
            .body(body);
        if service == Service::Vim && !self.session.is_empty() {
            request = request.header(COOKIE, format!("{SESSION_COOKIE}={}", self.session));
        }
        let response = request
            .send()
            .await
            .with_context(|| format!("cannot reach {url}"))?;
        tracing::debug!(%url, method, status = response.status().as_u16(), "SOAP call");

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::INTERNAL_SERVER_ERROR {
            Ok(response)
        } else {
            Err(RemoteError::Http {
                status: status.as_u16(),
                endpoint: url.to_string(),
            }
            .into())
        }
    }

    async fn call(&self, service: Service, method: &str, body: String) -> Result<XmlNode> {
        let document = self.post(service, method, body).await?.text().await?;
        decode(&document, method)
    }

    async fn call_eam(
        &self,
        method: &str,
        this: &ManagedObjectReference,
        params: &str,
    ) -> Result<XmlNode> {
        let header = soap::text_element("vcSessionCookie", unquoted(&self.session));
        let body = soap::envelope(Service::Eam, method, this, params, &header);
        self.call(Service::Eam, method, body).await
    }
}

/// Wrap a failed login exchange as a connection error.
fn login_failed(host: &str, err: anyhow::Error) -> anyhow::Error {
    ConnectionError::LoginFailed {
        host: host.to_string(),
        message: format!("{err:#}"),
    }
    .into()
}

/// Parse a response document and unwrap it to the method response.
fn decode(document: &str, method: &str) -> Result<XmlNode> {
    let root = XmlNode::parse(document).map_err(|e| RemoteError::Malformed {
        method: method.to_string(),
        detail: e.to_string(),
    })?;
    Ok(soap::response_body(root, method)?)
}

/// Extract the session cookie value from one `Set-Cookie` header.
fn session_cookie(header: &str) -> Option<&str> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
}

fn unquoted(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

// ── Response decoders ─────────────────────────────────────────────────────────

fn decode_morefs(response: &XmlNode, method: &str) -> Result<Vec<ManagedObjectReference>> {
    response
        .children_named("returnval")
        .map(|node| soap::moref_from(node, method).map_err(Into::into))
        .collect()
}

fn decode_agency_config(response: &XmlNode) -> Result<AgencyConfigInfo> {
    let info = response
        .child("returnval")
        .ok_or_else(|| RemoteError::Malformed {
            method: "QueryConfig".to_string(),
            detail: "missing <returnval>".to_string(),
        })?;
    Ok(AgencyConfigInfo {
        agency_name: info.child_text("agencyName").unwrap_or_default().to_string(),
        agent_name: info.child_text("agentName").unwrap_or_default().to_string(),
    })
}

fn decode_agent_runtime(response: &XmlNode) -> Result<AgentRuntimeInfo> {
    let vm = match response.child("returnval").and_then(|r| r.child("vm")) {
        Some(node) => Some(soap::moref_from(node, "AgentQueryRuntime")?),
        None => None,
    };
    Ok(AgentRuntimeInfo { vm })
}

fn decode_object_content(
    response: &XmlNode,
    obj: &ManagedObjectReference,
) -> Result<ObjectContent> {
    let method = "RetrievePropertiesEx";
    let objects = response
        .child("returnval")
        .and_then(|r| r.child("objects"))
        .ok_or_else(|| RemoteError::Malformed {
            method: method.to_string(),
            detail: format!("no object returned for {obj}"),
        })?;

    let mut content = ObjectContent {
        obj: objects
            .child("obj")
            .map(|n| soap::moref_from(n, method))
            .transpose()?,
        ..ObjectContent::default()
    };
    for prop in objects.children_named("propSet") {
        if let Some(name) = prop.child_text("name") {
            let value = prop.child_text("val").unwrap_or_default();
            content.properties.insert(name.to_string(), value.to_string());
        }
    }
    Ok(content)
}

fn property_spec(obj: &ManagedObjectReference, properties: &[&str]) -> String {
    let paths: String = properties
        .iter()
        .map(|p| soap::text_element("pathSet", p))
        .collect();
    format!(
        "<specSet><propSet>{}{paths}</propSet><objectSet>{}{}</objectSet></specSet><options/>",
        soap::text_element("type", &obj.kind),
        soap::moref_element("obj", obj),
        soap::text_element("skip", "false"),
    )
}

// ── Port implementations ──────────────────────────────────────────────────────

impl AgencyManager for VsphereClient {
    async fn agencies(&self) -> Result<Vec<ManagedObjectReference>> {
        let method = "QueryAgency";
        let response = self
            .call_eam(method, &ManagedObjectReference::esx_agent_manager(), "")
            .await?;
        decode_morefs(&response, method)
    }

    async fn agency_config(&self, agency: &ManagedObjectReference) -> Result<AgencyConfigInfo> {
        let response = self.call_eam("QueryConfig", agency, "").await?;
        decode_agency_config(&response)
    }

    async fn agents(
        &self,
        agency: &ManagedObjectReference,
    ) -> Result<Vec<ManagedObjectReference>> {
        let method = "QueryAgent";
        let response = self.call_eam(method, agency, "").await?;
        decode_morefs(&response, method)
    }

    async fn destroy_agency(&self, agency: &ManagedObjectReference) -> Result<()> {
        self.call_eam("DestroyAgency", agency, "").await?;
        Ok(())
    }
}

impl AgentInspector for VsphereClient {
    async fn agent_runtime(&self, agent: &ManagedObjectReference) -> Result<AgentRuntimeInfo> {
        let response = self.call_eam("AgentQueryRuntime", agent, "").await?;
        decode_agent_runtime(&response)
    }
}

impl PropertyCollector for VsphereClient {
    async fn retrieve_one(
        &self,
        obj: &ManagedObjectReference,
        properties: &[&str],
    ) -> Result<ObjectContent> {
        let method = "RetrievePropertiesEx";
        let body = soap::envelope(
            Service::Vim,
            method,
            &ManagedObjectReference::property_collector(),
            &property_spec(obj, properties),
            "",
        );
        let response = self.call(Service::Vim, method, body).await?;
        decode_object_content(&response, obj)
    }
}
