//! SOAP 1.1 envelopes for the vSphere and EAM endpoints.
//!
//! Only what the EAM commands send and read is covered here: request
//! bodies are assembled from escaped fragments, responses are unwrapped to
//! the `<MethodResponse>` element or turned into a [`RemoteError::Fault`].

use anyhow::Result;
use eam_common::ManagedObjectReference;
use quick_xml::escape::escape;

use crate::domain::RemoteError;
use crate::infra::xml::XmlNode;

/// API version announced in the vSphere `SOAPAction` header.
const VIM_VERSION: &str = "7.0.3.0";
/// API version announced in the EAM `SOAPAction` header.
const EAM_VERSION: &str = "6.7";

/// The two SOAP services a command talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// vSphere core API at `/sdk`.
    Vim,
    /// ESX Agent Manager at `/eam/sdk`.
    Eam,
}

impl Service {
    #[must_use]
    pub fn namespace(self) -> &'static str {
        match self {
            Self::Vim => "urn:vim25",
            Self::Eam => "urn:eam",
        }
    }

    /// Value of the `SOAPAction` HTTP header.
    #[must_use]
    pub fn soap_action(self) -> String {
        let version = match self {
            Self::Vim => VIM_VERSION,
            Self::Eam => EAM_VERSION,
        };
        format!("{}/{version}", self.namespace())
    }
}

/// Serialize a reference as `<{tag} type="...">value</{tag}>`.
#[must_use]
pub fn moref_element(tag: &str, moref: &ManagedObjectReference) -> String {
    format!(
        r#"<{tag} type="{}">{}</{tag}>"#,
        escape(moref.kind.as_str()),
        escape(moref.value.as_str())
    )
}

/// Serialize a text element with escaped content.
#[must_use]
pub fn text_element(tag: &str, value: &str) -> String {
    format!("<{tag}>{}</{tag}>", escape(value))
}

/// Wrap a method call for `service` into a full envelope.
///
/// `header` is inserted verbatim into `<soapenv:Header>`; `params` follow the
/// `_this` element inside the method element.
#[must_use]
pub fn envelope(
    service: Service,
    method: &str,
    this: &ManagedObjectReference,
    params: &str,
    header: &str,
) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" "#,
            r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema" "#,
            r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<soapenv:Header>{header}</soapenv:Header>",
            "<soapenv:Body>",
            r#"<{method} xmlns="{ns}">{this}{params}</{method}>"#,
            "</soapenv:Body>",
            "</soapenv:Envelope>"
        ),
        header = header,
        method = method,
        ns = service.namespace(),
        this = moref_element("_this", this),
        params = params,
    )
}

/// Unwrap a parsed response envelope to its `<{method}Response>` element.
///
/// # Errors
///
/// Returns [`RemoteError::Fault`] when the body carries a SOAP fault, and
/// [`RemoteError::Malformed`] when the expected elements are missing.
pub fn response_body(envelope: XmlNode, method: &str) -> Result<XmlNode, RemoteError> {
    let malformed = |detail: &str| RemoteError::Malformed {
        method: method.to_string(),
        detail: detail.to_string(),
    };
    if envelope.name != "Envelope" {
        return Err(malformed("root element is not a SOAP envelope"));
    }
    let body = envelope
        .children
        .into_iter()
        .find(|c| c.name == "Body")
        .ok_or_else(|| malformed("missing SOAP body"))?;

    if let Some(fault) = body.child("Fault") {
        return Err(fault_error(fault));
    }

    let expected = format!("{method}Response");
    body.children
        .into_iter()
        .find(|c| c.name == expected)
        .ok_or_else(|| malformed(&format!("missing <{expected}>")))
}

fn fault_error(fault: &XmlNode) -> RemoteError {
    RemoteError::Fault {
        code: fault.child_text("faultcode").unwrap_or("ServerFaultCode").to_string(),
        message: fault.child_text("faultstring").unwrap_or_default().to_string(),
        kind: fault
            .child("detail")
            .and_then(|d| d.children.first())
            .map(|k| k.name.clone()),
    }
}

/// Read a reference from an element shaped like `<x type="T">value</x>`.
///
/// # Errors
///
/// Returns [`RemoteError::Malformed`] if the `type` attribute is missing.
pub fn moref_from(node: &XmlNode, method: &str) -> Result<ManagedObjectReference, RemoteError> {
    let kind = node.attr("type").ok_or_else(|| RemoteError::Malformed {
        method: method.to_string(),
        detail: format!("<{}> has no type attribute", node.name),
    })?;
    Ok(ManagedObjectReference::new(kind, node.text.clone()))
}
