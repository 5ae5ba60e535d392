// crates/ipxact-rs/src/parser.rs

use crate::error::IpxactError;
use crate::resolver;
use crate::revision::{Revision, detect_revision};
use crate::tree::XmlElement;
use crate::types::Component;
use log::debug;

/// Parses an IP-XACT component document under an explicit revision.
///
/// Missing optional elements become empty values; unknown elements are
/// skipped. Only a malformed document or a root other than `component` fails.
///
/// # Arguments
/// * `xml_content` - A string slice containing the full component XML file.
/// * `revision` - The IP-XACT revision whose vocabulary is used to read it.
///
/// # Errors
/// Returns an `IpxactError` if the XML is not well-formed or the root element
/// is not a component.
pub fn load_component_from_str(
    xml_content: &str,
    revision: Revision,
) -> Result<Component, IpxactError> {
    let root = XmlElement::parse_str(xml_content)?;
    parse_component(&root, revision)
}

/// Parses a component document, detecting its revision from the root
/// element's namespace.
///
/// # Errors
/// Returns `IpxactError::UnknownRevision` if the namespace does not name a
/// supported revision, or any error of [`load_component_from_str`].
pub fn load_component(xml_content: &str) -> Result<(Revision, Component), IpxactError> {
    let root = XmlElement::parse_str(xml_content)?;
    let revision = detect_revision(&root).ok_or(IpxactError::UnknownRevision)?;
    debug!("Detected {} document", revision);
    let component = parse_component(&root, revision)?;
    Ok((revision, component))
}

/// Resolves an already-parsed element tree into a `Component`.
///
/// # Errors
/// Returns `IpxactError::UnexpectedRoot` if `root` is not a `component` element.
pub fn parse_component(root: &XmlElement, revision: Revision) -> Result<Component, IpxactError> {
    if root.local_name() != "component" {
        return Err(IpxactError::UnexpectedRoot {
            found: root.name.clone(),
        });
    }
    Ok(resolver::resolve_component(root, revision))
}
