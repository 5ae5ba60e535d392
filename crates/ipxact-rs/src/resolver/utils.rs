// crates/ipxact-rs/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{DocumentType, NameGroup, Parameter, Range, Vlnv};
use log::{debug, warn};

/// Text of the first child named `local`, or an empty string.
pub(super) fn text(element: &XmlElement, local: &str) -> String {
    element.child_text(local).unwrap_or_default().to_string()
}

/// Texts of all children named `local`.
pub(super) fn texts(element: &XmlElement, local: &str) -> Vec<String> {
    element
        .children_named(local)
        .map(|c| c.text.clone())
        .collect()
}

/// Value of an attribute, or an empty string.
pub(super) fn attr(element: &XmlElement, key: &str) -> String {
    element.attribute(key).unwrap_or_default().to_string()
}

/// Parses an `xs:boolean`. Anything else is logged and treated as absent.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        "" => None,
        other => {
            warn!("Ignoring invalid boolean value '{}'", other);
            None
        }
    }
}

pub(super) fn bool_child(element: &XmlElement, local: &str) -> Option<bool> {
    element.child_text(local).and_then(parse_bool)
}

pub(super) fn bool_attr(element: &XmlElement, key: &str) -> Option<bool> {
    element.attribute(key).and_then(parse_bool)
}

pub(super) fn name_group(element: &XmlElement) -> NameGroup {
    NameGroup {
        name: text(element, "name"),
        display_name: text(element, "displayName"),
        description: text(element, "description"),
    }
}

/// `<isPresent>` of an element. Ignored when the revision does not allow it.
pub(super) fn is_present(element: &XmlElement, vocabulary: &Vocabulary) -> String {
    let value = text(element, "isPresent");
    if !vocabulary.is_present_allowed && !value.is_empty() {
        debug!(
            "Ignoring <isPresent> of <{}>: not part of this revision",
            element.name
        );
        return String::new();
    }
    value
}

/// A VLNV reference given as `vendor`/`library`/`name`/`version` attributes.
pub(super) fn vlnv_attributes(element: &XmlElement, document_type: DocumentType) -> Vlnv {
    Vlnv::new(
        document_type,
        attr(element, "vendor"),
        attr(element, "library"),
        attr(element, "name"),
        attr(element, "version"),
    )
}

/// A VLNV reference from the child named `local`, or an empty VLNV.
pub(super) fn vlnv_child(element: &XmlElement, local: &str, document_type: DocumentType) -> Vlnv {
    element
        .child(local)
        .map(|c| vlnv_attributes(c, document_type))
        .unwrap_or_else(|| Vlnv {
            document_type,
            ..Default::default()
        })
}

pub(super) fn range(element: &XmlElement) -> Range {
    Range {
        left: text(element, "left"),
        right: text(element, "right"),
    }
}

/// All `<local>` children of the `<wrapper>` child, resolved as ranges.
pub(super) fn ranges(element: &XmlElement, wrapper: &str, local: &str) -> Vec<Range> {
    element
        .child(wrapper)
        .map(|w| w.children_named(local).map(range).collect())
        .unwrap_or_default()
}

/// `<localName>` texts of every `<local>` child.
pub(super) fn local_name_refs(element: &XmlElement, local: &str) -> Vec<String> {
    element
        .children_named(local)
        .map(|c| text(c, "localName"))
        .collect()
}

const PARAMETER_ATTRIBUTES: [&str; 6] = [
    "parameterId",
    "resolve",
    "type",
    "minimum",
    "maximum",
    "choiceRef",
];

pub(super) fn parameter(element: &XmlElement) -> Parameter {
    Parameter {
        name_group: name_group(element),
        parameter_id: attr(element, "parameterId"),
        resolve: attr(element, "resolve"),
        parameter_type: attr(element, "type"),
        minimum: attr(element, "minimum"),
        maximum: attr(element, "maximum"),
        choice_ref: attr(element, "choiceRef"),
        value: text(element, "value"),
        attributes: element
            .attributes
            .iter()
            .filter(|(k, _)| !PARAMETER_ATTRIBUTES.contains(&k.as_str()))
            .cloned()
            .collect(),
    }
}

/// Parameters listed under `<wrapper>/<local>`.
pub(super) fn parameter_list(element: &XmlElement, wrapper: &str, local: &str) -> Vec<Parameter> {
    element
        .child(wrapper)
        .map(|w| w.children_named(local).map(parameter).collect())
        .unwrap_or_default()
}

/// The usual `<parameters><parameter>` list.
pub(super) fn parameters(element: &XmlElement) -> Vec<Parameter> {
    parameter_list(element, "parameters", "parameter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool(""), None);
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_parameter_keeps_unknown_attributes() {
        let element = XmlElement::new("ipxact:parameter")
            .with_attribute("parameterId", "id1")
            .with_attribute("type", "longint")
            .with_attribute("prompt", "Width:")
            .with_child(XmlElement::new("ipxact:name").with_text("WIDTH"))
            .with_child(XmlElement::new("ipxact:value").with_text("8"));

        let parameter = parameter(&element);
        assert_eq!(parameter.name(), "WIDTH");
        assert_eq!(parameter.parameter_id, "id1");
        assert_eq!(parameter.parameter_type, "longint");
        assert_eq!(parameter.value, "8");
        assert_eq!(
            parameter.attributes,
            vec![("prompt".to_string(), "Width:".to_string())]
        );
    }

    #[test]
    fn test_is_present_depends_on_revision() {
        let element = XmlElement::new("ipxact:port")
            .with_child(XmlElement::new("ipxact:isPresent").with_text("0"));
        assert_eq!(is_present(&element, Revision::Std14.vocabulary()), "0");
        assert_eq!(is_present(&element, Revision::Std22.vocabulary()), "");
    }

    #[test]
    fn test_missing_vlnv_child_keeps_document_type() {
        let element = XmlElement::new("ipxact:designInstantiation");
        let vlnv = vlnv_child(&element, "designRef", DocumentType::Design);
        assert!(vlnv.is_empty());
        assert_eq!(vlnv.document_type, DocumentType::Design);
    }
}
