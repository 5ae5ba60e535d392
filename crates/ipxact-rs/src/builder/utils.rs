// crates/ipxact-rs/src/builder/utils.rs

//! Element construction helpers shared by the builders.
//!
//! Optional values are only written when they carry content, so a model read
//! from a document writes back the same set of elements.

use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{NameGroup, Parameter, Range, Vlnv};
use log::debug;

pub(super) fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// A standard-prefixed element.
pub(super) fn element(vocabulary: &Vocabulary, local: &str) -> XmlElement {
    XmlElement::new(vocabulary.tag(local))
}

/// A standard-prefixed element holding `value`.
pub(super) fn text_element(vocabulary: &Vocabulary, local: &str, value: &str) -> XmlElement {
    element(vocabulary, local).with_text(value)
}

/// Appends `<local>value</local>` unless `value` is empty.
pub(super) fn push_text(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    local: &str,
    value: &str,
) {
    if !value.is_empty() {
        parent.push_child(text_element(vocabulary, local, value));
    }
}

/// Appends one `<local>` per value.
pub(super) fn push_texts(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    local: &str,
    values: &[String],
) {
    for value in values {
        parent.push_child(text_element(vocabulary, local, value));
    }
}

pub(super) fn push_bool(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    local: &str,
    value: Option<bool>,
) {
    if let Some(value) = value {
        parent.push_child(text_element(vocabulary, local, bool_str(value)));
    }
}

/// Sets `key` unless `value` is empty.
pub(super) fn set_attr(element: &mut XmlElement, key: &str, value: &str) {
    if !value.is_empty() {
        element.set_attribute(key, value);
    }
}

/// Appends `name`, `displayName` and `description`. The name is always written.
pub(super) fn push_name_group(parent: &mut XmlElement, vocabulary: &Vocabulary, group: &NameGroup) {
    parent.push_child(text_element(vocabulary, "name", &group.name));
    push_text(parent, vocabulary, "displayName", &group.display_name);
    push_text(parent, vocabulary, "description", &group.description);
}

/// Appends `<isPresent>` if the revision has it. Otherwise the value is dropped.
pub(super) fn push_is_present(parent: &mut XmlElement, vocabulary: &Vocabulary, value: &str) {
    if value.is_empty() {
        return;
    }
    if vocabulary.is_present_allowed {
        parent.push_child(text_element(vocabulary, "isPresent", value));
    } else {
        debug!(
            "Dropping <isPresent> of <{}>: not part of this revision",
            parent.name
        );
    }
}

/// An element carrying a VLNV reference as attributes.
pub(super) fn vlnv_element(name: String, vlnv: &Vlnv) -> XmlElement {
    XmlElement::new(name)
        .with_attribute("vendor", vlnv.vendor.as_str())
        .with_attribute("library", vlnv.library.as_str())
        .with_attribute("name", vlnv.name.as_str())
        .with_attribute("version", vlnv.version.as_str())
}

pub(super) fn range_element(vocabulary: &Vocabulary, local: &str, range: &Range) -> XmlElement {
    element(vocabulary, local)
        .with_child(text_element(vocabulary, "left", &range.left))
        .with_child(text_element(vocabulary, "right", &range.right))
}

/// Appends `<wrapper>` holding the given children, unless there are none.
pub(super) fn push_wrapped(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    wrapper: &str,
    children: Vec<XmlElement>,
) {
    if !children.is_empty() {
        let mut outer = element(vocabulary, wrapper);
        outer.children = children;
        parent.push_child(outer);
    }
}

pub(super) fn push_ranges(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    wrapper: &str,
    local: &str,
    ranges: &[Range],
) {
    let children = ranges
        .iter()
        .map(|r| range_element(vocabulary, local, r))
        .collect();
    push_wrapped(parent, vocabulary, wrapper, children);
}

/// `<localName>` references, one `<local>` element each.
pub(super) fn push_local_name_refs(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    local: &str,
    refs: &[String],
) {
    for reference in refs {
        parent.push_child(
            element(vocabulary, local).with_child(text_element(vocabulary, "localName", reference)),
        );
    }
}

pub(super) fn parameter_element(
    vocabulary: &Vocabulary,
    local: &str,
    parameter: &Parameter,
) -> XmlElement {
    let mut out = element(vocabulary, local);
    set_attr(&mut out, "parameterId", &parameter.parameter_id);
    set_attr(&mut out, "resolve", &parameter.resolve);
    set_attr(&mut out, "type", &parameter.parameter_type);
    set_attr(&mut out, "minimum", &parameter.minimum);
    set_attr(&mut out, "maximum", &parameter.maximum);
    set_attr(&mut out, "choiceRef", &parameter.choice_ref);
    for (key, value) in &parameter.attributes {
        out.set_attribute(key.as_str(), value.as_str());
    }
    push_name_group(&mut out, vocabulary, &parameter.name_group);
    out.push_child(text_element(vocabulary, "value", &parameter.value));
    out
}

pub(super) fn push_parameter_list(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    wrapper: &str,
    local: &str,
    parameters: &[Parameter],
) {
    let children = parameters
        .iter()
        .map(|p| parameter_element(vocabulary, local, p))
        .collect();
    push_wrapped(parent, vocabulary, wrapper, children);
}

pub(super) fn push_parameters(
    parent: &mut XmlElement,
    vocabulary: &Vocabulary,
    parameters: &[Parameter],
) {
    push_parameter_list(parent, vocabulary, "parameters", "parameter", parameters);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;

    #[test]
    fn test_optional_values_are_skipped() {
        let vocabulary = Revision::Std14.vocabulary();
        let mut parent = element(vocabulary, "addressBlock");
        push_name_group(&mut parent, vocabulary, &NameGroup::new("ctrl"));
        push_text(&mut parent, vocabulary, "usage", "");
        push_bool(&mut parent, vocabulary, "volatile", None);
        push_wrapped(&mut parent, vocabulary, "parameters", Vec::new());

        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].name, "ipxact:name");
        assert_eq!(parent.children[0].text, "ctrl");
    }

    #[test]
    fn test_is_present_follows_revision() {
        let mut legacy = XmlElement::new("ipxact:port");
        push_is_present(&mut legacy, Revision::Std14.vocabulary(), "0");
        assert_eq!(legacy.child_text("isPresent"), Some("0"));

        let mut current = XmlElement::new("ipxact:port");
        push_is_present(&mut current, Revision::Std22.vocabulary(), "0");
        assert!(current.children.is_empty());
    }

    #[test]
    fn test_parameter_element_layout() {
        let vocabulary = Revision::Std22.vocabulary();
        let mut parameter = Parameter::new("WIDTH", "8");
        parameter.parameter_id = "id1".to_string();
        parameter.attributes = vec![("prompt".to_string(), "Width:".to_string())];

        let out = parameter_element(vocabulary, "parameter", &parameter);
        assert_eq!(out.attribute("parameterId"), Some("id1"));
        assert_eq!(out.attribute("prompt"), Some("Width:"));
        assert_eq!(out.attribute("type"), None);
        assert_eq!(out.child_text("name"), Some("WIDTH"));
        assert_eq!(out.child_text("value"), Some("8"));
    }
}
