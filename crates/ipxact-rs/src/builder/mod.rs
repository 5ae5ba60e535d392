// crates/ipxact-rs/src/builder/mod.rs

//! Serializes a [`Component`] back into an IP-XACT XML document.
//!
//! Elements are written in the canonical order of the selected revision.
//! Empty collections and unset optional values are omitted, and constructs
//! the revision does not have (`isPresent`, `remapStates`) are dropped with a
//! debug log.

mod bus_interface;
mod extension;
mod file_set;
mod items;
mod memory;
mod model;
mod utils;

use crate::error::IpxactError;
use crate::revision::{Revision, TOOL_NAMESPACE, TOOL_PREFIX, Vocabulary, XSI_NAMESPACE};
use crate::tree::{WriteOptions, XmlElement};
use crate::types::Component;
use log::debug;
use utils::{element, push_parameters, push_text, push_wrapped, text_element};

/// Serializes a `Component` into an XML document of the given revision.
///
/// The document is indented with two spaces and starts with an XML declaration.
///
/// # Arguments
/// * `component` - The component to write.
/// * `revision` - The IP-XACT revision whose vocabulary and element order is used.
///
/// # Errors
/// Returns an `IpxactError` if the XML writer fails.
pub fn save_component_to_string(
    component: &Component,
    revision: Revision,
) -> Result<String, IpxactError> {
    save_component_to_string_with(component, revision, &WriteOptions::default())
}

/// Same as [`save_component_to_string`], with explicit formatting options.
///
/// # Errors
/// Returns an `IpxactError` if the XML writer fails.
pub fn save_component_to_string_with(
    component: &Component,
    revision: Revision,
    options: &WriteOptions,
) -> Result<String, IpxactError> {
    let root = build_component(component, revision);
    root.to_xml_string_with(options)
}

/// Builds the whole `<component>` element tree.
pub(crate) fn build_component(component: &Component, revision: Revision) -> XmlElement {
    let vocabulary = revision.vocabulary();
    let mut root = build_root(component, vocabulary);

    // 1. Header
    for (local, value) in [
        ("vendor", &component.vlnv.vendor),
        ("library", &component.vlnv.library),
        ("name", &component.vlnv.name),
        ("version", &component.vlnv.version),
    ] {
        root.push_child(text_element(vocabulary, local, value));
    }
    if vocabulary.description_after_vlnv {
        push_text(&mut root, vocabulary, "description", &component.description);
    }

    // 2. Interfaces and memory
    let bus_interfaces = component
        .bus_interfaces
        .iter()
        .map(|b| bus_interface::build_bus_interface(b, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "busInterfaces", bus_interfaces);

    let channels = component
        .channels
        .iter()
        .map(|c| items::build_channel(c, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "channels", channels);

    if vocabulary.remap_states_allowed {
        let states = component
            .remap_states
            .iter()
            .map(|s| items::build_remap_state(s, vocabulary))
            .collect();
        push_wrapped(&mut root, vocabulary, "remapStates", states);
    } else if !component.remap_states.is_empty() {
        debug!(
            "Dropping {} remap state(s): not part of {}",
            component.remap_states.len(),
            revision
        );
    }

    let spaces = component
        .address_spaces
        .iter()
        .map(|s| memory::build_address_space(s, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "addressSpaces", spaces);

    let maps = component
        .memory_maps
        .iter()
        .map(|m| memory::build_memory_map(m, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "memoryMaps", maps);

    // 3. Model
    if let Some(model) = model::build_model(&component.model, vocabulary) {
        root.push_child(model);
    }

    // 4. Generators, choices, files, cpus, clocks
    let generators = component
        .component_generators
        .iter()
        .map(|g| items::build_generator(g, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "componentGenerators", generators);

    let choices = component
        .choices
        .iter()
        .map(|c| items::build_choice(c, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "choices", choices);

    let file_sets = component
        .file_sets
        .iter()
        .map(|f| file_set::build_file_set(f, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "fileSets", file_sets);

    let cpus = component
        .cpus
        .iter()
        .map(|c| items::build_cpu(c, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "cpus", cpus);

    let clocks = component
        .other_clock_drivers
        .iter()
        .map(|d| items::build_clock_driver(d, vocabulary))
        .collect();
    push_wrapped(&mut root, vocabulary, "otherClockDrivers", clocks);

    // 5. Description (legacy position), parameters, extensions
    if !vocabulary.description_after_vlnv {
        push_text(&mut root, vocabulary, "description", &component.description);
    }
    push_parameters(&mut root, vocabulary, &component.parameters);
    if let Some(extensions) =
        extension::build_vendor_extensions(&component.vendor_extensions, vocabulary)
    {
        root.push_child(extensions);
    }

    root
}

/// The `<component>` element with its namespace declarations.
fn build_root(component: &Component, vocabulary: &Vocabulary) -> XmlElement {
    let mut root = element(vocabulary, "component")
        .with_attribute("xmlns:xsi", XSI_NAMESPACE)
        .with_attribute(format!("xmlns:{}", vocabulary.prefix), vocabulary.namespace)
        .with_attribute(format!("xmlns:{}", TOOL_PREFIX), TOOL_NAMESPACE);
    for (key, value) in &component.extra_namespaces {
        root.set_attribute(key.as_str(), value.as_str());
    }
    root.with_attribute("xsi:schemaLocation", vocabulary.schema_location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentType, RemapState, Vlnv};

    fn component() -> Component {
        let mut component = Component::new(Vlnv::new(
            DocumentType::Component,
            "tut.fi",
            "ip.hw",
            "uart",
            "1.0",
        ));
        component.description = "A serial port.".to_string();
        component.remap_states.push(RemapState::new("boot"));
        component
    }

    fn locals(root: &XmlElement) -> Vec<&str> {
        root.children.iter().map(|c| c.local_name()).collect()
    }

    #[test]
    fn test_description_position_follows_revision() {
        let legacy = build_component(&component(), Revision::Std14);
        assert_eq!(
            locals(&legacy),
            vec!["vendor", "library", "name", "version", "remapStates", "description"]
        );

        let current = build_component(&component(), Revision::Std22);
        assert_eq!(
            locals(&current),
            vec!["vendor", "library", "name", "version", "description"]
        );
    }

    #[test]
    fn test_root_namespaces() {
        let mut component = component();
        component
            .extra_namespaces
            .push(("xmlns:acme".to_string(), "http://acme.example/ext".to_string()));

        let root = build_component(&component, Revision::Std22);
        assert_eq!(root.name, "ipxact:component");
        let keys: Vec<&str> = root.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "xmlns:xsi",
                "xmlns:ipxact",
                "xmlns:kactus2",
                "xmlns:acme",
                "xsi:schemaLocation"
            ]
        );
        assert_eq!(
            root.attribute("xmlns:ipxact"),
            Some(Revision::Std22.vocabulary().namespace)
        );
    }

    #[test]
    fn test_save_starts_with_declaration() {
        let xml = save_component_to_string(&component(), Revision::Std14).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<ipxact:vendor>tut.fi</ipxact:vendor>"));
    }
}
