// crates/ipxact-rs/src/resolver/mod.rs

//! Maps a parsed XML element tree onto the public [`Component`] model.
//!
//! The reader is lenient: elements it does not know are skipped with a debug
//! log, and malformed values (booleans, positions) are logged and treated as
//! absent. Only structural XML errors, handled by the tree parser, fail a load.

use crate::revision::{Revision, TOOL_PREFIX, XSI_NAMESPACE};
use crate::tree::XmlElement;
use crate::types::{Component, DocumentType, Vlnv, VendorExtensions};
use log::{debug, trace};

// --- Sub-modules ---

mod bus_interface;
mod extension;
mod file_set;
mod items;
mod memory;
mod model;
mod utils;

use utils::text;

/// Resolves a whole `<component>` element under the rules of `revision`.
pub(crate) fn resolve_component(root: &XmlElement, revision: Revision) -> Component {
    let vocabulary = revision.vocabulary();

    let mut component = Component {
        vlnv: Vlnv::new(
            DocumentType::Component,
            text(root, "vendor"),
            text(root, "library"),
            text(root, "name"),
            text(root, "version"),
        ),
        description: text(root, "description"),
        extra_namespaces: extra_namespaces(root, vocabulary.prefix),
        ..Default::default()
    };

    let mut extensions = Vec::new();

    for child in &root.children {
        match child.local_name() {
            // Header fields, already read above.
            "vendor" | "library" | "name" | "version" | "description" => {}
            "busInterfaces" => component.bus_interfaces.extend(
                child
                    .children_named("busInterface")
                    .map(|e| bus_interface::resolve_bus_interface(e, vocabulary)),
            ),
            "channels" => component.channels.extend(
                child
                    .children_named("channel")
                    .map(|e| items::resolve_channel(e, vocabulary)),
            ),
            "remapStates" if vocabulary.remap_states_allowed => component
                .remap_states
                .extend(child.children_named("remapState").map(items::resolve_remap_state)),
            "remapStates" => debug!("Ignoring <remapStates>: not part of {}", revision),
            "addressSpaces" => component.address_spaces.extend(
                child
                    .children_named("addressSpace")
                    .map(|e| memory::resolve_address_space(e, vocabulary)),
            ),
            "memoryMaps" => component.memory_maps.extend(
                child
                    .children_named("memoryMap")
                    .map(|e| memory::resolve_memory_map(e, vocabulary)),
            ),
            "model" => component.model = model::resolve_model(child, vocabulary),
            "componentGenerators" => component.component_generators.extend(
                child
                    .children_named("componentGenerator")
                    .map(items::resolve_generator),
            ),
            "choices" => component
                .choices
                .extend(child.children_named("choice").map(items::resolve_choice)),
            "fileSets" => component.file_sets.extend(
                child
                    .children_named("fileSet")
                    .map(|e| file_set::resolve_file_set(e, vocabulary)),
            ),
            "cpus" => component.cpus.extend(
                child
                    .children_named("cpu")
                    .map(|e| items::resolve_cpu(e, vocabulary)),
            ),
            "otherClockDrivers" => component.other_clock_drivers.extend(
                child
                    .children_named("otherClockDriver")
                    .map(items::resolve_clock_driver),
            ),
            "parameters" => component
                .parameters
                .extend(child.children_named("parameter").map(utils::parameter)),
            "vendorExtensions" => extensions.extend(extension::resolve_vendor_extensions(child)),
            other => debug!("Skipping unknown component element <{}>", other),
        }
    }

    component.vendor_extensions = VendorExtensions::from(extensions);

    trace!(
        "Resolved component {} with {} bus interface(s) and {} port(s)",
        component.vlnv,
        component.bus_interfaces.len(),
        component.model.ports.len()
    );
    component
}

/// Namespace declarations of the root other than the ones the writer always emits.
fn extra_namespaces(root: &XmlElement, prefix: &str) -> Vec<(String, String)> {
    root.attributes
        .iter()
        .filter(|(key, value)| {
            let declared = match key.strip_prefix("xmlns:") {
                Some(declared) => declared,
                None if key == "xmlns" => "",
                None => return false,
            };
            declared != prefix && declared != TOOL_PREFIX && value != XSI_NAMESPACE
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ipxact:component xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xmlns:kactus2="http://kactus2.cs.tut.fi"
    xmlns:acme="http://acme.example/ext">
    <ipxact:vendor>tut.fi</ipxact:vendor>
    <ipxact:library>ip.hw</ipxact:library>
    <ipxact:name>uart</ipxact:name>
    <ipxact:version>1.0</ipxact:version>
    <ipxact:remapStates>
        <ipxact:remapState><ipxact:name>boot</ipxact:name></ipxact:remapState>
    </ipxact:remapStates>
    <ipxact:description>A serial port.</ipxact:description>
    <ipxact:unknownThing/>
</ipxact:component>"#;

    #[test]
    fn test_resolve_header_and_namespaces() {
        let root = XmlElement::parse_str(LEGACY).unwrap();
        let component = resolve_component(&root, Revision::Std14);

        assert_eq!(component.vlnv.vendor, "tut.fi");
        assert_eq!(component.vlnv.name, "uart");
        assert_eq!(component.vlnv.document_type, DocumentType::Component);
        assert_eq!(component.description, "A serial port.");
        assert_eq!(component.remap_state_names(), vec!["boot"]);
        assert_eq!(
            component.extra_namespaces,
            vec![(
                "xmlns:acme".to_string(),
                "http://acme.example/ext".to_string()
            )]
        );
        assert!(component.vendor_extensions.is_empty());
    }

    #[test]
    fn test_remap_states_ignored_in_current_revision() {
        let root = XmlElement::parse_str(LEGACY).unwrap();
        let component = resolve_component(&root, Revision::Std22);
        assert!(component.remap_states.is_empty());
        assert_eq!(component.vlnv.library, "ip.hw");
    }
}
