// crates/ipxact-rs/src/builder/bus_interface.rs

use super::utils::{
    bool_str, element, push_bool, push_is_present, push_name_group, push_parameters, push_text,
    push_texts, push_wrapped, range_element, set_attr, text_element, vlnv_element,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    AbstractionType, BusInterface, Endianness, InterfaceMode, MirroredTargetInterface, PortMap,
    TargetInterface,
};

/// Builds a `<busInterface>` element.
pub(super) fn build_bus_interface(interface: &BusInterface, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "busInterface");
    out.attributes = interface.attributes.clone();

    push_name_group(&mut out, vocabulary, &interface.name_group);
    push_is_present(&mut out, vocabulary, &interface.is_present);
    out.push_child(vlnv_element(vocabulary.tag("busType"), &interface.bus_type));

    let abstractions = interface
        .abstraction_types
        .iter()
        .map(|a| build_abstraction_type(a, vocabulary))
        .collect();
    push_wrapped(&mut out, vocabulary, "abstractionTypes", abstractions);

    if let Some(mode) = build_mode(&interface.mode, vocabulary) {
        out.push_child(mode);
    }

    push_bool(&mut out, vocabulary, "connectionRequired", interface.connection_required);
    push_text(&mut out, vocabulary, "bitsInLau", &interface.bits_in_lau);
    push_text(&mut out, vocabulary, "bitSteering", &interface.bit_steering);
    if let Some(endianness) = interface.endianness {
        let value = match endianness {
            Endianness::Big => "big",
            Endianness::Little => "little",
        };
        out.push_child(text_element(vocabulary, "endianness", value));
    }
    push_parameters(&mut out, vocabulary, &interface.parameters);
    out
}

fn build_abstraction_type(abstraction: &AbstractionType, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "abstractionType");
    push_texts(&mut out, vocabulary, "viewRef", &abstraction.view_refs);
    if let Some(reference) = &abstraction.abstraction_ref {
        out.push_child(vlnv_element(vocabulary.tag("abstractionRef"), reference));
    }
    let maps = abstraction
        .port_maps
        .iter()
        .map(|m| build_port_map(m, vocabulary))
        .collect();
    push_wrapped(&mut out, vocabulary, "portMaps", maps);
    out
}

fn build_port_map(map: &PortMap, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "portMap");
    if let Some(invert) = map.invert {
        out.set_attribute("invert", bool_str(invert));
    }
    push_is_present(&mut out, vocabulary, &map.is_present);

    let mut logical = element(vocabulary, "logicalPort");
    logical.push_child(text_element(vocabulary, "name", &map.logical_port.name));
    if let Some(range) = &map.logical_port.range {
        logical.push_child(range_element(vocabulary, "range", range));
    }
    out.push_child(logical);

    if let Some(physical_port) = &map.physical_port {
        let mut physical = element(vocabulary, "physicalPort");
        physical.push_child(text_element(vocabulary, "name", &physical_port.name));
        if let Some(range) = &physical_port.part_select {
            physical.push_child(
                element(vocabulary, "partSelect")
                    .with_child(range_element(vocabulary, "range", range)),
            );
        }
        out.push_child(physical);
    }

    push_text(&mut out, vocabulary, "logicalTieOff", &map.logical_tie_off);
    push_bool(&mut out, vocabulary, "isInformative", map.is_informative);
    out
}

/// The interface mode element, named after the revision's vocabulary.
fn build_mode(mode: &InterfaceMode, vocabulary: &Vocabulary) -> Option<XmlElement> {
    let out = match mode {
        InterfaceMode::Initiator(initiator) => {
            let mut out = element(vocabulary, vocabulary.initiator);
            if !initiator.address_space_ref.is_empty() || !initiator.base_address.is_empty() {
                let mut reference = element(vocabulary, "addressSpaceRef");
                reference.set_attribute("addressSpaceRef", initiator.address_space_ref.as_str());
                push_text(&mut reference, vocabulary, "baseAddress", &initiator.base_address);
                out.push_child(reference);
            }
            out
        }
        InterfaceMode::Target(target) => build_target(target, vocabulary),
        InterfaceMode::System { group } => {
            element(vocabulary, "system").with_child(text_element(vocabulary, "group", group))
        }
        InterfaceMode::MirroredInitiator => element(vocabulary, vocabulary.mirrored_initiator),
        InterfaceMode::MirroredTarget(mirrored) => build_mirrored_target(mirrored, vocabulary),
        InterfaceMode::MirroredSystem { group } => element(vocabulary, "mirroredSystem")
            .with_child(text_element(vocabulary, "group", group)),
        InterfaceMode::Monitor {
            interface_mode,
            group,
        } => {
            let mut out = element(vocabulary, "monitor");
            set_attr(&mut out, "interfaceMode", interface_mode);
            push_text(&mut out, vocabulary, "group", group);
            out
        }
        InterfaceMode::Undefined => return None,
    };
    Some(out)
}

fn build_target(target: &TargetInterface, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, vocabulary.target);
    if !target.memory_map_ref.is_empty() {
        out.push_child(
            element(vocabulary, "memoryMapRef")
                .with_attribute("memoryMapRef", target.memory_map_ref.as_str()),
        );
    }
    for bridge in &target.transparent_bridges {
        let mut child = element(vocabulary, "transparentBridge")
            .with_attribute(vocabulary.bridge_initiator_ref, bridge.initiator_ref.as_str());
        push_is_present(&mut child, vocabulary, &bridge.is_present);
        out.push_child(child);
    }
    for group in &target.file_set_ref_groups {
        let mut child = element(vocabulary, "fileSetRefGroup");
        push_text(&mut child, vocabulary, "group", &group.group);
        push_texts(&mut child, vocabulary, "fileSetRef", &group.file_set_refs);
        out.push_child(child);
    }
    out
}

fn build_mirrored_target(
    mirrored: &MirroredTargetInterface,
    vocabulary: &Vocabulary,
) -> XmlElement {
    let mut out = element(vocabulary, vocabulary.mirrored_target);
    if mirrored.remap_addresses.is_empty() && mirrored.range.is_empty() {
        return out;
    }

    let mut base = element(vocabulary, "baseAddresses");
    for address in &mirrored.remap_addresses {
        let mut remap = text_element(vocabulary, "remapAddress", &address.value);
        if vocabulary.remap_address_wrapped {
            base.push_child(element(vocabulary, "remapAddresses").with_child(remap));
        } else {
            set_attr(&mut remap, "state", &address.state);
            base.push_child(remap);
        }
    }
    push_text(&mut base, vocabulary, "range", &mirrored.range);
    out.push_child(base);
    out
}
