// crates/ipxact-rs/src/resolver/bus_interface.rs

use super::utils::{
    attr, bool_attr, bool_child, is_present, name_group, parameters, range, text, texts,
    vlnv_attributes, vlnv_child,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    AbstractionType, BusInterface, DocumentType, Endianness, FileSetRefGroup, InitiatorInterface,
    InterfaceMode, LogicalPort, MirroredTargetInterface, PhysicalPort, PortMap, RemapAddress,
    TargetInterface, TransparentBridge,
};
use log::{debug, warn};

/// Parses a `<busInterface>` element.
pub(super) fn resolve_bus_interface(element: &XmlElement, vocabulary: &Vocabulary) -> BusInterface {
    BusInterface {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        bus_type: vlnv_child(element, "busType", DocumentType::BusDefinition),
        abstraction_types: element
            .child("abstractionTypes")
            .map(|w| {
                w.children_named("abstractionType")
                    .map(|a| resolve_abstraction_type(a, vocabulary))
                    .collect()
            })
            .unwrap_or_default(),
        mode: element
            .children
            .iter()
            .find_map(|c| resolve_mode(c, vocabulary))
            .unwrap_or_default(),
        connection_required: bool_child(element, "connectionRequired"),
        bits_in_lau: text(element, "bitsInLau"),
        bit_steering: text(element, "bitSteering"),
        endianness: element
            .child_text("endianness")
            .and_then(resolve_endianness),
        parameters: parameters(element),
        attributes: element.attributes.clone(),
    }
}

fn resolve_endianness(value: &str) -> Option<Endianness> {
    match value.trim() {
        "big" => Some(Endianness::Big),
        "little" => Some(Endianness::Little),
        other => {
            warn!("Ignoring unknown endianness '{}'", other);
            None
        }
    }
}

fn resolve_abstraction_type(element: &XmlElement, vocabulary: &Vocabulary) -> AbstractionType {
    AbstractionType {
        view_refs: texts(element, "viewRef"),
        abstraction_ref: element
            .child("abstractionRef")
            .map(|r| vlnv_attributes(r, DocumentType::AbstractionDefinition)),
        port_maps: element
            .child("portMaps")
            .map(|w| {
                w.children_named("portMap")
                    .map(|m| resolve_port_map(m, vocabulary))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn resolve_port_map(element: &XmlElement, vocabulary: &Vocabulary) -> PortMap {
    PortMap {
        is_present: is_present(element, vocabulary),
        invert: bool_attr(element, "invert"),
        logical_port: element
            .child("logicalPort")
            .map(|l| LogicalPort {
                name: text(l, "name"),
                range: l.child("range").map(range),
            })
            .unwrap_or_default(),
        physical_port: element.child("physicalPort").map(|p| PhysicalPort {
            name: text(p, "name"),
            part_select: p
                .child("partSelect")
                .and_then(|s| s.child("range"))
                .map(range),
        }),
        logical_tie_off: text(element, "logicalTieOff"),
        is_informative: bool_child(element, "isInformative"),
    }
}

/// Interprets `element` as an interface mode if its tag names one in this revision.
fn resolve_mode(element: &XmlElement, vocabulary: &Vocabulary) -> Option<InterfaceMode> {
    let local = element.local_name();

    let mode = if local == vocabulary.initiator {
        InterfaceMode::Initiator(resolve_initiator(element))
    } else if local == vocabulary.target {
        InterfaceMode::Target(resolve_target(element, vocabulary))
    } else if local == vocabulary.mirrored_initiator {
        InterfaceMode::MirroredInitiator
    } else if local == vocabulary.mirrored_target {
        InterfaceMode::MirroredTarget(resolve_mirrored_target(element))
    } else {
        match local {
            "system" => InterfaceMode::System {
                group: text(element, "group"),
            },
            "mirroredSystem" => InterfaceMode::MirroredSystem {
                group: text(element, "group"),
            },
            "monitor" => InterfaceMode::Monitor {
                interface_mode: attr(element, "interfaceMode"),
                group: text(element, "group"),
            },
            "master" | "slave" | "mirroredMaster" | "mirroredSlave" | "initiator" | "target"
            | "mirroredInitiator" | "mirroredTarget" => {
                debug!("Interface mode <{}> is not used by this revision", element.name);
                return None;
            }
            _ => return None,
        }
    };
    Some(mode)
}

fn resolve_initiator(element: &XmlElement) -> InitiatorInterface {
    element
        .child("addressSpaceRef")
        .map(|r| InitiatorInterface {
            address_space_ref: attr(r, "addressSpaceRef"),
            base_address: text(r, "baseAddress"),
        })
        .unwrap_or_default()
}

fn resolve_target(element: &XmlElement, vocabulary: &Vocabulary) -> TargetInterface {
    TargetInterface {
        memory_map_ref: element
            .child("memoryMapRef")
            .map(|r| attr(r, "memoryMapRef"))
            .unwrap_or_default(),
        transparent_bridges: element
            .children_named("transparentBridge")
            .map(|b| TransparentBridge {
                initiator_ref: attr(b, vocabulary.bridge_initiator_ref),
                is_present: is_present(b, vocabulary),
            })
            .collect(),
        file_set_ref_groups: element
            .children_named("fileSetRefGroup")
            .map(|g| FileSetRefGroup {
                group: text(g, "group"),
                file_set_refs: texts(g, "fileSetRef"),
            })
            .collect(),
    }
}

fn resolve_mirrored_target(element: &XmlElement) -> MirroredTargetInterface {
    let Some(base) = element.child("baseAddresses") else {
        return MirroredTargetInterface::default();
    };

    // Legacy documents list remapAddress directly, later ones wrap each one.
    let direct = base.children_named("remapAddress");
    let wrapped = base
        .children_named("remapAddresses")
        .flat_map(|w| w.children_named("remapAddress"));

    MirroredTargetInterface {
        remap_addresses: direct
            .chain(wrapped)
            .map(|r| RemapAddress {
                value: r.text.clone(),
                state: attr(r, "state"),
            })
            .collect(),
        range: text(base, "range"),
    }
}
