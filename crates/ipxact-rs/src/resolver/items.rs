// crates/ipxact-rs/src/resolver/items.rs

//! Smaller top-level entities: channels, remap states, cpus, generators,
//! choices and clock drivers.

use super::utils::{
    attr, bool_attr, is_present, local_name_refs, name_group, parameters, text, texts,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    Channel, Choice, ClockUnit, ComponentGenerator, Cpu, Enumeration, OtherClockDriver, RemapPort,
    RemapState,
};

pub(super) fn resolve_channel(element: &XmlElement, vocabulary: &Vocabulary) -> Channel {
    Channel {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        bus_interface_refs: local_name_refs(element, "busInterfaceRef"),
    }
}

pub(super) fn resolve_remap_state(element: &XmlElement) -> RemapState {
    RemapState {
        name_group: name_group(element),
        remap_ports: element
            .child("remapPorts")
            .map(|w| {
                w.children_named("remapPort")
                    .map(|p| RemapPort {
                        port_ref: attr(p, "portRef"),
                        port_index: text(p, "portIndex"),
                        value: text(p, "value"),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

pub(super) fn resolve_cpu(element: &XmlElement, vocabulary: &Vocabulary) -> Cpu {
    let mut cpu = Cpu {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        parameters: parameters(element),
        ..Default::default()
    };
    if vocabulary.cpu_memory_map_ref {
        cpu.memory_map_ref = text(element, "memoryMapRef");
    } else {
        cpu.address_space_refs = element
            .children_named("addressSpaceRef")
            .map(|r| attr(r, "addressSpaceRef"))
            .collect();
    }
    cpu
}

pub(super) fn resolve_generator(element: &XmlElement) -> ComponentGenerator {
    ComponentGenerator {
        name_group: name_group(element),
        hidden: bool_attr(element, "hidden"),
        scope: attr(element, "scope"),
        phase: text(element, "phase"),
        parameters: parameters(element),
        api_type: text(element, "apiType"),
        generator_exe: text(element, "generatorExe"),
        groups: texts(element, "group"),
    }
}

pub(super) fn resolve_choice(element: &XmlElement) -> Choice {
    Choice {
        name: text(element, "name"),
        enumerations: element
            .children_named("enumeration")
            .map(|e| Enumeration {
                value: e.text.clone(),
                text: attr(e, "text"),
                help: attr(e, "help"),
            })
            .collect(),
    }
}

fn clock_unit(element: &XmlElement, local: &str) -> ClockUnit {
    element
        .child(local)
        .map(|c| ClockUnit {
            value: c.text.clone(),
            units: attr(c, "units"),
        })
        .unwrap_or_default()
}

pub(super) fn resolve_clock_driver(element: &XmlElement) -> OtherClockDriver {
    OtherClockDriver {
        clock_name: attr(element, "clockName"),
        clock_source: attr(element, "clockSource"),
        clock_period: clock_unit(element, "clockPeriod"),
        clock_pulse_offset: clock_unit(element, "clockPulseOffset"),
        clock_pulse_value: text(element, "clockPulseValue"),
        clock_pulse_duration: clock_unit(element, "clockPulseDuration"),
    }
}
