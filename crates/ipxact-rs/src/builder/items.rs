// crates/ipxact-rs/src/builder/items.rs

use super::utils::{
    bool_str, element, push_is_present, push_local_name_refs, push_name_group, push_parameters,
    push_text, push_texts, push_wrapped, set_attr, text_element,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    Channel, Choice, ClockUnit, ComponentGenerator, Cpu, OtherClockDriver, RemapState,
};

pub(super) fn build_channel(channel: &Channel, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "channel");
    push_name_group(&mut out, vocabulary, &channel.name_group);
    push_is_present(&mut out, vocabulary, &channel.is_present);
    push_local_name_refs(&mut out, vocabulary, "busInterfaceRef", &channel.bus_interface_refs);
    out
}

pub(super) fn build_remap_state(state: &RemapState, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "remapState");
    push_name_group(&mut out, vocabulary, &state.name_group);
    let ports = state
        .remap_ports
        .iter()
        .map(|port| {
            let mut child =
                element(vocabulary, "remapPort").with_attribute("portRef", port.port_ref.as_str());
            push_text(&mut child, vocabulary, "portIndex", &port.port_index);
            child.push_child(text_element(vocabulary, "value", &port.value));
            child
        })
        .collect();
    push_wrapped(&mut out, vocabulary, "remapPorts", ports);
    out
}

pub(super) fn build_cpu(cpu: &Cpu, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "cpu");
    push_name_group(&mut out, vocabulary, &cpu.name_group);
    push_is_present(&mut out, vocabulary, &cpu.is_present);
    if vocabulary.cpu_memory_map_ref {
        push_text(&mut out, vocabulary, "memoryMapRef", &cpu.memory_map_ref);
    } else {
        for reference in &cpu.address_space_refs {
            out.push_child(
                element(vocabulary, "addressSpaceRef")
                    .with_attribute("addressSpaceRef", reference.as_str()),
            );
        }
    }
    push_parameters(&mut out, vocabulary, &cpu.parameters);
    out
}

pub(super) fn build_generator(
    generator: &ComponentGenerator,
    vocabulary: &Vocabulary,
) -> XmlElement {
    let mut out = element(vocabulary, "componentGenerator");
    if let Some(hidden) = generator.hidden {
        out.set_attribute("hidden", bool_str(hidden));
    }
    set_attr(&mut out, "scope", &generator.scope);
    push_name_group(&mut out, vocabulary, &generator.name_group);
    push_text(&mut out, vocabulary, "phase", &generator.phase);
    push_parameters(&mut out, vocabulary, &generator.parameters);
    push_text(&mut out, vocabulary, "apiType", &generator.api_type);
    out.push_child(text_element(vocabulary, "generatorExe", &generator.generator_exe));
    push_texts(&mut out, vocabulary, "group", &generator.groups);
    out
}

pub(super) fn build_choice(choice: &Choice, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "choice");
    out.push_child(text_element(vocabulary, "name", &choice.name));
    for enumeration in &choice.enumerations {
        let mut child = text_element(vocabulary, "enumeration", &enumeration.value);
        set_attr(&mut child, "text", &enumeration.text);
        set_attr(&mut child, "help", &enumeration.help);
        out.push_child(child);
    }
    out
}

fn clock_unit_element(vocabulary: &Vocabulary, local: &str, unit: &ClockUnit) -> XmlElement {
    let mut out = text_element(vocabulary, local, &unit.value);
    set_attr(&mut out, "units", &unit.units);
    out
}

pub(super) fn build_clock_driver(driver: &OtherClockDriver, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "otherClockDriver");
    out.set_attribute("clockName", driver.clock_name.as_str());
    set_attr(&mut out, "clockSource", &driver.clock_source);
    out.push_child(clock_unit_element(vocabulary, "clockPeriod", &driver.clock_period));
    out.push_child(clock_unit_element(
        vocabulary,
        "clockPulseOffset",
        &driver.clock_pulse_offset,
    ));
    out.push_child(text_element(vocabulary, "clockPulseValue", &driver.clock_pulse_value));
    out.push_child(clock_unit_element(
        vocabulary,
        "clockPulseDuration",
        &driver.clock_pulse_duration,
    ));
    out
}
