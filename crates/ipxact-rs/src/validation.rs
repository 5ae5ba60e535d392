// crates/ipxact-rs/src/validation.rs

//! Structural and referential checks over a fully built [`Component`].
//!
//! Validation never mutates the model and never stops early: every finding is
//! collected into the returned list.

use crate::revision::Revision;
use crate::types::extension::tags;
use crate::types::{Component, InterfaceMode, Vlnv};
use core::fmt;
use log::debug;
use std::collections::BTreeMap;

/// Category of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A VLNV with one or more empty fields.
    InvalidVlnv,
    MissingName,
    /// Two or more items of one collection share a name.
    DuplicateName,
    /// A reference to an item that does not exist in this component.
    UnresolvedReference,
    /// A choice without enumerations.
    EmptyChoice,
    /// A construct the selected revision does not have.
    IllegalConstruct,
    /// More than one vendor-extension group with the same tag.
    DuplicateExtensionGroup,
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Display identifier of the offending entity, e.g. `bus interface 'clk'`.
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Validates `component` against the rules of `revision`.
///
/// The returned list is empty when no problems were found.
pub fn validate_component(component: &Component, revision: Revision) -> Vec<Diagnostic> {
    let mut validator = Validator {
        component,
        revision,
        diagnostics: Vec::new(),
    };

    validator.check_identity();
    validator.check_names();
    validator.check_bus_interfaces();
    validator.check_memory();
    validator.check_items();
    validator.check_model();
    validator.check_choices();
    validator.check_revision();
    validator.check_extensions();

    debug!(
        "Validated component {}: {} diagnostic(s)",
        component.vlnv,
        validator.diagnostics.len()
    );
    validator.diagnostics
}

struct Validator<'a> {
    component: &'a Component,
    revision: Revision,
    diagnostics: Vec<Diagnostic>,
}

impl Validator<'_> {
    fn report(&mut self, kind: DiagnosticKind, location: String, message: String) {
        self.diagnostics.push(Diagnostic {
            kind,
            location,
            message,
        });
    }

    fn check_vlnv(&mut self, vlnv: &Vlnv, location: String, what: &str) {
        if !vlnv.is_valid() {
            self.report(
                DiagnosticKind::InvalidVlnv,
                location,
                format!("{} '{}' is not a valid VLNV", what, vlnv),
            );
        }
    }

    /// Reports unnamed items and one diagnostic per duplicated name.
    fn check_unique(&mut self, collection: &str, names: Vec<&str>) {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for (index, name) in names.into_iter().enumerate() {
            if name.is_empty() {
                self.report(
                    DiagnosticKind::MissingName,
                    format!("{} #{}", collection, index + 1),
                    "name is missing".to_string(),
                );
            } else {
                *counts.entry(name).or_default() += 1;
            }
        }
        for (name, count) in counts {
            if count > 1 {
                self.report(
                    DiagnosticKind::DuplicateName,
                    format!("{} '{}'", collection, name),
                    format!("name is used by {} {}s", count, collection),
                );
            }
        }
    }

    fn unresolved(&mut self, location: String, target: &str, name: &str) {
        self.report(
            DiagnosticKind::UnresolvedReference,
            location,
            format!("refers to unknown {} '{}'", target, name),
        );
    }

    // --- Checks ---

    fn check_identity(&mut self) {
        let c = self.component;
        self.check_vlnv(&c.vlnv, "component".to_string(), "component identity");
    }

    fn check_names(&mut self) {
        let c = self.component;
        self.check_unique("bus interface", c.bus_interface_names());
        self.check_unique("channel", c.channel_names());
        self.check_unique("remap state", c.remap_state_names());
        self.check_unique("address space", c.address_space_names());
        self.check_unique("memory map", c.memory_map_names());
        self.check_unique("cpu", c.cpu_names());
        self.check_unique("file set", c.file_set_names());
        self.check_unique("choice", c.choice_names());
        self.check_unique("view", c.view_names());
        self.check_unique("port", c.port_names());
        self.check_unique(
            "parameter",
            c.parameters.iter().map(|p| p.name()).collect(),
        );
        self.check_unique(
            "component generator",
            c.component_generators.iter().map(|g| g.name()).collect(),
        );
        self.check_unique(
            "component instantiation",
            c.model
                .component_instantiations
                .iter()
                .map(|i| i.name())
                .collect(),
        );
        self.check_unique(
            "design instantiation",
            c.model.design_instantiations.iter().map(|i| i.name()).collect(),
        );
        self.check_unique(
            "design configuration instantiation",
            c.model
                .design_configuration_instantiations
                .iter()
                .map(|i| i.name())
                .collect(),
        );
    }

    fn check_bus_interfaces(&mut self) {
        let c = self.component;
        for interface in &c.bus_interfaces {
            let location = format!("bus interface '{}'", interface.name());

            self.check_vlnv(&interface.bus_type, location.clone(), "bus type");

            if let Some(map) = interface.memory_map_ref() {
                if c.memory_map(map).is_none() {
                    self.unresolved(location.clone(), "memory map", map);
                }
            }
            if let Some(space) = interface.address_space_ref() {
                if c.address_space(space).is_none() {
                    self.unresolved(location.clone(), "address space", space);
                }
            }
            if let InterfaceMode::Target(target) = &interface.mode {
                for bridge in &target.transparent_bridges {
                    let resolved = c
                        .bus_interface(&bridge.initiator_ref)
                        .is_some_and(|i| i.mode.is_initiator());
                    if !resolved {
                        self.unresolved(
                            location.clone(),
                            "initiator interface",
                            &bridge.initiator_ref,
                        );
                    }
                }
            }

            for abstraction in &interface.abstraction_types {
                if let Some(reference) = &abstraction.abstraction_ref {
                    self.check_vlnv(reference, location.clone(), "abstraction reference");
                }
                for view in &abstraction.view_refs {
                    if c.model.view(view).is_none() {
                        self.unresolved(location.clone(), "view", view);
                    }
                }
            }
            for port in interface.physical_port_names() {
                if c.port(port).is_none() {
                    self.unresolved(location.clone(), "port", port);
                }
            }
        }
    }

    fn check_memory(&mut self) {
        let c = self.component;
        for map in &c.memory_maps {
            let location = format!("memory map '{}'", map.name());
            self.check_unique(
                "address block",
                map.address_blocks
                    .iter()
                    .map(|b| b.name_group.name.as_str())
                    .collect(),
            );
            for remap in &map.memory_remaps {
                if !remap.remap_state.is_empty()
                    && !c.remap_states.iter().any(|s| s.name() == remap.remap_state)
                {
                    self.unresolved(location.clone(), "remap state", &remap.remap_state);
                }
            }
        }
    }

    fn check_items(&mut self) {
        let c = self.component;
        for cpu in &c.cpus {
            for space in &cpu.address_space_refs {
                if c.address_space(space).is_none() {
                    self.unresolved(format!("cpu '{}'", cpu.name()), "address space", space);
                }
            }
            if !cpu.memory_map_ref.is_empty() && c.memory_map(&cpu.memory_map_ref).is_none() {
                self.unresolved(
                    format!("cpu '{}'", cpu.name()),
                    "memory map",
                    &cpu.memory_map_ref,
                );
            }
        }
        for channel in &c.channels {
            for reference in &channel.bus_interface_refs {
                if c.bus_interface(reference).is_none() {
                    self.unresolved(
                        format!("channel '{}'", channel.name()),
                        "bus interface",
                        reference,
                    );
                }
            }
        }
        for state in &c.remap_states {
            for port in &state.remap_ports {
                if c.port(&port.port_ref).is_none() {
                    self.unresolved(
                        format!("remap state '{}'", state.name()),
                        "port",
                        &port.port_ref,
                    );
                }
            }
        }
    }

    fn check_model(&mut self) {
        let c = self.component;
        let model = &c.model;

        for view in &model.views {
            let location = format!("view '{}'", view.name());
            let refs = [
                (
                    &view.component_instantiation_ref,
                    "component instantiation",
                    model.component_instantiation(&view.component_instantiation_ref).is_some(),
                ),
                (
                    &view.design_instantiation_ref,
                    "design instantiation",
                    model.design_instantiation(&view.design_instantiation_ref).is_some(),
                ),
                (
                    &view.design_configuration_instantiation_ref,
                    "design configuration instantiation",
                    model
                        .design_configuration_instantiation(
                            &view.design_configuration_instantiation_ref,
                        )
                        .is_some(),
                ),
            ];
            for (reference, target, found) in refs {
                if !reference.is_empty() && !found {
                    self.unresolved(location.clone(), target, reference);
                }
            }
        }

        for instantiation in &model.component_instantiations {
            for file_set in &instantiation.file_set_refs {
                if c.file_set(file_set).is_none() {
                    self.unresolved(
                        format!("component instantiation '{}'", instantiation.name()),
                        "file set",
                        file_set,
                    );
                }
            }
        }
        for instantiation in &model.design_instantiations {
            self.check_vlnv(
                &instantiation.design_ref,
                format!("design instantiation '{}'", instantiation.name()),
                "design reference",
            );
        }
        for instantiation in &model.design_configuration_instantiations {
            self.check_vlnv(
                &instantiation.design_configuration_ref,
                format!("design configuration instantiation '{}'", instantiation.name()),
                "design configuration reference",
            );
        }
    }

    fn check_choices(&mut self) {
        let c = self.component;
        for choice in &c.choices {
            if choice.enumerations.is_empty() {
                self.report(
                    DiagnosticKind::EmptyChoice,
                    format!("choice '{}'", choice.name),
                    "choice has no enumerations".to_string(),
                );
            }
        }
        for parameter in &c.parameters {
            if !parameter.choice_ref.is_empty() && c.choice(&parameter.choice_ref).is_none() {
                self.unresolved(
                    format!("parameter '{}'", parameter.name()),
                    "choice",
                    &parameter.choice_ref,
                );
            }
        }
    }

    /// Constructs the revision does not have.
    fn check_revision(&mut self) {
        let vocabulary = self.revision.vocabulary();
        let c = self.component;

        if !vocabulary.remap_states_allowed && !c.remap_states.is_empty() {
            self.report(
                DiagnosticKind::IllegalConstruct,
                "component".to_string(),
                format!("remap states are not part of {}", self.revision),
            );
        }
        if vocabulary.remap_address_wrapped {
            for i in &c.bus_interfaces {
                if let InterfaceMode::MirroredTarget(mirrored) = &i.mode {
                    let stated = mirrored.remap_addresses.iter().filter(|a| !a.state.is_empty());
                    for address in stated {
                        self.report(
                            DiagnosticKind::IllegalConstruct,
                            format!("bus interface '{}'", i.name()),
                            format!(
                                "remap address state '{}' is not part of {}",
                                address.state, self.revision
                            ),
                        );
                    }
                }
            }
        }
        for cpu in &c.cpus {
            let illegal = if vocabulary.cpu_memory_map_ref {
                (!cpu.address_space_refs.is_empty()).then_some("addressSpaceRef")
            } else {
                (!cpu.memory_map_ref.is_empty()).then_some("memoryMapRef")
            };
            if let Some(element) = illegal {
                self.report(
                    DiagnosticKind::IllegalConstruct,
                    format!("cpu '{}'", cpu.name()),
                    format!("{} is not part of {}", element, self.revision),
                );
            }
        }
        if vocabulary.is_present_allowed {
            return;
        }

        let mut conditional: Vec<String> = Vec::new();
        let mut mark = |present: &str, location: String| {
            if !present.is_empty() {
                conditional.push(location);
            }
        };
        for i in &c.bus_interfaces {
            mark(i.is_present.as_str(), format!("bus interface '{}'", i.name()));
            if let InterfaceMode::Target(target) = &i.mode {
                for bridge in &target.transparent_bridges {
                    mark(
                        bridge.is_present.as_str(),
                        format!(
                            "transparent bridge '{}' of bus interface '{}'",
                            bridge.initiator_ref,
                            i.name()
                        ),
                    );
                }
            }
            for map in i.abstraction_types.iter().flat_map(|a| a.port_maps.iter()) {
                mark(
                    map.is_present.as_str(),
                    format!(
                        "port map '{}' of bus interface '{}'",
                        map.logical_port.name,
                        i.name()
                    ),
                );
            }
        }
        for ch in &c.channels {
            mark(ch.is_present.as_str(), format!("channel '{}'", ch.name()));
        }
        for s in &c.address_spaces {
            mark(s.is_present.as_str(), format!("address space '{}'", s.name()));
            for segment in &s.segments {
                mark(
                    segment.is_present.as_str(),
                    format!("segment '{}'", segment.name_group.name),
                );
            }
        }
        for m in &c.memory_maps {
            mark(m.is_present.as_str(), format!("memory map '{}'", m.name()));
            for block in &m.address_blocks {
                mark(
                    block.is_present.as_str(),
                    format!("address block '{}'", block.name_group.name),
                );
            }
            for remap in &m.memory_remaps {
                mark(
                    remap.is_present.as_str(),
                    format!("memory remap '{}' of memory map '{}'", remap.remap_state, m.name()),
                );
                for block in &remap.address_blocks {
                    mark(
                        block.is_present.as_str(),
                        format!("address block '{}'", block.name_group.name),
                    );
                }
            }
        }
        for v in &c.model.views {
            mark(v.is_present.as_str(), format!("view '{}'", v.name()));
        }
        for p in &c.model.ports {
            mark(p.is_present.as_str(), format!("port '{}'", p.name()));
        }
        for cpu in &c.cpus {
            mark(cpu.is_present.as_str(), format!("cpu '{}'", cpu.name()));
        }
        for file in c.file_sets.iter().flat_map(|fs| fs.files.iter()) {
            mark(file.is_present.as_str(), format!("file '{}'", file.name));
        }

        for location in conditional {
            self.report(
                DiagnosticKind::IllegalConstruct,
                location,
                format!("isPresent is not part of {}", self.revision),
            );
        }
    }

    fn check_extensions(&mut self) {
        let extensions = &self.component.vendor_extensions;
        for (group, _) in tags::GROUPS {
            let count = extensions.count_tagged(group);
            if count > 1 {
                self.report(
                    DiagnosticKind::DuplicateExtensionGroup,
                    "vendor extensions".to_string(),
                    format!("{} groups tagged '{}'; only the first is used", count, group),
                );
            }
        }
    }
}
