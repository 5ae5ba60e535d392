// crates/ipxact-rs/src/builder/model.rs

use super::utils::{
    bool_str, element, push_is_present, push_local_name_refs, push_name_group,
    push_parameter_list, push_parameters, push_ranges, push_text, push_texts, push_wrapped,
    text_element, vlnv_element,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    ComponentInstantiation, DesignConfigurationInstantiation, Direction, Model, Port, View, Wire,
};

/// Builds `<model>`, or `None` when the model is empty.
pub(super) fn build_model(model: &Model, vocabulary: &Vocabulary) -> Option<XmlElement> {
    if model.is_empty() {
        return None;
    }
    let mut out = element(vocabulary, "model");

    let views = model
        .views
        .iter()
        .map(|v| build_view(v, vocabulary))
        .collect();
    push_wrapped(&mut out, vocabulary, "views", views);

    let mut instantiations: Vec<XmlElement> = model
        .component_instantiations
        .iter()
        .map(|i| build_component_instantiation(i, vocabulary))
        .collect();
    instantiations.extend(model.design_instantiations.iter().map(|i| {
        let mut child = element(vocabulary, "designInstantiation");
        push_name_group(&mut child, vocabulary, &i.name_group);
        child.push_child(vlnv_element(vocabulary.tag("designRef"), &i.design_ref));
        child
    }));
    instantiations.extend(
        model
            .design_configuration_instantiations
            .iter()
            .map(|i| build_design_configuration_instantiation(i, vocabulary)),
    );
    push_wrapped(&mut out, vocabulary, "instantiations", instantiations);

    let ports = model
        .ports
        .iter()
        .map(|p| build_port(p, vocabulary))
        .collect();
    push_wrapped(&mut out, vocabulary, "ports", ports);

    Some(out)
}

fn build_view(view: &View, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "view");
    push_name_group(&mut out, vocabulary, &view.name_group);
    push_is_present(&mut out, vocabulary, &view.is_present);
    push_texts(&mut out, vocabulary, "envIdentifier", &view.env_identifiers);
    push_text(
        &mut out,
        vocabulary,
        "componentInstantiationRef",
        &view.component_instantiation_ref,
    );
    push_text(&mut out, vocabulary, "designInstantiationRef", &view.design_instantiation_ref);
    push_text(
        &mut out,
        vocabulary,
        "designConfigurationInstantiationRef",
        &view.design_configuration_instantiation_ref,
    );
    out
}

fn push_language(parent: &mut XmlElement, vocabulary: &Vocabulary, language: &str, strict: bool) {
    if language.is_empty() {
        return;
    }
    let mut child = text_element(vocabulary, "language", language);
    if strict {
        child.set_attribute("strict", "true");
    }
    parent.push_child(child);
}

fn build_component_instantiation(
    instantiation: &ComponentInstantiation,
    vocabulary: &Vocabulary,
) -> XmlElement {
    let mut out = element(vocabulary, "componentInstantiation");
    push_name_group(&mut out, vocabulary, &instantiation.name_group);
    if instantiation.is_virtual {
        out.push_child(text_element(vocabulary, "isVirtual", "true"));
    }
    push_language(
        &mut out,
        vocabulary,
        &instantiation.language,
        instantiation.language_strict,
    );
    push_text(&mut out, vocabulary, "libraryName", &instantiation.library_name);
    push_text(&mut out, vocabulary, "packageName", &instantiation.package_name);
    push_text(&mut out, vocabulary, "moduleName", &instantiation.module_name);
    push_text(&mut out, vocabulary, "architectureName", &instantiation.architecture_name);
    push_text(&mut out, vocabulary, "configurationName", &instantiation.configuration_name);
    push_parameter_list(
        &mut out,
        vocabulary,
        "moduleParameters",
        "moduleParameter",
        &instantiation.module_parameters,
    );
    push_local_name_refs(&mut out, vocabulary, "fileSetRef", &instantiation.file_set_refs);
    push_parameters(&mut out, vocabulary, &instantiation.parameters);
    out
}

fn build_design_configuration_instantiation(
    instantiation: &DesignConfigurationInstantiation,
    vocabulary: &Vocabulary,
) -> XmlElement {
    let mut out = element(vocabulary, "designConfigurationInstantiation");
    push_name_group(&mut out, vocabulary, &instantiation.name_group);
    push_language(
        &mut out,
        vocabulary,
        &instantiation.language,
        instantiation.language_strict,
    );
    out.push_child(vlnv_element(
        vocabulary.tag("designConfigurationRef"),
        &instantiation.design_configuration_ref,
    ));
    push_parameters(&mut out, vocabulary, &instantiation.parameters);
    out
}

fn build_port(port: &Port, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "port");
    push_name_group(&mut out, vocabulary, &port.name_group);
    push_is_present(&mut out, vocabulary, &port.is_present);

    if let Some(wire) = &port.wire {
        out.push_child(build_wire(wire, vocabulary));
    } else if let Some(transactional) = &port.transactional {
        let mut child = element(vocabulary, "transactional");
        if transactional.all_logical_initiatives_allowed {
            child.set_attribute("allLogicalInitiativesAllowed", "true");
        }
        push_text(&mut child, vocabulary, "initiative", &transactional.initiative);
        push_text(&mut child, vocabulary, "kind", &transactional.kind);
        push_text(&mut child, vocabulary, "busWidth", &transactional.bus_width);
        out.push_child(child);
    }

    push_ranges(&mut out, vocabulary, "arrays", "array", &port.arrays);
    out
}

fn build_wire(wire: &Wire, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "wire");
    if wire.all_logical_directions_allowed {
        out.set_attribute("allLogicalDirectionsAllowed", bool_str(true));
    }
    if wire.direction != Direction::Unspecified {
        out.push_child(text_element(vocabulary, "direction", wire.direction.as_str()));
    }
    push_ranges(&mut out, vocabulary, "vectors", "vector", &wire.vectors);

    let type_defs = wire
        .wire_type_defs
        .iter()
        .map(|d| {
            let mut child = element(vocabulary, "wireTypeDef");
            push_text(&mut child, vocabulary, "typeName", &d.type_name);
            push_texts(&mut child, vocabulary, "viewRef", &d.view_refs);
            child
        })
        .collect();
    push_wrapped(&mut out, vocabulary, "wireTypeDefs", type_defs);

    if !wire.default_value.is_empty() {
        out.push_child(element(vocabulary, "drivers").with_child(
            element(vocabulary, "driver")
                .with_child(text_element(vocabulary, "defaultValue", &wire.default_value)),
        ));
    }
    out
}
