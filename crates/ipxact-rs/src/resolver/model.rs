// crates/ipxact-rs/src/resolver/model.rs

use super::utils::{
    bool_attr, bool_child, is_present, local_name_refs, name_group, parameter_list, parameters,
    ranges, text, texts, vlnv_child,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    ComponentInstantiation, DesignConfigurationInstantiation, DesignInstantiation, Direction,
    DocumentType, Model, Port, Transactional, View, Wire, WireTypeDef,
};
use log::trace;

/// Parses `<model>`: views, instantiations and ports.
pub(super) fn resolve_model(element: &XmlElement, vocabulary: &Vocabulary) -> Model {
    let mut model = Model::default();

    if let Some(views) = element.child("views") {
        model.views = views
            .children_named("view")
            .map(|v| resolve_view(v, vocabulary))
            .collect();
    }

    if let Some(instantiations) = element.child("instantiations") {
        for child in &instantiations.children {
            match child.local_name() {
                "componentInstantiation" => model
                    .component_instantiations
                    .push(resolve_component_instantiation(child)),
                "designInstantiation" => model.design_instantiations.push(DesignInstantiation {
                    name_group: name_group(child),
                    design_ref: vlnv_child(child, "designRef", DocumentType::Design),
                }),
                "designConfigurationInstantiation" => model
                    .design_configuration_instantiations
                    .push(resolve_design_configuration_instantiation(child)),
                other => trace!("Skipping unknown instantiation <{}>", other),
            }
        }
    }

    if let Some(ports) = element.child("ports") {
        model.ports = ports
            .children_named("port")
            .map(|p| resolve_port(p, vocabulary))
            .collect();
    }

    model
}

fn resolve_view(element: &XmlElement, vocabulary: &Vocabulary) -> View {
    View {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        env_identifiers: texts(element, "envIdentifier"),
        component_instantiation_ref: text(element, "componentInstantiationRef"),
        design_instantiation_ref: text(element, "designInstantiationRef"),
        design_configuration_instantiation_ref: text(
            element,
            "designConfigurationInstantiationRef",
        ),
    }
}

/// `<language>` text and its `@strict` flag.
fn language(element: &XmlElement) -> (String, bool) {
    element
        .child("language")
        .map(|l| (l.text.clone(), bool_attr(l, "strict").unwrap_or(false)))
        .unwrap_or_default()
}

fn resolve_component_instantiation(element: &XmlElement) -> ComponentInstantiation {
    let (language, language_strict) = language(element);
    ComponentInstantiation {
        name_group: name_group(element),
        is_virtual: bool_child(element, "isVirtual").unwrap_or(false),
        language,
        language_strict,
        library_name: text(element, "libraryName"),
        package_name: text(element, "packageName"),
        module_name: text(element, "moduleName"),
        architecture_name: text(element, "architectureName"),
        configuration_name: text(element, "configurationName"),
        module_parameters: parameter_list(element, "moduleParameters", "moduleParameter"),
        file_set_refs: local_name_refs(element, "fileSetRef"),
        parameters: parameters(element),
    }
}

fn resolve_design_configuration_instantiation(
    element: &XmlElement,
) -> DesignConfigurationInstantiation {
    let (language, language_strict) = language(element);
    DesignConfigurationInstantiation {
        name_group: name_group(element),
        language,
        language_strict,
        design_configuration_ref: vlnv_child(
            element,
            "designConfigurationRef",
            DocumentType::DesignConfiguration,
        ),
        parameters: parameters(element),
    }
}

fn resolve_port(element: &XmlElement, vocabulary: &Vocabulary) -> Port {
    Port {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        wire: element.child("wire").map(resolve_wire),
        transactional: element.child("transactional").map(|t| Transactional {
            initiative: text(t, "initiative"),
            kind: text(t, "kind"),
            bus_width: text(t, "busWidth"),
            all_logical_initiatives_allowed: bool_attr(t, "allLogicalInitiativesAllowed")
                .unwrap_or(false),
        }),
        arrays: ranges(element, "arrays", "array"),
    }
}

fn resolve_wire(element: &XmlElement) -> Wire {
    Wire {
        direction: Direction::parse(element.child_text("direction").unwrap_or_default()),
        all_logical_directions_allowed: bool_attr(element, "allLogicalDirectionsAllowed")
            .unwrap_or(false),
        vectors: ranges(element, "vectors", "vector"),
        wire_type_defs: element
            .child("wireTypeDefs")
            .map(|w| {
                w.children_named("wireTypeDef")
                    .map(|d| WireTypeDef {
                        type_name: text(d, "typeName"),
                        view_refs: texts(d, "viewRef"),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        default_value: element
            .child("drivers")
            .and_then(|d| d.child("driver"))
            .map(|d| text(d, "defaultValue"))
            .unwrap_or_default(),
    }
}
