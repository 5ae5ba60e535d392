// crates/ipxact-rs/src/resolver/extension.rs

//! Reads the `<vendorExtensions>` list.
//!
//! Tool items may appear inside the `kactus2:extensions` wrapper or directly
//! under `<vendorExtensions>`; both are flattened into one list. Only
//! tool-prefixed elements are interpreted, everything else is kept verbatim.

use super::utils::{attr, bool_attr, name_group, text, texts, vlnv_attributes, vlnv_child};
use crate::revision::{TOOL_PREFIX, TOOL_WRAPPER};
use crate::tree::XmlElement;
use crate::types::extension::tags;
use crate::types::{
    ApiInterface, ComDirection, ComInterface, ComProperty, DependencyDirection, DocumentType,
    FileDependency, Point, SwView, SystemView, VendorExtension,
};
use log::{debug, warn};

fn is_tool_element(element: &XmlElement) -> bool {
    element.prefix() == Some(TOOL_PREFIX)
}

/// Resolves every item of a `<vendorExtensions>` element in document order.
pub(super) fn resolve_vendor_extensions(element: &XmlElement) -> Vec<VendorExtension> {
    let mut items = Vec::new();
    for child in &element.children {
        if is_tool_element(child) && child.local_name() == TOOL_WRAPPER {
            items.extend(child.children.iter().map(resolve_extension));
        } else {
            items.push(resolve_extension(child));
        }
    }
    debug!("Resolved {} vendor extension(s)", items.len());
    items
}

fn resolve_extension(element: &XmlElement) -> VendorExtension {
    if !is_tool_element(element) {
        return VendorExtension::Unrecognized(element.clone());
    }

    let local = element.local_name();
    if let Some(child_tag) = tags::child_of(local) {
        return VendorExtension::Group {
            tag: local.to_string(),
            children: element
                .children
                .iter()
                .map(|c| resolve_group_child(c, child_tag))
                .collect(),
        };
    }
    if tags::SCALARS.contains(&local) {
        return VendorExtension::scalar(local, element.text.clone());
    }

    VendorExtension::Unrecognized(element.clone())
}

fn resolve_group_child(element: &XmlElement, child_tag: &str) -> VendorExtension {
    if !is_tool_element(element) || element.local_name() != child_tag {
        debug!(
            "Keeping unexpected <{}> inside a group of <{}>",
            element.name, child_tag
        );
        return VendorExtension::Unrecognized(element.clone());
    }

    match child_tag {
        tags::PROPERTY => VendorExtension::ComProperty(resolve_property(element)),
        tags::SW_VIEW => VendorExtension::SwView(resolve_sw_view(element)),
        tags::SYSTEM_VIEW => VendorExtension::SystemView(resolve_system_view(element)),
        tags::COM_INTERFACE => VendorExtension::ComInterface(resolve_com_interface(element)),
        tags::API_INTERFACE => VendorExtension::ApiInterface(resolve_api_interface(element)),
        tags::FILE_DEPENDENCY => VendorExtension::FileDependency(resolve_file_dependency(element)),
        tags::SOURCE_DIRECTORY | tags::IGNORED_FILE => {
            VendorExtension::scalar(child_tag, element.text.clone())
        }
        _ => VendorExtension::Unrecognized(element.clone()),
    }
}

fn resolve_property(element: &XmlElement) -> ComProperty {
    ComProperty {
        name: attr(element, "name"),
        required: bool_attr(element, "required").unwrap_or(false),
        property_type: attr(element, "propertyType"),
        default_value: attr(element, "defaultValue"),
        description: attr(element, "description"),
    }
}

fn resolve_sw_view(element: &XmlElement) -> SwView {
    SwView {
        name_group: name_group(element),
        hierarchy_ref: vlnv_child(element, "hierarchyRef", DocumentType::Design),
        file_set_refs: texts(element, "fileSetRef"),
    }
}

fn resolve_system_view(element: &XmlElement) -> SystemView {
    SystemView {
        name_group: name_group(element),
        hierarchy_ref: vlnv_child(element, "hierarchyRef", DocumentType::Design),
        hw_view_ref: text(element, "hwViewRef"),
        file_set_refs: texts(element, "fileSetRef"),
    }
}

fn resolve_com_interface(element: &XmlElement) -> ComInterface {
    ComInterface {
        name_group: name_group(element),
        com_type: vlnv_child(element, "comType", DocumentType::ComDefinition),
        transfer_type: text(element, "transferType"),
        direction: ComDirection::parse(element.child_text("comDirection").unwrap_or_default()),
        property_values: element
            .child("propertyValues")
            .map(|w| {
                w.children_named("propertyValue")
                    .map(|p| (attr(p, "name"), attr(p, "value")))
                    .collect()
            })
            .unwrap_or_default(),
        com_implementation_ref: element
            .child("comImplementationRef")
            .map(|r| vlnv_attributes(r, DocumentType::Component))
            .unwrap_or_default(),
        default_position: element.child("position").and_then(resolve_position),
    }
}

fn resolve_api_interface(element: &XmlElement) -> ApiInterface {
    ApiInterface {
        name_group: name_group(element),
        api_type: vlnv_child(element, "apiType", DocumentType::ApiDefinition),
        dependency_direction: DependencyDirection::parse(
            element.child_text("dependencyDirection").unwrap_or_default(),
        ),
        default_position: element.child("position").and_then(resolve_position),
    }
}

fn resolve_file_dependency(element: &XmlElement) -> FileDependency {
    FileDependency {
        file1: text(element, "fileRef1"),
        file2: text(element, "fileRef2"),
        description: text(element, "description"),
        manual: bool_attr(element, "manual").unwrap_or(false),
        bidirectional: bool_attr(element, "bidirectional").unwrap_or(false),
        locked: bool_attr(element, "locked").unwrap_or(false),
    }
}

fn resolve_position(element: &XmlElement) -> Option<Point> {
    let coordinate = |key: &str| -> Option<f64> {
        let value = element.attribute(key)?;
        match value.trim().parse::<f64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("Ignoring position with invalid {} '{}'", key, value);
                None
            }
        }
    };
    Some(Point {
        x: coordinate("x")?,
        y: coordinate("y")?,
    })
}
