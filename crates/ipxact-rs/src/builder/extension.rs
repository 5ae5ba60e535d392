// crates/ipxact-rs/src/builder/extension.rs

//! Writes the `<vendorExtensions>` list.
//!
//! Foreign items that precede the first tool item are written directly under
//! `<vendorExtensions>`. Everything from the first tool item on goes into one
//! `kactus2:extensions` wrapper, so the flattened list reads back in the same
//! order.

use super::utils::{bool_str, element, push_name_group, vlnv_element};
use crate::revision::{TOOL_PREFIX, TOOL_WRAPPER, Vocabulary, tool_tag};
use crate::tree::XmlElement;
use crate::types::{
    ApiInterface, ComDirection, ComInterface, ComProperty, FileDependency, Point, SwView,
    SystemView, VendorExtension, VendorExtensions,
};

fn is_tool_item(item: &VendorExtension) -> bool {
    match item {
        VendorExtension::Unrecognized(element) => element.prefix() == Some(TOOL_PREFIX),
        _ => true,
    }
}

/// Builds `<vendorExtensions>`, or `None` when the list is empty.
pub(super) fn build_vendor_extensions(
    extensions: &VendorExtensions,
    vocabulary: &Vocabulary,
) -> Option<XmlElement> {
    if extensions.is_empty() {
        return None;
    }

    let items = extensions.items();
    let leading = items.iter().take_while(|item| !is_tool_item(item)).count();
    let (foreign, wrapped) = items.split_at(leading);

    let mut out = element(vocabulary, "vendorExtensions");
    for item in foreign {
        out.push_child(build_extension(item, vocabulary));
    }
    if !wrapped.is_empty() {
        let mut wrapper = XmlElement::new(tool_tag(TOOL_WRAPPER));
        for item in wrapped {
            wrapper.push_child(build_extension(item, vocabulary));
        }
        out.push_child(wrapper);
    }
    Some(out)
}

fn build_extension(item: &VendorExtension, vocabulary: &Vocabulary) -> XmlElement {
    match item {
        VendorExtension::Group { tag, children } => {
            let mut out = XmlElement::new(tool_tag(tag));
            out.children = children
                .iter()
                .map(|c| build_extension(c, vocabulary))
                .collect();
            out
        }
        VendorExtension::Scalar { tag, value } => {
            XmlElement::new(tool_tag(tag)).with_text(value.as_str())
        }
        VendorExtension::SwView(view) => build_sw_view(view, vocabulary),
        VendorExtension::SystemView(view) => build_system_view(view, vocabulary),
        VendorExtension::ComInterface(interface) => build_com_interface(interface, vocabulary),
        VendorExtension::ApiInterface(interface) => build_api_interface(interface, vocabulary),
        VendorExtension::FileDependency(dependency) => build_file_dependency(dependency),
        VendorExtension::ComProperty(property) => build_property(property),
        VendorExtension::Unrecognized(element) => element.clone(),
    }
}

fn tool_text(local: &str, value: &str) -> XmlElement {
    XmlElement::new(tool_tag(local)).with_text(value)
}

fn push_tool_text(parent: &mut XmlElement, local: &str, value: &str) {
    if !value.is_empty() {
        parent.push_child(tool_text(local, value));
    }
}

fn position_element(point: &Point) -> XmlElement {
    XmlElement::new(tool_tag("position"))
        .with_attribute("x", point.x.to_string())
        .with_attribute("y", point.y.to_string())
}

fn build_sw_view(view: &SwView, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = XmlElement::new(tool_tag("swView"));
    push_name_group(&mut out, vocabulary, &view.name_group);
    if !view.hierarchy_ref.is_empty() {
        out.push_child(vlnv_element(tool_tag("hierarchyRef"), &view.hierarchy_ref));
    }
    for reference in &view.file_set_refs {
        out.push_child(tool_text("fileSetRef", reference));
    }
    out
}

fn build_system_view(view: &SystemView, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = XmlElement::new(tool_tag("systemView"));
    push_name_group(&mut out, vocabulary, &view.name_group);
    if !view.hierarchy_ref.is_empty() {
        out.push_child(vlnv_element(tool_tag("hierarchyRef"), &view.hierarchy_ref));
    }
    push_tool_text(&mut out, "hwViewRef", &view.hw_view_ref);
    for reference in &view.file_set_refs {
        out.push_child(tool_text("fileSetRef", reference));
    }
    out
}

fn build_com_interface(interface: &ComInterface, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = XmlElement::new(tool_tag("comInterface"));
    push_name_group(&mut out, vocabulary, &interface.name_group);
    if !interface.com_type.is_empty() {
        out.push_child(vlnv_element(tool_tag("comType"), &interface.com_type));
    }
    push_tool_text(&mut out, "transferType", &interface.transfer_type);
    if interface.direction != ComDirection::Unspecified {
        out.push_child(tool_text("comDirection", interface.direction.as_str()));
    }
    if !interface.property_values.is_empty() {
        let mut values = XmlElement::new(tool_tag("propertyValues"));
        for (name, value) in &interface.property_values {
            values.push_child(
                XmlElement::new(tool_tag("propertyValue"))
                    .with_attribute("name", name.as_str())
                    .with_attribute("value", value.as_str()),
            );
        }
        out.push_child(values);
    }
    if !interface.com_implementation_ref.is_empty() {
        out.push_child(vlnv_element(
            tool_tag("comImplementationRef"),
            &interface.com_implementation_ref,
        ));
    }
    if let Some(point) = &interface.default_position {
        out.push_child(position_element(point));
    }
    out
}

fn build_api_interface(interface: &ApiInterface, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = XmlElement::new(tool_tag("apiInterface"));
    push_name_group(&mut out, vocabulary, &interface.name_group);
    if !interface.api_type.is_empty() {
        out.push_child(vlnv_element(tool_tag("apiType"), &interface.api_type));
    }
    out.push_child(tool_text(
        "dependencyDirection",
        interface.dependency_direction.as_str(),
    ));
    if let Some(point) = &interface.default_position {
        out.push_child(position_element(point));
    }
    out
}

fn build_file_dependency(dependency: &FileDependency) -> XmlElement {
    let mut out = XmlElement::new(tool_tag("fileDependency"))
        .with_attribute("manual", bool_str(dependency.manual))
        .with_attribute("bidirectional", bool_str(dependency.bidirectional))
        .with_attribute("locked", bool_str(dependency.locked))
        .with_child(tool_text("fileRef1", &dependency.file1))
        .with_child(tool_text("fileRef2", &dependency.file2));
    push_tool_text(&mut out, "description", &dependency.description);
    out
}

fn build_property(property: &ComProperty) -> XmlElement {
    XmlElement::new(tool_tag("property"))
        .with_attribute("name", property.name.as_str())
        .with_attribute("required", bool_str(property.required))
        .with_attribute("propertyType", property.property_type.as_str())
        .with_attribute("defaultValue", property.default_value.as_str())
        .with_attribute("description", property.description.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;
    use crate::types::extension::tags;

    #[test]
    fn test_empty_list_writes_nothing() {
        let out = build_vendor_extensions(&VendorExtensions::new(), Revision::Std14.vocabulary());
        assert!(out.is_none());
    }

    #[test]
    fn test_foreign_items_stay_outside_the_wrapper() {
        let foreign = XmlElement::new("acme:note").with_text("x");
        let list = VendorExtensions::from(vec![
            VendorExtension::Unrecognized(foreign.clone()),
            VendorExtension::scalar(tags::AUTHOR, "Ada"),
            VendorExtension::Unrecognized(XmlElement::new("kactus2:kts_attributes")),
        ]);

        let out = build_vendor_extensions(&list, Revision::Std22.vocabulary()).unwrap();
        assert_eq!(out.name, "ipxact:vendorExtensions");
        assert_eq!(out.children.len(), 2);
        assert_eq!(out.children[0], foreign);

        let wrapper = &out.children[1];
        assert_eq!(wrapper.name, "kactus2:extensions");
        let names: Vec<&str> = wrapper.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["kactus2:author", "kactus2:kts_attributes"]);
        assert_eq!(wrapper.children[0].text, "Ada");
    }

    #[test]
    fn test_foreign_items_after_a_tool_item_keep_their_order() {
        let note = XmlElement::new("acme:note").with_text("x");
        let list = VendorExtensions::from(vec![
            VendorExtension::scalar(tags::AUTHOR, "Ada"),
            VendorExtension::Unrecognized(note.clone()),
            VendorExtension::scalar(tags::SOURCE_DIRECTORY, "src"),
        ]);

        let out = build_vendor_extensions(&list, Revision::Std22.vocabulary()).unwrap();
        assert_eq!(out.children.len(), 1);
        let wrapper = &out.children[0];
        assert_eq!(wrapper.name, "kactus2:extensions");
        let names: Vec<&str> = wrapper.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["kactus2:author", "acme:note", "kactus2:sourceDirectory"]
        );
        assert_eq!(wrapper.children[1], note);
    }

    #[test]
    fn test_only_foreign_items_have_no_wrapper() {
        let list = VendorExtensions::from(vec![VendorExtension::Unrecognized(XmlElement::new(
            "acme:note",
        ))]);
        let out = build_vendor_extensions(&list, Revision::Std14.vocabulary()).unwrap();
        assert!(out.child(TOOL_WRAPPER).is_none());
    }

    #[test]
    fn test_group_children_use_tool_prefix() {
        let list = VendorExtensions::from(vec![VendorExtension::Group {
            tag: tags::SOURCE_DIRECTORIES.to_string(),
            children: vec![VendorExtension::scalar(tags::SOURCE_DIRECTORY, "src")],
        }]);
        let out = build_vendor_extensions(&list, Revision::Std14.vocabulary()).unwrap();
        let group = out
            .child(TOOL_WRAPPER)
            .and_then(|w| w.child(tags::SOURCE_DIRECTORIES))
            .unwrap();
        assert_eq!(group.name, "kactus2:sourceDirectories");
        assert_eq!(group.children[0].name, "kactus2:sourceDirectory");
        assert_eq!(group.children[0].text, "src");
    }

    #[test]
    fn test_position_is_written_as_attributes() {
        let interface = ApiInterface {
            default_position: Some(Point { x: 10.5, y: -20.0 }),
            ..Default::default()
        };
        let out = build_api_interface(&interface, Revision::Std22.vocabulary());
        let position = out.child("position").unwrap();
        assert_eq!(position.attribute("x"), Some("10.5"));
        assert_eq!(position.attribute("y"), Some("-20"));
        assert_eq!(out.child_text("dependencyDirection"), Some("requester"));
    }
}
