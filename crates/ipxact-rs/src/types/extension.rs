// crates/ipxact-rs/src/types/extension.rs

//! Tool-specific vendor extensions.
//!
//! Extensions are kept as one ordered, heterogeneous list. Tool metadata is
//! stored in named groups (`swViews`, `sourceDirectories`, ...) whose children
//! share one type, plus a few scalar items such as `author`. The typed
//! accessors on [`Component`](super::Component) are views over this list.
//! Anything the reader does not know is kept as [`VendorExtension::Unrecognized`]
//! so it is written back unchanged.

use super::common::NameGroup;
use super::vlnv::Vlnv;
use crate::tree::XmlElement;

/// Group and child tags of the tool vocabulary. Tags are stored without a
/// namespace prefix; the writer adds the tool prefix.
pub mod tags {
    pub const PROPERTIES: &str = "properties";
    pub const PROPERTY: &str = "property";
    pub const SW_VIEWS: &str = "swViews";
    pub const SW_VIEW: &str = "swView";
    pub const SYSTEM_VIEWS: &str = "systemViews";
    pub const SYSTEM_VIEW: &str = "systemView";
    pub const COM_INTERFACES: &str = "comInterfaces";
    pub const COM_INTERFACE: &str = "comInterface";
    pub const API_INTERFACES: &str = "apiInterfaces";
    pub const API_INTERFACE: &str = "apiInterface";
    pub const FILE_DEPENDENCIES: &str = "fileDependencies";
    pub const FILE_DEPENDENCY: &str = "fileDependency";
    pub const SOURCE_DIRECTORIES: &str = "sourceDirectories";
    pub const SOURCE_DIRECTORY: &str = "sourceDirectory";
    pub const IGNORED_FILES: &str = "ignoredFiles";
    pub const IGNORED_FILE: &str = "ignoredFile";
    pub const AUTHOR: &str = "author";

    /// Every group tag together with the tag its children carry.
    pub const GROUPS: [(&str, &str); 8] = [
        (PROPERTIES, PROPERTY),
        (SW_VIEWS, SW_VIEW),
        (SYSTEM_VIEWS, SYSTEM_VIEW),
        (COM_INTERFACES, COM_INTERFACE),
        (API_INTERFACES, API_INTERFACE),
        (FILE_DEPENDENCIES, FILE_DEPENDENCY),
        (SOURCE_DIRECTORIES, SOURCE_DIRECTORY),
        (IGNORED_FILES, IGNORED_FILE),
    ];

    pub const SCALARS: [&str; 1] = [AUTHOR];

    /// Child tag for a known group tag.
    pub fn child_of(group: &str) -> Option<&'static str> {
        GROUPS.iter().find(|(g, _)| *g == group).map(|(_, c)| *c)
    }
}

/// Diagram position of a software interface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A software view: a hierarchy reference and the file sets it builds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwView {
    pub name_group: NameGroup,
    pub hierarchy_ref: Vlnv,
    pub file_set_refs: Vec<String>,
}

/// A system view: a system design reference mapped onto a hardware view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemView {
    pub name_group: NameGroup,
    pub hierarchy_ref: Vlnv,
    pub hw_view_ref: String,
    pub file_set_refs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComDirection {
    In,
    Out,
    InOut,
    #[default]
    Unspecified,
}

impl ComDirection {
    pub fn parse(value: &str) -> ComDirection {
        match value.trim() {
            "in" => ComDirection::In,
            "out" => ComDirection::Out,
            "inout" => ComDirection::InOut,
            _ => ComDirection::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComDirection::In => "in",
            ComDirection::Out => "out",
            ComDirection::InOut => "inout",
            ComDirection::Unspecified => "",
        }
    }
}

/// A communication interface of a software component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComInterface {
    pub name_group: NameGroup,
    pub com_type: Vlnv,
    pub transfer_type: String,
    pub direction: ComDirection,
    /// `<propertyValues><propertyValue name=.. value=..>` in document order.
    pub property_values: Vec<(String, String)>,
    pub com_implementation_ref: Vlnv,
    pub default_position: Option<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyDirection {
    #[default]
    Requester,
    Provider,
}

impl DependencyDirection {
    pub fn parse(value: &str) -> DependencyDirection {
        match value.trim() {
            "provider" => DependencyDirection::Provider,
            _ => DependencyDirection::Requester,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DependencyDirection::Requester => "requester",
            DependencyDirection::Provider => "provider",
        }
    }
}

/// An API interface of a software component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiInterface {
    pub name_group: NameGroup,
    pub api_type: Vlnv,
    pub dependency_direction: DependencyDirection,
    pub default_position: Option<Point>,
}

/// A dependency between two files of the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDependency {
    pub file1: String,
    pub file2: String,
    pub description: String,
    /// Added by hand rather than by dependency analysis.
    pub manual: bool,
    pub bidirectional: bool,
    pub locked: bool,
}

/// A software property definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComProperty {
    pub name: String,
    pub required: bool,
    pub property_type: String,
    pub default_value: String,
    pub description: String,
}

/// One item of the vendor-extension list.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorExtension {
    /// A named container of same-typed children.
    Group {
        tag: String,
        children: Vec<VendorExtension>,
    },
    /// A named text value (e.g. `author`, `sourceDirectory`).
    Scalar { tag: String, value: String },
    SwView(SwView),
    SystemView(SystemView),
    ComInterface(ComInterface),
    ApiInterface(ApiInterface),
    FileDependency(FileDependency),
    ComProperty(ComProperty),
    /// Foreign or unknown content, kept verbatim.
    Unrecognized(XmlElement),
}

impl VendorExtension {
    pub fn scalar(tag: impl Into<String>, value: impl Into<String>) -> Self {
        VendorExtension::Scalar {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// The tag this item is stored under.
    pub fn tag(&self) -> &str {
        match self {
            VendorExtension::Group { tag, .. } | VendorExtension::Scalar { tag, .. } => {
                tag.as_str()
            }
            VendorExtension::SwView(_) => tags::SW_VIEW,
            VendorExtension::SystemView(_) => tags::SYSTEM_VIEW,
            VendorExtension::ComInterface(_) => tags::COM_INTERFACE,
            VendorExtension::ApiInterface(_) => tags::API_INTERFACE,
            VendorExtension::FileDependency(_) => tags::FILE_DEPENDENCY,
            VendorExtension::ComProperty(_) => tags::PROPERTY,
            VendorExtension::Unrecognized(element) => element.name.as_str(),
        }
    }

    fn is_group(&self, group_tag: &str) -> bool {
        matches!(self, VendorExtension::Group { tag, .. } if tag == group_tag)
    }

    fn is_scalar(&self, scalar_tag: &str) -> bool {
        matches!(self, VendorExtension::Scalar { tag, .. } if tag == scalar_tag)
    }
}

/// The ordered vendor-extension list of a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VendorExtensions {
    items: Vec<VendorExtension>,
}

impl VendorExtensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[VendorExtension] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorExtension> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, extension: VendorExtension) {
        self.items.push(extension);
    }

    /// Number of top-level items carrying `tag`.
    pub fn count_tagged(&self, tag: &str) -> usize {
        self.items.iter().filter(|e| e.tag() == tag).count()
    }

    /// Children tagged `child_tag` of the first group tagged `group_tag`.
    /// Returns an empty list if there is no such group.
    pub fn grouped_extensions_by_type(
        &self,
        group_tag: &str,
        child_tag: &str,
    ) -> Vec<&VendorExtension> {
        self.items
            .iter()
            .find_map(|e| match e {
                VendorExtension::Group { tag, children } if tag == group_tag => Some(children),
                _ => None,
            })
            .map(|children| children.iter().filter(|c| c.tag() == child_tag).collect())
            .unwrap_or_default()
    }

    /// Replaces the group tagged `group_tag` with one holding `items`.
    ///
    /// Every existing group with that tag is removed; the new group is appended
    /// at the end of the list, and only if `items` is non-empty.
    pub fn set_grouped_extensions(&mut self, group_tag: &str, items: Vec<VendorExtension>) {
        self.items.retain(|e| !e.is_group(group_tag));
        if !items.is_empty() {
            self.items.push(VendorExtension::Group {
                tag: group_tag.to_string(),
                children: items,
            });
        }
    }

    /// Value of the first scalar tagged `tag`.
    pub fn scalar(&self, tag: &str) -> Option<&str> {
        self.items.iter().find_map(|e| match e {
            VendorExtension::Scalar { tag: t, value } if t == tag => Some(value.as_str()),
            _ => None,
        })
    }

    /// Removes scalars tagged `tag` and appends a new one if `value` is non-empty.
    pub fn set_scalar(&mut self, tag: &str, value: &str) {
        self.items.retain(|e| !e.is_scalar(tag));
        if !value.is_empty() {
            self.items.push(VendorExtension::scalar(tag, value));
        }
    }

    /// Text values of the scalar children of a group.
    pub(crate) fn grouped_scalars(&self, group_tag: &str, child_tag: &str) -> Vec<&str> {
        self.grouped_extensions_by_type(group_tag, child_tag)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::Scalar { value, .. } => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn set_grouped_scalars(
        &mut self,
        group_tag: &str,
        child_tag: &str,
        values: Vec<String>,
    ) {
        let items = values
            .into_iter()
            .map(|value| VendorExtension::scalar(child_tag, value))
            .collect();
        self.set_grouped_extensions(group_tag, items);
    }
}

impl From<Vec<VendorExtension>> for VendorExtensions {
    fn from(items: Vec<VendorExtension>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a VendorExtensions {
    type Item = &'a VendorExtension;
    type IntoIter = core::slice::Iter<'a, VendorExtension>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dirs(values: &[&str]) -> Vec<VendorExtension> {
        values
            .iter()
            .map(|v| VendorExtension::scalar(tags::SOURCE_DIRECTORY, *v))
            .collect()
    }

    #[test]
    fn test_set_group_appends_at_end_and_keeps_others() {
        let foreign = VendorExtension::Unrecognized(XmlElement::new("acme:note").with_text("x"));
        let mut list = VendorExtensions::from(vec![
            VendorExtension::Group {
                tag: tags::SOURCE_DIRECTORIES.to_string(),
                children: dirs(&["old"]),
            },
            foreign.clone(),
        ]);

        list.set_grouped_extensions(tags::SOURCE_DIRECTORIES, dirs(&["src", "inc"]));

        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[0], foreign);
        assert_eq!(list.items()[1].tag(), tags::SOURCE_DIRECTORIES);
        let found =
            list.grouped_extensions_by_type(tags::SOURCE_DIRECTORIES, tags::SOURCE_DIRECTORY);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_set_empty_group_removes_it() {
        let mut list = VendorExtensions::new();
        list.set_grouped_extensions(tags::IGNORED_FILES, dirs(&["a"]));
        assert_eq!(list.len(), 1);
        list.set_grouped_extensions(tags::IGNORED_FILES, Vec::new());
        assert!(list.is_empty());
    }

    #[test]
    fn test_setter_collapses_duplicate_groups() {
        let group = VendorExtension::Group {
            tag: tags::SOURCE_DIRECTORIES.to_string(),
            children: dirs(&["a"]),
        };
        let mut list = VendorExtensions::from(vec![group.clone(), group]);
        assert_eq!(list.count_tagged(tags::SOURCE_DIRECTORIES), 2);

        list.set_grouped_scalars(
            tags::SOURCE_DIRECTORIES,
            tags::SOURCE_DIRECTORY,
            vec!["b".to_string()],
        );
        assert_eq!(list.count_tagged(tags::SOURCE_DIRECTORIES), 1);
        assert_eq!(
            list.grouped_scalars(tags::SOURCE_DIRECTORIES, tags::SOURCE_DIRECTORY),
            vec!["b"]
        );
    }

    #[test]
    fn test_grouped_lookup_filters_child_tag() {
        let list = VendorExtensions::from(vec![VendorExtension::Group {
            tag: tags::SW_VIEWS.to_string(),
            children: vec![
                VendorExtension::SwView(SwView::default()),
                VendorExtension::scalar("stray", "1"),
            ],
        }]);
        let views = list.grouped_extensions_by_type(tags::SW_VIEWS, tags::SW_VIEW);
        assert_eq!(views.len(), 1);
        assert!(list.grouped_extensions_by_type(tags::SYSTEM_VIEWS, tags::SYSTEM_VIEW).is_empty());
    }

    #[test]
    fn test_scalar_semantics() {
        let mut list = VendorExtensions::new();
        assert_eq!(list.scalar(tags::AUTHOR), None);

        list.set_scalar(tags::AUTHOR, "Ada");
        list.set_scalar(tags::AUTHOR, "Grace");
        assert_eq!(list.scalar(tags::AUTHOR), Some("Grace"));
        assert_eq!(list.count_tagged(tags::AUTHOR), 1);

        list.set_scalar(tags::AUTHOR, "");
        assert_eq!(list.scalar(tags::AUTHOR), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_child_of_known_groups() {
        assert_eq!(tags::child_of(tags::FILE_DEPENDENCIES), Some(tags::FILE_DEPENDENCY));
        assert_eq!(tags::child_of("kts_attributes"), None);
    }
}
