// crates/ipxact-rs/src/types/model.rs

//! The `<model>` section: views, instantiations and ports.

use super::common::{NameGroup, Parameter};
use super::port::Port;
use super::vlnv::Vlnv;

/// A `<view>`: one way of looking at the implementation (RTL, hierarchy, ...).
///
/// A non-empty instantiation reference names an instantiation of the matching
/// kind in the same [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    pub name_group: NameGroup,
    pub is_present: String,
    pub env_identifiers: Vec<String>,
    pub component_instantiation_ref: String,
    pub design_instantiation_ref: String,
    pub design_configuration_instantiation_ref: String,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    /// A view is hierarchical when it refers to a design or a design configuration.
    pub fn is_hierarchical(&self) -> bool {
        !self.design_instantiation_ref.is_empty()
            || !self.design_configuration_instantiation_ref.is_empty()
    }
}

/// A `<componentInstantiation>`: binds a view to an HDL implementation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentInstantiation {
    pub name_group: NameGroup,
    pub is_virtual: bool,
    pub language: String,
    /// `@strict` of `<language>`
    pub language_strict: bool,
    pub library_name: String,
    pub package_name: String,
    pub module_name: String,
    pub architecture_name: String,
    pub configuration_name: String,
    pub module_parameters: Vec<Parameter>,
    /// `<fileSetRef><localName>` entries.
    pub file_set_refs: Vec<String>,
    pub parameters: Vec<Parameter>,
}

impl ComponentInstantiation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

/// A `<designInstantiation>` referring to an external design document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesignInstantiation {
    pub name_group: NameGroup,
    pub design_ref: Vlnv,
}

impl DesignInstantiation {
    pub fn new(name: impl Into<String>, design_ref: Vlnv) -> Self {
        Self {
            name_group: NameGroup::new(name),
            design_ref,
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

/// A `<designConfigurationInstantiation>` referring to an external design configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesignConfigurationInstantiation {
    pub name_group: NameGroup,
    pub language: String,
    pub language_strict: bool,
    pub design_configuration_ref: Vlnv,
    pub parameters: Vec<Parameter>,
}

impl DesignConfigurationInstantiation {
    pub fn new(name: impl Into<String>, design_configuration_ref: Vlnv) -> Self {
        Self {
            name_group: NameGroup::new(name),
            design_configuration_ref,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

/// Implementation-facing part of a component. Always present on a component,
/// possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Model {
    pub views: Vec<View>,
    pub component_instantiations: Vec<ComponentInstantiation>,
    pub design_instantiations: Vec<DesignInstantiation>,
    pub design_configuration_instantiations: Vec<DesignConfigurationInstantiation>,
    pub ports: Vec<Port>,
}

impl Model {
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
            && self.component_instantiations.is_empty()
            && self.design_instantiations.is_empty()
            && self.design_configuration_instantiations.is_empty()
            && self.ports.is_empty()
    }

    pub fn has_instantiations(&self) -> bool {
        !self.component_instantiations.is_empty()
            || !self.design_instantiations.is_empty()
            || !self.design_configuration_instantiations.is_empty()
    }

    pub fn view(&self, name: &str) -> Option<&View> {
        self.views.iter().find(|v| v.name() == name)
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name() == name)
    }

    pub fn component_instantiation(&self, name: &str) -> Option<&ComponentInstantiation> {
        self.component_instantiations.iter().find(|i| i.name() == name)
    }

    pub fn design_instantiation(&self, name: &str) -> Option<&DesignInstantiation> {
        self.design_instantiations.iter().find(|i| i.name() == name)
    }

    pub fn design_configuration_instantiation(
        &self,
        name: &str,
    ) -> Option<&DesignConfigurationInstantiation> {
        self.design_configuration_instantiations
            .iter()
            .find(|i| i.name() == name)
    }

    /// The design a view refers to, following the design instantiation first
    /// and the design configuration instantiation second.
    pub fn hierarchy_ref(&self, view: &View) -> Option<&Vlnv> {
        if !view.design_instantiation_ref.is_empty() {
            if let Some(instantiation) = self.design_instantiation(&view.design_instantiation_ref) {
                return Some(&instantiation.design_ref);
            }
        }
        if view.design_configuration_instantiation_ref.is_empty() {
            return None;
        }
        self.design_configuration_instantiation(&view.design_configuration_instantiation_ref)
            .map(|i| &i.design_configuration_ref)
    }
}
