// crates/ipxact-rs/src/types/generator.rs

use super::common::{NameGroup, Parameter};

/// A `<componentGenerator>`: an external program run against the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentGenerator {
    pub name_group: NameGroup,
    /// `@hidden`
    pub hidden: Option<bool>,
    /// `@scope` (`instance` or `entity`)
    pub scope: String,
    pub phase: String,
    pub parameters: Vec<Parameter>,
    pub api_type: String,
    pub generator_exe: String,
    pub groups: Vec<String>,
}

impl ComponentGenerator {
    pub fn new(name: impl Into<String>, generator_exe: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            generator_exe: generator_exe.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}
