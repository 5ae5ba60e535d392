// crates/ipxact-rs/src/types/remap_state.rs

use super::common::NameGroup;

/// A `<remapPort>` condition: the remap state is active while the port has `value`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemapPort {
    /// `@portRef`, naming a port of the component model.
    pub port_ref: String,
    pub port_index: String,
    pub value: String,
}

/// A `<remapState>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemapState {
    pub name_group: NameGroup,
    pub remap_ports: Vec<RemapPort>,
}

impl RemapState {
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
