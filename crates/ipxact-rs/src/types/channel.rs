// crates/ipxact-rs/src/types/channel.rs

use super::common::NameGroup;

/// A `<channel>` connecting mirrored bus interfaces of the same component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Channel {
    pub name_group: NameGroup,
    pub is_present: String,
    /// `<busInterfaceRef><localName>` entries.
    pub bus_interface_refs: Vec<String>,
}

impl Channel {
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
