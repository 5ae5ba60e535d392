// crates/ipxact-rs/src/types/memory.rs

//! Address spaces, memory maps and their sub-regions.

use super::common::{NameGroup, Parameter};

/// An `<addressBlock>` of a memory map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressBlock {
    pub name_group: NameGroup,
    pub is_present: String,
    pub base_address: String,
    pub range: String,
    pub width: String,
    /// `memory`, `register` or `reserved`.
    pub usage: String,
    pub volatile: Option<bool>,
    pub access: String,
    pub parameters: Vec<Parameter>,
}

/// A `<memoryRemap>`: address blocks that apply while a remap state is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryRemap {
    pub name_group: NameGroup,
    pub is_present: String,
    /// `@state`
    pub remap_state: String,
    pub address_blocks: Vec<AddressBlock>,
}

/// A `<memoryMap>` of the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryMap {
    pub name_group: NameGroup,
    pub is_present: String,
    pub address_blocks: Vec<AddressBlock>,
    pub memory_remaps: Vec<MemoryRemap>,
    pub address_unit_bits: String,
    /// `<shared>` (`yes`, `no` or `undefined`)
    pub shared: String,
}

impl MemoryMap {
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

/// `<localMemoryMap>` of an address space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalMemoryMap {
    pub name_group: NameGroup,
    pub address_blocks: Vec<AddressBlock>,
}

/// A `<segment>` of an address space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segment {
    pub name_group: NameGroup,
    pub is_present: String,
    pub address_offset: String,
    pub range: String,
}

/// An `<addressSpace>`: the address range seen by an initiator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressSpace {
    pub name_group: NameGroup,
    pub is_present: String,
    pub range: String,
    pub width: String,
    pub segments: Vec<Segment>,
    pub address_unit_bits: String,
    pub local_memory_map: Option<LocalMemoryMap>,
    pub parameters: Vec<Parameter>,
}

impl AddressSpace {
    pub fn new(
        name: impl Into<String>,
        range: impl Into<String>,
        width: impl Into<String>,
    ) -> Self {
        Self {
            name_group: NameGroup::new(name),
            range: range.into(),
            width: width.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn has_local_memory_map(&self) -> bool {
        self.local_memory_map.is_some()
    }
}
