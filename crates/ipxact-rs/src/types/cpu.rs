// crates/ipxact-rs/src/types/cpu.rs

use super::common::{NameGroup, Parameter};

/// A `<cpu>`: a programmable core.
///
/// IEEE 1685-2014 cpus see one or more address spaces, IEEE 1685-2022 cpus
/// name a single memory map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cpu {
    pub name_group: NameGroup,
    pub is_present: String,
    pub address_space_refs: Vec<String>,
    pub memory_map_ref: String,
    pub parameters: Vec<Parameter>,
}

impl Cpu {
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
