// crates/ipxact-rs/src/types/bus_interface.rs

use super::common::{NameGroup, Parameter, Range};
use super::vlnv::Vlnv;

/// `<logicalPort>` side of a port map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogicalPort {
    pub name: String,
    pub range: Option<Range>,
}

/// `<physicalPort>` side of a port map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhysicalPort {
    pub name: String,
    /// `<partSelect><range>`
    pub part_select: Option<Range>,
}

/// Maps one logical bus signal onto a physical port of the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PortMap {
    pub is_present: String,
    /// `@invert`
    pub invert: Option<bool>,
    pub logical_port: LogicalPort,
    pub physical_port: Option<PhysicalPort>,
    pub logical_tie_off: String,
    pub is_informative: Option<bool>,
}

/// An `<abstractionType>` of a bus interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AbstractionType {
    pub view_refs: Vec<String>,
    pub abstraction_ref: Option<Vlnv>,
    pub port_maps: Vec<PortMap>,
}

/// `<transparentBridge>` of a target interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransparentBridge {
    /// Name of the initiator interface the bridge forwards to.
    pub initiator_ref: String,
    pub is_present: String,
}

/// `<fileSetRefGroup>` of a target interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSetRefGroup {
    pub group: String,
    pub file_set_refs: Vec<String>,
}

/// `<remapAddress>` of a mirrored target interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemapAddress {
    pub value: String,
    /// `@state`, naming a remap state. Only meaningful for the legacy revision.
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitiatorInterface {
    pub address_space_ref: String,
    pub base_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetInterface {
    pub memory_map_ref: String,
    pub transparent_bridges: Vec<TransparentBridge>,
    pub file_set_ref_groups: Vec<FileSetRefGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MirroredTargetInterface {
    pub remap_addresses: Vec<RemapAddress>,
    pub range: String,
}

/// Role of a bus interface.
///
/// The variant names follow the initiator/target terminology; legacy documents
/// use master/slave tags for the same roles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InterfaceMode {
    Initiator(InitiatorInterface),
    Target(TargetInterface),
    System { group: String },
    MirroredInitiator,
    MirroredTarget(MirroredTargetInterface),
    MirroredSystem { group: String },
    Monitor { interface_mode: String, group: String },
    #[default]
    Undefined,
}

impl InterfaceMode {
    pub fn is_initiator(&self) -> bool {
        matches!(self, InterfaceMode::Initiator(_))
    }

    pub fn is_target(&self) -> bool {
        matches!(self, InterfaceMode::Target(_))
    }
}

/// `<endianness>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// A `<busInterface>` of the component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BusInterface {
    pub name_group: NameGroup,
    pub is_present: String,
    pub bus_type: Vlnv,
    pub abstraction_types: Vec<AbstractionType>,
    pub mode: InterfaceMode,
    pub connection_required: Option<bool>,
    pub bits_in_lau: String,
    pub bit_steering: String,
    pub endianness: Option<Endianness>,
    pub parameters: Vec<Parameter>,
    /// Attributes of the `<busInterface>` element itself.
    pub attributes: Vec<(String, String)>,
}

impl BusInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    /// Names of all physical ports mapped by this interface, in map order.
    pub fn physical_port_names(&self) -> Vec<&str> {
        self.abstraction_types
            .iter()
            .flat_map(|a| a.port_maps.iter())
            .filter_map(|m| m.physical_port.as_ref())
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn maps_physical_port(&self, port: &str) -> bool {
        self.physical_port_names().contains(&port)
    }

    /// A target interface with at least one transparent bridge.
    pub fn has_bridge(&self) -> bool {
        matches!(&self.mode, InterfaceMode::Target(t) if !t.transparent_bridges.is_empty())
    }

    /// The memory map of a target interface.
    pub fn memory_map_ref(&self) -> Option<&str> {
        match &self.mode {
            InterfaceMode::Target(target) if !target.memory_map_ref.is_empty() => {
                Some(&target.memory_map_ref)
            }
            _ => None,
        }
    }

    /// The address space of an initiator interface.
    pub fn address_space_ref(&self) -> Option<&str> {
        match &self.mode {
            InterfaceMode::Initiator(initiator) if !initiator.address_space_ref.is_empty() => {
                Some(&initiator.address_space_ref)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_port_names_across_abstractions() {
        let map = |name: &str| PortMap {
            logical_port: LogicalPort {
                name: name.to_uppercase(),
                range: None,
            },
            physical_port: Some(PhysicalPort {
                name: name.to_string(),
                part_select: None,
            }),
            ..Default::default()
        };
        let interface = BusInterface {
            abstraction_types: vec![
                AbstractionType {
                    port_maps: vec![map("clk"), map("rst")],
                    ..Default::default()
                },
                AbstractionType {
                    port_maps: vec![PortMap::default(), map("data")],
                    ..Default::default()
                },
            ],
            ..BusInterface::new("bus")
        };
        assert_eq!(interface.physical_port_names(), vec!["clk", "rst", "data"]);
        assert!(interface.maps_physical_port("rst"));
        assert!(!interface.maps_physical_port("irq"));
    }

    #[test]
    fn test_mode_references() {
        let mut interface = BusInterface::new("m");
        interface.mode = InterfaceMode::Initiator(InitiatorInterface {
            address_space_ref: "cpuSpace".to_string(),
            base_address: String::new(),
        });
        assert_eq!(interface.address_space_ref(), Some("cpuSpace"));
        assert_eq!(interface.memory_map_ref(), None);

        interface.mode = InterfaceMode::Target(TargetInterface::default());
        assert_eq!(interface.memory_map_ref(), None);
    }
}
