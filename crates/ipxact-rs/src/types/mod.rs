// crates/ipxact-rs/src/types/mod.rs

//! Public data structures of an IP-XACT component document.

mod bus_interface;
mod channel;
mod clock_driver;
mod common;
mod component;
mod cpu;
pub mod extension;
mod file_set;
mod generator;
mod memory;
mod model;
mod port;
mod remap_state;
mod vlnv;

pub use bus_interface::{
    AbstractionType, BusInterface, Endianness, FileSetRefGroup, InitiatorInterface, InterfaceMode,
    LogicalPort, MirroredTargetInterface, PhysicalPort, PortMap, RemapAddress, TargetInterface,
    TransparentBridge,
};
pub use channel::Channel;
pub use clock_driver::{ClockUnit, OtherClockDriver};
pub use common::{Choice, Enumeration, NameGroup, Parameter, Range};
pub use component::Component;
pub use cpu::Cpu;
pub use extension::{
    ApiInterface, ComDirection, ComInterface, ComProperty, DependencyDirection, FileDependency,
    Point, SwView, SystemView, VendorExtension, VendorExtensions,
};
pub use file_set::{BuildCommand, Define, File, FileSet};
pub use generator::ComponentGenerator;
pub use memory::{AddressBlock, AddressSpace, LocalMemoryMap, MemoryMap, MemoryRemap, Segment};
pub use model::{
    ComponentInstantiation, DesignConfigurationInstantiation, DesignInstantiation, Model, View,
};
pub use port::{Direction, Port, Transactional, Wire, WireTypeDef};
pub use remap_state::{RemapPort, RemapState};
pub use vlnv::{DocumentType, Vlnv};
