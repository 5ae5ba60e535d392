// crates/ipxact-rs/src/types/component.rs

use super::bus_interface::BusInterface;
use super::channel::Channel;
use super::clock_driver::OtherClockDriver;
use super::common::{Choice, Parameter};
use super::cpu::Cpu;
use super::extension::{
    tags, ApiInterface, ComInterface, ComProperty, FileDependency, SwView, SystemView,
    VendorExtension, VendorExtensions,
};
use super::file_set::{File, FileSet};
use super::generator::ComponentGenerator;
use super::memory::{AddressSpace, MemoryMap};
use super::model::Model;
use super::port::Port;
use super::remap_state::RemapState;
use super::vlnv::{DocumentType, Vlnv};

// --- Root Component Structure ---

/// A parsed IP-XACT component document.
///
/// Every collection is owned, so `clone()` produces a fully independent copy.
/// Collections keep document order, which is also the order they are written
/// back in. Name collisions inside a collection are allowed here and reported
/// by [`validate_component`](crate::validate_component).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Component {
    pub vlnv: Vlnv,
    pub description: String,

    pub bus_interfaces: Vec<BusInterface>,
    pub channels: Vec<Channel>,
    pub remap_states: Vec<RemapState>,
    pub address_spaces: Vec<AddressSpace>,
    pub memory_maps: Vec<MemoryMap>,

    /// Always present, possibly empty.
    pub model: Model,

    pub component_generators: Vec<ComponentGenerator>,
    pub choices: Vec<Choice>,
    pub file_sets: Vec<FileSet>,
    pub cpus: Vec<Cpu>,
    pub other_clock_drivers: Vec<OtherClockDriver>,
    pub parameters: Vec<Parameter>,

    pub vendor_extensions: VendorExtensions,

    /// Namespace declarations of the root element other than the standard,
    /// tool and XSI ones, so foreign extension prefixes stay bound on write.
    pub extra_namespaces: Vec<(String, String)>,
}

impl Component {
    /// Creates an empty component with the given identity.
    pub fn new(vlnv: Vlnv) -> Self {
        Self {
            vlnv: Vlnv {
                document_type: DocumentType::Component,
                ..vlnv
            },
            ..Default::default()
        }
    }

    // --- Names ---

    pub fn bus_interface_names(&self) -> Vec<&str> {
        self.bus_interfaces.iter().map(|b| b.name()).collect()
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name()).collect()
    }

    pub fn remap_state_names(&self) -> Vec<&str> {
        self.remap_states.iter().map(|r| r.name()).collect()
    }

    pub fn address_space_names(&self) -> Vec<&str> {
        self.address_spaces.iter().map(|a| a.name()).collect()
    }

    pub fn memory_map_names(&self) -> Vec<&str> {
        self.memory_maps.iter().map(|m| m.name()).collect()
    }

    pub fn cpu_names(&self) -> Vec<&str> {
        self.cpus.iter().map(|c| c.name()).collect()
    }

    pub fn file_set_names(&self) -> Vec<&str> {
        self.file_sets.iter().map(|f| f.name()).collect()
    }

    pub fn choice_names(&self) -> Vec<&str> {
        self.choices.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn view_names(&self) -> Vec<&str> {
        self.model.views.iter().map(|v| v.name()).collect()
    }

    pub fn port_names(&self) -> Vec<&str> {
        self.model.ports.iter().map(|p| p.name()).collect()
    }

    // --- Lookups ---

    pub fn bus_interface(&self, name: &str) -> Option<&BusInterface> {
        self.bus_interfaces.iter().find(|b| b.name() == name)
    }

    pub fn bus_interface_mut(&mut self, name: &str) -> Option<&mut BusInterface> {
        self.bus_interfaces.iter_mut().find(|b| b.name() == name)
    }

    pub fn address_space(&self, name: &str) -> Option<&AddressSpace> {
        self.address_spaces.iter().find(|a| a.name() == name)
    }

    pub fn memory_map(&self, name: &str) -> Option<&MemoryMap> {
        self.memory_maps.iter().find(|m| m.name() == name)
    }

    pub fn file_set(&self, name: &str) -> Option<&FileSet> {
        self.file_sets.iter().find(|f| f.name() == name)
    }

    pub fn file_set_mut(&mut self, name: &str) -> Option<&mut FileSet> {
        self.file_sets.iter_mut().find(|f| f.name() == name)
    }

    pub fn cpu(&self, name: &str) -> Option<&Cpu> {
        self.cpus.iter().find(|c| c.name() == name)
    }

    pub fn choice(&self, name: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.name == name)
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.model.port(name)
    }

    // --- Classification ---

    /// A bus component has channels or bridges.
    pub fn is_bus(&self) -> bool {
        self.is_channel() || self.is_bridge()
    }

    pub fn is_channel(&self) -> bool {
        !self.channels.is_empty()
    }

    pub fn is_bridge(&self) -> bool {
        self.bus_interfaces.iter().any(BusInterface::has_bridge)
    }

    pub fn is_cpu(&self) -> bool {
        !self.cpus.is_empty()
    }

    /// Has at least one view that refers to a design.
    pub fn is_hierarchical(&self) -> bool {
        self.model.views.iter().any(|v| v.is_hierarchical())
    }

    pub fn has_local_memory_maps(&self) -> bool {
        self.address_spaces.iter().any(AddressSpace::has_local_memory_map)
    }

    // --- Views and hierarchy ---

    pub fn hierarchical_view_names(&self) -> Vec<&str> {
        self.model
            .views
            .iter()
            .filter(|v| v.is_hierarchical())
            .map(|v| v.name())
            .collect()
    }

    pub fn flat_view_names(&self) -> Vec<&str> {
        self.model
            .views
            .iter()
            .filter(|v| !v.is_hierarchical())
            .map(|v| v.name())
            .collect()
    }

    /// The design or design configuration the named view refers to.
    pub fn hierarchy_ref(&self, view_name: &str) -> Option<&Vlnv> {
        self.model
            .view(view_name)
            .and_then(|view| self.model.hierarchy_ref(view))
    }

    /// Valid hierarchy references of all hierarchical views.
    pub fn hierarchy_refs(&self) -> Vec<&Vlnv> {
        self.model
            .views
            .iter()
            .filter_map(|v| self.model.hierarchy_ref(v))
            .filter(|vlnv| vlnv.is_valid())
            .collect()
    }

    // --- Interfaces ---

    /// Target interfaces whose memory map reference is `memory_map`.
    pub fn target_interfaces(&self, memory_map: &str) -> Vec<&str> {
        self.bus_interfaces
            .iter()
            .filter(|b| b.memory_map_ref() == Some(memory_map))
            .map(|b| b.name())
            .collect()
    }

    /// Initiator interfaces whose address space reference is `address_space`.
    pub fn initiator_interfaces(&self, address_space: &str) -> Vec<&str> {
        self.bus_interfaces
            .iter()
            .filter(|b| b.address_space_ref() == Some(address_space))
            .map(|b| b.name())
            .collect()
    }

    /// Bus interfaces that map the physical port `port`.
    pub fn interfaces_using_port(&self, port: &str) -> Vec<&BusInterface> {
        self.bus_interfaces
            .iter()
            .filter(|b| b.maps_physical_port(port))
            .collect()
    }

    /// Ports of the model mapped by the named interface, in port order.
    pub fn ports_of_interface(&self, interface: &str) -> Vec<&Port> {
        let Some(bus_interface) = self.bus_interface(interface) else {
            return Vec::new();
        };
        let mapped = bus_interface.physical_port_names();
        self.model
            .ports
            .iter()
            .filter(|p| mapped.contains(&p.name()))
            .collect()
    }

    // --- Files ---

    /// Every file entry named `file_name`, across all file sets.
    pub fn files_named(&self, file_name: &str) -> Vec<&File> {
        self.file_sets
            .iter()
            .flat_map(|fs| fs.files.iter())
            .filter(|f| f.name == file_name)
            .collect()
    }

    /// Paths of every file in every file set, in document order.
    pub fn file_paths(&self) -> Vec<&str> {
        self.file_sets
            .iter()
            .flat_map(|fs| fs.file_names())
            .collect()
    }

    /// Names of files that carry `file_type`.
    pub fn files_of_type(&self, file_type: &str) -> Vec<&str> {
        self.file_sets
            .iter()
            .flat_map(|fs| fs.files.iter())
            .filter(|f| f.file_types.iter().any(|t| t == file_type))
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Files from the named file sets that carry any of `file_types`.
    pub fn files_from_file_sets(&self, file_set_names: &[&str], file_types: &[&str]) -> Vec<&str> {
        self.file_sets
            .iter()
            .filter(|fs| file_set_names.contains(&fs.name()))
            .flat_map(|fs| fs.files.iter())
            .filter(|f| f.file_types.iter().any(|t| file_types.contains(&t.as_str())))
            .map(|f| f.name.as_str())
            .collect()
    }

    pub fn has_file(&self, file_name: &str) -> bool {
        !self.files_named(file_name).is_empty()
    }

    // --- Dependencies ---

    /// Paths of all files in file sets followed by generator executables.
    pub fn dependent_files(&self) -> Vec<&str> {
        self.file_sets
            .iter()
            .flat_map(|fs| fs.files.iter().map(|f| f.name.as_str()))
            .chain(
                self.component_generators
                    .iter()
                    .map(|g| g.generator_exe.as_str()),
            )
            .collect()
    }

    /// Dependency directories of all file sets.
    pub fn dependent_dirs(&self) -> Vec<&str> {
        self.file_sets
            .iter()
            .flat_map(|fs| fs.dependencies.iter().map(String::as_str))
            .collect()
    }

    /// Every valid external document this component refers to.
    pub fn dependent_vlnvs(&self) -> Vec<Vlnv> {
        let mut list = Vec::new();

        for bus_interface in &self.bus_interfaces {
            list.push(bus_interface.bus_type.clone());
            for abstraction in &bus_interface.abstraction_types {
                list.extend(abstraction.abstraction_ref.clone());
            }
        }
        list.extend(
            self.model
                .design_instantiations
                .iter()
                .map(|i| i.design_ref.clone()),
        );
        list.extend(
            self.model
                .design_configuration_instantiations
                .iter()
                .map(|i| i.design_configuration_ref.clone()),
        );
        list.extend(self.sw_views().into_iter().map(|v| v.hierarchy_ref.clone()));
        list.extend(self.system_views().into_iter().map(|v| v.hierarchy_ref.clone()));
        list.extend(self.com_interfaces().into_iter().map(|c| c.com_type.clone()));
        list.extend(self.api_interfaces().into_iter().map(|a| a.api_type.clone()));

        list.retain(Vlnv::is_valid);
        list
    }

    // --- Tool metadata stored in vendor extensions ---

    pub fn sw_properties(&self) -> Vec<&ComProperty> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::PROPERTIES, tags::PROPERTY)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::ComProperty(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn set_sw_properties(&mut self, properties: Vec<ComProperty>) {
        let items = properties.into_iter().map(VendorExtension::ComProperty).collect();
        self.vendor_extensions.set_grouped_extensions(tags::PROPERTIES, items);
    }

    pub fn sw_views(&self) -> Vec<&SwView> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::SW_VIEWS, tags::SW_VIEW)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::SwView(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub fn set_sw_views(&mut self, views: Vec<SwView>) {
        let items = views.into_iter().map(VendorExtension::SwView).collect();
        self.vendor_extensions.set_grouped_extensions(tags::SW_VIEWS, items);
    }

    pub fn system_views(&self) -> Vec<&SystemView> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::SYSTEM_VIEWS, tags::SYSTEM_VIEW)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::SystemView(v) => Some(v),
                _ => None,
            })
            .collect()
    }

    pub fn set_system_views(&mut self, views: Vec<SystemView>) {
        let items = views.into_iter().map(VendorExtension::SystemView).collect();
        self.vendor_extensions.set_grouped_extensions(tags::SYSTEM_VIEWS, items);
    }

    pub fn com_interfaces(&self) -> Vec<&ComInterface> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::COM_INTERFACES, tags::COM_INTERFACE)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::ComInterface(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn set_com_interfaces(&mut self, interfaces: Vec<ComInterface>) {
        let items = interfaces.into_iter().map(VendorExtension::ComInterface).collect();
        self.vendor_extensions.set_grouped_extensions(tags::COM_INTERFACES, items);
    }

    pub fn api_interfaces(&self) -> Vec<&ApiInterface> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::API_INTERFACES, tags::API_INTERFACE)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::ApiInterface(a) => Some(a),
                _ => None,
            })
            .collect()
    }

    pub fn set_api_interfaces(&mut self, interfaces: Vec<ApiInterface>) {
        let items = interfaces.into_iter().map(VendorExtension::ApiInterface).collect();
        self.vendor_extensions.set_grouped_extensions(tags::API_INTERFACES, items);
    }

    pub fn file_dependencies(&self) -> Vec<&FileDependency> {
        self.vendor_extensions
            .grouped_extensions_by_type(tags::FILE_DEPENDENCIES, tags::FILE_DEPENDENCY)
            .into_iter()
            .filter_map(|e| match e {
                VendorExtension::FileDependency(d) => Some(d),
                _ => None,
            })
            .collect()
    }

    pub fn set_file_dependencies(&mut self, dependencies: Vec<FileDependency>) {
        let items = dependencies.into_iter().map(VendorExtension::FileDependency).collect();
        self.vendor_extensions.set_grouped_extensions(tags::FILE_DEPENDENCIES, items);
    }

    pub fn source_directories(&self) -> Vec<&str> {
        self.vendor_extensions
            .grouped_scalars(tags::SOURCE_DIRECTORIES, tags::SOURCE_DIRECTORY)
    }

    pub fn set_source_directories(&mut self, directories: Vec<String>) {
        self.vendor_extensions.set_grouped_scalars(
            tags::SOURCE_DIRECTORIES,
            tags::SOURCE_DIRECTORY,
            directories,
        );
    }

    pub fn ignored_files(&self) -> Vec<&str> {
        self.vendor_extensions
            .grouped_scalars(tags::IGNORED_FILES, tags::IGNORED_FILE)
    }

    pub fn set_ignored_files(&mut self, files: Vec<String>) {
        self.vendor_extensions
            .set_grouped_scalars(tags::IGNORED_FILES, tags::IGNORED_FILE, files);
    }

    /// The `author` extension, or an empty string.
    pub fn author(&self) -> &str {
        self.vendor_extensions.scalar(tags::AUTHOR).unwrap_or_default()
    }

    /// Replaces the author. An empty value removes the extension.
    pub fn set_author(&mut self, author: &str) {
        self.vendor_extensions.set_scalar(tags::AUTHOR, author);
    }
}
