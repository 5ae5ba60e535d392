// crates/ipxact-rs/tests/parsing.rs

use ipxact_rs::{
    ComDirection, DependencyDirection, Direction, InterfaceMode, Revision, VendorExtension,
    load_component, load_component_from_str, save_component_to_string, validate_component,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_load_legacy_component() {
    init_logging();
    let xml = load_test_file("uart_2014.xml");
    let (revision, component) = load_component(&xml).expect("Failed to load uart_2014.xml");

    assert_eq!(revision, Revision::Std14);
    assert_eq!(component.vlnv.to_string(), "tut.fi:ip.hw.io:uart:1.0");
    assert_eq!(component.description, "UART with an APB register interface.");

    // 1. Bus interfaces: legacy slave/master tags map onto target/initiator modes.
    assert_eq!(component.bus_interface_names(), vec!["apb", "dma"]);
    let apb = component.bus_interface("apb").expect("apb interface");
    assert_eq!(apb.bus_type.to_string(), "amba.com:AMBA3:APB:r1p0");
    assert_eq!(apb.memory_map_ref(), Some("registers"));
    assert_eq!(apb.physical_port_names(), vec!["clk", "rst_n"]);
    assert!(apb.has_bridge());
    match &apb.mode {
        InterfaceMode::Target(target) => {
            assert_eq!(target.transparent_bridges[0].initiator_ref, "dma");
        }
        other => panic!("Expected a target interface, got {:?}", other),
    }
    let dma = component.bus_interface("dma").expect("dma interface");
    assert_eq!(dma.address_space_ref(), Some("dmaSpace"));
    assert_eq!(dma.connection_required, Some(false));

    // 2. Memory
    assert_eq!(component.remap_state_names(), vec!["boot"]);
    let registers = component.memory_map("registers").expect("memory map");
    assert_eq!(registers.address_blocks[0].volatile, Some(true));
    assert_eq!(registers.memory_remaps[0].remap_state, "boot");
    assert_eq!(component.target_interfaces("registers"), vec!["apb"]);
    assert_eq!(component.initiator_interfaces("dmaSpace"), vec!["dma"]);

    // 3. Model; the unknown instantiation kind is skipped.
    assert_eq!(component.port_names(), vec!["clk", "rst_n", "txd"]);
    let rst = component.port("rst_n").expect("rst_n port");
    assert_eq!(rst.is_present, "RESET_EN == 1");
    assert_eq!(rst.wire.as_ref().map(|w| w.default_value.as_str()), Some("1"));
    let txd = component.port("txd").and_then(|p| p.wire.as_ref()).expect("txd wire");
    assert_eq!(txd.direction, Direction::Out);
    assert_eq!(txd.vectors[0].left, "7");
    assert_eq!(component.model.component_instantiations.len(), 1);
    assert_eq!(
        component.model.component_instantiations[0].module_parameters[0].value,
        "16"
    );
    assert_eq!(component.flat_view_names(), vec!["rtl"]);
    assert!(!component.is_hierarchical());

    // 4. Files
    assert_eq!(component.file_paths(), vec!["rtl/uart.v", "rtl/uart_defs.vh"]);
    let header = &component.file_sets[0].files[1];
    assert!(header.is_include_file);
    assert!(header.external_declarations);
    assert!(component.file_sets[0].files[0].logical_name_default);

    // 5. Clock drivers, parameters
    let clock = &component.other_clock_drivers[0];
    assert_eq!(clock.clock_name, "ref_clk");
    assert_eq!(clock.clock_period.units, "ns");
    assert_eq!(component.parameters[0].choice_ref, "resetModes");

    // 6. Vendor extensions: tool items first, the foreign item kept verbatim.
    assert_eq!(component.author(), "Ada");
    assert_eq!(component.source_directories(), vec!["rtl"]);
    assert_eq!(component.vendor_extensions.len(), 3);
    match &component.vendor_extensions.items()[2] {
        VendorExtension::Unrecognized(element) => {
            assert_eq!(element.name, "acme:lintWaiver");
            assert_eq!(element.attribute("rule"), Some("W123"));
            assert_eq!(element.text, "Unused bridge in test mode");
        }
        other => panic!("Expected the foreign extension, got {:?}", other),
    }

    assert!(validate_component(&component, Revision::Std14).is_empty());
}

#[test]
fn test_legacy_round_trip() {
    init_logging();
    let xml = load_test_file("uart_2014.xml");
    let component = load_component_from_str(&xml, Revision::Std14).unwrap();

    let written = save_component_to_string(&component, Revision::Std14).unwrap();
    assert!(written.starts_with("<?xml"));
    assert!(written.contains("xmlns:acme=\"http://acme.example/ipxact\""));
    assert!(written.contains("<ipxact:slave>"));
    assert!(written.contains("masterRef=\"dma\""));

    let (revision, reparsed) = load_component(&written).unwrap();
    assert_eq!(revision, Revision::Std14);
    assert_eq!(reparsed, component);

    // Writing is deterministic.
    assert_eq!(
        save_component_to_string(&reparsed, Revision::Std14).unwrap(),
        written
    );
}

#[test]
fn test_rewrite_legacy_as_current_revision() {
    init_logging();
    let xml = load_test_file("uart_2014.xml");
    let component = load_component_from_str(&xml, Revision::Std14).unwrap();

    // The legacy-only constructs are flagged before conversion.
    let diagnostics = validate_component(&component, Revision::Std22);
    let locations: Vec<&str> = diagnostics.iter().map(|d| d.location.as_str()).collect();
    assert_eq!(locations, vec!["component", "port 'rst_n'"]);

    let written = save_component_to_string(&component, Revision::Std22).unwrap();
    assert!(written.contains("http://www.accellera.org/XMLSchema/IPXACT/1685-2022"));
    assert!(written.contains("<ipxact:target>"));
    assert!(written.contains("initiatorRef=\"dma\""));
    assert!(!written.contains("ipxact:slave"));
    assert!(!written.contains("remapStates"));
    assert!(!written.contains("isPresent"));

    // The description moves up next to the identity.
    let description = written.find("<ipxact:description>UART").unwrap();
    assert!(description < written.find("<ipxact:busInterfaces>").unwrap());

    let (revision, reparsed) = load_component(&written).unwrap();
    assert_eq!(revision, Revision::Std22);
    assert!(reparsed.remap_states.is_empty());
    assert_eq!(reparsed.port("rst_n").map(|p| p.is_present.as_str()), Some(""));
    assert_eq!(
        reparsed.bus_interface("apb").unwrap().mode,
        component.bus_interface("apb").unwrap().mode
    );
    assert_eq!(
        reparsed.bus_interface("dma").unwrap().address_space_ref(),
        Some("dmaSpace")
    );
    assert_eq!(reparsed.vendor_extensions, component.vendor_extensions);

    // Remaining diagnostics only concern the dangling remap reference.
    let messages: Vec<String> = validate_component(&reparsed, Revision::Std22)
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        messages,
        vec!["memory map 'registers': refers to unknown remap state 'boot'"]
    );
}

#[test]
fn test_load_software_component() {
    init_logging();
    let xml = load_test_file("logger_sw_2022.xml");
    let (revision, component) = load_component(&xml).unwrap();

    assert_eq!(revision, Revision::Std22);
    assert_eq!(component.description, "Logging service with a trace bus.");

    let trace = component.bus_interface("trace").unwrap();
    match &trace.mode {
        InterfaceMode::MirroredTarget(mirrored) => {
            assert_eq!(mirrored.remap_addresses.len(), 1);
            assert_eq!(mirrored.remap_addresses[0].value, "'h1000");
            assert_eq!(mirrored.range, "'h100");
        }
        other => panic!("Expected a mirrored target interface, got {:?}", other),
    }
    assert!(component.bus_interface("host").unwrap().mode.is_initiator());

    let views = component.sw_views();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].name_group.name, "default");
    assert_eq!(views[0].hierarchy_ref.name, "logger.design");
    assert_eq!(views[0].file_set_refs, vec!["sources"]);

    let com = component.com_interfaces();
    assert_eq!(com[0].direction, ComDirection::Out);
    assert_eq!(com[0].transfer_type, "string");
    assert_eq!(
        com[0].property_values,
        vec![("maxLength".to_string(), "256".to_string())]
    );
    let position = com[0].default_position.unwrap();
    assert_eq!((position.x, position.y), (120.0, -40.5));

    let api = component.api_interfaces();
    assert_eq!(api[0].dependency_direction, DependencyDirection::Provider);
    assert!(api[0].default_position.is_none());

    let dependency = component.file_dependencies()[0];
    assert_eq!(dependency.file1, "src/logger.c");
    assert!(dependency.manual);
    assert!(!dependency.locked);
    assert!(!dependency.bidirectional);

    let property = component.sw_properties()[0];
    assert_eq!(property.name, "bufferSize");
    assert!(property.required);
    assert_eq!(property.default_value, "1024");

    let dependencies: Vec<String> = component
        .dependent_vlnvs()
        .iter()
        .map(|v| v.to_string())
        .collect();
    assert!(dependencies.contains(&"tut.fi:sw.design:logger.design:2.1".to_string()));
    assert!(dependencies.contains(&"tut.fi:sw.api:logging:1.0".to_string()));

    assert!(validate_component(&component, Revision::Std22).is_empty());
}

#[test]
fn test_software_round_trip_in_both_revisions() {
    init_logging();
    let xml = load_test_file("logger_sw_2022.xml");
    let component = load_component_from_str(&xml, Revision::Std22).unwrap();

    for revision in Revision::ALL {
        let written = save_component_to_string(&component, revision).unwrap();
        let reparsed = load_component_from_str(&written, revision).unwrap();
        assert_eq!(reparsed, component, "round trip through {}", revision);
    }
}

#[test]
fn test_minimal_component_writes_required_elements_only() {
    init_logging();
    let xml = r#"<ipxact:component xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2022">
        <ipxact:vendor>v</ipxact:vendor>
        <ipxact:library>l</ipxact:library>
        <ipxact:name>n</ipxact:name>
        <ipxact:version>1</ipxact:version>
    </ipxact:component>"#;
    let component = load_component_from_str(xml, Revision::Std22).unwrap();
    assert!(component.model.is_empty());
    assert!(component.vendor_extensions.is_empty());

    let written = save_component_to_string(&component, Revision::Std22).unwrap();
    for absent in ["busInterfaces", "model", "fileSets", "vendorExtensions", "description"] {
        assert!(!written.contains(absent), "unexpected <{}> in output", absent);
    }
    assert!(written.contains("<ipxact:name>n</ipxact:name>"));
}
