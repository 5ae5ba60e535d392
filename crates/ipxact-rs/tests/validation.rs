// crates/ipxact-rs/tests/validation.rs

use ipxact_rs::{
    Component, DiagnosticKind, DocumentLibrary, DocumentType, InMemoryLibrary, NameGroup,
    Parameter, Revision, SwView, VendorExtension, Vlnv, load_component_from_str,
    unresolved_dependencies, validate_component,
};

/// Two bus interfaces sharing the name `clk`, an empty model and no extensions.
const DUPLICATE_CLK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ipxact:component xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
  <ipxact:vendor>tut.fi</ipxact:vendor>
  <ipxact:library>ip.hw</ipxact:library>
  <ipxact:name>clock_gen</ipxact:name>
  <ipxact:version>1.0</ipxact:version>
  <ipxact:busInterfaces>
    <ipxact:busInterface>
      <ipxact:name>clk</ipxact:name>
      <ipxact:busType vendor="tut.fi" library="ip.bus" name="clock" version="1.0"/>
      <ipxact:master/>
    </ipxact:busInterface>
    <ipxact:busInterface>
      <ipxact:name>clk</ipxact:name>
      <ipxact:busType vendor="tut.fi" library="ip.bus" name="clock" version="1.0"/>
      <ipxact:slave/>
    </ipxact:busInterface>
  </ipxact:busInterfaces>
  <ipxact:model/>
</ipxact:component>"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_duplicate_bus_interface_names_are_kept_and_reported_once() {
    init_logging();
    let component = load_component_from_str(DUPLICATE_CLK, Revision::Std14).unwrap();

    assert_eq!(component.bus_interface_names(), vec!["clk", "clk"]);
    assert!(component.model.views.is_empty());
    assert!(component.model.ports.is_empty());
    assert_eq!(component.author(), "");

    let diagnostics = validate_component(&component, Revision::Std14);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateName);
    assert_eq!(
        diagnostics[0].to_string(),
        "bus interface 'clk': name is used by 2 bus interfaces"
    );
}

#[test]
fn test_duplicate_parameter_names_are_reported() {
    init_logging();
    let mut component = Component::new(Vlnv::new(DocumentType::Component, "v", "l", "n", "1"));
    component.parameters.push(Parameter::new("WIDTH", "8"));
    component.parameters.push(Parameter::new("WIDTH", "16"));
    component.parameters.push(Parameter::new("DEPTH", "4"));

    let diagnostics = validate_component(&component, Revision::Std14);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::DuplicateName);
    assert_eq!(
        diagnostics[0].to_string(),
        "parameter 'WIDTH': name is used by 2 parameters"
    );
}

#[test]
fn test_set_sw_views_on_empty_component() {
    init_logging();
    let mut component = Component::new(Vlnv::new(DocumentType::Component, "v", "l", "n", "1"));
    let view = SwView {
        name_group: NameGroup::new("swViewA"),
        ..Default::default()
    };

    component.set_sw_views(vec![view.clone()]);

    assert_eq!(component.sw_views(), vec![&view]);
    let items = component.vendor_extensions.items();
    assert_eq!(items.len(), 1);
    match &items[0] {
        VendorExtension::Group { tag, children } => {
            assert_eq!(tag, "swViews");
            assert_eq!(children.len(), 1);
            assert_eq!(children[0].tag(), "swView");
        }
        other => panic!("Expected a swViews group, got {:?}", other),
    }
}

#[test]
fn test_validation_does_not_modify_component() {
    init_logging();
    let component = load_component_from_str(DUPLICATE_CLK, Revision::Std14).unwrap();
    let before = component.clone();

    let first = validate_component(&component, Revision::Std22);
    let second = validate_component(&component, Revision::Std22);

    assert_eq!(component, before);
    assert_eq!(first, second);
}

#[test]
fn test_unresolved_dependencies_against_library() {
    init_logging();
    let mut library = InMemoryLibrary::new();
    let component = load_component_from_str(DUPLICATE_CLK, Revision::Std14).unwrap();

    let clock_bus = Vlnv::new(DocumentType::BusDefinition, "tut.fi", "ip.bus", "clock", "1.0");
    assert_eq!(unresolved_dependencies(&component, &library), vec![clock_bus.clone()]);

    library.register(clock_bus);
    assert!(unresolved_dependencies(&component, &library).is_empty());

    let vlnv = library.load_str(DUPLICATE_CLK).unwrap();
    assert!(library.contains(&vlnv));
    assert_eq!(
        library.component(&vlnv).map(|c| c.bus_interface_names()),
        Some(vec!["clk", "clk"])
    );
}
