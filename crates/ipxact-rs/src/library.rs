// crates/ipxact-rs/src/library.rs

//! The document library collaborator.
//!
//! A library answers whether a VLNV reference names a known document and
//! hands out parsed components. The model performs no file I/O; loading
//! documents from disk is left to the caller, which can feed component text
//! into [`InMemoryLibrary::load_str`] and register other document kinds by
//! identity.

use crate::error::IpxactError;
use crate::parser::load_component;
use crate::revision::Revision;
use crate::types::{Component, Vlnv};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Lookup of library documents by identity.
pub trait DocumentLibrary {
    /// A parsed component, if the library holds one under `vlnv`.
    fn component(&self, vlnv: &Vlnv) -> Option<&Component>;

    /// Whether any document (of any kind) is known under `vlnv`.
    fn contains(&self, vlnv: &Vlnv) -> bool;
}

/// A library holding components in memory, keyed by VLNV.
///
/// Documents this crate does not model (bus definitions, designs, ...) are
/// tracked by identity only.
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    components: BTreeMap<Vlnv, (Revision, Component)>,
    documents: BTreeSet<Vlnv>,
}

impl InMemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a component, replacing any previous one with the same VLNV.
    /// Returns the replaced component.
    pub fn insert(&mut self, revision: Revision, component: Component) -> Option<Component> {
        let key = component.vlnv.clone();
        let previous = self.components.insert(key, (revision, component));
        if let Some((_, replaced)) = &previous {
            warn!("Replacing component {} in library", replaced.vlnv);
        }
        previous.map(|(_, c)| c)
    }

    /// Parses a component document and adds it. Returns its VLNV.
    ///
    /// # Errors
    /// Returns an `IpxactError` if the document cannot be loaded.
    pub fn load_str(&mut self, xml_content: &str) -> Result<Vlnv, IpxactError> {
        let (revision, component) = load_component(xml_content)?;
        let vlnv = component.vlnv.clone();
        debug!("Loaded {} ({}) into library", vlnv, revision);
        self.insert(revision, component);
        Ok(vlnv)
    }

    /// Records a non-component document. Returns `false` if it was already known.
    pub fn register(&mut self, vlnv: Vlnv) -> bool {
        self.documents.insert(vlnv)
    }

    /// Revision the component was loaded or inserted with.
    pub fn revision(&self, vlnv: &Vlnv) -> Option<Revision> {
        self.components.get(vlnv).map(|(r, _)| *r)
    }

    /// Number of stored components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.documents.is_empty()
    }

    /// Identities of the stored components in sorted order.
    pub fn vlnvs(&self) -> impl Iterator<Item = &Vlnv> {
        self.components.keys()
    }
}

impl DocumentLibrary for InMemoryLibrary {
    fn component(&self, vlnv: &Vlnv) -> Option<&Component> {
        self.components.get(vlnv).map(|(_, c)| c)
    }

    fn contains(&self, vlnv: &Vlnv) -> bool {
        self.components.contains_key(vlnv) || self.documents.contains(vlnv)
    }
}

/// Documents `component` refers to that `library` does not know, sorted and
/// without duplicates.
pub fn unresolved_dependencies<L: DocumentLibrary + ?Sized>(
    component: &Component,
    library: &L,
) -> Vec<Vlnv> {
    let mut missing: Vec<Vlnv> = component
        .dependent_vlnvs()
        .into_iter()
        .filter(|v| !library.contains(v))
        .collect();
    missing.sort();
    missing.dedup();
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BusInterface, DocumentType};

    fn component(name: &str) -> Component {
        Component::new(Vlnv::new(DocumentType::Component, "v", "l", name, "1.0"))
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut library = InMemoryLibrary::new();
        assert!(library.insert(Revision::Std14, component("a")).is_none());
        assert!(library.insert(Revision::Std22, component("a")).is_some());

        let key = Vlnv::new(DocumentType::Component, "v", "l", "a", "1.0");
        assert!(library.contains(&key));
        assert_eq!(library.revision(&key), Some(Revision::Std22));
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn test_load_str() {
        let mut library = InMemoryLibrary::new();
        let vlnv = library
            .load_str(
                r#"<ipxact:component xmlns:ipxact="http://www.accellera.org/XMLSchema/IPXACT/1685-2014">
                    <ipxact:vendor>v</ipxact:vendor>
                    <ipxact:library>l</ipxact:library>
                    <ipxact:name>uart</ipxact:name>
                    <ipxact:version>1.0</ipxact:version>
                </ipxact:component>"#,
            )
            .unwrap();
        assert_eq!(vlnv.name, "uart");
        assert_eq!(library.revision(&vlnv), Some(Revision::Std14));
        assert!(library.load_str("<broken").is_err());
    }

    #[test]
    fn test_unresolved_dependencies() {
        let bus = Vlnv::new(DocumentType::BusDefinition, "v", "l", "bus", "1.0");
        let mut component = component("top");
        component.bus_interfaces.push(BusInterface {
            bus_type: bus.clone(),
            ..BusInterface::new("a")
        });
        component.bus_interfaces.push(BusInterface {
            bus_type: bus.clone(),
            ..BusInterface::new("b")
        });

        let mut library = InMemoryLibrary::new();
        assert_eq!(unresolved_dependencies(&component, &library), vec![bus.clone()]);

        assert!(library.register(bus.clone()));
        assert!(!library.register(bus));
        assert!(unresolved_dependencies(&component, &library).is_empty());
        assert!(library.component(&component.vlnv).is_none());
    }
}
