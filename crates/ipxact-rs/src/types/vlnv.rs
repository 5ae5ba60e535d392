// crates/ipxact-rs/src/types/vlnv.rs

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Kind of document a [`Vlnv`] points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentType {
    #[default]
    Component,
    Design,
    DesignConfiguration,
    BusDefinition,
    AbstractionDefinition,
    ComDefinition,
    ApiDefinition,
}

/// Vendor, library, name and version: the identity of an IP-XACT document.
///
/// Equality, ordering and hashing only consider the four strings; the
/// `document_type` describes what the reference is expected to resolve to.
#[derive(Debug, Clone, Default)]
pub struct Vlnv {
    pub vendor: String,
    pub library: String,
    pub name: String,
    pub version: String,
    pub document_type: DocumentType,
}

impl Vlnv {
    pub fn new(
        document_type: DocumentType,
        vendor: impl Into<String>,
        library: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
            document_type,
        }
    }

    /// All four identity fields are set.
    pub fn is_valid(&self) -> bool {
        !self.vendor.is_empty()
            && !self.library.is_empty()
            && !self.name.is_empty()
            && !self.version.is_empty()
    }

    /// None of the four identity fields is set.
    pub fn is_empty(&self) -> bool {
        self.vendor.is_empty()
            && self.library.is_empty()
            && self.name.is_empty()
            && self.version.is_empty()
    }

    fn key(&self) -> (&str, &str, &str, &str) {
        (&self.vendor, &self.library, &self.name, &self.version)
    }
}

impl PartialEq for Vlnv {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Vlnv {}

impl PartialOrd for Vlnv {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vlnv {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Vlnv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Vlnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}
