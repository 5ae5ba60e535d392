// crates/ipxact-rs/src/types/file_set.rs

use super::common::NameGroup;

/// `<buildCommand>` of a file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildCommand {
    pub command: String,
    pub flags: String,
    pub replace_default_flags: String,
    pub target_name: String,
}

/// A `<define>` name/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Define {
    pub name: String,
    pub value: String,
}

/// A `<file>` inside a file set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct File {
    /// Path of the file, relative to the component document.
    pub name: String,
    /// `@fileId`
    pub file_id: String,
    pub is_present: String,
    pub file_types: Vec<String>,
    pub is_structural: bool,
    pub is_include_file: bool,
    /// `@externalDeclarations` of `<isIncludeFile>`
    pub external_declarations: bool,
    pub logical_name: String,
    /// `@default` of `<logicalName>`
    pub logical_name_default: bool,
    pub exported_names: Vec<String>,
    pub build_command: Option<BuildCommand>,
    pub dependencies: Vec<String>,
    pub defines: Vec<Define>,
    pub image_types: Vec<String>,
    pub description: String,
}

impl File {
    pub fn new(name: impl Into<String>, file_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_types: vec![file_type.into()],
            ..Default::default()
        }
    }
}

/// A named `<fileSet>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSet {
    pub name_group: NameGroup,
    pub groups: Vec<String>,
    pub files: Vec<File>,
    /// `<dependency>` directories.
    pub dependencies: Vec<String>,
}

impl FileSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }
}
