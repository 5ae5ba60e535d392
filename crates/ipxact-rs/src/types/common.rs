// crates/ipxact-rs/src/types/common.rs

//! Small building blocks shared by many entities.

/// `<name>`, `<displayName>` and `<description>` of a named element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameGroup {
    pub name: String,
    pub display_name: String,
    pub description: String,
}

impl NameGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A `<left>`/`<right>` pair used by vectors, arrays and part selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Range {
    pub left: String,
    pub right: String,
}

impl Range {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// A `<parameter>` (or `<moduleParameter>`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub name_group: NameGroup,
    /// `@parameterId`
    pub parameter_id: String,
    /// `@resolve` (e.g. `immediate`, `user`, `generated`)
    pub resolve: String,
    /// `@type`
    pub parameter_type: String,
    pub minimum: String,
    pub maximum: String,
    /// `@choiceRef`, naming a [`Choice`] of the same component.
    pub choice_ref: String,
    /// `<value>`
    pub value: String,
    /// Any other attributes, kept in document order.
    pub attributes: Vec<(String, String)>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

/// One allowed value of a [`Choice`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enumeration {
    pub value: String,
    /// `@text`, a display label.
    pub text: String,
    /// `@help`
    pub help: String,
}

/// A named list of enumerated values that parameters refer to by `choiceRef`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Choice {
    pub name: String,
    pub enumerations: Vec<Enumeration>,
}
