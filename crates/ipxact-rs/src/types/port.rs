// crates/ipxact-rs/src/types/port.rs

use super::common::{NameGroup, Range};
use core::fmt;

/// Direction of a wire port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    In,
    Out,
    InOut,
    Phantom,
    /// Missing or unknown `<direction>`.
    #[default]
    Unspecified,
}

impl Direction {
    pub fn parse(value: &str) -> Direction {
        match value.trim() {
            "in" => Direction::In,
            "out" => Direction::Out,
            "inout" => Direction::InOut,
            "phantom" => Direction::Phantom,
            _ => Direction::Unspecified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
            Direction::Phantom => "phantom",
            Direction::Unspecified => "",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `<wireTypeDef>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WireTypeDef {
    pub type_name: String,
    pub view_refs: Vec<String>,
}

/// `<wire>` content of a port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wire {
    pub direction: Direction,
    pub all_logical_directions_allowed: bool,
    pub vectors: Vec<Range>,
    pub wire_type_defs: Vec<WireTypeDef>,
    /// `<drivers><driver><defaultValue>`
    pub default_value: String,
}

/// `<transactional>` content of a port.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transactional {
    pub initiative: String,
    pub kind: String,
    pub bus_width: String,
    pub all_logical_initiatives_allowed: bool,
}

/// A physical `<port>` of the component model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Port {
    pub name_group: NameGroup,
    pub is_present: String,
    pub wire: Option<Wire>,
    pub transactional: Option<Transactional>,
    pub arrays: Vec<Range>,
}

impl Port {
    /// Creates a wire port with the given direction.
    pub fn wire(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name_group: NameGroup::new(name),
            wire: Some(Wire {
                direction,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }

    pub fn direction(&self) -> Direction {
        self.wire.as_ref().map_or(Direction::Unspecified, |w| w.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_strings() {
        for direction in [Direction::In, Direction::Out, Direction::InOut, Direction::Phantom] {
            assert_eq!(Direction::parse(direction.as_str()), direction);
        }
        assert_eq!(Direction::parse("sideways"), Direction::Unspecified);
    }

    #[test]
    fn test_transactional_port_has_no_direction() {
        let port = Port {
            transactional: Some(Transactional::default()),
            ..Default::default()
        };
        assert_eq!(port.direction(), Direction::Unspecified);
        assert_eq!(Port::wire("clk", Direction::In).direction(), Direction::In);
    }
}
