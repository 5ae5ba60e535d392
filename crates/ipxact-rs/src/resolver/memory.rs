// crates/ipxact-rs/src/resolver/memory.rs

use super::utils::{attr, bool_child, is_present, name_group, parameters, text};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{
    AddressBlock, AddressSpace, LocalMemoryMap, MemoryMap, MemoryRemap, Segment,
};

fn resolve_address_block(element: &XmlElement, vocabulary: &Vocabulary) -> AddressBlock {
    AddressBlock {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        base_address: text(element, "baseAddress"),
        range: text(element, "range"),
        width: text(element, "width"),
        usage: text(element, "usage"),
        volatile: bool_child(element, "volatile"),
        access: text(element, "access"),
        parameters: parameters(element),
    }
}

fn address_blocks(element: &XmlElement, vocabulary: &Vocabulary) -> Vec<AddressBlock> {
    element
        .children_named("addressBlock")
        .map(|b| resolve_address_block(b, vocabulary))
        .collect()
}

/// Parses a `<memoryMap>` element, including its remaps.
pub(super) fn resolve_memory_map(element: &XmlElement, vocabulary: &Vocabulary) -> MemoryMap {
    MemoryMap {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        address_blocks: address_blocks(element, vocabulary),
        memory_remaps: element
            .children_named("memoryRemap")
            .map(|r| MemoryRemap {
                name_group: name_group(r),
                is_present: is_present(r, vocabulary),
                remap_state: attr(r, "state"),
                address_blocks: address_blocks(r, vocabulary),
            })
            .collect(),
        address_unit_bits: text(element, "addressUnitBits"),
        shared: text(element, "shared"),
    }
}

/// Parses an `<addressSpace>` element.
pub(super) fn resolve_address_space(element: &XmlElement, vocabulary: &Vocabulary) -> AddressSpace {
    AddressSpace {
        name_group: name_group(element),
        is_present: is_present(element, vocabulary),
        range: text(element, "range"),
        width: text(element, "width"),
        segments: element
            .child("segments")
            .map(|w| {
                w.children_named("segment")
                    .map(|s| Segment {
                        name_group: name_group(s),
                        is_present: is_present(s, vocabulary),
                        address_offset: text(s, "addressOffset"),
                        range: text(s, "range"),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        address_unit_bits: text(element, "addressUnitBits"),
        local_memory_map: element.child("localMemoryMap").map(|m| LocalMemoryMap {
            name_group: name_group(m),
            address_blocks: address_blocks(m, vocabulary),
        }),
        parameters: parameters(element),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;

    #[test]
    fn test_resolve_memory_map_with_remap() {
        let element = XmlElement::parse_str(
            r#"<ipxact:memoryMap>
                <ipxact:name>regs</ipxact:name>
                <ipxact:addressBlock>
                    <ipxact:name>ctrl</ipxact:name>
                    <ipxact:baseAddress>0</ipxact:baseAddress>
                    <ipxact:range>16</ipxact:range>
                    <ipxact:width>32</ipxact:width>
                    <ipxact:usage>register</ipxact:usage>
                    <ipxact:volatile>false</ipxact:volatile>
                    <ipxact:access>read-write</ipxact:access>
                </ipxact:addressBlock>
                <ipxact:memoryRemap state="boot">
                    <ipxact:name>bootRegs</ipxact:name>
                    <ipxact:addressBlock><ipxact:name>rom</ipxact:name></ipxact:addressBlock>
                </ipxact:memoryRemap>
                <ipxact:addressUnitBits>8</ipxact:addressUnitBits>
            </ipxact:memoryMap>"#,
        )
        .unwrap();

        let map = resolve_memory_map(&element, Revision::Std14.vocabulary());
        assert_eq!(map.name(), "regs");
        assert_eq!(map.address_blocks.len(), 1);
        let block = &map.address_blocks[0];
        assert_eq!(block.range, "16");
        assert_eq!(block.volatile, Some(false));
        assert_eq!(block.access, "read-write");
        assert_eq!(map.memory_remaps[0].remap_state, "boot");
        assert_eq!(map.memory_remaps[0].address_blocks[0].name_group.name, "rom");
        assert_eq!(map.address_unit_bits, "8");
    }

    #[test]
    fn test_resolve_address_space_with_local_map() {
        let element = XmlElement::parse_str(
            r#"<ipxact:addressSpace>
                <ipxact:name>cpuSpace</ipxact:name>
                <ipxact:range>4G</ipxact:range>
                <ipxact:width>32</ipxact:width>
                <ipxact:segments>
                    <ipxact:segment>
                        <ipxact:name>low</ipxact:name>
                        <ipxact:addressOffset>0</ipxact:addressOffset>
                        <ipxact:range>1M</ipxact:range>
                    </ipxact:segment>
                </ipxact:segments>
                <ipxact:localMemoryMap>
                    <ipxact:name>local</ipxact:name>
                    <ipxact:addressBlock><ipxact:name>tcm</ipxact:name></ipxact:addressBlock>
                </ipxact:localMemoryMap>
            </ipxact:addressSpace>"#,
        )
        .unwrap();

        let space = resolve_address_space(&element, Revision::Std22.vocabulary());
        assert_eq!(space.name(), "cpuSpace");
        assert_eq!(space.range, "4G");
        assert_eq!(space.segments[0].address_offset, "0");
        assert!(space.has_local_memory_map());
        assert_eq!(
            space.local_memory_map.as_ref().map(|m| m.address_blocks.len()),
            Some(1)
        );
    }
}
