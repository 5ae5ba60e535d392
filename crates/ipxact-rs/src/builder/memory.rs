// crates/ipxact-rs/src/builder/memory.rs

use super::utils::{
    element, push_bool, push_is_present, push_name_group, push_parameters, push_text,
    push_wrapped, set_attr,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{AddressBlock, AddressSpace, MemoryMap};

fn build_address_block(block: &AddressBlock, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "addressBlock");
    push_name_group(&mut out, vocabulary, &block.name_group);
    push_is_present(&mut out, vocabulary, &block.is_present);
    push_text(&mut out, vocabulary, "baseAddress", &block.base_address);
    push_text(&mut out, vocabulary, "range", &block.range);
    push_text(&mut out, vocabulary, "width", &block.width);
    push_text(&mut out, vocabulary, "usage", &block.usage);
    push_bool(&mut out, vocabulary, "volatile", block.volatile);
    push_text(&mut out, vocabulary, "access", &block.access);
    push_parameters(&mut out, vocabulary, &block.parameters);
    out
}

fn push_address_blocks(parent: &mut XmlElement, vocabulary: &Vocabulary, blocks: &[AddressBlock]) {
    for block in blocks {
        parent.push_child(build_address_block(block, vocabulary));
    }
}

pub(super) fn build_memory_map(map: &MemoryMap, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "memoryMap");
    push_name_group(&mut out, vocabulary, &map.name_group);
    push_is_present(&mut out, vocabulary, &map.is_present);
    push_address_blocks(&mut out, vocabulary, &map.address_blocks);
    for remap in &map.memory_remaps {
        let mut child = element(vocabulary, "memoryRemap");
        set_attr(&mut child, "state", &remap.remap_state);
        push_name_group(&mut child, vocabulary, &remap.name_group);
        push_is_present(&mut child, vocabulary, &remap.is_present);
        push_address_blocks(&mut child, vocabulary, &remap.address_blocks);
        out.push_child(child);
    }
    push_text(&mut out, vocabulary, "addressUnitBits", &map.address_unit_bits);
    push_text(&mut out, vocabulary, "shared", &map.shared);
    out
}

pub(super) fn build_address_space(space: &AddressSpace, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "addressSpace");
    push_name_group(&mut out, vocabulary, &space.name_group);
    push_is_present(&mut out, vocabulary, &space.is_present);
    push_text(&mut out, vocabulary, "range", &space.range);
    push_text(&mut out, vocabulary, "width", &space.width);

    let segments = space
        .segments
        .iter()
        .map(|segment| {
            let mut child = element(vocabulary, "segment");
            push_name_group(&mut child, vocabulary, &segment.name_group);
            push_is_present(&mut child, vocabulary, &segment.is_present);
            push_text(&mut child, vocabulary, "addressOffset", &segment.address_offset);
            push_text(&mut child, vocabulary, "range", &segment.range);
            child
        })
        .collect();
    push_wrapped(&mut out, vocabulary, "segments", segments);

    push_text(&mut out, vocabulary, "addressUnitBits", &space.address_unit_bits);
    if let Some(local) = &space.local_memory_map {
        let mut child = element(vocabulary, "localMemoryMap");
        push_name_group(&mut child, vocabulary, &local.name_group);
        push_address_blocks(&mut child, vocabulary, &local.address_blocks);
        out.push_child(child);
    }
    push_parameters(&mut out, vocabulary, &space.parameters);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;
    use crate::types::{LocalMemoryMap, MemoryRemap, NameGroup};

    #[test]
    fn test_memory_map_element_order() {
        let mut map = MemoryMap::new("regs");
        map.address_blocks.push(AddressBlock {
            name_group: NameGroup::new("ctrl"),
            range: "16".to_string(),
            volatile: Some(true),
            ..Default::default()
        });
        map.memory_remaps.push(MemoryRemap {
            name_group: NameGroup::new("boot"),
            remap_state: "bootState".to_string(),
            ..Default::default()
        });
        map.address_unit_bits = "8".to_string();

        let out = build_memory_map(&map, Revision::Std14.vocabulary());
        let locals: Vec<&str> = out.children.iter().map(|c| c.local_name()).collect();
        assert_eq!(
            locals,
            vec!["name", "addressBlock", "memoryRemap", "addressUnitBits"]
        );
        let block = out.child("addressBlock").unwrap();
        assert_eq!(block.child_text("volatile"), Some("true"));
        assert_eq!(
            out.child("memoryRemap").and_then(|r| r.attribute("state")),
            Some("bootState")
        );
    }

    #[test]
    fn test_address_space_with_local_map() {
        let mut space = AddressSpace::new("cpuSpace", "4G", "32");
        space.local_memory_map = Some(LocalMemoryMap {
            name_group: NameGroup::new("local"),
            address_blocks: Vec::new(),
        });

        let out = build_address_space(&space, Revision::Std22.vocabulary());
        let locals: Vec<&str> = out.children.iter().map(|c| c.local_name()).collect();
        assert_eq!(locals, vec!["name", "range", "width", "localMemoryMap"]);
    }
}
