// crates/ipxact-rs/src/builder/file_set.rs

use super::utils::{
    bool_str, element, push_is_present, push_name_group, push_text, push_texts, set_attr,
    text_element,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{File, FileSet};

pub(super) fn build_file_set(set: &FileSet, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "fileSet");
    push_name_group(&mut out, vocabulary, &set.name_group);
    push_texts(&mut out, vocabulary, "group", &set.groups);
    for file in &set.files {
        out.push_child(build_file(file, vocabulary));
    }
    push_texts(&mut out, vocabulary, "dependency", &set.dependencies);
    out
}

fn build_file(file: &File, vocabulary: &Vocabulary) -> XmlElement {
    let mut out = element(vocabulary, "file");
    set_attr(&mut out, "fileId", &file.file_id);
    out.push_child(text_element(vocabulary, "name", &file.name));
    push_is_present(&mut out, vocabulary, &file.is_present);
    push_texts(&mut out, vocabulary, "fileType", &file.file_types);
    if file.is_structural {
        out.push_child(text_element(vocabulary, "isStructural", "true"));
    }
    if file.is_include_file {
        let mut include = text_element(vocabulary, "isIncludeFile", "true");
        if file.external_declarations {
            include.set_attribute("externalDeclarations", "true");
        }
        out.push_child(include);
    }
    if !file.logical_name.is_empty() {
        let mut logical = text_element(vocabulary, "logicalName", &file.logical_name);
        if file.logical_name_default {
            logical.set_attribute("default", bool_str(true));
        }
        out.push_child(logical);
    }
    push_texts(&mut out, vocabulary, "exportedName", &file.exported_names);
    if let Some(command) = &file.build_command {
        let mut child = element(vocabulary, "buildCommand");
        push_text(&mut child, vocabulary, "command", &command.command);
        push_text(&mut child, vocabulary, "flags", &command.flags);
        push_text(&mut child, vocabulary, "replaceDefaultFlags", &command.replace_default_flags);
        push_text(&mut child, vocabulary, "targetName", &command.target_name);
        out.push_child(child);
    }
    push_texts(&mut out, vocabulary, "dependency", &file.dependencies);
    for define in &file.defines {
        out.push_child(
            element(vocabulary, "define")
                .with_child(text_element(vocabulary, "name", &define.name))
                .with_child(text_element(vocabulary, "value", &define.value)),
        );
    }
    push_texts(&mut out, vocabulary, "imageType", &file.image_types);
    push_text(&mut out, vocabulary, "description", &file.description);
    out
}
