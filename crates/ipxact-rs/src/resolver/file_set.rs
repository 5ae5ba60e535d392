// crates/ipxact-rs/src/resolver/file_set.rs

use super::utils::{
    attr, bool_attr, bool_child, is_present, name_group, parse_bool, text, texts,
};
use crate::revision::Vocabulary;
use crate::tree::XmlElement;
use crate::types::{BuildCommand, Define, File, FileSet};

/// Parses a `<fileSet>` element and all of its files.
pub(super) fn resolve_file_set(element: &XmlElement, vocabulary: &Vocabulary) -> FileSet {
    FileSet {
        name_group: name_group(element),
        groups: texts(element, "group"),
        files: element
            .children_named("file")
            .map(|f| resolve_file(f, vocabulary))
            .collect(),
        dependencies: texts(element, "dependency"),
    }
}

fn resolve_file(element: &XmlElement, vocabulary: &Vocabulary) -> File {
    let include = element.child("isIncludeFile");
    let logical_name = element.child("logicalName");

    File {
        name: text(element, "name"),
        file_id: attr(element, "fileId"),
        is_present: is_present(element, vocabulary),
        file_types: texts(element, "fileType"),
        is_structural: bool_child(element, "isStructural").unwrap_or(false),
        is_include_file: include
            .and_then(|i| parse_bool(&i.text))
            .unwrap_or(false),
        external_declarations: include
            .and_then(|i| bool_attr(i, "externalDeclarations"))
            .unwrap_or(false),
        logical_name: logical_name.map(|l| l.text.clone()).unwrap_or_default(),
        logical_name_default: logical_name
            .and_then(|l| bool_attr(l, "default"))
            .unwrap_or(false),
        exported_names: texts(element, "exportedName"),
        build_command: element.child("buildCommand").map(|b| BuildCommand {
            command: text(b, "command"),
            flags: text(b, "flags"),
            replace_default_flags: text(b, "replaceDefaultFlags"),
            target_name: text(b, "targetName"),
        }),
        dependencies: texts(element, "dependency"),
        defines: element
            .children_named("define")
            .map(|d| Define {
                name: text(d, "name"),
                value: text(d, "value"),
            })
            .collect(),
        image_types: texts(element, "imageType"),
        description: text(element, "description"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::revision::Revision;

    #[test]
    fn test_resolve_file_set() {
        let element = XmlElement::parse_str(
            r#"<ipxact:fileSet>
                <ipxact:name>rtl_files</ipxact:name>
                <ipxact:group>sources</ipxact:group>
                <ipxact:file fileId="f1">
                    <ipxact:name>hdl/uart.v</ipxact:name>
                    <ipxact:fileType>verilogSource</ipxact:fileType>
                    <ipxact:isIncludeFile externalDeclarations="true">true</ipxact:isIncludeFile>
                    <ipxact:logicalName default="true">work</ipxact:logicalName>
                    <ipxact:buildCommand>
                        <ipxact:command>vlog</ipxact:command>
                        <ipxact:flags>-sv</ipxact:flags>
                    </ipxact:buildCommand>
                    <ipxact:dependency>hdl/include</ipxact:dependency>
                    <ipxact:define>
                        <ipxact:name>SIM</ipxact:name>
                        <ipxact:value>1</ipxact:value>
                    </ipxact:define>
                </ipxact:file>
                <ipxact:file>
                    <ipxact:name>doc/readme.txt</ipxact:name>
                    <ipxact:fileType>unknown</ipxact:fileType>
                </ipxact:file>
                <ipxact:dependency>../common</ipxact:dependency>
            </ipxact:fileSet>"#,
        )
        .unwrap();

        let set = resolve_file_set(&element, Revision::Std14.vocabulary());
        assert_eq!(set.name(), "rtl_files");
        assert_eq!(set.groups, vec!["sources"]);
        assert_eq!(set.file_names(), vec!["hdl/uart.v", "doc/readme.txt"]);
        assert_eq!(set.dependencies, vec!["../common"]);

        let file = &set.files[0];
        assert_eq!(file.file_id, "f1");
        assert!(file.is_include_file);
        assert!(file.external_declarations);
        assert_eq!(file.logical_name, "work");
        assert!(file.logical_name_default);
        assert_eq!(
            file.build_command.as_ref().map(|b| b.flags.as_str()),
            Some("-sv")
        );
        assert_eq!(file.dependencies, vec!["hdl/include"]);
        assert_eq!(file.defines[0].name, "SIM");
        assert!(set.files[1].build_command.is_none());
    }
}
