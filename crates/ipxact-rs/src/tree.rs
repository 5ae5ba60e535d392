// crates/ipxact-rs/src/tree.rs

//! A small owned XML element tree built on the `quick-xml` event reader and writer.
//!
//! The reader and writer in this crate work on `XmlElement` values instead of
//! raw events. IP-XACT tag names depend on the standard revision, and vendor
//! extensions must survive a round trip even when their content is unknown,
//! so the codec needs the whole subtree rather than fixed serde structs.

use crate::error::IpxactError;
use log::trace;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesDecl, BytesEnd, BytesRef, BytesStart, BytesText, Event};

/// Formatting options used when a tree is written back to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Character repeated for each indentation level.
    pub indent_char: u8,
    /// Number of `indent_char` per level. `0` writes the document on one line.
    pub indent_size: usize,
    /// Emit the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 2,
            declaration: true,
        }
    }
}

/// One XML element with its attributes, text content and child elements.
///
/// Names are kept fully qualified (e.g. `ipxact:busInterface`). Text that is
/// only whitespace is dropped, any other text is kept verbatim. Comments,
/// processing instructions and the XML declaration are not represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets an attribute, replacing the value if the key is already present.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// The element name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// The namespace prefix, if the name has one.
    pub fn prefix(&self) -> Option<&str> {
        self.name.split_once(':').map(|(prefix, _)| prefix)
    }

    /// Looks up an attribute by exact key, falling back to a match on the
    /// unprefixed key (so `id` finds `ipxact:id`).
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|(k, _)| !k.starts_with("xmlns") && local_part(k) == key)
            })
            .map(|(_, v)| v.as_str())
    }

    /// First child whose local name is `local`.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All children whose local name is `local`, in document order.
    pub fn children_named<'a>(
        &'a self,
        local: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.local_name() == local)
    }

    /// Text of the first child named `local`.
    pub fn child_text(&self, local: &str) -> Option<&str> {
        self.child(local).map(|c| c.text.as_str())
    }

    /// Parses a complete XML document and returns its root element.
    ///
    /// # Errors
    /// Returns an `IpxactError` if the document is not well-formed, ends with
    /// open elements, or contains no element at all.
    pub fn parse_str(xml: &str) -> Result<XmlElement, IpxactError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => stack.push(element_from_start(&e)?),
                Event::Empty(e) => {
                    let element = element_from_start(&e)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    if let Some(mut element) = stack.pop() {
                        // Indentation between child elements.
                        if element.text.trim().is_empty() {
                            element.text.clear();
                        }
                        attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(t) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8(t.to_vec())?);
                    }
                }
                Event::CData(c) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8(c.to_vec())?);
                    }
                }
                Event::GeneralRef(r) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&resolve_reference(&r)?);
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes.
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(IpxactError::UnexpectedEof);
        }
        root.ok_or(IpxactError::MissingElement {
            element: "document root",
        })
    }

    /// Serializes this element as a standalone document with default options.
    pub fn to_xml_string(&self) -> Result<String, IpxactError> {
        self.to_xml_string_with(&WriteOptions::default())
    }

    /// Serializes this element as a standalone document.
    ///
    /// # Errors
    /// Returns an `IpxactError` if the underlying writer fails.
    pub fn to_xml_string_with(&self, options: &WriteOptions) -> Result<String, IpxactError> {
        let mut writer = if options.indent_size > 0 {
            Writer::new_with_indent(Vec::new(), options.indent_char, options.indent_size)
        } else {
            Writer::new(Vec::new())
        };

        if options.declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        write_element(&mut writer, self)?;

        let output = String::from_utf8(writer.into_inner())?;
        trace!("Serialized <{}> into {} bytes", self.name, output.len());
        Ok(output)
    }
}

fn local_part(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement, IpxactError> {
    let mut element = XmlElement::new(String::from_utf8(start.name().as_ref().to_vec())?);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8(attr.key.as_ref().to_vec())?;
        let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
        element.attributes.push((key, value.into_owned()));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        trace!("Ignoring extra top-level element <{}>", element.name);
    }
}

/// Resolves `&amp;`, `&#x41;` and friends. Unknown entities are kept verbatim.
fn resolve_reference(reference: &BytesRef) -> Result<String, IpxactError> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(ch.to_string());
    }
    let name = String::from_utf8(reference.to_vec())?;
    Ok(match resolve_predefined_entity(&name) {
        Some(value) => value.to_string(),
        None => format!("&{};", name),
    })
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<(), IpxactError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if !element.text.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&element.text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}
