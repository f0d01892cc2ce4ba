//! The owned XML element tree behind every part proxy.
//!
//! PresentationML parts are small enough that an owned tree is cheaper to
//! work with than repeated streaming passes, and it gives shape proxies a
//! mutable node to write attribute overrides into. Names are kept in their
//! prefixed form (`p:sp`, `a:off`); PresentationML uses fixed prefixes, so
//! lookups match on the prefixed name or, where callers prefer, the local
//! name alone.

use crate::error::{PptxError, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashMap;

/// One element of a parsed XML tree: tag name, attributes, text, children.
#[derive(Debug, Clone)]
pub struct XmlElement {
    tag_name: String,
    attributes: HashMap<String, String>,
    text_content: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element with the given (prefixed) tag name.
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attributes: HashMap::new(),
            text_content: String::new(),
            children: Vec::new(),
        }
    }

    /// Parse a complete XML document into its root element.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlElement> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    stack.push(Self::from_start_tag(e)?);
                },
                Ok(Event::Empty(ref e)) => {
                    let element = Self::from_start_tag(e)?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        // A document consisting of a single empty element
                        None => return Ok(element),
                    }
                },
                Ok(Event::Text(ref t)) => {
                    if let Some(current) = stack.last_mut() {
                        let text = std::str::from_utf8(t.as_ref())
                            .map_err(|e| PptxError::Xml(e.to_string()))?;
                        current.text_content.push_str(text);
                    }
                },
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| PptxError::Xml("unbalanced end tag".to_string()))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(element),
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(PptxError::Xml(e.to_string())),
                _ => {},
            }
            buf.clear();
        }

        Err(PptxError::Xml("no root element found".to_string()))
    }

    fn from_start_tag(e: &BytesStart<'_>) -> Result<XmlElement> {
        let tag_name = std::str::from_utf8(e.name().as_ref())
            .map_err(|e| PptxError::Xml(e.to_string()))?
            .to_string();

        let mut element = XmlElement::new(&tag_name);
        for attr in e.attributes() {
            let attr = attr.map_err(|e| PptxError::Xml(e.to_string()))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| PptxError::Xml(e.to_string()))?;
            let value = attr
                .unescape_value()
                .map_err(|e| PptxError::Xml(e.to_string()))?;
            element.attributes.insert(key.to_string(), value.to_string());
        }
        Ok(element)
    }

    /// The prefixed tag name, e.g. `p:sp`.
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The tag name with any prefix stripped, e.g. `sp`.
    pub fn local_name(&self) -> &str {
        match self.tag_name.rfind(':') {
            Some(pos) => &self.tag_name[pos + 1..],
            None => &self.tag_name,
        }
    }

    /// Get an attribute value, `None` when absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get an attribute value, failing when absent.
    pub fn required_attr(&self, name: &str) -> Result<&str> {
        self.attr(name).ok_or_else(|| {
            PptxError::InvalidFormat(format!(
                "element '{}' is missing required attribute '{}'",
                self.tag_name, name
            ))
        })
    }

    /// Get an attribute parsed as a signed integer, `None` when absent or
    /// not numeric.
    pub fn int_attr(&self, name: &str) -> Option<i64> {
        self.attr(name).and_then(|s| s.parse().ok())
    }

    /// Get an attribute parsed as an unsigned integer.
    pub fn uint_attr(&self, name: &str) -> Option<u32> {
        self.attr(name).and_then(|s| s.parse().ok())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// The element's own text content.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text_content
    }

    /// Concatenated text of this element and all descendants, in document
    /// order.
    pub fn text_recursive(&self) -> String {
        let mut text = self.text_content.clone();
        for child in &self.children {
            text.push_str(&child.text_recursive());
        }
        text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// The child elements, in document order.
    #[inline]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child whose local name matches.
    pub fn child(&self, local_name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == local_name)
    }

    /// Mutable access to the first child whose local name matches.
    pub fn child_mut(&mut self, local_name: &str) -> Option<&mut XmlElement> {
        self.children
            .iter_mut()
            .find(|c| c.local_name() == local_name)
    }

    /// All children whose local name matches, in document order.
    pub fn children_named<'a>(
        &'a self,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElement> {
        self.children
            .iter()
            .filter(move |c| c.local_name() == local_name)
    }

    /// Walk a path of local names from this element, e.g.
    /// `descendant(&["spPr", "xfrm", "off"])`.
    pub fn descendant(&self, path: &[&str]) -> Option<&XmlElement> {
        let mut current = self;
        for name in path {
            current = current.child(name)?;
        }
        Some(current)
    }

    /// Mutable walk of a path of local names.
    pub fn descendant_mut(&mut self, path: &[&str]) -> Option<&mut XmlElement> {
        let mut current = self;
        for name in path {
            current = current.child_mut(name)?;
        }
        Some(current)
    }

    /// Whether a descendant exists at the path.
    pub fn has_descendant(&self, path: &[&str]) -> bool {
        self.descendant(path).is_some()
    }

    /// First descendant with the local name, searching depth-first.
    pub fn find(&self, local_name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.local_name() == local_name {
                return Some(child);
            }
            if let Some(found) = child.find(local_name) {
                return Some(found);
            }
        }
        None
    }

    /// Take ownership of all children, leaving this element empty.
    pub fn take_children(&mut self) -> Vec<XmlElement> {
        std::mem::take(&mut self.children)
    }

    /// Append a child element, returning a mutable reference to it.
    pub fn add_child(&mut self, child: XmlElement) -> &mut XmlElement {
        self.children.push(child);
        self.children.last_mut().unwrap()
    }

    /// First child with the local name, inserting a new element with
    /// `tag_name` when none exists.
    pub fn get_or_add_child(&mut self, local_name: &str, tag_name: &str) -> &mut XmlElement {
        if let Some(pos) = self
            .children
            .iter()
            .position(|c| c.local_name() == local_name)
        {
            return &mut self.children[pos];
        }
        self.add_child(XmlElement::new(tag_name))
    }

    /// Serialize this element and its subtree as XML text.
    pub fn to_xml_string(&self) -> String {
        let mut xml = String::with_capacity(256);
        self.write_xml(&mut xml);
        xml
    }

    fn write_xml(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag_name);

        let mut names: Vec<&String> = self.attributes.keys().collect();
        names.sort();
        for name in names {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, &self.attributes[name], true);
            out.push('"');
        }

        if self.children.is_empty() && self.text_content.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if !self.text_content.is_empty() {
            escape_into(out, &self.text_content, false);
        }
        for child in &self.children {
            child.write_xml(out);
        }
        out.push_str("</");
        out.push_str(&self.tag_name);
        out.push('>');
    }
}

fn escape_into(out: &mut String, s: &str, in_attr: bool) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
