//! Tree-query abstraction over article XML.
//!
//! Parses a document's bytes into an owned element tree that every extractor
//! queries the same way: tag name, flattened text, attribute lookup, child
//! lookup by path and depth-first descendant iteration. Built on quick-xml
//! event parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ExtractError;

/// A child of an element: either a text run or a nested element.
#[derive(Debug, Clone)]
enum Node {
    Text(String),
    Child(Element),
}

/// One element of a parsed document.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    nodes: Vec<Node>,
}

impl Element {
    /// Parse a complete document and return its root element.
    ///
    /// Prolog, doctype, comments and processing instructions are skipped;
    /// entity references in text and attribute values are unescaped.
    pub fn parse(content: &[u8]) -> Result<Element, ExtractError> {
        let mut reader = Reader::from_reader(content);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) => {
                    stack.push(Self::from_start(e)?);
                }
                Event::Empty(ref e) => {
                    let element = Self::from_start(e)?;
                    Self::attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    // quick-xml validates end-tag nesting, so the stack
                    // cannot be empty here
                    if let Some(element) = stack.pop() {
                        Self::attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(e) => {
                    if let Some(parent) = stack.last_mut() {
                        parent.nodes.push(Node::Text(e.unescape()?.into_owned()));
                    }
                }
                Event::CData(e) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = std::str::from_utf8(&e.into_inner())?.to_string();
                        parent.nodes.push(Node::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        root.ok_or_else(|| ExtractError::Parse("document has no root element".to_string()))
    }

    fn from_start(e: &BytesStart<'_>) -> Result<Element, ExtractError> {
        let tag = std::str::from_utf8(e.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attribute in e.attributes() {
            let attribute = attribute?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_string();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            tag,
            attributes,
            nodes: Vec::new(),
        })
    }

    fn attach(stack: &mut Vec<Element>, root: &mut Option<Element>, element: Element) {
        if let Some(parent) = stack.last_mut() {
            parent.nodes.push(Node::Child(element));
        } else if root.is_none() {
            *root = Some(element);
        }
    }

    /// Tag name, including any namespace prefix as written (e.g. `xlink:href`
    /// attribute keys keep their prefix).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by its name as written in the document.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the element carries the named attribute.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Direct child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Child(child) => Some(child),
            Node::Text(_) => None,
        })
    }

    /// First child element matching a `/`-separated path of tag names.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.children().find(|child| child.tag == segment)?;
        }
        Some(current)
    }

    /// This element and all nested elements, depth-first in document order.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let element = stack.pop()?;
            let children: Vec<&Element> = element.children().collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
            Some(element)
        })
    }

    /// All descendants (self included) with the given tag, in document order.
    pub fn descendants_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.descendants().filter(move |element| element.tag == tag)
    }

    /// First descendant (self included) with the given tag.
    pub fn find_descendant<'a>(&'a self, tag: &'a str) -> Option<&'a Element> {
        self.descendants_named(tag).next()
    }

    /// All text runs under this element, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push(text.as_str()),
                Node::Child(child) => child.collect_texts(out),
            }
        }
    }

    /// Flattened text: every text run concatenated in document order.
    pub fn text(&self) -> String {
        self.texts().concat()
    }

    /// Flattened text with a single space between text runs, trimmed.
    pub fn spaced_text(&self) -> String {
        self.texts().join(" ").trim().to_string()
    }

    /// Text immediately under this element, ignoring nested elements.
    pub fn direct_text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Child(_) => None,
            })
            .collect()
    }
}

/// Strip leading and trailing whitespace on every line, then drop leading
/// and trailing blank lines.
pub fn strip_whitespace(text: &str) -> String {
    let trimmed: Vec<&str> = text.lines().map(str::trim).collect();
    trimmed.join("\n").trim_matches('\n').to_string()
}
