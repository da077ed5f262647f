//! Output tree and serializer
//!
//! Rendering builds this tree first; turning it into text is a separate
//! step. Attribute values are stored unescaped together with the context
//! they must be escaped for, so structural tests can read them back as-is.

use std::fmt::{self, Write};

use super::escaping::{escape_for, Escape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub value: String,
    pub escape: Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Markup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    /// Pre-rendered content, emitted verbatim
    Raw(String),
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(self, name: &'static str, value: impl Into<String>) -> Self {
        self.attr_escaped(name, value, Escape::Attr)
    }

    pub fn attr_escaped(mut self, name: &'static str, value: impl Into<String>, escape: Escape) -> Self {
        self.attrs.push(Attribute {
            name,
            value: value.into(),
            escape,
        });
        self
    }

    /// Add the attribute only when `value` is present.
    pub fn attr_opt(self, name: &'static str, value: Option<&str>, escape: Escape) -> Self {
        match value {
            Some(value) => self.attr_escaped(name, value, escape),
            None => self,
        }
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Markup>) -> Self {
        self.children.extend(children);
        self
    }

    /// Unescaped value of an attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Direct child elements, skipping raw content.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Markup::as_element)
    }

    /// Depth-first search for the element with the given `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    /// All elements of this subtree in document order, including `self`.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.child_elements() {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated raw content directly inside this element.
    pub fn raw_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Markup::Raw(text) => Some(text.as_str()),
                Markup::Element(_) => None,
            })
            .collect()
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for attr in &self.attrs {
            write!(out, " {}=\"{}\"", attr.name, escape_for(&attr.value, attr.escape))?;
        }
        out.write_char('>')?;
        for child in &self.children {
            child.write_to(out)?;
        }
        write!(out, "</{}>", self.tag)
    }
}

impl Markup {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Markup::Element(element) => Some(element),
            Markup::Raw(_) => None,
        }
    }

    /// Serialize to markup text.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Markup::Element(element) => element.write_to(out),
            Markup::Raw(text) => out.write_str(text),
        }
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
