// File: crates/trend-core/src/svg.rs
// Summary: Minimal SVG element tree with deterministic, escaped serialization.
// Notes:
// - Attributes keep insertion order so identical inputs always serialize identically.
// - Elements without content self-close; text elements stay on one line.

use std::fmt;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An element holds either text content or child elements, never both.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), text: None, children: Vec::new() }
    }

    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn child(mut self, el: Element) -> Self {
        self.push(el);
        self
    }

    /// Replaces any children with text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.clear();
        self.text = Some(text.into());
        self
    }

    /// Appends a child, dropping any text content.
    pub fn push(&mut self, el: Element) {
        self.text = None;
        self.children.push(el);
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{pad}<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(f, " {k}=\"{}\"", escape_attr(v))?;
        }
        if let Some(t) = &self.text {
            return writeln!(f, ">{}</{}>", escape_text(t), self.name);
        }
        if self.children.is_empty() {
            return writeln!(f, "/>");
        }
        writeln!(f, ">")?;
        for c in &self.children {
            c.write_indented(f, depth + 1)?;
        }
        writeln!(f, "{pad}</{}>", self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// A standalone SVG file: XML declaration followed by the root element.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    /// Root `<svg>` of the given size with a matching viewBox.
    pub fn new(width: u32, height: u32) -> Self {
        let root = Element::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {width} {height}"));
        Self { root }
    }

    pub fn push(&mut self, el: Element) {
        self.root.push(el);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        self.root.write_indented(f, 0)
    }
}

pub fn escape_text(input: &str) -> String {
    input.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn escape_attr(input: &str) -> String {
    escape_text(input).replace('"', "&quot;")
}
