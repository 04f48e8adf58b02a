//! A very small HTML element tree.
//!
//! Just enough structure for the display helpers: ordered attributes, an
//! inline style list, text content and children. A [`Document`] is the page
//! the helpers append to; it owns the pixel surfaces behind `<canvas>`
//! elements and serializes everything with [`Document::to_html`].

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::canvas::Canvas;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &["img", "meta", "br", "hr", "input", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an inline style property (CSS name, e.g. `grid-template-columns`).
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.style.iter_mut().find(|(k, _)| k == property) {
            Some(slot) => slot.1 = value,
            None => self.style.push((property.to_string(), value)),
        }
    }

    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn append_child(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first search for the element whose `id` attribute is `id`.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_by_id_mut(id))
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !self.style.is_empty() {
            let css = self
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape(&css));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// An HTML page under construction: a title, optional page-level CSS, the
/// body elements and the canvases they reference.
#[derive(Debug, Clone, Default)]
pub struct Document {
    title: String,
    stylesheet: Option<String>,
    body: Vec<Element>,
    canvases: BTreeMap<String, Canvas>,
}

impl Document {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_stylesheet(&mut self, css: impl Into<String>) {
        self.stylesheet = Some(css.into());
    }

    /// Append an element to the body and return it for further tweaks.
    pub fn append(&mut self, element: Element) -> &mut Element {
        self.body.push(element);
        let last = self.body.len() - 1;
        &mut self.body[last]
    }

    pub fn body(&self) -> &[Element] {
        &self.body
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.iter_mut().find_map(|e| e.find_by_id_mut(id))
    }

    /// Append an empty `<canvas id=..>` element backed by a 300x150 surface
    /// (the HTML default size).
    pub fn add_canvas(&mut self, id: &str) -> &mut Canvas {
        let canvas = Canvas::new(300, 150);
        self.append(
            Element::new("canvas")
                .with_attr("id", id)
                .with_attr("width", canvas.width().to_string())
                .with_attr("height", canvas.height().to_string()),
        );
        self.canvases.entry(id.to_string()).or_insert(canvas)
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.get(id)
    }

    pub fn canvas_mut(&mut self, id: &str) -> Option<&mut Canvas> {
        self.canvases.get_mut(id)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"UTF-8\">\n");
        out.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        if let Some(css) = &self.stylesheet {
            let _ = writeln!(out, "<style>\n{}\n</style>", css);
        }
        out.push_str("</head>\n<body>\n");
        for element in &self.body {
            element.write_html(&mut out);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_replace_in_place() {
        let mut img = Element::new("img").with_attr("src", "a").with_attr("alt", "x");
        img.set_attr("src", "b");
        assert_eq!(img.attr("src"), Some("b"));
        assert_eq!(img.to_html(), r#"<img src="b" alt="x">"#);
    }

    #[test]
    fn serializes_children_style_and_escapes() {
        let div = Element::new("div")
            .with_style("padding", "10px")
            .with_style("color", "#333")
            .with_child(Element::new("span").with_text("a < b & \"c\""));
        assert_eq!(
            div.to_html(),
            r#"<div style="padding: 10px; color: #333"><span>a &lt; b &amp; &quot;c&quot;</span></div>"#
        );
    }

    #[test]
    fn find_by_id_descends() {
        let mut doc = Document::new("t");
        doc.append(Element::new("div").with_child(Element::new("p").with_attr("id", "deep")));
        let found = doc.element_by_id_mut("deep").expect("found");
        assert_eq!(found.tag(), "p");
        assert!(doc.element_by_id_mut("missing").is_none());
    }

    #[test]
    fn document_renders_title_and_body() {
        let mut doc = Document::new("Shots & more");
        doc.append(Element::new("p").with_text("hi"));
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Shots &amp; more</title>"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn add_canvas_registers_surface_and_element() {
        let mut doc = Document::new("c");
        doc.add_canvas("main");
        assert_eq!(doc.canvas("main").map(|c| c.width()), Some(300));
        assert_eq!(doc.body()[0].attr("id"), Some("main"));
        assert_eq!(doc.body()[0].attr("height"), Some("150"));
    }
}
