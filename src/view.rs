//! Immutable view trees and the containers they are mounted into.
//! Nodes only describe markup; nothing here touches a live document.

use crate::models::Fragment;

/// Elements that never get a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "hr", "input", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<ViewNode>,
    },
    /// Escaped on output.
    Text(String),
    /// Trusted markup, written verbatim.
    Raw(String),
}

impl ViewNode {
    pub fn element(tag: &'static str) -> Self {
        ViewNode::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        ViewNode::Text(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        ViewNode::Raw(s.into())
    }

    /// Text or raw markup depending on the fragment's trust flag.
    pub fn fragment(f: &Fragment) -> Self {
        if f.raw_markup {
            ViewNode::Raw(f.value.clone())
        } else {
            ViewNode::Text(f.value.clone())
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let ViewNode::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = ViewNode>) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Convenience for `<tag>text</tag>`.
    pub fn with_text(tag: &'static str, s: impl Into<String>) -> Self {
        ViewNode::element(tag).child(ViewNode::text(s))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            ViewNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ViewNode::Element { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the first element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&ViewNode> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|c| c.find_class(class))
    }

    /// Depth-first search for the first element with `tag`.
    pub fn find_tag(&self, tag: &str) -> Option<&ViewNode> {
        if self.tag() == Some(tag) {
            return Some(self);
        }
        self.child_nodes().iter().find_map(|c| c.find_tag(tag))
    }

    /// Concatenated text content, markup included as-is.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text(s) | ViewNode::Raw(s) => s.clone(),
            ViewNode::Element { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text(s) => out.push_str(&html_escape(s)),
            ViewNode::Raw(s) => out.push_str(s),
            ViewNode::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in attrs {
                    out.push_str(&format!(" {}=\"{}\"", k, html_escape(v)));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(tag) {
                    return;
                }
                for c in children {
                    c.write_html(out);
                }
                out.push_str(&format!("</{}>", tag));
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A designated rendering target (news grid, gallery grid, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub id: String,
    pub class: String,
    children: Vec<ViewNode>,
}

impl Container {
    pub fn new(id: &str, class: &str) -> Self {
        Container {
            id: id.to_string(),
            class: class.to_string(),
            children: Vec::new(),
        }
    }

    /// Replace every child in one step.
    pub fn mount(&mut self, nodes: Vec<ViewNode>) {
        self.children = nodes;
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn show_fallback(&mut self, message: &str) {
        self.mount(vec![ViewNode::with_text("p", message).class("load-fallback")]);
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for c in &self.children {
            c.write_html(&mut out);
        }
        out
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"{}\">{}</div>",
            html_escape(&self.id),
            html_escape(&self.class),
            self.inner_html()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let n = ViewNode::with_text("h3", "Tom & <Jerry>");
        assert_eq!(n.to_html(), "<h3>Tom &amp; &lt;Jerry&gt;</h3>");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let n = ViewNode::element("li").child(ViewNode::raw("<strong>New</strong> map"));
        assert_eq!(n.to_html(), "<li><strong>New</strong> map</li>");
    }

    #[test]
    fn test_attrs_escaped_and_void_elements() {
        let n = ViewNode::element("img")
            .attr("src", "a.png")
            .attr("alt", "say \"hi\"");
        assert_eq!(n.to_html(), "<img src=\"a.png\" alt=\"say &quot;hi&quot;\">");
    }

    #[test]
    fn test_mount_replaces_children() {
        let mut c = Container::new("grid", "news-grid");
        c.mount(vec![ViewNode::text("a"), ViewNode::text("b")]);
        c.mount(vec![ViewNode::text("c")]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.inner_html(), "c");
    }

    #[test]
    fn test_find_class() {
        let n = ViewNode::element("div")
            .class("outer")
            .child(ViewNode::with_text("span", "x").class("news-tag featured"));
        assert_eq!(n.find_class("featured").map(|n| n.text_content()), Some("x".into()));
        assert!(n.find_class("missing").is_none());
    }
}
