//! HTML fragment parser
//!
//! Uses html5ever's built-in RcDom and converts the parsed body contents to
//! our DOM format. This is simpler and more reliable than implementing
//! TreeSink directly.
//!
//! html5ever error-corrects malformed markup the way browsers do, so parsing
//! never fails; a fragment that produces no body content simply yields no
//! nodes.

use glint_dom::{DomTree, NodeId};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};

/// HTML fragment parser
pub struct FragmentParser;

impl FragmentParser {
    /// Create a new fragment parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a markup fragment into detached nodes in `dom`.
    ///
    /// Returns the ids of the top-level parsed nodes in document order. The
    /// nodes are created detached; the caller decides which ones to place.
    pub fn parse_into(&self, dom: &mut DomTree, html: &str) -> Vec<NodeId> {
        tracing::debug!(len = html.len(), "parsing fragment");

        let parsed = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("reading from an in-memory buffer cannot fail");

        let Some(body) = Self::find_body(&parsed.document) else {
            return Vec::new();
        };

        let mut top_level = Vec::new();
        for child in body.children.borrow().iter() {
            if let Some(id) = self.convert(child, dom) {
                top_level.push(id);
            }
        }
        tracing::debug!(count = top_level.len(), "parsed top-level nodes");
        top_level
    }

    /// Locate the `<body>` element html5ever synthesizes for every document
    fn find_body(document: &Handle) -> Option<Handle> {
        let html = Self::find_element(document, "html")?;
        Self::find_element(&html, "body")
    }

    fn find_element(parent: &Handle, tag: &str) -> Option<Handle> {
        parent
            .children
            .borrow()
            .iter()
            .find(|child| {
                matches!(&child.data, RcNodeData::Element { name, .. } if name.local.as_ref() == tag)
            })
            .cloned()
    }

    /// Convert an RcDom node into a detached glint-dom subtree.
    ///
    /// Whitespace-only text and non-content nodes are dropped.
    fn convert(&self, handle: &Handle, dom: &mut DomTree) -> Option<NodeId> {
        match &handle.data {
            RcNodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if text.trim().is_empty() {
                    return None;
                }
                Some(dom.create_text(&text))
            }
            RcNodeData::Comment { contents } => Some(dom.create_comment(&contents.to_string())),
            RcNodeData::Element { name, attrs, .. } => {
                let id = dom.create_element(name.local.as_ref());
                for attr in attrs.borrow().iter() {
                    let attr_name = attr.name.local.as_ref();
                    let value = attr.value.to_string();

                    // Cache class tokens
                    if attr_name == "class" {
                        for class in value.split_whitespace() {
                            let _ = dom.add_class(id, class);
                        }
                    }
                    let _ = dom.set_attribute(id, attr_name, &value);
                }

                for child in handle.children.borrow().iter() {
                    if let Some(child_id) = self.convert(child, dom) {
                        dom.append_child(id, child_id);
                    }
                }
                Some(id)
            }
            // Document, doctype and processing instructions never appear
            // below <body>
            _ => None,
        }
    }
}

impl Default for FragmentParser {
    fn default() -> Self {
        Self::new()
    }
}
