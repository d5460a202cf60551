//! Fragment parsing tests for glint-html
//!
//! Covers malformed markup, nesting and the shapes component templates
//! actually take.

use glint_dom::{DomTree, NodeId};
use glint_html::FragmentParser;

#[test]
fn test_parse_malformed_markup_recovers() {
    let mut dom = DomTree::new();
    let nodes = FragmentParser::new().parse_into(
        &mut dom,
        "<div><p>Unclosed paragraph<span>Unclosed span</div>",
    );

    assert_eq!(nodes.len(), 1);
    assert_eq!(dom.tag_name(nodes[0]), Some("div"));
    assert!(dom.descendants(nodes[0]).count() >= 2);
}

#[test]
fn test_parse_nested_structure() {
    let mut dom = DomTree::new();
    let nodes = FragmentParser::new().parse_into(
        &mut dom,
        r#"<div id="container"><h1>Welcome</h1><ul><li>One</li><li>Two</li></ul></div>"#,
    );

    assert_eq!(nodes.len(), 1);
    let container = nodes[0];
    assert_eq!(dom.get_attribute(container, "id"), Some("container"));

    let children: Vec<NodeId> = dom.children(container).collect();
    assert_eq!(children.len(), 2);
    assert_eq!(dom.tag_name(children[0]), Some("h1"));
    assert_eq!(dom.tag_name(children[1]), Some("ul"));
    assert_eq!(dom.children(children[1]).count(), 2);
}

#[test]
fn test_parse_slot_preserved() {
    let mut dom = DomTree::new();
    let nodes =
        FragmentParser::new().parse_into(&mut dom, "<div><slot></slot></div>");

    let slot = dom.children(nodes[0]).next().unwrap();
    assert_eq!(dom.tag_name(slot), Some("slot"));
}

#[test]
fn test_parse_whitespace_only_fragment() {
    let mut dom = DomTree::new();
    let nodes = FragmentParser::new().parse_into(&mut dom, "   \n\t  ");
    assert!(nodes.is_empty());
}

#[test]
fn test_parsed_nodes_are_detached() {
    let mut dom = DomTree::new();
    let nodes = FragmentParser::new().parse_into(&mut dom, "<p>one</p><p>two</p>");

    for id in nodes {
        assert!(!dom.get(id).unwrap().parent.is_valid());
    }
}
