//! Materialization utilities
//!
//! Stateless functions over the glint-dom substrate: parse a template into a
//! node, create elements and projection points, link stylesheets, apply
//! conditional classes, copy attributes. The component layer delegates here;
//! everything is also usable standalone.

use glint_dom::{DomResult, DomTree, NodeId};
use glint_html::FragmentParser;

/// Tag name of a content projection point
pub const PROJECTION_TAG: &str = "slot";

/// Parse `text` and append its first top-level node under `root`.
///
/// Only the first top-level node of the parsed fragment is used; any further
/// sibling nodes are parsed but discarded. Returns `None` when the fragment
/// parses to no content at all, so callers must guard against an absent
/// result.
pub fn materialize_template(dom: &mut DomTree, root: NodeId, text: &str) -> Option<NodeId> {
    let top_level = FragmentParser::new().parse_into(dom, text);
    let first = top_level.first().copied()?;
    if top_level.len() > 1 {
        tracing::trace!(discarded = top_level.len() - 1, "extra top-level template nodes discarded");
    }
    dom.append_child(root, first);
    Some(first)
}

/// Create one content projection point (a bare `slot` element)
pub fn build_projection_point(dom: &mut DomTree) -> NodeId {
    dom.create_element(PROJECTION_TAG)
}

/// Create an element of `tag_name` and append it under `root`.
///
/// When `has_projection_point` is set, one projection point is appended as
/// the new element's sole initial child. The flag means both "create a
/// projection point here" and "this node is the child container"; the two
/// cannot be requested separately.
pub fn create_child_element(
    dom: &mut DomTree,
    root: NodeId,
    tag_name: &str,
    has_projection_point: bool,
) -> NodeId {
    let node = dom.create_element(tag_name);
    if has_projection_point {
        let point = build_projection_point(dom);
        dom.append_child(node, point);
    }
    dom.append_child(root, node);
    node
}

/// Append a stylesheet-reference node for `url` under `root`
pub fn link_stylesheet(dom: &mut DomTree, root: NodeId, url: &str) -> NodeId {
    let node = dom.create_element("link");
    // freshly created element, cannot fail
    let _ = dom.set_attribute(node, "rel", "stylesheet");
    let _ = dom.set_attribute(node, "href", url);
    dom.append_child(root, node);
    node
}

/// Add every class whose entry is true to `target`.
///
/// Additive-only: a false entry is ignored, it never removes a class that is
/// already present.
pub fn apply_conditional_classes(
    dom: &mut DomTree,
    target: NodeId,
    classes: &[(&str, bool)],
) -> DomResult<()> {
    dom.element(target)?;
    for (class, condition) in classes {
        if *condition {
            dom.add_class(target, class)?;
        }
    }
    Ok(())
}

/// Copy the named attributes from `source` onto `target`.
///
/// A name is copied iff it is set on `source`, including when its value is
/// the empty string. Names absent on `source` leave `target` untouched; an
/// existing target attribute is never cleared.
pub fn copy_attributes(
    dom: &mut DomTree,
    target: NodeId,
    source: NodeId,
    names: &[&str],
) -> DomResult<()> {
    dom.element(target)?;
    dom.element(source)?;
    for name in names {
        if let Some(value) = dom.get_attribute(source, name) {
            let value = value.to_string();
            dom.set_attribute(target, name, &value)?;
        }
    }
    Ok(())
}

/// Find the first projection point inside `scope` by depth-first search.
///
/// Searches strict descendants only; a `scope` that is itself a projection
/// point does not match.
pub fn find_projection_point(dom: &DomTree, scope: NodeId) -> Option<NodeId> {
    dom.descendants(scope)
        .find(|id| dom.tag_name(*id) == Some(PROJECTION_TAG))
}

/// Optional injection capabilities an adopter may supply.
///
/// Raw style, raw script and selector-scoped style injection are declared
/// extension points with no default behavior: every method body below is
/// empty, so calling them through the default [`NoInjector`] has zero
/// observable effect. Do not assume these work unless the embedding
/// installed an implementation.
#[allow(unused_variables)]
pub trait Injector {
    /// Inject a raw stylesheet under `root`
    fn inject_style(&mut self, dom: &mut DomTree, root: NodeId, css: &str) {}

    /// Inject raw script text under `root`
    fn inject_script(&mut self, dom: &mut DomTree, root: NodeId, source: &str) {}

    /// Link an external script under `root`
    fn inject_script_link(&mut self, dom: &mut DomTree, root: NodeId, url: &str) {}

    /// Inject a selector-scoped stylesheet under `root`
    fn inject_scoped_style(&mut self, dom: &mut DomTree, root: NodeId, selector: &str) {}
}

/// Default injector: every capability is a no-op
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInjector;

impl Injector for NoInjector {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_template_first_node_only() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");

        let main = materialize_template(&mut dom, root, "<p>first</p><p>second</p>").unwrap();
        assert_eq!(dom.tag_name(main), Some("p"));

        // The second sibling is parsed but never attached
        let attached: Vec<NodeId> = dom.children(root).collect();
        assert_eq!(attached, vec![main]);
    }

    #[test]
    fn test_materialize_template_empty() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");

        assert_eq!(materialize_template(&mut dom, root, ""), None);
        assert_eq!(dom.children(root).count(), 0);
    }

    #[test]
    fn test_create_child_element_with_projection_point() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");

        let node = create_child_element(&mut dom, root, "button", true);
        assert_eq!(dom.tag_name(node), Some("button"));

        let children: Vec<NodeId> = dom.children(node).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(dom.tag_name(children[0]), Some(PROJECTION_TAG));
    }

    #[test]
    fn test_create_child_element_without_projection_point() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");

        let node = create_child_element(&mut dom, root, "img", false);
        assert_eq!(dom.children(node).count(), 0);
    }

    #[test]
    fn test_link_stylesheet() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");

        let link = link_stylesheet(&mut dom, root, "theme.css");
        assert_eq!(dom.tag_name(link), Some("link"));
        assert_eq!(dom.get_attribute(link, "rel"), Some("stylesheet"));
        assert_eq!(dom.get_attribute(link, "href"), Some("theme.css"));
        assert_eq!(dom.children(root).next(), Some(link));
    }

    #[test]
    fn test_apply_conditional_classes_additive_only() {
        let mut dom = DomTree::new();
        let target = dom.create_element("div");
        dom.add_class(target, "existing").unwrap();

        apply_conditional_classes(
            &mut dom,
            target,
            &[("highlighted", true), ("hidden", false), ("existing", false)],
        )
        .unwrap();

        assert!(dom.has_class(target, "highlighted"));
        assert!(!dom.has_class(target, "hidden"));
        // A false entry never removes a class already present
        assert!(dom.has_class(target, "existing"));
    }

    #[test]
    fn test_copy_attributes_empty_string_copied() {
        let mut dom = DomTree::new();
        let source = dom.create_element("x-box");
        let target = dom.create_element("div");
        dom.set_attribute(source, "disabled", "").unwrap();

        copy_attributes(&mut dom, target, source, &["disabled", "title"]).unwrap();

        assert_eq!(dom.get_attribute(target, "disabled"), Some(""));
        assert!(!dom.has_attribute(target, "title"));
    }

    #[test]
    fn test_copy_attributes_never_clears_target() {
        let mut dom = DomTree::new();
        let source = dom.create_element("x-box");
        let target = dom.create_element("div");
        dom.set_attribute(target, "title", "kept").unwrap();

        copy_attributes(&mut dom, target, source, &["title"]).unwrap();

        assert_eq!(dom.get_attribute(target, "title"), Some("kept"));
    }

    #[test]
    fn test_find_projection_point_depth_first() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");
        let inner = dom.create_element("section");
        let deep_slot = dom.create_element(PROJECTION_TAG);
        let later_slot = dom.create_element(PROJECTION_TAG);

        dom.append_child(root, inner);
        dom.append_child(inner, deep_slot);
        dom.append_child(root, later_slot);

        // Depth-first finds the nested slot before the later sibling
        assert_eq!(find_projection_point(&dom, root), Some(deep_slot));
    }

    #[test]
    fn test_find_projection_point_excludes_scope() {
        let mut dom = DomTree::new();
        let slot = dom.create_element(PROJECTION_TAG);

        assert_eq!(find_projection_point(&dom, slot), None);
    }

    #[test]
    fn test_no_injector_has_no_effect() {
        let mut dom = DomTree::new();
        let root = dom.create_element("div");
        let before = dom.len();

        let mut injector = NoInjector;
        injector.inject_style(&mut dom, root, "p { color: red }");
        injector.inject_script(&mut dom, root, "console.log(1)");
        injector.inject_scoped_style(&mut dom, root, ".scope");

        assert_eq!(dom.len(), before);
        assert_eq!(dom.children(root).count(), 0);
    }
}
