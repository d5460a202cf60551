//! Component abstraction
//!
//! A component instance owns an encapsulation root (an open shadow subtree
//! attached to its host element) and tracks the most recently materialized
//! main node together with the projection point found inside it. Behavior is
//! supplied as an [`ElementDefinition`] record rather than by subclassing: a
//! build function invoked exactly once per instance, plus an optional
//! template function consulted when [`Component::add`] is called without
//! content.
//!
//! Construction is two-phase: [`Component::allocate`] attaches the root,
//! [`Component::run_build`] runs the build function. [`crate::Host`] drives
//! both phases for registered names; tests can drive them directly against
//! an in-memory host.

use crate::error::{ComponentError, ComponentResult};
use crate::host::Host;
use crate::util;
use glint_dom::NodeId;
use std::rc::Rc;

/// Build function: constructs an instance's rendered tree, once
pub type BuildFn = Rc<dyn Fn(&mut Component, &mut Host)>;

/// Template function: produces the markup used by `add` when no content is
/// passed
pub type TemplateFn = Rc<dyn Fn() -> String>;

/// Configuration record for a custom element type.
///
/// Supplied at registration time; the registry hands a clone to every
/// instantiation.
#[derive(Clone)]
pub struct ElementDefinition {
    pub(crate) build: BuildFn,
    pub(crate) template: Option<TemplateFn>,
}

impl ElementDefinition {
    /// Define an element type from its build function
    pub fn new(build: impl Fn(&mut Component, &mut Host) + 'static) -> Self {
        Self {
            build: Rc::new(build),
            template: None,
        }
    }

    /// Attach a template function consulted by `add` when no content is
    /// passed
    pub fn with_template(mut self, template: impl Fn() -> String + 'static) -> Self {
        self.template = Some(Rc::new(template));
        self
    }

    /// Build function of this definition
    pub fn build(&self) -> &BuildFn {
        &self.build
    }

    /// Template function of this definition, if any
    pub fn template(&self) -> Option<&TemplateFn> {
        self.template.as_ref()
    }
}

impl std::fmt::Debug for ElementDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementDefinition")
            .field("has_template", &self.template.is_some())
            .finish()
    }
}

/// Result of one materialization call.
///
/// Each call reports what it produced; the component also stores the latest
/// record as its tracked state, last write wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Materialized {
    /// The node that became the main node
    pub main_node: NodeId,
    /// First projection point inside it, if any
    pub projection_point: Option<NodeId>,
}

/// A custom element instance.
///
/// All materialization methods append under the encapsulation root and
/// overwrite the tracked main node. Nodes materialized by earlier calls stay
/// attached under the root but are no longer reachable through the tracked
/// state.
pub struct Component {
    /// Host element in the light tree; logical children live under it
    element: NodeId,
    /// Encapsulation root, attached once, never replaced
    root: NodeId,
    /// Most recently materialized main node
    main_node: Option<NodeId>,
    /// Projection point found inside the main node after the last
    /// materialization
    projection_point: Option<NodeId>,
    template: Option<TemplateFn>,
    built: bool,
}

impl Component {
    /// Phase one: attach the encapsulation root to `element`.
    ///
    /// The root is an open, inspectable isolation boundary; it provides
    /// structural and style isolation, not a security boundary. Main node
    /// and projection point start absent.
    pub fn allocate(
        host: &mut Host,
        element: NodeId,
        template: Option<TemplateFn>,
    ) -> ComponentResult<Self> {
        let root = host.dom_mut().attach_shadow(element)?;
        Ok(Self {
            element,
            root,
            main_node: None,
            projection_point: None,
            template,
            built: false,
        })
    }

    /// Phase two: run the build function.
    ///
    /// Runs synchronously to completion, exactly once per instance; repeat
    /// calls do nothing.
    pub fn run_build(&mut self, host: &mut Host, build: &BuildFn) {
        if self.built {
            return;
        }
        self.built = true;
        (**build)(self, host);
    }

    /// Host element of this instance
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Encapsulation root of this instance
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Most recently materialized main node.
    ///
    /// Absent until a materialization call produces a node, and absent again
    /// after `add` materializes an empty template.
    pub fn main_node(&self) -> Option<NodeId> {
        self.main_node
    }

    /// Projection point tracked for the current main node
    pub fn projection_point(&self) -> Option<NodeId> {
        self.projection_point
    }

    /// Whether the build phase has run
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Materialize markup under the encapsulation root.
    ///
    /// When `content` is empty or absent it comes from the template function
    /// instead (empty when the definition has none). Only the first
    /// top-level parsed node is attached and becomes the main node; the
    /// projection point is re-resolved by depth-first search inside it. An
    /// empty fragment materializes nothing and leaves both absent.
    pub fn add(&mut self, host: &mut Host, content: Option<&str>) -> Option<Materialized> {
        let mut text = content.unwrap_or_default().to_string();
        if text.is_empty() {
            text = self
                .template
                .as_ref()
                .map(|template| template())
                .unwrap_or_default();
        }
        match util::materialize_template(host.dom_mut(), self.root, &text) {
            Some(main_node) => Some(self.track(host, main_node)),
            None => {
                self.main_node = None;
                self.projection_point = None;
                None
            }
        }
    }

    /// Materialize a bare element under the encapsulation root.
    ///
    /// Same post-conditions as [`Component::add`]. The flag both creates a
    /// projection point inside the new element and marks it as the child
    /// container; see [`util::create_child_element`].
    pub fn add_element(
        &mut self,
        host: &mut Host,
        tag_name: &str,
        has_projection_point: bool,
    ) -> Materialized {
        let main_node =
            util::create_child_element(host.dom_mut(), self.root, tag_name, has_projection_point);
        self.track(host, main_node)
    }

    fn track(&mut self, host: &Host, main_node: NodeId) -> Materialized {
        let projection_point = util::find_projection_point(host.dom(), main_node);
        self.main_node = Some(main_node);
        self.projection_point = projection_point;
        tracing::trace!(?main_node, ?projection_point, "materialized main node");
        Materialized {
            main_node,
            projection_point,
        }
    }

    /// The live, ordered sequence of nodes currently projected into the
    /// projection point: the logical children of the host element.
    ///
    /// Fails when no projection point is tracked; callers must guard.
    pub fn children(&self, host: &Host) -> ComponentResult<Vec<NodeId>> {
        if self.projection_point.is_none() {
            return Err(ComponentError::NoProjectionPoint);
        }
        Ok(host.dom().children(self.element).collect())
    }

    /// First projected child, absent when nothing is projected
    pub fn first_child(&self, host: &Host) -> ComponentResult<Option<NodeId>> {
        Ok(self.children(host)?.into_iter().next())
    }

    /// Apply conditional classes to the main node
    pub fn apply_classes(&self, host: &mut Host, classes: &[(&str, bool)]) -> ComponentResult<()> {
        let main_node = self.main_node.ok_or(ComponentError::NoMainNode)?;
        util::apply_conditional_classes(host.dom_mut(), main_node, classes)?;
        Ok(())
    }

    /// Copy the named attributes from the host element onto the main node
    pub fn copy_attributes(&self, host: &mut Host, names: &[&str]) -> ComponentResult<()> {
        let main_node = self.main_node.ok_or(ComponentError::NoMainNode)?;
        util::copy_attributes(host.dom_mut(), main_node, self.element, names)?;
        Ok(())
    }

    /// Link a stylesheet under the encapsulation root
    pub fn add_stylesheet_link(&self, host: &mut Host, url: &str) -> NodeId {
        util::link_stylesheet(host.dom_mut(), self.root, url)
    }

    /// Inject raw style under the root via the host's injector capability.
    /// No observable effect unless the embedding installed one.
    pub fn add_style(&self, host: &mut Host, css: &str) {
        host.inject_style(self.root, css);
    }

    /// Inject raw script under the root via the host's injector capability.
    /// No observable effect unless the embedding installed one.
    pub fn add_script(&self, host: &mut Host, source: &str) {
        host.inject_script(self.root, source);
    }

    /// Inject a selector-scoped style via the host's injector capability.
    /// No observable effect unless the embedding installed one.
    pub fn add_scoped_style(&self, host: &mut Host, selector: &str) {
        host.inject_scoped_style(self.root, selector);
    }

    /// Dispatch one minimal event of type `name` from the host element.
    ///
    /// Listeners registered before the call observe it synchronously; no
    /// payload, platform-default propagation. Returns the number of
    /// listeners invoked.
    pub fn emit(&self, host: &mut Host, name: &str) -> usize {
        host.dispatch(self.element, name)
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("element", &self.element)
            .field("root", &self.root)
            .field("main_node", &self.main_node)
            .field("projection_point", &self.projection_point)
            .field("built", &self.built)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocate(host: &mut Host) -> Component {
        let element = host.dom_mut().create_element("x-test");
        Component::allocate(host, element, None).unwrap()
    }

    #[test]
    fn test_allocate_starts_absent() {
        let mut host = Host::new();
        let component = allocate(&mut host);

        assert_eq!(component.main_node(), None);
        assert_eq!(component.projection_point(), None);
        assert!(!component.is_built());
        assert_eq!(host.dom().shadow_root(component.element()), Some(component.root()));
    }

    #[test]
    fn test_add_tracks_first_parsed_node() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);

        let result = component
            .add(&mut host, Some("<div><slot></slot></div><p>dropped</p>"))
            .unwrap();

        assert_eq!(host.dom().tag_name(result.main_node), Some("div"));
        assert_eq!(component.main_node(), Some(result.main_node));
        assert_eq!(component.projection_point(), result.projection_point);
        assert!(result.projection_point.is_some());

        // Only the first top-level node was attached under the root
        assert_eq!(host.dom().children(component.root()).count(), 1);
    }

    #[test]
    fn test_add_without_template_yields_nothing() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);

        assert_eq!(component.add(&mut host, None), None);
        assert_eq!(component.main_node(), None);
        assert_eq!(component.projection_point(), None);
    }

    #[test]
    fn test_add_element_creates_projection_point() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);

        let result = component.add_element(&mut host, "button", true);
        assert_eq!(host.dom().tag_name(result.main_node), Some("button"));
        assert_eq!(result.projection_point, component.projection_point());
        assert!(result.projection_point.is_some());

        let bare = component.add_element(&mut host, "img", false);
        assert_eq!(bare.projection_point, None);
        assert_eq!(component.projection_point(), None);
    }

    #[test]
    fn test_repeated_add_orphans_previous_main_node() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);

        let first = component.add(&mut host, Some("<div>one</div>")).unwrap();
        let second = component.add(&mut host, Some("<p>two</p>")).unwrap();

        assert_ne!(first.main_node, second.main_node);
        assert_eq!(component.main_node(), Some(second.main_node));

        // The first node stays attached under the root, just untracked
        let attached: Vec<NodeId> = host.dom().children(component.root()).collect();
        assert_eq!(attached, vec![first.main_node, second.main_node]);
    }

    #[test]
    fn test_children_requires_projection_point() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);
        let _ = component.add(&mut host, Some("<div>no slot here</div>"));

        assert_eq!(
            component.children(&host),
            Err(ComponentError::NoProjectionPoint)
        );
    }

    #[test]
    fn test_children_are_the_logical_children() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);
        let _ = component.add(&mut host, Some("<div><slot></slot></div>"));

        let li = host.dom_mut().create_element("li");
        let element = component.element();
        host.dom_mut().append_child(element, li);

        assert_eq!(component.children(&host).unwrap(), vec![li]);
        assert_eq!(component.first_child(&host).unwrap(), Some(li));
    }

    #[test]
    fn test_first_child_absent_when_no_children() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);
        let _ = component.add(&mut host, Some("<div><slot></slot></div>"));

        assert_eq!(component.first_child(&host).unwrap(), None);
    }

    #[test]
    fn test_apply_classes_requires_main_node() {
        let mut host = Host::new();
        let component = allocate(&mut host);

        assert_eq!(
            component.apply_classes(&mut host, &[("on", true)]),
            Err(ComponentError::NoMainNode)
        );
    }

    #[test]
    fn test_run_build_only_once() {
        let mut host = Host::new();
        let mut component = allocate(&mut host);

        let build: BuildFn = Rc::new(|component: &mut Component, host: &mut Host| {
            component.add_element(host, "div", true);
        });
        component.run_build(&mut host, &build);
        component.run_build(&mut host, &build);

        assert!(component.is_built());
        assert_eq!(host.dom().children(component.root()).count(), 1);
    }
}
