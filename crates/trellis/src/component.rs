//! Component trait for building views from state
//!
//! A component turns its current state into an element tree, usually by
//! running base elements through registered style functions. A [`Session`]
//! keeps the last render tree and re-renders whenever the host reports a
//! state change.
//!
//! # Example
//!
//! ```rust
//! use trellis::{Component, Element, ModifierParams, ModifierRegistry, Session};
//!
//! struct ColorToggle {
//!     use_red_text: bool,
//! }
//!
//! impl Component for ColorToggle {
//!     fn element(&self, registry: &ModifierRegistry) -> trellis::Result<Element> {
//!         registry.apply_modifier(
//!             &Element::text("Hello World"),
//!             "text_color_toggle",
//!             &ModifierParams::new().with("use_red", self.use_red_text),
//!         )
//!     }
//! }
//!
//! let registry = ModifierRegistry::with_builtins().unwrap();
//! let mut session = Session::new(&registry, ColorToggle { use_red_text: false }).unwrap();
//! let changed = session.update(|view| view.use_red_text = !view.use_red_text).unwrap();
//! assert!(changed);
//! ```

use crate::element::Element;
use crate::error::Result;
use crate::registry::ModifierRegistry;
use crate::render::{render, RenderNode};

/// A view that can be built into an element tree
///
/// `element` takes `&self`: building must not change state, so calling it
/// twice with the same state gives the same tree.
pub trait Component {
    fn element(&self, registry: &ModifierRegistry) -> Result<Element>;
}

/// Extension trait for optional components
pub trait ComponentExt: Component {
    /// Build the component if `condition` holds, otherwise an empty element
    fn when(&self, condition: bool, registry: &ModifierRegistry) -> Result<Element> {
        if condition {
            self.element(registry)
        } else {
            Ok(Element::empty())
        }
    }
}

impl<T: Component + ?Sized> ComponentExt for T {}

/// A component plus its most recent render tree
pub struct Session<'r, C> {
    registry: &'r ModifierRegistry,
    component: C,
    tree: RenderNode,
    renders: usize,
}

impl<'r, C: Component> Session<'r, C> {
    /// Render `component` once and keep the result
    pub fn new(registry: &'r ModifierRegistry, component: C) -> Result<Self> {
        let tree = render(&component.element(registry)?);
        Ok(Self {
            registry,
            component,
            tree,
            renders: 1,
        })
    }

    /// Apply a state change and re-render.
    ///
    /// Returns whether the render tree changed. If re-rendering fails the
    /// state change is kept, the previous tree stays current, and the error
    /// is returned.
    pub fn update(&mut self, change: impl FnOnce(&mut C)) -> Result<bool> {
        change(&mut self.component);
        self.rerender()
    }

    /// Re-render without changing state
    pub fn rerender(&mut self) -> Result<bool> {
        let element = match self.component.element(self.registry) {
            Ok(element) => element,
            Err(err) => {
                log::warn!("re-render failed, keeping previous tree: {}", err);
                return Err(err);
            }
        };
        let tree = render(&element);
        let changed = tree != self.tree;
        self.tree = tree;
        self.renders += 1;
        log::debug!("re-render #{} (changed: {})", self.renders, changed);
        Ok(changed)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn render_tree(&self) -> &RenderNode {
        &self.tree
    }

    /// Successful renders so far, including the initial one
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::params::ModifierParams;

    struct Label {
        modifier: &'static str,
        flag: bool,
    }

    impl Component for Label {
        fn element(&self, registry: &ModifierRegistry) -> Result<Element> {
            registry.apply_modifier(
                &Element::text("label"),
                self.modifier,
                &ModifierParams::new().with("use_red", self.flag),
            )
        }
    }

    fn registry() -> ModifierRegistry {
        ModifierRegistry::with_builtins().unwrap()
    }

    #[test]
    fn test_component_when() {
        let registry = registry();
        let label = Label {
            modifier: "text_color_toggle",
            flag: true,
        };
        assert_eq!(label.when(false, &registry).unwrap(), Element::empty());
        assert_ne!(label.when(true, &registry).unwrap(), Element::empty());
    }

    #[test]
    fn test_session_rerenders_on_change() {
        let registry = registry();
        let mut session = Session::new(
            &registry,
            Label {
                modifier: "text_color_toggle",
                flag: false,
            },
        )
        .unwrap();
        assert_eq!(session.render_tree().style.foreground, Some(css::BLUE));

        assert!(session.update(|label| label.flag = true).unwrap());
        assert_eq!(session.render_tree().style.foreground, Some(css::RED));
        assert_eq!(session.render_count(), 2);

        // Same state renders the same tree
        assert!(!session.rerender().unwrap());
        assert_eq!(session.render_count(), 3);
    }

    #[test]
    fn test_failed_rerender_keeps_previous_tree() {
        let registry = registry();
        let mut session = Session::new(
            &registry,
            Label {
                modifier: "text_color_toggle",
                flag: false,
            },
        )
        .unwrap();
        let before = session.render_tree().clone();

        assert!(session
            .update(|label| label.modifier = "not_registered")
            .is_err());
        assert_eq!(session.render_tree(), &before);
        assert_eq!(session.render_count(), 1);
        assert_eq!(session.component().modifier, "not_registered");
    }
}
