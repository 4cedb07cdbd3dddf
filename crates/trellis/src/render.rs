//! Resolution of an element tree into a render tree.
//!
//! Each node's style is the cascade inherited from its ancestors folded with
//! the node's own decorations, in order. Only cascading decorations are
//! folded into the cascade handed down to children and overlays.

use crate::color::Color;
use crate::decoration::Property;
use crate::element::{Element, ElementKind};
use crate::geometry::{Alignment, Axis, ShapeKind};
use crate::style::ResolvedStyle;
use crate::text::TextContent;

/// What a render node draws
#[derive(Debug, Clone, PartialEq)]
pub enum RenderKind {
    Empty,
    Text(TextContent),
    ColorBlock(Color),
    Shape { shape: ShapeKind, fill: Color },
    Group { axis: Axis, spacing: Option<f32> },
}

/// A layer drawn over a node's content
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOverlay {
    pub alignment: Alignment,
    pub node: RenderNode,
}

/// Fully resolved node, ready for a host renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    pub kind: RenderKind,
    pub style: ResolvedStyle,
    /// Overlays in application order (later ones draw on top)
    pub overlays: Vec<RenderOverlay>,
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Number of nodes in this subtree, overlays included
    pub fn node_count(&self) -> usize {
        1 + self
            .overlays
            .iter()
            .map(|overlay| overlay.node.node_count())
            .sum::<usize>()
            + self.children.iter().map(RenderNode::node_count).sum::<usize>()
    }

    /// Text of this node, if it is a text node
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            RenderKind::Text(content) => Some(&content.text),
            _ => None,
        }
    }
}

/// Resolve `element` with no inherited cascade.
///
/// Pure: rendering the same element twice yields equal trees.
pub fn render(element: &Element) -> RenderNode {
    render_with_cascade(element, &ResolvedStyle::default())
}

/// Resolve `element` as a descendant of a node whose cascade is `inherited`
pub fn render_with_cascade(element: &Element, inherited: &ResolvedStyle) -> RenderNode {
    let mut style = inherited.clone();
    let mut cascade = inherited.clone();
    let mut overlay_elements = Vec::new();

    for decoration in element.decorations() {
        let property = decoration.property();
        style.apply(property);
        if decoration.is_cascading() {
            cascade.apply(property);
        }
        if let Property::Overlay(overlay) = property {
            overlay_elements.push(overlay);
        }
    }

    // Overlays sit inside the decorated node, so they see its full cascade
    let overlays = overlay_elements
        .into_iter()
        .map(|overlay| RenderOverlay {
            alignment: overlay.alignment,
            node: render_with_cascade(&overlay.element, &cascade),
        })
        .collect();

    let (kind, children) = match element.kind() {
        ElementKind::Empty => (RenderKind::Empty, Vec::new()),
        ElementKind::Text(content) => (RenderKind::Text(content.clone()), Vec::new()),
        ElementKind::ColorBlock(color) => (RenderKind::ColorBlock(*color), Vec::new()),
        ElementKind::Shape { shape, fill } => (
            RenderKind::Shape {
                shape: *shape,
                fill: *fill,
            },
            Vec::new(),
        ),
        ElementKind::Group(group) => (
            RenderKind::Group {
                axis: group.axis,
                spacing: group.spacing,
            },
            group
                .children
                .iter()
                .map(|child| render_with_cascade(child, &cascade))
                .collect(),
        ),
    };

    RenderNode {
        kind,
        style,
        overlays,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::decoration::{Decoration, Overlay};
    use crate::geometry::EdgeInsets;
    use crate::text::Font;

    #[test]
    fn test_cascading_font_reaches_children() {
        let tree = render(
            &Element::vstack(vec![Element::text("a"), Element::text("b").font(Font::Caption)])
                .font(Font::LargeTitle),
        );

        assert_eq!(tree.style.font, Some(Font::LargeTitle));
        assert_eq!(tree.children[0].style.font, Some(Font::LargeTitle));
        // Child's own decoration overrides the inherited default
        assert_eq!(tree.children[1].style.font, Some(Font::Caption));
    }

    #[test]
    fn test_local_background_stays_on_node() {
        let tree = render(&Element::vstack(vec![Element::text("a")]).background(css::RED));

        assert_eq!(tree.style.background, Some(css::RED));
        assert_eq!(tree.children[0].style.background, None);
    }

    #[test]
    fn test_scope_override_changes_propagation() {
        let tree = render(&Element::vstack(vec![Element::text("a")]).with(
            Decoration::new(Property::Background(css::RED)).cascading(),
        ));
        assert_eq!(tree.children[0].style.background, Some(css::RED));

        let tree = render(
            &Element::vstack(vec![Element::text("a")])
                .with(Decoration::new(Property::ForegroundColor(css::RED)).local()),
        );
        assert_eq!(tree.style.foreground, Some(css::RED));
        assert_eq!(tree.children[0].style.foreground, None);
    }

    #[test]
    fn test_cascading_blur_accumulates_with_child_blur() {
        let tree = render(&Element::vstack(vec![Element::text("a").blur(3.0)]).blur(2.0));
        assert_eq!(tree.style.blur, 2.0);
        assert_eq!(tree.children[0].style.blur, 5.0);
    }

    #[test]
    fn test_local_padding_not_inherited() {
        let tree = render(
            &Element::vstack(vec![Element::text("a").padding(EdgeInsets::all(2.0))])
                .padding(EdgeInsets::all(10.0)),
        );
        assert_eq!(tree.style.padding, EdgeInsets::all(10.0));
        assert_eq!(tree.children[0].style.padding, EdgeInsets::all(2.0));
    }

    #[test]
    fn test_overlay_is_layer_not_replacement() {
        let tree = render(
            &Element::color_block(css::BLUE)
                .overlay(Element::text("top"), Alignment::Top)
                .overlay(Element::text("bottom"), Alignment::Bottom),
        );

        assert_eq!(tree.kind, RenderKind::ColorBlock(css::BLUE));
        assert_eq!(tree.overlays.len(), 2);
        assert_eq!(tree.overlays[0].node.text(), Some("top"));
        assert_eq!(tree.overlays[1].alignment, Alignment::Bottom);
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_overlay_inherits_node_cascade() {
        let tree = render(
            &Element::color_block(css::BLUE)
                .font(Font::Title)
                .overlay(Element::text("mark"), Alignment::Center),
        );
        assert_eq!(tree.overlays[0].node.style.font, Some(Font::Title));
    }

    #[test]
    fn test_overlay_stays_on_decorated_node() {
        let overlay = Overlay::new(Element::text("mark"), Alignment::BottomTrailing);
        let tree = render(
            &Element::vstack(vec![Element::text("a")])
                .with(Decoration::new(Property::Overlay(overlay)).cascading()),
        );
        assert_eq!(tree.overlays.len(), 1);
        assert!(tree.children[0].overlays.is_empty());
    }

    #[test]
    fn test_render_is_idempotent() {
        let element = Element::hstack(vec![Element::text("x").blur(1.0), Element::empty()])
            .foreground(css::GREEN)
            .padding(EdgeInsets::all(3.0));
        assert_eq!(render(&element), render(&element));
    }
}
