use glam::Vec2;

use crate::color::Color;
use crate::decoration::{Decoration, Overlay, Property};
use crate::geometry::{Alignment, Axis, EdgeInsets, Frame, ShapeKind};
use crate::text::{Font, FontWeight, TextContent};

/// Explicit container for sibling elements.
///
/// Views that produce more than one element return a group rather than
/// relying on any implicit wrapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupElement {
    pub axis: Axis,
    /// Space between children, `None` for the host's default
    pub spacing: Option<f32>,
    pub children: Vec<Element>,
}

/// What an element displays
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Displays nothing; still carries decorations
    Empty,
    Text(TextContent),
    /// Flat color filling the proposed space
    ColorBlock(Color),
    Shape { shape: ShapeKind, fill: Color },
    Group(GroupElement),
}

/// Immutable description of something to display plus the ordered
/// decorations applied to it.
///
/// The fluent `with_*`-style methods consume `self` and return the decorated
/// element. [`Element::decorated`] borrows instead and leaves the original
/// untouched, which is what the modifier registry builds on.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    decorations: Vec<Decoration>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            decorations: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(ElementKind::Empty)
    }

    pub fn text(content: impl Into<TextContent>) -> Self {
        Self::new(ElementKind::Text(content.into()))
    }

    pub fn color_block(color: Color) -> Self {
        Self::new(ElementKind::ColorBlock(color))
    }

    pub fn shape(shape: ShapeKind, fill: Color) -> Self {
        Self::new(ElementKind::Shape { shape, fill })
    }

    pub fn group(axis: Axis, children: Vec<Element>) -> Self {
        Self::new(ElementKind::Group(GroupElement {
            axis,
            spacing: None,
            children,
        }))
    }

    pub fn vstack(children: Vec<Element>) -> Self {
        Self::group(Axis::Vertical, children)
    }

    pub fn hstack(children: Vec<Element>) -> Self {
        Self::group(Axis::Horizontal, children)
    }

    pub fn zstack(children: Vec<Element>) -> Self {
        Self::group(Axis::Stack, children)
    }

    /// Set the spacing between children. No-op on non-group elements.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        if let ElementKind::Group(group) = &mut self.kind {
            group.spacing = Some(spacing);
        }
        self
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Decorations in application order
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Children of a group element; empty for leaves
    pub fn children(&self) -> &[Element] {
        match &self.kind {
            ElementKind::Group(group) => &group.children,
            _ => &[],
        }
    }

    /// Return a new element with `decoration` appended; `self` is unchanged
    pub fn decorated(&self, decoration: impl Into<Decoration>) -> Element {
        self.clone().with(decoration)
    }

    /// Append a decoration
    pub fn with(mut self, decoration: impl Into<Decoration>) -> Self {
        self.decorations.push(decoration.into());
        self
    }

    /// Append several decorations in order
    pub fn with_all(mut self, decorations: impl IntoIterator<Item = Decoration>) -> Self {
        self.decorations.extend(decorations);
        self
    }

    pub fn font(self, font: Font) -> Self {
        self.with(Property::Font(font))
    }

    pub fn font_size(self, size: f32) -> Self {
        self.with(Property::FontSize(size))
    }

    pub fn font_weight(self, weight: FontWeight) -> Self {
        self.with(Property::FontWeight(weight))
    }

    pub fn foreground(self, color: Color) -> Self {
        self.with(Property::ForegroundColor(color))
    }

    pub fn background(self, color: Color) -> Self {
        self.with(Property::Background(color))
    }

    pub fn padding(self, insets: EdgeInsets) -> Self {
        self.with(Property::Padding(insets))
    }

    pub fn blur(self, radius: f32) -> Self {
        self.with(Property::Blur(radius))
    }

    pub fn offset(self, x: f32, y: f32) -> Self {
        self.with(Property::Offset(Vec2::new(x, y)))
    }

    pub fn opacity(self, opacity: f32) -> Self {
        self.with(Property::Opacity(opacity.clamp(0.0, 1.0)))
    }

    pub fn frame(self, frame: Frame) -> Self {
        self.with(Property::Frame(frame))
    }

    pub fn clip_shape(self, shape: ShapeKind) -> Self {
        self.with(Property::ClipShape(shape))
    }

    /// Clip to a rounded rectangle
    pub fn corner_radius(self, radius: f32) -> Self {
        self.clip_shape(ShapeKind::RoundedRectangle {
            corner_radius: radius,
        })
    }

    pub fn overlay(self, element: Element, alignment: Alignment) -> Self {
        self.with(Property::Overlay(Overlay::new(element, alignment)))
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::empty()
    }
}
