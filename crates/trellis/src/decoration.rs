//! Decorations: the unit a modifier chain is built from.
//!
//! A [`Decoration`] pairs a [`Property`] with a [`Scope`]. Properties fall into
//! three combine classes (see [`Combine`]), which is what makes a chain
//! order-sensitive for some properties and cumulative for others.

use glam::Vec2;
use serde::Deserialize;

use crate::color::Color;
use crate::element::Element;
use crate::geometry::{Alignment, EdgeInsets, Frame, ShapeKind};
use crate::text::{Font, FontWeight};

/// How repeated applications of the same property combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combine {
    /// The last-applied value replaces earlier ones
    Exclusive,
    /// Values accumulate across the chain
    Additive,
    /// Each application adds a new layer on top of the previous ones
    Layered,
}

/// Whether a decoration reaches the descendants of the element it decorates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Applies to the element and is inherited as a default by its descendants
    Cascading,
    /// Applies only to the element it decorates
    Local,
}

/// Content layered over the decorated element
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub element: Box<Element>,
    pub alignment: Alignment,
}

impl Overlay {
    pub fn new(element: Element, alignment: Alignment) -> Self {
        Self {
            element: Box::new(element),
            alignment,
        }
    }
}

/// A single visual property set by a decoration
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Replaces any font and explicit font size set earlier
    Font(Font),
    FontSize(f32),
    FontWeight(FontWeight),
    ForegroundColor(Color),
    Background(Color),
    ClipShape(ShapeKind),
    /// Per-axis: a frame that leaves one axis `None` keeps the earlier value for it
    Frame(Frame),
    Opacity(f32),
    Padding(EdgeInsets),
    /// Blur radius in points
    Blur(f32),
    Offset(Vec2),
    Overlay(Overlay),
}

impl Property {
    pub fn combine(&self) -> Combine {
        match self {
            Property::Padding(_) | Property::Blur(_) | Property::Offset(_) => Combine::Additive,
            Property::Overlay(_) => Combine::Layered,
            _ => Combine::Exclusive,
        }
    }

    /// Scope used when a decoration doesn't pick one explicitly.
    ///
    /// Text attributes and blur flow down to descendants; geometry, fills
    /// and overlays stay on the node they decorate.
    pub fn default_scope(&self) -> Scope {
        match self {
            Property::Font(_)
            | Property::FontSize(_)
            | Property::FontWeight(_)
            | Property::ForegroundColor(_)
            | Property::Blur(_) => Scope::Cascading,
            _ => Scope::Local,
        }
    }

    /// Whether the property can reach descendants at all.
    ///
    /// Overlays are layers of the node they decorate and never cascade.
    pub fn can_cascade(&self) -> bool {
        !matches!(self, Property::Overlay(_))
    }

    /// Stable name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Property::Font(_) => "font",
            Property::FontSize(_) => "font_size",
            Property::FontWeight(_) => "font_weight",
            Property::ForegroundColor(_) => "foreground",
            Property::Background(_) => "background",
            Property::ClipShape(_) => "clip_shape",
            Property::Frame(_) => "frame",
            Property::Opacity(_) => "opacity",
            Property::Padding(_) => "padding",
            Property::Blur(_) => "blur",
            Property::Offset(_) => "offset",
            Property::Overlay(_) => "overlay",
        }
    }
}

/// A property together with the scope it applies in
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    property: Property,
    scope: Scope,
}

impl Decoration {
    /// Create a decoration with the property's default scope
    pub fn new(property: Property) -> Self {
        let scope = property.default_scope();
        Self { property, scope }
    }

    /// Make this decoration cascade to descendants.
    ///
    /// No effect on properties that cannot cascade (overlays).
    pub fn cascading(self) -> Self {
        self.with_scope(Scope::Cascading)
    }

    /// Restrict this decoration to the element it decorates
    pub fn local(mut self) -> Self {
        self.scope = Scope::Local;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        if self.property.can_cascade() {
            self.scope = scope;
        }
        self
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn is_cascading(&self) -> bool {
        self.scope == Scope::Cascading
    }
}

impl From<Property> for Decoration {
    fn from(property: Property) -> Self {
        Decoration::new(property)
    }
}
