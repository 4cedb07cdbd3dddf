use glam::Vec2;

use crate::color::Color;
use crate::decoration::{Combine, Decoration, Property};
use crate::geometry::{EdgeInsets, ShapeKind};
use crate::text::{Font, FontWeight};

/// Visual properties of one node after folding its decoration chain.
///
/// Exclusive properties are `Option<T>`: `None` means nothing in the chain
/// (or the inherited cascade) set them. Additive properties start at zero and
/// accumulate. Overlays are not part of the style; they are rendered as
/// separate layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font: Option<Font>,
    /// Explicit size; when `None` the font's own point size applies
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub clip_shape: Option<ShapeKind>,

    // Frame is stored per axis so a later width-only frame keeps an earlier height.
    pub frame_width: Option<f32>,
    pub frame_height: Option<f32>,

    pub opacity: Option<f32>,

    pub padding: EdgeInsets,
    pub blur: f32,
    pub offset: Vec2,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            font: None,
            font_size: None,
            font_weight: None,
            foreground: None,
            background: None,
            clip_shape: None,
            frame_width: None,
            frame_height: None,
            opacity: None,
            padding: EdgeInsets::ZERO,
            blur: 0.0,
            offset: Vec2::ZERO,
        }
    }
}

impl ResolvedStyle {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold decorations in order, starting from an empty style
    pub fn from_decorations<'a>(decorations: impl IntoIterator<Item = &'a Decoration>) -> Self {
        let mut style = Self::default();
        for decoration in decorations {
            style.apply(decoration.property());
        }
        style
    }

    /// Fold one property into this style, according to its [`Combine`] class.
    ///
    /// Exclusive properties overwrite, additive ones accumulate. Layered
    /// properties (overlays) are not part of the style.
    pub fn apply(&mut self, property: &Property) {
        match property.combine() {
            Combine::Exclusive => self.replace(property),
            Combine::Additive => self.accumulate(property),
            Combine::Layered => {}
        }
    }

    fn replace(&mut self, property: &Property) {
        match property {
            Property::Font(font) => {
                self.font = Some(*font);
                self.font_size = None;
            }
            Property::FontSize(size) => self.font_size = Some(*size),
            Property::FontWeight(weight) => self.font_weight = Some(*weight),
            Property::ForegroundColor(color) => self.foreground = Some(*color),
            Property::Background(color) => self.background = Some(*color),
            Property::ClipShape(shape) => self.clip_shape = Some(*shape),
            Property::Frame(frame) => {
                if let Some(width) = frame.width {
                    self.frame_width = Some(width);
                }
                if let Some(height) = frame.height {
                    self.frame_height = Some(height);
                }
            }
            Property::Opacity(opacity) => self.opacity = Some(*opacity),
            _ => log::warn!("'{}' is not an exclusive property", property.name()),
        }
    }

    fn accumulate(&mut self, property: &Property) {
        match property {
            Property::Padding(insets) => self.padding = self.padding + *insets,
            Property::Blur(radius) => self.blur += radius,
            Property::Offset(delta) => self.offset += *delta,
            _ => log::warn!("'{}' is not an additive property", property.name()),
        }
    }

    /// Point size text renders at: the explicit size, else the font's size
    pub fn effective_font_size(&self) -> Option<f32> {
        self.font_size.or_else(|| self.font.map(|f| f.point_size()))
    }

    /// Opacity with the fully-opaque default applied
    pub fn effective_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }
}
