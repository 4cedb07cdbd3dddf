//! Built-in style functions.
//!
//! | name                | params                       | effect |
//! |---------------------|------------------------------|--------|
//! | `prominent_title`   |                              | large title font, blue foreground |
//! | `watermark`         | `text`                       | caption on black, overlaid bottom-trailing |
//! | `capsule_label`     |                              | large title, padded, white on blue, clipped to a capsule |
//! | `title_card`        |                              | like `capsule_label`, clipped to a 10pt rounded rectangle |
//! | `text_color_toggle` | `use_red`                    | red when set, blue otherwise |
//! | `padding`           | `amount` (default 16)        | uniform padding |
//! | `blur`              | `radius`                     | blur |
//! | `font_size`         | `size`                       | explicit point size |
//! | `foreground`        | `color`                      | foreground color |

use crate::color::css;
use crate::element::Element;
use crate::error::Result;
use crate::geometry::{Alignment, EdgeInsets, ShapeKind};
use crate::registry::ModifierRegistry;
use crate::text::Font;

/// Padding used when a modifier doesn't specify one
pub const DEFAULT_PADDING: f32 = 16.0;

/// Build the watermark layer placed over decorated content
pub fn watermark_label(text: &str) -> Element {
    Element::text(text)
        .font(Font::Caption)
        .foreground(css::WHITE)
        .padding(EdgeInsets::all(5.0))
        .background(css::BLACK)
}

pub(crate) fn register_builtins(registry: &mut ModifierRegistry) -> Result<()> {
    registry.define_modifier("prominent_title", |element, _| {
        Ok(element.font(Font::LargeTitle).foreground(css::BLUE))
    })?;

    registry.define_modifier("watermark", |element, params| {
        let text = params.text("watermark", "text")?;
        Ok(element.overlay(watermark_label(text), Alignment::BottomTrailing))
    })?;

    registry.define_modifier("capsule_label", |element, _| {
        Ok(element
            .font(Font::LargeTitle)
            .foreground(css::WHITE)
            .padding(EdgeInsets::all(DEFAULT_PADDING))
            .background(css::BLUE)
            .clip_shape(ShapeKind::Capsule))
    })?;

    registry.define_modifier("title_card", |element, _| {
        Ok(element
            .font(Font::LargeTitle)
            .foreground(css::WHITE)
            .padding(EdgeInsets::all(DEFAULT_PADDING))
            .background(css::BLUE)
            .corner_radius(10.0))
    })?;

    registry.define_modifier("text_color_toggle", |element, params| {
        let use_red = params.bool("text_color_toggle", "use_red")?;
        Ok(element.foreground(if use_red { css::RED } else { css::BLUE }))
    })?;

    registry.define_modifier("padding", |element, params| {
        let amount = params.number_or("padding", "amount", DEFAULT_PADDING)?;
        Ok(element.padding(EdgeInsets::all(amount)))
    })?;

    registry.define_modifier("blur", |element, params| {
        Ok(element.blur(params.number("blur", "radius")?))
    })?;

    registry.define_modifier("font_size", |element, params| {
        Ok(element.font_size(params.number("font_size", "size")?))
    })?;

    registry.define_modifier("foreground", |element, params| {
        Ok(element.foreground(params.color("foreground", "color")?))
    })?;

    Ok(())
}
