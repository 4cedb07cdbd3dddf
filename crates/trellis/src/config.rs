//! Style sheets: named style functions declared in TOML.
//!
//! ```toml
//! [[style]]
//! name = "badge"
//! decorations = [
//!     { property = "font", value = "headline" },
//!     { property = "padding", value = 8 },
//!     { property = "background", value = "#1e1e2e" },
//!     { property = "foreground", value = "white", scope = "local" },
//!     { property = "clip_shape", value = "capsule" },
//!     { property = "overlay_text", value = { text = "NEW", alignment = "top_trailing" } },
//! ]
//! ```
//!
//! Each `[[style]]` becomes one style function that appends its decorations
//! in the order written.

use glam::Vec2;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::color::Color;
use crate::decoration::{Decoration, Property, Scope};
use crate::element::Element;
use crate::error::{Result, StyleError};
use crate::geometry::{Alignment, EdgeInsets, Frame, ShapeKind};
use crate::registry::ModifierRegistry;
use crate::text::{Font, FontWeight};

/// A parsed style sheet
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSheet {
    #[serde(rename = "style", default)]
    pub styles: Vec<StyleDef>,
}

/// One named style in a sheet
#[derive(Debug, Clone, Deserialize)]
pub struct StyleDef {
    pub name: String,
    #[serde(default)]
    pub decorations: Vec<DecorationSpec>,
}

/// A decoration as written in a sheet; decoded by [`DecorationSpec::to_decoration`]
#[derive(Debug, Clone, Deserialize)]
pub struct DecorationSpec {
    pub property: String,
    pub value: toml::Value,
    #[serde(default)]
    pub scope: Option<Scope>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaddingSpec {
    Uniform(f32),
    Edges(EdgeInsets),
}

#[derive(Deserialize)]
struct OverlayTextSpec {
    text: String,
    #[serde(default)]
    alignment: Alignment,
}

impl StyleSheet {
    /// Parse a sheet from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|err| StyleError::Config(err.to_string()))
    }

    /// Define one style function per entry in `registry`.
    ///
    /// Every entry is decoded before anything is registered, so a bad value
    /// leaves the registry untouched. A name that is already registered
    /// fails with [`StyleError::DuplicateName`].
    pub fn register_into(&self, registry: &mut ModifierRegistry) -> Result<()> {
        let decoded = self
            .styles
            .iter()
            .map(|style| Ok((style.name.clone(), style.to_decorations()?)))
            .collect::<Result<Vec<_>>>()?;

        for (name, decorations) in decoded {
            registry.define_style(name, decorations)?;
        }
        log::debug!("registered {} styles from style sheet", self.styles.len());
        Ok(())
    }
}

impl StyleDef {
    pub fn to_decorations(&self) -> Result<Vec<Decoration>> {
        self.decorations
            .iter()
            .map(|spec| {
                spec.to_decoration().map_err(|err| match err {
                    StyleError::Config(msg) => {
                        StyleError::Config(format!("style '{}': {}", self.name, msg))
                    }
                    other => other,
                })
            })
            .collect()
    }
}

impl DecorationSpec {
    pub fn to_decoration(&self) -> Result<Decoration> {
        let property = match self.property.as_str() {
            "font" => Property::Font(self.decode::<Font>()?),
            "font_size" => Property::FontSize(self.decode()?),
            "font_weight" => Property::FontWeight(self.decode::<FontWeight>()?),
            "foreground" => Property::ForegroundColor(self.color()?),
            "background" => Property::Background(self.color()?),
            "clip_shape" => Property::ClipShape(self.decode::<ShapeKind>()?),
            "corner_radius" => Property::ClipShape(ShapeKind::RoundedRectangle {
                corner_radius: self.decode()?,
            }),
            "frame" => Property::Frame(self.decode::<Frame>()?),
            "opacity" => Property::Opacity(self.decode::<f32>()?.clamp(0.0, 1.0)),
            "padding" => Property::Padding(match self.decode::<PaddingSpec>()? {
                PaddingSpec::Uniform(amount) => EdgeInsets::all(amount),
                PaddingSpec::Edges(edges) => edges,
            }),
            "blur" => Property::Blur(self.decode()?),
            "offset" => {
                let [x, y] = self.decode::<[f32; 2]>()?;
                Property::Offset(Vec2::new(x, y))
            }
            "overlay_text" => {
                let spec = self.decode::<OverlayTextSpec>()?;
                Property::Overlay(crate::decoration::Overlay::new(
                    Element::text(spec.text),
                    spec.alignment,
                ))
            }
            other => {
                return Err(StyleError::Config(format!("unknown property '{other}'")));
            }
        };

        let decoration = Decoration::new(property);
        match self.scope {
            Some(Scope::Cascading) if !decoration.property().can_cascade() => {
                Err(StyleError::Config(format!(
                    "'{}' cannot cascade",
                    self.property
                )))
            }
            Some(scope) => Ok(decoration.with_scope(scope)),
            None => Ok(decoration),
        }
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        self.value.clone().try_into().map_err(|err| {
            StyleError::Config(format!("bad value for '{}': {}", self.property, err))
        })
    }

    fn color(&self) -> Result<Color> {
        let text: String = self.decode()?;
        text.parse().map_err(|err| {
            StyleError::Config(format!("bad value for '{}': {}", self.property, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::css;
    use crate::render::render;

    const SHEET: &str = r##"
        [[style]]
        name = "badge"
        decorations = [
            { property = "font", value = "headline" },
            { property = "padding", value = 8 },
            { property = "padding", value = { top = 2, bottom = 2 } },
            { property = "background", value = "#000000" },
            { property = "foreground", value = "white", scope = "local" },
            { property = "clip_shape", value = "capsule" },
            { property = "overlay_text", value = { text = "NEW", alignment = "top_trailing" } },
        ]

        [[style]]
        name = "soft"
        decorations = [
            { property = "blur", value = 1.5 },
            { property = "opacity", value = 0.5 },
            { property = "offset", value = [2, -3] },
            { property = "frame", value = { width = 120 } },
            { property = "corner_radius", value = 10 },
        ]
    "##;

    #[test]
    fn test_parse_and_register() {
        let sheet = StyleSheet::from_toml_str(SHEET).unwrap();
        assert_eq!(sheet.styles.len(), 2);

        let mut registry = ModifierRegistry::new();
        sheet.register_into(&mut registry).unwrap();
        assert_eq!(registry.names(), ["badge", "soft"]);

        let tree = render(&registry.compose(&Element::text("x"), &["badge"]).unwrap());
        assert_eq!(tree.style.font, Some(Font::Headline));
        assert_eq!(
            tree.style.padding,
            EdgeInsets {
                top: 10.0,
                leading: 8.0,
                bottom: 10.0,
                trailing: 8.0
            }
        );
        assert_eq!(tree.style.background, Some(css::BLACK));
        assert_eq!(tree.style.clip_shape, Some(ShapeKind::Capsule));
        assert_eq!(tree.overlays.len(), 1);
        assert_eq!(tree.overlays[0].alignment, Alignment::TopTrailing);
        assert_eq!(tree.overlays[0].node.text(), Some("NEW"));
        // Local foreground does not reach the overlay
        assert_eq!(tree.overlays[0].node.style.foreground, None);
    }

    #[test]
    fn test_numeric_properties() {
        let sheet = StyleSheet::from_toml_str(SHEET).unwrap();
        let decorations = sheet.styles[1].to_decorations().unwrap();
        let style = crate::style::ResolvedStyle::from_decorations(&decorations);
        assert_eq!(style.blur, 1.5);
        assert_eq!(style.opacity, Some(0.5));
        assert_eq!(style.offset, Vec2::new(2.0, -3.0));
        assert_eq!(style.frame_width, Some(120.0));
        assert_eq!(style.frame_height, None);
        assert_eq!(
            style.clip_shape,
            Some(ShapeKind::RoundedRectangle {
                corner_radius: 10.0
            })
        );
    }

    #[test]
    fn test_unknown_property_names_style() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            [[style]]
            name = "broken"
            decorations = [{ property = "sparkle", value = 1 }]
            "#,
        )
        .unwrap();
        let err = sheet.register_into(&mut ModifierRegistry::new()).unwrap_err();
        match err {
            StyleError::Config(msg) => {
                assert!(msg.contains("broken"));
                assert!(msg.contains("sparkle"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_value_leaves_registry_untouched() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            [[style]]
            name = "fine"
            decorations = [{ property = "blur", value = 1 }]

            [[style]]
            name = "bad_color"
            decorations = [{ property = "foreground", value = "not-a-color" }]
            "#,
        )
        .unwrap();
        let mut registry = ModifierRegistry::new();
        assert!(sheet.register_into(&mut registry).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collision_with_existing_name() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            [[style]]
            name = "watermark"
            "#,
        )
        .unwrap();
        let mut registry = ModifierRegistry::with_builtins().unwrap();
        assert_eq!(
            sheet.register_into(&mut registry),
            Err(StyleError::DuplicateName {
                name: "watermark".into()
            })
        );
    }

    #[test]
    fn test_cascading_overlay_rejected() {
        let sheet = StyleSheet::from_toml_str(
            r#"
            [[style]]
            name = "stamp"
            decorations = [
                { property = "overlay_text", value = { text = "DRAFT" }, scope = "cascading" },
            ]
            "#,
        )
        .unwrap();
        let mut registry = ModifierRegistry::new();
        match sheet.register_into(&mut registry) {
            Err(StyleError::Config(msg)) => {
                assert!(msg.contains("stamp"));
                assert!(msg.contains("overlay_text"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            StyleSheet::from_toml_str("[[style]\nname ="),
            Err(StyleError::Config(_))
        ));
    }
}
