use serde::Deserialize;
use trellis_macros::WithBuilders;

/// Semantic font, sized the way a host toolkit sizes its text styles
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Font {
    LargeTitle,
    Title,
    Headline,
    Body,
    Caption,
    /// Explicit point size
    System { size: f32 },
}

impl Font {
    /// Point size this font renders at when no explicit size overrides it
    pub fn point_size(&self) -> f32 {
        match self {
            Font::LargeTitle => 34.0,
            Font::Title => 28.0,
            Font::Headline => 17.0,
            Font::Body => 17.0,
            Font::Caption => 12.0,
            Font::System { size } => *size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::Body
    }
}

/// Font weight for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    pub fn to_weight(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::Regular
    }
}

/// Payload of a text element.
///
/// Only what the text *is*; how it looks (font, color) comes from decorations,
/// so the same content can be restyled by any chain of modifiers.
#[derive(Debug, Clone, PartialEq, Default, WithBuilders)]
pub struct TextContent {
    /// The text to display
    #[with_builders(into)]
    pub text: String,
    /// Maximum number of lines, `None` for unlimited
    pub line_limit: Option<u32>,
    /// Render the text with a strikethrough
    pub strikethrough: bool,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
