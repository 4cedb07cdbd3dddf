use std::fmt;
use std::str::FromStr;

/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Look up a CSS color keyword (case-insensitive), plus the toolkit-style
    /// `"clear"` for fully transparent.
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "aqua" | "cyan" => css::AQUA,
            "black" => css::BLACK,
            "blue" => css::BLUE,
            "fuchsia" | "magenta" => css::FUCHSIA,
            "gray" | "grey" => css::GRAY,
            "green" => css::GREEN,
            "lime" => css::LIME,
            "maroon" => css::MAROON,
            "navy" => css::NAVY,
            "olive" => css::OLIVE,
            "orange" => css::ORANGE,
            "purple" => css::PURPLE,
            "red" => css::RED,
            "silver" => css::SILVER,
            "teal" => css::TEAL,
            "white" => css::WHITE,
            "yellow" => css::YELLOW,
            "clear" | "transparent" => Color::transparent(),
            _ => return None,
        };
        Some(color)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            6 => Some(Color::srgba(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Color::srgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }
}

/// Error returned when a color string is neither a known name nor a hex literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized color '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Color::named(s)
            .or_else(|| Color::from_hex(s))
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const AQUA: Color = Color::srgba(0, 255, 255, 255);
    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const BLUE: Color = Color::srgba(0, 0, 255, 255);
    pub const FUCHSIA: Color = Color::srgba(255, 0, 255, 255);
    pub const GRAY: Color = Color::srgba(128, 128, 128, 255);
    pub const GREEN: Color = Color::srgba(0, 128, 0, 255);
    pub const LIME: Color = Color::srgba(0, 255, 0, 255);
    pub const MAROON: Color = Color::srgba(128, 0, 0, 255);
    pub const NAVY: Color = Color::srgba(0, 0, 128, 255);
    pub const OLIVE: Color = Color::srgba(128, 128, 0, 255);
    pub const ORANGE: Color = Color::srgba(255, 165, 0, 255);
    pub const PURPLE: Color = Color::srgba(128, 0, 128, 255);
    pub const RED: Color = Color::srgba(255, 0, 0, 255);
    pub const SILVER: Color = Color::srgba(192, 192, 192, 255);
    pub const TEAL: Color = Color::srgba(0, 128, 128, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
    pub const YELLOW: Color = Color::srgba(255, 255, 0, 255);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_is_case_insensitive() {
        assert_eq!(Color::named("Red"), Some(css::RED));
        assert_eq!(Color::named("BLUE"), Some(css::BLUE));
        assert_eq!(Color::named("chartreuse-ish"), None);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(css::RED));
        assert_eq!(
            Color::from_hex("#00000080").map(|c| c.a),
            Some(128.0 / 255.0)
        );
        assert_eq!(Color::from_hex("ff0000"), None);
        assert_eq!(Color::from_hex("#ff00"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#+f+f+f"), None);
        assert!("#+f+f+f".parse::<Color>().is_err());
    }

    #[test]
    fn test_from_str_prefers_names_then_hex() {
        assert_eq!("white".parse::<Color>(), Ok(css::WHITE));
        assert_eq!(" #0000ff ".parse::<Color>(), Ok(css::BLUE));
        assert!("nope".parse::<Color>().is_err());
    }
}
