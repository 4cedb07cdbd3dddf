use std::ops::Add;

use serde::Deserialize;

/// Insets applied to each edge of a node (top, leading, bottom, trailing)
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f32,
    #[serde(default)]
    pub leading: f32,
    #[serde(default)]
    pub bottom: f32,
    #[serde(default)]
    pub trailing: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::all(0.0);

    /// Same value on all four edges
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            leading: value,
            bottom: value,
            trailing: value,
        }
    }

    /// Horizontal and vertical insets
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            leading: horizontal,
            bottom: vertical,
            trailing: horizontal,
        }
    }

    pub const fn horizontal(value: f32) -> Self {
        Self::symmetric(value, 0.0)
    }

    pub const fn vertical(value: f32) -> Self {
        Self::symmetric(0.0, value)
    }
}

impl Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(self, rhs: EdgeInsets) -> EdgeInsets {
        EdgeInsets {
            top: self.top + rhs.top,
            leading: self.leading + rhs.leading,
            bottom: self.bottom + rhs.bottom,
            trailing: self.trailing + rhs.trailing,
        }
    }
}

/// Outline used for filled shapes and clip masks
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle { corner_radius: f32 },
    /// Fully rounded short edges
    Capsule,
    Circle,
}

/// Where an overlay is placed relative to the content it decorates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    TopLeading,
    Top,
    TopTrailing,
    Leading,
    #[default]
    Center,
    Trailing,
    BottomLeading,
    Bottom,
    BottomTrailing,
}

impl Alignment {
    /// Fractional anchor within the decorated content (0.0 = leading/top, 1.0 = trailing/bottom)
    pub const fn anchor(self) -> (f32, f32) {
        match self {
            Alignment::TopLeading => (0.0, 0.0),
            Alignment::Top => (0.5, 0.0),
            Alignment::TopTrailing => (1.0, 0.0),
            Alignment::Leading => (0.0, 0.5),
            Alignment::Center => (0.5, 0.5),
            Alignment::Trailing => (1.0, 0.5),
            Alignment::BottomLeading => (0.0, 1.0),
            Alignment::Bottom => (0.5, 1.0),
            Alignment::BottomTrailing => (1.0, 1.0),
        }
    }
}

/// Arrangement of a group's children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
    /// Children overlap in z order
    Stack,
}

/// Proposed frame; `None` on an axis leaves it to the host's layout
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
}

impl Frame {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    pub const fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub const fn height(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }
}
