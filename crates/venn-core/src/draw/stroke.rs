//! Stroke definitions for outlines, grid lines and selection markers.
//!
//! # Overview
//!
//! - [`StrokeDefinition`]: color, width and dash pattern of a line
//! - [`StrokeStyle`]: the dash pattern itself
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to any SVG element
//!
//! ```
//! use venn_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("steelblue").unwrap(), 1.5);
//! let rect = svg_element::Rectangle::new().set("width", 10).set("height", 10);
//! let rect = venn_core::apply_stroke!(rect, &stroke);
//! ```

use crate::color::Color;

/// Dash pattern of a stroke.
///
/// - `Solid`: No dasharray attribute
/// - `Dashed`: "5,5"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Creates a dashed stroke with the given color and width.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Dashed,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width and, for non-solid styles, the dash pattern.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
