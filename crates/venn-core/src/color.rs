//! Color handling for rendered diagrams.
//!
//! The core model keeps an ellipse's fill as an opaque token; only the
//! drawing layer turns it into a [`Color`], which wraps `DynamicColor` from
//! the color crate and accepts any CSS color string.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgba(192, 80, 77, 0.4)"` or `"steelblue"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use venn_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let translucent = Color::new("rgba(91, 155, 213, 0.4)").unwrap();
    /// assert!((translucent.alpha() - 0.4).abs() < 0.001);
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}
