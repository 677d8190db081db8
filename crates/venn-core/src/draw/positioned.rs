//! Provides `PositionedDrawable`, a drawable bound to a canvas position.

use crate::{
    draw::{Drawable, LayeredOutput},
    geometry::Point,
};

/// A drawable object together with the center point it is drawn at.
#[derive(Debug, Clone)]
pub struct PositionedDrawable<D: Drawable> {
    drawable: D,
    position: Point,
}

impl<D: Drawable> PositionedDrawable<D> {
    /// Wraps `drawable` at the origin.
    pub fn new(drawable: D) -> Self {
        Self {
            drawable,
            position: Point::default(),
        }
    }

    /// Set the position for this drawable (builder style).
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Renders the inner drawable at the stored position.
    pub fn render_to_layers(&self) -> LayeredOutput {
        self.drawable.render_to_layers(self.position)
    }
}
