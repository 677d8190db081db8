//! Ellipse regions and the selection overlay.
//!
//! [`RegionShape`] paints one translucent ellipse on the
//! [`Region`](RenderLayer::Region) layer. [`SelectionOutline`] paints the
//! dashed bounding box and resize handle shown around the selected region on
//! the [`Selection`](RenderLayer::Selection) layer, above every fill.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Side length of the square resize handle.
const HANDLE_SIZE: f32 = 8.0;

/// A filled, outlined ellipse centered on its render position.
#[derive(Debug, Clone)]
pub struct RegionShape {
    radius_x: f32,
    radius_y: f32,
    fill: Option<Color>,
    stroke: StrokeDefinition,
}

impl RegionShape {
    pub fn new(radius_x: f32, radius_y: f32) -> Self {
        Self {
            radius_x,
            radius_y,
            fill: None,
            stroke: StrokeDefinition::default(),
        }
    }

    /// Sets the fill color. `None` renders an unfilled outline.
    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }
}

impl Drawable for RegionShape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", self.radius_x)
            .set("ry", self.radius_y)
            .set("fill", "none");

        if let Some(fill) = &self.fill {
            ellipse = ellipse
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha());
        }

        let ellipse = apply_stroke!(ellipse, &self.stroke);
        output.add_to_layer(RenderLayer::Region, Box::new(ellipse));
        output
    }
}

/// Dashed box around a selected region, with a resize handle on its
/// bottom-right corner.
#[derive(Debug, Clone)]
pub struct SelectionOutline {
    size: Size,
    stroke: StrokeDefinition,
}

impl SelectionOutline {
    /// Creates an outline for an element of `size`, using a dashed default stroke.
    pub fn new(size: Size, color: Color) -> Self {
        Self {
            size,
            stroke: StrokeDefinition::dashed(color, 1.5),
        }
    }

    /// Center of the resize handle for an outline rendered at `position`.
    pub fn handle_center(&self, position: Point) -> Point {
        position.to_bounds(self.size).max_point()
    }
}

impl Drawable for SelectionOutline {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.to_bounds(self.size);

        let outline = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", "none");
        let outline = apply_stroke!(outline, &self.stroke);
        output.add_to_layer(RenderLayer::Selection, Box::new(outline));

        let handle_center = self.handle_center(position);
        let handle = svg_element::Rectangle::new()
            .set("x", handle_center.x() - HANDLE_SIZE / 2.0)
            .set("y", handle_center.y() - HANDLE_SIZE / 2.0)
            .set("width", HANDLE_SIZE)
            .set("height", HANDLE_SIZE)
            .set("fill", self.stroke.color().to_string())
            .set("data-role", "resize-handle");
        output.add_to_layer(RenderLayer::Selection, Box::new(handle));

        output
    }
}
