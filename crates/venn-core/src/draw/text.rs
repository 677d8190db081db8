//! Text labels drawn on the canvas.
//!
//! - [`TextDefinition`] - reusable font configuration
//! - [`Text`] - content paired with a definition, ready to render
//!
//! Labels are centered on their position. Content containing `\n` renders as
//! one `<tspan>` per line so that multi-line region labels stay centered as a
//! block.
//!
//! ```
//! # use venn_core::draw::{Drawable, Text, TextDefinition};
//! # use venn_core::geometry::Point;
//! let style = TextDefinition::new();
//! let text = Text::new(&style, "Clear Strategic\nIntent");
//!
//! assert!(!text.render_to_layers(Point::new(450.0, 450.0)).is_empty());
//! ```

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Line height as a fraction of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Font settings shared by any number of [`Text`] values.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `14` |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
}

impl TextDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    fn line_height(&self) -> f32 {
        self.font_size as f32 * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 14,
        }
    }
}

/// A label with its styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let lines: Vec<&str> = self.content.lines().collect();
        if lines.is_empty() {
            return output;
        }

        let line_height = self.definition.line_height();
        // First baseline sits so that the block is vertically centered
        let first_dy = -(lines.len() as f32 - 1.0) * line_height / 2.0;

        let mut rendered = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        for (index, line) in lines.into_iter().enumerate() {
            let dy = if index == 0 { first_dy } else { line_height };
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered = rendered.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }
}
