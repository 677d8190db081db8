//! SVG rendering of the canvas.
//!
//! Layers, bottom to top: background, axis grid with tick labels, region
//! fills, the selection outline, region labels.

use log::{debug, warn};
use svg::{self, node::element as svg_element};

use venn_core::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, LayeredOutput, PositionedDrawable, RegionShape, RenderLayer, SelectionOutline,
        StrokeDefinition, Text, TextDefinition,
    },
    ellipse::Ellipse,
    geometry::{Point, Size},
    scale::{RelativeValue, Stage},
};

use super::{Error, Exporter};
use crate::{config::AppConfig, snapshot::DiagramSnapshot};

/// Spacing and count of the vertical grid lines.
const X_GRID_SPACING: f32 = 100.0;
const X_GRID_LINES: usize = 6;

/// Spacing and count of the horizontal grid lines, counted up from the bottom edge.
const STAGE_GRID_SPACING: f32 = 60.0;
const STAGE_GRID_LINES: usize = 11;

/// Tick label offsets from the grid line or anchor they annotate.
const X_TICK_OFFSET: f32 = 5.0;
const X_TICK_BASELINE: f32 = 20.0;
const STAGE_TICK_MARGIN: f32 = 5.0;
const STAGE_TICK_OFFSET: f32 = 10.0;

/// SVG exporter with resolved styling.
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    x_grid: StrokeDefinition,
    stage_grid: StrokeDefinition,
    selection_color: Color,
    label_text: TextDefinition,
    tick_font_size: u16,
    x_anchors: [f32; 3],
    stage_anchors: [f32; 5],
}

impl Svg {
    /// Resolves the style and axis anchors of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a configured color cannot be parsed.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        let style = config.style();
        let background = style.background_color().map_err(Error::Render)?;
        let x_grid = StrokeDefinition::solid(style.x_grid_color().map_err(Error::Render)?, 1.0);
        let stage_grid =
            StrokeDefinition::solid(style.stage_grid_color().map_err(Error::Render)?, 1.0);
        let selection_color = style.selection_color().map_err(Error::Render)?;

        let mut label_text = TextDefinition::new();
        label_text.set_font_size(style.label_font_size());

        Ok(Self {
            background,
            x_grid,
            stage_grid,
            selection_color,
            label_text,
            tick_font_size: style.tick_font_size(),
            x_anchors: config.axes().x().anchors(),
            stage_anchors: config.axes().stage().anchors(),
        })
    }

    /// Renders `snapshot` to an SVG document sized to its canvas.
    pub fn render_document(&self, snapshot: &DiagramSnapshot) -> svg::Document {
        let canvas = snapshot.canvas();

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(canvas));
        output.merge(self.render_grid(canvas));

        for ellipse in snapshot.ellipses() {
            output.merge(self.render_region(ellipse));
        }

        if let Some(selected) = snapshot.selected() {
            let outline = SelectionOutline::new(selected.bounds().to_size(), self.selection_color);
            let outline = PositionedDrawable::new(outline).with_position(selected.center());
            output.merge(outline.render_to_layers());
        }

        let mut doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        for node in output.render() {
            doc = doc.add(node);
        }

        debug!(
            width = canvas.width(),
            height = canvas.height(),
            ellipses = snapshot.ellipses().len();
            "SVG document rendered"
        );
        doc
    }

    fn render_background(&self, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if let Some(color) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", canvas.width())
                .set("height", canvas.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(rect));
        }
        output
    }

    fn tick_label(&self, content: &str, position: Point) -> svg_element::Text {
        svg_element::Text::new(content)
            .set("x", position.x())
            .set("y", position.y())
            .set("font-family", "Arial")
            .set("font-size", self.tick_font_size)
    }

    /// Vertical relative-value lines and horizontal stage lines, with labels.
    fn render_grid(&self, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for index in 0..X_GRID_LINES {
            let x = X_GRID_SPACING + index as f32 * X_GRID_SPACING;
            let line = svg_element::Line::new()
                .set("x1", x)
                .set("y1", 0)
                .set("x2", x)
                .set("y2", canvas.height());
            output.add_to_layer(RenderLayer::Grid, Box::new(apply_stroke!(line, &self.x_grid)));

            // Grid lines between anchors get a plain tick mark
            if !self.x_anchors.iter().any(|anchor| (anchor - x).abs() < 0.5) {
                let tick = self.tick_label(
                    "|",
                    Point::new(x - X_TICK_OFFSET, canvas.height() - X_TICK_BASELINE),
                );
                output.add_to_layer(RenderLayer::Grid, Box::new(tick));
            }
        }

        for (value, x) in RelativeValue::ALL.iter().zip(self.x_anchors) {
            let tick = self.tick_label(
                value.tick_label(),
                Point::new(x - X_TICK_OFFSET, canvas.height() - X_TICK_BASELINE),
            );
            output.add_to_layer(RenderLayer::Grid, Box::new(tick));
        }

        for index in 0..STAGE_GRID_LINES {
            let y = canvas.height() - index as f32 * STAGE_GRID_SPACING;
            if y < 0.0 {
                break;
            }
            let line = svg_element::Line::new()
                .set("x1", 0)
                .set("y1", y)
                .set("x2", canvas.width())
                .set("y2", y);
            output.add_to_layer(
                RenderLayer::Grid,
                Box::new(apply_stroke!(line, &self.stage_grid)),
            );
        }

        for (stage, y) in Stage::ALL.iter().zip(self.stage_anchors) {
            let tick = self.tick_label(
                &stage.to_string(),
                Point::new(STAGE_TICK_MARGIN, y - STAGE_TICK_OFFSET),
            );
            output.add_to_layer(RenderLayer::Grid, Box::new(tick));
        }

        output
    }

    fn render_region(&self, ellipse: &Ellipse) -> LayeredOutput {
        let fill = ellipse
            .fill_style()
            .and_then(|style| match Color::new(style) {
                Ok(color) => Some(color),
                Err(err) => {
                    warn!(id:% = ellipse.id(), err:% = err; "Unusable fill, rendering outline only");
                    None
                }
            });

        let shape = RegionShape::new(ellipse.radius_x(), ellipse.radius_y()).with_fill(fill);
        let mut output = PositionedDrawable::new(shape)
            .with_position(ellipse.center())
            .render_to_layers();

        let label = ellipse.label();
        if !label.is_empty() {
            output.merge(Text::new(&self.label_text, label).render_to_layers(ellipse.center()));
        }
        output
    }
}

impl Exporter for Svg {
    fn export_snapshot(&self, snapshot: &DiagramSnapshot) -> Result<String, Error> {
        Ok(self.render_document(snapshot).to_string())
    }
}
