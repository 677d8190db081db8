//! Drawable primitives for the diagram canvas.
//!
//! Every drawable implements [`Drawable`]: it renders itself, centered on a
//! position, into a [`LayeredOutput`] so that the exporter can stack fills,
//! overlays and labels in a fixed z-order.

mod layer;
mod positioned;
mod region;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use positioned::PositionedDrawable;
pub use region::{RegionShape, SelectionOutline};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::Point;

pub trait Drawable: std::fmt::Debug {
    /// Renders the element centered on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
