//! The labeled elliptical region record.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
    scale::{RelativeValue, Stage},
};

/// Smallest radius an ellipse may have, in pixels.
pub const MIN_RADIUS: f32 = 5.0;

/// Floors a requested radius at [`MIN_RADIUS`].
///
/// Non-finite requests degrade to the floor as well, so a region always stays
/// visible and selectable.
///
/// ```
/// # use venn_core::ellipse::{clamp_radius, MIN_RADIUS};
/// assert_eq!(clamp_radius(80.0), 80.0);
/// assert_eq!(clamp_radius(0.0), MIN_RADIUS);
/// assert_eq!(clamp_radius(-3.0), MIN_RADIUS);
/// assert_eq!(clamp_radius(f32::NAN), MIN_RADIUS);
/// ```
pub fn clamp_radius(value: f32) -> f32 {
    if value.is_finite() {
        value.max(MIN_RADIUS)
    } else {
        MIN_RADIUS
    }
}

/// One labeled region on the canvas.
///
/// Geometry (`center_x`, `center_y`, `radius_x`, `radius_y`) is authoritative.
/// The qualitative fields are a cached reading of that geometry on the two
/// axes and are kept current by the model that owns the ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ellipse {
    id: Id,
    center_x: f32,
    center_y: f32,
    radius_x: f32,
    radius_y: f32,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_value: Option<RelativeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stage_start: Option<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stage_end: Option<Stage>,
}

impl Ellipse {
    /// Creates an unlabeled ellipse. Radii are floored at [`MIN_RADIUS`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use venn_core::{ellipse::Ellipse, geometry::Point};
    /// let ellipse = Ellipse::new("intent", Point::new(450.0, 450.0), 150.0, 80.0)
    ///     .with_label("Clear Strategic Intent");
    ///
    /// assert!(ellipse.contains(Point::new(450.0, 450.0)));
    /// assert!(!ellipse.contains(Point::new(450.0, 531.0)));
    /// ```
    pub fn new(id: impl Into<Id>, center: Point, radius_x: f32, radius_y: f32) -> Self {
        Self {
            id: id.into(),
            center_x: center.x(),
            center_y: center.y(),
            radius_x: clamp_radius(radius_x),
            radius_y: clamp_radius(radius_y),
            label: String::new(),
            fill_style: None,
            relative_value: None,
            stage_start: None,
            stage_end: None,
        }
    }

    /// Sets the display label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the opaque fill token (builder style).
    pub fn with_fill_style(mut self, fill_style: impl Into<String>) -> Self {
        self.fill_style = Some(fill_style.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    pub fn center_x(&self) -> f32 {
        self.center_x
    }

    pub fn center_y(&self) -> f32 {
        self.center_y
    }

    pub fn radius_x(&self) -> f32 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f32 {
        self.radius_y
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The label on a single line, as used in lists and reports.
    pub fn flat_label(&self) -> String {
        self.label.split('\n').collect::<Vec<_>>().join(" ")
    }

    pub fn fill_style(&self) -> Option<&str> {
        self.fill_style.as_deref()
    }

    pub fn relative_value(&self) -> Option<RelativeValue> {
        self.relative_value
    }

    pub fn stage_start(&self) -> Option<Stage> {
        self.stage_start
    }

    pub fn stage_end(&self) -> Option<Stage> {
        self.stage_end
    }

    /// Overwrites the center. No clamping to any canvas is applied.
    pub fn set_center(&mut self, center: Point) {
        self.center_x = center.x();
        self.center_y = center.y();
    }

    /// Overwrites both radii, flooring each at [`MIN_RADIUS`].
    pub fn set_radii(&mut self, radius_x: f32, radius_y: f32) {
        self.radius_x = clamp_radius(radius_x);
        self.radius_y = clamp_radius(radius_y);
        if self.radius_x != radius_x || self.radius_y != radius_y {
            debug!(id:% = self.id, radius_x, radius_y; "Radii floored");
        }
    }

    /// Overwrites the vertical extent only.
    pub fn set_vertical(&mut self, center_y: f32, radius_y: f32) {
        self.center_y = center_y;
        self.radius_y = clamp_radius(radius_y);
    }

    pub fn set_relative_value(&mut self, value: Option<RelativeValue>) {
        self.relative_value = value;
    }

    /// Stores a stage span as given. The owning model orders the pair by
    /// pixel value before calling this.
    pub fn set_stage_span(&mut self, start: Option<Stage>, end: Option<Stage>) {
        self.stage_start = start;
        self.stage_end = end;
    }

    /// Pixel Y of the top edge.
    pub fn top(&self) -> f32 {
        self.center_y - self.radius_y
    }

    /// Pixel Y of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.center_y + self.radius_y
    }

    /// Bounding box of the ellipse.
    pub fn bounds(&self) -> Bounds {
        self.center()
            .to_bounds(Size::new(self.radius_x * 2.0, self.radius_y * 2.0))
    }

    /// Returns true if the ellipse has usable geometry.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius_x.is_finite()
            && self.radius_y.is_finite()
            && self.radius_x > 0.0
            && self.radius_y > 0.0
            && self.center().is_finite())
    }

    /// Tests `((x-cx)²/rx²) + ((y-cy)²/ry²) ≤ 1`.
    ///
    /// Degenerate ellipses contain no points.
    pub fn contains(&self, point: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }
        let dx = point.x() - self.center_x;
        let dy = point.y() - self.center_y;
        (dx * dx) / (self.radius_x * self.radius_x) + (dy * dy) / (self.radius_y * self.radius_y)
            <= 1.0
    }
}
