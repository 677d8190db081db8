//! Conversion between qualitative axis values and pixel coordinates.
//!
//! Each axis has exactly one scale, shared by the selectors, the model's
//! derived fields and the SVG tick marks:
//!
//! - the X axis places `Low`, `Medium` and `High` at three anchors;
//! - the stage axis places the five stages at five strictly monotonic
//!   anchors. The default layout is inverted, with the earliest stage at the
//!   largest Y (bottom of the canvas).
//!
//! Reading a pixel back returns the nearest anchor within the axis
//! tolerance, or nothing.

use log::{debug, trace};

use venn_core::{
    ellipse::clamp_radius,
    scale::{Axis, QualitativeValue, RelativeValue, Stage},
};

use crate::{config::AxesConfig, error::VennError};

/// Index of the anchor nearest to `pixel`. Ties resolve to the earlier anchor.
fn nearest_index(anchors: &[f32], pixel: f32) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (index, anchor) in anchors.iter().enumerate() {
        let distance = (anchor - pixel).abs();
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

fn validate_axis(axis: Axis, anchors: &[f32], tolerance: f32) -> Result<(), VennError> {
    if let Some(bad) = anchors.iter().find(|a| !a.is_finite()) {
        return Err(VennError::Configuration(format!(
            "{axis} axis anchor {bad} is not a finite number"
        )));
    }

    let increasing = anchors.windows(2).all(|w| w[0] < w[1]);
    let decreasing = anchors.windows(2).all(|w| w[0] > w[1]);
    if !(increasing || decreasing) {
        return Err(VennError::Configuration(format!(
            "{axis} axis anchors {anchors:?} are not strictly monotonic"
        )));
    }

    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(VennError::Configuration(format!(
            "{axis} axis tolerance must be positive, got {tolerance}"
        )));
    }

    Ok(())
}

/// Stateless two-way mapping between axis values and pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    x_anchors: [f32; 3],
    x_tolerance: f32,
    stage_anchors: [f32; 5],
    stage_tolerance: f32,
}

impl CoordinateMapper {
    /// Builds a mapper from axis configuration.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] if an axis is not strictly
    /// monotonic, has a non-finite anchor or a non-positive tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use venn::{config::AxesConfig, mapping::CoordinateMapper};
    /// # use venn_core::scale::{RelativeValue, Stage};
    /// let mapper = CoordinateMapper::new(&AxesConfig::default()).unwrap();
    ///
    /// assert_eq!(mapper.x_pixel(RelativeValue::Medium), 400.0);
    /// assert_eq!(mapper.stage_at(590.0), Some(Stage::Intention));
    /// assert_eq!(mapper.stage_at(540.0), None);
    /// ```
    pub fn new(config: &AxesConfig) -> Result<Self, VennError> {
        let x_anchors = config.x().anchors();
        let stage_anchors = config.stage().anchors();
        validate_axis(Axis::X, &x_anchors, config.x().tolerance())?;
        validate_axis(Axis::Stage, &stage_anchors, config.stage().tolerance())?;

        debug!(x_anchors:?, stage_anchors:?; "Coordinate mapper created");
        Ok(Self {
            x_anchors,
            x_tolerance: config.x().tolerance(),
            stage_anchors,
            stage_tolerance: config.stage().tolerance(),
        })
    }

    pub fn x_pixel(&self, value: RelativeValue) -> f32 {
        self.x_anchors[value as usize]
    }

    pub fn stage_pixel(&self, stage: Stage) -> f32 {
        self.stage_anchors[stage as usize]
    }

    /// Pixel coordinate of `value` on its own axis.
    pub fn to_pixel(&self, value: QualitativeValue) -> f32 {
        match value {
            QualitativeValue::Relative(value) => self.x_pixel(value),
            QualitativeValue::Stage(stage) => self.stage_pixel(stage),
        }
    }

    /// Parses user-facing text as a value of `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] for text that names no value of
    /// the axis. Callers fall back to [`CoordinateMapper::nearest`].
    pub fn parse_value(&self, axis: Axis, text: &str) -> Result<QualitativeValue, VennError> {
        Ok(QualitativeValue::parse(axis, text)?)
    }

    pub fn parse_relative_value(&self, text: &str) -> Result<RelativeValue, VennError> {
        Ok(text.parse::<RelativeValue>()?)
    }

    pub fn parse_stage(&self, text: &str) -> Result<Stage, VennError> {
        Ok(text.parse::<Stage>()?)
    }

    /// Reads `pixel` on `axis`: the nearest anchor if it lies within the
    /// axis tolerance, else `None`.
    pub fn to_qualitative(&self, axis: Axis, pixel: f32) -> Option<QualitativeValue> {
        match axis {
            Axis::X => self.relative_value_at(pixel).map(QualitativeValue::Relative),
            Axis::Stage => self.stage_at(pixel).map(QualitativeValue::Stage),
        }
    }

    pub fn relative_value_at(&self, x: f32) -> Option<RelativeValue> {
        let index = nearest_index(&self.x_anchors, x);
        ((self.x_anchors[index] - x).abs() <= self.x_tolerance).then_some(RelativeValue::ALL[index])
    }

    pub fn stage_at(&self, y: f32) -> Option<Stage> {
        let index = nearest_index(&self.stage_anchors, y);
        ((self.stage_anchors[index] - y).abs() <= self.stage_tolerance).then_some(Stage::ALL[index])
    }

    /// The anchor nearest to `pixel` regardless of tolerance.
    pub fn nearest(&self, axis: Axis, pixel: f32) -> QualitativeValue {
        match axis {
            Axis::X => QualitativeValue::Relative(self.nearest_relative_value(pixel)),
            Axis::Stage => QualitativeValue::Stage(self.nearest_stage(pixel)),
        }
    }

    pub fn nearest_relative_value(&self, x: f32) -> RelativeValue {
        RelativeValue::ALL[nearest_index(&self.x_anchors, x)]
    }

    pub fn nearest_stage(&self, y: f32) -> Stage {
        Stage::ALL[nearest_index(&self.stage_anchors, y)]
    }

    /// Vertical geometry spanning two stages, given in either order.
    ///
    /// Returns `(center_y, radius_y)`; the radius is floored like any other.
    ///
    /// ```
    /// # use venn::{config::AxesConfig, mapping::CoordinateMapper};
    /// # use venn_core::scale::Stage;
    /// let mapper = CoordinateMapper::new(&AxesConfig::default()).unwrap();
    ///
    /// assert_eq!(mapper.stage_span(Stage::Activation, Stage::Impact), (360.0, 120.0));
    /// assert_eq!(mapper.stage_span(Stage::Impact, Stage::Activation), (360.0, 120.0));
    /// assert_eq!(mapper.stage_span(Stage::Execution, Stage::Execution).1, 5.0);
    /// ```
    pub fn stage_span(&self, a: Stage, b: Stage) -> (f32, f32) {
        let (pa, pb) = (self.stage_pixel(a), self.stage_pixel(b));
        let top = pa.min(pb);
        let bottom = pa.max(pb);
        let center_y = (top + bottom) / 2.0;
        let radius_y = clamp_radius((bottom - top) / 2.0);
        trace!(a:% = a, b:% = b, center_y, radius_y; "Stage span mapped");
        (center_y, radius_y)
    }

    /// Orders two stages by pixel value, smaller first.
    ///
    /// ```
    /// # use venn::{config::AxesConfig, mapping::CoordinateMapper};
    /// # use venn_core::scale::Stage;
    /// let mapper = CoordinateMapper::new(&AxesConfig::default()).unwrap();
    ///
    /// // Later stages sit higher on the default canvas
    /// assert_eq!(
    ///     mapper.pixel_ordered(Stage::Intention, Stage::Impact),
    ///     (Stage::Impact, Stage::Intention)
    /// );
    /// ```
    pub fn pixel_ordered(&self, a: Stage, b: Stage) -> (Stage, Stage) {
        if self.stage_pixel(a) <= self.stage_pixel(b) {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Reads a vertical extent back as a `(start, end)` stage pair, start at
    /// the smaller pixel value.
    ///
    /// Either edge is `None` when it lies outside every anchor's tolerance.
    pub fn stages_between(&self, top: f32, bottom: f32) -> (Option<Stage>, Option<Stage>) {
        let (top, bottom) = (top.min(bottom), top.max(bottom));
        (self.stage_at(top), self.stage_at(bottom))
    }

    pub fn x_anchors(&self) -> &[f32; 3] {
        &self.x_anchors
    }

    pub fn stage_anchors(&self) -> &[f32; 5] {
        &self.stage_anchors
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::config::{StageAxisConfig, XAxisConfig};

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(&AxesConfig::default()).unwrap()
    }

    #[test]
    fn test_default_anchors() {
        let mapper = mapper();

        assert_approx_eq!(f32, mapper.x_pixel(RelativeValue::Low), 200.0);
        assert_approx_eq!(f32, mapper.x_pixel(RelativeValue::High), 600.0);
        assert_approx_eq!(f32, mapper.stage_pixel(Stage::Intention), 600.0);
        assert_approx_eq!(f32, mapper.stage_pixel(Stage::EvalAdapt), 300.0);
        assert!(mapper.stage_pixel(Stage::Intention) > mapper.stage_pixel(Stage::Impact));
    }

    #[test]
    fn test_to_qualitative_tolerance() {
        let mapper = mapper();

        assert_eq!(
            mapper.to_qualitative(Axis::X, 445.0),
            Some(QualitativeValue::Relative(RelativeValue::Medium))
        );
        assert_eq!(
            mapper.to_qualitative(Axis::X, 450.0),
            Some(QualitativeValue::Relative(RelativeValue::Medium))
        );
        assert_eq!(mapper.to_qualitative(Axis::X, 500.0), None);
        assert_eq!(mapper.to_qualitative(Axis::Stage, f32::NAN), None);
    }

    #[test]
    fn test_tie_resolves_to_earlier_anchor() {
        let mapper = mapper();
        // 270 is exactly between Eval + Adapt (300) and Impact (240)
        assert_eq!(mapper.stage_at(270.0), Some(Stage::EvalAdapt));
        assert_eq!(mapper.nearest_relative_value(300.0), RelativeValue::Low);
    }

    #[test]
    fn test_nearest_ignores_tolerance() {
        let mapper = mapper();
        assert_eq!(
            mapper.nearest(Axis::X, 10_000.0),
            QualitativeValue::Relative(RelativeValue::High)
        );
        assert_eq!(mapper.nearest_stage(-50.0), Stage::Impact);
    }

    #[test]
    fn test_parse_value_unknown_is_configuration_error() {
        let mapper = mapper();
        assert!(matches!(
            mapper.parse_value(Axis::X, "Huge"),
            Err(VennError::Configuration(_))
        ));
        assert_eq!(
            mapper.parse_value(Axis::Stage, "eval + adapt").unwrap(),
            QualitativeValue::Stage(Stage::EvalAdapt)
        );
    }

    #[test]
    fn test_stages_between_orders_by_pixel() {
        let mapper = mapper();
        assert_eq!(
            mapper.stages_between(240.0, 480.0),
            (Some(Stage::Impact), Some(Stage::Activation))
        );
        assert_eq!(
            mapper.stages_between(480.0, 240.0),
            (Some(Stage::Impact), Some(Stage::Activation))
        );
        assert_eq!(
            mapper.stages_between(100.0, 590.0),
            (None, Some(Stage::Intention))
        );
    }

    #[test]
    fn test_pixel_ordered_pairs() {
        let mapper = mapper();
        for a in Stage::ALL {
            for b in Stage::ALL {
                let (start, end) = mapper.pixel_ordered(a, b);
                assert!(mapper.stage_pixel(start) <= mapper.stage_pixel(end));
                assert_eq!(
                    mapper.stage_span(start, end),
                    mapper.stage_span(a, b)
                );
            }
        }
    }

    #[test]
    fn test_rejects_non_monotonic_axis() {
        let axes = AxesConfig::new(
            XAxisConfig::default(),
            StageAxisConfig::new([600.0, 480.0, 500.0, 300.0, 240.0], 30.0),
        );
        let err = CoordinateMapper::new(&axes).unwrap_err();
        assert!(err.to_string().contains("not strictly monotonic"));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        let axes = AxesConfig::new(
            XAxisConfig::new(200.0, 400.0, 600.0, 0.0),
            StageAxisConfig::default(),
        );
        assert!(matches!(
            CoordinateMapper::new(&axes),
            Err(VennError::Configuration(_))
        ));
    }

    #[test]
    fn test_accepts_non_inverted_stage_axis() {
        let axes = AxesConfig::new(
            XAxisConfig::default(),
            StageAxisConfig::new([60.0, 180.0, 300.0, 360.0, 420.0], 20.0),
        );
        let mapper = CoordinateMapper::new(&axes).unwrap();

        assert_eq!(
            mapper.stages_between(50.0, 1000.0),
            (Some(Stage::Intention), None)
        );
        assert_eq!(
            mapper.pixel_ordered(Stage::Impact, Stage::Intention),
            (Stage::Intention, Stage::Impact)
        );
    }
}
