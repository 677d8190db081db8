//! Configuration types for Venn diagrams.
//!
//! All types implement [`serde::Deserialize`] and fill every missing field
//! with its default, so a configuration file only needs to name what it
//! changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`CanvasConfig`] - Canvas extent, which is also the sampling area.
//! - [`AxesConfig`] - Pixel anchors and tolerances of both qualitative axes.
//! - [`SamplingConfig`] - Grid spacing of the region counter.
//! - [`StyleConfig`] - Colors and font sizes of the SVG snapshot.
//! - [`ExportConfig`] - Report title and pagination.
//!
//! # Example
//!
//! ```
//! # use venn::config::AppConfig;
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [sampling]
//!     step = 4.0
//!
//!     [axes.x]
//!     medium = 420.0
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.sampling().step(), 4.0);
//! assert_eq!(config.axes().x().medium(), 420.0);
//! assert_eq!(config.axes().x().low(), 200.0);
//! assert_eq!(config.canvas().width(), 800.0);
//! ```

use serde::Deserialize;

use venn_core::{color::Color, ellipse::Ellipse, geometry::Size};

/// Top-level application configuration.
///
/// When `ellipses` is absent the six built-in regions are used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    canvas: CanvasConfig,

    #[serde(default)]
    axes: AxesConfig,

    #[serde(default)]
    sampling: SamplingConfig,

    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    export: ExportConfig,

    #[serde(default)]
    ellipses: Option<Vec<Ellipse>>,
}

impl AppConfig {
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    pub fn axes(&self) -> &AxesConfig {
        &self.axes
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// The configured regions, if the file lists any.
    pub fn ellipses(&self) -> Option<&[Ellipse]> {
        self.ellipses.as_deref()
    }

    /// Replaces the sampling step (builder style).
    pub fn with_step(mut self, step: f32) -> Self {
        self.sampling.step = step;
        self
    }

    /// Replaces the region list (builder style).
    pub fn with_ellipses(mut self, ellipses: Vec<Ellipse>) -> Self {
        self.ellipses = Some(ellipses);
        self
    }
}

/// Canvas extent in pixels. The origin is the top-left corner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
}

impl CanvasConfig {
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Anchors for both qualitative axes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AxesConfig {
    #[serde(default)]
    x: XAxisConfig,

    #[serde(default)]
    stage: StageAxisConfig,
}

impl AxesConfig {
    pub fn new(x: XAxisConfig, stage: StageAxisConfig) -> Self {
        Self { x, stage }
    }

    pub fn x(&self) -> &XAxisConfig {
        &self.x
    }

    pub fn stage(&self) -> &StageAxisConfig {
        &self.stage
    }
}

/// Pixel X of each relative value.
///
/// `tolerance` is the largest distance from an anchor that still reads as
/// that anchor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct XAxisConfig {
    low: f32,
    medium: f32,
    high: f32,
    tolerance: f32,
}

impl XAxisConfig {
    pub fn new(low: f32, medium: f32, high: f32, tolerance: f32) -> Self {
        Self {
            low,
            medium,
            high,
            tolerance,
        }
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn medium(&self) -> f32 {
        self.medium
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Anchors in `RelativeValue::ALL` order.
    pub fn anchors(&self) -> [f32; 3] {
        [self.low, self.medium, self.high]
    }
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self::new(200.0, 400.0, 600.0, 50.0)
    }
}

/// Pixel Y of each stage.
///
/// The defaults put the earliest stage at the bottom of the canvas.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StageAxisConfig {
    intention: f32,
    activation: f32,
    execution: f32,
    eval_adapt: f32,
    impact: f32,
    tolerance: f32,
}

impl StageAxisConfig {
    /// Creates a stage axis from anchors in chronological order.
    pub fn new(anchors: [f32; 5], tolerance: f32) -> Self {
        let [intention, activation, execution, eval_adapt, impact] = anchors;
        Self {
            intention,
            activation,
            execution,
            eval_adapt,
            impact,
            tolerance,
        }
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Anchors in `Stage::ALL` order.
    pub fn anchors(&self) -> [f32; 5] {
        [
            self.intention,
            self.activation,
            self.execution,
            self.eval_adapt,
            self.impact,
        ]
    }
}

impl Default for StageAxisConfig {
    fn default() -> Self {
        Self::new([600.0, 480.0, 360.0, 300.0, 240.0], 30.0)
    }
}

/// Region counter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    step: f32,
}

impl SamplingConfig {
    /// Spacing of the sampling grid, in pixels.
    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            step: crate::regions::DEFAULT_STEP,
        }
    }
}

/// Visual styling of the SVG snapshot.
///
/// Colors are CSS color strings and are parsed on use.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    x_grid_color: String,
    stage_grid_color: String,
    selection_color: String,
    label_font_size: u16,
    tick_font_size: u16,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn x_grid_color(&self) -> Result<Color, String> {
        Color::new(&self.x_grid_color).map_err(|err| format!("Invalid x grid color in config: {err}"))
    }

    pub fn stage_grid_color(&self) -> Result<Color, String> {
        Color::new(&self.stage_grid_color)
            .map_err(|err| format!("Invalid stage grid color in config: {err}"))
    }

    pub fn selection_color(&self) -> Result<Color, String> {
        Color::new(&self.selection_color)
            .map_err(|err| format!("Invalid selection color in config: {err}"))
    }

    pub fn label_font_size(&self) -> u16 {
        self.label_font_size
    }

    pub fn tick_font_size(&self) -> u16 {
        self.tick_font_size
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            x_grid_color: "#ccc".to_string(),
            stage_grid_color: "#eee".to_string(),
            selection_color: "#0096fd".to_string(),
            label_font_size: 12,
            tick_font_size: 10,
        }
    }
}

/// Report settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    title: String,
    lines_per_page: usize,
}

impl ExportConfig {
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Label lines per report page, at least one.
    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page.max(1)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "Venn Diagram".to_string(),
            lines_per_page: 20,
        }
    }
}
