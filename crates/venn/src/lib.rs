//! Venn - interactive region diagrams over qualitative axes.
//!
//! A session holds a handful of labeled ellipses on a canvas whose horizontal
//! axis is a relative value (Low, Medium, High) and whose vertical axis is a
//! five-stage timeline. Ellipses are moved, resized and snapped to axis
//! values through an [`InteractionController`]; at any time the diagram can
//! report how many distinct overlap regions it has, which named catalog
//! combinations apply, and export an SVG snapshot plus a paginated report.
//!
//! # Pipeline
//!
//! ```text
//! events / script
//!     ↓ InteractionController
//! EllipseModel (+ CoordinateMapper for selector edits)
//!     ↓ snapshot
//! DiagramSnapshot (RegionCounter, IntersectionCatalog)
//!     ↓ export
//! SVG document / text report
//! ```

pub mod catalog;
pub mod config;
pub mod defaults;
pub mod export;
pub mod interaction;
pub mod mapping;
pub mod model;
pub mod rating;
pub mod regions;
pub mod snapshot;

mod error;

pub use venn_core::{color, ellipse, geometry, identifier, scale};
pub use venn_script::{self as script, Script};

pub use error::VennError;
pub use interaction::{Event, InteractionController, Outcome, Selection};
pub use regions::count_distinct_regions;
pub use snapshot::DiagramSnapshot;

use log::{debug, info, warn};

use venn_core::identifier::Id;
use venn_script::error::Diagnostic;

use catalog::IntersectionCatalog;
use config::AppConfig;
use export::Exporter;
use mapping::CoordinateMapper;
use model::EllipseModel;
use regions::RegionCounter;

/// Tally of a script replay.
#[derive(Debug, Clone, Default)]
pub struct ReplaySummary {
    applied: usize,
    ignored: usize,
    rejected: usize,
    diagnostics: Vec<Diagnostic>,
}

impl ReplaySummary {
    /// Commands that changed or confirmed the session state.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Commands the controller ignored, such as a drag with nothing selected.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Commands that failed validation and were skipped.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Warnings about the script relative to this session.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Builder for sessions, script replay and exports.
///
/// # Examples
///
/// ```
/// use venn::{DiagramBuilder, Event, identifier::Id};
///
/// let builder = DiagramBuilder::default();
/// let mut session = builder.session().expect("default session");
///
/// session.handle(Event::ClickEllipse(Id::new("agile"))).expect("click");
///
/// let snapshot = builder.snapshot(&session);
/// assert!(snapshot.region_count() > 0);
///
/// let svg = builder.render_svg(&snapshot).expect("render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
    catalog: IntersectionCatalog,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration and the
    /// built-in catalog.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            catalog: IntersectionCatalog::default(),
        }
    }

    /// Replaces the catalog.
    pub fn with_catalog(mut self, catalog: IntersectionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &IntersectionCatalog {
        &self.catalog
    }

    /// Starts a session with the configured regions, or the built-in ones
    /// when the configuration lists none.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Configuration`] for invalid axis anchors or
    /// duplicate region ids.
    pub fn session(&self) -> Result<InteractionController, VennError> {
        let mapper = CoordinateMapper::new(self.config.axes())?;
        let ellipses = match self.config.ellipses() {
            Some(ellipses) => ellipses.to_vec(),
            None => defaults::default_ellipses(),
        };
        info!(ellipses = ellipses.len(); "Starting session");

        let model = EllipseModel::new(ellipses, mapper)?;
        Ok(InteractionController::new(model))
    }

    /// Parse an interaction script.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Script`] carrying every syntax diagnostic and the
    /// source, for labeled rendering.
    pub fn parse_script(&self, source: &str) -> Result<Script, VennError> {
        let script =
            venn_script::parse(source).map_err(|err| VennError::new_script_error(err, source))?;
        debug!(commands = script.len(); "Script parsed");
        Ok(script)
    }

    /// Applies every command of `script` to `session`, in order.
    ///
    /// Commands naming unknown regions, out of range ratings and similar
    /// local failures are skipped with a warning; the rest of the script
    /// still runs.
    pub fn replay(&self, session: &mut InteractionController, script: &Script) -> ReplaySummary {
        let known: Vec<Id> = session.model().ids().collect();
        let mut summary = ReplaySummary {
            diagnostics: script.validate(&known),
            ..ReplaySummary::default()
        };
        for diagnostic in &summary.diagnostics {
            warn!(message = diagnostic.message(); "Script warning");
        }

        for command in script.commands() {
            let event = Event::from(command.inner());
            match session.handle(event) {
                Ok(Outcome::Ignored(_)) => summary.ignored += 1,
                Ok(_) => summary.applied += 1,
                Err(err) => {
                    warn!(
                        command:% = command.inner().keyword(),
                        offset = command.span().start(),
                        err:% = err;
                        "Skipping script command"
                    );
                    summary.rejected += 1;
                }
            }
        }

        info!(
            applied = summary.applied,
            ignored = summary.ignored,
            rejected = summary.rejected;
            "Script replayed"
        );
        summary
    }

    /// Captures the session for export.
    pub fn snapshot(&self, session: &InteractionController) -> DiagramSnapshot {
        let counter = RegionCounter::new(self.config.canvas().size(), self.config.sampling().step());
        DiagramSnapshot::capture(session, &counter, &self.catalog)
    }

    /// Render a snapshot to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Export`] if a configured style color is invalid.
    pub fn render_svg(&self, snapshot: &DiagramSnapshot) -> Result<String, VennError> {
        let exporter = export::svg::Svg::new(&self.config)?;
        let svg = exporter.export_snapshot(snapshot)?;
        info!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }

    /// Render the paginated text report.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::Export`] if the report cannot be formatted.
    pub fn render_report(&self, snapshot: &DiagramSnapshot) -> Result<String, VennError> {
        let exporter = export::report::Report::new(self.config.export());
        let report = exporter.export_snapshot(snapshot)?;
        info!(bytes = report.len(); "Report rendered");
        Ok(report)
    }
}
