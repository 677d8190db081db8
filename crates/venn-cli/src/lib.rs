//! CLI logic for the Venn diagram tool.
//!
//! Starts a session from the configuration, optionally replays an
//! interaction script against it, then writes the SVG snapshot and, when
//! requested, the text report.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use venn::{DiagramBuilder, VennError};

use error_adapter::DiagnosticAdapter;

/// Run the Venn CLI application
///
/// Returns the number of unique intersections in the exported snapshot.
///
/// # Errors
///
/// Returns `VennError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Script syntax errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<usize, VennError> {
    info!(
        script_path:? = args.script,
        output_path = args.output;
        "Processing diagram"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(step) = args.step {
        app_config = app_config.with_step(step);
    }

    let builder = DiagramBuilder::new(app_config);
    let mut session = builder.session()?;

    if let Some(path) = &args.script {
        let source = fs::read_to_string(path)?;
        let script = builder.parse_script(&source)?;
        let summary = builder.replay(&mut session, &script);

        let reporter = miette::GraphicalReportHandler::new();
        for diagnostic in summary.diagnostics() {
            let mut writer = String::new();
            let adapter = DiagnosticAdapter::new(diagnostic, &source);
            if reporter.render_report(&mut writer, &adapter).is_ok() {
                warn!("{writer}");
            }
        }
    }

    let snapshot = builder.snapshot(&session);
    let regions = snapshot.region_count();
    info!(regions; "Unique intersections counted");

    let svg = builder.render_svg(&snapshot)?;
    fs::write(&args.output, svg)?;
    info!(output_file = args.output; "SVG exported successfully");

    if let Some(report_path) = &args.report {
        let report = builder.render_report(&snapshot)?;
        fs::write(report_path, report)?;
        info!(report_file = report_path; "Report exported successfully");
    }

    Ok(regions)
}
