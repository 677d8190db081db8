//! Export of diagram snapshots.
//!
//! Exporters turn a [`DiagramSnapshot`] into a textual artifact. The library
//! only produces strings; writing files is left to the caller.
//!
//! # Available Backends
//!
//! - [`svg`]: the canvas as an SVG document, via [`svg::Svg`]
//! - [`report`]: the paginated plain-text intersection report, via
//!   [`report::Report`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`VennError::Export`] at the crate boundary.
//!
//! [`VennError::Export`]: crate::VennError::Export

pub mod report;
pub mod svg;

use crate::snapshot::DiagramSnapshot;

/// Abstraction for snapshot export backends.
pub trait Exporter {
    /// Renders `snapshot` to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the snapshot cannot be converted.
    fn export_snapshot(&self, snapshot: &DiagramSnapshot) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
