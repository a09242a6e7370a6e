//! Error types used by the crate.

use thales_types::ThalesTypesError;
use thiserror::Error;

use crate::validate::FieldIssue;

/// Top-level error type of the analyzer.
///
/// Every failure is an explicit value; no `NaN` or `Inf` is ever smuggled
/// into a report instead. Cross-zone input still yields a result, so it is
/// surfaced as a [`report::AnalysisWarning`](crate::report::AnalysisWarning)
/// rather than an error.
#[derive(Debug, Error)]
pub enum ThalesError {
    /// One or more input fields are missing, non-numeric or out of range.
    #[error("invalid input: {}", format_issues(.0))]
    Validation(Vec<FieldIssue>),

    /// Two of the input points are (nearly) the same location, so side
    /// lengths and angles would be numerically meaningless.
    #[error("vertices are less than 1 mm apart (minimum pairwise distance {distance:.6} m)")]
    CoincidentVertices {
        /// Smallest pairwise distance between the projected vertices.
        distance: f64,
    },

    /// The three points lie on one line and do not form a triangle.
    #[error("vertices are collinear and do not form a triangle")]
    CollinearVertices,

    /// Projecting an input point failed.
    #[error(transparent)]
    Projection(#[from] ThalesTypesError),

    /// A store lookup referenced an unknown triangle id.
    #[error("triangle {0} not found")]
    TriangleNotFound(u64),

    /// Writing CSV output failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing GeoJSON output failed.
    #[error("geojson export failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
