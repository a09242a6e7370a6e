//! Turns three WGS84 coordinates into a fully analyzed triangle.
//!
//! Each vertex is projected into its UTM zone, the projected triangle is
//! measured and classified, and the winding order of the original
//! geographic points is determined. The result is a [`TriangleReport`]
//! ready for display or export ([`export`]), or an explicit error when the
//! input does not form a triangle.
//!
//! ```
//! use thales::TriangleAnalyzer;
//! use thales_types::latlon;
//!
//! let analyzer = TriangleAnalyzer::new();
//! let report = analyzer.analyze([
//!     latlon!(35.6892, 51.3890),
//!     latlon!(35.6900, 51.3900),
//!     latlon!(35.6885, 51.3910),
//! ])?;
//!
//! assert!(report.perimeter_m > 0.0);
//! assert!(report.warnings.is_empty());
//! # Ok::<(), thales::ThalesError>(())
//! ```
//!
//! Analysis is a plain synchronous call chain (validate, project, measure)
//! with no shared state beyond the zone→projector pool inside
//! [`TriangleAnalyzer`], which is safe to share between threads.

pub use thales_types;

pub mod analyzer;
pub mod error;
pub mod export;
pub mod projections;
pub mod report;
pub mod service;
pub mod validate;

pub use analyzer::TriangleAnalyzer;
pub use error::ThalesError;
pub use projections::UtmProjectionPool;
pub use report::{AnalysisWarning, ReportVertex, TriangleReport};

#[cfg(test)]
mod tests {
    use crate::export::{to_geojson_string, write_csv};
    use crate::validate::parse_vertices;
    use crate::TriangleAnalyzer;

    #[test]
    fn text_input_flows_through_to_exports() {
        let points = parse_vertices([
            ["35.6892", "51.3890"],
            ["35.6900", "51.3900"],
            ["35.6885", "51.3910"],
        ])
        .expect("sample input");

        let analyzer = TriangleAnalyzer::new();
        let report = analyzer.analyze(points).expect("valid triangle");

        let mut csv_out = Vec::new();
        write_csv(&mut csv_out, &report).expect("csv export");
        assert!(!csv_out.is_empty());

        let geojson = to_geojson_string(&report).expect("geojson export");
        assert!(geojson.contains("\"FeatureCollection\""));
    }
}
