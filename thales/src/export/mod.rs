//! Serializing a [`TriangleReport`](crate::report::TriangleReport) for
//! other tools: CSV for spreadsheets, GeoJSON for GIS software.
//!
//! Rendering (plots, images) is a presentation concern and lives outside
//! this crate.

mod csv;
mod geojson;

pub use self::csv::write_csv;
pub use self::geojson::{to_feature_collection, to_geojson_string};
