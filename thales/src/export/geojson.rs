use chrono::{SecondsFormat, Utc};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{json, Map};
use thales_types::geo::GeoPoint;

use crate::error::ThalesError;
use crate::report::TriangleReport;

/// Builds a GeoJSON `FeatureCollection` with a single polygon feature.
///
/// The ring is the three geographic vertices in input order, closed by
/// repeating the first one, with positions in `[longitude, latitude]`
/// order as GeoJSON requires.
pub fn to_feature_collection(report: &TriangleReport) -> FeatureCollection {
    let mut ring: Vec<Vec<f64>> = report
        .vertices
        .iter()
        .map(|vertex| vec![vertex.geo.lon(), vertex.geo.lat()])
        .collect();
    ring.push(vec![
        report.vertices[0].geo.lon(),
        report.vertices[0].geo.lat(),
    ]);

    let mut properties = Map::new();
    properties.insert("generated_by".to_string(), json!("thales"));
    properties.insert(
        "timestamp".to_string(),
        json!(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
    );

    let feature = Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    };

    FeatureCollection {
        bbox: None,
        features: vec![feature],
        foreign_members: None,
    }
}

/// Serializes the report as pretty-printed GeoJSON text.
pub fn to_geojson_string(report: &TriangleReport) -> Result<String, ThalesError> {
    Ok(serde_json::to_string_pretty(&to_feature_collection(
        report,
    ))?)
}
