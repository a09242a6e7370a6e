//! Input validation, decoupled from any UI.
//!
//! Raw text input is checked field by field; every problem becomes a
//! [`FieldIssue`] a presentation layer can attach to the offending field.
//! All issues for all fields are collected before reporting, so a user sees
//! everything that is wrong at once.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;
use thales_types::geo::{GeoPoint2d, NewGeoPoint};

use crate::error::ThalesError;

/// Latitudes accepted by the analyzer, in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Longitudes accepted by the analyzer, in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A single problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Path of the offending field, e.g. `point1.lat`.
    pub field: String,
    /// Message suitable for showing next to the field.
    pub message: String,
}

impl FieldIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn parse_axis(
    field: String,
    name: &str,
    range: RangeInclusive<f64>,
    text: &str,
) -> Result<f64, FieldIssue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldIssue::new(field, format!("{name} is empty.")));
    }

    let Ok(value) = trimmed.parse::<f64>() else {
        return Err(FieldIssue::new(field, format!("{name} not numeric.")));
    };
    if !value.is_finite() || !range.contains(&value) {
        return Err(FieldIssue::new(
            field,
            format!("{name} out of range ({}..{}).", range.start(), range.end()),
        ));
    }

    Ok(value)
}

/// Parses one latitude field.
pub fn parse_latitude(field: &str, text: &str) -> Result<f64, FieldIssue> {
    parse_axis(field.to_string(), "Latitude", LATITUDE_RANGE, text)
}

/// Parses one longitude field.
pub fn parse_longitude(field: &str, text: &str) -> Result<f64, FieldIssue> {
    parse_axis(field.to_string(), "Longitude", LONGITUDE_RANGE, text)
}

/// Parses a vertex from its two text fields.
///
/// Issues are reported under `<label>.lat` and `<label>.lon`; both fields
/// are checked even if the first one fails.
pub fn parse_vertex(
    label: &str,
    lat_text: &str,
    lon_text: &str,
) -> Result<GeoPoint2d, Vec<FieldIssue>> {
    let lat = parse_latitude(&format!("{label}.lat"), lat_text);
    let lon = parse_longitude(&format!("{label}.lon"), lon_text);

    match (lat, lon) {
        (Ok(lat), Ok(lon)) => Ok(GeoPoint2d::latlon(lat, lon)),
        (lat, lon) => Err(lat.err().into_iter().chain(lon.err()).collect()),
    }
}

/// Parses all three vertices, collecting every issue rather than stopping
/// at the first bad field. Vertices are labeled `point1` through `point3`.
pub fn parse_vertices(raw: [[&str; 2]; 3]) -> Result<[GeoPoint2d; 3], ThalesError> {
    let mut issues = Vec::new();
    let mut points = Vec::with_capacity(3);

    for (index, [lat_text, lon_text]) in raw.iter().enumerate() {
        match parse_vertex(&format!("point{}", index + 1), lat_text, lon_text) {
            Ok(point) => points.push(point),
            Err(mut vertex_issues) => issues.append(&mut vertex_issues),
        }
    }

    if !issues.is_empty() {
        return Err(ThalesError::Validation(issues));
    }

    Ok([points[0], points[1], points[2]])
}
