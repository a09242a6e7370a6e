//! The analysis result handed to presentation and export layers.

use serde::{Deserialize, Serialize};
use thales_types::cartesian::{Orientation, Point2d, SideLengths, TriangleClass, VertexAngles};
use thales_types::geo::projection::UtmZone;
use thales_types::geo::GeoPoint2d;

/// Vertex labels in input order.
pub const VERTEX_LABELS: [char; 3] = ['A', 'B', 'C'];

/// One input vertex together with its projected position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportVertex {
    /// Label shown to the user: A, B or C.
    pub label: char,
    /// The original geographic coordinates.
    pub geo: GeoPoint2d,
    /// Projected position in meters (easting, northing).
    pub utm: Point2d,
    /// The UTM zone the vertex falls into.
    pub zone: UtmZone,
}

/// Conditions worth surfacing that do not invalidate the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisWarning {
    /// The vertices fall into more than one UTM zone. Each vertex is
    /// projected in its own zone, so distances across the boundary are a
    /// planar approximation rather than geodesically exact.
    CrossZone {
        /// All zones touched, ascending.
        zones: Vec<UtmZone>,
    },
    /// At least one side is long enough for projection distortion to be
    /// noticeable.
    LongEdge {
        /// Length of the longest side, in meters.
        meters: f64,
    },
}

/// Everything derived from one triangle of geographic points.
///
/// A report is only produced for non-degenerate input, so its values obey
/// the usual identities: the sides satisfy the triangle inequality, the
/// angles sum to 180° within floating point tolerance, and the perimeter
/// is exactly the sum of the sides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleReport {
    /// Input vertices with projected coordinates, in input order.
    pub vertices: [ReportVertex; 3],
    /// Sum of the three side lengths, in meters.
    pub perimeter_m: f64,
    /// Unsigned area, in square meters.
    pub area_sq_m: f64,
    /// Euclidean side lengths, in meters.
    pub sides: SideLengths,
    /// Interior angles, in degrees.
    pub angles: VertexAngles,
    /// Classification by side lengths.
    pub class: TriangleClass,
    /// True if one interior angle is within tolerance of 90°.
    pub right_angled: bool,
    /// Winding order of the input points, computed from the raw
    /// geographic coordinates.
    pub orientation: Orientation,
    /// Non-fatal conditions detected during analysis.
    pub warnings: Vec<AnalysisWarning>,
}

impl TriangleReport {
    /// True if the vertices span more than one UTM zone.
    pub fn is_cross_zone(&self) -> bool {
        self.warnings
            .iter()
            .any(|warning| matches!(warning, AnalysisWarning::CrossZone { .. }))
    }

    /// The zones touched by the vertices, ascending and deduplicated.
    pub fn zones(&self) -> Vec<UtmZone> {
        let mut zones: Vec<_> = self.vertices.iter().map(|vertex| vertex.zone).collect();
        zones.sort();
        zones.dedup();
        zones
    }
}
