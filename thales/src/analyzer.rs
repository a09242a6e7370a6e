//! The analysis pipeline: project, guard against degenerate input, measure.

use log::warn;
use thales_types::cartesian::{
    Triangle, AREA_TOLERANCE, RIGHT_ANGLE_TOLERANCE_DEG, SIDE_TOLERANCE,
};
use thales_types::geo::projection::{Hemisphere, Projection, UtmZone};
use thales_types::geo::{winding, GeoPoint, GeoPoint2d};
use thales_types::ThalesTypesError;

use crate::error::ThalesError;
use crate::projections::UtmProjectionPool;
use crate::report::{AnalysisWarning, ReportVertex, TriangleReport, VERTEX_LABELS};

/// Projected vertices closer than this (in meters) are rejected as
/// coincident before any angle math is attempted.
pub const MIN_VERTEX_SEPARATION_M: f64 = 1e-3;

/// Sides longer than this (in meters) get a distortion warning; a planar
/// UTM distance is not trustworthy at such extents.
pub const LONG_EDGE_THRESHOLD_M: f64 = 3_000_000.0;

/// Computes [`TriangleReport`]s from triples of geographic points.
///
/// Owns the zone→projector pool, so repeated analyses in the same region
/// reuse the compiled transforms. Construct one analyzer and keep it
/// around; it is cheap when idle and safe to share between threads.
pub struct TriangleAnalyzer {
    projections: UtmProjectionPool,
}

impl TriangleAnalyzer {
    /// Creates an analyzer with an empty projector pool.
    pub fn new() -> Self {
        Self {
            projections: UtmProjectionPool::new(),
        }
    }

    /// Creates an analyzer over an existing pool, e.g. one shared with
    /// other components.
    pub fn with_pool(projections: UtmProjectionPool) -> Self {
        Self { projections }
    }

    /// The projector pool used by this analyzer.
    pub fn projections(&self) -> &UtmProjectionPool {
        &self.projections
    }

    /// Analyzes the triangle formed by three geographic points, given in
    /// order A, B, C.
    ///
    /// Inputs are expected to be validated already (see
    /// [`validate`](crate::validate)); out-of-range coordinates do not
    /// crash, but their reports are meaningless.
    ///
    /// The pipeline mirrors the order a careful caller must follow:
    /// projection first, then the coincidence guard, then collinearity,
    /// and only after both pass the angle and classification math that
    /// would be unstable for degenerate input.
    pub fn analyze(&self, points: [GeoPoint2d; 3]) -> Result<TriangleReport, ThalesError> {
        let vertices = self.project_vertices(&points)?;

        let mut warnings = Vec::new();

        let mut zones: Vec<UtmZone> = vertices.iter().map(|vertex| vertex.zone).collect();
        zones.sort();
        zones.dedup();
        if zones.len() > 1 {
            warn!(
                "vertices span UTM zones {zones:?}; planar distances across the boundary are approximate"
            );
            warnings.push(AnalysisWarning::CrossZone { zones });
        }

        let triangle = Triangle::new(vertices[0].utm, vertices[1].utm, vertices[2].utm);
        let sides = triangle.side_lengths();

        if sides.shortest() < MIN_VERTEX_SEPARATION_M {
            return Err(ThalesError::CoincidentVertices {
                distance: sides.shortest(),
            });
        }
        if sides.longest() > LONG_EDGE_THRESHOLD_M {
            warnings.push(AnalysisWarning::LongEdge {
                meters: sides.longest(),
            });
        }
        if triangle.is_degenerate(AREA_TOLERANCE) {
            return Err(ThalesError::CollinearVertices);
        }

        let angles = triangle.angles();

        Ok(TriangleReport {
            vertices,
            perimeter_m: triangle.perimeter(),
            area_sq_m: triangle.area(),
            sides,
            angles,
            class: triangle.classify(SIDE_TOLERANCE),
            right_angled: angles.has_right_angle(RIGHT_ANGLE_TOLERANCE_DEG),
            orientation: winding(&points[0], &points[1], &points[2]),
            warnings,
        })
    }

    /// Projects the three vertices, each in its own zone but all in the
    /// northing frame of the first vertex's hemisphere.
    ///
    /// The false northing is a constant offset within a frame, so using one
    /// frame keeps a triangle that straddles the equator metrically
    /// consistent (southern points simply get negative northings in a
    /// northern frame).
    fn project_vertices(
        &self,
        points: &[GeoPoint2d; 3],
    ) -> Result<[ReportVertex; 3], ThalesError> {
        let hemisphere = Hemisphere::for_lat(points[0].lat());

        let mut vertices = Vec::with_capacity(3);
        for (label, point) in VERTEX_LABELS.into_iter().zip(points) {
            let zone = UtmZone::for_lon(point.lon());
            let projector = self.projections.projector(zone, hemisphere)?;
            let utm = projector
                .project(point)
                .ok_or(ThalesTypesError::ProjectionApply {
                    lat: point.lat(),
                    lon: point.lon(),
                })?;

            vertices.push(ReportVertex {
                label,
                geo: *point,
                utm,
                zone,
            });
        }

        Ok([vertices[0], vertices[1], vertices[2]])
    }
}

impl Default for TriangleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
