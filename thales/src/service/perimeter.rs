use thales_types::geo::{GeoPoint, GeoPoint2d};

/// Mean Earth radius in meters, as used by the legacy haversine service.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Perimeter with raw `(lat, lon)` degrees treated as planar x/y,
/// bug-for-bug compatible with the legacy SOAP operation.
///
/// The result is in "degrees", not meters, and is geodesically
/// meaningless for real-world coordinates: degrees of longitude shrink
/// towards the poles, which this formula ignores entirely. The `unit`
/// argument is part of the legacy signature and was never acted on there,
/// so it is accepted and ignored here too.
///
/// For actual distances use [`haversine_perimeter`] or the UTM-based
/// [`TriangleAnalyzer`](crate::analyzer::TriangleAnalyzer).
pub fn planar_perimeter(points: &[GeoPoint2d; 3], _unit: &str) -> f64 {
    fn distance(a: &GeoPoint2d, b: &GeoPoint2d) -> f64 {
        ((b.lat() - a.lat()).powi(2) + (b.lon() - a.lon()).powi(2)).sqrt()
    }

    distance(&points[0], &points[1])
        + distance(&points[1], &points[2])
        + distance(&points[2], &points[0])
}

/// Great-circle distance in meters between two points, on a sphere of
/// radius [`EARTH_RADIUS_M`].
pub fn haversine_distance(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat_rad().cos() * b.lat_rad().cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * central_angle
}

/// Great-circle perimeter in meters of the triangle over three points.
pub fn haversine_perimeter(points: &[GeoPoint2d; 3]) -> f64 {
    haversine_distance(&points[0], &points[1])
        + haversine_distance(&points[1], &points[2])
        + haversine_distance(&points[2], &points[0])
}
