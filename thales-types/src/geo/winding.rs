use crate::cartesian::{Orientation, Point2d};
use crate::geo::GeoPoint;

/// Winding order of three geographic points, in input order.
///
/// The signed-area rule is applied directly to the raw coordinates, reading
/// `(lat, lon)` as `(x, y)`. That is cheap and good enough for a winding
/// sense: the sign survives projection into any single UTM zone. The zero
/// case maps to [`Orientation::Clockwise`] (see
/// [`Orientation::of_triplet`]); reject degenerate triplets before calling
/// if that matters.
pub fn winding<P: GeoPoint<Num = f64>>(p1: &P, p2: &P, p3: &P) -> Orientation {
    Orientation::of_triplet(
        &Point2d::new(p1.lat(), p1.lon()),
        &Point2d::new(p2.lat(), p2.lon()),
        &Point2d::new(p3.lat(), p3.lon()),
    )
}
