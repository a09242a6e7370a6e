use serde::{Deserialize, Serialize};

use crate::cartesian::triangle::signed_area;
use crate::cartesian::CartesianPoint2d;

/// Winding order of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
}

impl Orientation {
    /// Determines the winding order of a triplet of points from the sign of
    /// its area: positive means counterclockwise.
    ///
    /// Collinear triplets have zero signed area and no geometric winding;
    /// by convention they are reported as [`Orientation::Clockwise`] here,
    /// so callers that care must reject degenerate input first.
    pub fn of_triplet<P: CartesianPoint2d<Num = f64>>(p: &P, q: &P, r: &P) -> Self {
        if signed_area(p, q, r) > 0.0 {
            Self::Counterclockwise
        } else {
            Self::Clockwise
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;

    #[test]
    fn triplet_winding() {
        let p = Point2d::new(0.0, 0.0);
        let q = Point2d::new(1.0, 0.0);
        let r = Point2d::new(0.0, 1.0);

        assert_eq!(Orientation::of_triplet(&p, &q, &r), Orientation::Counterclockwise);
        assert_eq!(Orientation::of_triplet(&r, &q, &p), Orientation::Clockwise);
    }

    #[test]
    fn collinear_triplet_reports_clockwise() {
        let p = Point2d::new(0.0, 0.0);
        let q = Point2d::new(1.0, 1.0);
        let r = Point2d::new(2.0, 2.0);

        assert_eq!(Orientation::of_triplet(&p, &q, &r), Orientation::Clockwise);
    }
}
