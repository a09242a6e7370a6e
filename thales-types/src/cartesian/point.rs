use nalgebra::{Point2, Scalar, Vector2};
use num_traits::{Float, Num};

/// 2d point in planar coordinates.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Scalar;

    /// X coordinate (easting for projected points).
    fn x(&self) -> Self::Num;
    /// Y coordinate (northing for projected points).
    fn y(&self) -> Self::Num;

    /// True if both coordinates are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Vector pointing from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Square of the euclidean distance to `other`.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let v = self.sub(other);
        v.x * v.x + v.y * v.y
    }
}

/// A cartesian point that can be constructed from a coordinate pair.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point with the given coordinates.
    fn new(x: Num, y: Num) -> Self;
}

/// Euclidean operations that only make sense for floating point coordinates.
pub trait CartesianPoint2dFloat<N: Float = f64>: CartesianPoint2d<Num = N> {
    /// Euclidean distance to `other`.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }
}

impl<N: Float + Scalar, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

/// 2d point in planar coordinates with `f64` components.
pub type Point2d = Point2<f64>;

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> CartesianPoint2d for Point2<Num> {
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }

    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Scalar> NewCartesianPoint2d<Num> for Point2<Num> {
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distances() {
        let a = Point2d::new(1.0, 2.0);
        let b = Point2d::new(4.0, 6.0);

        assert_abs_diff_eq!(a.distance_sq(&b), 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.distance(&b), 5.0, epsilon = 1e-12);

        let v = b.sub(&a);
        assert_eq!((v.x, v.y), (3.0, 4.0));
    }

    #[test]
    fn exact_equality() {
        let a = Point2d::new(1.0, 2.0);
        assert!(a.equal(&Point2d::new(1.0, 2.0)));
        assert!(!a.equal(&Point2d::new(1.0, 2.0 + 1e-12)));
    }
}
