use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, CartesianPoint2dFloat};

/// Triangles with area at or below this value are treated as collinear.
pub const AREA_TOLERANCE: f64 = 1e-6;

/// Two sides whose lengths differ by no more than this are considered equal
/// when classifying a triangle.
pub const SIDE_TOLERANCE: f64 = 1e-6;

/// An interior angle within this many degrees of 90° counts as a right angle.
pub const RIGHT_ANGLE_TOLERANCE_DEG: f64 = 0.1;

/// Signed area of the triangle `(a, b, c)` by the shoelace formula.
///
/// Positive for counterclockwise vertex order (in a y-up coordinate system),
/// negative for clockwise, zero for collinear points.
pub fn signed_area<P: CartesianPoint2d<Num = f64>>(a: &P, b: &P, c: &P) -> f64 {
    (a.x() * (b.y() - c.y()) + b.x() * (c.y() - a.y()) + c.x() * (a.y() - b.y())) / 2.0
}

/// Unsigned area of the triangle `(a, b, c)`.
pub fn area<P: CartesianPoint2d<Num = f64>>(a: &P, b: &P, c: &P) -> f64 {
    signed_area(a, b, c).abs()
}

/// True if the three points form a proper triangle, i.e. their area exceeds
/// `tolerance`. Check this before asking for angles or a classification.
pub fn is_triangle<P: CartesianPoint2d<Num = f64>>(a: &P, b: &P, c: &P, tolerance: f64) -> bool {
    area(a, b, c) > tolerance
}

/// Classification of a triangle by its side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleClass {
    /// All three sides are equal.
    Equilateral,
    /// Exactly two sides are equal.
    Isosceles,
    /// All sides differ.
    Scalene,
}

/// Euclidean lengths of the three sides, named by their endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideLengths {
    /// Length of side AB.
    pub ab: f64,
    /// Length of side BC.
    pub bc: f64,
    /// Length of side CA.
    pub ca: f64,
}

impl SideLengths {
    /// Length of the shortest side.
    pub fn shortest(&self) -> f64 {
        self.ab.min(self.bc).min(self.ca)
    }

    /// Length of the longest side.
    pub fn longest(&self) -> f64 {
        self.ab.max(self.bc).max(self.ca)
    }
}

/// Interior angles in degrees, named by the vertex they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexAngles {
    /// Angle at vertex A (between sides AB and CA).
    pub a: f64,
    /// Angle at vertex B (between sides AB and BC).
    pub b: f64,
    /// Angle at vertex C (between sides BC and CA).
    pub c: f64,
}

impl VertexAngles {
    /// True if any of the three angles is within `tolerance_deg` of 90°.
    pub fn has_right_angle(&self, tolerance_deg: f64) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .any(|angle| (angle - 90.0).abs() <= tolerance_deg)
    }
}

/// A triangle over three planar points.
///
/// Vertex order matters only for [`signed_area`](Triangle::signed_area);
/// lengths, angles and classification are order-insensitive. Callers must
/// check [`is_degenerate`](Triangle::is_degenerate) before interpreting
/// angles or classification: both divide by side-length products and are
/// meaningless for (near-)collinear input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle<P> {
    vertices: [P; 3],
}

impl<P: CartesianPoint2d<Num = f64>> Triangle<P> {
    /// Creates a triangle from its three vertices.
    pub fn new(a: P, b: P, c: P) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Vertex A.
    pub fn a(&self) -> &P {
        &self.vertices[0]
    }

    /// Vertex B.
    pub fn b(&self) -> &P {
        &self.vertices[1]
    }

    /// Vertex C.
    pub fn c(&self) -> &P {
        &self.vertices[2]
    }

    /// All three vertices in order.
    pub fn vertices(&self) -> &[P; 3] {
        &self.vertices
    }

    /// Signed area in the square of the coordinate unit.
    pub fn signed_area(&self) -> f64 {
        signed_area(self.a(), self.b(), self.c())
    }

    /// Unsigned area in the square of the coordinate unit.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True if the vertices are collinear within `tolerance` (an area, in the
    /// square of the coordinate unit).
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        self.area() <= tolerance
    }

    /// Euclidean lengths of the three sides.
    pub fn side_lengths(&self) -> SideLengths {
        SideLengths {
            ab: self.a().distance(self.b()),
            bc: self.b().distance(self.c()),
            ca: self.c().distance(self.a()),
        }
    }

    /// Sum of the three side lengths.
    pub fn perimeter(&self) -> f64 {
        let sides = self.side_lengths();
        sides.ab + sides.bc + sides.ca
    }

    /// Interior angles in degrees, by the law of cosines.
    ///
    /// The cosine is clamped to [-1, 1] before `acos` so floating point
    /// overshoot near flat triangles cannot produce NaN. A vertex whose two
    /// adjacent sides have zero product gets the angle 0.0; that value only
    /// occurs for degenerate input, which callers are expected to have
    /// rejected already.
    pub fn angles(&self) -> VertexAngles {
        let SideLengths { ab, bc, ca } = self.side_lengths();
        // Sides opposite the vertices: a ↔ |BC|, b ↔ |CA|, c ↔ |AB|.
        let (a, b, c) = (bc, ca, ab);
        VertexAngles {
            a: angle_from_sides(a, b, c),
            b: angle_from_sides(b, c, a),
            c: angle_from_sides(c, a, b),
        }
    }

    /// Classification by pairwise side equality within `tolerance`.
    ///
    /// Equilateral requires two independent equalities (AB≈BC and BC≈CA);
    /// exactly one equality out of the three makes the triangle isosceles.
    pub fn classify(&self, tolerance: f64) -> TriangleClass {
        let SideLengths { ab, bc, ca } = self.side_lengths();
        let eq_ab_bc = (ab - bc).abs() <= tolerance;
        let eq_bc_ca = (bc - ca).abs() <= tolerance;
        let eq_ca_ab = (ca - ab).abs() <= tolerance;

        if eq_ab_bc && eq_bc_ca {
            TriangleClass::Equilateral
        } else if eq_ab_bc || eq_bc_ca || eq_ca_ab {
            TriangleClass::Isosceles
        } else {
            TriangleClass::Scalene
        }
    }

    /// True if one interior angle is within `tolerance_deg` of 90°.
    pub fn has_right_angle(&self, tolerance_deg: f64) -> bool {
        self.angles().has_right_angle(tolerance_deg)
    }
}

/// Angle opposite to `opposite`, given the two adjacent sides.
fn angle_from_sides(opposite: f64, s1: f64, s2: f64) -> f64 {
    let denom = 2.0 * s1 * s2;
    if denom == 0.0 {
        // Zero-length side: no angle exists here.
        return 0.0;
    }
    let cos = ((s1 * s1 + s2 * s2 - opposite * opposite) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use approx::assert_abs_diff_eq;

    fn triangle(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle<Point2d> {
        Triangle::new(
            Point2d::new(a.0, a.1),
            Point2d::new(b.0, b.1),
            Point2d::new(c.0, c.1),
        )
    }

    #[test]
    fn area_of_unit_right_triangle() {
        let t = triangle((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert_abs_diff_eq!(t.area(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn signed_area_changes_sign_with_vertex_order() {
        let ccw = triangle((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let cw = triangle((0.0, 0.0), (0.0, 1.0), (1.0, 0.0));
        assert!(ccw.signed_area() > 0.0);
        assert!(cw.signed_area() < 0.0);
        assert_abs_diff_eq!(ccw.signed_area(), -cw.signed_area(), epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let t = triangle((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
        assert_abs_diff_eq!(t.area(), 0.0, epsilon = 1e-12);
        assert!(t.is_degenerate(AREA_TOLERANCE));
        assert!(!is_triangle(t.a(), t.b(), t.c(), AREA_TOLERANCE));
    }

    #[test]
    fn perimeter_is_sum_of_sides() {
        let t = triangle((12.3, -4.5), (102.8, 33.3), (-7.0, 81.25));
        let sides = t.side_lengths();
        assert_abs_diff_eq!(
            t.perimeter(),
            sides.ab + sides.bc + sides.ca,
            epsilon = 1e-9
        );
    }

    #[test]
    fn angles_sum_to_180_degrees() {
        let t = triangle((0.0, 0.0), (13.7, 2.1), (4.2, 9.9));
        let angles = t.angles();
        assert_abs_diff_eq!(angles.a + angles.b + angles.c, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn equilateral_triangle() {
        let t = triangle((0.0, 0.0), (1.0, 0.0), (0.5, 0.866025));
        assert_eq!(t.classify(1e-4), TriangleClass::Equilateral);

        let angles = t.angles();
        assert_abs_diff_eq!(angles.a, 60.0, epsilon = 0.01);
        assert_abs_diff_eq!(angles.b, 60.0, epsilon = 0.01);
        assert_abs_diff_eq!(angles.c, 60.0, epsilon = 0.01);
        assert!(!t.has_right_angle(RIGHT_ANGLE_TOLERANCE_DEG));
    }

    #[test]
    fn three_four_five_is_right_and_scalene() {
        let t = triangle((0.0, 0.0), (3.0, 0.0), (0.0, 4.0));
        let sides = t.side_lengths();
        assert_abs_diff_eq!(sides.ab, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sides.bc, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sides.ca, 4.0, epsilon = 1e-12);

        let angles = t.angles();
        assert_abs_diff_eq!(angles.a, 90.0, epsilon = 1e-6);
        assert!(t.has_right_angle(RIGHT_ANGLE_TOLERANCE_DEG));
        assert_eq!(t.classify(SIDE_TOLERANCE), TriangleClass::Scalene);
    }

    #[test]
    fn isosceles_triangle() {
        let t = triangle((0.0, 0.0), (2.0, 0.0), (1.0, 5.0));
        assert_eq!(t.classify(SIDE_TOLERANCE), TriangleClass::Isosceles);
    }

    #[test]
    fn degenerate_angles_fall_back_to_zero() {
        // B coincides with A, so sides AB and BC have zero-length products.
        let t = triangle((1.0, 1.0), (1.0, 1.0), (5.0, 5.0));
        let angles = t.angles();
        assert_eq!(angles.a, 0.0);
        assert_eq!(angles.b, 0.0);
    }

    #[test]
    fn side_extremes() {
        let t = triangle((0.0, 0.0), (3.0, 0.0), (0.0, 4.0));
        let sides = t.side_lengths();
        assert_abs_diff_eq!(sides.shortest(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sides.longest(), 5.0, epsilon = 1e-12);
    }
}
