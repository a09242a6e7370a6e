//! Planar geometries in metric coordinates and the metrics computed from them.

mod orient;
mod point;
mod triangle;

pub use orient::Orientation;
pub use point::{CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d, Point2d};
pub use triangle::{
    area, is_triangle, signed_area, SideLengths, Triangle, TriangleClass, VertexAngles,
    AREA_TOLERANCE, RIGHT_ANGLE_TOLERANCE_DEG, SIDE_TOLERANCE,
};
