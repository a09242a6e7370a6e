//! Geometries in geographic coordinates (latitude and longitude) and
//! conversion into planar metric systems (see [`projection`]).

mod point;
pub mod projection;
mod winding;

pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use winding::winding;
