//! Computations kept compatible with the legacy companion web services.
//!
//! Only the operations themselves live here, as plain functions and types;
//! SOAP/REST server plumbing is out of scope for this crate.

mod perimeter;
mod store;

pub use perimeter::{
    haversine_distance, haversine_perimeter, planar_perimeter, EARTH_RADIUS_M,
};
pub use store::TriangleStore;
