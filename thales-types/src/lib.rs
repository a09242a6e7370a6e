//! Geometry primitives for triangle analysis over geographic coordinates.
//!
//! The crate is split the same way the data flows:
//!
//! * [`geo`]: points on the surface of the Earth (latitude/longitude),
//!   [projections](geo::projection) into planar metric systems, and the
//!   winding order of a geographic triplet;
//! * [`cartesian`]: planar points in meters and the triangle metrics
//!   computed from them (area, perimeter, angles, classification).
//!
//! Nothing here owns policy: tolerances are passed in by callers, and
//! degenerate input is signaled, not "fixed".

pub mod cartesian;
pub mod error;
pub mod geo;

pub use error::ThalesTypesError;
