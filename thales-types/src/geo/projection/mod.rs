//! Projections from geographic coordinates into planar metric systems.

mod geodesy;
mod utm;

pub use geodesy::GeodesyProjection;
pub use utm::{Hemisphere, UtmProjection, UtmZone, UTM_FALSE_EASTING, UTM_SCALE_FACTOR};

/// Converts points from one coordinate system into another.
pub trait Projection {
    /// Point type the projection converts from.
    type InPoint;
    /// Point type the projection converts to.
    type OutPoint;

    /// Projects the input point. `None` means the transform could not
    /// produce finite coordinates for this input.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;

    /// Applies the inverse transform.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
