//! Error types used by the crate.

use thiserror::Error;

/// Errors produced by the geometry primitives.
#[derive(Debug, Error)]
pub enum ThalesTypesError {
    /// A projection definition could not be turned into a working operator.
    ///
    /// This should not happen for valid input coordinates and indicates a
    /// malformed operator definition or an unsupported parameter.
    #[error("failed to construct projection `{definition}`: {source}")]
    ProjectionInit {
        /// The operator definition that was rejected.
        definition: String,
        /// The underlying geodesy failure.
        source: geodesy::Error,
    },

    /// A transform ran but did not produce usable planar coordinates.
    #[error("projection produced no finite coordinates for ({lat}, {lon})")]
    ProjectionApply {
        /// Latitude of the input point in degrees.
        lat: f64,
        /// Longitude of the input point in degrees.
        lon: f64,
    },
}
