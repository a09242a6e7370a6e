use std::marker::PhantomData;

use geodesy::prelude::*;

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::error::ThalesTypesError;
use crate::geo::projection::Projection;
use crate::geo::{GeoPoint, NewGeoPoint};

/// A projection backed by an arbitrary `geodesy` operator definition, e.g.
/// `"tmerc lon_0=45 k_0=0.9996 x_0=500000 y_0=0 ellps=WGS84"`.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    definition: String,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Compiles the operator definition into a ready to use projection.
    pub fn new(definition: &str) -> Result<Self, ThalesTypesError> {
        let mut context = Minimal::new();
        let op = context
            .op(definition)
            .map_err(|source| ThalesTypesError::ProjectionInit {
                definition: definition.to_string(),
                source,
            })?;

        Ok(Self {
            context,
            op,
            definition: definition.to_string(),
            phantom_in: PhantomData,
            phantom_out: PhantomData,
        })
    }

    /// The operator definition this projection was built from.
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Out::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        Some(In::latlon(
            data[0].0[1].to_degrees(),
            data[0].0[0].to_degrees(),
        ))
    }
}

impl<In, Out> std::fmt::Debug for GeodesyProjection<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeodesyProjection")
            .field("definition", &self.definition)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::GeoPoint2d;
    use crate::latlon;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_malformed_definition() {
        let result = GeodesyProjection::<GeoPoint2d, Point2d>::new("no-such-operator foo=1");
        assert!(matches!(
            result,
            Err(ThalesTypesError::ProjectionInit { .. })
        ));
    }

    #[test]
    fn transverse_mercator_round_trip() {
        let projection: GeodesyProjection<GeoPoint2d, Point2d> =
            GeodesyProjection::new("tmerc lon_0=45 k_0=0.9996 x_0=500000 y_0=0 ellps=WGS84")
                .expect("valid definition");

        let origin = latlon!(35.6892, 45.0);
        let projected = projection.project(&origin).expect("projects");
        // On the central meridian the easting is exactly the false easting.
        assert_abs_diff_eq!(projected.x, 500_000.0, epsilon = 1e-3);
        assert!(projected.y > 3_900_000.0 && projected.y < 4_000_000.0);

        let back = projection.unproject(&projected).expect("unprojects");
        assert_abs_diff_eq!(back.lat(), origin.lat(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.lon(), origin.lon(), epsilon = 1e-9);
    }
}
