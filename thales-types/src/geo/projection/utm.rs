use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cartesian::Point2d;
use crate::error::ThalesTypesError;
use crate::geo::projection::{GeodesyProjection, Projection};
use crate::geo::GeoPoint2d;

/// Scale factor at the central meridian of every UTM zone.
pub const UTM_SCALE_FACTOR: f64 = 0.9996;

/// False easting applied in every UTM zone, in meters.
pub const UTM_FALSE_EASTING: f64 = 500_000.0;

/// A UTM longitudinal zone, numbered 1 through 60 from the antimeridian
/// eastwards, each 6° of longitude wide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UtmZone(u8);

impl UtmZone {
    /// The zone containing the given longitude (in degrees).
    ///
    /// Uses `⌊(lon + 180) / 6⌋ + 1`, clamped into [1, 60] so the boundary
    /// value +180° (which the raw formula sends to 61) lands in zone 60
    /// instead of failing.
    pub fn for_lon(lon: f64) -> Self {
        let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
        Self(zone.clamp(1, 60) as u8)
    }

    /// A zone from its number; `None` unless `number` is in [1, 60].
    pub fn try_new(number: u8) -> Option<Self> {
        (1..=60).contains(&number).then_some(Self(number))
    }

    /// The zone number, 1 through 60.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Longitude of the zone's central meridian, in degrees.
    pub fn central_meridian(&self) -> f64 {
        f64::from(self.0) * 6.0 - 183.0
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which half of the globe a point is on, deciding the false northing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    /// Latitudes >= 0.
    North,
    /// Latitudes < 0.
    South,
}

impl Hemisphere {
    /// Hemisphere of the given latitude. The equator counts as north.
    pub fn for_lat(lat: f64) -> Self {
        if lat < 0.0 {
            Self::South
        } else {
            Self::North
        }
    }

    /// False northing for this hemisphere, in meters.
    pub fn false_northing(&self) -> f64 {
        match self {
            Self::North => 0.0,
            Self::South => 10_000_000.0,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "N"),
            Self::South => write!(f, "S"),
        }
    }
}

/// Forward/inverse transform between WGS84 geographic coordinates and the
/// metric coordinates of one UTM zone.
///
/// Transverse Mercator on the WGS84 ellipsoid with the standard zone
/// parameters: central meridian per [`UtmZone::central_meridian`], scale
/// [`UTM_SCALE_FACTOR`], false easting [`UTM_FALSE_EASTING`], false northing
/// per [`Hemisphere::false_northing`].
#[derive(Debug)]
pub struct UtmProjection {
    inner: GeodesyProjection<GeoPoint2d, Point2d>,
    zone: UtmZone,
    hemisphere: Hemisphere,
}

impl UtmProjection {
    /// Builds the projector for one zone and hemisphere.
    pub fn new(zone: UtmZone, hemisphere: Hemisphere) -> Result<Self, ThalesTypesError> {
        let definition = format!(
            "tmerc lon_0={} k_0={UTM_SCALE_FACTOR} x_0={UTM_FALSE_EASTING} y_0={} ellps=WGS84",
            zone.central_meridian(),
            hemisphere.false_northing(),
        );

        Ok(Self {
            inner: GeodesyProjection::new(&definition)?,
            zone,
            hemisphere,
        })
    }

    /// The zone this projector serves.
    pub fn zone(&self) -> UtmZone {
        self.zone
    }

    /// The hemisphere this projector serves.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }
}

impl Projection for UtmProjection {
    type InPoint = GeoPoint2d;
    type OutPoint = Point2d;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.project(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.unproject(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::latlon;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zone_from_longitude() {
        assert_eq!(UtmZone::for_lon(51.389).number(), 39);
        assert_eq!(UtmZone::for_lon(0.0).number(), 31);
        assert_eq!(UtmZone::for_lon(-180.0).number(), 1);
        assert_eq!(UtmZone::for_lon(-0.0001).number(), 30);
        // +180° would be zone 61 by the raw formula; clamped instead.
        assert_eq!(UtmZone::for_lon(180.0).number(), 60);
    }

    #[test]
    fn central_meridians() {
        assert_abs_diff_eq!(UtmZone::for_lon(51.389).central_meridian(), 51.0);
        assert_abs_diff_eq!(UtmZone::for_lon(0.0).central_meridian(), 3.0);
        assert_abs_diff_eq!(UtmZone::for_lon(-177.0).central_meridian(), -177.0);
    }

    #[test]
    fn zone_numbers_are_bounded() {
        assert_eq!(UtmZone::try_new(0), None);
        assert_eq!(UtmZone::try_new(61), None);
        assert_eq!(UtmZone::try_new(39).map(|z| z.number()), Some(39));
    }

    #[test]
    fn northern_point_projects_into_plausible_range() {
        let zone = UtmZone::for_lon(51.389);
        let projection =
            UtmProjection::new(zone, Hemisphere::North).expect("projector construction");

        let projected = projection.project(&latlon!(35.6892, 51.389)).expect("projects");
        // ~0.39° east of the zone 39 central meridian at ~35.7°N.
        assert!(projected.x > 530_000.0 && projected.x < 540_000.0);
        assert!(projected.y > 3_940_000.0 && projected.y < 3_960_000.0);
    }

    #[test]
    fn southern_hemisphere_gets_false_northing() {
        let zone = UtmZone::for_lon(18.4241);
        let projection =
            UtmProjection::new(zone, Hemisphere::South).expect("projector construction");

        // Cape Town: northing counts down from 10 000 km.
        let projected = projection.project(&latlon!(-33.9249, 18.4241)).expect("projects");
        assert!(projected.y > 6_200_000.0 && projected.y < 6_300_000.0);
        assert!(projected.x > 200_000.0 && projected.x < 300_000.0);
    }

    #[test]
    fn round_trip_restores_coordinates() {
        let projection = UtmProjection::new(
            UtmZone::for_lon(51.389),
            Hemisphere::North,
        )
        .expect("projector construction");

        let original = latlon!(35.6892, 51.389);
        let projected = projection.project(&original).expect("projects");
        let restored = projection.unproject(&projected).expect("unprojects");

        assert_abs_diff_eq!(restored.lat(), original.lat(), epsilon = 1e-8);
        assert_abs_diff_eq!(restored.lon(), original.lon(), epsilon = 1e-8);
    }
}
