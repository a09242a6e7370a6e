//! Pooling of per-zone UTM projectors.

use std::sync::Arc;

use ahash::{HashMap, HashMapExt};
use log::debug;
use parking_lot::RwLock;
use thales_types::cartesian::Point2d;
use thales_types::geo::projection::{Hemisphere, Projection, UtmProjection, UtmZone};
use thales_types::geo::{GeoPoint, GeoPoint2d};
use thales_types::ThalesTypesError;

/// Lazily filled mapping from UTM zone to a ready-to-use projector.
///
/// Constructing a transform means compiling an operator definition, so
/// projectors are built once per `(zone, hemisphere)` pair and shared from
/// then on. There is no global instance; the pool is owned by whoever
/// analyzes triangles and may be used from multiple threads. Lookups take a
/// read lock, the first requester of a zone takes the write lock and
/// inserts, and a concurrent duplicate insert is discarded in favor of the
/// value already present. Entries are never evicted; the key space is
/// bounded by 60 zones per hemisphere.
#[derive(Default)]
pub struct UtmProjectionPool {
    projectors: RwLock<HashMap<(UtmZone, Hemisphere), Arc<UtmProjection>>>,
}

impl UtmProjectionPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            projectors: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct projectors constructed so far.
    pub fn len(&self) -> usize {
        self.projectors.read().len()
    }

    /// True if no projector has been constructed yet.
    pub fn is_empty(&self) -> bool {
        self.projectors.read().is_empty()
    }

    /// The projector for the given zone and hemisphere, constructed on
    /// first use.
    pub fn projector(
        &self,
        zone: UtmZone,
        hemisphere: Hemisphere,
    ) -> Result<Arc<UtmProjection>, ThalesTypesError> {
        if let Some(projector) = self.projectors.read().get(&(zone, hemisphere)) {
            return Ok(projector.clone());
        }

        // Built outside the write lock; if another thread won the race the
        // freshly built projector is dropped and the winner is returned.
        let projector = Arc::new(UtmProjection::new(zone, hemisphere)?);
        let mut projectors = self.projectors.write();
        let entry = projectors.entry((zone, hemisphere)).or_insert_with(|| {
            debug!("constructed UTM projector for zone {zone}{hemisphere}");
            projector
        });

        Ok(entry.clone())
    }

    /// Projects a geographic point into the metric coordinates of its UTM
    /// zone, returning the planar point and the zone it fell into.
    pub fn project(&self, point: &GeoPoint2d) -> Result<(Point2d, UtmZone), ThalesTypesError> {
        let zone = UtmZone::for_lon(point.lon());
        let hemisphere = Hemisphere::for_lat(point.lat());

        let projector = self.projector(zone, hemisphere)?;
        let projected =
            projector
                .project(point)
                .ok_or(ThalesTypesError::ProjectionApply {
                    lat: point.lat(),
                    lon: point.lon(),
                })?;

        Ok((projected, zone))
    }
}
