use std::collections::BTreeMap;

use thales_types::cartesian::{Point2d, Triangle};

use crate::error::ThalesError;

/// In-memory id→triangle storage behind the legacy CRUD endpoints.
///
/// Ids are assigned as highest-existing-plus-one starting at 1, matching
/// the behavior of the service this replaces (so deleting the newest
/// triangle frees its id for reuse). Nothing is persisted; the store lives
/// and dies with its owner.
#[derive(Debug, Default)]
pub struct TriangleStore {
    triangles: BTreeMap<u64, Triangle<Point2d>>,
}

impl TriangleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a triangle and returns its assigned id.
    pub fn add(&mut self, triangle: Triangle<Point2d>) -> u64 {
        let id = self
            .triangles
            .keys()
            .next_back()
            .map_or(1, |highest| highest + 1);
        self.triangles.insert(id, triangle);
        id
    }

    /// Looks a triangle up by id.
    pub fn get(&self, id: u64) -> Option<&Triangle<Point2d>> {
        self.triangles.get(&id)
    }

    /// Replaces the triangle stored under `id`.
    pub fn update(&mut self, id: u64, triangle: Triangle<Point2d>) -> Result<(), ThalesError> {
        match self.triangles.get_mut(&id) {
            Some(existing) => {
                *existing = triangle;
                Ok(())
            }
            None => Err(ThalesError::TriangleNotFound(id)),
        }
    }

    /// Removes the triangle stored under `id`.
    pub fn delete(&mut self, id: u64) -> Result<(), ThalesError> {
        self.triangles
            .remove(&id)
            .map(|_| ())
            .ok_or(ThalesError::TriangleNotFound(id))
    }

    /// Number of stored triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterates over all stored triangles in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Triangle<Point2d>)> {
        self.triangles.iter().map(|(id, triangle)| (*id, triangle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn right_triangle() -> Triangle<Point2d> {
        Triangle::new(
            Point2d::new(0.0, 0.0),
            Point2d::new(3.0, 0.0),
            Point2d::new(0.0, 4.0),
        )
    }

    #[test]
    fn ids_count_up_from_one() {
        let mut store = TriangleStore::new();
        assert_eq!(store.add(right_triangle()), 1);
        assert_eq!(store.add(right_triangle()), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleting_the_newest_frees_its_id() {
        let mut store = TriangleStore::new();
        store.add(right_triangle());
        let second = store.add(right_triangle());
        store.delete(second).expect("delete stored triangle");

        assert_eq!(store.add(right_triangle()), second);
    }

    #[test]
    fn stored_triangles_keep_their_metrics() {
        let mut store = TriangleStore::new();
        let id = store.add(right_triangle());

        let stored = store.get(id).expect("stored triangle");
        assert_abs_diff_eq!(stored.perimeter(), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stored.area(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn update_replaces_the_triangle() {
        let mut store = TriangleStore::new();
        let id = store.add(right_triangle());

        let bigger = Triangle::new(
            Point2d::new(0.0, 0.0),
            Point2d::new(6.0, 0.0),
            Point2d::new(0.0, 8.0),
        );
        store.update(id, bigger).expect("update stored triangle");

        let stored = store.get(id).expect("stored triangle");
        assert_abs_diff_eq!(stored.perimeter(), 24.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_ids_are_reported() {
        let mut store = TriangleStore::new();
        assert!(store.get(7).is_none());
        assert_matches!(store.update(7, right_triangle()), Err(ThalesError::TriangleNotFound(7)));
        assert_matches!(store.delete(7), Err(ThalesError::TriangleNotFound(7)));
        assert!(store.is_empty());
    }
}
