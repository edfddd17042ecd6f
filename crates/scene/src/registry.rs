use std::cmp::Ordering;

use foundation::GeoPoint;

/// Deterministic set of currently selected places, unique by name.
///
/// Ordering contract:
/// - `all()` yields points in descending latitude, then ascending longitude,
///   then name.
/// - The order is re-established on every mutation, so the same membership
///   always produces the same sequence. Label placement and the share codec
///   both depend on this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerSet {
    points: Vec<GeoPoint>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.iter().any(|p| p.name == name)
    }

    /// Adds `point` to the set.
    ///
    /// Returns `true` if the set changed; a point whose name is already
    /// present is silently ignored.
    pub fn add(&mut self, point: GeoPoint) -> bool {
        if self.contains(&point.name) {
            return false;
        }
        self.points.push(point);
        self.resort();
        true
    }

    /// Removes the point named `name`.
    ///
    /// Returns `true` if the set changed; an unknown name is silently
    /// ignored.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.name != name);
        if self.points.len() == before {
            return false;
        }
        self.resort();
        true
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Iterates points in the fixed sort order.
    pub fn all(&self) -> impl Iterator<Item = &GeoPoint> {
        self.points.iter()
    }

    fn resort(&mut self) {
        self.points.sort_by(marker_order);
    }
}

fn marker_order(a: &GeoPoint, b: &GeoPoint) -> Ordering {
    b.lat
        .partial_cmp(&a.lat)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.lon.partial_cmp(&b.lon).unwrap_or(Ordering::Equal))
        .then_with(|| a.name.cmp(&b.name))
}
