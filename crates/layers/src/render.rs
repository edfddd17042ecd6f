use foundation::{MapBounds, SurfaceRect};
use scene::{MarkerSet, RenderSurface};

use crate::labels::{PlacedLabel, place};
use crate::project::project;

/// Rebuilds the marker/label layer from `markers`.
///
/// The layer is cleared unconditionally, then every marker is projected,
/// measured, placed against the labels committed earlier in this pass, and
/// emitted. Nothing survives between passes, so calling this twice with the
/// same set produces the same visible result.
///
/// Returns the labels committed this pass, in marker order.
pub fn render_markers<S: RenderSurface + ?Sized>(
    surface: &mut S,
    markers: &MarkerSet,
    bounds: &MapBounds,
    viewport: &SurfaceRect,
) -> Vec<PlacedLabel> {
    surface.clear_layer();

    let mut committed: Vec<PlacedLabel> = Vec::with_capacity(markers.len());
    for point in markers.all() {
        let anchor = project(point, bounds, viewport);
        let size = surface.measure_text(&point.name);
        let placed = place(anchor, size, &committed);

        surface.create_marker(&point.name, anchor);
        surface.create_label(&point.name, placed.bounds);

        committed.push(PlacedLabel {
            owner: point.name.clone(),
            bounds: placed.bounds,
        });
    }
    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use foundation::{AnchorPosition, GERMANY_BOUNDS, GeoPoint, LabelSize, Rect};

    #[derive(Default)]
    struct RecordingSurface {
        markers: Vec<(String, AnchorPosition)>,
        labels: Vec<(String, Rect)>,
        clears: usize,
    }

    impl RenderSurface for RecordingSurface {
        fn measure_text(&self, text: &str) -> LabelSize {
            LabelSize::new(text.chars().count() as f64 * 8.0, 14.0)
        }

        fn create_marker(&mut self, name: &str, anchor: AnchorPosition) {
            self.markers.push((name.to_string(), anchor));
        }

        fn create_label(&mut self, name: &str, bounds: Rect) {
            self.labels.push((name.to_string(), bounds));
        }

        fn clear_layer(&mut self) {
            self.markers.clear();
            self.labels.clear();
            self.clears += 1;
        }
    }

    fn demo_set() -> MarkerSet {
        let mut set = MarkerSet::new();
        set.add(GeoPoint::new("Berlin", 52.520, 13.405));
        set.add(GeoPoint::new("Hamburg", 53.551, 9.994));
        set.add(GeoPoint::new("Munich", 48.137, 11.575));
        set
    }

    #[test]
    fn emits_one_marker_and_label_per_point_in_fixed_order() {
        let mut surface = RecordingSurface::default();
        let viewport = SurfaceRect::new(0.0, 0.0, 600.0, 800.0);
        let committed = render_markers(&mut surface, &demo_set(), &GERMANY_BOUNDS, &viewport);

        let names: Vec<&str> = surface.markers.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Hamburg", "Berlin", "Munich"]);
        assert_eq!(surface.labels.len(), 3);
        assert_eq!(committed.len(), 3);
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut surface = RecordingSurface::default();
        let viewport = SurfaceRect::new(0.0, 0.0, 600.0, 800.0);
        let set = demo_set();

        let first = render_markers(&mut surface, &set, &GERMANY_BOUNDS, &viewport);
        let markers_after_first = surface.markers.clone();
        let second = render_markers(&mut surface, &set, &GERMANY_BOUNDS, &viewport);

        assert_eq!(first, second);
        assert_eq!(surface.markers, markers_after_first);
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn committed_labels_are_pairwise_disjoint_for_spread_markers() {
        let mut surface = RecordingSurface::default();
        let viewport = SurfaceRect::new(0.0, 0.0, 600.0, 800.0);
        let committed = render_markers(&mut surface, &demo_set(), &GERMANY_BOUNDS, &viewport);

        for (i, a) in committed.iter().enumerate() {
            for b in committed.iter().skip(i + 1) {
                assert!(
                    !a.bounds.intersects(&b.bounds),
                    "{} overlaps {}",
                    a.owner,
                    b.owner
                );
            }
        }
    }

    #[test]
    fn near_coincident_markers_still_get_disjoint_labels() {
        let mut set = MarkerSet::new();
        set.add(GeoPoint::new("Cologne", 50.937, 6.960));
        set.add(GeoPoint::new("Bonn", 50.735, 7.100));
        let mut surface = RecordingSurface::default();
        let viewport = SurfaceRect::new(0.0, 0.0, 600.0, 800.0);

        let committed = render_markers(&mut surface, &set, &GERMANY_BOUNDS, &viewport);
        assert_eq!(committed.len(), 2);
        assert!(!committed[0].bounds.intersects(&committed[1].bounds));
    }
}
