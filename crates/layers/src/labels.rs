use std::f64::consts::TAU;

use foundation::{AnchorPosition, LabelSize, Rect};

/// Clearance between a label rect and its anchor, in surface units.
pub const LABEL_MARGIN: f64 = 10.0;

/// Number of ring positions tried around the anchor.
pub const RING_CANDIDATES: usize = 12;

const ANGLE_STEP: f64 = TAU / RING_CANDIDATES as f64;
// Half a step back so candidate 0 sits below-and-right of the anchor,
// the usual starting spot for point labels.
const ANGLE_BIAS: f64 = -ANGLE_STEP / 2.0;

/// A label rect committed earlier in the current render pass.
///
/// The accumulated set of these is the collision context for every later
/// placement within the same pass; it is rebuilt from scratch each pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub owner: String,
    pub bounds: Rect,
}

/// Accepted placement for one label.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Candidate ring point the label is attached to.
    pub position: AnchorPosition,
    pub bounds: Rect,
}

/// Chooses a label position around `anchor` that avoids `existing`.
///
/// Candidates lie on an ellipse with semi-axes `width/2 + LABEL_MARGIN` and
/// `height/2 + LABEL_MARGIN`, walked in a fixed order. The first candidate
/// whose rect overlaps nothing in `existing` wins; if all twelve collide the
/// last one tried is accepted anyway, trading overlap for a labeled marker.
///
/// Deterministic: no randomness, and for a fixed input sequence the output
/// is bit-identical across runs. Labels already committed are never revisited,
/// so the result depends on marker processing order.
pub fn place(anchor: AnchorPosition, size: LabelSize, existing: &[PlacedLabel]) -> Placement {
    let rx = size.width / 2.0 + LABEL_MARGIN;
    let ry = size.height / 2.0 + LABEL_MARGIN;

    let mut last = candidate(anchor, size, rx, ry, 0);
    for i in 0..RING_CANDIDATES {
        let tried = candidate(anchor, size, rx, ry, i);
        if !existing.iter().any(|p| tried.bounds.intersects(&p.bounds)) {
            return tried;
        }
        last = tried;
    }
    last
}

fn candidate(anchor: AnchorPosition, size: LabelSize, rx: f64, ry: f64, i: usize) -> Placement {
    let theta = ANGLE_BIAS + ANGLE_STEP * i as f64;
    let cx = anchor.x - rx * theta.sin();
    let cy = anchor.y + ry * theta.cos();
    // Rect is horizontally centered on the ring point, top edge on it.
    let bounds = Rect::new(cx - size.width / 2.0, cy, size.width, size.height);
    Placement {
        position: AnchorPosition::new(cx, cy),
        bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> LabelSize {
        LabelSize::new(40.0, 14.0)
    }

    #[test]
    fn first_candidate_is_below_and_right_of_the_anchor() {
        let anchor = AnchorPosition::new(100.0, 100.0);
        let placed = place(anchor, size(), &[]);
        assert!(placed.position.x > anchor.x);
        assert!(placed.position.y > anchor.y);
        assert!(placed.bounds.y > anchor.y);
    }

    #[test]
    fn first_candidate_clears_the_marker_footprint() {
        // Marker circle of radius 4 centered on the anchor.
        let anchor = AnchorPosition::new(300.0, 400.0);
        let marker = Rect::new(anchor.x - 4.0, anchor.y - 4.0, 8.0, 8.0);
        let placed = place(anchor, size(), &[]);
        assert!(!placed.bounds.intersects(&marker));
    }

    #[test]
    fn placement_is_deterministic() {
        let anchor = AnchorPosition::new(250.0, 250.0);
        let existing = vec![PlacedLabel {
            owner: "other".to_string(),
            bounds: Rect::new(240.0, 255.0, 60.0, 20.0),
        }];
        let a = place(anchor, size(), &existing);
        let b = place(anchor, size(), &existing);
        assert_eq!(a, b);
    }

    #[test]
    fn second_label_at_the_same_anchor_avoids_the_first() {
        let anchor = AnchorPosition::new(200.0, 200.0);
        let first = place(anchor, size(), &[]);
        let context = vec![PlacedLabel {
            owner: "first".to_string(),
            bounds: first.bounds,
        }];
        let second = place(anchor, size(), &context);
        assert!(!second.bounds.intersects(&first.bounds));
        assert_ne!(second.position, first.position);
    }

    #[test]
    fn ring_walk_yields_pairwise_disjoint_rects_while_room_remains() {
        // Three labels on the same anchor; the ring has room for all of them.
        let anchor = AnchorPosition::new(500.0, 500.0);
        let mut context: Vec<PlacedLabel> = Vec::new();
        for i in 0..3 {
            let placed = place(anchor, size(), &context);
            for prior in &context {
                assert!(
                    !placed.bounds.intersects(&prior.bounds),
                    "label {i} overlaps {}",
                    prior.owner
                );
            }
            context.push(PlacedLabel {
                owner: format!("label-{i}"),
                bounds: placed.bounds,
            });
        }
    }

    #[test]
    fn exhausted_ring_falls_back_to_the_last_candidate() {
        let anchor = AnchorPosition::new(100.0, 100.0);
        // One obstacle large enough to block the whole ring.
        let blocker = vec![PlacedLabel {
            owner: "blocker".to_string(),
            bounds: Rect::new(0.0, 0.0, 400.0, 400.0),
        }];
        let placed = place(anchor, size(), &blocker);

        // Overlap is permitted rather than leaving the marker unlabeled,
        // and the accepted rect is exactly the final ring position.
        assert!(placed.bounds.intersects(&blocker[0].bounds));
        let rx = size().width / 2.0 + LABEL_MARGIN;
        let ry = size().height / 2.0 + LABEL_MARGIN;
        let theta = ANGLE_BIAS + ANGLE_STEP * (RING_CANDIDATES - 1) as f64;
        let cx = anchor.x - rx * theta.sin();
        let cy = anchor.y + ry * theta.cos();
        assert_eq!(placed.position, AnchorPosition::new(cx, cy));
    }
}
