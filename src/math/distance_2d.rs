use super::{Point2, DEGENERATE_LENGTH_SQ};

/// Result of projecting a point onto a bounded segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Distance from the query point to the closest point on the segment.
    pub distance: f64,
    /// Distance along the segment, from its start, of the closest point.
    /// Always within `[0, segment length]`.
    pub position: f64,
}

/// Euclidean distance between two points.
#[must_use]
pub fn point_distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Projects point `p` onto the segment `a → b`.
///
/// The projection is clamped to the segment itself, not the infinite line.
/// A degenerate segment (squared length below [`DEGENERATE_LENGTH_SQ`])
/// reports the point-to-point distance to `a` and a position of `0`.
#[must_use]
pub fn point_to_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> SegmentProjection {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < DEGENERATE_LENGTH_SQ {
        return SegmentProjection {
            distance: point_distance(p, a),
            position: 0.0,
        };
    }

    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;

    SegmentProjection {
        distance: point_distance(p, &closest),
        position: t * len_sq.sqrt(),
    }
}
