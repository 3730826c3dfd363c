use super::{point_distance, Point2};

/// Rounds each coordinate to the nearest multiple of `grid`.
#[must_use]
pub fn snap_to_grid(p: &Point2, grid: f64) -> Point2 {
    Point2::new((p.x / grid).round() * grid, (p.y / grid).round() * grid)
}

/// Returns the index and value of the first candidate strictly closer than
/// `threshold` to `p`.
///
/// This is a linear scan that stops at the first hit, not a closest-point
/// search: the earliest candidate wins, which keeps polygon closing
/// deterministic when several drawn points lie within the threshold.
#[must_use]
pub fn nearest_point(p: &Point2, candidates: &[Point2], threshold: f64) -> Option<(usize, Point2)> {
    candidates
        .iter()
        .enumerate()
        .find(|(_, c)| point_distance(p, c) < threshold)
        .map(|(i, c)| (i, *c))
}
