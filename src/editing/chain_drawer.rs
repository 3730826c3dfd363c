use tracing::trace;

use crate::math::{nearest_point, point_distance, snap_to_grid, Point2};
use crate::topology::WallChain;

/// What a click did to the chain being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainStep {
    /// A point was appended.
    Extended(Point2),
    /// The click landed on the first point and closed the chain. The chain
    /// is returned for saving; the closing point is not part of it.
    Closed(WallChain),
}

/// Multi-click wall chain construction.
///
/// Holds the in-progress chain while the chain tool is active. Finishing a
/// chain does not end the tool: the drawer is reset and ready for the next
/// chain, only [`ChainDrawer::escape`] leaves drawing altogether.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainDrawer {
    points: Vec<Point2>,
    preview: Option<Point2>,
}

impl ChainDrawer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points placed so far.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The rubber-band end point under the pointer, if any.
    #[must_use]
    pub fn preview(&self) -> Option<Point2> {
        self.preview
    }

    /// Snaps a room-space point to the grid, then onto an already placed
    /// point of this chain within `threshold`. The earliest placed point wins.
    fn resolve(&self, point: &Point2, grid: f64, threshold: f64) -> Point2 {
        let snapped = snap_to_grid(point, grid);
        match nearest_point(&snapped, &self.points, threshold) {
            Some((index, existing)) => {
                trace!(index, "snapped to existing chain point");
                existing
            }
            None => snapped,
        }
    }

    /// Handles a click at `point` (room space).
    pub fn click(&mut self, point: &Point2, grid: f64, threshold: f64) -> ChainStep {
        let p = self.resolve(point, grid, threshold);

        if self.points.len() >= 3 && point_distance(&p, &self.points[0]) < threshold {
            trace!(points = self.points.len(), "chain closed on first point");
            let chain = std::mem::take(&mut self.points);
            self.preview = None;
            return ChainStep::Closed(chain);
        }

        trace!(x = p.x, y = p.y, "chain point added");
        self.points.push(p);
        ChainStep::Extended(p)
    }

    /// Handles a double click.
    ///
    /// A double click arrives after two clicks at the same spot, so the
    /// duplicate last point is dropped before finishing.
    pub fn double_click(&mut self) -> Option<WallChain> {
        self.points.pop();
        self.finish()
    }

    /// Ends the current chain and starts a fresh one.
    ///
    /// Returns the chain when it has at least two points; shorter chains are
    /// discarded.
    pub fn finish(&mut self) -> Option<WallChain> {
        let chain = std::mem::take(&mut self.points);
        self.preview = None;
        if chain.len() >= 2 {
            Some(chain)
        } else {
            trace!(points = chain.len(), "chain too short, discarded");
            None
        }
    }

    /// Discards the in-progress chain.
    pub fn escape(&mut self) {
        self.points.clear();
        self.preview = None;
    }

    /// Updates the preview point for a pointer at `point` (room space).
    pub fn pointer_move(&mut self, point: &Point2, grid: f64, threshold: f64) -> Point2 {
        let p = self.resolve(point, grid, threshold);
        self.preview = Some(p);
        p
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const GRID: f64 = 10.0;
    const SNAP: f64 = 20.0;

    fn click(d: &mut ChainDrawer, x: f64, y: f64) -> ChainStep {
        d.click(&Point2::new(x, y), GRID, SNAP)
    }

    #[test]
    fn clicks_are_grid_snapped() {
        let mut d = ChainDrawer::new();
        assert_eq!(click(&mut d, 3.0, 47.0), ChainStep::Extended(Point2::new(0.0, 50.0)));
        assert_eq!(d.points(), &[Point2::new(0.0, 50.0)]);
    }

    #[test]
    fn closing_click_is_not_appended() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        click(&mut d, 300.0, 0.0);
        click(&mut d, 300.0, 300.0);
        let step = click(&mut d, 8.0, 6.0);
        assert_eq!(
            step,
            ChainStep::Closed(vec![
                Point2::new(0.0, 0.0),
                Point2::new(300.0, 0.0),
                Point2::new(300.0, 300.0),
            ])
        );
        assert!(d.points().is_empty());
    }

    #[test]
    fn two_points_cannot_close() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        click(&mut d, 300.0, 0.0);
        // Snaps onto the first point but is appended as a vertex.
        assert_eq!(click(&mut d, 5.0, 5.0), ChainStep::Extended(Point2::new(0.0, 0.0)));
        assert_eq!(d.points().len(), 3);
    }

    #[test]
    fn snap_prefers_earliest_point() {
        let mut d = ChainDrawer::new();
        click(&mut d, 100.0, 100.0);
        click(&mut d, 110.0, 100.0);
        // Both points are within the threshold; the first one placed wins.
        assert_eq!(
            click(&mut d, 110.0, 110.0),
            ChainStep::Extended(Point2::new(100.0, 100.0))
        );
    }

    #[test]
    fn double_click_drops_duplicate_point() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        click(&mut d, 200.0, 0.0);
        click(&mut d, 200.0, 0.0);
        let chain = d.double_click().unwrap();
        assert_eq!(chain, vec![Point2::new(0.0, 0.0), Point2::new(200.0, 0.0)]);
        assert!(d.points().is_empty());
    }

    #[test]
    fn short_chain_is_discarded() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        click(&mut d, 0.0, 0.0);
        assert!(d.double_click().is_none());
        assert!(d.finish().is_none());
    }

    #[test]
    fn escape_discards_points() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        d.pointer_move(&Point2::new(52.0, 0.0), GRID, SNAP);
        d.escape();
        assert!(d.points().is_empty());
        assert!(d.preview().is_none());
    }

    #[test]
    fn preview_snaps_like_clicks() {
        let mut d = ChainDrawer::new();
        click(&mut d, 0.0, 0.0);
        assert_eq!(
            d.pointer_move(&Point2::new(7.0, 9.0), GRID, SNAP),
            Point2::new(0.0, 0.0)
        );
        assert_eq!(
            d.pointer_move(&Point2::new(96.0, 3.0), GRID, SNAP),
            Point2::new(100.0, 0.0)
        );
        assert_eq!(d.preview(), Some(Point2::new(100.0, 0.0)));
    }
}
