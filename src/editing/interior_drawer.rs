use tracing::trace;

use crate::math::{snap_to_grid, Point2, GEOMETRY_EPSILON};
use crate::topology::InteriorWall;

/// Two-click interior wall construction.
///
/// The first click sets a pending start point, the second emits a wall
/// and clears it. Both ends are grid-snapped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteriorDrawer {
    start: Option<Point2>,
    preview: Option<Point2>,
}

impl InteriorDrawer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending_start(&self) -> Option<Point2> {
        self.start
    }

    #[must_use]
    pub fn preview(&self) -> Option<Point2> {
        self.preview
    }

    /// Handles a click at `point` (room space). Returns the finished wall on
    /// the second click. A second click on the start point emits nothing.
    pub fn click(&mut self, point: &Point2, grid: f64) -> Option<InteriorWall> {
        let p = snap_to_grid(point, grid);
        let Some(start) = self.start.take() else {
            trace!(x = p.x, y = p.y, "interior wall start");
            self.start = Some(p);
            return None;
        };
        self.preview = None;

        let wall = InteriorWall::new(start, p);
        if wall.length() < GEOMETRY_EPSILON {
            trace!("zero-length interior wall skipped");
            return None;
        }
        Some(wall)
    }

    /// Handles Escape. Returns `true` if drawing should end, which happens
    /// only when no start point was pending.
    pub fn escape(&mut self) -> bool {
        self.preview = None;
        self.start.take().is_none()
    }

    pub fn pointer_move(&mut self, point: &Point2, grid: f64) -> Point2 {
        let p = snap_to_grid(point, grid);
        self.preview = Some(p);
        p
    }
}
