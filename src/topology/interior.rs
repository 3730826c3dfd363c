use serde::{Deserialize, Serialize};

use super::wall::{WallRef, WallSegment};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for an interior wall in the room store.
    pub struct InteriorWallId;
}

/// A freestanding partition wall, created by a two-click gesture.
///
/// Structurally a segment, but owned and removed independently of the
/// boundary chains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteriorWall {
    pub start: Point2,
    pub end: Point2,
}

impl InteriorWall {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns this wall as a segment carrying its store id.
    #[must_use]
    pub fn segment(&self, id: InteriorWallId) -> WallSegment {
        WallSegment::new(WallRef::Interior(id), self.start, self.end)
    }
}
