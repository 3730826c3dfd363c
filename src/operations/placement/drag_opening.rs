use crate::error::{ModelError, Result};
use crate::math::{clamp_to_span, Point2};
use crate::model::{OpeningId, Room};
use crate::topology::WallRef;

/// Outcome of projecting a dragged opening back onto its wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResult {
    /// Clamped center position along the wall.
    pub position: f64,
    /// Room-space point exactly on the wall where the opening is redrawn.
    pub anchor: Point2,
}

/// Re-projects a dragged opening onto the wall that owns it.
///
/// The raw drag position is never stored: the opening snaps back onto its
/// wall line at a position that keeps it fully on the wall.
pub struct DragOpening {
    opening: OpeningId,
    point: Point2,
}

impl DragOpening {
    /// Creates a new `DragOpening` for a drop at `point` (room space).
    #[must_use]
    pub fn new(opening: OpeningId, point: Point2) -> Self {
        Self { opening, point }
    }

    /// Computes the corrected position without mutating the room.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if the opening is unknown or
    /// its wall is not currently drawn.
    pub fn execute(&self, room: &Room) -> Result<DragResult> {
        let opening = room.opening(self.opening)?;
        let half = opening.half_width();
        let seg = room
            .active_segment(opening.wall)
            .ok_or_else(|| ModelError::EntityNotFound(format!("wall {}", opening.wall)))?;
        let length = seg.length();

        let position = match opening.wall {
            WallRef::Side(side) => {
                let axis = if side.is_horizontal() {
                    self.point.x
                } else {
                    self.point.y
                };
                clamp_to_span(axis, half, length)
            }
            WallRef::Chain { .. } | WallRef::Interior(_) => {
                let d = seg.end - seg.start;
                let len_sq = d.norm_squared();
                if len_sq < crate::math::DEGENERATE_LENGTH_SQ {
                    half
                } else {
                    // Projection onto the infinite line, then clamped in t.
                    let t = (self.point - seg.start).dot(&d) / len_sq;
                    let t = t.min(1.0 - half / length).max(half / length);
                    t * length
                }
            }
        };

        Ok(DragResult {
            position,
            anchor: seg.point_at(position),
        })
    }

    /// Computes the corrected position and writes it back to the opening.
    ///
    /// # Errors
    ///
    /// See [`DragOpening::execute`].
    pub fn apply(&self, room: &mut Room) -> Result<DragResult> {
        let result = self.execute(room)?;
        room.set_opening_position(self.opening, result.position)?;
        Ok(result)
    }
}
