use tracing::trace;

use crate::math::{clamp_to_span, point_to_segment_distance, Point2};
use crate::model::{OpeningKind, Room, WallOpening};
use crate::topology::{WallRef, WallSegment};

/// Where a placement click landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningPlacement {
    /// The nearest wall.
    pub wall: WallRef,
    /// Clamped center position along that wall.
    pub position: f64,
    /// Distance from the click to the wall.
    pub distance: f64,
}

impl OpeningPlacement {
    /// Builds the opening this placement describes.
    #[must_use]
    pub fn into_opening(self, kind: OpeningKind) -> WallOpening {
        WallOpening::new(kind, self.wall, self.position)
    }
}

/// Resolves a free-form click into an opening on the nearest wall.
pub struct PlaceOpening {
    kind: OpeningKind,
    point: Point2,
}

impl PlaceOpening {
    /// Creates a new `PlaceOpening` query for a click at `point` (room space).
    #[must_use]
    pub fn new(kind: OpeningKind, point: Point2) -> Self {
        Self { kind, point }
    }

    /// Resolves against the room's current placement candidates.
    #[must_use]
    pub fn execute(&self, room: &Room) -> Option<OpeningPlacement> {
        self.resolve(&room.placement_candidates())
    }

    /// Picks the candidate with the smallest distance to the click.
    ///
    /// Exact ties go to the earlier candidate. The position is clamped to
    /// `[half width, length - half width]`. Returns `None` for an empty
    /// candidate list rather than falling back to some default wall.
    #[must_use]
    pub fn resolve(&self, candidates: &[WallSegment]) -> Option<OpeningPlacement> {
        let half = self.kind.half_width();
        let mut best: Option<OpeningPlacement> = None;

        for seg in candidates {
            let proj = point_to_segment_distance(&self.point, &seg.start, &seg.end);
            let position = clamp_to_span(proj.position, half, seg.length());
            trace!(wall = %seg.id, distance = proj.distance, position, "placement candidate");
            if best.map_or(true, |b| proj.distance < b.distance) {
                best = Some(OpeningPlacement {
                    wall: seg.id,
                    position,
                    distance: proj.distance,
                });
            }
        }
        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Room;
    use crate::topology::{InteriorWall, WallSide};

    #[test]
    fn top_center_click_lands_on_top_wall() {
        let room = Room::new(400.0, 500.0);
        let p = PlaceOpening::new(OpeningKind::Window, Point2::new(200.0, 0.0))
            .execute(&room)
            .unwrap();
        assert_eq!(p.wall, WallRef::Side(WallSide::Top));
        assert!((p.position - 200.0).abs() < 1e-12);
    }

    #[test]
    fn click_near_corner_is_clamped() {
        let room = Room::new(400.0, 500.0);
        let p = PlaceOpening::new(OpeningKind::Door, Point2::new(10.0, 480.0))
            .execute(&room)
            .unwrap();
        // Left wall is 10cm away, bottom wall 20cm.
        assert_eq!(p.wall, WallRef::Side(WallSide::Left));
        assert!((p.position - 455.0).abs() < 1e-12);
    }

    #[test]
    fn closer_interior_wall_beats_outer_wall() {
        let mut room = Room::new(400.0, 500.0);
        let iw = room.add_interior_wall(InteriorWall::new(
            Point2::new(50.0, 50.0),
            Point2::new(50.0, 250.0),
        ));
        let p = PlaceOpening::new(OpeningKind::Door, Point2::new(40.0, 150.0))
            .execute(&room)
            .unwrap();
        assert_eq!(p.wall, WallRef::Interior(iw));
        assert!((p.position - 100.0).abs() < 1e-12);
    }

    #[test]
    fn exact_tie_goes_to_earlier_candidate() {
        let mut room = Room::new(400.0, 500.0);
        // Interior wall at x = 40; click at x = 20 is 20cm from it and from the left side.
        let iw = room.add_interior_wall(InteriorWall::new(
            Point2::new(40.0, 100.0),
            Point2::new(40.0, 400.0),
        ));
        let p = PlaceOpening::new(OpeningKind::Window, Point2::new(20.0, 250.0))
            .execute(&room)
            .unwrap();
        assert_eq!(p.wall, WallRef::Interior(iw));

        let sides = [
            crate::topology::rectangle_side(WallSide::Left, 400.0, 500.0),
            room.interior_segments()[0],
        ];
        let p = PlaceOpening::new(OpeningKind::Window, Point2::new(20.0, 250.0))
            .resolve(&sides)
            .unwrap();
        assert_eq!(p.wall, WallRef::Side(WallSide::Left));
    }

    #[test]
    fn polygon_segments_are_candidates() {
        let mut room = Room::new(400.0, 500.0);
        room.add_chain(vec![
            Point2::new(0.0, 0.0),
            Point2::new(600.0, 0.0),
            Point2::new(600.0, 300.0),
        ]);
        let p = PlaceOpening::new(OpeningKind::BalconyDoor, Point2::new(590.0, 20.0))
            .execute(&room)
            .unwrap();
        assert_eq!(
            p.wall,
            WallRef::Chain {
                chain: 0,
                segment: 1
            }
        );
        assert!((p.position - 50.0).abs() < 1e-12);
    }

    #[test]
    fn empty_candidates_place_nothing() {
        let p = PlaceOpening::new(OpeningKind::Window, Point2::new(0.0, 0.0)).resolve(&[]);
        assert!(p.is_none());
    }
}
