use tracing::{trace, warn};

use super::build_wall::{BuildWall, WallBuild, WallParams};
use crate::math::{Point2, Point3};
use crate::model::{OpeningId, Room, WallOpening};
use crate::topology::{WallRef, WallSegment};

/// Walls shorter than this (cm) are not built.
const MIN_WALL_LENGTH: f64 = 1.0;

/// One wall's build, placed in room space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWall {
    pub wall: WallRef,
    pub segment: WallSegment,
    /// Base color of the wall body.
    pub color: String,
    pub build: WallBuild,
}

impl PlacedWall {
    /// Rotation about the vertical axis that maps wall-local x onto the segment.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.segment.angle()
    }

    /// Maps a wall-local point (x along the wall from its midpoint, y height)
    /// to room space with z up.
    #[must_use]
    pub fn to_room(&self, local: &Point2) -> Point3 {
        let mid = self.segment.midpoint();
        let (sin, cos) = self.yaw().sin_cos();
        Point3::new(mid.x + local.x * cos, mid.y + local.x * sin, local.y)
    }
}

/// Complete wall geometry of a room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomBuild {
    pub walls: Vec<PlacedWall>,
    /// Openings left out because their wall no longer exists.
    pub dangling: Vec<OpeningId>,
}

/// Builds every visible wall of a room, boundary first, then interior walls.
pub struct BuildRoom {
    params: WallParams,
}

impl BuildRoom {
    /// Creates a new `BuildRoom` operation.
    #[must_use]
    pub fn new(params: WallParams) -> Self {
        Self { params }
    }

    /// Executes the build.
    ///
    /// Hidden walls and walls shorter than 1cm produce nothing. Openings
    /// whose wall cannot be resolved are skipped and reported in
    /// [`RoomBuild::dangling`].
    #[must_use]
    pub fn execute(&self, room: &Room) -> RoomBuild {
        let mut result = RoomBuild::default();

        for (id, opening) in room.openings() {
            if room.segment(opening.wall).is_none() {
                warn!(wall = %opening.wall, "skipping opening on missing wall");
                result.dangling.push(id);
            }
        }

        let segments = room
            .boundary_walls()
            .into_iter()
            .chain(room.interior_segments());

        for segment in segments {
            let wall = segment.id;
            let length = segment.length();
            if length < MIN_WALL_LENGTH {
                trace!(%wall, length, "degenerate wall skipped");
                continue;
            }

            let openings: Vec<(OpeningId, WallOpening)> =
                room.openings_on(wall).map(|(id, o)| (id, *o)).collect();
            let build = BuildWall::new(length, self.params)
                .with_openings(openings)
                .hidden(room.is_hidden(wall))
                .execute();
            if build.is_empty() {
                trace!(%wall, "hidden wall skipped");
                continue;
            }

            let colors = room.wall_colors();
            let color = match wall {
                WallRef::Side(side) if side.is_horizontal() => colors.horizontal.clone(),
                _ => colors.vertical.clone(),
            };

            result.walls.push(PlacedWall {
                wall,
                segment,
                color,
                build,
            });
        }

        result
    }
}
