mod build_room;
mod build_wall;

pub use build_room::{BuildRoom, PlacedWall, RoomBuild};
pub use build_wall::{
    BuildWall, DoorPanel, FrameEdge, PieceKind, WallBuild, WallParams, WallPiece,
};
