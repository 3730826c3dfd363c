pub mod boundary;
pub mod chain;
pub mod interior;
pub mod wall;

pub use boundary::{rectangle_side, rectangle_sides, walls_to_render, BoundaryMode};
pub use chain::{chain_segment, derive_segments, is_polygon_mode, WallChain};
pub use interior::{InteriorWall, InteriorWallId};
pub use wall::{WallRef, WallSegment, WallSide};
