use super::chain::{derive_segments, is_polygon_mode, WallChain};
use super::wall::{WallRef, WallSegment, WallSide};
use crate::math::Point2;

/// How the room boundary is currently represented.
///
/// Always computed from the chain list, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Four implicit walls around `room_width × room_height`.
    Rectangle,
    /// Segments derived from the drawn chains.
    Polygon,
}

impl BoundaryMode {
    #[must_use]
    pub fn of(chains: &[WallChain]) -> Self {
        if is_polygon_mode(chains) {
            Self::Polygon
        } else {
            Self::Rectangle
        }
    }
}

/// Returns the segment for one rectangle side.
///
/// Every side runs along its positive axis, so a position along a side is
/// the room-space x (top, bottom) or y (left, right) of that point.
#[must_use]
pub fn rectangle_side(side: WallSide, width: f64, height: f64) -> WallSegment {
    let (start, end) = match side {
        WallSide::Top => (Point2::new(0.0, 0.0), Point2::new(width, 0.0)),
        WallSide::Right => (Point2::new(width, 0.0), Point2::new(width, height)),
        WallSide::Bottom => (Point2::new(0.0, height), Point2::new(width, height)),
        WallSide::Left => (Point2::new(0.0, 0.0), Point2::new(0.0, height)),
    };
    WallSegment::new(WallRef::Side(side), start, end)
}

/// The four rectangle sides in canonical order.
#[must_use]
pub fn rectangle_sides(width: f64, height: f64) -> [WallSegment; 4] {
    WallSide::ALL.map(|side| rectangle_side(side, width, height))
}

/// The boundary walls to draw and to resolve openings against.
///
/// Rectangle mode yields the four sides; polygon mode yields the derived
/// chain segments. The 2D view and the opening resolver must both use this
/// list, or openings drift away from the walls they were placed on.
#[must_use]
pub fn walls_to_render(chains: &[WallChain], width: f64, height: f64) -> Vec<WallSegment> {
    match BoundaryMode::of(chains) {
        BoundaryMode::Rectangle => rectangle_sides(width, height).to_vec(),
        BoundaryMode::Polygon => derive_segments(chains),
    }
}
