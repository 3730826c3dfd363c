pub mod distance_2d;
pub mod snap;
pub mod view;

pub use distance_2d::{point_distance, point_to_segment_distance, SegmentProjection};
pub use snap::{nearest_point, snap_to_grid};
pub use view::{Bounds2, ViewTransform};

/// 2D point type, in room-space centimeters.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Squared segment length (cm²) below which a segment is treated as a point.
pub const DEGENERATE_LENGTH_SQ: f64 = 0.001;

/// Extent below which emitted wall geometry is considered empty.
pub const GEOMETRY_EPSILON: f64 = 0.1;

/// Clamps `value` into `[half, length - half]`.
///
/// When the span is inverted (the wall is shorter than the opening) the lower
/// bound wins, so the result is always `half`.
#[must_use]
pub fn clamp_to_span(value: f64, half: f64, length: f64) -> f64 {
    value.min(length - half).max(half)
}
