use std::fmt;

use serde::{Deserialize, Serialize};

use super::interior::InteriorWallId;
use crate::math::{Point2, Vector2};

/// One of the four sides of the nominal room rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl WallSide {
    /// Canonical side order used everywhere sides are enumerated.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Returns `true` for the sides that run along the x axis.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Stable reference to a wall an opening can be anchored to.
///
/// Chain references are derived from `(chain index, segment index)` so they
/// stay valid across re-derivation and reloads as long as the chain list
/// itself is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallRef {
    /// A side of the rectangle-mode room.
    Side(WallSide),
    /// Segment `segment` of drawn chain `chain`.
    Chain { chain: usize, segment: usize },
    /// A freestanding interior wall.
    Interior(InteriorWallId),
}

impl From<WallSide> for WallRef {
    fn from(side: WallSide) -> Self {
        Self::Side(side)
    }
}

impl From<InteriorWallId> for WallRef {
    fn from(id: InteriorWallId) -> Self {
        Self::Interior(id)
    }
}

impl fmt::Display for WallRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Side(side) => f.write_str(side.as_str()),
            Self::Chain { chain, segment } => write!(f, "chain-{chain}-seg-{segment}"),
            Self::Interior(id) => write!(f, "interior-{}", slotmap::Key::data(id).as_ffi()),
        }
    }
}

/// One straight wall piece, derived from the topology and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub id: WallRef,
    pub start: Point2,
    pub end: Point2,
}

impl WallSegment {
    #[must_use]
    pub fn new(id: WallRef, start: Point2, end: Point2) -> Self {
        Self { id, start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Unit direction from start to end, or `None` for a degenerate segment.
    #[must_use]
    pub fn direction(&self) -> Option<Vector2> {
        (self.end - self.start).try_normalize(f64::EPSILON)
    }

    /// Point at `position` cm from the start, along the segment.
    #[must_use]
    pub fn point_at(&self, position: f64) -> Point2 {
        match self.direction() {
            Some(dir) => self.start + dir * position,
            None => self.start,
        }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Angle of the segment direction in radians, measured from +x.
    #[must_use]
    pub fn angle(&self) -> f64 {
        let d = self.end - self.start;
        d.y.atan2(d.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ref_display_matches_derivation_ids() {
        let id = WallRef::Chain {
            chain: 2,
            segment: 5,
        };
        assert_eq!(id.to_string(), "chain-2-seg-5");
        assert_eq!(WallRef::Side(WallSide::Left).to_string(), "left");
    }

    #[test]
    fn point_at_walks_along_direction() {
        let seg = WallSegment::new(
            WallRef::Side(WallSide::Top),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 300.0),
        );
        assert_eq!(seg.point_at(120.0), Point2::new(0.0, 120.0));
        assert!((seg.length() - 300.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_point_at_returns_start() {
        let seg = WallSegment::new(
            WallRef::Chain {
                chain: 0,
                segment: 0,
            },
            Point2::new(5.0, 5.0),
            Point2::new(5.0, 5.0),
        );
        assert!(seg.direction().is_none());
        assert_eq!(seg.point_at(50.0), Point2::new(5.0, 5.0));
    }
}
