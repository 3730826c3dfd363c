use super::wall::{WallRef, WallSegment};
use crate::math::Point2;

/// An ordered polyline of room-space points drawn as one continuous wall run.
///
/// Only chains with at least two points are ever stored.
pub type WallChain = Vec<Point2>;

/// Flattens every chain with at least two points into consecutive segments.
///
/// Output order is chain order, then segment order within each chain.
/// Chains with fewer than two points are skipped. Segment ids are
/// `WallRef::Chain { chain, segment }` using the chain's index in `chains`,
/// so skipped chains do not shift the ids of later ones.
#[must_use]
pub fn derive_segments(chains: &[WallChain]) -> Vec<WallSegment> {
    chains
        .iter()
        .enumerate()
        .filter(|(_, pts)| pts.len() >= 2)
        .flat_map(|(c, pts)| {
            pts.windows(2).enumerate().map(move |(s, w)| {
                WallSegment::new(
                    WallRef::Chain {
                        chain: c,
                        segment: s,
                    },
                    w[0],
                    w[1],
                )
            })
        })
        .collect()
}

/// Returns `true` iff any chain has at least two points.
#[must_use]
pub fn is_polygon_mode(chains: &[WallChain]) -> bool {
    chains.iter().any(|c| c.len() >= 2)
}

/// Looks up one chain segment without deriving the whole list.
#[must_use]
pub fn chain_segment(chains: &[WallChain], chain: usize, segment: usize) -> Option<WallSegment> {
    let pts = chains.get(chain)?;
    let start = *pts.get(segment)?;
    let end = *pts.get(segment + 1)?;
    Some(WallSegment::new(WallRef::Chain { chain, segment }, start, end))
}
