use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use tracing::debug;

use super::furniture::{
    Catalog, FurnitureId, FurnitureInstance, FurniturePatch, PlacedFurniture,
};
use super::opening::{OpeningId, WallOpening};
use crate::error::{ModelError, Result};
use crate::math::{clamp_to_span, point_to_segment_distance, Bounds2, Point2};
use crate::topology::{
    chain_segment, derive_segments, is_polygon_mode, rectangle_side, walls_to_render,
    BoundaryMode, InteriorWall, InteriorWallId, WallChain, WallRef, WallSegment, WallSide,
};

/// Base colors of the room's walls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallColors {
    /// Color of walls running along x (top, bottom).
    pub horizontal: String,
    /// Color of all other walls.
    pub vertical: String,
}

impl Default for WallColors {
    fn default() -> Self {
        Self {
            horizontal: "#f2efe9".to_owned(),
            vertical: "#edeae4".to_owned(),
        }
    }
}

/// The persisted editing state of one room.
///
/// Owns every entity (chains, interior walls, openings, furniture) and
/// exposes pure queries plus explicit mutations. The boundary mode is never
/// stored; it is recomputed from the chain list on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Room {
    width: f64,
    height: f64,
    chains: Vec<WallChain>,
    interior_walls: SlotMap<InteriorWallId, InteriorWall>,
    openings: SlotMap<OpeningId, WallOpening>,
    furniture: SlotMap<FurnitureId, PlacedFurniture>,
    hidden_walls: BTreeSet<WallRef>,
    wall_colors: WallColors,
}

impl Default for Room {
    fn default() -> Self {
        Self::new(400.0, 500.0)
    }
}

impl Room {
    /// Creates an empty rectangular room. The bottom and right walls start
    /// hidden so the default camera looks into the room.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            chains: Vec::new(),
            interior_walls: SlotMap::with_key(),
            openings: SlotMap::with_key(),
            furniture: SlotMap::with_key(),
            hidden_walls: [WallSide::Bottom, WallSide::Right]
                .into_iter()
                .map(WallRef::Side)
                .collect(),
            wall_colors: WallColors::default(),
        }
    }

    // --- Boundary queries ---

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn chains(&self) -> &[WallChain] {
        &self.chains
    }

    #[must_use]
    pub fn is_polygon_mode(&self) -> bool {
        is_polygon_mode(&self.chains)
    }

    #[must_use]
    pub fn boundary_mode(&self) -> BoundaryMode {
        BoundaryMode::of(&self.chains)
    }

    /// The active boundary walls (rectangle sides or chain segments).
    #[must_use]
    pub fn boundary_walls(&self) -> Vec<WallSegment> {
        walls_to_render(&self.chains, self.width, self.height)
    }

    /// Interior walls as segments, in store order.
    #[must_use]
    pub fn interior_segments(&self) -> Vec<WallSegment> {
        self.interior_walls
            .iter()
            .map(|(id, wall)| wall.segment(id))
            .collect()
    }

    /// Walls an opening may be placed on, in tie-break order: chain segments
    /// and interior walls first, rectangle sides last.
    #[must_use]
    pub fn placement_candidates(&self) -> Vec<WallSegment> {
        match self.boundary_mode() {
            BoundaryMode::Polygon => {
                let mut walls = derive_segments(&self.chains);
                walls.extend(self.interior_segments());
                walls
            }
            BoundaryMode::Rectangle => {
                let mut walls = self.interior_segments();
                walls.extend(WallSide::ALL.map(|s| rectangle_side(s, self.width, self.height)));
                walls
            }
        }
    }

    /// Resolves a wall reference against the stored topology.
    ///
    /// Sides always resolve, even in polygon mode, so openings on them
    /// survive a round trip through polygon mode.
    #[must_use]
    pub fn segment(&self, wall: WallRef) -> Option<WallSegment> {
        match wall {
            WallRef::Side(side) => Some(rectangle_side(side, self.width, self.height)),
            WallRef::Chain { chain, segment } => chain_segment(&self.chains, chain, segment),
            WallRef::Interior(id) => self.interior_walls.get(id).map(|w| w.segment(id)),
        }
    }

    /// Returns `true` if `wall` is part of what is currently drawn.
    #[must_use]
    pub fn is_active(&self, wall: WallRef) -> bool {
        match wall {
            WallRef::Side(_) => !self.is_polygon_mode(),
            WallRef::Chain { chain, segment } => {
                chain_segment(&self.chains, chain, segment).is_some()
            }
            WallRef::Interior(id) => self.interior_walls.contains_key(id),
        }
    }

    /// Resolves `wall` only if it is currently drawn.
    #[must_use]
    pub fn active_segment(&self, wall: WallRef) -> Option<WallSegment> {
        if self.is_active(wall) {
            self.segment(wall)
        } else {
            None
        }
    }

    /// Room-space area covering the nominal rectangle, every chain point and
    /// `extra` (typically the chain being drawn).
    #[must_use]
    pub fn view_bounds(&self, extra: &[Point2]) -> Bounds2 {
        let mut bounds = Bounds2::new(Point2::origin(), Point2::new(self.width, self.height));
        for p in self.chains.iter().flatten().chain(extra) {
            bounds.include(p);
        }
        bounds
    }

    // --- Boundary mutations ---

    /// Sets the nominal rectangle, clamping each side into `range`.
    pub fn set_size(&mut self, width: f64, height: f64, range: &RangeInclusive<f64>) {
        self.width = width.max(*range.start()).min(*range.end());
        self.height = height.max(*range.start()).min(*range.end());
        for opening in self.openings.values_mut() {
            if let WallRef::Side(side) = opening.wall {
                let len = if side.is_horizontal() { self.width } else { self.height };
                opening.position = clamp_to_span(opening.position, opening.half_width(), len);
            }
        }
        debug!(width = self.width, height = self.height, "room resized");
    }

    /// Stores a finished chain. Chains with fewer than two points are dropped
    /// and `false` is returned.
    pub fn add_chain(&mut self, chain: WallChain) -> bool {
        if chain.len() < 2 {
            return false;
        }
        debug!(index = self.chains.len(), points = chain.len(), "wall chain saved");
        self.chains.push(chain);
        true
    }

    /// Removes every chain, reverting to rectangle mode, and drops openings
    /// whose wall no longer resolves along with chain hidden flags. Returns
    /// the number of dropped openings.
    pub fn reset_walls(&mut self) -> usize {
        self.chains.clear();
        self.hidden_walls.retain(|w| !matches!(w, WallRef::Chain { .. }));
        let purged = self.purge_dangling_openings();
        debug!(purged, "walls reset");
        purged
    }

    fn purge_dangling_openings(&mut self) -> usize {
        let before = self.openings.len();
        let chains = &self.chains;
        let interior = &self.interior_walls;
        self.openings.retain(|_, o| match o.wall {
            WallRef::Side(_) => true,
            WallRef::Chain { chain, segment } => chain_segment(chains, chain, segment).is_some(),
            WallRef::Interior(id) => interior.contains_key(id),
        });
        before - self.openings.len()
    }

    // --- Interior walls ---

    pub fn add_interior_wall(&mut self, wall: InteriorWall) -> InteriorWallId {
        let id = self.interior_walls.insert(wall);
        debug!(wall = %WallRef::Interior(id), length = wall.length(), "interior wall added");
        id
    }

    /// Returns the interior wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn interior_wall(&self, id: InteriorWallId) -> Result<&InteriorWall> {
        self.interior_walls
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("interior wall".into()).into())
    }

    #[must_use]
    pub fn interior_walls(&self) -> impl Iterator<Item = (InteriorWallId, &InteriorWall)> {
        self.interior_walls.iter()
    }

    /// Removes an interior wall and every opening anchored to it.
    ///
    /// Returns the number of openings removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn remove_interior_wall(&mut self, id: InteriorWallId) -> Result<usize> {
        self.interior_walls
            .remove(id)
            .ok_or_else(|| ModelError::EntityNotFound("interior wall".into()))?;
        self.hidden_walls.remove(&WallRef::Interior(id));
        let before = self.openings.len();
        self.openings.retain(|_, o| o.wall != WallRef::Interior(id));
        let cascaded = before - self.openings.len();
        debug!(wall = %WallRef::Interior(id), cascaded, "interior wall removed");
        Ok(cascaded)
    }

    // --- Openings ---

    /// Stores an opening, clamping its position onto its wall when the wall
    /// resolves.
    pub fn add_opening(&mut self, mut opening: WallOpening) -> OpeningId {
        if let Some(seg) = self.segment(opening.wall) {
            opening.position = clamp_to_span(opening.position, opening.half_width(), seg.length());
        }
        let id = self.openings.insert(opening);
        debug!(
            kind = ?opening.kind,
            wall = %opening.wall,
            position = opening.position,
            "opening added"
        );
        id
    }

    /// Returns the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn opening(&self, id: OpeningId) -> Result<&WallOpening> {
        self.openings
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()).into())
    }

    #[must_use]
    pub fn openings(&self) -> impl Iterator<Item = (OpeningId, &WallOpening)> {
        self.openings.iter()
    }

    /// Openings anchored to `wall`, in store order.
    #[must_use]
    pub fn openings_on(&self, wall: WallRef) -> impl Iterator<Item = (OpeningId, &WallOpening)> {
        self.openings.iter().filter(move |(_, o)| o.wall == wall)
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn remove_opening(&mut self, id: OpeningId) -> Result<WallOpening> {
        let opening = self
            .openings
            .remove(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()))?;
        debug!(wall = %opening.wall, "opening removed");
        Ok(opening)
    }

    /// Moves an opening along its wall, clamped so it never overhangs the
    /// wall ends. Returns the stored position.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if the opening or its wall is unknown.
    pub fn set_opening_position(&mut self, id: OpeningId, position: f64) -> Result<f64> {
        let wall = self.opening(id)?.wall;
        let seg = self
            .segment(wall)
            .ok_or_else(|| ModelError::EntityNotFound(format!("wall {wall}")))?;
        let opening = self
            .openings
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()))?;
        opening.position = clamp_to_span(position, opening.half_width(), seg.length());
        Ok(opening.position)
    }

    /// Flips the open flag of an opening. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn toggle_door_open(&mut self, id: OpeningId) -> Result<bool> {
        let opening = self
            .openings
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening".into()))?;
        opening.is_open = !opening.is_open;
        Ok(opening.is_open)
    }

    /// Finds the first interactable opening whose footprint lies within
    /// `tolerance` of `point`.
    ///
    /// Openings on hidden walls and openings whose wall is not currently
    /// drawn cannot be hit.
    #[must_use]
    pub fn opening_at(&self, point: &Point2, tolerance: f64) -> Option<OpeningId> {
        self.openings.iter().find_map(|(id, o)| {
            if self.is_hidden(o.wall) {
                return None;
            }
            let seg = self.active_segment(o.wall)?;
            let a = seg.point_at(o.position - o.half_width());
            let b = seg.point_at(o.position + o.half_width());
            (point_to_segment_distance(point, &a, &b).distance <= tolerance).then_some(id)
        })
    }

    /// Returns the first interior wall within `tolerance` of `point`.
    #[must_use]
    pub fn interior_wall_at(&self, point: &Point2, tolerance: f64) -> Option<InteriorWallId> {
        self.interior_walls.iter().find_map(|(id, w)| {
            (point_to_segment_distance(point, &w.start, &w.end).distance <= tolerance).then_some(id)
        })
    }

    // --- Hidden walls and colors ---

    #[must_use]
    pub fn is_hidden(&self, wall: WallRef) -> bool {
        self.hidden_walls.contains(&wall)
    }

    #[must_use]
    pub fn hidden_walls(&self) -> &BTreeSet<WallRef> {
        &self.hidden_walls
    }

    /// Toggles camera visibility of a wall. Returns `true` if it is now hidden.
    pub fn toggle_wall_hidden(&mut self, wall: WallRef) -> bool {
        let hidden = if self.hidden_walls.remove(&wall) {
            false
        } else {
            self.hidden_walls.insert(wall);
            true
        };
        debug!(%wall, hidden, "wall visibility toggled");
        hidden
    }

    #[must_use]
    pub fn wall_colors(&self) -> &WallColors {
        &self.wall_colors
    }

    pub fn set_wall_colors(&mut self, colors: WallColors) {
        self.wall_colors = colors;
    }

    // --- Furniture ---

    /// Places a catalog item at the room center with no rotation.
    pub fn add_furniture(&mut self, catalog_id: impl Into<String>) -> FurnitureId {
        let center = Point2::new(self.width / 2.0, self.height / 2.0);
        let id = self.furniture.insert(PlacedFurniture::new(catalog_id, center));
        debug!("furniture added");
        id
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn furniture(&self, id: FurnitureId) -> Result<&PlacedFurniture> {
        self.furniture
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("furniture".into()).into())
    }

    #[must_use]
    pub fn furniture_items(&self) -> impl Iterator<Item = (FurnitureId, &PlacedFurniture)> {
        self.furniture.iter()
    }

    fn furniture_mut(&mut self, id: FurnitureId) -> Result<&mut PlacedFurniture> {
        self.furniture
            .get_mut(id)
            .ok_or_else(|| ModelError::EntityNotFound("furniture".into()).into())
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn update_furniture(&mut self, id: FurnitureId, patch: &FurniturePatch) -> Result<()> {
        self.furniture_mut(id)?.apply(patch);
        Ok(())
    }

    /// Rotates an item by 90°. Returns the new rotation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn rotate_furniture_quarter(&mut self, id: FurnitureId) -> Result<f64> {
        Ok(self.furniture_mut(id)?.rotate_quarter())
    }

    /// # Errors
    ///
    /// Returns [`ModelError::EntityNotFound`] if `id` is unknown.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Result<PlacedFurniture> {
        self.furniture
            .remove(id)
            .ok_or_else(|| ModelError::EntityNotFound("furniture".into()).into())
    }

    /// Resolves placed furniture against `catalog` for 3D builders. Items
    /// whose catalog entry is missing are skipped.
    #[must_use]
    pub fn furniture_instances(
        &self,
        catalog: &dyn Catalog,
        selected: Option<FurnitureId>,
    ) -> Vec<FurnitureInstance> {
        self.furniture
            .iter()
            .filter_map(|(id, item)| {
                let def = catalog.get(&item.catalog_id)?;
                Some(FurnitureInstance::resolve(id, item, def, selected == Some(id)))
            })
            .collect()
    }

    /// Removes furniture, openings and interior walls. The boundary, room
    /// size, hidden walls and colors are kept.
    pub fn clear_all(&mut self) {
        self.furniture.clear();
        self.openings.clear();
        let interior: Vec<WallRef> = self.interior_walls.keys().map(WallRef::Interior).collect();
        for wall in &interior {
            self.hidden_walls.remove(wall);
        }
        self.interior_walls.clear();
        debug!("room cleared");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::opening::OpeningKind;

    fn chain_room() -> Room {
        let mut room = Room::default();
        room.add_chain(vec![
            Point2::new(0.0, 0.0),
            Point2::new(300.0, 0.0),
            Point2::new(300.0, 300.0),
        ]);
        room
    }

    #[test]
    fn default_room_hides_bottom_and_right() {
        let room = Room::default();
        assert!(room.is_hidden(WallSide::Bottom.into()));
        assert!(room.is_hidden(WallSide::Right.into()));
        assert!(!room.is_hidden(WallSide::Top.into()));
        assert_eq!(room.boundary_mode(), BoundaryMode::Rectangle);
    }

    #[test]
    fn short_chain_is_not_stored() {
        let mut room = Room::default();
        assert!(!room.add_chain(vec![Point2::new(0.0, 0.0)]));
        assert!(room.chains().is_empty());
        assert!(!room.is_polygon_mode());
    }

    #[test]
    fn two_point_chain_flips_to_polygon_mode() {
        let mut room = Room::default();
        assert!(room.add_chain(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]));
        assert_eq!(room.boundary_mode(), BoundaryMode::Polygon);
        assert!(!room.is_active(WallSide::Top.into()));
    }

    #[test]
    fn reset_walls_purges_chain_openings_only() {
        let mut room = chain_room();
        let on_chain = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallRef::Chain {
                chain: 0,
                segment: 1,
            },
            150.0,
        ));
        let on_side = room.add_opening(WallOpening::new(
            OpeningKind::Door,
            WallSide::Left.into(),
            100.0,
        ));

        assert_eq!(room.reset_walls(), 1);
        assert!(room.opening(on_chain).is_err());
        assert!(room.opening(on_side).is_ok());
        assert_eq!(room.boundary_mode(), BoundaryMode::Rectangle);
    }

    #[test]
    fn reset_walls_forgets_hidden_chain_segments() {
        let mut room = chain_room();
        let seg = WallRef::Chain {
            chain: 0,
            segment: 0,
        };
        assert!(room.toggle_wall_hidden(seg));
        room.reset_walls();
        assert!(!room.is_hidden(seg));
        assert!(room.is_hidden(WallSide::Bottom.into()));
        assert!(room.is_hidden(WallSide::Right.into()));

        // The next chain reuses the same ids and starts out visible.
        room.add_chain(vec![Point2::new(0.0, 0.0), Point2::new(200.0, 0.0)]);
        let id = room.add_opening(WallOpening::new(OpeningKind::Window, seg, 100.0));
        assert!(!room.is_hidden(seg));
        assert_eq!(room.opening_at(&Point2::new(100.0, 0.0), 5.0), Some(id));
    }

    #[test]
    fn removing_interior_wall_cascades_to_its_openings() {
        let mut room = Room::default();
        let iw = room.add_interior_wall(InteriorWall::new(
            Point2::new(50.0, 50.0),
            Point2::new(50.0, 250.0),
        ));
        let door = room.add_opening(WallOpening::new(OpeningKind::Door, iw.into(), 100.0));
        let window = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallSide::Top.into(),
            200.0,
        ));

        assert_eq!(room.remove_interior_wall(iw).unwrap(), 1);
        assert!(room.interior_wall(iw).is_err());
        assert!(room.opening(door).is_err());
        assert!(room.opening(window).is_ok());
        assert!(room.remove_interior_wall(iw).is_err());
    }

    #[test]
    fn add_opening_clamps_to_wall() {
        let mut room = Room::new(400.0, 500.0);
        let id = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallSide::Top.into(),
            5.0,
        ));
        assert!((room.opening(id).unwrap().position - 60.0).abs() < 1e-12);
        let pos = room.set_opening_position(id, 1000.0).unwrap();
        assert!((pos - 340.0).abs() < 1e-12);
    }

    #[test]
    fn resize_clamps_size_and_side_openings() {
        let mut room = Room::new(400.0, 500.0);
        let id = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallSide::Top.into(),
            330.0,
        ));
        room.set_size(50.0, 5000.0, &(100.0..=2000.0));
        assert!((room.width() - 100.0).abs() < 1e-12);
        assert!((room.height() - 2000.0).abs() < 1e-12);
        // 100cm wall, 120cm window: pinned to half width.
        assert!((room.opening(id).unwrap().position - 60.0).abs() < 1e-12);
    }

    #[test]
    fn hidden_wall_openings_are_not_hit() {
        let mut room = Room::new(400.0, 500.0);
        let id = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallSide::Top.into(),
            200.0,
        ));
        assert_eq!(room.opening_at(&Point2::new(230.0, 3.0), 5.0), Some(id));
        assert_eq!(room.opening_at(&Point2::new(300.0, 3.0), 5.0), None);

        assert!(room.toggle_wall_hidden(WallSide::Top.into()));
        assert_eq!(room.opening_at(&Point2::new(230.0, 3.0), 5.0), None);
    }

    #[test]
    fn interior_wall_hit_test() {
        let mut room = Room::new(400.0, 500.0);
        let iw = room.add_interior_wall(InteriorWall::new(
            Point2::new(100.0, 100.0),
            Point2::new(300.0, 100.0),
        ));
        assert_eq!(room.interior_wall_at(&Point2::new(200.0, 104.0), 5.0), Some(iw));
        assert_eq!(room.interior_wall_at(&Point2::new(200.0, 110.0), 5.0), None);
        assert_eq!(room.interior_wall_at(&Point2::new(310.0, 100.0), 5.0), None);
    }

    #[test]
    fn side_openings_are_inactive_in_polygon_mode() {
        let mut room = Room::new(400.0, 500.0);
        let id = room.add_opening(WallOpening::new(
            OpeningKind::Window,
            WallSide::Top.into(),
            200.0,
        ));
        room.add_chain(vec![Point2::new(0.0, 0.0), Point2::new(400.0, 0.0)]);
        assert_eq!(room.opening_at(&Point2::new(200.0, 0.0), 5.0), None);
        room.reset_walls();
        assert_eq!(room.opening_at(&Point2::new(200.0, 0.0), 5.0), Some(id));
    }

    #[test]
    fn placement_candidates_order() {
        let mut room = chain_room();
        let iw = room.add_interior_wall(InteriorWall::new(
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 90.0),
        ));
        let ids: Vec<WallRef> = room.placement_candidates().iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                WallRef::Chain {
                    chain: 0,
                    segment: 0
                },
                WallRef::Chain {
                    chain: 0,
                    segment: 1
                },
                WallRef::Interior(iw),
            ]
        );

        room.reset_walls();
        let ids: Vec<WallRef> = room.placement_candidates().iter().map(|s| s.id).collect();
        assert_eq!(ids[0], WallRef::Interior(iw));
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn clear_all_keeps_boundary() {
        let mut room = chain_room();
        room.add_furniture("bed");
        room.add_interior_wall(InteriorWall::new(Point2::new(0.0, 0.0), Point2::new(0.0, 90.0)));
        room.clear_all();
        assert_eq!(room.furniture_items().count(), 0);
        assert_eq!(room.interior_walls().count(), 0);
        assert!(room.is_polygon_mode());
    }

    #[test]
    fn view_bounds_cover_chains_and_extra_points() {
        let mut room = Room::new(400.0, 500.0);
        room.add_chain(vec![Point2::new(-50.0, 0.0), Point2::new(600.0, 0.0)]);
        let b = room.view_bounds(&[Point2::new(0.0, 700.0)]);
        assert_eq!(b.min, Point2::new(-50.0, 0.0));
        assert_eq!(b.max, Point2::new(600.0, 700.0));
    }
}
