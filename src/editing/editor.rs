use std::fmt;

use slotmap::SlotMap;
use tracing::debug;

use super::chain_drawer::{ChainDrawer, ChainStep};
use super::interior_drawer::InteriorDrawer;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::math::{Point2, ViewTransform};
use crate::model::{
    Catalog, FurnitureId, FurnitureInstance, FurniturePatch, OpeningId, OpeningKind, Room,
    WallColors,
};
use crate::operations::build::{BuildRoom, RoomBuild, WallParams};
use crate::operations::placement::{DragOpening, PlaceOpening};
use crate::topology::{InteriorWallId, WallRef};

slotmap::new_key_type! {
    /// Handle returned by [`Editor::subscribe`].
    pub struct ObserverId;
}

/// What part of the room a committed mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Boundary,
    Openings,
    InteriorWalls,
    Furniture,
    HiddenWalls,
    RoomSize,
    Colors,
    /// Furniture, openings and interior walls were all removed.
    Cleared,
    /// The whole room was replaced, e.g. after loading.
    Replaced,
}

/// The single selected entity, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Furniture(FurnitureId),
    Opening(OpeningId),
    InteriorWall(InteriorWallId),
}

/// The active interaction mode. Modes are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Tool {
    #[default]
    Select,
    DrawChain(ChainDrawer),
    DrawInterior(InteriorDrawer),
    /// Single-shot opening placement; falls back to `Select` once placed.
    Place(OpeningKind),
}

type Observer = Box<dyn FnMut(&Room, &Change)>;

/// Owns the room plus all transient editing state, and turns screen-space
/// input events into room mutations.
///
/// Every event is fully committed, and observers notified, before the
/// handler returns.
pub struct Editor {
    room: Room,
    config: EditorConfig,
    view: ViewTransform,
    tool: Tool,
    selection: Selection,
    observers: SlotMap<ObserverId, Observer>,
}

impl fmt::Debug for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("room", &self.room)
            .field("config", &self.config)
            .field("view", &self.view)
            .field("tool", &self.tool)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Editor {
    /// Creates an editor with an empty room of the configured default size.
    ///
    /// # Errors
    ///
    /// Returns a config error if `config` does not validate.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let room = Room::new(config.default_room_width_cm, config.default_room_height_cm);
        Ok(Self::with_room(room, config))
    }

    /// Creates an editor around an existing room. `config` is trusted.
    #[must_use]
    pub fn with_room(room: Room, config: EditorConfig) -> Self {
        Self {
            room,
            config,
            view: ViewTransform::default(),
            tool: Tool::Select,
            selection: Selection::None,
            observers: SlotMap::with_key(),
        }
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn set_view(&mut self, view: ViewTransform) {
        self.view = view;
    }

    /// Fits the room, every chain and the chain being drawn into a stage.
    pub fn fit_view(&mut self, stage_width: f64, stage_height: f64) -> ViewTransform {
        let bounds = self.room.view_bounds(self.drawing_points());
        self.view = ViewTransform::fit(
            stage_width,
            stage_height,
            &bounds,
            self.config.view_padding_px,
            self.config.max_view_scale,
        );
        self.view
    }

    #[must_use]
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Points of the chain currently being drawn.
    #[must_use]
    pub fn drawing_points(&self) -> &[Point2] {
        match &self.tool {
            Tool::DrawChain(drawer) => drawer.points(),
            _ => &[],
        }
    }

    /// Room-space snap distance at the current zoom.
    #[must_use]
    pub fn snap_threshold_cm(&self) -> f64 {
        self.view.snap_threshold_cm(self.config.snap_radius_px)
    }

    fn pick_tolerance_cm(&self) -> f64 {
        self.view.snap_threshold_cm(self.config.pick_radius_px)
    }

    // --- Observers ---

    /// Registers a callback run after every committed mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&Room, &Change) + 'static) -> ObserverId {
        self.observers.insert(Box::new(observer))
    }

    /// Returns `true` if the observer was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id).is_some()
    }

    fn notify(&mut self, change: Change) {
        for observer in self.observers.values_mut() {
            observer(&self.room, &change);
        }
    }

    // --- Tools ---

    /// Switches tools. Any in-progress drawing is discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!(from = tool_name(&self.tool), to = tool_name(&tool), "tool changed");
        self.tool = tool;
    }

    /// Toggles chain drawing on or off.
    pub fn toggle_chain_drawing(&mut self) {
        let next = match self.tool {
            Tool::DrawChain(_) => Tool::Select,
            _ => Tool::DrawChain(ChainDrawer::new()),
        };
        self.set_tool(next);
    }

    /// Toggles interior wall drawing on or off.
    pub fn toggle_interior_drawing(&mut self) {
        let next = match self.tool {
            Tool::DrawInterior(_) => Tool::Select,
            _ => Tool::DrawInterior(InteriorDrawer::new()),
        };
        self.set_tool(next);
    }

    pub fn start_placement(&mut self, kind: OpeningKind) {
        self.set_tool(Tool::Place(kind));
    }

    // --- Pointer and keyboard events ---

    /// Handles a click at `screen` pixels. Returns the committed change, if
    /// the click committed one.
    pub fn click(&mut self, screen: &Point2) -> Option<Change> {
        let p = self.view.to_room(screen);
        let grid = self.config.grid_size_cm;
        let threshold = self.snap_threshold_cm();

        match &mut self.tool {
            Tool::DrawChain(drawer) => match drawer.click(&p, grid, threshold) {
                ChainStep::Extended(_) => None,
                ChainStep::Closed(chain) => self.commit_chain(chain),
            },
            Tool::DrawInterior(drawer) => {
                let wall = drawer.click(&p, grid)?;
                let id = self.room.add_interior_wall(wall);
                self.selection = Selection::InteriorWall(id);
                self.notify(Change::InteriorWalls);
                Some(Change::InteriorWalls)
            }
            Tool::Place(kind) => {
                let kind = *kind;
                let placement = PlaceOpening::new(kind, p).execute(&self.room)?;
                let id = self.room.add_opening(placement.into_opening(kind));
                self.tool = Tool::Select;
                self.selection = Selection::Opening(id);
                self.notify(Change::Openings);
                Some(Change::Openings)
            }
            Tool::Select => {
                let tolerance = self.pick_tolerance_cm();
                self.selection = if let Some(id) = self.room.opening_at(&p, tolerance) {
                    Selection::Opening(id)
                } else if let Some(id) = self.room.interior_wall_at(&p, tolerance) {
                    Selection::InteriorWall(id)
                } else {
                    Selection::None
                };
                None
            }
        }
    }

    /// Handles a double click on the background.
    pub fn double_click(&mut self, _screen: &Point2) -> Option<Change> {
        let Tool::DrawChain(drawer) = &mut self.tool else {
            return None;
        };
        let chain = drawer.double_click()?;
        self.commit_chain(chain)
    }

    fn commit_chain(&mut self, chain: Vec<Point2>) -> Option<Change> {
        if !self.room.add_chain(chain) {
            return None;
        }
        self.notify(Change::Boundary);
        Some(Change::Boundary)
    }

    /// Handles Escape: cancels the current gesture, or clears the selection
    /// when nothing is in progress.
    pub fn escape(&mut self) {
        let exit = match &mut self.tool {
            Tool::DrawChain(drawer) => {
                drawer.escape();
                true
            }
            Tool::DrawInterior(drawer) => drawer.escape(),
            Tool::Place(_) => true,
            Tool::Select => {
                self.selection = Selection::None;
                false
            }
        };
        if exit {
            self.set_tool(Tool::Select);
        }
    }

    /// Updates the drawing preview. Returns the snapped room-space preview
    /// point while a drawing tool is active.
    pub fn pointer_move(&mut self, screen: &Point2) -> Option<Point2> {
        let p = self.view.to_room(screen);
        let grid = self.config.grid_size_cm;
        let threshold = self.snap_threshold_cm();
        match &mut self.tool {
            Tool::DrawChain(drawer) => Some(drawer.pointer_move(&p, grid, threshold)),
            Tool::DrawInterior(drawer) => Some(drawer.pointer_move(&p, grid)),
            Tool::Select | Tool::Place(_) => None,
        }
    }

    /// Commits a dragged opening dropped at `screen`, and returns the
    /// room-space point on its wall where it now sits.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening is unknown or its wall is not drawn.
    pub fn drag_opening_end(&mut self, id: OpeningId, screen: &Point2) -> Result<Point2> {
        let p = self.view.to_room(screen);
        let result = DragOpening::new(id, p).apply(&mut self.room)?;
        debug!(position = result.position, "opening drag committed");
        self.notify(Change::Openings);
        Ok(result.anchor)
    }

    /// Toggles a door open or closed. Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening is unknown.
    pub fn double_click_opening(&mut self, id: OpeningId) -> Result<bool> {
        let open = self.room.toggle_door_open(id)?;
        self.notify(Change::Openings);
        Ok(open)
    }

    /// Rotates a furniture item by a quarter turn. Returns the new rotation.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    pub fn double_click_furniture(&mut self, id: FurnitureId) -> Result<f64> {
        let rotation = self.room.rotate_furniture_quarter(id)?;
        self.notify(Change::Furniture);
        Ok(rotation)
    }

    // --- Selection ---

    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    fn deselect_if(&mut self, selection: Selection) {
        if self.selection == selection {
            self.selection = Selection::None;
        }
    }

    // --- Mutations ---

    /// Resizes the nominal rectangle, clamped to the configured bounds.
    pub fn set_room_size(&mut self, width: f64, height: f64) {
        self.room.set_size(width, height, &self.config.room_size_range());
        self.notify(Change::RoomSize);
    }

    /// Removes every chain. Returns the number of openings purged with them.
    pub fn reset_walls(&mut self) -> usize {
        let purged = self.room.reset_walls();
        if let Selection::Opening(id) = self.selection {
            if self.room.opening(id).is_err() {
                self.selection = Selection::None;
            }
        }
        self.notify(Change::Boundary);
        purged
    }

    /// # Errors
    ///
    /// Returns an error if the wall is unknown.
    pub fn remove_interior_wall(&mut self, id: InteriorWallId) -> Result<usize> {
        let cascaded = self.room.remove_interior_wall(id)?;
        self.deselect_if(Selection::InteriorWall(id));
        if let Selection::Opening(opening) = self.selection {
            if self.room.opening(opening).is_err() {
                self.selection = Selection::None;
            }
        }
        self.notify(Change::InteriorWalls);
        Ok(cascaded)
    }

    /// # Errors
    ///
    /// Returns an error if the opening is unknown.
    pub fn remove_opening(&mut self, id: OpeningId) -> Result<()> {
        self.room.remove_opening(id)?;
        self.deselect_if(Selection::Opening(id));
        self.notify(Change::Openings);
        Ok(())
    }

    pub fn toggle_wall_hidden(&mut self, wall: WallRef) -> bool {
        let hidden = self.room.toggle_wall_hidden(wall);
        self.notify(Change::HiddenWalls);
        hidden
    }

    pub fn set_wall_colors(&mut self, colors: WallColors) {
        self.room.set_wall_colors(colors);
        self.notify(Change::Colors);
    }

    /// Places a catalog item at the room center and selects it.
    pub fn add_furniture(&mut self, catalog_id: impl Into<String>) -> FurnitureId {
        let id = self.room.add_furniture(catalog_id);
        self.selection = Selection::Furniture(id);
        self.notify(Change::Furniture);
        id
    }

    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    pub fn update_furniture(&mut self, id: FurnitureId, patch: &FurniturePatch) -> Result<()> {
        self.room.update_furniture(id, patch)?;
        self.notify(Change::Furniture);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Result<()> {
        self.room.remove_furniture(id)?;
        self.deselect_if(Selection::Furniture(id));
        self.notify(Change::Furniture);
        Ok(())
    }

    /// Removes furniture, openings and interior walls.
    pub fn clear_all(&mut self) {
        self.room.clear_all();
        self.selection = Selection::None;
        self.notify(Change::Cleared);
    }

    /// Replaces the room, resetting all transient state.
    pub fn replace_room(&mut self, room: Room) {
        self.room = room;
        self.tool = Tool::Select;
        self.selection = Selection::None;
        self.notify(Change::Replaced);
    }

    // --- Derived output ---

    /// Builds the 3D wall geometry of the current room.
    #[must_use]
    pub fn build(&self) -> RoomBuild {
        BuildRoom::new(WallParams::from(&self.config)).execute(&self.room)
    }

    /// Resolves placed furniture for shape builders, flagging the selection.
    #[must_use]
    pub fn furniture_instances(&self, catalog: &dyn Catalog) -> Vec<FurnitureInstance> {
        let selected = match self.selection {
            Selection::Furniture(id) => Some(id),
            _ => None,
        };
        self.room.furniture_instances(catalog, selected)
    }
}

fn tool_name(tool: &Tool) -> &'static str {
    match tool {
        Tool::Select => "select",
        Tool::DrawChain(_) => "draw-chain",
        Tool::DrawInterior(_) => "draw-interior",
        Tool::Place(_) => "place",
    }
}
