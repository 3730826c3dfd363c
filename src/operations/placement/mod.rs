mod drag_opening;
mod place_opening;

pub use drag_opening::{DragOpening, DragResult};
pub use place_opening::{OpeningPlacement, PlaceOpening};
