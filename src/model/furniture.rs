use serde::{Deserialize, Serialize};

use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a placed furniture item in the room store.
    pub struct FurnitureId;
}

/// Shape family of a catalog item, used to pick a 3D builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FurnitureShape {
    Wardrobe,
    Shelf,
    Bed,
    Table,
    Sofa,
    Chair,
    Desk,
    Dresser,
    Nightstand,
    TvUnit,
    LcdTv,
    GamingDesk,
    GamingChair,
    Stove,
    Fridge,
    KitchenSink,
    KitchenUnit,
    Toilet,
    Bathtub,
    Shower,
    Washbasin,
    Mirror,
}

impl FurnitureShape {
    /// Items of these shapes hang on a wall and honour `elevation`.
    #[must_use]
    pub fn is_wall_mounted(self) -> bool {
        matches!(self, Self::Mirror | Self::LcdTv)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureDef {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub color: String,
    pub shape: FurnitureShape,
}

/// Read access to the furniture catalog, which lives outside the editing core.
pub trait Catalog {
    /// Looks up a catalog entry by its id.
    fn get(&self, id: &str) -> Option<&FurnitureDef>;
}

/// A catalog backed by a plain list of definitions.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    defs: Vec<FurnitureDef>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(defs: Vec<FurnitureDef>) -> Self {
        Self { defs }
    }
}

impl Catalog for StaticCatalog {
    fn get(&self, id: &str) -> Option<&FurnitureDef> {
        self.defs.iter().find(|d| d.id == id)
    }
}

/// A furniture item placed in the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedFurniture {
    /// Catalog id of the item.
    pub catalog_id: String,
    /// Center of the item in room space.
    pub position: Point2,
    /// Rotation in degrees, in `0..360`.
    pub rotation: f64,
    /// Color override; the catalog color applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Height above the floor in cm, for wall-mounted items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl PlacedFurniture {
    #[must_use]
    pub fn new(catalog_id: impl Into<String>, position: Point2) -> Self {
        Self {
            catalog_id: catalog_id.into(),
            position,
            rotation: 0.0,
            color: None,
            elevation: None,
        }
    }

    /// Applies every field set in `patch`.
    pub fn apply(&mut self, patch: &FurniturePatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = normalize_rotation(rotation);
        }
        if let Some(color) = &patch.color {
            self.color = Some(color.clone());
        }
        if let Some(elevation) = patch.elevation {
            self.elevation = Some(elevation.max(0.0));
        }
    }

    /// Rotates by a quarter turn, wrapping at 360°.
    pub fn rotate_quarter(&mut self) -> f64 {
        self.rotation = normalize_rotation(self.rotation + 90.0);
        self.rotation
    }
}

/// Partial update of a placed furniture item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FurniturePatch {
    pub position: Option<Point2>,
    pub rotation: Option<f64>,
    pub color: Option<String>,
    pub elevation: Option<f64>,
}

/// Wraps an angle in degrees into `0..360`.
#[must_use]
pub fn normalize_rotation(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Everything an external shape builder needs to draw one placed item.
#[derive(Debug, Clone, PartialEq)]
pub struct FurnitureInstance {
    pub id: FurnitureId,
    pub shape: FurnitureShape,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub color: String,
    pub position: Point2,
    pub rotation: f64,
    pub elevation: f64,
    pub selected: bool,
}

impl FurnitureInstance {
    /// Combines a placement with its catalog entry.
    #[must_use]
    pub fn resolve(
        id: FurnitureId,
        item: &PlacedFurniture,
        def: &FurnitureDef,
        selected: bool,
    ) -> Self {
        let elevation = if def.shape.is_wall_mounted() {
            item.elevation.unwrap_or(0.0)
        } else {
            0.0
        };
        Self {
            id,
            shape: def.shape,
            width: def.width,
            depth: def.depth,
            height: def.height,
            color: item.color.clone().unwrap_or_else(|| def.color.clone()),
            position: item.position,
            rotation: item.rotation,
            elevation,
            selected,
        }
    }
}
