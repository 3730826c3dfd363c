pub mod furniture;
pub mod opening;
pub mod room;

pub use furniture::{
    Catalog, FurnitureDef, FurnitureId, FurnitureInstance, FurniturePatch, FurnitureShape,
    PlacedFurniture, StaticCatalog,
};
pub use opening::{OpeningDimensions, OpeningId, OpeningKind, WallOpening};
pub use room::{Room, WallColors};
