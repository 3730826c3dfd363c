pub mod chain_drawer;
pub mod editor;
pub mod interior_drawer;

pub use chain_drawer::{ChainDrawer, ChainStep};
pub use editor::{Change, Editor, ObserverId, Selection, Tool};
pub use interior_drawer::InteriorDrawer;
