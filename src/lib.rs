pub mod config;
pub mod editing;
pub mod error;
pub mod math;
pub mod model;
pub mod operations;
pub mod persistence;
pub mod topology;

pub use config::EditorConfig;
pub use editing::Editor;
pub use error::{Result, RoomError};
pub use model::Room;
