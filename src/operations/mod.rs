pub mod build;
pub mod placement;
