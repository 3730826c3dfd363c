use thiserror::Error;

/// Top-level error type for the room editing core.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by lookups and mutations on the room model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors raised while saving or restoring the editing state.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed persisted state: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported persisted state version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors raised while loading editor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config value {field} = {value} is invalid: {reason}")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`RoomError`].
pub type Result<T> = std::result::Result<T, RoomError>;
