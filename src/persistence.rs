use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PersistError, Result};
use crate::model::Room;

/// Key under which the editing state is stored.
pub const STORAGE_KEY: &str = "room-planner-storage";

/// Version written into every saved envelope.
pub const STATE_VERSION: u32 = 1;

/// A string key-value store holding serialized state.
pub trait Storage {
    /// Returns the stored value, or `None` if nothing is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Io`] if the backing store cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Storage backed by one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::Io(e).into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(PersistError::Io)?;
        fs::write(self.path(key), value).map_err(PersistError::Io)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    state: &'a Room,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    state: serde_json::Value,
}

/// Serializes `room` into a versioned envelope.
///
/// # Errors
///
/// Returns [`PersistError::Json`] if serialization fails.
pub fn to_json(room: &Room) -> Result<String> {
    let envelope = EnvelopeRef {
        version: STATE_VERSION,
        state: room,
    };
    Ok(serde_json::to_string(&envelope).map_err(PersistError::Json)?)
}

/// Restores a room from a versioned envelope.
///
/// # Errors
///
/// Returns [`PersistError::Json`] for malformed input and
/// [`PersistError::UnsupportedVersion`] for an envelope of another version.
pub fn from_json(text: &str) -> Result<Room> {
    let envelope: Envelope = serde_json::from_str(text).map_err(PersistError::Json)?;
    if envelope.version != STATE_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: envelope.version,
            expected: STATE_VERSION,
        }
        .into());
    }
    Ok(serde_json::from_value(envelope.state).map_err(PersistError::Json)?)
}

/// Saves `room` under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns a persistence error if serialization or the store fails.
pub fn save_room(storage: &mut dyn Storage, room: &Room) -> Result<()> {
    let text = to_json(room)?;
    storage.save(STORAGE_KEY, &text)?;
    debug!(bytes = text.len(), "room saved");
    Ok(())
}

/// Loads the room stored under [`STORAGE_KEY`], or `None` if nothing is
/// stored yet.
///
/// # Errors
///
/// Returns a persistence error if the store fails or the stored state
/// cannot be read back.
pub fn load_room(storage: &dyn Storage) -> Result<Option<Room>> {
    let Some(text) = storage.load(STORAGE_KEY)? else {
        return Ok(None);
    };
    match from_json(&text) {
        Ok(room) => {
            debug!("room loaded");
            Ok(Some(room))
        }
        Err(e) => {
            warn!(error = %e, "stored room could not be loaded");
            Err(e)
        }
    }
}
