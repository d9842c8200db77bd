//! File-backed JSON store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{Store, StoreData};

/// A store persisting the document as pretty-printed JSON in a single file.
///
/// A missing file loads as `None`; a present but malformed file is a parse
/// error, which the manager treats as corrupt state and recovers from by
/// seeding. Saves create the parent directory if needed.
///
/// # Examples
///
/// ```no_run
/// use hotelcore::store::{JsonStore, Store, StoreData};
///
/// let mut store = JsonStore::new("/tmp/hotelcore/data.json");
/// assert!(store.load().unwrap().is_none());
/// store.save(&StoreData::seeded()).unwrap();
/// assert!(store.load().unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the given file path.
    ///
    /// Nothing is read or written until [`Store::load`] or [`Store::save`]
    /// is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for JsonStore {
    fn load(&self) -> Result<Option<StoreData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let data = serde_json::from_str(&contents)?;
        Ok(Some(data))
    }

    fn save(&mut self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, contents)?;
        log::debug!("saved state to {}", self.path.display());
        Ok(())
    }
}
