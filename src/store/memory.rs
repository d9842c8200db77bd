//! In-process store for tests and embedding.

use crate::error::{Error, Result};

use super::{Store, StoreData};

/// A store keeping the document in memory.
///
/// Useful for tests and for shells that manage persistence themselves.
/// Saves can be made to fail on demand to exercise best-effort
/// persistence handling.
///
/// # Examples
///
/// ```
/// use hotelcore::store::{MemoryStore, Store, StoreData};
///
/// let mut store = MemoryStore::default();
/// assert!(store.load().unwrap().is_none());
///
/// store.save(&StoreData::seeded()).unwrap();
/// assert_eq!(store.load().unwrap().unwrap().rooms.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<StoreData>,
    fail_saves: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the given document.
    #[must_use]
    pub fn with_data(data: StoreData) -> Self {
        Self {
            data: Some(data),
            fail_saves: false,
        }
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Returns the last saved document, if any.
    #[must_use]
    pub fn data(&self) -> Option<&StoreData> {
        self.data.as_ref()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<StoreData>> {
        Ok(self.data.clone())
    }

    fn save(&mut self, data: &StoreData) -> Result<()> {
        if self.fail_saves {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "memory store configured to fail saves",
            )));
        }
        self.data = Some(data.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let data = StoreData::seeded();
        store.save(&data).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), data);
    }

    #[test]
    fn test_with_data() {
        let store = MemoryStore::with_data(StoreData::seeded());
        assert_eq!(store.load().unwrap().unwrap().rooms.len(), 4);
    }

    #[test]
    fn test_failing_saves() {
        let mut store = MemoryStore::new();
        store.set_fail_saves(true);
        assert!(store.save(&StoreData::default()).is_err());

        store.set_fail_saves(false);
        assert!(store.save(&StoreData::default()).is_ok());
    }
}
