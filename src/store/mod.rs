//! Persistence layer for hotel state.
//!
//! State is persisted as a single JSON document holding the three entity
//! collections. The manager writes through after every successful mutation
//! and loads once at startup; when no persisted state exists (or it cannot
//! be parsed) the manager seeds a small fixed set of default rooms.
//!
//! # Examples
//!
//! ```no_run
//! use hotelcore::store::{JsonStore, Store, StoreData};
//!
//! let mut store = JsonStore::new("/tmp/hotelcore/data.json");
//! let data = store.load().unwrap().unwrap_or_else(StoreData::seeded);
//! store.save(&data).unwrap();
//! ```

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::Result;
use crate::reservation::Reservation;
use crate::room::{Room, RoomNumber, RoomStatus, RoomType};

/// The persisted document: all entity collections in one value.
///
/// This is the canonical on-disk schema; entity types carry their own
/// serde field names (`nightlyRate`, `checkIn`, and so on).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreData {
    /// All registered clients.
    #[serde(default)]
    pub clients: Vec<Client>,
    /// All rooms.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// All reservations, including cancelled and completed ones.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl StoreData {
    /// Returns the default seed data used when no persisted state exists.
    ///
    /// Seeds four rooms and no clients or reservations: 101 (single,
    /// 150.00), 102 (double, 250.00), 201 (suite, 400.00), and 202
    /// (double, 260.00, under maintenance).
    ///
    /// # Panics
    ///
    /// Never panics; the seed values are statically valid.
    #[must_use]
    pub fn seeded() -> Self {
        let room = |n: u32, kind, rate: f64| {
            Room::new(RoomNumber::try_from(n).expect("seed room number"), kind, rate)
                .expect("seed room rate")
        };

        Self {
            clients: Vec::new(),
            rooms: vec![
                room(101, RoomType::Single, 150.0),
                room(102, RoomType::Double, 250.0),
                room(201, RoomType::Suite, 400.0),
                room(202, RoomType::Double, 260.0).with_status(RoomStatus::Maintenance),
            ],
            reservations: Vec::new(),
        }
    }
}

/// Backing store for the persisted document.
///
/// The manager is generic over this trait so the embedding shell can pick
/// file-backed persistence ([`JsonStore`]) while tests run against
/// [`MemoryStore`].
pub trait Store {
    /// Loads the persisted document.
    ///
    /// Returns `Ok(None)` when no state has been persisted yet; a present
    /// but unreadable document is an error (the manager recovers from it
    /// by seeding defaults).
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<StoreData>>;

    /// Persists the document, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    fn save(&mut self, data: &StoreData) -> Result<()>;
}
