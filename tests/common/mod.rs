//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the hotelcore library.

use chrono::NaiveDate;

use hotelcore::store::MemoryStore;
use hotelcore::{Client, Person, ReservationManager, Room, RoomNumber, RoomStatus, RoomType};

/// Returns a date in June 2024, the month all scenario tests book in.
#[allow(dead_code)]
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

/// Builder for creating test clients with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ClientFixture;
/// let client = ClientFixture::new()
///     .with_name("Bruno Costa")
///     .with_email("bruno@example.com")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ClientFixture {
    name: String,
    phone: String,
    email: String,
}

#[allow(dead_code)]
impl ClientFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        Self {
            name: "Alice Silva".to_string(),
            phone: "(11) 98765-4321".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    /// Sets the client name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the client phone.
    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    /// Sets the client email.
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Client {
        Client::new(Person::new(self.name, self.phone, self.email).unwrap())
    }
}

/// Builder for creating test rooms with sensible defaults.
#[allow(dead_code)]
pub struct RoomFixture {
    number: u32,
    kind: RoomType,
    nightly_rate: f64,
    status: RoomStatus,
}

#[allow(dead_code)]
impl RoomFixture {
    /// Creates a new fixture builder for the given room number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            kind: RoomType::Single,
            nightly_rate: 150.0,
            status: RoomStatus::Available,
        }
    }

    /// Sets the room type.
    pub fn with_kind(mut self, kind: RoomType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the nightly rate.
    pub fn with_rate(mut self, nightly_rate: f64) -> Self {
        self.nightly_rate = nightly_rate;
        self
    }

    /// Sets the stored status.
    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the room.
    pub fn build(self) -> Room {
        Room::new(
            RoomNumber::try_from(self.number).unwrap(),
            self.kind,
            self.nightly_rate,
        )
        .unwrap()
        .with_status(self.status)
    }
}

/// Opens an empty manager (no seeding) over a memory store.
#[allow(dead_code)]
pub fn empty_manager() -> ReservationManager<MemoryStore> {
    ReservationManager::open_with(MemoryStore::default(), false).unwrap()
}
