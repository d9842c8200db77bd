#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotelcore
//!
//! A library implementing the logic core of a small hotel-management
//! application: clients, rooms, and reservations with overlap-based
//! availability checking and JSON-file persistence.
//!
//! ## Core Types
//!
//! - [`Client`] and [`Person`]: Guest records with validated contact details
//! - [`Room`], [`RoomNumber`], [`RoomType`], [`RoomStatus`]: Room inventory
//! - [`Reservation`] and [`StayRange`]: Bookings over half-open date intervals
//! - [`ReservationManager`]: The single source of truth for all collections
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use hotelcore::store::MemoryStore;
//! use hotelcore::{Client, Person, ReservationManager, Room, RoomNumber, RoomType};
//!
//! let mut manager = ReservationManager::open(MemoryStore::default()).unwrap();
//!
//! let person = Person::new("Alice Silva", "(11) 98765-4321", "alice@example.com").unwrap();
//! let client = Client::new(person);
//! let client_id = client.id();
//! manager.add_client(client).unwrap();
//!
//! let number = RoomNumber::try_from(305).unwrap();
//! manager
//!     .add_room(Room::new(number, RoomType::Double, 250.0).unwrap())
//!     .unwrap();
//!
//! let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let check_out = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
//! let reservation = manager
//!     .create_reservation(client_id, number, check_in, check_out)
//!     .unwrap();
//!
//! assert!(!manager.is_available(number, check_in, check_out));
//! manager.cancel_reservation(reservation.id()).unwrap();
//! assert!(manager.is_available(number, check_in, check_out));
//! ```

pub mod availability;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod manager;
pub mod reservation;
pub mod room;
pub mod store;

// Re-export key types at crate root for convenience
pub use client::{Client, ClientId, Person};
pub use config::{default_data_dir, Config, ConfigBuilder};
pub use error::{Error, Result, UnavailableReason, ValidationError};
pub use logging::{init_logger, LogLevel, Logger};
pub use manager::ReservationManager;
pub use reservation::{Reservation, ReservationId, ReservationStatus, StayRange};
pub use room::{Room, RoomNumber, RoomStatus, RoomType};
pub use store::{JsonStore, MemoryStore, Store, StoreData};
