//! Room inventory types.
//!
//! This module provides the room record and its validated building blocks:
//! the positive room number, the room type, and the single status enum from
//! which any boolean "available" view is derived.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A valid room number (positive integer).
///
/// Room numbers are the unique key for rooms; zero is rejected.
///
/// # Examples
///
/// ```
/// use hotelcore::RoomNumber;
///
/// let number = RoomNumber::try_from(101).unwrap();
/// assert_eq!(number.value(), 101);
///
/// assert!(RoomNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(u32);

impl RoomNumber {
    /// Returns the underlying room number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RoomNumber {
    type Error = InvalidRoomNumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(InvalidRoomNumberError {
                value,
                reason: "room number must be positive".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomNumberError {
    /// The invalid room number value.
    pub value: u32,
    /// The reason the number is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomNumberError {}

/// The category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    /// Single-occupancy room.
    Single,
    /// Double-occupancy room.
    Double,
    /// Suite.
    Suite,
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Double => write!(f, "double"),
            Self::Suite => write!(f, "suite"),
        }
    }
}

/// The standing status of a room.
///
/// This enum is the single stored representation of room state. Only
/// `Maintenance` is an operator-set hard state; whether a room is occupied
/// on a given day is computed from active reservations at query time, never
/// stored alongside the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// The room can be booked.
    Available,
    /// An active reservation covers the queried date. Derived, not stored.
    Occupied,
    /// Maintenance or cleaning pending; the room cannot be booked at all.
    Maintenance,
}

impl RoomStatus {
    /// Returns `true` if this status permits booking.
    ///
    /// This is the derived boolean view of the status enum.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelcore::RoomStatus;
    ///
    /// assert!(RoomStatus::Available.is_bookable());
    /// assert!(!RoomStatus::Maintenance.is_bookable());
    /// ```
    #[must_use]
    pub const fn is_bookable(self) -> bool {
        matches!(self, Self::Available | Self::Occupied)
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// A hotel room.
///
/// Rooms are keyed by their [`RoomNumber`] and carry a nightly rate that
/// must be a positive, finite number. New rooms start as
/// [`RoomStatus::Available`].
///
/// # Examples
///
/// ```
/// use hotelcore::{Room, RoomNumber, RoomStatus, RoomType};
///
/// let number = RoomNumber::try_from(101).unwrap();
/// let room = Room::new(number, RoomType::Single, 150.0).unwrap();
/// assert_eq!(room.status(), RoomStatus::Available);
///
/// // Invalid: non-positive rate
/// assert!(Room::new(number, RoomType::Single, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    #[serde(rename = "type")]
    kind: RoomType,
    #[serde(rename = "nightlyRate")]
    nightly_rate: f64,
    status: RoomStatus,
}

impl Room {
    /// Creates a new room with the given number, type, and nightly rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the nightly rate is not a positive, finite number.
    pub fn new(
        number: RoomNumber,
        kind: RoomType,
        nightly_rate: f64,
    ) -> Result<Self, ValidationError> {
        if !nightly_rate.is_finite() || nightly_rate <= 0.0 {
            return Err(ValidationError {
                field: "nightly_rate".into(),
                message: format!("nightly rate must be a positive number, got {nightly_rate}"),
            });
        }

        Ok(Self {
            number,
            kind,
            nightly_rate,
            status: RoomStatus::Available,
        })
    }

    /// Returns the room number.
    #[must_use]
    pub const fn number(&self) -> RoomNumber {
        self.number
    }

    /// Returns the room type.
    #[must_use]
    pub const fn kind(&self) -> RoomType {
        self.kind
    }

    /// Returns the nightly rate.
    #[must_use]
    pub const fn nightly_rate(&self) -> f64 {
        self.nightly_rate
    }

    /// Returns the stored status.
    #[must_use]
    pub const fn status(&self) -> RoomStatus {
        self.status
    }

    /// Returns a copy of this room with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a copy of this room with replaced type and rate.
    ///
    /// The number and status are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the nightly rate is not a positive, finite number.
    pub fn with_details(&self, kind: RoomType, nightly_rate: f64) -> Result<Self, ValidationError> {
        let updated = Self::new(self.number, kind, nightly_rate)?;
        Ok(updated.with_status(self.status))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} ({}, {:.2}/night, {})",
            self.number, self.kind, self.nightly_rate, self.status
        )
    }
}
