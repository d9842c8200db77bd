//! Error types for the hotelcore library.
//!
//! This module provides the error hierarchy for all operations in the
//! hotelcore library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;

use crate::reservation::{ReservationId, ReservationStatus};
use crate::room::RoomNumber;

/// Result type alias for operations that may fail with a hotelcore error.
///
/// # Examples
///
/// ```
/// use hotelcore::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotelcore library.
///
/// This enum encompasses all expected business-rule violations and
/// persistence failures. Business-rule violations are returned to the
/// caller as values rather than panicking; the embedding shell decides
/// how to present them.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested entity was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The entity that was not found.
        resource: String,
    },

    /// A unique key collided with an existing entity.
    #[error("duplicate {field}: {value}")]
    DuplicateKey {
        /// The unique field that collided (client id, email, room number).
        field: String,
        /// The colliding value.
        value: String,
    },

    /// A check-out date that is not strictly after its check-in date.
    #[error("invalid date range: check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },

    /// The room cannot be booked for the requested period.
    #[error("room {room} unavailable: {reason}")]
    Unavailable {
        /// The room that was requested.
        room: RoomNumber,
        /// Why the room is unavailable.
        reason: UnavailableReason,
    },

    /// A status change was requested on a reservation already in a
    /// terminal status.
    #[error("reservation {reservation} is already {status} and cannot change")]
    InvalidTransition {
        /// The reservation whose status change was rejected.
        reservation: ReservationId,
        /// The terminal status the reservation is in.
        status: ReservationStatus,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error occurred while loading or saving state.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed or serialized.
    #[error("persistence error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Reason why a room is unavailable for a requested period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The room is flagged for maintenance or cleaning.
    Maintenance,
    /// An active reservation overlaps the requested period.
    Conflict,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Maintenance => write!(f, "under maintenance"),
            Self::Conflict => write!(f, "conflicting reservation"),
        }
    }
}

/// Error type for validation failures on entity fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

// Additional conversions for better ergonomics

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::room::InvalidRoomNumberError> for Error {
    fn from(err: crate::room::InvalidRoomNumberError) -> Self {
        Self::Validation {
            field: "number".into(),
            message: format!("invalid room number {}: {}", err.value, err.reason),
        }
    }
}

impl From<crate::reservation::InvalidStayRangeError> for Error {
    fn from(err: crate::reservation::InvalidStayRangeError) -> Self {
        Self::InvalidDateRange {
            check_in: err.check_in,
            check_out: err.check_out,
        }
    }
}

impl Error {
    /// Check if error indicates an entity does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelcore::Error;
    ///
    /// let err = Error::NotFound { resource: "client abc".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error indicates the room cannot host the requested stay.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
