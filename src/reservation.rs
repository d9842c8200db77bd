//! Reservation types and date-range handling.
//!
//! This module provides the reservation record, its status state machine,
//! and [`StayRange`], the validated half-open `[check_in, check_out)` date
//! interval used for every overlap comparison in the crate.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::room::{Room, RoomNumber};
use crate::ClientId;

/// Date serialization helpers for the persisted document.
///
/// Dates are stored as `DD-MM-YYYY` strings; the same format is used for
/// storage and for parsing shell input, so overlap comparisons and the
/// persisted document never disagree on a date's meaning.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::ValidationError;

    /// The canonical date format for persisted and displayed dates.
    pub const FORMAT: &str = "%d-%m-%Y";

    /// Formats a date in the canonical `DD-MM-YYYY` format.
    #[must_use]
    pub fn format_date(date: NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    /// Parses a date from the canonical `DD-MM-YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid date in that format.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelcore::reservation::date_format::parse_date;
    ///
    /// let date = parse_date("01-06-2024").unwrap();
    /// assert_eq!(date.to_string(), "2024-06-01");
    /// assert!(parse_date("2024-06-01").is_err());
    /// ```
    pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
        NaiveDate::parse_from_str(s, FORMAT).map_err(|e| ValidationError {
            field: "date".into(),
            message: format!("expected DD-MM-YYYY, got {s:?}: {e}"),
        })
    }

    /// Serde serializer for `DD-MM-YYYY` date fields.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(*date))
    }

    /// Serde deserializer for `DD-MM-YYYY` date fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a valid `DD-MM-YYYY` string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// A unique identifier for a reservation.
///
/// Generated as a random UUID when a reservation is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    /// Generates a new random reservation identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The status of a reservation.
///
/// `Cancelled` and `Completed` are terminal: a reservation never leaves
/// either status, and reservations are never deleted, only cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Active booking; blocks the room for its stay range.
    Confirmed,
    /// Cancelled; frees the room for its stay range. Terminal.
    Cancelled,
    /// The stay has ended. Terminal.
    Completed,
}

impl ReservationStatus {
    /// Returns `true` if this status is terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotelcore::ReservationStatus;
    ///
    /// assert!(ReservationStatus::Cancelled.is_terminal());
    /// assert!(ReservationStatus::Completed.is_terminal());
    /// assert!(!ReservationStatus::Confirmed.is_terminal());
    /// ```
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Returns `true` if a reservation in this status blocks its room.
    ///
    /// Every status except `Cancelled` blocks; a completed stay still
    /// occupies its (past) date range.
    #[must_use]
    pub const fn blocks_room(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

// Wire representation; lets deserialization run the same validation as `new`.
#[derive(Serialize, Deserialize)]
struct StayRangeRepr {
    #[serde(rename = "checkIn", with = "date_format")]
    check_in: NaiveDate,
    #[serde(rename = "checkOut", with = "date_format")]
    check_out: NaiveDate,
}

/// A half-open `[check_in, check_out)` date interval.
///
/// The check-out date is always strictly after the check-in date; a value
/// of this type cannot represent an empty or inverted stay. The check-out
/// day itself is not occupied, so back-to-back stays on the same room are
/// not considered overlapping.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelcore::StayRange;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let stay = StayRange::new(check_in, check_out).unwrap();
/// assert_eq!(stay.nights(), 2);
///
/// // Invalid: zero-length stay
/// assert!(StayRange::new(check_in, check_in).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StayRangeRepr", into = "StayRangeRepr")]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// Creates a new stay range.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, InvalidStayRangeError> {
        if check_out <= check_in {
            return Err(InvalidStayRangeError {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(self) -> NaiveDate {
        self.check_in
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn check_out(self) -> NaiveDate {
        self.check_out
    }

    /// Returns the number of nights in this stay.
    #[must_use]
    pub fn nights(self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns `true` if the two stays share at least one night.
    ///
    /// Two half-open intervals `[a0, a1)` and `[b0, b1)` overlap iff
    /// `a0 < b1 && b0 < a1`. Sharing only a boundary day (one stay checks
    /// out the day the other checks in) is not an overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotelcore::StayRange;
    ///
    /// let date = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
    /// let first = StayRange::new(date(1), date(3)).unwrap();
    /// let second = StayRange::new(date(2), date(4)).unwrap();
    /// let back_to_back = StayRange::new(date(3), date(5)).unwrap();
    ///
    /// assert!(first.overlaps(second));
    /// assert!(!first.overlaps(back_to_back));
    /// ```
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns `true` if the given date falls within the stay.
    ///
    /// The check-in day is included; the check-out day is not.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }
}

impl fmt::Display for StayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            date_format::format_date(self.check_in),
            date_format::format_date(self.check_out)
        )
    }
}

impl TryFrom<StayRangeRepr> for StayRange {
    type Error = InvalidStayRangeError;

    fn try_from(repr: StayRangeRepr) -> Result<Self, Self::Error> {
        Self::new(repr.check_in, repr.check_out)
    }
}

impl From<StayRange> for StayRangeRepr {
    fn from(range: StayRange) -> Self {
        Self {
            check_in: range.check_in,
            check_out: range.check_out,
        }
    }
}

/// Error type for inverted or empty stay ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStayRangeError {
    /// The requested check-in date.
    pub check_in: NaiveDate,
    /// The requested check-out date.
    pub check_out: NaiveDate,
}

impl fmt::Display for InvalidStayRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "check-out {} must be after check-in {}",
            date_format::format_date(self.check_out),
            date_format::format_date(self.check_in)
        )
    }
}

impl std::error::Error for InvalidStayRangeError {}

/// A booking of one room for one client over a stay range.
///
/// Reservations reference their client and room by key rather than owning
/// them; the [`crate::ReservationManager`] resolves the references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    #[serde(rename = "clientId")]
    client_id: ClientId,
    #[serde(rename = "roomNumber")]
    room_number: RoomNumber,
    #[serde(flatten)]
    stay: StayRange,
    status: ReservationStatus,
}

impl Reservation {
    /// Creates a new confirmed reservation with a generated identifier.
    #[must_use]
    pub fn new(client_id: ClientId, room_number: RoomNumber, stay: StayRange) -> Self {
        Self {
            id: ReservationId::new(),
            client_id,
            room_number,
            stay,
            status: ReservationStatus::Confirmed,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the identifier of the booking client.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the number of the booked room.
    #[must_use]
    pub const fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    /// Returns the stay range.
    #[must_use]
    pub const fn stay(&self) -> StayRange {
        self.stay
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.stay.check_in()
    }

    /// Returns the check-out date (exclusive).
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.stay.check_out()
    }

    /// Returns the reservation status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the number of nights in the stay.
    #[must_use]
    pub fn nights(&self) -> i64 {
        self.stay.nights()
    }

    /// Returns the total cost of the stay for the given room.
    ///
    /// The caller resolves the room; a reservation only stores the room
    /// number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_cost(&self, room: &Room) -> f64 {
        self.nights() as f64 * room.nightly_rate()
    }

    pub(crate) fn set_status(&mut self, status: ReservationStatus) {
        self.status = status;
    }

    pub(crate) fn set_stay(&mut self, stay: StayRange) {
        self.stay = stay;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reservation {} (room {}, {}, {})",
            self.id, self.room_number, self.stay, self.status
        )
    }
}
