//! Availability checking for rooms over date ranges.
//!
//! The checker is a pure query: given a room, the current reservation list,
//! and a requested stay, it decides whether a booking may be created. It
//! never mutates anything; the [`crate::ReservationManager`] owns all
//! mutation and calls in here before creating a reservation.

use chrono::NaiveDate;

use crate::error::UnavailableReason;
use crate::reservation::{Reservation, StayRange};
use crate::room::{Room, RoomNumber, RoomStatus};

#[cfg(test)]
mod proptests;

/// Checks whether a room can host the requested stay.
///
/// Fails closed: a room under maintenance is unavailable for any range,
/// and any non-cancelled reservation on the same room whose half-open
/// interval overlaps the requested one blocks the booking.
///
/// # Errors
///
/// Returns the reason the room is unavailable: [`UnavailableReason::Maintenance`]
/// for the hard status, [`UnavailableReason::Conflict`] for an overlapping
/// reservation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotelcore::availability::check;
/// use hotelcore::{Room, RoomNumber, RoomType, StayRange};
///
/// let room = Room::new(RoomNumber::try_from(101).unwrap(), RoomType::Single, 150.0).unwrap();
/// let date = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
/// let stay = StayRange::new(date(1), date(3)).unwrap();
///
/// assert!(check(&room, &[], stay).is_ok());
/// ```
pub fn check(
    room: &Room,
    reservations: &[Reservation],
    stay: StayRange,
) -> Result<(), UnavailableReason> {
    if room.status() == RoomStatus::Maintenance {
        return Err(UnavailableReason::Maintenance);
    }

    let conflict = reservations.iter().any(|r| {
        r.room_number() == room.number() && r.status().blocks_room() && r.stay().overlaps(stay)
    });
    if conflict {
        return Err(UnavailableReason::Conflict);
    }

    Ok(())
}

/// Returns `true` if an active reservation on the given room covers `date`.
///
/// This is the computed-on-demand occupancy view: nothing stores an
/// "occupied" flag, it is derived from the reservation list whenever a
/// caller asks.
#[must_use]
pub fn occupied_on(room_number: RoomNumber, reservations: &[Reservation], date: NaiveDate) -> bool {
    reservations.iter().any(|r| {
        r.room_number() == room_number && r.status().blocks_room() && r.stay().contains(date)
    })
}
