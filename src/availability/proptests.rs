//! Property-based tests for availability checking.
//!
//! These tests focus on the half-open overlap semantics and the invariants
//! of the pure checker.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use crate::error::UnavailableReason;
use crate::reservation::{Reservation, ReservationStatus, StayRange};
use crate::room::{Room, RoomNumber, RoomType};
use crate::ClientId;

use super::check;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// Strategy for generating stay ranges as (start offset, nights) day pairs
fn stay_strategy() -> impl Strategy<Value = StayRange> {
    (0i64..365, 1i64..30).prop_map(|(offset, nights)| {
        let check_in = base_date() + Duration::days(offset);
        let check_out = check_in + Duration::days(nights);
        StayRange::new(check_in, check_out).unwrap()
    })
}

fn test_room() -> Room {
    Room::new(RoomNumber::try_from(101).unwrap(), RoomType::Single, 150.0).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Overlap is symmetric
    #[test]
    fn overlap_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(a.overlaps(b), b.overlaps(a));
    }

    // Every stay overlaps itself
    #[test]
    fn overlap_reflexive(a in stay_strategy()) {
        prop_assert!(a.overlaps(a));
    }

    // Back-to-back stays never overlap, regardless of length
    #[test]
    fn back_to_back_never_overlaps(a in stay_strategy(), nights in 1i64..30) {
        let next = StayRange::new(a.check_out(), a.check_out() + Duration::days(nights)).unwrap();
        prop_assert!(!a.overlaps(next));
        prop_assert!(!next.overlaps(a));
    }

    // Overlap agrees with sharing at least one occupied night
    #[test]
    fn overlap_matches_shared_night(a in stay_strategy(), b in stay_strategy()) {
        let mut day = a.check_in();
        let mut shared = false;
        while day < a.check_out() {
            if b.contains(day) {
                shared = true;
                break;
            }
            day = day.succ_opt().unwrap();
        }
        prop_assert_eq!(a.overlaps(b), shared);
    }

    // A confirmed reservation blocks exactly the ranges it overlaps
    #[test]
    fn checker_agrees_with_overlap(existing in stay_strategy(), requested in stay_strategy()) {
        let room = test_room();
        let reservation = Reservation::new(ClientId::new(), room.number(), existing);
        let result = check(&room, &[reservation], requested);

        if existing.overlaps(requested) {
            prop_assert_eq!(result, Err(UnavailableReason::Conflict));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    // Cancelling always frees the slot
    #[test]
    fn cancelled_never_blocks(existing in stay_strategy(), requested in stay_strategy()) {
        let room = test_room();
        let mut reservation = Reservation::new(ClientId::new(), room.number(), existing);
        reservation.set_status(ReservationStatus::Cancelled);
        prop_assert!(check(&room, &[reservation], requested).is_ok());
    }
}
