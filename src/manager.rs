//! The reservation manager: single source of truth for all collections.
//!
//! [`ReservationManager`] owns the in-memory entity lists and is the only
//! component that mutates them. Every successful mutation is written
//! through to the injected [`Store`] immediately; a failed save is
//! surfaced to the caller but the in-memory change is kept (persistence is
//! best-effort, not transactional).
//!
//! The manager is an owned value handed to whichever layer needs it, with
//! its lifecycle tied to application start; there is no global instance.

use chrono::NaiveDate;

use crate::availability;
use crate::client::{Client, ClientId, Person};
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId, ReservationStatus, StayRange};
use crate::room::{Room, RoomNumber, RoomStatus, RoomType};
use crate::store::{Store, StoreData};

/// Manages clients, rooms, and reservations over an injected store.
///
/// # Examples
///
/// ```
/// use hotelcore::store::MemoryStore;
/// use hotelcore::ReservationManager;
///
/// let manager = ReservationManager::open(MemoryStore::default()).unwrap();
/// // Empty stores are seeded with the default rooms
/// assert_eq!(manager.list_rooms().len(), 4);
/// ```
#[derive(Debug)]
pub struct ReservationManager<S: Store> {
    store: S,
    clients: Vec<Client>,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl<S: Store> ReservationManager<S> {
    /// Opens a manager over the given store, seeding default rooms when no
    /// usable state exists.
    ///
    /// Corrupt persisted state is logged and replaced by the seed data; it
    /// is never a startup failure.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; the signature leaves room for
    /// stores whose load failures should not be recovered from.
    pub fn open(store: S) -> Result<Self> {
        Self::open_with(store, true)
    }

    /// Opens a manager, controlling whether missing state is seeded.
    ///
    /// With `seed_defaults` false, missing or corrupt state starts the
    /// manager empty instead of with the default rooms.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice; see [`ReservationManager::open`].
    pub fn open_with(store: S, seed_defaults: bool) -> Result<Self> {
        let data = match store.load() {
            Ok(Some(data)) => data,
            Ok(None) => {
                log::debug!("no persisted state found, starting fresh");
                Self::initial_data(seed_defaults)
            }
            Err(e) => {
                log::warn!("could not load persisted state, reseeding: {e}");
                Self::initial_data(seed_defaults)
            }
        };

        Ok(Self {
            store,
            clients: data.clients,
            rooms: data.rooms,
            reservations: data.reservations,
        })
    }

    fn initial_data(seed_defaults: bool) -> StoreData {
        if seed_defaults {
            StoreData::seeded()
        } else {
            StoreData::default()
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a mutable reference to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn persist(&mut self) -> Result<()> {
        let data = StoreData {
            clients: self.clients.clone(),
            rooms: self.rooms.clone(),
            reservations: self.reservations.clone(),
        };
        self.store.save(&data).map_err(|e| {
            log::warn!("failed to persist state: {e}");
            e
        })
    }

    // --- Clients ---

    /// Registers a new client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the client id or email collides
    /// with an existing client. A failed save keeps the in-memory change.
    pub fn add_client(&mut self, client: Client) -> Result<()> {
        if self.clients.iter().any(|c| c.id() == client.id()) {
            return Err(Error::DuplicateKey {
                field: "client id".into(),
                value: client.id().to_string(),
            });
        }
        if self.clients.iter().any(|c| c.email() == client.email()) {
            return Err(Error::DuplicateKey {
                field: "email".into(),
                value: client.email().to_string(),
            });
        }

        self.clients.push(client);
        self.persist()
    }

    /// Looks up a client by id.
    #[must_use]
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    /// Replaces a client's contact details.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the client does not exist, or
    /// [`Error::DuplicateKey`] if the new email collides with another
    /// client.
    pub fn update_client(&mut self, id: ClientId, person: Person) -> Result<Client> {
        let index = self
            .clients
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("client {id}"),
            })?;

        let email_taken = self
            .clients
            .iter()
            .any(|c| c.id() != id && c.email() == person.email());
        if email_taken {
            return Err(Error::DuplicateKey {
                field: "email".into(),
                value: person.email().to_string(),
            });
        }

        self.clients[index] = self.clients[index].with_person(person);
        let updated = self.clients[index].clone();
        self.persist()?;
        Ok(updated)
    }

    /// Removes a client, cascading to that client's reservations.
    ///
    /// Returns the number of reservations dropped by the cascade.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the client does not exist.
    pub fn remove_client(&mut self, id: ClientId) -> Result<usize> {
        let index = self
            .clients
            .iter()
            .position(|c| c.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("client {id}"),
            })?;

        self.clients.remove(index);
        let before = self.reservations.len();
        self.reservations.retain(|r| r.client_id() != id);
        let dropped = before - self.reservations.len();
        if dropped > 0 {
            log::debug!("removed client {id} and {dropped} reservation(s)");
        }
        self.persist()?;
        Ok(dropped)
    }

    /// Returns all clients, ordered by name.
    #[must_use]
    pub fn list_clients(&self) -> Vec<Client> {
        let mut clients = self.clients.clone();
        clients.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.email().cmp(b.email())));
        clients
    }

    // --- Rooms ---

    /// Adds a new room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the room number collides with an
    /// existing room.
    pub fn add_room(&mut self, room: Room) -> Result<()> {
        if self.rooms.iter().any(|r| r.number() == room.number()) {
            return Err(Error::DuplicateKey {
                field: "room number".into(),
                value: room.number().to_string(),
            });
        }

        self.rooms.push(room);
        self.persist()
    }

    /// Looks up a room by number.
    #[must_use]
    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// Replaces a room's type and nightly rate, keeping number and status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist, or
    /// [`Error::Validation`] if the rate is not a positive number.
    pub fn update_room(
        &mut self,
        number: RoomNumber,
        kind: RoomType,
        nightly_rate: f64,
    ) -> Result<Room> {
        let index = self.room_index(number)?;
        self.rooms[index] = self.rooms[index].with_details(kind, nightly_rate)?;
        let updated = self.rooms[index].clone();
        self.persist()?;
        Ok(updated)
    }

    /// Sets a room's stored status (for example, flagging maintenance).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist.
    pub fn set_room_status(&mut self, number: RoomNumber, status: RoomStatus) -> Result<()> {
        let index = self.room_index(number)?;
        self.rooms[index] = self.rooms[index].clone().with_status(status);
        self.persist()
    }

    /// Removes a room, cascading to reservations referencing it.
    ///
    /// Returns the number of reservations dropped by the cascade.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist.
    pub fn remove_room(&mut self, number: RoomNumber) -> Result<usize> {
        let index = self.room_index(number)?;
        self.rooms.remove(index);
        let before = self.reservations.len();
        self.reservations.retain(|r| r.room_number() != number);
        let dropped = before - self.reservations.len();
        if dropped > 0 {
            log::debug!("removed room {number} and {dropped} reservation(s)");
        }
        self.persist()?;
        Ok(dropped)
    }

    /// Returns all rooms, ordered by number.
    #[must_use]
    pub fn list_rooms(&self) -> Vec<Room> {
        let mut rooms = self.rooms.clone();
        rooms.sort_by_key(Room::number);
        rooms
    }

    /// Returns the rooms whose effective status on `date` matches `status`.
    ///
    /// Uses the computed occupancy view, so a room with an active
    /// reservation covering `date` counts as occupied even though nothing
    /// stores that flag.
    #[must_use]
    pub fn rooms_with_status(&self, status: RoomStatus, date: NaiveDate) -> Vec<Room> {
        self.list_rooms()
            .into_iter()
            .filter(|room| self.effective_status(room, date) == status)
            .collect()
    }

    /// Returns a room's effective status on the given date.
    ///
    /// `Maintenance` is the stored hard state; otherwise the room is
    /// `Occupied` when an active reservation covers the date and
    /// `Available` when none does.
    #[must_use]
    pub fn room_status_on(&self, number: RoomNumber, date: NaiveDate) -> Option<RoomStatus> {
        self.room(number)
            .map(|room| self.effective_status(room, date))
    }

    fn effective_status(&self, room: &Room, date: NaiveDate) -> RoomStatus {
        if room.status() == RoomStatus::Maintenance {
            return RoomStatus::Maintenance;
        }
        if availability::occupied_on(room.number(), &self.reservations, date) {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        }
    }

    fn room_index(&self, number: RoomNumber) -> Result<usize> {
        self.rooms
            .iter()
            .position(|r| r.number() == number)
            .ok_or_else(|| Error::NotFound {
                resource: format!("room {number}"),
            })
    }

    // --- Reservations ---

    /// Checks whether a room can host the given date range.
    ///
    /// Fails closed: a missing room or an invalid range is simply "not
    /// available". Pure query, no side effects.
    #[must_use]
    pub fn is_available(
        &self,
        number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> bool {
        let Ok(stay) = StayRange::new(check_in, check_out) else {
            return false;
        };
        let Some(room) = self.room(number) else {
            return false;
        };
        availability::check(room, &self.reservations, stay).is_ok()
    }

    /// Creates a confirmed reservation for a client on a room.
    ///
    /// # Errors
    ///
    /// In order: [`Error::NotFound`] if the client or room does not exist,
    /// [`Error::InvalidDateRange`] if `check_out` is not after `check_in`,
    /// [`Error::Unavailable`] if the room is under maintenance or an
    /// active reservation overlaps the requested range.
    pub fn create_reservation(
        &mut self,
        client_id: ClientId,
        number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation> {
        if self.client(client_id).is_none() {
            return Err(Error::NotFound {
                resource: format!("client {client_id}"),
            });
        }
        let room = self.room(number).ok_or_else(|| Error::NotFound {
            resource: format!("room {number}"),
        })?;

        let stay = StayRange::new(check_in, check_out)?;

        availability::check(room, &self.reservations, stay)
            .map_err(|reason| Error::Unavailable { room: number, reason })?;

        let reservation = Reservation::new(client_id, number, stay);
        log::debug!("created {reservation}");
        self.reservations.push(reservation.clone());
        self.persist()?;
        Ok(reservation)
    }

    /// Looks up a reservation by id.
    #[must_use]
    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// Cancels a reservation, freeing its room for the stay range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the reservation does not exist, or
    /// [`Error::InvalidTransition`] if it is already cancelled or
    /// completed. Cancelling twice is an error, never a silent success.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<()> {
        let index = self.reservation_index(id)?;
        let status = self.reservations[index].status();
        if status.is_terminal() {
            return Err(Error::InvalidTransition {
                reservation: id,
                status,
            });
        }

        self.reservations[index].set_status(ReservationStatus::Cancelled);
        self.persist()
    }

    /// Updates a reservation's stay range and status directly.
    ///
    /// The range is validated; no availability re-check is performed, as
    /// this is the shell's escape hatch for manual corrections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the reservation does not exist, or
    /// [`Error::InvalidDateRange`] for an invalid range.
    pub fn update_reservation(
        &mut self,
        id: ReservationId,
        check_in: NaiveDate,
        check_out: NaiveDate,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        let index = self.reservation_index(id)?;
        let stay = StayRange::new(check_in, check_out)?;

        self.reservations[index].set_stay(stay);
        self.reservations[index].set_status(status);
        let updated = self.reservations[index].clone();
        self.persist()?;
        Ok(updated)
    }

    /// Marks confirmed reservations whose check-out has elapsed as completed.
    ///
    /// A reservation completes once its check-out date is on or before
    /// `today`. Returns the number of reservations transitioned. Intended
    /// to run before listing reservations in interactive flows.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the transitions fails; the in-memory
    /// transitions are kept.
    pub fn refresh_completed(&mut self, today: NaiveDate) -> Result<usize> {
        let mut completed = 0;
        for reservation in &mut self.reservations {
            if reservation.status() == ReservationStatus::Confirmed
                && reservation.check_out() <= today
            {
                reservation.set_status(ReservationStatus::Completed);
                completed += 1;
            }
        }

        if completed > 0 {
            log::debug!("marked {completed} reservation(s) completed");
            self.persist()?;
        }
        Ok(completed)
    }

    /// Returns all reservations, ordered by check-in date.
    #[must_use]
    pub fn list_reservations(&self) -> Vec<Reservation> {
        let mut reservations = self.reservations.clone();
        reservations.sort_by_key(Reservation::check_in);
        reservations
    }

    /// Returns the reservations in the given status, ordered by check-in
    /// date.
    #[must_use]
    pub fn reservations_with_status(&self, status: ReservationStatus) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.status() == status)
            .cloned()
            .collect();
        reservations.sort_by_key(Reservation::check_in);
        reservations
    }

    /// Returns a client's reservations, ordered by check-in date.
    #[must_use]
    pub fn reservations_for_client(&self, id: ClientId) -> Vec<Reservation> {
        let mut reservations: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.client_id() == id)
            .cloned()
            .collect();
        reservations.sort_by_key(Reservation::check_in);
        reservations
    }

    fn reservation_index(&self, id: ReservationId) -> Result<usize> {
        self.reservations
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation {id}"),
            })
    }
}
