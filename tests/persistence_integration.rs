//! Persistence round-trips through the file-backed JSON store.

mod common;

use std::fs;

use common::{june, ClientFixture, RoomFixture};
use hotelcore::store::{JsonStore, Store, StoreData};
use hotelcore::{ReservationManager, ReservationStatus, RoomNumber, RoomStatus};

/// Save followed by load reproduces an equivalent set of clients, rooms,
/// and reservations: same ids, same field values.
#[test]
fn test_manager_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let client = ClientFixture::new().build();
    let client_id = client.id();
    let room = RoomNumber::try_from(101).unwrap();
    let reservation_id;

    {
        let mut manager =
            ReservationManager::open_with(JsonStore::new(&path), false).unwrap();
        manager.add_client(client.clone()).unwrap();
        manager
            .add_room(RoomFixture::new(101).with_rate(150.0).build())
            .unwrap();
        let reservation = manager
            .create_reservation(client_id, room, june(1), june(3))
            .unwrap();
        reservation_id = reservation.id();
    }

    let manager = ReservationManager::open(JsonStore::new(&path)).unwrap();

    let clients = manager.list_clients();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0], client);

    let rooms = manager.list_rooms();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].number(), room);

    let reservations = manager.list_reservations();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id(), reservation_id);
    assert_eq!(reservations[0].check_in(), june(1));
    assert_eq!(reservations[0].check_out(), june(3));
    assert_eq!(reservations[0].status(), ReservationStatus::Confirmed);

    // And the loaded state still enforces the overlap invariant
    assert!(!manager.is_available(room, june(2), june(4)));
}

/// A missing data file seeds the default rooms.
#[test]
fn test_missing_file_seeds_default_rooms() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let manager = ReservationManager::open(JsonStore::new(&path)).unwrap();
    let rooms = manager.list_rooms();
    assert_eq!(rooms.len(), 4);

    let numbers: Vec<u32> = rooms.iter().map(|r| r.number().value()).collect();
    assert_eq!(numbers, vec![101, 102, 201, 202]);
    assert_eq!(rooms[3].status(), RoomStatus::Maintenance);
}

/// A corrupt data file is replaced by the seed data instead of failing
/// startup.
#[test]
fn test_corrupt_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{\"rooms\": [{\"number\": \"oops\"}]}").unwrap();

    let manager = ReservationManager::open(JsonStore::new(&path)).unwrap();
    assert_eq!(manager.list_rooms().len(), 4);
    assert!(manager.list_clients().is_empty());
}

/// Every successful mutation is written through immediately.
#[test]
fn test_mutations_write_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut manager =
        ReservationManager::open_with(JsonStore::new(&path), false).unwrap();
    let client = ClientFixture::new().build();
    let client_id = client.id();
    manager.add_client(client).unwrap();
    manager.add_room(RoomFixture::new(101).build()).unwrap();

    // Inspect the file between mutations: the client and room are already there
    let on_disk = JsonStore::new(&path).load().unwrap().unwrap();
    assert_eq!(on_disk.clients.len(), 1);
    assert_eq!(on_disk.rooms.len(), 1);
    assert!(on_disk.reservations.is_empty());

    let room = RoomNumber::try_from(101).unwrap();
    let reservation = manager
        .create_reservation(client_id, room, june(1), june(3))
        .unwrap();
    manager.cancel_reservation(reservation.id()).unwrap();

    let on_disk = JsonStore::new(&path).load().unwrap().unwrap();
    assert_eq!(on_disk.reservations.len(), 1);
}

/// The persisted document uses the canonical schema and date format.
#[test]
fn test_on_disk_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut manager =
        ReservationManager::open_with(JsonStore::new(&path), false).unwrap();
    let client = ClientFixture::new().build();
    let client_id = client.id();
    manager.add_client(client).unwrap();
    manager.add_room(RoomFixture::new(101).build()).unwrap();
    manager
        .create_reservation(
            client_id,
            RoomNumber::try_from(101).unwrap(),
            june(1),
            june(3),
        )
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"clients\""));
    assert!(contents.contains("\"rooms\""));
    assert!(contents.contains("\"reservations\""));
    assert!(contents.contains("\"nightlyRate\""));
    assert!(contents.contains("\"clientId\""));
    assert!(contents.contains("\"roomNumber\""));
    assert!(contents.contains("\"checkIn\": \"01-06-2024\""));
    assert!(contents.contains("\"checkOut\": \"03-06-2024\""));
}

/// Cancelled reservations are kept in the document, never deleted.
#[test]
fn test_cancelled_reservations_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut manager =
        ReservationManager::open_with(JsonStore::new(&path), false).unwrap();
    let client = ClientFixture::new().build();
    let client_id = client.id();
    manager.add_client(client).unwrap();
    manager.add_room(RoomFixture::new(101).build()).unwrap();
    let reservation = manager
        .create_reservation(
            client_id,
            RoomNumber::try_from(101).unwrap(),
            june(1),
            june(3),
        )
        .unwrap();
    manager.cancel_reservation(reservation.id()).unwrap();

    let on_disk = JsonStore::new(&path).load().unwrap().unwrap();
    assert_eq!(on_disk.reservations.len(), 1);
    assert_eq!(on_disk.reservations[0].status(), ReservationStatus::Cancelled);
}

/// Seeded data round-trips byte-for-byte equal through the store.
#[test]
fn test_store_data_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonStore::new(dir.path().join("data.json"));

    let data = StoreData::seeded();
    store.save(&data).unwrap();
    assert_eq!(store.load().unwrap().unwrap(), data);
}
