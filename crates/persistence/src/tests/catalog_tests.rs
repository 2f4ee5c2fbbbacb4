// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_enroll::{
    ClassroomLookup, ReferenceLookup, SeatUpdate, TransactionManager, UnitOfWork,
};
use school_enroll_domain::{ClassroomId, ClassroomStatus, ServiceId, Shift};

use crate::tests::{create_test_classroom, create_test_service};
use crate::{Persistence, PersistenceError};

#[test]
fn test_create_and_get_classroom() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 25, 3);

    let classroom = persistence.get_classroom(classroom_id).unwrap();
    assert_eq!(classroom.id(), classroom_id);
    assert_eq!(classroom.identification(), "1A");
    assert_eq!(classroom.shift(), Shift::Morning);
    assert_eq!(classroom.capacity(), 25);
    assert_eq!(classroom.occupied_seats(), 3);
    assert_eq!(classroom.status(), ClassroomStatus::Open);
}

#[test]
fn test_get_missing_classroom_is_not_found() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let result = persistence.get_classroom(ClassroomId::new_random());
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_classroom_occupancy_view() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 20, 15);

    let occupancy = persistence.get_classroom_occupancy(classroom_id).unwrap();
    assert_eq!(occupancy.classroom_id, classroom_id.to_string());
    assert_eq!(occupancy.capacity, 20);
    assert_eq!(occupancy.occupied_seats, 15);
    assert_eq!(occupancy.remaining_seats, 5);
    assert_eq!(occupancy.shift, "morning");
    assert_eq!(occupancy.status, "open");
}

#[test]
fn test_set_classroom_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 10, 0);

    persistence
        .set_classroom_status(classroom_id, ClassroomStatus::Closed)
        .unwrap();
    assert_eq!(
        persistence.get_classroom(classroom_id).unwrap().status(),
        ClassroomStatus::Closed
    );

    persistence
        .set_classroom_status(classroom_id, ClassroomStatus::Open)
        .unwrap();
    assert_eq!(
        persistence.get_classroom(classroom_id).unwrap().status(),
        ClassroomStatus::Open
    );
}

#[test]
fn test_set_status_of_missing_classroom_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let result = persistence.set_classroom_status(ClassroomId::new_random(), ClassroomStatus::Closed);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_reference_lookup_returns_none_for_unknown_ids() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(
        persistence.find_classroom(ClassroomId::new_random()).unwrap(),
        None
    );
    assert_eq!(persistence.find_service(ServiceId::new_random()).unwrap(), None);
}

#[test]
fn test_reference_lookup_finds_seeded_rows() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 10, 2);
    let service_id = create_test_service(&mut persistence, 250_000);

    let classroom = persistence.find_classroom(classroom_id).unwrap().unwrap();
    assert_eq!(classroom.occupied_seats(), 2);

    let service = persistence.find_service(service_id).unwrap().unwrap();
    assert_eq!(service.price().cents(), 250_000);
    assert_eq!(service.description(), "Elementary tuition");
}

#[test]
fn test_reserve_seat_increments_until_full() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 2, 1);

    let mut tx = persistence.begin().unwrap();
    assert_eq!(tx.reserve_seat(classroom_id).unwrap(), SeatUpdate::Reserved);
    assert_eq!(tx.reserve_seat(classroom_id).unwrap(), SeatUpdate::Full);
    tx.commit().unwrap();

    assert_eq!(
        persistence.get_classroom(classroom_id).unwrap().occupied_seats(),
        2
    );
}

#[test]
fn test_reserve_seat_is_discarded_on_rollback() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 5, 0);

    let mut tx = persistence.begin().unwrap();
    assert_eq!(tx.reserve_seat(classroom_id).unwrap(), SeatUpdate::Reserved);
    tx.rollback().unwrap();

    assert_eq!(
        persistence.get_classroom(classroom_id).unwrap().occupied_seats(),
        0
    );
}

#[test]
fn test_dropped_transaction_rolls_back() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 5, 0);

    {
        let mut tx = persistence.begin().unwrap();
        assert_eq!(tx.reserve_seat(classroom_id).unwrap(), SeatUpdate::Reserved);
    }

    assert_eq!(
        persistence.get_classroom(classroom_id).unwrap().occupied_seats(),
        0
    );

    // The connection is usable for a fresh unit of work afterwards.
    let tx = persistence.begin().unwrap();
    tx.commit().unwrap();
}

#[test]
fn test_locked_read_inside_transaction() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 4, 4);

    let mut tx = persistence.begin().unwrap();
    let classroom = tx.find_classroom_for_update(classroom_id).unwrap().unwrap();
    assert!(!classroom.has_vacancy());
    assert_eq!(
        tx.find_classroom_for_update(ClassroomId::new_random()).unwrap(),
        None
    );
    tx.rollback().unwrap();
}

#[test]
fn test_database_rejects_occupancy_above_capacity() {
    use diesel::RunQueryDsl;

    let mut persistence = Persistence::new_in_memory().unwrap();
    let classroom_id = create_test_classroom(&mut persistence, 3, 3);

    let crate::BackendConnection::Sqlite(conn) = &mut persistence.conn else {
        panic!("in-memory persistence is always SQLite");
    };
    let result = diesel::sql_query(format!(
        "UPDATE classrooms SET occupied_seats = 4 WHERE classroom_id = '{classroom_id}'"
    ))
    .execute(conn);

    assert!(result.is_err(), "CHECK (occupied_seats <= capacity) must hold");
}
