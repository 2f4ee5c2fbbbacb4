// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classroom and service mutations, including the conditional seat increment.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use school_enroll::SeatUpdate;
use school_enroll_domain::{Classroom, ClassroomId, ClassroomStatus, Service};

use crate::diesel_schema::{classrooms, services};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a service.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_service(conn: &mut _, service: &Service) -> Result<(), PersistenceError> {
    diesel::insert_into(services::table)
        .values((
            services::service_id.eq(service.id().to_string()),
            services::description.eq(service.description()),
            services::price_cents.eq(service.price().cents()),
        ))
        .execute(conn)?;

    info!(service_id = %service.id(), "Service created");
    Ok(())
}
}

backend_fn! {
/// Inserts a classroom with its current seat counters.
///
/// # Errors
///
/// Returns an error if a counter does not fit the column or the insert fails.
pub fn insert_classroom(conn: &mut _, classroom: &Classroom) -> Result<(), PersistenceError> {
    let capacity: i32 = i32::try_from(classroom.capacity())?;
    let occupied_seats: i32 = i32::try_from(classroom.occupied_seats())?;

    diesel::insert_into(classrooms::table)
        .values((
            classrooms::classroom_id.eq(classroom.id().to_string()),
            classrooms::identification.eq(classroom.identification()),
            classrooms::shift.eq(classroom.shift().as_str()),
            classrooms::capacity.eq(capacity),
            classrooms::occupied_seats.eq(occupied_seats),
            classrooms::status.eq(classroom.status().as_str()),
        ))
        .execute(conn)?;

    info!(
        classroom_id = %classroom.id(),
        capacity,
        occupied_seats,
        "Classroom created"
    );
    Ok(())
}
}

backend_fn! {
/// Opens or closes a classroom.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no classroom has this id.
pub fn update_classroom_status(
    conn: &mut _,
    id: ClassroomId,
    status: ClassroomStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(classrooms::table)
        .filter(classrooms::classroom_id.eq(id.to_string()))
        .set(classrooms::status.eq(status.as_str()))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Classroom {id}")));
    }

    info!(classroom_id = %id, %status, "Classroom status updated");
    Ok(())
}
}

backend_fn! {
/// Increments `occupied_seats` if and only if it is below `capacity`.
///
/// The guard lives in the `WHERE` clause, so the increment can never push
/// the counter past capacity even if the caller's earlier read is stale.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn reserve_seat(conn: &mut _, id: ClassroomId) -> Result<SeatUpdate, PersistenceError> {
    let updated: usize = diesel::update(classrooms::table)
        .filter(classrooms::classroom_id.eq(id.to_string()))
        .filter(classrooms::occupied_seats.lt(classrooms::capacity))
        .set(classrooms::occupied_seats.eq(classrooms::occupied_seats + 1))
        .execute(conn)?;

    debug!(classroom_id = %id, updated, "Conditional seat increment");

    Ok(if updated == 1 {
        SeatUpdate::Reserved
    } else {
        SeatUpdate::Full
    })
}
}
