// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classroom and service queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use school_enroll_domain::{Classroom, ClassroomId, Money, Service, ServiceId};

use crate::diesel_schema::{classrooms, services};
use crate::error::PersistenceError;

/// Diesel Queryable struct for classroom rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = classrooms)]
pub struct ClassroomRow {
    pub classroom_id: String,
    pub identification: String,
    pub shift: String,
    pub capacity: i32,
    pub occupied_seats: i32,
    pub status: String,
}

impl ClassroomRow {
    /// Rebuilds the domain classroom, re-checking the seat invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if any stored value no longer parses.
    pub fn into_classroom(self) -> Result<Classroom, PersistenceError> {
        Ok(Classroom::new(
            self.classroom_id.parse()?,
            self.identification,
            self.shift.parse()?,
            u32::try_from(self.capacity)?,
            u32::try_from(self.occupied_seats)?,
            self.status.parse()?,
        )?)
    }
}

/// Diesel Queryable struct for service rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = services)]
struct ServiceRow {
    service_id: String,
    description: String,
    price_cents: i64,
}

impl ServiceRow {
    fn into_service(self) -> Result<Service, PersistenceError> {
        Ok(Service::new(
            self.service_id.parse()?,
            self.description,
            Money::from_cents(self.price_cents),
        ))
    }
}

backend_fn! {
/// Finds a classroom by id without taking a lock.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn find_classroom(
    conn: &mut _,
    id: ClassroomId,
) -> Result<Option<Classroom>, PersistenceError> {
    debug!(classroom_id = %id, "Looking up classroom");

    classrooms::table
        .filter(classrooms::classroom_id.eq(id.to_string()))
        .select(ClassroomRow::as_select())
        .first::<ClassroomRow>(conn)
        .optional()?
        .map(ClassroomRow::into_classroom)
        .transpose()
}
}

backend_fn! {
/// Finds a service by id.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn find_service(conn: &mut _, id: ServiceId) -> Result<Option<Service>, PersistenceError> {
    debug!(service_id = %id, "Looking up service");

    services::table
        .filter(services::service_id.eq(id.to_string()))
        .select(ServiceRow::as_select())
        .first::<ServiceRow>(conn)
        .optional()?
        .map(ServiceRow::into_service)
        .transpose()
}
}

/// Reads a classroom inside a `BEGIN IMMEDIATE` transaction.
///
/// `SQLite` has no row locks; the write lock taken when the transaction
/// opened already excludes every other writer, so a plain read suffices.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn find_classroom_for_update_sqlite(
    conn: &mut SqliteConnection,
    id: ClassroomId,
) -> Result<Option<Classroom>, PersistenceError> {
    find_classroom_sqlite(conn, id)
}

/// Reads a classroom with `SELECT ... FOR UPDATE`.
///
/// The row lock is held until the enclosing transaction ends.
///
/// # Errors
///
/// Returns an error if the query fails, the lock wait exceeds
/// `innodb_lock_wait_timeout`, or the row cannot be converted.
pub fn find_classroom_for_update_mysql(
    conn: &mut MysqlConnection,
    id: ClassroomId,
) -> Result<Option<Classroom>, PersistenceError> {
    debug!(classroom_id = %id, "Locking classroom row");

    classrooms::table
        .filter(classrooms::classroom_id.eq(id.to_string()))
        .select(ClassroomRow::as_select())
        .for_update()
        .first::<ClassroomRow>(conn)
        .optional()?
        .map(ClassroomRow::into_classroom)
        .transpose()
}
