// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student identity queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use school_enroll_domain::{Document, StudentId};

use crate::diesel_schema::{addresses, guardians, phones, students};
use crate::error::PersistenceError;

backend_fn! {
/// Finds the student holding a document, if any.
///
/// # Errors
///
/// Returns an error if the query fails or the stored id does not parse.
pub fn find_student_id_by_document(
    conn: &mut _,
    document: &Document,
) -> Result<Option<StudentId>, PersistenceError> {
    debug!("Looking up student by document");

    let stored: Option<String> = students::table
        .filter(students::document.eq(document.as_str()))
        .select(students::student_id)
        .first::<String>(conn)
        .optional()?;

    Ok(stored.map(|id| id.parse::<StudentId>()).transpose()?)
}
}

backend_fn! {
/// Counts every stored student.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_students(conn: &mut _) -> Result<i64, PersistenceError> {
    Ok(students::table.count().get_result::<i64>(conn)?)
}
}

backend_fn! {
/// Counts the guardians attached to a student.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_guardians_for_student(
    conn: &mut _,
    student_id: StudentId,
) -> Result<i64, PersistenceError> {
    Ok(guardians::table
        .filter(guardians::student_id.eq(student_id.to_string()))
        .count()
        .get_result::<i64>(conn)?)
}
}

backend_fn! {
/// Counts the addresses and phones owned by a student or guardian.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_contacts_for_owner(conn: &mut _, owner_id: &str) -> Result<i64, PersistenceError> {
    let address_count: i64 = addresses::table
        .filter(addresses::owner_id.eq(owner_id))
        .count()
        .get_result(conn)?;
    let phone_count: i64 = phones::table
        .filter(phones::owner_id.eq(owner_id))
        .count()
        .get_result(conn)?;
    Ok(address_count + phone_count)
}
}
