// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use school_enroll_domain::{ClassroomId, RegistrationCode, StudentId};

use crate::data_models::RegistrationData;
use crate::diesel_schema::registrations;
use crate::error::PersistenceError;

/// Diesel Queryable struct for full registration rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = registrations)]
struct RegistrationRow {
    registration_id: String,
    code: String,
    classroom_id: String,
    student_id: String,
    service_id: String,
    shift: String,
    monthly_fee_cents: i64,
    installments_quantity: i32,
    enrollment_fee_cents: i64,
    enrollment_due_date: Option<String>,
    month_duration: i32,
    payment_day: i32,
    status: String,
    paid: i32,
    enrollment_date: String,
}

impl TryFrom<RegistrationRow> for RegistrationData {
    type Error = PersistenceError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            registration_id: row.registration_id,
            code: row.code,
            classroom_id: row.classroom_id,
            student_id: row.student_id,
            service_id: row.service_id,
            shift: row.shift,
            monthly_fee_cents: row.monthly_fee_cents,
            installments_quantity: u32::try_from(row.installments_quantity)?,
            enrollment_fee_cents: row.enrollment_fee_cents,
            enrollment_due_date: row.enrollment_due_date,
            month_duration: u32::try_from(row.month_duration)?,
            payment_day: u8::try_from(row.payment_day)?,
            status: row.status,
            paid: row.paid != 0,
            enrollment_date: row.enrollment_date,
        })
    }
}

backend_fn! {
/// Finds the code of a student's registration in a classroom.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_code_by_student_and_classroom(
    conn: &mut _,
    student_id: StudentId,
    classroom_id: ClassroomId,
) -> Result<Option<RegistrationCode>, PersistenceError> {
    debug!(%student_id, %classroom_id, "Checking for an existing registration");

    let code: Option<String> = registrations::table
        .filter(registrations::student_id.eq(student_id.to_string()))
        .filter(registrations::classroom_id.eq(classroom_id.to_string()))
        .select(registrations::code)
        .first::<String>(conn)
        .optional()?;

    Ok(code.map(RegistrationCode::from_stored))
}
}

backend_fn! {
/// Returns whether any registration holds `code`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn registration_code_exists(
    conn: &mut _,
    code: &RegistrationCode,
) -> Result<bool, PersistenceError> {
    let taken: i64 = registrations::table
        .filter(registrations::code.eq(code.value()))
        .count()
        .get_result::<i64>(conn)?;
    Ok(taken > 0)
}
}

backend_fn! {
/// Retrieves a registration by its code.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be converted.
pub fn find_registration_by_code(
    conn: &mut _,
    code: &str,
) -> Result<Option<RegistrationData>, PersistenceError> {
    registrations::table
        .filter(registrations::code.eq(code))
        .select(RegistrationRow::as_select())
        .first::<RegistrationRow>(conn)
        .optional()?
        .map(RegistrationData::try_from)
        .transpose()
}
}

backend_fn! {
/// Counts the registrations recorded for a classroom.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_registrations_for_classroom(
    conn: &mut _,
    classroom_id: ClassroomId,
) -> Result<i64, PersistenceError> {
    Ok(registrations::table
        .filter(registrations::classroom_id.eq(classroom_id.to_string()))
        .count()
        .get_result::<i64>(conn)?)
}
}
