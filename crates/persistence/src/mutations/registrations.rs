// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration record mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use school_enroll::NewRegistration;
use school_enroll_domain::format_date;

use crate::diesel_schema::registrations;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a registration record.
///
/// # Errors
///
/// Returns an error if a counter does not fit its column or the insert
/// fails, including a unique violation on the code or on
/// `(student_id, classroom_id)`.
pub fn insert_registration(
    conn: &mut _,
    registration: &NewRegistration,
) -> Result<(), PersistenceError> {
    let installments_quantity: i32 = i32::try_from(registration.installments_quantity)?;
    let month_duration: i32 = i32::try_from(registration.month_duration)?;

    diesel::insert_into(registrations::table)
        .values((
            registrations::registration_id.eq(registration.id.to_string()),
            registrations::code.eq(registration.code.value()),
            registrations::classroom_id.eq(registration.classroom_id.to_string()),
            registrations::student_id.eq(registration.student_id.to_string()),
            registrations::service_id.eq(registration.service_id.to_string()),
            registrations::shift.eq(registration.shift.as_str()),
            registrations::monthly_fee_cents.eq(registration.monthly_fee.cents()),
            registrations::installments_quantity.eq(installments_quantity),
            registrations::enrollment_fee_cents.eq(registration.enrollment_fee.cents()),
            registrations::enrollment_due_date.eq(registration.enrollment_due_date.map(format_date)),
            registrations::month_duration.eq(month_duration),
            registrations::payment_day.eq(i32::from(registration.payment_day)),
            registrations::status.eq(registration.status.as_str()),
            registrations::paid.eq(i32::from(registration.paid)),
            registrations::enrollment_date.eq(format_date(registration.enrollment_date)),
        ))
        .execute(conn)?;

    info!(
        code = %registration.code,
        student_id = %registration.student_id,
        classroom_id = %registration.classroom_id,
        "Registration written"
    );
    Ok(())
}
}
