// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student graph mutations.
//!
//! The graph is the student row, its guardians, and every address and phone
//! owned by any of them. The student row is written first so the guardian
//! foreign key is satisfied.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use school_enroll_domain::{Guardian, PersonDetails, Student, format_date};

use crate::diesel_schema::{addresses, guardians, phones, students};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a student with all guardians, addresses and phones.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `student` - The aggregate to write
/// * `created_at` - Creation timestamp recorded on the student row
///
/// # Errors
///
/// Returns an error if any insert fails, including a unique violation on
/// the student document.
pub fn insert_student_graph(
    conn: &mut _,
    student: &Student,
    created_at: &str,
) -> Result<(), PersistenceError> {
    let details: &PersonDetails = student.details();

    diesel::insert_into(students::table)
        .values((
            students::student_id.eq(student.id().to_string()),
            students::first_name.eq(&details.first_name),
            students::last_name.eq(&details.last_name),
            students::birth_date.eq(format_date(details.birth_date)),
            students::rg_document.eq(details.rg_document.as_deref()),
            students::document.eq(details.document.as_str()),
            students::email.eq(details.email.as_deref()),
            students::self_responsible
                .eq(i32::from(student.responsibility().is_self_responsible())),
            students::created_at.eq(created_at),
        ))
        .execute(conn)?;

    for guardian in student.guardians() {
        let details: &PersonDetails = guardian.details();

        diesel::insert_into(guardians::table)
            .values((
                guardians::guardian_id.eq(guardian.id().to_string()),
                guardians::student_id.eq(guardian.student_id().to_string()),
                guardians::first_name.eq(&details.first_name),
                guardians::last_name.eq(&details.last_name),
                guardians::birth_date.eq(format_date(details.birth_date)),
                guardians::rg_document.eq(details.rg_document.as_deref()),
                guardians::document.eq(details.document.as_str()),
                guardians::email.eq(details.email.as_deref()),
            ))
            .execute(conn)?;

        debug!(guardian_id = %guardian.id(), "Guardian written");
    }

    let all_addresses = student
        .addresses()
        .iter()
        .chain(student.guardians().iter().flat_map(Guardian::addresses));
    for address in all_addresses {
        diesel::insert_into(addresses::table)
            .values((
                addresses::address_id.eq(address.id.to_string()),
                addresses::owner_id.eq(address.owner.owner_id().to_string()),
                addresses::street.eq(&address.street),
                addresses::city.eq(&address.city),
                addresses::district.eq(&address.district),
                addresses::state.eq(&address.state),
                addresses::zip_code.eq(&address.zip_code),
            ))
            .execute(conn)?;
    }

    let all_phones = student
        .phones()
        .iter()
        .chain(student.guardians().iter().flat_map(Guardian::phones));
    for phone in all_phones {
        diesel::insert_into(phones::table)
            .values((
                phones::phone_id.eq(phone.id.to_string()),
                phones::owner_id.eq(phone.owner.owner_id().to_string()),
                phones::description.eq(&phone.description),
                phones::phone.eq(&phone.number),
            ))
            .execute(conn)?;
    }

    info!(
        student_id = %student.id(),
        guardians = student.guardians().len(),
        "Student graph written"
    );
    Ok(())
}
}
