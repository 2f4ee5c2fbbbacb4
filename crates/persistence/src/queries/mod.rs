// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic read queries.
//!
//! Every query here is generated for both backends with `backend_fn!`,
//! except locked reads, whose SQL differs per backend.

pub mod catalog;
pub mod registrations;
pub mod students;

pub use catalog::{
    find_classroom_for_update_mysql, find_classroom_for_update_sqlite, find_classroom_mysql,
    find_classroom_sqlite, find_service_mysql, find_service_sqlite,
};
pub use registrations::{
    count_registrations_for_classroom_mysql, count_registrations_for_classroom_sqlite,
    find_code_by_student_and_classroom_mysql, find_code_by_student_and_classroom_sqlite,
    find_registration_by_code_mysql, find_registration_by_code_sqlite,
    registration_code_exists_mysql, registration_code_exists_sqlite,
};
pub use students::{
    count_contacts_for_owner_mysql, count_contacts_for_owner_sqlite,
    count_guardians_for_student_mysql, count_guardians_for_student_sqlite, count_students_mysql,
    count_students_sqlite, find_student_id_by_document_mysql, find_student_id_by_document_sqlite,
};
