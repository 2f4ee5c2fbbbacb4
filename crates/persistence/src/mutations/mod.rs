// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic writes.
//!
//! Writes never open or close transactions. The caller decides whether a
//! write runs in autocommit mode (catalog seeding) or inside a
//! `PersistenceTransaction`.

pub mod catalog;
pub mod registrations;
pub mod students;

pub use catalog::{
    insert_classroom_mysql, insert_classroom_sqlite, insert_service_mysql, insert_service_sqlite,
    reserve_seat_mysql, reserve_seat_sqlite, update_classroom_status_mysql,
    update_classroom_status_sqlite,
};
pub use registrations::{insert_registration_mysql, insert_registration_sqlite};
pub use students::{insert_student_graph_mysql, insert_student_graph_sqlite};
