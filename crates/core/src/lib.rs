// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The enrollment transaction engine.
//!
//! Admits a student into a classroom as one atomic unit of work: the seat
//! increment, the student graph and the registration record commit together
//! or not at all. Storage is reached only through the collaborator traits
//! rooted at [`TransactionManager`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod contracts;
mod coordinator;
mod duplicate_guard;
mod error;
mod registration;
mod seat_ledger;

#[cfg(test)]
mod tests;

pub use contracts::{
    ClassroomLookup, EnrollmentStore, IdentityStore, PersonStore, ReferenceLookup,
    RegistrationStore, SeatUpdate, TransactionManager, UnitOfWork,
};
pub use coordinator::{
    CODE_DRAW_ATTEMPTS, Clock, DEFAULT_TRANSACTION_TIMEOUT, EnrollmentConfig, FixedClock, RegistrationCoordinator,
    RegistrationReceipt, RegistrationRequest, RegistrationStage, SystemClock,
};
pub use duplicate_guard::{IdentityResolution, resolve_identity};
pub use error::{EnrollmentError, ErrorKind, ReferenceKind, StoreError};
pub use registration::NewRegistration;
pub use seat_ledger::reserve_seat;
