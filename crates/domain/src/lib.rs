// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for school enrollment.
//!
//! Everything in this crate is pure: no I/O, no clock reads, no storage.

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

mod builder;
mod document;
mod error;
mod ids;
mod person;
mod request;
mod terms;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use builder::{build_addresses, build_guardian, build_phones, build_student};
pub use document::{DOCUMENT_LENGTH, Document, check_digit, validate_document};
pub use error::DomainError;
pub use ids::{AddressId, ClassroomId, GuardianId, PhoneId, RegistrationId, ServiceId, StudentId};
pub use person::{
    Address, ContactOwner, Guardian, PersonDetails, Phone, Responsibility, Student,
};
pub use request::{AddressRequest, GuardianRequest, PhoneRequest, StudentRequest, TermsRequest};
pub use terms::RegistrationTerms;
pub use types::{
    Classroom, ClassroomStatus, Money, PersonRole, RegistrationCode, RegistrationStatus, Service,
    Shift, format_date, parse_date,
};
pub use validation::{
    RegistrationApproval, RegistrationCandidate, validate_documents,
    validate_enrollment_due_date, validate_payment_plan, validate_registration,
    validate_responsible_party,
};
