// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student aggregate construction.
//!
//! Building is pure: identities are generated here and every contact record
//! receives a back-reference to its owner, but nothing is persisted.

use crate::document::Document;
use crate::error::DomainError;
use crate::ids::{AddressId, GuardianId, PhoneId, StudentId};
use crate::person::{
    Address, ContactOwner, Guardian, PersonDetails, Phone, Responsibility, Student,
};
use crate::request::{AddressRequest, GuardianRequest, PhoneRequest, StudentRequest};
use crate::types::{PersonRole, parse_date};

/// Builds a student aggregate, including its guardians, from a request.
///
/// # Errors
///
/// Returns the first error encountered:
/// - A missing first or last name (student or guardian)
/// - A missing or unparsable birth date (student or guardian)
/// - Any document validation error (student or guardian)
pub fn build_student(request: &StudentRequest) -> Result<Student, DomainError> {
    let id: StudentId = StudentId::new_random();

    let details: PersonDetails = build_details(
        PersonRole::Student,
        &request.first_name,
        &request.last_name,
        &request.birth_date,
        request.rg_document.as_deref(),
        &request.document,
        request.email.as_deref(),
    )?;

    let owner: ContactOwner = ContactOwner::Student(id);
    let addresses: Vec<Address> = build_addresses(&request.addresses, owner);
    let phones: Vec<Phone> = build_phones(&request.phones, owner);

    let guardians: Vec<Guardian> = request
        .guardians
        .iter()
        .map(|guardian| build_guardian(guardian, id))
        .collect::<Result<Vec<Guardian>, DomainError>>()?;

    Ok(Student::new(
        id,
        details,
        Responsibility::from_flag(request.self_responsible),
        addresses,
        phones,
        guardians,
    ))
}

/// Builds a single guardian owned by `student_id`.
///
/// # Errors
///
/// Returns an error if the name, birth date or document is invalid.
pub fn build_guardian(
    request: &GuardianRequest,
    student_id: StudentId,
) -> Result<Guardian, DomainError> {
    let id: GuardianId = GuardianId::new_random();

    let details: PersonDetails = build_details(
        PersonRole::Guardian,
        &request.first_name,
        &request.last_name,
        &request.birth_date,
        request.rg_document.as_deref(),
        &request.document,
        request.email.as_deref(),
    )?;

    let owner: ContactOwner = ContactOwner::Guardian(id);

    Ok(Guardian::new(
        id,
        student_id,
        details,
        build_addresses(&request.addresses, owner),
        build_phones(&request.phones, owner),
    ))
}

/// Assigns a fresh identity and owner to each submitted address.
#[must_use]
pub fn build_addresses(requests: &[AddressRequest], owner: ContactOwner) -> Vec<Address> {
    requests
        .iter()
        .map(|address| Address {
            id: AddressId::new_random(),
            street: address.street.clone(),
            city: address.city.clone(),
            district: address.district.clone(),
            state: address.state.clone(),
            zip_code: address.zip_code.clone(),
            owner,
        })
        .collect()
}

/// Assigns a fresh identity and owner to each submitted phone.
#[must_use]
pub fn build_phones(requests: &[PhoneRequest], owner: ContactOwner) -> Vec<Phone> {
    requests
        .iter()
        .map(|phone| Phone {
            id: PhoneId::new_random(),
            description: phone.description.clone(),
            number: phone.phone.clone(),
            owner,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn build_details(
    role: PersonRole,
    first_name: &str,
    last_name: &str,
    birth_date: &str,
    rg_document: Option<&str>,
    document: &str,
    email: Option<&str>,
) -> Result<PersonDetails, DomainError> {
    let first_name: &str = first_name.trim();
    let last_name: &str = last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(DomainError::MissingName(role));
    }

    if birth_date.trim().is_empty() {
        return Err(DomainError::MissingBirthDate(role));
    }
    let birth_date = parse_date("birth_date", birth_date)?;

    let document: Document = Document::parse(document)?;

    Ok(PersonDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birth_date,
        rg_document: non_blank(rg_document),
        document,
        email: non_blank(email),
    })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
