// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::document::validate_document;
use crate::error::DomainError;
use crate::person::{Responsibility, Student};
use crate::terms::RegistrationTerms;
use crate::types::{Classroom, PersonRole, RegistrationStatus, Service, Shift};
use time::Date;

/// A fully-built enrollment awaiting approval.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationCandidate<'a> {
    pub student: &'a Student,
    pub service: &'a Service,
    pub classroom: &'a Classroom,
    pub terms: &'a RegistrationTerms,
}

/// The outcome of a successful rule check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationApproval {
    /// The validated shift.
    pub shift: Shift,
    /// Informational status; it does not gate persistence.
    pub status: RegistrationStatus,
}

/// Applies the registration rules to a candidate, in order:
///
/// 1. Responsible-party completeness
/// 2. Document validity of the student and every guardian
/// 3. Shift membership
/// 4. Enrollment due date coherence
/// 5. Payment plan coherence
///
/// The first failing rule determines the error.
///
/// # Arguments
///
/// * `candidate` - The candidate enrollment
/// * `today` - The date the registration is evaluated on
///
/// # Errors
///
/// Returns the error of the first rule that fails.
pub fn validate_registration(
    candidate: &RegistrationCandidate<'_>,
    today: Date,
) -> Result<RegistrationApproval, DomainError> {
    validate_responsible_party(candidate.student)?;
    validate_documents(candidate.student)?;
    let shift: Shift = candidate.terms.shift().parse()?;
    validate_enrollment_due_date(candidate.terms, today)?;
    validate_payment_plan(candidate.terms, candidate.service)?;

    // Registrations are never created paid.
    let status: RegistrationStatus =
        RegistrationStatus::for_enrollment_fee(candidate.terms.enrollment_fee(), false);

    Ok(RegistrationApproval { shift, status })
}

/// Checks that someone reachable answers for the student.
///
/// # Errors
///
/// Returns an error if:
/// - A self-responsible student has no address or no phone
/// - A guarded student has no guardians
/// - Any guardian of a guarded student has no address or no phone
pub fn validate_responsible_party(student: &Student) -> Result<(), DomainError> {
    match student.responsibility() {
        Responsibility::SelfResponsible => {
            if student.addresses().is_empty() {
                return Err(DomainError::MissingAddress(PersonRole::Student));
            }
            if student.phones().is_empty() {
                return Err(DomainError::MissingPhone(PersonRole::Student));
            }
        }
        Responsibility::Guarded => {
            if student.guardians().is_empty() {
                return Err(DomainError::MissingGuardians);
            }
            for guardian in student.guardians() {
                if guardian.addresses().is_empty() {
                    return Err(DomainError::MissingAddress(PersonRole::Guardian));
                }
                if guardian.phones().is_empty() {
                    return Err(DomainError::MissingPhone(PersonRole::Guardian));
                }
            }
        }
    }

    Ok(())
}

/// Re-validates the documents of the student and, when guarded, every guardian.
///
/// # Errors
///
/// Returns the first document validation error.
pub fn validate_documents(student: &Student) -> Result<(), DomainError> {
    validate_document(student.document().as_str())?;

    if !student.responsibility().is_self_responsible() {
        for guardian in student.guardians() {
            validate_document(guardian.details().document.as_str())?;
        }
    }

    Ok(())
}

/// Checks that a charged enrollment fee is not already overdue.
///
/// # Errors
///
/// Returns an error if an enrollment fee is charged and the due date is
/// missing or strictly before `today`.
pub fn validate_enrollment_due_date(
    terms: &RegistrationTerms,
    today: Date,
) -> Result<(), DomainError> {
    if !terms.enrollment_fee().is_positive() {
        return Ok(());
    }

    match terms.enrollment_due_date() {
        None => Err(DomainError::MissingEnrollmentDueDate),
        Some(due_date) if due_date < today => {
            Err(DomainError::PastEnrollmentDueDate { due_date, today })
        }
        Some(_) => Ok(()),
    }
}

/// Checks that the installments cover the service price.
///
/// # Errors
///
/// Returns an error if `monthly_fee * installments < price`.
pub fn validate_payment_plan(
    terms: &RegistrationTerms,
    service: &Service,
) -> Result<(), DomainError> {
    let total: i128 = terms.monthly_fee().times(terms.installments_quantity());

    if total < i128::from(service.price().cents()) {
        return Err(DomainError::InsufficientPaymentPlan {
            monthly_fee: terms.monthly_fee(),
            installments: terms.installments_quantity(),
            price: service.price(),
        });
    }

    Ok(())
}
