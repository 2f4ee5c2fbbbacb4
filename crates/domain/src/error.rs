// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Money, PersonRole};

/// Errors that can occur during domain validation.
///
/// Every variant describes a problem with caller input. No state has been
/// mutated when one of these is returned, so the caller may correct the
/// input and retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document is empty once separators are removed.
    EmptyDocument,
    /// The document does not contain exactly eleven digits.
    MalformedDocument(String),
    /// All eleven digits of the document are the same.
    UniformDigitsDocument,
    /// The computed check digits do not match the trailing two digits.
    ChecksumMismatch,
    /// First or last name is missing.
    MissingName(PersonRole),
    /// Birth date is missing.
    MissingBirthDate(PersonRole),
    /// A date field could not be parsed.
    InvalidDate {
        /// The name of the field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// An identifier could not be parsed.
    InvalidIdentifier {
        /// The rejected value.
        value: String,
        /// The parser's reason.
        reason: String,
    },
    /// A student who is not self-responsible has no guardian.
    MissingGuardians,
    /// A person that must be reachable has no address.
    MissingAddress(PersonRole),
    /// A person that must be reachable has no phone.
    MissingPhone(PersonRole),
    /// The shift is not one of the allowed values.
    InvalidShift(String),
    /// An enrollment fee is charged but no due date was given.
    MissingEnrollmentDueDate,
    /// The enrollment fee due date lies before today.
    PastEnrollmentDueDate {
        /// The requested due date.
        due_date: time::Date,
        /// The date the registration was evaluated on.
        today: time::Date,
    },
    /// Monthly fee times installments does not cover the service price.
    InsufficientPaymentPlan {
        /// The monthly fee.
        monthly_fee: Money,
        /// The number of installments.
        installments: u32,
        /// The service price.
        price: Money,
    },
    /// The monthly fee must be positive.
    InvalidMonthlyFee(Money),
    /// The enrollment fee must not be negative.
    InvalidEnrollmentFee(Money),
    /// The installment count must be positive.
    InvalidInstallmentsQuantity(i32),
    /// The month duration must be positive.
    InvalidMonthDuration(i32),
    /// The payment day must be a day of the month.
    InvalidPaymentDay(i32),
    /// Classroom capacity is not positive or is below the occupied seats.
    InvalidCapacity {
        /// The classroom capacity.
        capacity: u32,
        /// The occupied seats.
        occupied_seats: u32,
    },
    /// Classroom status is not recognized.
    InvalidClassroomStatus(String),
    /// Registration status is not recognized.
    InvalidRegistrationStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDocument => write!(f, "Empty document provided"),
            Self::MalformedDocument(msg) => write!(f, "Malformed document: {msg}"),
            Self::UniformDigitsDocument => {
                write!(f, "Document is invalid: all digits are equal")
            }
            Self::ChecksumMismatch => write!(f, "Document is invalid: check digits do not match"),
            Self::MissingName(role) => {
                write!(f, "The {role} first name and last name cannot be empty")
            }
            Self::MissingBirthDate(role) => write!(f, "The {role} birth date cannot be empty"),
            Self::InvalidDate { field, value } => {
                write!(f, "Failed to parse {field} '{value}': expected YYYY-MM-DD")
            }
            Self::InvalidIdentifier { value, reason } => {
                write!(f, "Invalid identifier '{value}': {reason}")
            }
            Self::MissingGuardians => {
                write!(f, "Information about the student's guardians not found")
            }
            Self::MissingAddress(role) => write!(f, "The {role} has no address information"),
            Self::MissingPhone(role) => write!(f, "The {role} has no phone information"),
            Self::InvalidShift(shift) => write!(f, "Invalid shift provided: '{shift}'"),
            Self::MissingEnrollmentDueDate => {
                write!(f, "An enrollment fee requires an enrollment due date")
            }
            Self::PastEnrollmentDueDate { due_date, today } => {
                write!(
                    f,
                    "Enrollment due date {due_date} cannot be before today ({today})"
                )
            }
            Self::InsufficientPaymentPlan {
                monthly_fee,
                installments,
                price,
            } => {
                write!(
                    f,
                    "Payment plan of {installments} x {monthly_fee} does not cover the service price of {price}"
                )
            }
            Self::InvalidMonthlyFee(fee) => {
                write!(f, "Invalid monthly fee: {fee}. Must be greater than 0")
            }
            Self::InvalidEnrollmentFee(fee) => {
                write!(f, "Invalid enrollment fee: {fee}. Must not be negative")
            }
            Self::InvalidInstallmentsQuantity(count) => {
                write!(
                    f,
                    "Invalid installments quantity: {count}. Must be greater than 0"
                )
            }
            Self::InvalidMonthDuration(months) => {
                write!(f, "Invalid month duration: {months}. Must be greater than 0")
            }
            Self::InvalidPaymentDay(day) => {
                write!(f, "Invalid payment day: {day}. Must be between 1 and 31")
            }
            Self::InvalidCapacity {
                capacity,
                occupied_seats,
            } => {
                write!(
                    f,
                    "Invalid classroom capacity: {capacity} with {occupied_seats} occupied seats"
                )
            }
            Self::InvalidClassroomStatus(status) => {
                write!(f, "Invalid classroom status: '{status}'")
            }
            Self::InvalidRegistrationStatus(status) => {
                write!(f, "Invalid registration status: '{status}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
