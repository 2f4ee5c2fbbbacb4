// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use school_enroll_domain::{ClassroomId, DomainError, RegistrationCode, ServiceId, StudentId};

/// Errors reported by a storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A read or a lock wait exceeded its configured bound.
    Timeout(String),
    /// The store rejected or failed a read.
    Read(String),
    /// The store rejected or failed a write.
    Write(String),
    /// A write collided with a uniqueness constraint held by a concurrent
    /// or earlier writer.
    Conflict(String),
    /// The transaction could not be opened, committed or rolled back.
    Transaction(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(msg) => write!(f, "Store timeout: {msg}"),
            Self::Read(msg) => write!(f, "Store read failed: {msg}"),
            Self::Write(msg) => write!(f, "Store write failed: {msg}"),
            Self::Conflict(msg) => write!(f, "Store conflict: {msg}"),
            Self::Transaction(msg) => write!(f, "Store transaction failed: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The kind of entity a reference points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Classroom,
    Service,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classroom => write!(f, "Classroom"),
            Self::Service => write!(f, "Service"),
        }
    }
}

/// Coarse classification of an [`EnrollmentError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller input is invalid. Nothing was mutated.
    Validation,
    /// The current state prevents the registration.
    Conflict,
    /// A referenced classroom or service does not exist.
    ReferenceNotFound,
    /// Infrastructure failure. The transaction was rolled back.
    PersistenceFailure,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Conflict => write!(f, "conflict"),
            Self::ReferenceNotFound => write!(f, "reference_not_found"),
            Self::PersistenceFailure => write!(f, "persistence_failure"),
        }
    }
}

/// Errors returned by a registration attempt.
///
/// Every error leaves the store exactly as it was before the attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// A domain rule rejected the request.
    Validation(DomainError),
    /// A classroom or service id did not resolve.
    ReferenceNotFound {
        /// What was being looked up.
        kind: ReferenceKind,
        /// The id that was not found.
        id: String,
    },
    /// The student is already enrolled in the classroom.
    DuplicateRegistration {
        /// The existing student identity.
        student_id: StudentId,
        /// The target classroom.
        classroom_id: ClassroomId,
        /// The code of the existing registration.
        existing_code: RegistrationCode,
    },
    /// Every seat in the classroom is taken.
    NoVacancyAvailable(ClassroomId),
    /// The classroom does not accept enrollments.
    ClassroomClosed(ClassroomId),
    /// A storage collaborator failed.
    PersistenceFailure(StoreError),
    /// The unit of work ran past its time budget and was rolled back.
    TransactionTimeout {
        /// Time spent inside the transaction.
        elapsed: Duration,
        /// The configured budget.
        limit: Duration,
    },
}

impl EnrollmentError {
    /// Convenience constructor for a missing classroom.
    #[must_use]
    pub fn classroom_not_found(id: ClassroomId) -> Self {
        Self::ReferenceNotFound {
            kind: ReferenceKind::Classroom,
            id: id.to_string(),
        }
    }

    /// Convenience constructor for a missing service.
    #[must_use]
    pub fn service_not_found(id: ServiceId) -> Self {
        Self::ReferenceNotFound {
            kind: ReferenceKind::Service,
            id: id.to_string(),
        }
    }

    /// Returns the taxonomy bucket of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateRegistration { .. }
            | Self::NoVacancyAvailable(_)
            | Self::ClassroomClosed(_) => ErrorKind::Conflict,
            Self::ReferenceNotFound { .. } => ErrorKind::ReferenceNotFound,
            Self::PersistenceFailure(_) | Self::TransactionTimeout { .. } => {
                ErrorKind::PersistenceFailure
            }
        }
    }

    /// Returns whether repeating the same request later may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) | Self::ReferenceNotFound { .. } => false,
            Self::DuplicateRegistration { .. }
            | Self::NoVacancyAvailable(_)
            | Self::ClassroomClosed(_)
            | Self::TransactionTimeout { .. }
            | Self::PersistenceFailure(StoreError::Timeout(_) | StoreError::Conflict(_)) => {
                true
            }
            Self::PersistenceFailure(_) => false,
        }
    }
}

impl std::fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::ReferenceNotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::DuplicateRegistration {
                student_id,
                classroom_id,
                existing_code,
            } => {
                write!(
                    f,
                    "Student {student_id} is already registered in classroom {classroom_id} (code {existing_code})"
                )
            }
            Self::NoVacancyAvailable(id) => {
                write!(f, "No vacancy available in classroom {id}")
            }
            Self::ClassroomClosed(id) => write!(f, "Classroom {id} is closed for enrollment"),
            Self::PersistenceFailure(err) => write!(f, "Persistence failure: {err}"),
            Self::TransactionTimeout { elapsed, limit } => {
                write!(
                    f,
                    "Registration transaction exceeded its budget: {}ms of {}ms",
                    elapsed.as_millis(),
                    limit.as_millis()
                )
            }
        }
    }
}

impl std::error::Error for EnrollmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::PersistenceFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for EnrollmentError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<StoreError> for EnrollmentError {
    fn from(err: StoreError) -> Self {
        Self::PersistenceFailure(err)
    }
}
