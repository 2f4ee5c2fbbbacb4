// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use school_enroll::StoreError;
use school_enroll_domain::DomainError;

/// Backend messages that mean a bounded wait ran out.
const TIMEOUT_MARKERS: [&str; 4] = [
    "database is locked",
    "Lock wait timeout exceeded",
    "maximum statement execution time exceeded",
    "Query execution was interrupted",
];

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// A lock wait or statement exceeded its configured timeout.
    Timeout(String),
    /// A write hit a unique constraint.
    UniqueViolation(String),
    /// A stored value could not be converted back into a domain value.
    InvalidStoredValue(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// Transaction control failed.
    TransactionFailed(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::Timeout(msg) => write!(f, "Timed out: {msg}"),
            Self::UniqueViolation(msg) => write!(f, "Unique constraint violated: {msg}"),
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::UniqueViolation(info.message().to_string()),
            _ => {
                let message: String = err.to_string();
                if TIMEOUT_MARKERS.iter().any(|m| message.contains(m)) {
                    Self::Timeout(message)
                } else {
                    Self::DatabaseError(message)
                }
            }
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidStoredValue(err.to_string())
    }
}

impl From<std::num::TryFromIntError> for PersistenceError {
    fn from(err: std::num::TryFromIntError) -> Self {
        Self::InvalidStoredValue(err.to_string())
    }
}

impl PersistenceError {
    /// Converts into a store error for a failed read.
    #[must_use]
    pub fn into_read_error(self) -> StoreError {
        match self {
            Self::Timeout(msg) => StoreError::Timeout(msg),
            other => StoreError::Read(other.to_string()),
        }
    }

    /// Converts into a store error for a failed write.
    #[must_use]
    pub fn into_write_error(self) -> StoreError {
        match self {
            Self::Timeout(msg) => StoreError::Timeout(msg),
            Self::UniqueViolation(msg) => StoreError::Conflict(msg),
            other => StoreError::Write(other.to_string()),
        }
    }

    /// Converts into a store error for failed transaction control.
    #[must_use]
    pub fn into_transaction_error(self) -> StoreError {
        match self {
            Self::Timeout(msg) => StoreError::Timeout(msg),
            other => StoreError::Transaction(other.to_string()),
        }
    }
}
