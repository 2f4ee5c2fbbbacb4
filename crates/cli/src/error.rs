// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

use thiserror::Error;

use school_enroll::EnrollmentError;
use school_enroll_domain::DomainError;
use school_enroll_persistence::PersistenceError;

/// Errors reported by the operator command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// A request file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command that writes was pointed at the throwaway in-memory store.
    #[error("`{command}` changes stored state; pass --database or --mysql-url")]
    EphemeralStore { command: &'static str },

    /// A request or response could not be (de)serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A seeded entity was rejected by a domain rule.
    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),

    /// The store failed outside a registration.
    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A registration attempt failed and was rolled back.
    #[error("Registration failed: {0}")]
    Enrollment(#[from] EnrollmentError),
}

impl CliError {
    /// A short machine-readable label for the failure.
    #[must_use]
    pub fn kind(&self) -> String {
        match self {
            Self::Io { .. } => String::from("io"),
            Self::EphemeralStore { .. } => String::from("missing_store"),
            Self::Json(_) => String::from("invalid_json"),
            Self::Domain(_) => String::from("validation"),
            Self::Persistence(PersistenceError::NotFound(_)) => String::from("not_found"),
            Self::Persistence(_) => String::from("persistence_failure"),
            Self::Enrollment(err) => err.kind().to_string(),
        }
    }

    /// Process exit code: 2 for a refused registration, 1 for anything else.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Enrollment(_) => 2,
            _ => 1,
        }
    }

    /// Whether the same command may succeed if repeated later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Enrollment(err) => err.is_retryable(),
            _ => false,
        }
    }
}
