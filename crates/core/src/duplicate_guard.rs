// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::debug;

use school_enroll_domain::{ClassroomId, Document, StudentId};

use crate::contracts::{EnrollmentStore, IdentityStore};
use crate::error::EnrollmentError;

/// Which student identity a registration will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityResolution {
    /// No student has this document yet; the built graph must be persisted.
    New(StudentId),
    /// A student with this document exists and is reused as-is.
    Existing(StudentId),
}

impl IdentityResolution {
    /// The student id the registration will reference.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        match self {
            Self::New(id) | Self::Existing(id) => *id,
        }
    }

    #[must_use]
    pub const fn is_existing(&self) -> bool {
        matches!(self, Self::Existing(_))
    }
}

/// Resolves the student identity and rejects duplicate enrollments.
///
/// Must run inside the same unit of work as the seat reservation so the
/// answer stays valid until commit.
///
/// # Arguments
///
/// * `store` - The open unit of work
/// * `document` - The normalized document of the built student
/// * `built_id` - The id assigned to the freshly built student
/// * `classroom_id` - The target classroom
///
/// # Errors
///
/// Returns an error if:
/// - The existing student already has a registration in the classroom
/// - The store cannot be read
pub fn resolve_identity<T: IdentityStore + EnrollmentStore>(
    store: &mut T,
    document: &Document,
    built_id: StudentId,
    classroom_id: ClassroomId,
) -> Result<IdentityResolution, EnrollmentError> {
    let Some(student_id) = store.find_by_document(document)? else {
        debug!(student_id = %built_id, "No existing identity for document");
        return Ok(IdentityResolution::New(built_id));
    };

    if let Some(existing_code) = store.find_by_student_and_class(student_id, classroom_id)? {
        return Err(EnrollmentError::DuplicateRegistration {
            student_id,
            classroom_id,
            existing_code,
        });
    }

    debug!(%student_id, "Reusing existing student identity");
    Ok(IdentityResolution::Existing(student_id))
}
