// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity identifiers.
//!
//! Every entity is keyed by a random UUID assigned at construction time, so
//! an aggregate can be fully assembled (including owner back-references)
//! before anything is written to storage.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! entity_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            #[must_use]
            pub fn new_random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| DomainError::InvalidIdentifier {
                        value: s.to_string(),
                        reason: e.to_string(),
                    })
            }
        }
    };
}

entity_id!(
    /// Identifies a student.
    StudentId
);
entity_id!(
    /// Identifies a guardian.
    GuardianId
);
entity_id!(
    /// Identifies a classroom.
    ClassroomId
);
entity_id!(
    /// Identifies a tuition service.
    ServiceId
);
entity_id!(
    /// Identifies a registration record.
    RegistrationId
);
entity_id!(
    /// Identifies an address entry.
    AddressId
);
entity_id!(
    /// Identifies a phone entry.
    PhoneId
);
