// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student and guardian aggregates with their contact records.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::document::Document;
use crate::ids::{AddressId, GuardianId, PhoneId, StudentId};

/// The person a contact record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactOwner {
    Student(StudentId),
    Guardian(GuardianId),
}

impl ContactOwner {
    /// Returns the owner's identifier as stored alongside the contact record.
    #[must_use]
    pub const fn owner_id(&self) -> &Uuid {
        match self {
            Self::Student(id) => id.as_uuid(),
            Self::Guardian(id) => id.as_uuid(),
        }
    }
}

/// A postal address owned by a student or guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub zip_code: String,
    pub owner: ContactOwner,
}

/// A phone number owned by a student or guardian.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub id: PhoneId,
    pub description: String,
    pub number: String,
    pub owner: ContactOwner,
}

/// Who answers legally and financially for a student.
///
/// The two variants select the two completeness rules: a self-responsible
/// student must be reachable directly, a guarded student must have at least
/// one reachable guardian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Responsibility {
    /// The student is their own responsible party.
    SelfResponsible,
    /// One or more guardians are responsible for the student.
    Guarded,
}

impl Responsibility {
    #[must_use]
    pub const fn from_flag(self_responsible: bool) -> Self {
        if self_responsible {
            Self::SelfResponsible
        } else {
            Self::Guarded
        }
    }

    #[must_use]
    pub const fn is_self_responsible(&self) -> bool {
        matches!(self, Self::SelfResponsible)
    }
}

/// Identity fields shared by students and guardians.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    /// Secondary identity document, kept as given.
    pub rg_document: Option<String>,
    pub document: Document,
    pub email: Option<String>,
}

/// A legal or financial responsible party for a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardian {
    id: GuardianId,
    student_id: StudentId,
    details: PersonDetails,
    addresses: Vec<Address>,
    phones: Vec<Phone>,
}

impl Guardian {
    #[must_use]
    pub const fn new(
        id: GuardianId,
        student_id: StudentId,
        details: PersonDetails,
        addresses: Vec<Address>,
        phones: Vec<Phone>,
    ) -> Self {
        Self {
            id,
            student_id,
            details,
            addresses,
            phones,
        }
    }

    #[must_use]
    pub const fn id(&self) -> GuardianId {
        self.id
    }

    /// The student this guardian answers for.
    #[must_use]
    pub const fn student_id(&self) -> StudentId {
        self.student_id
    }

    #[must_use]
    pub const fn details(&self) -> &PersonDetails {
        &self.details
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    #[must_use]
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }
}

/// A student together with everything persisted as part of its graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    details: PersonDetails,
    responsibility: Responsibility,
    addresses: Vec<Address>,
    phones: Vec<Phone>,
    guardians: Vec<Guardian>,
}

impl Student {
    #[must_use]
    pub const fn new(
        id: StudentId,
        details: PersonDetails,
        responsibility: Responsibility,
        addresses: Vec<Address>,
        phones: Vec<Phone>,
        guardians: Vec<Guardian>,
    ) -> Self {
        Self {
            id,
            details,
            responsibility,
            addresses,
            phones,
            guardians,
        }
    }

    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    #[must_use]
    pub const fn details(&self) -> &PersonDetails {
        &self.details
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.details.document
    }

    #[must_use]
    pub const fn responsibility(&self) -> Responsibility {
        self.responsibility
    }

    #[must_use]
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    #[must_use]
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    #[must_use]
    pub fn guardians(&self) -> &[Guardian] {
        &self.guardians
    }
}
