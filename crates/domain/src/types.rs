// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{ClassroomId, ServiceId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

/// Which kind of person a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonRole {
    /// The student being enrolled.
    Student,
    /// A guardian of the student.
    Guardian,
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Guardian => write!(f, "guardian"),
        }
    }
}

/// A monetary amount in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Zero.
    pub const ZERO: Self = Self { cents: 0 };

    /// Creates an amount from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns whether the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Multiplies the amount by a count without overflowing.
    #[must_use]
    pub fn times(&self, count: u32) -> i128 {
        i128::from(self.cents) * i128::from(count)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign: &str = if self.cents < 0 { "-" } else { "" };
        let abs: u64 = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// The period of the day a class runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shift {
    Morning,
    Afternoon,
    Nocturnal,
    FullTime,
}

impl Shift {
    /// Every allowed shift.
    pub const ALL: [Self; 4] = [
        Self::Morning,
        Self::Afternoon,
        Self::Nocturnal,
        Self::FullTime,
    ];

    /// Converts this shift to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Nocturnal => "nocturnal",
            Self::FullTime => "full-time",
        }
    }
}

impl FromStr for Shift {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shift| shift.as_str() == s)
            .ok_or_else(|| DomainError::InvalidShift(s.to_string()))
    }
}

impl TryFrom<String> for Shift {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shift> for String {
    fn from(value: Shift) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a classroom accepts new enrollments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassroomStatus {
    #[default]
    Open,
    Closed,
}

impl ClassroomStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for ClassroomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidClassroomStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ClassroomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A schedulable class with a bounded number of seats.
///
/// Invariant: `occupied_seats <= capacity` and `capacity > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    id: ClassroomId,
    identification: String,
    shift: Shift,
    capacity: u32,
    occupied_seats: u32,
    status: ClassroomStatus,
}

impl Classroom {
    /// Creates a classroom, checking the seat invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if capacity is zero or fewer seats are available
    /// than are already occupied.
    pub fn new(
        id: ClassroomId,
        identification: String,
        shift: Shift,
        capacity: u32,
        occupied_seats: u32,
        status: ClassroomStatus,
    ) -> Result<Self, DomainError> {
        if capacity == 0 || occupied_seats > capacity {
            return Err(DomainError::InvalidCapacity {
                capacity,
                occupied_seats,
            });
        }

        Ok(Self {
            id,
            identification,
            shift,
            capacity,
            occupied_seats,
            status,
        })
    }

    #[must_use]
    pub const fn id(&self) -> ClassroomId {
        self.id
    }

    #[must_use]
    pub fn identification(&self) -> &str {
        &self.identification
    }

    #[must_use]
    pub const fn shift(&self) -> Shift {
        self.shift
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub const fn occupied_seats(&self) -> u32 {
        self.occupied_seats
    }

    #[must_use]
    pub const fn status(&self) -> ClassroomStatus {
        self.status
    }

    /// Returns whether at least one seat is free.
    ///
    /// This is advisory when read outside the classroom lock.
    #[must_use]
    pub const fn has_vacancy(&self) -> bool {
        self.occupied_seats < self.capacity
    }

    /// Returns the number of free seats.
    #[must_use]
    pub const fn remaining_seats(&self) -> u32 {
        self.capacity - self.occupied_seats
    }
}

/// A tuition plan offered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    id: ServiceId,
    description: String,
    price: Money,
}

impl Service {
    #[must_use]
    pub const fn new(id: ServiceId, description: String, price: Money) -> Self {
        Self {
            id,
            description,
            price,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ServiceId {
        self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }
}

/// Informational status assigned to an approved registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    /// Nothing outstanding.
    Approved,
    /// An enrollment fee is due and has not been paid.
    WaitEnrollmentFee,
}

impl RegistrationStatus {
    /// Derives the status from the enrollment fee and payment flag.
    #[must_use]
    pub const fn for_enrollment_fee(enrollment_fee: Money, paid: bool) -> Self {
        if enrollment_fee.is_positive() && !paid {
            Self::WaitEnrollmentFee
        } else {
            Self::Approved
        }
    }

    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::WaitEnrollmentFee => "WAIT_ENROLLMENT_FEE",
        }
    }
}

impl FromStr for RegistrationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APPROVED" => Ok(Self::Approved),
            "WAIT_ENROLLMENT_FEE" => Ok(Self::WaitEnrollmentFee),
            _ => Err(DomainError::InvalidRegistrationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable registration code: `YYYYMMDD` followed by a five-digit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationCode(String);

impl RegistrationCode {
    /// Exclusive upper bound of the random suffix.
    pub const SUFFIX_RANGE: u32 = 100_000;

    /// Builds a code from the enrollment date and a suffix.
    ///
    /// The suffix is reduced modulo [`Self::SUFFIX_RANGE`].
    #[must_use]
    pub fn new(date: Date, suffix: u32) -> Self {
        Self(format!(
            "{:04}{:02}{:02}{:05}",
            date.year(),
            u8::from(date.month()),
            date.day(),
            suffix % Self::SUFFIX_RANGE
        ))
    }

    /// Wraps a code loaded from storage.
    #[must_use]
    pub const fn from_stored(value: String) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` naming `field` if the value does not parse.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::InvalidDate {
            field,
            value: value.to_string(),
        }
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
