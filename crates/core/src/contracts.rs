// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts consumed by the registration engine.
//!
//! Read-only reference lookups happen outside the unit of work. Everything
//! that must stay consistent with the final write goes through a
//! [`UnitOfWork`] obtained from [`TransactionManager::begin`], and only the
//! coordinator commits or rolls it back.

use school_enroll_domain::{
    Classroom, ClassroomId, Document, RegistrationCode, Service, ServiceId, Student, StudentId,
};

use crate::error::StoreError;
use crate::registration::NewRegistration;

/// Read-only lookups performed before the transaction opens.
pub trait ReferenceLookup {
    /// Finds a classroom without locking it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_classroom(&mut self, id: ClassroomId) -> Result<Option<Classroom>, StoreError>;

    /// Finds a service by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_service(&mut self, id: ServiceId) -> Result<Option<Service>, StoreError>;
}

/// Outcome of the conditional seat increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatUpdate {
    /// The counter was incremented.
    Reserved,
    /// No row matched `occupied_seats < capacity`.
    Full,
}

/// Lock-acquiring classroom access.
pub trait ClassroomLookup {
    /// Reads a classroom and holds an exclusive lock on it until the
    /// enclosing transaction ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the lock wait times out.
    fn find_classroom_for_update(
        &mut self,
        id: ClassroomId,
    ) -> Result<Option<Classroom>, StoreError>;

    /// Increments the occupied seats if and only if a seat is free.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn reserve_seat(&mut self, id: ClassroomId) -> Result<SeatUpdate, StoreError>;
}

/// Student identity lookup by natural key.
pub trait IdentityStore {
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_by_document(&mut self, document: &Document) -> Result<Option<StudentId>, StoreError>;
}

/// Existing enrollment lookup.
pub trait EnrollmentStore {
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_by_student_and_class(
        &mut self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> Result<Option<RegistrationCode>, StoreError>;
}

/// Writes a student with guardians, addresses and phones.
pub trait PersonStore {
    /// # Errors
    ///
    /// Returns an error if any row of the graph cannot be written.
    fn create_student_graph(&mut self, student: &Student) -> Result<(), StoreError>;
}

/// Writes the enrollment record.
pub trait RegistrationStore {
    /// Returns whether a registration already holds this code.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn code_exists(&mut self, code: &RegistrationCode) -> Result<bool, StoreError>;

    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn create_registration(&mut self, registration: &NewRegistration) -> Result<(), StoreError>;
}

/// A transaction-scoped context passed to every in-transaction collaborator.
///
/// Dropping a unit of work without committing rolls it back.
pub trait UnitOfWork:
    ClassroomLookup + IdentityStore + EnrollmentStore + PersonStore + RegistrationStore + Sized
{
    /// Makes every write of this unit visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails. The writes are then discarded.
    fn commit(self) -> Result<(), StoreError>;

    /// Discards every write of this unit and releases its locks.
    ///
    /// # Errors
    ///
    /// Returns an error if the store reports a rollback failure.
    fn rollback(self) -> Result<(), StoreError>;
}

/// Opens units of work.
pub trait TransactionManager: ReferenceLookup {
    type Transaction<'t>: UnitOfWork
    where
        Self: 't;

    /// Opens a new unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    fn begin(&mut self) -> Result<Self::Transaction<'_>, StoreError>;
}
