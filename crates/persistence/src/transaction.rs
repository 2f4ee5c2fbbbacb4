// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The unit of work handed to the registration coordinator.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, warn};

use school_enroll::{
    ClassroomLookup, EnrollmentStore, IdentityStore, NewRegistration, PersonStore,
    RegistrationStore, SeatUpdate, StoreError, UnitOfWork,
};
use school_enroll_domain::{Classroom, ClassroomId, Document, RegistrationCode, Student, StudentId};

use crate::BackendConnection;
use crate::backend::PersistenceBackend;
use crate::error::PersistenceError;
use crate::{mutations, queries};

/// An open database transaction.
///
/// Every read and write goes through the borrowed connection, so nothing
/// else can use it until the transaction is committed, rolled back or
/// dropped. Dropping an unfinished transaction rolls it back.
pub struct PersistenceTransaction<'a> {
    conn: &'a mut BackendConnection,
    finished: bool,
}

impl<'a> PersistenceTransaction<'a> {
    /// Wraps a connection on which a transaction has just been opened.
    pub(crate) const fn new(conn: &'a mut BackendConnection) -> Self {
        Self {
            conn,
            finished: false,
        }
    }

    fn finish_rollback(&mut self) -> Result<(), PersistenceError> {
        self.finished = true;
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => conn.rollback_unit_of_work(),
            BackendConnection::Mysql(conn) => conn.rollback_unit_of_work(),
        }
    }
}

impl ClassroomLookup for PersistenceTransaction<'_> {
    fn find_classroom_for_update(
        &mut self,
        id: ClassroomId,
    ) -> Result<Option<Classroom>, StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => queries::find_classroom_for_update_sqlite(conn, id),
            BackendConnection::Mysql(conn) => queries::find_classroom_for_update_mysql(conn, id),
        }
        .map_err(PersistenceError::into_read_error)
    }

    fn reserve_seat(&mut self, id: ClassroomId) -> Result<SeatUpdate, StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => mutations::reserve_seat_sqlite(conn, id),
            BackendConnection::Mysql(conn) => mutations::reserve_seat_mysql(conn, id),
        }
        .map_err(PersistenceError::into_write_error)
    }
}

impl IdentityStore for PersistenceTransaction<'_> {
    fn find_by_document(&mut self, document: &Document) -> Result<Option<StudentId>, StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::find_student_id_by_document_sqlite(conn, document)
            }
            BackendConnection::Mysql(conn) => {
                queries::find_student_id_by_document_mysql(conn, document)
            }
        }
        .map_err(PersistenceError::into_read_error)
    }
}

impl EnrollmentStore for PersistenceTransaction<'_> {
    fn find_by_student_and_class(
        &mut self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> Result<Option<RegistrationCode>, StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => {
                queries::find_code_by_student_and_classroom_sqlite(conn, student_id, classroom_id)
            }
            BackendConnection::Mysql(conn) => {
                queries::find_code_by_student_and_classroom_mysql(conn, student_id, classroom_id)
            }
        }
        .map_err(PersistenceError::into_read_error)
    }
}

impl PersonStore for PersistenceTransaction<'_> {
    fn create_student_graph(&mut self, student: &Student) -> Result<(), StoreError> {
        let created_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::insert_student_graph_sqlite(conn, student, &created_at)
            }
            BackendConnection::Mysql(conn) => {
                mutations::insert_student_graph_mysql(conn, student, &created_at)
            }
        }
        .map_err(PersistenceError::into_write_error)
    }
}

impl RegistrationStore for PersistenceTransaction<'_> {
    fn code_exists(&mut self, code: &RegistrationCode) -> Result<bool, StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => queries::registration_code_exists_sqlite(conn, code),
            BackendConnection::Mysql(conn) => queries::registration_code_exists_mysql(conn, code),
        }
        .map_err(PersistenceError::into_read_error)
    }

    fn create_registration(&mut self, registration: &NewRegistration) -> Result<(), StoreError> {
        match &mut *self.conn {
            BackendConnection::Sqlite(conn) => {
                mutations::insert_registration_sqlite(conn, registration)
            }
            BackendConnection::Mysql(conn) => {
                mutations::insert_registration_mysql(conn, registration)
            }
        }
        .map_err(PersistenceError::into_write_error)
    }
}

impl UnitOfWork for PersistenceTransaction<'_> {
    fn commit(mut self) -> Result<(), StoreError> {
        self.finished = true;
        let committed: Result<(), PersistenceError> = match &mut *self.conn {
            BackendConnection::Sqlite(conn) => conn.commit_unit_of_work(),
            BackendConnection::Mysql(conn) => conn.commit_unit_of_work(),
        };

        if let Err(err) = committed {
            // A failed COMMIT may leave the transaction open.
            if let Err(rollback_err) = self.finish_rollback() {
                debug!(error = %rollback_err, "Rollback after failed commit");
            }
            return Err(err.into_transaction_error());
        }

        debug!("Transaction committed");
        Ok(())
    }

    fn rollback(mut self) -> Result<(), StoreError> {
        self.finish_rollback()
            .map_err(PersistenceError::into_transaction_error)?;
        debug!("Transaction rolled back");
        Ok(())
    }
}

impl Drop for PersistenceTransaction<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(err) = self.finish_rollback() {
            warn!(error = %err, "Rollback of abandoned transaction failed");
        }
    }
}
