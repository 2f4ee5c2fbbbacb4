// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! timeouts and transaction control that cannot be expressed in
//! backend-agnostic Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite`: `SQLite` backend (default for development and testing)
//! - `mysql`: MySQL/MariaDB backend (validated via opt-in tests)
//!
//! ## Locking
//!
//! The unit of work must hold an exclusive lock on the classroom row from
//! the seat reservation until commit:
//!
//! - `SQLite` has no row locks. The unit of work opens with
//!   `BEGIN IMMEDIATE`, taking the database write lock up front, and waiting
//!   writers are bounded by `busy_timeout`.
//! - `MySQL` opens a plain transaction and reads the classroom with
//!   `SELECT ... FOR UPDATE`, bounded by `innodb_lock_wait_timeout`. The
//!   statement bound used for reference lookups is lifted first.
//!
//! All domain queries and mutations live in `queries/` and `mutations/`
//! modules and must work across all supported backends.

pub mod mysql;
pub mod sqlite;

use std::time::Duration;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;

/// Trait for backend-specific operations.
pub trait PersistenceBackend: Connection {
    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Bounds the next reads performed outside a unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the setting cannot be applied.
    fn bound_reads(&mut self, timeout: Duration) -> Result<(), PersistenceError>;

    /// Opens a unit of work with the backend's locking discipline.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, including a
    /// lock wait exceeding `lock_timeout`.
    fn begin_unit_of_work(&mut self, lock_timeout: Duration) -> Result<(), PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the commit fails.
    fn commit_unit_of_work(&mut self) -> Result<(), PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the rollback fails.
    fn rollback_unit_of_work(&mut self) -> Result<(), PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn bound_reads(&mut self, timeout: Duration) -> Result<(), PersistenceError> {
        sqlite::set_busy_timeout(self, timeout)
    }

    fn begin_unit_of_work(&mut self, lock_timeout: Duration) -> Result<(), PersistenceError> {
        sqlite::set_busy_timeout(self, lock_timeout)?;
        sqlite::begin_immediate(self)
    }

    fn commit_unit_of_work(&mut self) -> Result<(), PersistenceError> {
        sqlite::commit(self)
    }

    fn rollback_unit_of_work(&mut self) -> Result<(), PersistenceError> {
        sqlite::rollback(self)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }

    fn bound_reads(&mut self, timeout: Duration) -> Result<(), PersistenceError> {
        mysql::set_statement_timeout(self, Some(timeout));
        Ok(())
    }

    fn begin_unit_of_work(&mut self, lock_timeout: Duration) -> Result<(), PersistenceError> {
        mysql::set_statement_timeout(self, None);
        mysql::set_lock_wait_timeout(self, lock_timeout)?;
        mysql::begin(self)
    }

    fn commit_unit_of_work(&mut self) -> Result<(), PersistenceError> {
        mysql::commit(self)
    }

    fn rollback_unit_of_work(&mut self) -> Result<(), PersistenceError> {
        mysql::rollback(self)
    }
}

/// Converts a duration to whole milliseconds, saturating.
#[must_use]
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
