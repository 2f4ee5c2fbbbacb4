// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Every other persistence test also exercises connection setup, migrations
//! and foreign key enforcement through `Persistence::new_in_memory()`. The
//! tests here pin down the parts nothing else checks directly.

use std::time::Duration;

use crate::tests::{create_test_classroom, create_test_service};
use crate::{DEFAULT_LOCK_TIMEOUT, DEFAULT_READ_TIMEOUT, Persistence, StoreConfig};

#[test]
fn test_persistence_initialization() {
    let result = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = Persistence::new_in_memory().unwrap();
    let mut db2 = Persistence::new_in_memory().unwrap();

    let classroom_id = create_test_classroom(&mut db1, 10, 0);

    assert!(db1.get_classroom(classroom_id).is_ok());
    assert!(
        db2.get_classroom(classroom_id).is_err(),
        "db2 must not see rows written to db1"
    );
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_default_store_config() {
    let config = StoreConfig::default();
    assert_eq!(config.read_timeout, DEFAULT_READ_TIMEOUT);
    assert_eq!(config.lock_timeout, DEFAULT_LOCK_TIMEOUT);
    assert_eq!(config.read_timeout, Duration::from_secs(2));
    assert_eq!(config.lock_timeout, Duration::from_secs(5));
}

#[test]
fn test_custom_config_is_kept() {
    let config = StoreConfig {
        read_timeout: Duration::from_millis(250),
        lock_timeout: Duration::from_millis(750),
    };
    let persistence = Persistence::new_in_memory_with_config(config).unwrap();
    assert_eq!(*persistence.config(), config);
}

#[test]
fn test_file_database_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enroll.db");

    let service_id = {
        let mut first = Persistence::new_with_file(&path).unwrap();
        create_test_service(&mut first, 100_000)
    };

    let mut second = Persistence::new_with_file(&path).unwrap();
    let service = second.get_service(service_id).unwrap();
    assert_eq!(service.price().cents(), 100_000);
}
