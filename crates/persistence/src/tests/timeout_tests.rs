// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use school_enroll::{
    EnrollmentConfig, EnrollmentError, FixedClock, RegistrationCoordinator, StoreError,
    TransactionManager, UnitOfWork,
};

use crate::tests::{STUDENT_DOCUMENT, TODAY, create_test_request, seed_catalog};
use crate::{Persistence, StoreConfig};

#[test]
fn test_lock_wait_is_bounded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locked.db");

    let mut holder = Persistence::new_with_file(&path).unwrap();
    let (classroom_id, service_id) = seed_catalog(&mut holder);

    let config = StoreConfig {
        read_timeout: Duration::from_millis(500),
        lock_timeout: Duration::from_millis(100),
    };
    let waiter = Persistence::new_with_file_and_config(&path, config).unwrap();
    let mut coordinator =
        RegistrationCoordinator::with_clock(waiter, EnrollmentConfig::default(), FixedClock(TODAY));
    let request = create_test_request(classroom_id, service_id, STUDENT_DOCUMENT);

    let held = holder.begin().unwrap();
    let result = coordinator.create_registration(&request);

    let err = result.unwrap_err();
    assert!(
        matches!(err, EnrollmentError::PersistenceFailure(StoreError::Timeout(_))),
        "unexpected error: {err:?}"
    );
    assert!(err.is_retryable());

    held.rollback().unwrap();

    // Once the lock is released the same request goes through.
    coordinator.create_registration(&request).unwrap();
    assert_eq!(
        coordinator.store_mut().get_classroom(classroom_id).unwrap().occupied_seats(),
        1
    );
}

#[test]
fn test_exhausted_transaction_budget_rolls_back() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let (classroom_id, service_id) = seed_catalog(&mut persistence);
    let config = EnrollmentConfig {
        transaction_timeout: Duration::ZERO,
    };
    let mut coordinator =
        RegistrationCoordinator::with_clock(persistence, config, FixedClock(TODAY));

    let result = coordinator
        .create_registration(&create_test_request(classroom_id, service_id, STUDENT_DOCUMENT));

    assert!(matches!(
        result,
        Err(EnrollmentError::TransactionTimeout { limit, .. }) if limit == Duration::ZERO
    ));

    let store = coordinator.store_mut();
    assert_eq!(store.get_classroom(classroom_id).unwrap().occupied_seats(), 0);
    assert_eq!(store.count_students().unwrap(), 0);
}
