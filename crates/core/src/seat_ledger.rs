// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity enforcement for classrooms.
//!
//! A reservation reads the classroom under an exclusive lock, then issues a
//! conditional increment guarded by `occupied_seats < capacity`. An earlier
//! vacancy read outside the lock is advisory only.

use tracing::debug;

use school_enroll_domain::{Classroom, ClassroomId, ClassroomStatus};

use crate::contracts::{ClassroomLookup, SeatUpdate};
use crate::error::EnrollmentError;

/// Reserves one seat in a classroom inside the caller's unit of work.
///
/// The classroom lock stays held until the caller commits or rolls back.
///
/// # Returns
///
/// The classroom as read under the lock, before the increment.
///
/// # Errors
///
/// Returns an error if:
/// - The classroom no longer exists
/// - The classroom is closed
/// - Every seat is taken, either at read time or at the conditional write
/// - The store fails or the lock wait times out
pub fn reserve_seat<T: ClassroomLookup>(
    store: &mut T,
    classroom_id: ClassroomId,
) -> Result<Classroom, EnrollmentError> {
    let classroom: Classroom = store
        .find_classroom_for_update(classroom_id)?
        .ok_or_else(|| EnrollmentError::classroom_not_found(classroom_id))?;

    if classroom.status() == ClassroomStatus::Closed {
        return Err(EnrollmentError::ClassroomClosed(classroom_id));
    }

    if !classroom.has_vacancy() {
        debug!(
            %classroom_id,
            capacity = classroom.capacity(),
            occupied_seats = classroom.occupied_seats(),
            "Classroom is full"
        );
        return Err(EnrollmentError::NoVacancyAvailable(classroom_id));
    }

    match store.reserve_seat(classroom_id)? {
        SeatUpdate::Reserved => {
            debug!(
                %classroom_id,
                occupied_seats = classroom.occupied_seats() + 1,
                "Reserved seat"
            );
            Ok(classroom)
        }
        SeatUpdate::Full => Err(EnrollmentError::NoVacancyAvailable(classroom_id)),
    }
}
