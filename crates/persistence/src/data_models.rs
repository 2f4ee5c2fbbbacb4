// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of a stored registration.
///
/// Amounts are in cents and dates are `YYYY-MM-DD`, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationData {
    pub registration_id: String,
    pub code: String,
    pub classroom_id: String,
    pub student_id: String,
    pub service_id: String,
    pub shift: String,
    pub monthly_fee_cents: i64,
    pub installments_quantity: u32,
    pub enrollment_fee_cents: i64,
    pub enrollment_due_date: Option<String>,
    pub month_duration: u32,
    pub payment_day: u8,
    pub status: String,
    pub paid: bool,
    pub enrollment_date: String,
}

/// Serializable seat summary of a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassroomOccupancy {
    pub classroom_id: String,
    pub identification: String,
    pub shift: String,
    pub capacity: u32,
    pub occupied_seats: u32,
    pub remaining_seats: u32,
    pub status: String,
}
