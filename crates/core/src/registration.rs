// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

use school_enroll_domain::{
    ClassroomId, Money, RegistrationApproval, RegistrationCode, RegistrationId,
    RegistrationStatus, RegistrationTerms, ServiceId, Shift, StudentId,
};

/// An enrollment record ready to be written.
///
/// Built only after every rule has passed. It is immutable once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub id: RegistrationId,
    pub code: RegistrationCode,
    pub classroom_id: ClassroomId,
    pub student_id: StudentId,
    pub service_id: ServiceId,
    pub shift: Shift,
    pub monthly_fee: Money,
    pub installments_quantity: u32,
    pub enrollment_fee: Money,
    pub enrollment_due_date: Option<Date>,
    pub month_duration: u32,
    pub payment_day: u8,
    pub status: RegistrationStatus,
    pub paid: bool,
    pub enrollment_date: Date,
}

impl NewRegistration {
    /// Assembles the record for an approved candidate.
    ///
    /// # Arguments
    ///
    /// * `student_id` - The student actually enrolled (new or reused identity)
    /// * `classroom_id` - The target classroom
    /// * `service_id` - The tuition plan
    /// * `terms` - The validated payment terms
    /// * `approval` - The outcome of the rule check
    /// * `enrollment_date` - The day of the registration
    /// * `code` - A registration code not held by any stored registration
    #[must_use]
    pub fn approved(
        student_id: StudentId,
        classroom_id: ClassroomId,
        service_id: ServiceId,
        terms: &RegistrationTerms,
        approval: RegistrationApproval,
        enrollment_date: Date,
        code: RegistrationCode,
    ) -> Self {
        Self {
            id: RegistrationId::new_random(),
            code,
            classroom_id,
            student_id,
            service_id,
            shift: approval.shift,
            monthly_fee: terms.monthly_fee(),
            installments_quantity: terms.installments_quantity(),
            enrollment_fee: terms.enrollment_fee(),
            enrollment_due_date: terms.enrollment_due_date(),
            month_duration: terms.month_duration(),
            payment_day: terms.payment_day(),
            status: approval.status,
            paid: false,
            enrollment_date,
        }
    }
}
