// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::DomainError;
use crate::request::TermsRequest;
use crate::types::{Money, parse_date};

/// Payment and schedule terms of a candidate registration.
///
/// Field-level sanity (positive fee, installments, duration and a valid
/// payment day) is checked on construction. The shift is kept as submitted
/// and is checked by the registration rules, along with the cross-field
/// rules that need the service and the current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationTerms {
    shift: String,
    monthly_fee: Money,
    installments_quantity: u32,
    enrollment_fee: Money,
    enrollment_due_date: Option<Date>,
    month_duration: u32,
    payment_day: u8,
}

impl RegistrationTerms {
    /// Builds terms from a request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The monthly fee is not positive
    /// - The enrollment fee is negative
    /// - The installment count or month duration is not positive
    /// - The payment day is outside 1..=31
    /// - The due date is present but not a `YYYY-MM-DD` date
    pub fn from_request(request: &TermsRequest) -> Result<Self, DomainError> {
        let monthly_fee: Money = Money::from_cents(request.monthly_fee_cents);
        if !monthly_fee.is_positive() {
            return Err(DomainError::InvalidMonthlyFee(monthly_fee));
        }

        let installments_quantity: u32 = u32::try_from(request.installments_quantity)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(DomainError::InvalidInstallmentsQuantity(
                request.installments_quantity,
            ))?;

        let enrollment_fee: Money = Money::from_cents(request.enrollment_fee_cents);
        if enrollment_fee < Money::ZERO {
            return Err(DomainError::InvalidEnrollmentFee(enrollment_fee));
        }

        let enrollment_due_date: Option<Date> = match request.enrollment_due_date.as_deref() {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(parse_date("enrollment_due_date", raw)?),
        };

        let month_duration: u32 = u32::try_from(request.month_duration)
            .ok()
            .filter(|n| *n > 0)
            .ok_or(DomainError::InvalidMonthDuration(request.month_duration))?;

        let payment_day: u8 = u8::try_from(request.payment_day)
            .ok()
            .filter(|d| (1..=31).contains(d))
            .ok_or(DomainError::InvalidPaymentDay(request.payment_day))?;

        Ok(Self {
            shift: request.shift.trim().to_string(),
            monthly_fee,
            installments_quantity,
            enrollment_fee,
            enrollment_due_date,
            month_duration,
            payment_day,
        })
    }

    /// The shift exactly as submitted.
    #[must_use]
    pub fn shift(&self) -> &str {
        &self.shift
    }

    #[must_use]
    pub const fn monthly_fee(&self) -> Money {
        self.monthly_fee
    }

    #[must_use]
    pub const fn installments_quantity(&self) -> u32 {
        self.installments_quantity
    }

    #[must_use]
    pub const fn enrollment_fee(&self) -> Money {
        self.enrollment_fee
    }

    #[must_use]
    pub const fn enrollment_due_date(&self) -> Option<Date> {
        self.enrollment_due_date
    }

    #[must_use]
    pub const fn month_duration(&self) -> u32 {
        self.month_duration
    }

    #[must_use]
    pub const fn payment_day(&self) -> u8 {
        self.payment_day
    }
}
