// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Unvalidated input shapes for building a student aggregate and
//! registration terms.

use serde::{Deserialize, Serialize};

/// An address as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddressRequest {
    pub street: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub zip_code: String,
}

/// A phone as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PhoneRequest {
    pub description: String,
    pub phone: String,
}

/// A guardian as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuardianRequest {
    pub first_name: String,
    pub last_name: String,
    /// Birth date (`YYYY-MM-DD`).
    pub birth_date: String,
    #[serde(default)]
    pub rg_document: Option<String>,
    pub document: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub addresses: Vec<AddressRequest>,
    #[serde(default)]
    pub phones: Vec<PhoneRequest>,
}

/// A student as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudentRequest {
    pub first_name: String,
    pub last_name: String,
    /// Birth date (`YYYY-MM-DD`).
    pub birth_date: String,
    #[serde(default)]
    pub rg_document: Option<String>,
    pub document: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub self_responsible: bool,
    #[serde(default)]
    pub addresses: Vec<AddressRequest>,
    #[serde(default)]
    pub phones: Vec<PhoneRequest>,
    #[serde(default)]
    pub guardians: Vec<GuardianRequest>,
}

/// Payment and schedule terms as submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TermsRequest {
    pub shift: String,
    pub monthly_fee_cents: i64,
    pub installments_quantity: i32,
    #[serde(default)]
    pub enrollment_fee_cents: i64,
    /// Enrollment fee due date (`YYYY-MM-DD`).
    #[serde(default)]
    pub enrollment_due_date: Option<String>,
    pub month_duration: i32,
    pub payment_day: i32,
}
