// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AddressRequest, Classroom, ClassroomId, ClassroomStatus, GuardianRequest, Money,
    PhoneRequest, Service, ServiceId, Shift, StudentRequest, TermsRequest,
};

pub const VALID_DOCUMENT: &str = "111.444.777-35";
pub const GUARDIAN_DOCUMENT: &str = "529.982.247-25";

pub fn create_test_address() -> AddressRequest {
    AddressRequest {
        street: String::from("Rua das Flores, 100"),
        city: String::from("Campinas"),
        district: String::from("Centro"),
        state: String::from("SP"),
        zip_code: String::from("13010-000"),
    }
}

pub fn create_test_phone() -> PhoneRequest {
    PhoneRequest {
        description: String::from("mobile"),
        phone: String::from("+55 19 99999-0000"),
    }
}

pub fn create_test_guardian() -> GuardianRequest {
    GuardianRequest {
        first_name: String::from("Maria"),
        last_name: String::from("Souza"),
        birth_date: String::from("1980-03-14"),
        rg_document: None,
        document: String::from(GUARDIAN_DOCUMENT),
        email: Some(String::from("maria@example.com")),
        addresses: vec![create_test_address()],
        phones: vec![create_test_phone()],
    }
}

/// A guarded student with one complete guardian.
pub fn create_test_student_request() -> StudentRequest {
    StudentRequest {
        first_name: String::from("Ana"),
        last_name: String::from("Souza"),
        birth_date: String::from("2015-08-02"),
        rg_document: Some(String::from("12.345.678-9")),
        document: String::from(VALID_DOCUMENT),
        email: None,
        self_responsible: false,
        addresses: Vec::new(),
        phones: Vec::new(),
        guardians: vec![create_test_guardian()],
    }
}

pub fn create_self_responsible_request() -> StudentRequest {
    StudentRequest {
        self_responsible: true,
        addresses: vec![create_test_address()],
        phones: vec![create_test_phone()],
        guardians: Vec::new(),
        ..create_test_student_request()
    }
}

pub fn create_test_terms_request() -> TermsRequest {
    TermsRequest {
        shift: String::from("morning"),
        monthly_fee_cents: 40_000,
        installments_quantity: 12,
        enrollment_fee_cents: 0,
        enrollment_due_date: None,
        month_duration: 12,
        payment_day: 10,
    }
}

pub fn create_test_service(price_cents: i64) -> Service {
    Service::new(
        ServiceId::new_random(),
        String::from("Elementary school"),
        Money::from_cents(price_cents),
    )
}

pub fn create_test_classroom() -> Classroom {
    Classroom::new(
        ClassroomId::new_random(),
        String::from("1A"),
        Shift::Morning,
        30,
        0,
        ClassroomStatus::Open,
    )
    .unwrap()
}
