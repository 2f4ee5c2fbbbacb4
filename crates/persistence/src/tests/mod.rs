// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod catalog_tests;
mod initialization_tests;
mod timeout_tests;

use time::Date;
use time::macros::date;

use school_enroll::{EnrollmentConfig, FixedClock, RegistrationCoordinator, RegistrationRequest};
use school_enroll_domain::{
    AddressRequest, Classroom, ClassroomId, ClassroomStatus, GuardianRequest, Money,
    PhoneRequest, Service, ServiceId, Shift, StudentRequest, TermsRequest, check_digit,
};

use crate::Persistence;

pub const TODAY: Date = date!(2026 - 01 - 15);

pub const STUDENT_DOCUMENT: &str = "111.444.777-35";
pub const GUARDIAN_DOCUMENT: &str = "529.982.247-25";
pub const OTHER_STUDENT_DOCUMENT: &str = "123.456.789-09";
pub const THIRD_STUDENT_DOCUMENT: &str = "987.654.321-00";

/// Builds a valid document from a nine-digit base derived from `seed`.
pub fn generate_document(seed: u32) -> String {
    let mut digits: Vec<u32> = format!("{:09}", 200_000_000 + seed * 7)
        .chars()
        .map(|c| c.to_digit(10).unwrap())
        .collect();
    digits.push(check_digit(&digits));
    digits.push(check_digit(&digits));
    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

pub fn create_test_service(persistence: &mut Persistence, price_cents: i64) -> ServiceId {
    let service: Service = Service::new(
        ServiceId::new_random(),
        String::from("Elementary tuition"),
        Money::from_cents(price_cents),
    );
    persistence
        .create_service(&service)
        .expect("Failed to create service");
    service.id()
}

pub fn create_test_classroom(
    persistence: &mut Persistence,
    capacity: u32,
    occupied_seats: u32,
) -> ClassroomId {
    let classroom: Classroom = Classroom::new(
        ClassroomId::new_random(),
        String::from("1A"),
        Shift::Morning,
        capacity,
        occupied_seats,
        ClassroomStatus::Open,
    )
    .expect("Valid classroom");
    persistence
        .create_classroom(&classroom)
        .expect("Failed to create classroom");
    classroom.id()
}

/// Seeds a 30-seat classroom and a service priced at 12 months of 400.00.
pub fn seed_catalog(persistence: &mut Persistence) -> (ClassroomId, ServiceId) {
    let classroom_id: ClassroomId = create_test_classroom(persistence, 30, 0);
    let service_id: ServiceId = create_test_service(persistence, 480_000);
    (classroom_id, service_id)
}

pub fn create_coordinator(
    persistence: Persistence,
) -> RegistrationCoordinator<Persistence, FixedClock> {
    RegistrationCoordinator::with_clock(persistence, EnrollmentConfig::default(), FixedClock(TODAY))
}

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

/// A guarded student with one reachable guardian.
pub fn create_test_student(document: &str) -> StudentRequest {
    StudentRequest {
        first_name: String::from("Ana"),
        last_name: String::from("Souza"),
        birth_date: String::from("2015-08-02"),
        rg_document: Some(String::from("12.345.678-9")),
        document: document.to_string(),
        email: None,
        self_responsible: false,
        addresses: vec![create_test_address()],
        phones: Vec::new(),
        guardians: vec![GuardianRequest {
            first_name: String::from("Maria"),
            last_name: String::from("Souza"),
            birth_date: String::from("1980-03-14"),
            rg_document: None,
            document: GUARDIAN_DOCUMENT.to_string(),
            email: Some(String::from("maria@example.com")),
            addresses: vec![create_test_address()],
            phones: vec![create_test_phone()],
        }],
    }
}

pub fn create_test_terms() -> TermsRequest {
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

pub fn create_test_request(
    classroom_id: ClassroomId,
    service_id: ServiceId,
    document: &str,
) -> RegistrationRequest {
    RegistrationRequest {
        classroom_id,
        service_id,
        student: create_test_student(document),
        terms: create_test_terms(),
    }
}
