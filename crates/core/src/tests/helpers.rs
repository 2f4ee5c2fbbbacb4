// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! An in-memory transactional store.
//!
//! `begin` snapshots the committed state, every in-transaction call works on
//! the snapshot, `commit` publishes it and dropping the transaction discards it.

use std::collections::HashMap;
use std::time::Duration;

use school_enroll_domain::{
    AddressRequest, Classroom, ClassroomId, ClassroomStatus, Document, GuardianRequest, Money,
    PhoneRequest, RegistrationCode, Service, ServiceId, Shift, Student, StudentId,
    StudentRequest, TermsRequest,
};
use time::Date;
use time::macros::date;

use crate::{
    ClassroomLookup, EnrollmentConfig, EnrollmentStore, FixedClock, IdentityStore,
    NewRegistration, PersonStore, ReferenceLookup, RegistrationCoordinator, RegistrationRequest,
    RegistrationStore, SeatUpdate, StoreError, TransactionManager, UnitOfWork,
};

pub const TODAY: Date = date!(2026 - 01 - 15);

#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub classrooms: HashMap<ClassroomId, Classroom>,
    pub services: HashMap<ServiceId, Service>,
    pub students: HashMap<StudentId, Student>,
    pub registrations: Vec<NewRegistration>,
}

/// Failures to inject into the next transactions.
#[derive(Debug, Clone, Default)]
pub struct Failures {
    pub begin: bool,
    pub commit: bool,
    pub create_student_graph: bool,
    pub create_registration: bool,
    /// Makes the conditional increment report a lost race.
    pub lose_seat_race: bool,
    /// Sleeps inside `create_registration` before writing.
    pub persist_delay: Option<Duration>,
    /// Number of upcoming `code_exists` checks that report the code as taken.
    pub taken_codes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Calls {
    pub begin: usize,
    pub commit: usize,
    pub rollback: usize,
    pub find_classroom_for_update: usize,
    pub reserve_seat: usize,
    pub create_student_graph: usize,
    pub create_registration: usize,
    pub code_exists: usize,
}

#[derive(Debug, Default)]
pub struct FakeStore {
    pub state: StoreState,
    pub failures: Failures,
    pub calls: Calls,
}

impl FakeStore {
    pub fn add_classroom(
        &mut self,
        capacity: u32,
        occupied: u32,
        status: ClassroomStatus,
    ) -> ClassroomId {
        let classroom: Classroom = Classroom::new(
            ClassroomId::new_random(),
            String::from("1A"),
            Shift::Morning,
            capacity,
            occupied,
            status,
        )
        .unwrap();
        let id: ClassroomId = classroom.id();
        self.state.classrooms.insert(id, classroom);
        id
    }

    pub fn add_service(&mut self, price_cents: i64) -> ServiceId {
        let service: Service = Service::new(
            ServiceId::new_random(),
            String::from("Elementary school"),
            Money::from_cents(price_cents),
        );
        let id: ServiceId = service.id();
        self.state.services.insert(id, service);
        id
    }

    pub fn occupied_seats(&self, id: ClassroomId) -> u32 {
        self.state.classrooms[&id].occupied_seats()
    }
}

impl ReferenceLookup for FakeStore {
    fn find_classroom(&mut self, id: ClassroomId) -> Result<Option<Classroom>, StoreError> {
        Ok(self.state.classrooms.get(&id).cloned())
    }

    fn find_service(&mut self, id: ServiceId) -> Result<Option<Service>, StoreError> {
        Ok(self.state.services.get(&id).cloned())
    }
}

impl TransactionManager for FakeStore {
    type Transaction<'t>
        = FakeTransaction<'t>
    where
        Self: 't;

    fn begin(&mut self) -> Result<FakeTransaction<'_>, StoreError> {
        self.calls.begin += 1;
        if self.failures.begin {
            return Err(StoreError::Transaction(String::from("injected begin failure")));
        }
        let working: StoreState = self.state.clone();
        Ok(FakeTransaction {
            store: self,
            working,
        })
    }
}

pub struct FakeTransaction<'a> {
    store: &'a mut FakeStore,
    working: StoreState,
}

impl ClassroomLookup for FakeTransaction<'_> {
    fn find_classroom_for_update(
        &mut self,
        id: ClassroomId,
    ) -> Result<Option<Classroom>, StoreError> {
        self.store.calls.find_classroom_for_update += 1;
        Ok(self.working.classrooms.get(&id).cloned())
    }

    fn reserve_seat(&mut self, id: ClassroomId) -> Result<SeatUpdate, StoreError> {
        self.store.calls.reserve_seat += 1;
        if self.store.failures.lose_seat_race {
            return Ok(SeatUpdate::Full);
        }
        let Some(current) = self.working.classrooms.get(&id) else {
            return Ok(SeatUpdate::Full);
        };
        if !current.has_vacancy() {
            return Ok(SeatUpdate::Full);
        }
        let updated: Classroom = Classroom::new(
            current.id(),
            current.identification().to_string(),
            current.shift(),
            current.capacity(),
            current.occupied_seats() + 1,
            current.status(),
        )
        .map_err(|e| StoreError::Write(e.to_string()))?;
        self.working.classrooms.insert(id, updated);
        Ok(SeatUpdate::Reserved)
    }
}

impl IdentityStore for FakeTransaction<'_> {
    fn find_by_document(&mut self, document: &Document) -> Result<Option<StudentId>, StoreError> {
        Ok(self
            .working
            .students
            .values()
            .find(|s| s.document() == document)
            .map(Student::id))
    }
}

impl EnrollmentStore for FakeTransaction<'_> {
    fn find_by_student_and_class(
        &mut self,
        student_id: StudentId,
        classroom_id: ClassroomId,
    ) -> Result<Option<RegistrationCode>, StoreError> {
        Ok(self
            .working
            .registrations
            .iter()
            .find(|r| r.student_id == student_id && r.classroom_id == classroom_id)
            .map(|r| r.code.clone()))
    }
}

impl PersonStore for FakeTransaction<'_> {
    fn create_student_graph(&mut self, student: &Student) -> Result<(), StoreError> {
        self.store.calls.create_student_graph += 1;
        if self.store.failures.create_student_graph {
            return Err(StoreError::Write(String::from("injected graph failure")));
        }
        self.working.students.insert(student.id(), student.clone());
        Ok(())
    }
}

impl RegistrationStore for FakeTransaction<'_> {
    fn code_exists(&mut self, code: &RegistrationCode) -> Result<bool, StoreError> {
        self.store.calls.code_exists += 1;
        if self.store.failures.taken_codes > 0 {
            self.store.failures.taken_codes -= 1;
            return Ok(true);
        }
        Ok(self.working.registrations.iter().any(|r| &r.code == code))
    }

    fn create_registration(&mut self, registration: &NewRegistration) -> Result<(), StoreError> {
        self.store.calls.create_registration += 1;
        if let Some(delay) = self.store.failures.persist_delay {
            std::thread::sleep(delay);
        }
        if self.store.failures.create_registration {
            return Err(StoreError::Write(String::from(
                "injected registration failure",
            )));
        }
        self.working.registrations.push(registration.clone());
        Ok(())
    }
}

impl UnitOfWork for FakeTransaction<'_> {
    fn commit(self) -> Result<(), StoreError> {
        self.store.calls.commit += 1;
        if self.store.failures.commit {
            return Err(StoreError::Transaction(String::from(
                "injected commit failure",
            )));
        }
        self.store.state = self.working;
        Ok(())
    }

    fn rollback(self) -> Result<(), StoreError> {
        self.store.calls.rollback += 1;
        Ok(())
    }
}

pub fn create_coordinator(store: FakeStore) -> RegistrationCoordinator<FakeStore, FixedClock> {
    RegistrationCoordinator::with_clock(store, EnrollmentConfig::default(), FixedClock(TODAY))
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

pub fn create_test_student(document: &str) -> StudentRequest {
    StudentRequest {
        first_name: String::from("Ana"),
        last_name: String::from("Souza"),
        birth_date: String::from("2015-08-02"),
        rg_document: None,
        document: document.to_string(),
        email: None,
        self_responsible: false,
        addresses: Vec::new(),
        phones: Vec::new(),
        guardians: vec![GuardianRequest {
            first_name: String::from("Maria"),
            last_name: String::from("Souza"),
            birth_date: String::from("1980-03-14"),
            rg_document: None,
            document: String::from("529.982.247-25"),
            email: None,
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
) -> RegistrationRequest {
    RegistrationRequest {
        classroom_id,
        service_id,
        student: create_test_student("111.444.777-35"),
        terms: create_test_terms(),
    }
}
