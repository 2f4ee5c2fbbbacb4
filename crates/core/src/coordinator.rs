// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The registration transaction coordinator.
//!
//! A registration moves through these stages, and any failure ends in
//! `RolledBack` with nothing persisted:
//!
//! ```text
//! Init -> LookupReferences -> BuildAggregate -> DedupCheck -> Validate
//!      -> ReserveSeat -> Persist -> Committed
//! ```
//!
//! The unit of work opens at `DedupCheck`. Reference lookups and aggregate
//! construction touch no locks, so failures there cost nothing to undo.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use tracing::{debug, info, warn};

use school_enroll_domain::{
    Classroom, ClassroomId, RegistrationApproval, RegistrationCandidate, RegistrationCode,
    RegistrationId, RegistrationStatus, RegistrationTerms, Service, ServiceId, Student,
    StudentId, StudentRequest, TermsRequest, build_student, validate_registration,
};

use crate::contracts::{PersonStore, RegistrationStore, TransactionManager, UnitOfWork};
use crate::duplicate_guard::{IdentityResolution, resolve_identity};
use crate::error::{EnrollmentError, StoreError};
use crate::registration::NewRegistration;
use crate::seat_ledger::reserve_seat;

/// Default budget for a single unit of work.
pub const DEFAULT_TRANSACTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Random codes drawn before giving up on a free one for the day.
pub const CODE_DRAW_ATTEMPTS: usize = 8;

/// Stages of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStage {
    Init,
    LookupReferences,
    BuildAggregate,
    DedupCheck,
    Validate,
    ReserveSeat,
    Persist,
    Committed,
    RolledBack,
}

impl RegistrationStage {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::LookupReferences => "LOOKUP_REFERENCES",
            Self::BuildAggregate => "BUILD_AGGREGATE",
            Self::DedupCheck => "DEDUP_CHECK",
            Self::Validate => "VALIDATE",
            Self::ReserveSeat => "RESERVE_SEAT",
            Self::Persist => "PERSIST",
            Self::Committed => "COMMITTED",
            Self::RolledBack => "ROLLED_BACK",
        }
    }

    /// Returns whether a failure in this stage happens inside the unit of work.
    #[must_use]
    pub const fn is_transactional(&self) -> bool {
        matches!(
            self,
            Self::DedupCheck | Self::Validate | Self::ReserveSeat | Self::Persist
        )
    }
}

impl std::fmt::Display for RegistrationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tuning for the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentConfig {
    /// Upper bound on the time between opening and committing the unit of
    /// work. Exceeding it rolls the attempt back.
    pub transaction_timeout: Duration,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            transaction_timeout: DEFAULT_TRANSACTION_TIMEOUT,
        }
    }
}

/// Source of "today" for date rules and registration codes.
pub trait Clock {
    fn today(&self) -> Date;
}

/// The UTC calendar date of the host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// A request to enroll a student into a classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub classroom_id: ClassroomId,
    pub service_id: ServiceId,
    pub student: StudentRequest,
    #[serde(flatten)]
    pub terms: TermsRequest,
}

/// The result of a committed registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReceipt {
    pub code: RegistrationCode,
    pub registration_id: RegistrationId,
    pub student_id: StudentId,
    /// True when an existing student identity was reused.
    pub reused_identity: bool,
    pub status: RegistrationStatus,
}

/// Orchestrates a registration as one atomic unit of work.
///
/// The coordinator is the only party that commits or rolls back. Each call
/// to [`RegistrationCoordinator::create_registration`] is synchronous and
/// independent; concurrent callers each own a coordinator over their own
/// connection and serialize on the classroom lock in the store.
#[derive(Debug)]
pub struct RegistrationCoordinator<S, C = SystemClock> {
    store: S,
    config: EnrollmentConfig,
    clock: C,
}

impl<S: TransactionManager> RegistrationCoordinator<S, SystemClock> {
    /// Creates a coordinator that reads the host clock.
    #[must_use]
    pub const fn new(store: S, config: EnrollmentConfig) -> Self {
        Self {
            store,
            config,
            clock: SystemClock,
        }
    }
}

impl<S: TransactionManager, C: Clock> RegistrationCoordinator<S, C> {
    /// Creates a coordinator with a caller-supplied clock.
    #[must_use]
    pub const fn with_clock(store: S, config: EnrollmentConfig, clock: C) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub const fn config(&self) -> &EnrollmentConfig {
        &self.config
    }

    /// Enrolls a student into a classroom.
    ///
    /// On success the seat increment, the student graph (for a new identity)
    /// and the registration record have all been committed together. On
    /// failure none of them are visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The classroom or service does not exist
    /// - The student aggregate or terms are invalid
    /// - The student is already enrolled in the classroom
    /// - A registration rule fails
    /// - The classroom is closed or full
    /// - The store fails or the transaction budget is exceeded
    pub fn create_registration(
        &mut self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, EnrollmentError> {
        let today: Date = self.clock.today();
        let limit: Duration = self.config.transaction_timeout;
        let mut stage: RegistrationStage = RegistrationStage::Init;

        let result: Result<RegistrationReceipt, EnrollmentError> =
            self.run(request, today, limit, &mut stage);

        match &result {
            Ok(receipt) => {
                info!(
                    code = %receipt.code,
                    student_id = %receipt.student_id,
                    classroom_id = %request.classroom_id,
                    status = %receipt.status,
                    stage = %RegistrationStage::Committed,
                    "Registration committed"
                );
            }
            Err(err) => {
                warn!(
                    classroom_id = %request.classroom_id,
                    failed_stage = %stage,
                    in_transaction = stage.is_transactional(),
                    kind = %err.kind(),
                    error = %err,
                    stage = %RegistrationStage::RolledBack,
                    "Registration rolled back"
                );
            }
        }

        result
    }

    fn run(
        &mut self,
        request: &RegistrationRequest,
        today: Date,
        limit: Duration,
        stage: &mut RegistrationStage,
    ) -> Result<RegistrationReceipt, EnrollmentError> {
        advance(stage, RegistrationStage::LookupReferences);
        let classroom: Classroom = self
            .store
            .find_classroom(request.classroom_id)?
            .ok_or_else(|| EnrollmentError::classroom_not_found(request.classroom_id))?;
        let service: Service = self
            .store
            .find_service(request.service_id)?
            .ok_or_else(|| EnrollmentError::service_not_found(request.service_id))?;

        advance(stage, RegistrationStage::BuildAggregate);
        let student: Student = build_student(&request.student)?;
        let terms: RegistrationTerms = RegistrationTerms::from_request(&request.terms)?;

        advance(stage, RegistrationStage::DedupCheck);
        let started: Instant = Instant::now();
        let mut tx: S::Transaction<'_> = self.store.begin()?;

        let outcome: Result<RegistrationReceipt, EnrollmentError> = in_transaction(
            &mut tx,
            &RegistrationCandidate {
                student: &student,
                service: &service,
                classroom: &classroom,
                terms: &terms,
            },
            today,
            Budget { started, limit },
            stage,
        );

        match outcome {
            Ok(receipt) => {
                tx.commit()?;
                advance(stage, RegistrationStage::Committed);
                Ok(receipt)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    warn!(error = %rollback_err, "Rollback reported a failure");
                }
                Err(err)
            }
        }
    }
}

#[derive(Clone, Copy)]
struct Budget {
    started: Instant,
    limit: Duration,
}

impl Budget {
    fn check(self) -> Result<(), EnrollmentError> {
        let elapsed: Duration = self.started.elapsed();
        if elapsed > self.limit {
            return Err(EnrollmentError::TransactionTimeout {
                elapsed,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

fn advance(stage: &mut RegistrationStage, next: RegistrationStage) {
    debug!(from = %stage, to = %next, "Registration stage transition");
    *stage = next;
}

fn in_transaction<T: UnitOfWork>(
    tx: &mut T,
    candidate: &RegistrationCandidate<'_>,
    today: Date,
    budget: Budget,
    stage: &mut RegistrationStage,
) -> Result<RegistrationReceipt, EnrollmentError> {
    let classroom_id: ClassroomId = candidate.classroom.id();

    let identity: IdentityResolution = resolve_identity(
        tx,
        candidate.student.document(),
        candidate.student.id(),
        classroom_id,
    )?;
    budget.check()?;

    advance(stage, RegistrationStage::Validate);
    let approval: RegistrationApproval = validate_registration(candidate, today)?;
    budget.check()?;

    advance(stage, RegistrationStage::ReserveSeat);
    reserve_seat(tx, classroom_id)?;
    budget.check()?;

    advance(stage, RegistrationStage::Persist);
    if let IdentityResolution::New(_) = identity {
        PersonStore::create_student_graph(tx, candidate.student)?;
    }

    let code: RegistrationCode = draw_free_code(tx, today)?;
    let registration: NewRegistration = NewRegistration::approved(
        identity.student_id(),
        classroom_id,
        candidate.service.id(),
        candidate.terms,
        approval,
        today,
        code,
    );
    RegistrationStore::create_registration(tx, &registration)?;
    budget.check()?;

    Ok(RegistrationReceipt {
        code: registration.code,
        registration_id: registration.id,
        student_id: registration.student_id,
        reused_identity: identity.is_existing(),
        status: registration.status,
    })
}

/// Draws random codes for `today` until one is not held by a stored
/// registration.
fn draw_free_code<T: RegistrationStore>(
    tx: &mut T,
    today: Date,
) -> Result<RegistrationCode, EnrollmentError> {
    for attempt in 1..=CODE_DRAW_ATTEMPTS {
        let code: RegistrationCode = RegistrationCode::new(today, rand::random::<u32>());
        if !tx.code_exists(&code)? {
            return Ok(code);
        }
        debug!(%code, attempt, "Registration code already taken");
    }

    Err(EnrollmentError::PersistenceFailure(StoreError::Conflict(format!(
        "no free registration code for {today} after {CODE_DRAW_ATTEMPTS} draws"
    ))))
}
