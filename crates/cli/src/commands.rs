// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand definitions and their execution against one store.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde_json::{Value, json};
use tracing::info;

use school_enroll::{Clock, RegistrationCoordinator, RegistrationReceipt, RegistrationRequest};
use school_enroll_domain::{
    Classroom, ClassroomId, ClassroomStatus, Money, Service, ServiceId, Shift,
};
use school_enroll_persistence::Persistence;

use crate::error::CliError;

/// Operator commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a tuition service to the catalog
    SeedService {
        /// Human-readable description
        #[arg(long)]
        description: String,
        /// Total price in cents
        #[arg(long)]
        price_cents: i64,
    },

    /// Add a classroom to the catalog
    SeedClassroom {
        /// Classroom label, e.g. "1A"
        #[arg(long)]
        identification: String,
        /// morning, afternoon, nocturnal or full-time
        #[arg(long)]
        shift: Shift,
        /// Number of seats
        #[arg(long)]
        capacity: u32,
        /// Seats already taken
        #[arg(long, default_value_t = 0)]
        occupied: u32,
    },

    /// Open or close a classroom for enrollment
    ClassroomStatus {
        #[arg(long)]
        id: ClassroomId,
        /// open or closed
        #[arg(long)]
        status: ClassroomStatus,
    },

    /// Enroll a student from a JSON request file
    Enroll {
        /// Path to the request document
        #[arg(long)]
        request: PathBuf,
    },

    /// Show the seat summary of a classroom
    Classroom {
        #[arg(long)]
        id: ClassroomId,
    },

    /// Show a stored registration
    Registration {
        /// The registration code
        #[arg(long)]
        code: String,
    },
}

impl Command {
    /// The subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SeedService { .. } => "seed-service",
            Self::SeedClassroom { .. } => "seed-classroom",
            Self::ClassroomStatus { .. } => "classroom-status",
            Self::Enroll { .. } => "enroll",
            Self::Classroom { .. } => "classroom",
            Self::Registration { .. } => "registration",
        }
    }

    /// Whether the command changes stored state.
    #[must_use]
    pub const fn writes(&self) -> bool {
        !matches!(self, Self::Classroom { .. } | Self::Registration { .. })
    }
}

/// Runs commands against a single store.
pub struct Console<C: Clock> {
    coordinator: RegistrationCoordinator<Persistence, C>,
}

impl<C: Clock> Console<C> {
    #[must_use]
    pub const fn new(coordinator: RegistrationCoordinator<Persistence, C>) -> Self {
        Self { coordinator }
    }

    /// Executes one command and returns its JSON output.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid, the store fails, or the
    /// registration is refused.
    pub fn execute(&mut self, command: &Command) -> Result<Value, CliError> {
        match command {
            Command::SeedService {
                description,
                price_cents,
            } => {
                let service: Service = Service::new(
                    ServiceId::new_random(),
                    description.clone(),
                    Money::from_cents(*price_cents),
                );
                self.coordinator.store_mut().create_service(&service)?;
                Ok(json!({ "service_id": service.id() }))
            }
            Command::SeedClassroom {
                identification,
                shift,
                capacity,
                occupied,
            } => {
                let classroom: Classroom = Classroom::new(
                    ClassroomId::new_random(),
                    identification.clone(),
                    *shift,
                    *capacity,
                    *occupied,
                    ClassroomStatus::Open,
                )?;
                self.coordinator.store_mut().create_classroom(&classroom)?;
                Ok(json!({ "classroom_id": classroom.id() }))
            }
            Command::ClassroomStatus { id, status } => {
                self.coordinator
                    .store_mut()
                    .set_classroom_status(*id, *status)?;
                Ok(serde_json::to_value(
                    self.coordinator.store_mut().get_classroom_occupancy(*id)?,
                )?)
            }
            Command::Enroll { request } => {
                let request: RegistrationRequest = read_request(request)?;
                let receipt: RegistrationReceipt =
                    self.coordinator.create_registration(&request)?;
                info!(code = %receipt.code, "Enrollment complete");
                Ok(serde_json::to_value(receipt)?)
            }
            Command::Classroom { id } => Ok(serde_json::to_value(
                self.coordinator.store_mut().get_classroom_occupancy(*id)?,
            )?),
            Command::Registration { code } => Ok(serde_json::to_value(
                self.coordinator.store_mut().get_registration_by_code(code)?,
            )?),
        }
    }
}

/// Reads and parses a registration request document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid request.
pub fn read_request(path: &Path) -> Result<RegistrationRequest, CliError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&contents)?)
}
