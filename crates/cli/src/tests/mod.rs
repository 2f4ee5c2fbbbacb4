// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::path::Path;

use serde_json::{Value, json};
use time::macros::date;

use school_enroll::{EnrollmentConfig, FixedClock, RegistrationCoordinator};
use school_enroll_persistence::Persistence;

use crate::commands::Console;

pub fn create_console() -> Console<FixedClock> {
    let persistence = Persistence::new_in_memory().unwrap();
    Console::new(RegistrationCoordinator::with_clock(
        persistence,
        EnrollmentConfig::default(),
        FixedClock(date!(2026 - 01 - 15)),
    ))
}

/// A request document as an operator would write it.
pub fn create_request_json(classroom_id: &str, service_id: &str, document: &str) -> Value {
    json!({
        "classroom_id": classroom_id,
        "service_id": service_id,
        "shift": "afternoon",
        "monthly_fee_cents": 50_000,
        "installments_quantity": 10,
        "month_duration": 10,
        "payment_day": 5,
        "student": {
            "first_name": "Lucas",
            "last_name": "Pereira",
            "birth_date": "2012-11-30",
            "document": document,
            "self_responsible": true,
            "email": "lucas@example.com",
            "addresses": [{
                "street": "Av. Brasil, 2000",
                "city": "Campinas",
                "district": "Jardim",
                "state": "SP",
                "zip_code": "13020-000"
            }],
            "phones": [{ "description": "home", "phone": "+55 19 3333-0000" }]
        }
    })
}

pub fn write_request(dir: &Path, name: &str, request: &Value) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(request).unwrap()).unwrap();
    path
}
