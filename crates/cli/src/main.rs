// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;
mod error;

#[cfg(test)]
mod tests;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};
use tracing::{error, info, warn};

use school_enroll::{EnrollmentConfig, RegistrationCoordinator};
use school_enroll_persistence::{
    DEFAULT_LOCK_TIMEOUT, DEFAULT_READ_TIMEOUT, Persistence, StoreConfig,
};

use crate::commands::{Command, Console};
use crate::error::CliError;

/// School Enroll - operator command line for the enrollment engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses an in-memory
    /// database, which only read-only commands accept.
    #[arg(short, long, global = true, conflicts_with = "mysql_url")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL, used instead of `SQLite`
    #[arg(long, global = true, env = "SCHOOL_ENROLL_MYSQL_URL")]
    mysql_url: Option<String>,

    /// Bound on reference lookups, in milliseconds
    #[arg(long, global = true, default_value_t = millis(DEFAULT_READ_TIMEOUT))]
    read_timeout_ms: u64,

    /// Bound on the wait for the classroom lock, in milliseconds
    #[arg(long, global = true, default_value_t = millis(DEFAULT_LOCK_TIMEOUT))]
    lock_timeout_ms: u64,

    /// Budget for one registration transaction, in milliseconds
    #[arg(long, global = true, default_value_t = millis(school_enroll::DEFAULT_TRANSACTION_TIMEOUT))]
    transaction_timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    const fn store_config(&self) -> StoreConfig {
        StoreConfig {
            read_timeout: Duration::from_millis(self.read_timeout_ms),
            lock_timeout: Duration::from_millis(self.lock_timeout_ms),
        }
    }

    const fn enrollment_config(&self) -> EnrollmentConfig {
        EnrollmentConfig {
            transaction_timeout: Duration::from_millis(self.transaction_timeout_ms),
        }
    }

    fn open_store(&self) -> Result<Persistence, CliError> {
        let config: StoreConfig = self.store_config();
        let persistence: Persistence = if let Some(url) = &self.mysql_url {
            info!("Using MySQL database");
            Persistence::new_with_mysql_and_config(url, config)?
        } else if let Some(db_path) = &self.database {
            info!("Using file-based database at: {}", db_path);
            Persistence::new_with_file_and_config(db_path, config)?
        } else if self.command.writes() {
            return Err(CliError::EphemeralStore {
                command: self.command.name(),
            });
        } else {
            warn!("Using in-memory database; nothing outlives this process");
            Persistence::new_in_memory_with_config(config)?
        };
        Ok(persistence)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Renders a failure as the JSON document printed on stderr.
fn error_report(err: &CliError) -> Value {
    json!({
        "error": err.kind(),
        "message": err.to_string(),
        "retryable": err.is_retryable(),
    })
}

fn run(args: &Args) -> Result<Value, CliError> {
    let persistence: Persistence = args.open_store()?;
    let coordinator = RegistrationCoordinator::new(persistence, args.enrollment_config());
    Console::new(coordinator).execute(&args.command)
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(output) => {
            println!("{output:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(kind = %err.kind(), "{err}");
            eprintln!("{:#}", error_report(&err));
            ExitCode::from(err.exit_code())
        }
    }
}
