use std::fmt;
use std::path::Path;

use crate::backend::{FileTripBackend, TripBackend};
use crate::catalog::{is_sample_id, sample_trips};
use crate::config::{load_config, resolve_config_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Pass,
    Fail,
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCheck {
    pub name: String,
    pub state: CheckState,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub checks: Vec<DoctorCheck>,
}

impl DoctorReport {
    pub fn has_failures(&self) -> bool {
        self.checks
            .iter()
            .any(|check| check.state == CheckState::Fail)
    }

    pub fn summary(&self) -> String {
        let passed = self
            .checks
            .iter()
            .filter(|check| check.state == CheckState::Pass)
            .count();
        let failed = self.checks.len().saturating_sub(passed);
        format!("{passed} passed, {failed} failed")
    }
}

const STORE_CHECKS: [&str; 2] = ["trip store readable", "saved trips readable"];

pub fn run_doctor() -> DoctorReport {
    match resolve_config_path() {
        Ok(config_path) => run_doctor_at(&config_path),
        Err(error) => {
            let mut checks = vec![fail_check("config path resolves", error.to_string())];
            push_skipped_checks(
                &mut checks,
                &["config file exists", "config parses and validates"],
                "config path could not be resolved",
            );
            push_skipped_checks(&mut checks, &STORE_CHECKS, "config path could not be resolved");
            DoctorReport { checks }
        }
    }
}

pub fn run_doctor_at(config_path: &Path) -> DoctorReport {
    let mut checks = Vec::new();

    if !config_path.exists() {
        checks.push(fail_check(
            "config file exists",
            format!("expected at {}", config_path.display()),
        ));
        push_skipped_checks(
            &mut checks,
            &["config parses and validates"],
            "config file is missing",
        );
        push_skipped_checks(&mut checks, &STORE_CHECKS, "config file is missing");
        return DoctorReport { checks };
    }

    checks.push(pass_check(
        "config file exists",
        format!("found at {}", config_path.display()),
    ));

    match load_config(config_path) {
        Ok(config) => {
            checks.push(pass_check("config parses and validates", "config is valid"));
            let backend = FileTripBackend::new(config.store_path(config_path));
            checks.extend(check_store(&backend, &backend.path().display().to_string()));
        }
        Err(error) => {
            checks.push(fail_check("config parses and validates", error.to_string()));
            push_skipped_checks(&mut checks, &STORE_CHECKS, "config is invalid");
        }
    }

    DoctorReport { checks }
}

fn check_store(backend: &dyn TripBackend, location: &str) -> Vec<DoctorCheck> {
    let trips = match backend.fetch_user_trips() {
        Ok(trips) => pass_check(
            STORE_CHECKS[0],
            format!("{} trip(s) at {location}", trips.len()),
        ),
        Err(error) => fail_check(STORE_CHECKS[0], format!("{error:#}")),
    };

    let saved = match backend.fetch_saved_trip_ids() {
        Ok(ids) => {
            let unknown = ids
                .iter()
                .filter(|id| !is_sample_id(sample_trips(), id))
                .count();
            if unknown == 0 {
                pass_check(STORE_CHECKS[1], format!("{} saved trip(s)", ids.len()))
            } else {
                pass_check(
                    STORE_CHECKS[1],
                    format!(
                        "{} saved trip(s), {unknown} not in the sample catalog and hidden",
                        ids.len()
                    ),
                )
            }
        }
        Err(error) => fail_check(STORE_CHECKS[1], format!("{error:#}")),
    };

    vec![trips, saved]
}

fn pass_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Pass,
        details: details.into(),
    }
}

fn fail_check(name: &str, details: impl Into<String>) -> DoctorCheck {
    DoctorCheck {
        name: name.to_string(),
        state: CheckState::Fail,
        details: details.into(),
    }
}

fn skipped_check(name: &str, reason: &str) -> DoctorCheck {
    fail_check(name, format!("skipped because {reason}"))
}

fn push_skipped_checks(checks: &mut Vec<DoctorCheck>, names: &[&str], reason: &str) {
    checks.extend(
        names
            .iter()
            .copied()
            .map(|name| skipped_check(name, reason)),
    );
}
