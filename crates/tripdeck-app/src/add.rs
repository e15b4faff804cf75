use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use thiserror::Error;
use tripdeck_core::catalog::{is_sample_id, sample_trips};
use tripdeck_core::store::{insert_trip, save_trip_id};
use tripdeck_core::time::now_utc_rfc3339;
use tripdeck_core::trip::{CURRENT_USER_ID, RemoteTripRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    pub title: String,
    pub destination: String,
    pub country: String,
    pub duration: u32,
    pub cover_image: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("duration must be at least 1 day")]
    ZeroDuration,
    #[error("'{id}' is not a trip in the sample catalog")]
    UnknownSample { id: String },
}

impl TripDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        for (field, value) in [
            ("title", &self.title),
            ("destination", &self.destination),
            ("country", &self.country),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::EmptyField { field });
            }
        }

        if self.duration == 0 {
            return Err(DraftError::ZeroDuration);
        }

        Ok(())
    }

    fn into_record(self, id: String, created_at: String) -> RemoteTripRecord {
        RemoteTripRecord {
            id,
            title: self.title.trim().to_string(),
            destination: self.destination.trim().to_string(),
            country: self.country.trim().to_string(),
            duration: self.duration,
            cover_image: self.cover_image.filter(|value| !value.trim().is_empty()),
            created_at,
            owner_id: CURRENT_USER_ID.to_string(),
        }
    }
}

/// Writes a new user-owned trip to the store and returns the stored record.
pub fn add_trip(store_path: &Path, draft: TripDraft) -> Result<RemoteTripRecord> {
    draft.validate()?;

    let created_at = now_utc_rfc3339().context("failed to format creation timestamp")?;
    let record = draft.into_record(next_trip_id(), created_at);

    insert_trip(store_path, record.clone())
        .with_context(|| format!("failed to add trip to {}", store_path.display()))?;
    tracing::info!(id = %record.id, "trip added");
    Ok(record)
}

/// Marks a sample trip as saved. Returns false when it was already saved.
pub fn save_sample_trip(store_path: &Path, id: &str) -> Result<bool> {
    if !is_sample_id(sample_trips(), id) {
        return Err(DraftError::UnknownSample { id: id.to_string() }.into());
    }

    save_trip_id(store_path, id)
        .with_context(|| format!("failed to save trip in {}", store_path.display()))
}

fn next_trip_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("trip-{millis}")
}
