use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trip::RemoteTripRecord;

const STORE_VERSION: i64 = 1;
pub const STORE_FILE_NAME: &str = "trips.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoreFile {
    version: i64,
    #[serde(default)]
    saved: Vec<String>,
    #[serde(rename = "trip", default)]
    trips: Vec<RemoteTripRecord>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            saved: Vec::new(),
            trips: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read trip store at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse trip store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to write trip store at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize trip store: {0}")]
    Serialize(toml::ser::Error),
    #[error("{message}")]
    InvalidSchema { message: String },
    #[error("trip store already contains id '{id}'")]
    DuplicateId { id: String },
}

pub fn load_user_trips(path: &Path) -> Result<Vec<RemoteTripRecord>, StoreError> {
    Ok(load_store_file(path)?.trips)
}

pub fn load_saved_trip_ids(path: &Path) -> Result<Vec<String>, StoreError> {
    Ok(load_store_file(path)?.saved)
}

pub fn insert_trip(path: &Path, record: RemoteTripRecord) -> Result<(), StoreError> {
    let mut store = load_store_file(path)?;
    if store.trips.iter().any(|trip| trip.id == record.id) {
        return Err(StoreError::DuplicateId { id: record.id });
    }

    store.trips.push(record);
    write_store_file(path, &store)
}

pub fn save_trip_id(path: &Path, id: &str) -> Result<bool, StoreError> {
    let mut store = load_store_file(path)?;
    if store.saved.iter().any(|saved| saved == id) {
        return Ok(false);
    }

    store.saved.push(id.to_string());
    write_store_file(path, &store)?;
    Ok(true)
}

/// Removes every record whose id is in `ids` with a single write.
/// Unknown ids are ignored; returns how many records were removed.
pub fn delete_trips(path: &Path, ids: &[String]) -> Result<usize, StoreError> {
    let mut store = load_store_file(path)?;
    let targets: BTreeSet<&str> = ids.iter().map(String::as_str).collect();

    let before = store.trips.len();
    store
        .trips
        .retain(|trip| !targets.contains(trip.id.as_str()));
    let removed = before - store.trips.len();

    if removed > 0 {
        write_store_file(path, &store)?;
    }

    tracing::debug!(
        path = %path.display(),
        requested = ids.len(),
        removed,
        "trip store batch delete"
    );
    Ok(removed)
}

fn load_store_file(path: &Path) -> Result<StoreFile, StoreError> {
    if !path.exists() {
        return Ok(StoreFile::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed_value: toml::Value = toml::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_store_schema(&parsed_value)?;

    parsed_value
        .try_into()
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn validate_store_schema(value: &toml::Value) -> Result<(), StoreError> {
    let Some(version) = value.as_table().and_then(|root| root.get("version")) else {
        return Err(schema_error(
            "invalid trip store schema: missing required top-level field 'version'".to_string(),
        ));
    };

    match version.as_integer() {
        Some(current) if current == STORE_VERSION => Ok(()),
        Some(current) => Err(schema_error(format!(
            "invalid trip store schema: unsupported version (expected {STORE_VERSION}, found {current})"
        ))),
        None => Err(schema_error(
            "invalid trip store schema: unsupported version (expected integer)".to_string(),
        )),
    }
}

fn write_store_file(path: &Path, store: &StoreFile) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let serialized = toml::to_string(store).map_err(StoreError::Serialize)?;
    let temp_path = path.with_extension("toml.tmp");

    fs::write(&temp_path, serialized).map_err(|source| StoreError::Write {
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn schema_error(message: String) -> StoreError {
    StoreError::InvalidSchema { message }
}
