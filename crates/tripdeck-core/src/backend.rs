use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::store;
use crate::trip::RemoteTripRecord;

/// Data boundary the trips screen reads from and deletes through.
pub trait TripBackend: Send + Sync {
    fn fetch_user_trips(&self) -> anyhow::Result<Vec<RemoteTripRecord>>;
    fn fetch_saved_trip_ids(&self) -> anyhow::Result<Vec<String>>;
    fn delete_trips(&self, ids: &[String]) -> anyhow::Result<usize>;
}

#[derive(Debug, Clone)]
pub struct FileTripBackend {
    path: PathBuf,
}

impl FileTripBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TripBackend for FileTripBackend {
    fn fetch_user_trips(&self) -> anyhow::Result<Vec<RemoteTripRecord>> {
        store::load_user_trips(&self.path)
            .with_context(|| format!("failed to load trips from {}", self.path.display()))
    }

    fn fetch_saved_trip_ids(&self) -> anyhow::Result<Vec<String>> {
        store::load_saved_trip_ids(&self.path)
            .with_context(|| format!("failed to load saved trips from {}", self.path.display()))
    }

    fn delete_trips(&self, ids: &[String]) -> anyhow::Result<usize> {
        store::delete_trips(&self.path, ids)
            .with_context(|| format!("failed to delete trips from {}", self.path.display()))
    }
}
