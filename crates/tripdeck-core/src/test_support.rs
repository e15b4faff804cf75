use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::anyhow;

use crate::backend::TripBackend;
use crate::trip::RemoteTripRecord;

pub fn record(id: &str) -> RemoteTripRecord {
    RemoteTripRecord {
        id: id.to_string(),
        title: format!("Trip {id}"),
        destination: "Paris".to_string(),
        country: "France".to_string(),
        duration: 3,
        cover_image: None,
        created_at: "2026-02-25T10:00:00Z".to_string(),
        owner_id: "user-1".to_string(),
    }
}

#[derive(Default)]
pub struct RecordingBackend {
    trips: Mutex<VecDeque<anyhow::Result<Vec<RemoteTripRecord>>>>,
    saved: Mutex<VecDeque<anyhow::Result<Vec<String>>>>,
}

impl RecordingBackend {
    pub fn new(
        trips: Vec<anyhow::Result<Vec<RemoteTripRecord>>>,
        saved: Vec<anyhow::Result<Vec<String>>>,
    ) -> Self {
        Self {
            trips: Mutex::new(trips.into()),
            saved: Mutex::new(saved.into()),
        }
    }
}

impl TripBackend for RecordingBackend {
    fn fetch_user_trips(&self) -> anyhow::Result<Vec<RemoteTripRecord>> {
        self.trips
            .lock()
            .expect("trips lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("missing scripted trips")))
    }

    fn fetch_saved_trip_ids(&self) -> anyhow::Result<Vec<String>> {
        self.saved
            .lock()
            .expect("saved lock")
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("missing scripted saved ids")))
    }

    fn delete_trips(&self, ids: &[String]) -> anyhow::Result<usize> {
        Ok(ids.len())
    }
}
