use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use tripdeck_app::batch_delete::SettlePolicy;
use tripdeck_app::loader::{LoadResult, TripLoader};
use tripdeck_app::trips_view::TripsView;
use tripdeck_core::catalog::sample_trips;
use tripdeck_core::trip::RemoteTripRecord;

pub(crate) fn record(id: &str, title: &str) -> RemoteTripRecord {
    RemoteTripRecord {
        id: id.to_string(),
        title: title.to_string(),
        destination: "Paris".to_string(),
        country: "France".to_string(),
        duration: 3,
        cover_image: None,
        created_at: "2026-02-25T10:00:00Z".to_string(),
        owner_id: "user-1".to_string(),
    }
}

/// Loader that answers every call right away from fixed data.
pub(crate) struct InstantLoader {
    trips: Mutex<LoadResult<Vec<RemoteTripRecord>>>,
    saved: Vec<String>,
    delete_result: LoadResult<usize>,
    delete_calls: Mutex<Vec<Vec<String>>>,
}

impl InstantLoader {
    pub(crate) fn new(trips: Vec<RemoteTripRecord>, saved: &[&str]) -> Self {
        Self {
            trips: Mutex::new(Ok(trips)),
            saved: saved.iter().map(|id| id.to_string()).collect(),
            delete_result: Ok(0),
            delete_calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing_trips(message: &str) -> Self {
        let loader = Self::new(Vec::new(), &[]);
        *loader.trips.lock().expect("trips lock") = Err(message.to_string());
        loader
    }

    pub(crate) fn with_delete_result(mut self, result: LoadResult<usize>) -> Self {
        self.delete_result = result;
        self
    }

    pub(crate) fn delete_calls(&self) -> Vec<Vec<String>> {
        self.delete_calls.lock().expect("delete calls lock").clone()
    }
}

impl TripLoader for InstantLoader {
    fn spawn_user_trips(&self) -> Receiver<LoadResult<Vec<RemoteTripRecord>>> {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(self.trips.lock().expect("trips lock").clone());
        receiver
    }

    fn spawn_saved_trip_ids(&self) -> Receiver<LoadResult<Vec<String>>> {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(Ok(self.saved.clone()));
        receiver
    }

    fn spawn_delete(&self, ids: Vec<String>) -> Receiver<LoadResult<usize>> {
        let mut trips = self.trips.lock().expect("trips lock");
        if self.delete_result.is_ok()
            && let Ok(records) = trips.as_mut()
        {
            records.retain(|record| !ids.contains(&record.id));
        }
        self.delete_calls
            .lock()
            .expect("delete calls lock")
            .push(ids);

        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(self.delete_result.clone());
        receiver
    }
}

/// Loader whose fetches stay in flight for the whole test.
#[derive(Default)]
pub(crate) struct PendingLoader {
    trip_senders: Mutex<Vec<Sender<LoadResult<Vec<RemoteTripRecord>>>>>,
    saved_senders: Mutex<Vec<Sender<LoadResult<Vec<String>>>>>,
}

impl TripLoader for PendingLoader {
    fn spawn_user_trips(&self) -> Receiver<LoadResult<Vec<RemoteTripRecord>>> {
        let (sender, receiver) = mpsc::channel();
        self.trip_senders.lock().expect("trip senders lock").push(sender);
        receiver
    }

    fn spawn_saved_trip_ids(&self) -> Receiver<LoadResult<Vec<String>>> {
        let (sender, receiver) = mpsc::channel();
        self.saved_senders.lock().expect("saved senders lock").push(sender);
        receiver
    }

    fn spawn_delete(&self, _ids: Vec<String>) -> Receiver<LoadResult<usize>> {
        let (_sender, receiver) = mpsc::channel();
        receiver
    }
}

pub(crate) fn loaded_view(loader: &Arc<InstantLoader>) -> TripsView {
    let mut view = TripsView::new(loader.clone(), sample_trips().to_vec(), SettlePolicy::ResetAlways);
    view.on_tick();
    view
}
