use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use tripdeck_core::backend::TripBackend;
use tripdeck_core::trip::RemoteTripRecord;

pub type LoadResult<T> = Result<T, String>;

/// Starts boundary calls off the UI thread. Each call reports exactly once on
/// the returned channel; a channel that closes without a message means the
/// worker died.
pub trait TripLoader: Send + Sync {
    fn spawn_user_trips(&self) -> Receiver<LoadResult<Vec<RemoteTripRecord>>>;

    fn spawn_saved_trip_ids(&self) -> Receiver<LoadResult<Vec<String>>>;

    fn spawn_delete(&self, ids: Vec<String>) -> Receiver<LoadResult<usize>>;
}

pub struct BackendLoader {
    backend: Arc<dyn TripBackend>,
}

impl BackendLoader {
    pub fn new(backend: Arc<dyn TripBackend>) -> Self {
        Self { backend }
    }
}

fn spawn_call<T, F>(backend: Arc<dyn TripBackend>, call: F) -> Receiver<LoadResult<T>>
where
    T: Send + 'static,
    F: FnOnce(&dyn TripBackend) -> anyhow::Result<T> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    std::thread::spawn(move || {
        let result = call(backend.as_ref()).map_err(|error| format!("{error:#}"));
        let _ = sender.send(result);
    });
    receiver
}

impl TripLoader for BackendLoader {
    fn spawn_user_trips(&self) -> Receiver<LoadResult<Vec<RemoteTripRecord>>> {
        spawn_call(Arc::clone(&self.backend), |backend| backend.fetch_user_trips())
    }

    fn spawn_saved_trip_ids(&self) -> Receiver<LoadResult<Vec<String>>> {
        spawn_call(Arc::clone(&self.backend), |backend| {
            backend.fetch_saved_trip_ids()
        })
    }

    fn spawn_delete(&self, ids: Vec<String>) -> Receiver<LoadResult<usize>> {
        tracing::debug!(count = ids.len(), "issuing batch delete");
        spawn_call(Arc::clone(&self.backend), move |backend| {
            backend.delete_trips(&ids)
        })
    }
}
