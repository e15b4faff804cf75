use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

use tripdeck_core::trip::RemoteTripRecord;

use crate::loader::{LoadResult, TripLoader};

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

/// Loader whose calls settle only when a test says so.
#[derive(Default)]
pub struct ScriptedLoader {
    trip_senders: Mutex<Vec<Sender<LoadResult<Vec<RemoteTripRecord>>>>>,
    saved_senders: Mutex<Vec<Sender<LoadResult<Vec<String>>>>>,
    delete_senders: Mutex<Vec<Sender<LoadResult<usize>>>>,
    delete_calls: Mutex<Vec<Vec<String>>>,
    fetch_calls: Mutex<usize>,
}

impl ScriptedLoader {
    pub fn delete_calls(&self) -> Vec<Vec<String>> {
        self.delete_calls.lock().expect("delete calls lock").clone()
    }

    pub fn fetch_calls(&self) -> usize {
        *self.fetch_calls.lock().expect("fetch calls lock")
    }

    pub fn settle_user_trips(&self, result: LoadResult<Vec<RemoteTripRecord>>) {
        let sender = self
            .trip_senders
            .lock()
            .expect("trip senders lock")
            .pop()
            .expect("pending trips fetch");
        sender.send(result).expect("send trips");
    }

    pub fn settle_saved_ids(&self, result: LoadResult<Vec<String>>) {
        let sender = self
            .saved_senders
            .lock()
            .expect("saved senders lock")
            .pop()
            .expect("pending saved fetch");
        sender.send(result).expect("send saved ids");
    }

    pub fn settle_delete(&self, result: LoadResult<usize>) {
        let sender = self
            .delete_senders
            .lock()
            .expect("delete senders lock")
            .pop()
            .expect("pending delete");
        sender.send(result).expect("send delete result");
    }

    pub fn abandon_delete(&self) {
        let _ = self.delete_senders.lock().expect("delete senders lock").pop();
    }
}

impl TripLoader for ScriptedLoader {
    fn spawn_user_trips(&self) -> Receiver<LoadResult<Vec<RemoteTripRecord>>> {
        *self.fetch_calls.lock().expect("fetch calls lock") += 1;
        let (sender, receiver) = mpsc::channel();
        self.trip_senders
            .lock()
            .expect("trip senders lock")
            .push(sender);
        receiver
    }

    fn spawn_saved_trip_ids(&self) -> Receiver<LoadResult<Vec<String>>> {
        let (sender, receiver) = mpsc::channel();
        self.saved_senders
            .lock()
            .expect("saved senders lock")
            .push(sender);
        receiver
    }

    fn spawn_delete(&self, ids: Vec<String>) -> Receiver<LoadResult<usize>> {
        self.delete_calls
            .lock()
            .expect("delete calls lock")
            .push(ids);
        let (sender, receiver) = mpsc::channel();
        self.delete_senders
            .lock()
            .expect("delete senders lock")
            .push(sender);
        receiver
    }
}
