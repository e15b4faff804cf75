use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tripdeck_app::route::Notice;
use tripdeck_app::trips_view::TripsView;
use tripdeck_core::store::insert_trip;
use tripdeck_core::trip::RemoteTripRecord;

pub fn write_config(dir: &Path, extra: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create config dir");
    let path = dir.join("config.toml");
    fs::write(&path, format!("version = 1\n{extra}")).expect("write config");
    path
}

pub fn add_record(store_path: &Path, id: &str, title: &str) {
    insert_trip(
        store_path,
        RemoteTripRecord {
            id: id.to_string(),
            title: title.to_string(),
            destination: "Paris".to_string(),
            country: "France".to_string(),
            duration: 3,
            cover_image: None,
            created_at: "2026-02-25T10:00:00Z".to_string(),
            owner_id: "user-1".to_string(),
        },
    )
    .expect("insert record");
}

/// Ticks the view until nothing is in flight, collecting notices on the way.
pub fn tick_until_idle(view: &mut TripsView) -> Vec<Notice> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut notices = Vec::new();

    loop {
        notices.extend(view.on_tick());
        if !view.is_loading() && !view.is_delete_pending() {
            return notices;
        }
        assert!(Instant::now() < deadline, "view did not settle in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}
