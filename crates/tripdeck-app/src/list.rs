use anyhow::{Context, Result};
use tripdeck_core::catalog::sample_trips;

use crate::App;
use crate::aggregate::{TripCollections, aggregate};

impl App {
    /// Fetches both feeds on the calling thread and aggregates them. Unlike
    /// the interactive screen, a failing feed is an error here.
    pub fn list(&self) -> Result<TripCollections> {
        let records = self
            .backend
            .fetch_user_trips()
            .context("failed to fetch user trips")?;
        let saved_ids = self
            .backend
            .fetch_saved_trip_ids()
            .context("failed to fetch saved trips")?;

        Ok(aggregate(&records, &saved_ids, sample_trips()))
    }
}
