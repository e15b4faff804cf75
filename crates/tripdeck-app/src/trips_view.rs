use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

use tripdeck_core::trip::{RemoteTripRecord, Trip};

use crate::aggregate::{CollectionTab, TripCollections, aggregate};
use crate::batch_delete::{BatchDeleteCoordinator, DeleteSettlement, SettlePolicy};
use crate::fetch::FetchState;
use crate::loader::{LoadResult, TripLoader};
use crate::route::Notice;
use crate::selection::{Activation, SelectionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderAction {
    Select,
    AddTrip,
    Selected { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBar {
    pub label: String,
    pub pending: bool,
}

pub fn delete_label(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("Delete {count} Trip{suffix}")
}

/// State behind the My Trips screen: both upstream feeds, the derived
/// collections, the active tab, the selection and the delete coordinator.
pub struct TripsView {
    loader: Arc<dyn TripLoader>,
    catalog: Vec<Trip>,
    user_trips: FetchState<Vec<RemoteTripRecord>>,
    saved_ids: FetchState<Vec<String>>,
    trips_receiver: Option<Receiver<LoadResult<Vec<RemoteTripRecord>>>>,
    saved_receiver: Option<Receiver<LoadResult<Vec<String>>>>,
    collections: TripCollections,
    tab: CollectionTab,
    selection: SelectionState,
    coordinator: BatchDeleteCoordinator,
}

impl TripsView {
    pub fn new(loader: Arc<dyn TripLoader>, catalog: Vec<Trip>, policy: SettlePolicy) -> Self {
        let mut view = Self {
            loader,
            catalog,
            user_trips: FetchState::Loading,
            saved_ids: FetchState::Loading,
            trips_receiver: None,
            saved_receiver: None,
            collections: TripCollections::default(),
            tab: CollectionTab::Created,
            selection: SelectionState::default(),
            coordinator: BatchDeleteCoordinator::new(policy),
        };
        view.rebuild();
        view.refresh();
        view
    }

    /// Starts both fetches again. Results already shown stay until the new
    /// ones arrive.
    pub fn refresh(&mut self) {
        self.trips_receiver = Some(self.loader.spawn_user_trips());
        self.saved_receiver = Some(self.loader.spawn_saved_trip_ids());
    }

    pub fn collections(&self) -> &TripCollections {
        &self.collections
    }

    pub fn visible_trips(&self) -> &[Trip] {
        self.collections.get(self.tab)
    }

    pub fn tab(&self) -> CollectionTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: CollectionTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// True while either feed has a fetch in flight. Only the saved tab
    /// waits on this; created and remixed render what they have.
    pub fn is_loading(&self) -> bool {
        self.trips_receiver.is_some() || self.saved_receiver.is_some()
    }

    /// Whether the active tab should show the busy indicator.
    pub fn tab_is_loading(&self) -> bool {
        self.tab == CollectionTab::Saved && self.is_loading()
    }

    pub fn is_delete_pending(&self) -> bool {
        self.coordinator.is_pending()
    }

    /// Fetch failure behind the active tab, if any. The remixed tab reads
    /// only the catalog.
    pub fn feed_error(&self) -> Option<&str> {
        match self.tab {
            CollectionTab::Created => self.user_trips.error(),
            CollectionTab::Saved => self.saved_ids.error(),
            CollectionTab::Remixed => None,
        }
    }

    pub fn header_actions(&self) -> Vec<HeaderAction> {
        if self.selection.is_selecting() {
            return vec![HeaderAction::Selected {
                count: self.selection.selected_count(),
            }];
        }

        let mut actions = Vec::new();
        if !self.collections.created.is_empty() {
            actions.push(HeaderAction::Select);
        }
        actions.push(HeaderAction::AddTrip);
        actions
    }

    /// Floating delete bar, shown only while selecting a non-empty set.
    pub fn action_bar(&self) -> Option<ActionBar> {
        let count = self.selection.selected_count();
        if count == 0 {
            return None;
        }

        Some(ActionBar {
            label: delete_label(count),
            pending: self.coordinator.is_pending(),
        })
    }

    // Selection edits are inert while a delete is in flight; the settlement
    // owns the selection until then.
    pub fn enter_selection(&mut self) -> bool {
        if self.coordinator.is_pending() {
            return false;
        }
        self.selection.enter(self.collections.created.len())
    }

    pub fn cancel_selection(&mut self) -> bool {
        if self.coordinator.is_pending() || !self.selection.is_selecting() {
            return false;
        }
        self.selection.cancel();
        true
    }

    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        if self.coordinator.is_pending() {
            return None;
        }
        self.selection.toggle(id)
    }

    pub fn activate(&mut self, id: &str) -> Option<Activation> {
        if self.coordinator.is_pending() {
            return None;
        }
        Some(self.selection.activate(id))
    }

    pub fn delete_selected(&mut self) -> bool {
        self.coordinator
            .delete_selected(&self.selection, self.loader.as_ref())
    }

    /// Drains settled background calls. Returns notices for the user; a
    /// settled delete also refreshes both feeds.
    pub fn on_tick(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        let mut changed = false;

        if let Some(result) = drain(&mut self.trips_receiver, "trip fetch") {
            if let Err(message) = &result {
                tracing::warn!(error = %message, "user trip fetch failed");
            }
            self.user_trips = FetchState::from_result(result);
            changed = true;
        }

        if let Some(result) = drain(&mut self.saved_receiver, "saved trip fetch") {
            if let Err(message) = &result {
                tracing::warn!(error = %message, "saved trip fetch failed");
            }
            self.saved_ids = FetchState::from_result(result);
            changed = true;
        }

        if changed {
            self.rebuild();
        }

        if let Some(settlement) = self.coordinator.poll(&mut self.selection) {
            notices.push(settlement_notice(&settlement));
            self.refresh();
        }

        notices
    }

    fn rebuild(&mut self) {
        self.collections = aggregate(
            self.user_trips.items(),
            self.saved_ids.items(),
            &self.catalog,
        );
        tracing::debug!(
            created = self.collections.created.len(),
            remixed = self.collections.remixed.len(),
            saved = self.collections.saved.len(),
            "trip collections rebuilt"
        );
    }
}

fn drain<T>(receiver: &mut Option<Receiver<LoadResult<T>>>, label: &str) -> Option<LoadResult<T>> {
    let result = match receiver.as_ref()?.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => Err(format!("{label} worker ended unexpectedly")),
    };
    *receiver = None;
    Some(result)
}

fn settlement_notice(settlement: &DeleteSettlement) -> Notice {
    match &settlement.result {
        Ok(removed) => {
            let noun = if *removed == 1 { "trip" } else { "trips" };
            Notice::info(format!("Deleted {removed} {noun}"))
        }
        Err(message) => Notice::error(format!(
            "Could not delete {} trip(s): {message}",
            settlement.requested
        )),
    }
}
