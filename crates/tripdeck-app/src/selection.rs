use std::collections::BTreeSet;

use crate::route::trip_path;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Browsing,
    Selecting(BTreeSet<String>),
}

/// Outcome of activating a trip card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Toggled { id: String, selected: bool },
    Navigate(String),
}

impl SelectionState {
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting(_))
    }

    pub fn selected(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Selecting(ids) => Some(ids),
            Self::Browsing => None,
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected().map_or(0, BTreeSet::len)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected().is_some_and(|ids| ids.contains(id))
    }

    /// Starts selecting with an empty set. Inert when there are no created
    /// trips or a selection is already in progress.
    pub fn enter(&mut self, created_count: usize) -> bool {
        if created_count == 0 || self.is_selecting() {
            return false;
        }

        *self = Self::Selecting(BTreeSet::new());
        true
    }

    /// Adds `id` when absent and removes it when present. Returns whether the
    /// id is selected afterwards; `None` while browsing.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let Self::Selecting(ids) = self else {
            return None;
        };

        if ids.remove(id) {
            Some(false)
        } else {
            ids.insert(id.to_string());
            Some(true)
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Browsing;
    }

    pub fn activate(&mut self, id: &str) -> Activation {
        match self.toggle(id) {
            Some(selected) => Activation::Toggled {
                id: id.to_string(),
                selected,
            },
            None => Activation::Navigate(trip_path(id)),
        }
    }
}
