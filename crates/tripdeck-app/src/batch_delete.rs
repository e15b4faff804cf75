use std::sync::mpsc::{Receiver, TryRecvError};

use crate::loader::{LoadResult, TripLoader};
use crate::selection::SelectionState;

/// What happens to the selection once a batch delete settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePolicy {
    /// Back to browsing with an empty set, whatever the outcome.
    #[default]
    ResetAlways,
    /// Only a successful delete clears the set; a failure keeps it for a retry.
    KeepSelectionOnFailure,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteStatus {
    #[default]
    Idle,
    Pending {
        requested: usize,
    },
    Succeeded {
        removed: usize,
    },
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSettlement {
    pub requested: usize,
    pub result: LoadResult<usize>,
}

#[derive(Debug, Default)]
pub struct BatchDeleteCoordinator {
    policy: SettlePolicy,
    status: DeleteStatus,
    receiver: Option<Receiver<LoadResult<usize>>>,
}

impl BatchDeleteCoordinator {
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }

    pub fn status(&self) -> &DeleteStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, DeleteStatus::Pending { .. })
    }

    /// Issues one delete for every selected id. Returns false without calling
    /// the loader when nothing is selected or a delete is already in flight.
    pub fn delete_selected(&mut self, selection: &SelectionState, loader: &dyn TripLoader) -> bool {
        if self.is_pending() {
            return false;
        }

        let Some(ids) = selection.selected().filter(|ids| !ids.is_empty()) else {
            return false;
        };

        let ids: Vec<String> = ids.iter().cloned().collect();
        self.status = DeleteStatus::Pending {
            requested: ids.len(),
        };
        self.receiver = Some(loader.spawn_delete(ids));
        true
    }

    /// Checks the in-flight delete and applies the settle policy to
    /// `selection` once it reports.
    pub fn poll(&mut self, selection: &mut SelectionState) -> Option<DeleteSettlement> {
        let DeleteStatus::Pending { requested } = self.status else {
            return None;
        };

        let result = match self.receiver.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err("delete worker ended unexpectedly".to_string())
            }
        };
        self.receiver = None;

        match &result {
            Ok(removed) => {
                tracing::debug!(requested, removed, "batch delete settled");
                self.status = DeleteStatus::Succeeded { removed: *removed };
            }
            Err(message) => {
                tracing::warn!(requested, error = %message, "batch delete failed");
                self.status = DeleteStatus::Failed(message.clone());
            }
        }

        let keep = self.policy == SettlePolicy::KeepSelectionOnFailure && result.is_err();
        if !keep {
            selection.cancel();
        }

        Some(DeleteSettlement { requested, result })
    }
}
