pub mod add;
pub mod add_places;
pub mod aggregate;
pub mod batch_delete;
pub mod fetch;
pub mod list;
pub mod loader;
pub mod route;
pub mod selection;
pub mod trips_view;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use tripdeck_core::backend::{FileTripBackend, TripBackend};
use tripdeck_core::catalog::sample_trips;
use tripdeck_core::config::{TripdeckConfig, load_config, resolve_config_path};
use tripdeck_core::doctor::{DoctorReport, run_doctor};

use crate::batch_delete::SettlePolicy;
use crate::loader::BackendLoader;
use crate::trips_view::TripsView;

/// A config that exists and validates, with the store path it points at.
#[derive(Debug, Clone)]
pub struct ReadyConfig {
    pub config: TripdeckConfig,
    pub config_path: PathBuf,
    pub store_path: PathBuf,
}

impl ReadyConfig {
    pub fn settle_policy(&self) -> SettlePolicy {
        if self.config.selection.keep_selection_on_failed_delete {
            SettlePolicy::KeepSelectionOnFailure
        } else {
            SettlePolicy::ResetAlways
        }
    }
}

pub struct App {
    backend: Arc<dyn TripBackend>,
    policy: SettlePolicy,
}

impl App {
    pub fn new(backend: Arc<dyn TripBackend>, policy: SettlePolicy) -> Self {
        Self { backend, policy }
    }

    pub fn from_ready(ready: &ReadyConfig) -> Self {
        Self::new(
            Arc::new(FileTripBackend::new(ready.store_path.clone())),
            ready.settle_policy(),
        )
    }

    pub fn doctor() -> DoctorReport {
        run_doctor()
    }

    pub fn ensure_config_ready() -> Result<ReadyConfig> {
        let config_path = resolve_config_path().context("failed to resolve config path")?;
        Self::ensure_config_ready_at(&config_path)
    }

    pub fn ensure_config_ready_at(config_path: &Path) -> Result<ReadyConfig> {
        if !config_path.exists() {
            bail!(
                "missing config at {}\nCreate ~/.config/tripdeck/config.toml and see README.md for setup instructions.",
                config_path.display()
            );
        }

        let config = load_config(config_path).map_err(|error| {
            anyhow!(
                "invalid config at {}: {error}\nFix the config and retry. See README.md for setup instructions.",
                config_path.display()
            )
        })?;

        let store_path = config.store_path(config_path);
        Ok(ReadyConfig {
            config,
            config_path: config_path.to_path_buf(),
            store_path,
        })
    }

    pub fn settle_policy(&self) -> SettlePolicy {
        self.policy
    }

    /// Screen model for the interactive view; both feeds start loading at once.
    pub fn trips_view(&self) -> TripsView {
        let loader = Arc::new(BackendLoader::new(Arc::clone(&self.backend)));
        TripsView::new(loader, sample_trips().to_vec(), self.policy)
    }
}
