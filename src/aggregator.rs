//! Forecast aggregation into the shared view model
//!
//! The aggregator owns the single [`ViewModel`] of the process. Every merge
//! happens under its write lock, snapshots under the read lock, and neither
//! lock is held across an `.await`.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ForecastRecord, ResolvedLocation, ViewModel, ViewSnapshot};

/// How a new forecast is merged into the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeMode {
    /// Keep a running log of every successful query
    Append,
    /// Show only the latest query
    #[default]
    Replace,
}

/// Merge one successful pipeline result into `view`.
///
/// Callers filter failures out beforehand; this never fails.
pub fn aggregate(
    view: &mut ViewModel,
    resolved: &ResolvedLocation,
    record: ForecastRecord,
    mode: MergeMode,
) {
    match mode {
        MergeMode::Append => {
            view.history.push(record);
        }
        MergeMode::Replace => {
            view.history.clear();
            view.history.push(record);
        }
    }
    view.city_name.clone_from(&resolved.name);
}

/// Owner of the process-wide view model
#[derive(Debug)]
pub struct ForecastAggregator {
    mode: MergeMode,
    view: RwLock<ViewModel>,
}

impl ForecastAggregator {
    #[must_use]
    pub fn new(mode: MergeMode) -> Self {
        let aggregator = Self {
            mode,
            view: RwLock::new(ViewModel::default()),
        };
        aggregator.reset();
        aggregator
    }

    /// Merge a result and return the view as it stands right after the merge
    pub fn apply(&self, resolved: &ResolvedLocation, record: ForecastRecord) -> ViewSnapshot {
        let mut view = self.view.write();
        aggregate(&mut view, resolved, record, self.mode);
        debug!(
            "Merged forecast for '{}' ({:?}), history length {}",
            view.city_name,
            self.mode,
            view.history.len()
        );
        view.clone()
    }

    /// Read-only copy of the current view
    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.view.read().clone()
    }

    /// Re-initialize the view to its start-up state
    pub fn reset(&self) {
        self.view.write().reset();
    }
}

impl Default for ForecastAggregator {
    fn default() -> Self {
        Self::new(MergeMode::default())
    }
}
