//! View model rendered by the HTML page and the JSON endpoints

use serde::{Deserialize, Serialize};

use super::ForecastRecord;

/// City name shown before any query succeeded
pub const UNKNOWN_CITY: &str = "Unknown";

/// Accumulated state of the forecast view
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub city_name: String,
    pub history: Vec<ForecastRecord>,
}

/// Read-only copy of the view model handed to presentation code
pub type ViewSnapshot = ViewModel;

impl ViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            city_name: UNKNOWN_CITY.to_string(),
            history: Vec::new(),
        }
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.city_name = UNKNOWN_CITY.to_string();
        self.history.clear();
    }

    /// Most recent record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&ForecastRecord> {
        self.history.last()
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}
