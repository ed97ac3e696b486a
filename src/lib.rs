//! `uvmap` - UV index and weather map for a city
//!
//! This library resolves city names to coordinates, fetches the daily UV index
//! and hourly weather from `OpenMeteo`, and merges the results into a view that
//! is served as an HTML page and as JSON.

pub mod aggregator;
pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod location_resolver;
pub mod logging;
pub mod models;
pub mod service;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use aggregator::{ForecastAggregator, MergeMode};
pub use config::UvMapConfig;
pub use error::UvMapError;
pub use forecast::ForecastFetcher;
pub use location_resolver::{GeocodeResolver, LocationQuery};
pub use models::{Coordinate, ForecastRecord, ForecastSeries, ResolvedLocation, ViewModel};
pub use service::ForecastService;
pub use weather::OpenMeteoClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, UvMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
