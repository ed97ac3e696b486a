//! Data models for the uvmap service
//!
//! This module contains the core domain models organized by concern:
//! - Location: validated coordinates and resolved place names
//! - Forecast: normalized forecast series and records
//! - View: the accumulated state shown to users

pub mod forecast;
pub mod location;
pub mod view;

// Re-export all public types for convenient access
pub use forecast::{ForecastRecord, ForecastSeries, HourlyPoint};
pub use location::{Coordinate, ResolvedLocation};
pub use view::{UNKNOWN_CITY, ViewModel, ViewSnapshot};
