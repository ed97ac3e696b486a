//! Forecast pipeline: resolve, fetch, then merge into the view
//!
//! Failures stop the pipeline before the merge, so the view only ever changes
//! on a complete success.

use std::time::Instant;

use tracing::{info, instrument};

use crate::aggregator::ForecastAggregator;
use crate::config::UvMapConfig;
use crate::forecast::ForecastFetcher;
use crate::location_resolver::{GeocodeResolver, LocationQuery};
use crate::models::{Coordinate, ForecastRecord, ResolvedLocation, ViewSnapshot};
use crate::weather::OpenMeteoClient;
use crate::Result;

/// Request-facing entry point shared by all handlers
#[derive(Debug)]
pub struct ForecastService {
    resolver: GeocodeResolver,
    fetcher: ForecastFetcher,
    aggregator: ForecastAggregator,
    default_city: String,
}

impl ForecastService {
    pub fn new(
        resolver: GeocodeResolver,
        fetcher: ForecastFetcher,
        aggregator: ForecastAggregator,
        default_city: impl Into<String>,
    ) -> Self {
        Self {
            resolver,
            fetcher,
            aggregator,
            default_city: default_city.into(),
        }
    }

    /// Wire up the service from configuration
    pub fn from_config(config: &UvMapConfig) -> Result<Self> {
        let api_client = OpenMeteoClient::new(config)?;
        Ok(Self::new(
            GeocodeResolver::new(api_client.clone()),
            ForecastFetcher::new(api_client),
            ForecastAggregator::new(config.view.merge_mode),
            config.view.default_city.clone(),
        ))
    }

    #[must_use]
    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Run the full pipeline for one query and return the updated view
    #[instrument(skip(self))]
    pub async fn run(&self, query: LocationQuery) -> Result<ViewSnapshot> {
        let start_time = Instant::now();

        let resolved = self.resolver.resolve_query(query).await?;
        let record = self.fetcher.fetch(resolved.coordinate).await?;
        let snapshot = self.aggregator.apply(&resolved, record);

        info!(
            "Pipeline for '{}' finished in {:.3}s",
            resolved.name,
            start_time.elapsed().as_secs_f64()
        );
        Ok(snapshot)
    }

    /// Resolve a city name without touching the view
    pub async fn resolve(&self, city_name: &str) -> Result<ResolvedLocation> {
        self.resolver.resolve(city_name).await
    }

    /// Forecast for a coordinate without touching the view; empty on failure
    pub async fn fetch_or_empty(&self, coordinate: Coordinate) -> ForecastRecord {
        self.fetcher.fetch_or_empty(coordinate).await
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.aggregator.snapshot()
    }
}
