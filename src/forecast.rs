//! Forecast retrieval for resolved coordinates

use std::time::Instant;

use tracing::{info, instrument, warn};

use crate::Result;
use crate::models::{Coordinate, ForecastRecord};
use crate::weather::OpenMeteoClient;

/// Fetches and normalizes the one-day UV and hourly forecast
#[derive(Debug, Clone)]
pub struct ForecastFetcher {
    api_client: OpenMeteoClient,
}

impl ForecastFetcher {
    #[must_use]
    pub fn new(api_client: OpenMeteoClient) -> Self {
        Self { api_client }
    }

    /// Fetch the forecast for a coordinate.
    ///
    /// An empty daily UV series is not an error: the record carries `None`
    /// as today's UV maximum.
    #[instrument(skip(self), fields(lat = coordinate.latitude, lon = coordinate.longitude))]
    pub async fn fetch(&self, coordinate: Coordinate) -> Result<ForecastRecord> {
        info!(
            "Getting forecast for coordinates: {}",
            coordinate.format_coordinates()
        );
        let start_time = Instant::now();

        let response = self.api_client.forecast(coordinate).await?;
        let record = response.into_record()?;

        match record.uv_index_max_today {
            Some(uv) => info!(
                "Retrieved forecast with {} hourly points, UV max today {:.1}, in {:.3}s",
                record.series.hourly_timestamps.len(),
                uv,
                start_time.elapsed().as_secs_f64()
            ),
            None => warn!(
                "Forecast for {} has no UV data",
                coordinate.format_coordinates()
            ),
        }

        Ok(record)
    }

    /// Like [`fetch`](Self::fetch), but any failure yields the neutral record
    pub async fn fetch_or_empty(&self, coordinate: Coordinate) -> ForecastRecord {
        match self.fetch(coordinate).await {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Forecast for {} unavailable, using empty record: {}",
                    coordinate.format_coordinates(),
                    e
                );
                ForecastRecord::empty(coordinate)
            }
        }
    }
}
