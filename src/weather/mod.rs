//! HTTP client for the `OpenMeteo` geocoding and forecast APIs
//!
//! Both endpoints are free and need no API key. The query parameters are fixed:
//! one geocoding match in German, and a one-day forecast in Berlin time with
//! hourly temperature, weather code and CAPE plus the daily UV maxima.

use std::time::{Duration, Instant};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::UvMapConfig;
use crate::models::Coordinate;
use crate::{Result, UvMapError};

pub mod open_meteo;

pub use open_meteo::{ForecastResponse, GeocodingResponse, GeocodingResult};

pub const GEOCODING_RESULT_COUNT: u32 = 1;
pub const GEOCODING_LANGUAGE: &str = "de";
pub const HOURLY_FIELDS: &str = "temperature_2m,weather_code,cape";
pub const DAILY_FIELDS: &str = "uv_index_max,uv_index_clear_sky_max";
pub const FORECAST_TIMEZONE: &str = "Europe/Berlin";
pub const FORECAST_DAYS: u32 = 1;

const SLOW_RESPONSE: Duration = Duration::from_secs(2);

/// Shared client for both providers. Cheap to clone.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_base_url: String,
    forecast_base_url: String,
}

impl OpenMeteoClient {
    /// Create a client with the configured timeout and provider base URLs
    pub fn new(config: &UvMapConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.http.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(config.http.user_agent.as_str())
            .build()
            .map_err(|e| UvMapError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            geocoding_base_url: config.geocoding.base_url.trim_end_matches('/').to_string(),
            forecast_base_url: config.forecast.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Geocoding search URL with the name percent-encoded
    #[must_use]
    pub fn geocoding_url(&self, location_name: &str) -> String {
        format!(
            "{}/search?name={}&count={}&language={}&format=json",
            self.geocoding_base_url,
            urlencoding::encode(location_name),
            GEOCODING_RESULT_COUNT,
            GEOCODING_LANGUAGE
        )
    }

    #[must_use]
    pub fn forecast_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&daily={}&timezone={}&forecast_days={}",
            self.forecast_base_url,
            coordinate.latitude,
            coordinate.longitude,
            HOURLY_FIELDS,
            DAILY_FIELDS,
            urlencoding::encode(FORECAST_TIMEZONE),
            FORECAST_DAYS
        )
    }

    /// Search for a place name; an empty list means nothing matched
    pub async fn geocode(&self, location_name: &str) -> Result<Vec<GeocodingResult>> {
        let response: GeocodingResponse = self.get_json(&self.geocoding_url(location_name)).await?;
        Ok(response.results.unwrap_or_default())
    }

    /// Fetch the raw forecast payload for a coordinate
    pub async fn forecast(&self, coordinate: Coordinate) -> Result<ForecastResponse> {
        self.get_json(&self.forecast_url(coordinate)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("OpenMeteo API request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UvMapError::transport(format!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )));
        }

        let body = response.bytes().await?;
        let elapsed = start_time.elapsed();
        debug!(
            "HTTP response received: {} ({} bytes) in {:.3}s",
            status,
            body.len(),
            elapsed.as_secs_f64()
        );
        if elapsed > SLOW_RESPONSE {
            warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
        }

        serde_json::from_slice(&body).map_err(|e| {
            UvMapError::data_shape(format!("Failed to parse OpenMeteo response: {e}"))
        })
    }
}
