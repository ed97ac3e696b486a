//! `OpenMeteo` API response structures and conversion utilities

use serde::Deserialize;

use crate::models::{Coordinate, ForecastRecord, ForecastSeries};
use crate::{Result, UvMapError};

/// Geocoding response from `OpenMeteo`. `results` is omitted when nothing matched.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingResult {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl GeocodingResult {
    /// Provider coordinate, checked against the valid ranges
    pub fn coordinate(&self) -> Result<Coordinate> {
        Coordinate::new(self.latitude, self.longitude).map_err(|e| {
            UvMapError::data_shape(format!("geocoding returned an invalid coordinate: {e}"))
        })
    }
}

/// Forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    pub hourly: Option<HourlyData>,
    pub daily: Option<DailyData>,
}

/// Hourly weather data from `OpenMeteo`. Values the model lacks come as `null`.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    pub cape: Option<Vec<Option<f64>>>,
}

/// Daily UV data from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(default)]
    pub uv_index_max: Vec<Option<f64>>,
    #[serde(default)]
    pub uv_index_clear_sky_max: Vec<Option<f64>>,
}

impl ForecastResponse {
    /// Normalize the provider payload into a [`ForecastRecord`]
    pub fn into_record(self) -> Result<ForecastRecord> {
        let location = Coordinate::new(self.latitude, self.longitude).map_err(|e| {
            UvMapError::data_shape(format!("forecast returned an invalid coordinate: {e}"))
        })?;

        let mut series = ForecastSeries::default();

        if let Some(daily) = self.daily {
            series.timestamps = daily.time;
            series.uv_index_max = daily.uv_index_max;
            series.uv_index_clear_sky_max = daily.uv_index_clear_sky_max;
        }

        if let Some(hourly) = self.hourly {
            series.hourly_timestamps = hourly.time;
            series.hourly_temperature = hourly.temperature;
            series.hourly_weather_code = hourly.weather_code;
            series.hourly_cape = hourly.cape;
        }

        ForecastRecord::new(location, self.elevation, series)
    }
}

/// Convert `OpenMeteo` weather code to human-readable description
#[must_use]
pub fn weather_code_to_description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
