//! Forecast models normalized from the provider response

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::{Result, UvMapError};

/// Daily UV series plus the optional hourly series of one forecast.
///
/// Daily sequences are index-aligned with `timestamps`, hourly sequences with
/// `hourly_timestamps`. `None` entries are values the provider did not have.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    /// Daily dates (`YYYY-MM-DD`)
    pub timestamps: Vec<String>,
    /// Daily maximum UV index
    pub uv_index_max: Vec<Option<f64>>,
    /// Daily maximum UV index under clear sky
    pub uv_index_clear_sky_max: Vec<Option<f64>>,
    /// Hourly times (`YYYY-MM-DDTHH:MM`)
    pub hourly_timestamps: Vec<String>,
    /// Temperature at 2m in Celsius
    pub hourly_temperature: Option<Vec<Option<f64>>>,
    /// WMO weather code
    pub hourly_weather_code: Option<Vec<Option<i32>>>,
    /// Convective available potential energy in J/kg
    pub hourly_cape: Option<Vec<Option<f64>>>,
}

/// One hourly row of a series
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint<'a> {
    pub timestamp: &'a str,
    pub temperature: Option<f64>,
    pub weather_code: Option<i32>,
    pub cape: Option<f64>,
}

impl ForecastSeries {
    /// Verify that parallel sequences share their timestamp's length
    pub fn check_alignment(&self) -> Result<()> {
        let days = self.timestamps.len();
        if self.uv_index_max.len() != days || self.uv_index_clear_sky_max.len() != days {
            return Err(UvMapError::data_shape(format!(
                "daily series misaligned: {} dates, {} uv_index_max, {} uv_index_clear_sky_max",
                days,
                self.uv_index_max.len(),
                self.uv_index_clear_sky_max.len()
            )));
        }

        let hours = self.hourly_timestamps.len();
        let hourly_lengths = [
            ("temperature_2m", self.hourly_temperature.as_ref().map(Vec::len)),
            ("weather_code", self.hourly_weather_code.as_ref().map(Vec::len)),
            ("cape", self.hourly_cape.as_ref().map(Vec::len)),
        ];
        for (field, len) in hourly_lengths {
            if let Some(len) = len {
                if len != hours {
                    return Err(UvMapError::data_shape(format!(
                        "hourly {field} has {len} values for {hours} timestamps"
                    )));
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty() && self.hourly_timestamps.is_empty()
    }

    /// Hourly rows with whatever values are present for each hour
    #[must_use]
    pub fn hourly_points(&self) -> Vec<HourlyPoint<'_>> {
        self.hourly_timestamps
            .iter()
            .enumerate()
            .map(|(i, timestamp)| HourlyPoint {
                timestamp,
                temperature: self
                    .hourly_temperature
                    .as_ref()
                    .and_then(|temps| temps.get(i).copied().flatten()),
                weather_code: self
                    .hourly_weather_code
                    .as_ref()
                    .and_then(|codes| codes.get(i).copied().flatten()),
                cape: self
                    .hourly_cape
                    .as_ref()
                    .and_then(|cape| cape.get(i).copied().flatten()),
            })
            .collect()
    }
}

/// Normalized forecast for one coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastRecord {
    /// Grid point the provider answered for
    pub location: Coordinate,
    /// Elevation in meters
    pub elevation: f64,
    pub series: ForecastSeries,
    /// First entry of the daily UV max series; `None` when the series is empty
    /// or the provider had no value for today
    pub uv_index_max_today: Option<f64>,
}

impl ForecastRecord {
    /// Build a record, deriving today's UV maximum from the daily series
    pub fn new(location: Coordinate, elevation: f64, series: ForecastSeries) -> Result<Self> {
        series.check_alignment()?;
        let uv_index_max_today = series.uv_index_max.first().copied().flatten();

        Ok(Self {
            location,
            elevation,
            series,
            uv_index_max_today,
        })
    }

    /// Neutral record used when no data is available
    #[must_use]
    pub fn empty(location: Coordinate) -> Self {
        Self {
            location,
            elevation: 0.0,
            series: ForecastSeries::default(),
            uv_index_max_today: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.uv_index_max_today.is_none()
    }

    /// Today's clear-sky UV maximum, if present
    #[must_use]
    pub fn uv_index_clear_sky_max_today(&self) -> Option<f64> {
        self.series.uv_index_clear_sky_max.first().copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stuttgart() -> Coordinate {
        Coordinate::new(48.78, 9.18).unwrap()
    }

    fn daily_series(uv: Vec<Option<f64>>, clear_sky: Vec<Option<f64>>) -> ForecastSeries {
        ForecastSeries {
            timestamps: (0..uv.len()).map(|d| format!("2024-06-{:02}", d + 1)).collect(),
            uv_index_max: uv,
            uv_index_clear_sky_max: clear_sky,
            ..ForecastSeries::default()
        }
    }

    #[test]
    fn test_uv_today_is_first_daily_value() {
        let series = daily_series(vec![Some(5.2), Some(6.1)], vec![Some(6.0), Some(6.5)]);
        let record = ForecastRecord::new(stuttgart(), 245.0, series).unwrap();

        assert_eq!(record.uv_index_max_today, Some(5.2));
        assert_eq!(record.uv_index_clear_sky_max_today(), Some(6.0));
        assert!(!record.is_empty());
    }

    #[test]
    fn test_empty_uv_series_yields_no_data_sentinel() {
        let record = ForecastRecord::new(stuttgart(), 245.0, ForecastSeries::default()).unwrap();
        assert_eq!(record.uv_index_max_today, None);
        assert_eq!(record.uv_index_clear_sky_max_today(), None);
    }

    #[test]
    fn test_missing_uv_value_today_yields_no_data_sentinel() {
        let series = daily_series(vec![None, Some(6.1)], vec![None, Some(6.5)]);
        let record = ForecastRecord::new(stuttgart(), 245.0, series).unwrap();

        assert_eq!(record.uv_index_max_today, None);
        assert_eq!(record.uv_index_clear_sky_max_today(), None);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_misaligned_daily_series_is_rejected() {
        let series = daily_series(vec![Some(5.2), Some(6.1)], vec![Some(6.0)]);
        let err = ForecastRecord::new(stuttgart(), 245.0, series).unwrap_err();
        assert!(matches!(err, UvMapError::DataShape { .. }));
    }

    #[test]
    fn test_misaligned_hourly_series_is_rejected() {
        let series = ForecastSeries {
            hourly_timestamps: vec!["2024-06-01T00:00".into(), "2024-06-01T01:00".into()],
            hourly_temperature: Some(vec![Some(14.2), Some(13.9)]),
            hourly_cape: Some(vec![Some(0.0)]),
            ..ForecastSeries::default()
        };
        let err = series.check_alignment().unwrap_err();
        assert!(err.to_string().contains("cape"));
    }

    #[test]
    fn test_hourly_points_fill_missing_fields_with_none() {
        let series = ForecastSeries {
            hourly_timestamps: vec!["2024-06-01T00:00".into(), "2024-06-01T01:00".into()],
            hourly_temperature: Some(vec![Some(14.2), None]),
            hourly_weather_code: None,
            hourly_cape: Some(vec![Some(0.0), Some(12.5)]),
            ..ForecastSeries::default()
        };

        let points = series.hourly_points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].timestamp, "2024-06-01T01:00");
        assert_eq!(points[0].temperature, Some(14.2));
        assert_eq!(points[1].temperature, None);
        assert_eq!(points[1].weather_code, None);
        assert_eq!(points[1].cape, Some(12.5));
    }

    #[test]
    fn test_empty_record_is_neutral() {
        let record = ForecastRecord::empty(stuttgart());
        assert!(record.is_empty());
        assert_eq!(record.location, stuttgart());
        assert_eq!(record.elevation, 0.0);
    }
}
