//! Location Resolution Module
//!
//! This module turns location input (a city name or raw coordinates) into a
//! [`ResolvedLocation`] for forecasting.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::models::{Coordinate, ResolvedLocation};
use crate::weather::OpenMeteoClient;
use crate::{Result, UvMapError};

/// Types of location input
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Free-text city name, geocoded before forecasting
    City(String),
    /// Coordinates given directly
    Coordinates(Coordinate),
}

impl LocationQuery {
    /// Build a query from the raw `cityName`, `lat` and `lon` request parameters.
    ///
    /// `cityName` wins over coordinates and falls back to `default_city` when
    /// empty. Coordinates need both values. Returns `None` when neither is given.
    pub fn from_params(
        city_name: Option<&str>,
        lat: Option<&str>,
        lon: Option<&str>,
        default_city: &str,
    ) -> Result<Option<Self>> {
        if let Some(city) = city_name {
            let city = city.trim();
            let city = if city.is_empty() { default_city } else { city };
            return Ok(Some(LocationQuery::City(city.to_string())));
        }

        match (lat, lon) {
            (Some(lat), Some(lon)) => Ok(Some(LocationQuery::Coordinates(Coordinate::parse(
                lat, lon,
            )?))),
            (None, None) => Ok(None),
            _ => Err(UvMapError::validation(
                "Both lat and lon are required for a coordinate query",
            )),
        }
    }
}

/// Service for resolving city names via the geocoding provider
#[derive(Debug, Clone)]
pub struct GeocodeResolver {
    api_client: OpenMeteoClient,
}

impl GeocodeResolver {
    #[must_use]
    pub fn new(api_client: OpenMeteoClient) -> Self {
        Self { api_client }
    }

    /// Resolve any location query; coordinates pass through without a request
    pub async fn resolve_query(&self, query: LocationQuery) -> Result<ResolvedLocation> {
        match query {
            LocationQuery::City(name) => self.resolve(&name).await,
            LocationQuery::Coordinates(coordinate) => {
                debug!("Using coordinates as given: {}", coordinate.format_coordinates());
                Ok(ResolvedLocation::from_coordinate(coordinate))
            }
        }
    }

    /// Resolve a city name to the coordinate of its first geocoding match.
    ///
    /// The resolved name is the caller's input, not the provider's spelling.
    #[instrument(skip(self), fields(location = city_name))]
    pub async fn resolve(&self, city_name: &str) -> Result<ResolvedLocation> {
        info!("Geocoding location: '{}'", city_name);
        let start_time = Instant::now();

        let results = self.api_client.geocode(city_name).await.inspect_err(|e| {
            warn!("Geocoding request for '{}' failed: {}", city_name, e);
        })?;

        let Some(first) = results.first() else {
            warn!("No results found for location '{}'", city_name);
            return Err(UvMapError::not_found(city_name));
        };

        let coordinate = first.coordinate()?;
        debug!(
            "Found location: {}, {} ({:.4}, {:.4}) in {:.3}s",
            first.name.as_deref().unwrap_or(city_name),
            first.country.as_deref().unwrap_or("?"),
            coordinate.latitude,
            coordinate.longitude,
            start_time.elapsed().as_secs_f64()
        );

        Ok(ResolvedLocation::new(city_name, coordinate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("Stuttgart"), None, None, Some(LocationQuery::City("Stuttgart".into())))]
    #[case(Some("  Berlin "), None, None, Some(LocationQuery::City("Berlin".into())))]
    #[case(Some(""), None, None, Some(LocationQuery::City("Stuttgart".into())))]
    #[case(Some("Ulm"), Some("1.0"), Some("2.0"), Some(LocationQuery::City("Ulm".into())))]
    #[case(None, None, None, None)]
    fn test_query_from_params(
        #[case] city: Option<&str>,
        #[case] lat: Option<&str>,
        #[case] lon: Option<&str>,
        #[case] expected: Option<LocationQuery>,
    ) {
        let query = LocationQuery::from_params(city, lat, lon, "Stuttgart").unwrap();
        assert_eq!(query, expected);
    }

    #[test]
    fn test_query_from_coordinates() {
        let query = LocationQuery::from_params(None, Some("48.78"), Some("9.18"), "Stuttgart")
            .unwrap()
            .unwrap();
        assert_eq!(
            query,
            LocationQuery::Coordinates(Coordinate::new(48.78, 9.18).unwrap())
        );
    }

    #[rstest]
    #[case(Some("48.78"), None)]
    #[case(None, Some("9.18"))]
    #[case(Some("north"), Some("9.18"))]
    #[case(Some("95.0"), Some("9.18"))]
    fn test_invalid_coordinate_params(#[case] lat: Option<&str>, #[case] lon: Option<&str>) {
        let err = LocationQuery::from_params(None, lat, lon, "Stuttgart").unwrap_err();
        assert!(matches!(err, UvMapError::Validation { .. }));
    }
}
