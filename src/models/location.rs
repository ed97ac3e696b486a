//! Location models: validated coordinates and resolved places

use serde::{Deserialize, Serialize};

use crate::{Result, UvMapError};

/// Geographic position in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, -90..=90
    pub latitude: f64,
    /// Longitude in decimal degrees, -180..=180
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(UvMapError::validation(format!(
                "Latitude must be between -90 and 90, got: {latitude}"
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(UvMapError::validation(format!(
                "Longitude must be between -180 and 180, got: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a coordinate from raw query strings like `"48.78"` and `"9.18"`
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let lat = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| UvMapError::validation(format!("Invalid latitude: {latitude}")))?;
        let lon = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| UvMapError::validation(format!("Invalid longitude: {longitude}")))?;

        Self::new(lat, lon)
    }

    /// Format as a short coordinate string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A place name paired with the coordinate it resolved to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub coordinate: Coordinate,
}

impl ResolvedLocation {
    #[must_use]
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    /// Location for a raw coordinate query, named after the coordinate itself
    #[must_use]
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self::new(coordinate.format_coordinates(), coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(48.78, 9.18)]
    fn test_valid_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let coordinate = Coordinate::new(lat, lon).unwrap();
        assert_eq!(coordinate.latitude, lat);
        assert_eq!(coordinate.longitude, lon);
    }

    #[rstest]
    #[case(90.5, 0.0)]
    #[case(-91.0, 0.0)]
    #[case(0.0, 180.1)]
    #[case(0.0, -181.0)]
    #[case(f64::NAN, 0.0)]
    fn test_out_of_range_coordinates(#[case] lat: f64, #[case] lon: f64) {
        let err = Coordinate::new(lat, lon).unwrap_err();
        assert!(matches!(err, UvMapError::Validation { .. }));
    }

    #[test]
    fn test_parse_rejects_garbage_instead_of_zero() {
        assert!(Coordinate::parse("abc", "9.18").is_err());
        assert!(Coordinate::parse("48.78", "").is_err());

        let parsed = Coordinate::parse(" 48.78 ", "9.18").unwrap();
        assert_eq!(parsed, Coordinate::new(48.78, 9.18).unwrap());
    }

    #[test]
    fn test_location_from_coordinate() {
        let coordinate = Coordinate::new(46.818_234, 8.227_456).unwrap();
        let location = ResolvedLocation::from_coordinate(coordinate);
        assert_eq!(location.name, "46.8182, 8.2275");
        assert_eq!(location.coordinate, coordinate);
    }
}
