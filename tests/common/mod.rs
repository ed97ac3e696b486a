//! Shared helpers for tests against stubbed Open-Meteo providers.

#![allow(dead_code)]

use serde_json::{Value, json};
use uvmap::{ForecastService, MergeMode, UvMapConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointing both providers at the mock server
pub fn config_for(server: &MockServer, mode: MergeMode) -> UvMapConfig {
    let mut config = UvMapConfig::default();
    config.geocoding.base_url = format!("{}/v1", server.uri());
    config.forecast.base_url = format!("{}/v1", server.uri());
    config.http.timeout_seconds = 1;
    config.view.merge_mode = mode;
    config
}

pub fn service_for(server: &MockServer, mode: MergeMode) -> ForecastService {
    ForecastService::from_config(&config_for(server, mode)).unwrap()
}

/// Geocoding stub returning one match for `name`
pub async fn mount_city(server: &MockServer, name: &str, lat: f64, lon: f64) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .and(query_param("count", "1"))
        .and(query_param("language", "de"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": 2825297,
                "name": name,
                "latitude": lat,
                "longitude": lon,
                "country": "Deutschland"
            }],
            "generationtime_ms": 0.6
        })))
        .mount(server)
        .await;
}

/// Geocoding stub answering `{results: []}` for `name`
pub async fn mount_no_match(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(server)
        .await;
}

pub fn forecast_body(lat: f64, lon: f64, uv_index_max: &[f64]) -> Value {
    let days: Vec<String> = (0..uv_index_max.len())
        .map(|d| format!("2024-06-{:02}", d + 1))
        .collect();
    let clear_sky: Vec<f64> = uv_index_max.iter().map(|uv| uv + 0.8).collect();

    json!({
        "latitude": lat,
        "longitude": lon,
        "generationtime_ms": 0.1,
        "utc_offset_seconds": 7200,
        "timezone": "Europe/Berlin",
        "elevation": 245.0,
        "hourly": {
            "time": ["2024-06-01T12:00", "2024-06-01T13:00", "2024-06-01T14:00"],
            "temperature_2m": [22.1, 23.4, 24.0],
            "weather_code": [1, 2, 95],
            "cape": [120.0, 340.0, 810.0]
        },
        "daily": {
            "time": days,
            "uv_index_max": uv_index_max,
            "uv_index_clear_sky_max": clear_sky
        }
    })
}

/// Forecast stub for one coordinate
pub async fn mount_forecast(server: &MockServer, lat: f64, lon: f64, uv_index_max: &[f64]) {
    mount_forecast_body(server, lat, lon, forecast_body(lat, lon, uv_index_max)).await;
}

pub async fn mount_forecast_body(server: &MockServer, lat: f64, lon: f64, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", lat.to_string()))
        .and(query_param("longitude", lon.to_string()))
        .and(query_param("daily", "uv_index_max,uv_index_clear_sky_max"))
        .and(query_param("timezone", "Europe/Berlin"))
        .and(query_param("forecast_days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
