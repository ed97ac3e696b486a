use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::UvMapError;
use crate::location_resolver::LocationQuery;
use crate::models::{Coordinate, ForecastRecord, ResolvedLocation, ViewSnapshot};
use crate::service::ForecastService;

pub mod page;

/// Shared handler state
pub type AppState = Arc<ForecastService>;

/// Page parameters; a repeated key keeps its first value
#[derive(Debug, Default, PartialEq)]
pub struct PageParams {
    pub city_name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl PageParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "cityName" => &mut params.city_name,
                "lat" => &mut params.lat,
                "lon" => &mut params.lon,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationParams {
    #[serde(rename = "cityName")]
    pub city_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoordinateParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<ResolvedLocation> for ApiLocation {
    fn from(location: ResolvedLocation) -> Self {
        Self {
            name: location.name,
            latitude: location.coordinate.latitude,
            longitude: location.coordinate.longitude,
        }
    }
}

/// JSON error response carrying the status that matches the failure
pub struct ApiError(UvMapError);

impl From<UvMapError> for ApiError {
    fn from(err: UvMapError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            UvMapError::NotFound { .. } => StatusCode::NOT_FOUND,
            UvMapError::Validation { .. } => StatusCode::BAD_REQUEST,
            UvMapError::Transport { .. } | UvMapError::DataShape { .. } => StatusCode::BAD_GATEWAY,
            UvMapError::Config { .. } | UvMapError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_page))
        .route("/loc", get(get_location))
        .route("/forecast", get(get_forecast))
        .route("/view", get(get_view))
        .with_state(state)
}

/// Run the pipeline if the request carries a location, then render the view.
/// Failures render the last good state with a notice.
async fn get_page(
    State(service): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let params = PageParams::from_pairs(pairs);
    let query = LocationQuery::from_params(
        params.city_name.as_deref(),
        params.lat.as_deref(),
        params.lon.as_deref(),
        service.default_city(),
    );

    let result = match query {
        Ok(Some(query)) => service.run(query).await.map(Some),
        Ok(None) => Ok(None),
        Err(e) => Err(e),
    };

    let (snapshot, notice) = match result {
        Ok(Some(snapshot)) => (snapshot, None),
        Ok(None) => (service.snapshot(), None),
        Err(e) => {
            if e.is_not_found() {
                info!("Page request without match: {}", e);
            } else {
                warn!("Page request failed, rendering previous state: {}", e);
            }
            (service.snapshot(), Some(e.user_message()))
        }
    };

    Html(page::render(&snapshot, notice.as_deref()))
}

async fn get_location(
    State(service): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<ApiLocation>, ApiError> {
    let city_name = params
        .city_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| UvMapError::validation("cityName is required"))?;

    let location = service.resolve(city_name).await?;
    Ok(Json(location.into()))
}

async fn get_forecast(
    State(service): State<AppState>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<ForecastRecord>, ApiError> {
    let (Some(lat), Some(lon)) = (params.lat.as_deref(), params.lon.as_deref()) else {
        return Err(UvMapError::validation("lat and lon are required").into());
    };
    let coordinate = Coordinate::parse(lat, lon)?;

    Ok(Json(service.fetch_or_empty(coordinate).await))
}

async fn get_view(State(service): State<AppState>) -> Json<ViewSnapshot> {
    Json(service.snapshot())
}
