//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Queries are cheap enough to run inline on the runtime.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    parse_obs_time, CatalogResponse, ForecastQuery, ForecastResponse, HealthResponse, PointQuery,
    SearchRequest, VisibleStarsQuery, VisibleStarsResponse, WildSpotsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::error::{ErrorContext, NoRecommendation, StargazeError};
use crate::models::{ObservationPoint, StargazingConditions, TerrainReport};
use crate::services::sky::PointSky;
use crate::services::terrain::analyze;
use crate::services::weather::{conditions, DEFAULT_FORECAST_HOURS};
use crate::services::{Recommendation, TargetDirection};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Longest forecast served.
const MAX_FORECAST_HOURS: usize = 72;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        points: state.service.points().len(),
    }))
}

// =============================================================================
// Recommendations
// =============================================================================

/// POST /v1/search
///
/// Rank observation points for a target. Current weather is attached when
/// the weather source has it.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> HandlerResult<Recommendation> {
    let star_name = request.star_name.trim();
    if star_name.is_empty() {
        return Err(AppError::BadRequest("star_name must not be empty".to_string()));
    }

    let at = parse_obs_time(request.obs_time.as_deref());
    let weather = state.weather.current().await;

    let recommendation = state.service.recommend(
        star_name,
        at,
        request.comparisons.as_ref(),
        weather.as_ref(),
    )?;
    Ok(Json(recommendation))
}

// =============================================================================
// Sky listings
// =============================================================================

/// GET /v1/visible-stars?min_altitude=&obs_time=
pub async fn visible_stars(
    State(state): State<AppState>,
    Query(query): Query<VisibleStarsQuery>,
) -> HandlerResult<VisibleStarsResponse> {
    let at = parse_obs_time(query.obs_time.as_deref());
    let stars = state
        .service
        .visible_objects(at, query.min_altitude.unwrap_or(0.0));
    let count = stars.len();
    Ok(Json(VisibleStarsResponse { stars, count }))
}

/// GET /v1/all-stars
pub async fn all_stars(State(state): State<AppState>) -> HandlerResult<CatalogResponse> {
    let celestial_objects = state.service.catalog();
    let count = celestial_objects.len();
    Ok(Json(CatalogResponse {
        celestial_objects,
        count,
    }))
}

// =============================================================================
// Observation points
// =============================================================================

/// GET /v1/points
pub async fn list_points(State(state): State<AppState>) -> HandlerResult<Vec<ObservationPoint>> {
    Ok(Json(state.service.points().to_vec()))
}

/// GET /v1/points/{name}?time=
pub async fn point_details(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PointQuery>,
) -> HandlerResult<PointSky> {
    let at = parse_obs_time(query.time.as_deref());
    Ok(Json(state.service.point_sky(&name, at)?))
}

// =============================================================================
// Terrain
// =============================================================================

/// GET /v1/wild-spots?target=&obs_time=
///
/// Without a cached elevation grid the report is empty.
pub async fn wild_spots(
    State(state): State<AppState>,
    Query(query): Query<WildSpotsQuery>,
) -> HandlerResult<TerrainReport> {
    let direction = match query.target.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(target) => {
            let at = parse_obs_time(query.obs_time.as_deref());
            let info = state.service.target_info(target, at)?;
            if !info.observable {
                return Err(StargazeError::from(NoRecommendation::BelowHorizon {
                    target: info.position.name,
                    altitude: info.position.altitude,
                })
                .into());
            }
            Some(TargetDirection {
                azimuth: info.position.azimuth,
                altitude: info.position.altitude,
            })
        }
        None => None,
    };

    let samples = match state.terrain.load()? {
        Some(samples) => samples,
        None => {
            log::warn!(
                "No elevation samples cached at {}",
                state.terrain.cache_path().display()
            );
            Vec::new()
        }
    };

    Ok(Json(analyze(&samples, direction, &state.terrain_config)))
}

// =============================================================================
// Weather
// =============================================================================

/// GET /v1/weather
pub async fn weather(State(state): State<AppState>) -> HandlerResult<StargazingConditions> {
    match state.weather.current().await {
        Some(snapshot) => Ok(Json(conditions(snapshot))),
        None => Err(StargazeError::unavailable(
            "weather data unavailable",
            ErrorContext::new("current_weather").with_entity("weather"),
        )
        .into()),
    }
}

/// GET /v1/weather/forecast?hours=
pub async fn forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<ForecastResponse> {
    let hours = query
        .hours
        .unwrap_or(DEFAULT_FORECAST_HOURS)
        .min(MAX_FORECAST_HOURS);
    let hourly = state.weather.hourly_forecast(hours).await;
    let count = hourly.len();
    Ok(Json(ForecastResponse { hourly, count }))
}
