//! Data Transfer Objects for the HTTP API.
//!
//! Engine results (`Recommendation`, `PointSky`, `TerrainReport`,
//! `StargazingConditions`) already derive Serialize and are returned as-is.
//! Only request bodies, query strings and list wrappers live here.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithms::PairwiseComparisons;
use crate::models::{CatalogEntry, CelestialPosition, HourlyWeather};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Observation points loaded at startup
    pub points: usize,
}

/// Request body for `POST /v1/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// English or local name of the target
    pub star_name: String,
    /// ISO-8601 time; missing or malformed means now
    #[serde(default)]
    pub obs_time: Option<String>,
    /// Optional AHP preferences
    #[serde(default)]
    pub comparisons: Option<PairwiseComparisons>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisibleStarsQuery {
    pub min_altitude: Option<f64>,
    pub obs_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleStarsResponse {
    pub stars: Vec<CelestialPosition>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointQuery {
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub celestial_objects: Vec<CatalogEntry>,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WildSpotsQuery {
    /// Optional target to orient the spots toward
    pub target: Option<String>,
    pub obs_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastQuery {
    pub hours: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub hourly: Vec<HourlyWeather>,
    pub count: usize,
}

/// Parse a client-supplied observation time.
///
/// Accepts RFC 3339 and naive ISO-8601 (read as UTC). Anything else yields
/// `None`, which callers treat as "now".
pub fn parse_obs_time(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    log::debug!("Ignoring malformed observation time '{}'", raw);
    None
}
