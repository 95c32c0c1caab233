//! Weather report written to disk by an external fetcher.
//!
//! ```json
//! {
//!   "current": {"cloud_cover": 12, "humidity": 70, "temperature": 24.5, "moon_phase": 0.1},
//!   "hourly": [{"time": "2024-08-12T14:00:00Z", "temperature": 24.0, "humidity": 72, "cloud_cover": 10}]
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::{HourlyWeather, WeatherSnapshot};
use crate::services::weather::WeatherSource;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default)]
    pub current: Option<WeatherSnapshot>,
    #[serde(default)]
    pub hourly: Vec<HourlyWeather>,
}

/// Reads the report file on every call. Wrap in
/// [`CachedWeatherSource`](crate::services::weather::CachedWeatherSource)
/// to bound file reads.
#[derive(Debug, Clone)]
pub struct JsonFileWeatherSource {
    path: PathBuf,
}

impl JsonFileWeatherSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_report(&self) -> Option<WeatherReport> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Weather report {} unavailable: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(report) => Some(report),
            Err(e) => {
                log::warn!("Weather report {} is malformed: {}", self.path.display(), e);
                None
            }
        }
    }
}

#[async_trait]
impl WeatherSource for JsonFileWeatherSource {
    async fn current(&self) -> Option<WeatherSnapshot> {
        self.read_report().await?.current
    }

    async fn hourly_forecast(&self, hours: usize) -> Vec<HourlyWeather> {
        self.read_report()
            .await
            .map(|report| report.hourly.into_iter().take(hours).collect())
            .unwrap_or_default()
    }
}
