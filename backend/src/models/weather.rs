use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current sky conditions over the island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Cloud cover percentage (0-100)
    pub cloud_cover: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// 0.0 new moon, 0.5 full moon, 1.0 new moon again
    #[serde(default)]
    pub moon_phase: f64,
    #[serde(default)]
    pub moon_altitude: Option<f64>,
    #[serde(default)]
    pub sunrise: Option<String>,
    #[serde(default)]
    pub sunset: Option<String>,
}

/// One hour of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
}

/// Snapshot plus derived stargazing assessment, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StargazingConditions {
    #[serde(flatten)]
    pub snapshot: WeatherSnapshot,
    pub stargazing_score: f64,
    pub condition_text: String,
    pub moon_phase_text: String,
}

/// Sky brightness estimate for a site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPollutionReading {
    /// Sky quality meter reading, mag/arcsec²
    pub sqm: f64,
    /// Bortle class, 1 (darkest) to 9
    pub bortle: u8,
    /// Approximate artificial radiance, 10^-9 W/cm²/sr
    pub radiance: f64,
}
