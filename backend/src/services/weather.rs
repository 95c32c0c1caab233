//! Stargazing conditions derived from weather and moon phase.

use async_trait::async_trait;
use std::time::Duration;

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::models::{HourlyWeather, StargazingConditions, WeatherSnapshot};

/// Forecast length when a caller does not ask for one.
pub const DEFAULT_FORECAST_HOURS: usize = 12;

/// Provider of island weather. Failures surface as `None` or an empty list.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self) -> Option<WeatherSnapshot>;

    async fn hourly_forecast(&self, hours: usize) -> Vec<HourlyWeather>;
}

/// Stargazing index in `[0, 100]`: 70% clear sky, 30% moon darkness.
///
/// A new moon (phase 0 or 1) contributes fully, a full moon (0.5) not at all.
pub fn stargazing_score(cloud_cover: f64, moon_phase: f64) -> f64 {
    let cloud_score = (100.0 - cloud_cover).clamp(0.0, 100.0);
    let moon_score = ((moon_phase - 0.5).abs() * 2.0 * 100.0).clamp(0.0, 100.0);
    0.7 * cloud_score + 0.3 * moon_score
}

pub fn condition_text(score: f64) -> &'static str {
    match score {
        s if s >= 80.0 => "极佳",
        s if s >= 60.0 => "良好",
        s if s >= 40.0 => "一般",
        s if s >= 20.0 => "较差",
        _ => "不宜",
    }
}

pub fn moon_phase_text(phase: f64) -> &'static str {
    match phase {
        p if !(0.03..=0.97).contains(&p) => "新月",
        p if p < 0.25 => "蛾眉月",
        p if p < 0.27 => "上弦月",
        p if p < 0.48 => "盈凸月",
        p if p < 0.52 => "满月",
        p if p < 0.73 => "亏凸月",
        p if p < 0.77 => "下弦月",
        _ => "残月",
    }
}

/// Attach the derived stargazing assessment to a snapshot.
pub fn conditions(snapshot: WeatherSnapshot) -> StargazingConditions {
    let score = stargazing_score(snapshot.cloud_cover, snapshot.moon_phase);
    StargazingConditions {
        stargazing_score: score.round(),
        condition_text: condition_text(score).to_string(),
        moon_phase_text: moon_phase_text(snapshot.moon_phase).to_string(),
        snapshot,
    }
}

/// Wraps a source so the current snapshot is fetched at most once per TTL.
pub struct CachedWeatherSource<S, C = SystemClock> {
    inner: S,
    current: TtlCache<WeatherSnapshot, C>,
}

impl<S: WeatherSource> CachedWeatherSource<S, SystemClock> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self::with_clock(inner, ttl, SystemClock)
    }
}

impl<S: WeatherSource, C: Clock> CachedWeatherSource<S, C> {
    pub fn with_clock(inner: S, ttl: Duration, clock: C) -> Self {
        Self {
            inner,
            current: TtlCache::with_clock(ttl, clock),
        }
    }

    pub fn invalidate(&self) {
        self.current.invalidate();
    }
}

#[async_trait]
impl<S: WeatherSource, C: Clock> WeatherSource for CachedWeatherSource<S, C> {
    async fn current(&self) -> Option<WeatherSnapshot> {
        if let Some(snapshot) = self.current.get() {
            log::debug!("Weather cache hit");
            return Some(snapshot);
        }

        let fresh = self.inner.current().await;
        match &fresh {
            Some(snapshot) => self.current.put(snapshot.clone()),
            None => log::warn!("Weather source returned no data"),
        }
        fresh
    }

    async fn hourly_forecast(&self, hours: usize) -> Vec<HourlyWeather> {
        self.inner.hourly_forecast(hours).await
    }
}
