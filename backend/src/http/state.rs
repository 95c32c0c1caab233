//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::StargazeResult;
use crate::io::{load_points, JsonFileWeatherSource, TerrainStore};
use crate::services::terrain::TerrainConfig;
use crate::services::weather::{CachedWeatherSource, WeatherSource};
use crate::services::StargazeService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StargazeService>,
    /// Current conditions and forecast, already TTL-cached when built from config
    pub weather: Arc<dyn WeatherSource>,
    pub terrain: Arc<TerrainStore>,
    pub terrain_config: Arc<TerrainConfig>,
}

impl AppState {
    pub fn new(
        service: StargazeService,
        weather: Arc<dyn WeatherSource>,
        terrain: TerrainStore,
        terrain_config: TerrainConfig,
    ) -> Self {
        Self {
            service: Arc::new(service),
            weather,
            terrain: Arc::new(terrain),
            terrain_config: Arc::new(terrain_config),
        }
    }

    /// Load the point store and wire the file-backed collaborators.
    ///
    /// # Errors
    /// `Io` if the points file cannot be read.
    pub fn from_config(config: &AppConfig) -> StargazeResult<Self> {
        let points = load_points(&config.data.points_file)?;
        let service = StargazeService::from_config(points, config);

        let weather = CachedWeatherSource::new(
            JsonFileWeatherSource::new(&config.data.weather_file),
            config.cache.weather_ttl(),
        );
        let terrain = TerrainStore::new(
            &config.data.terrain_cache_dir,
            config.terrain.bounds,
            config.terrain.grid_size,
        );

        Ok(Self::new(
            service,
            Arc::new(weather),
            terrain,
            config.terrain.clone(),
        ))
    }
}
