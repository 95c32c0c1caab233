//! Application configuration file support.
//!
//! Configuration is read from a TOML file. Every section and field is optional;
//! missing values take the defaults below, so an empty file is a valid
//! configuration for Sanshan Island.
//!
//! ```toml
//! [site]
//! latitude = 31.03
//! longitude = 120.29
//!
//! [data]
//! points_file = "data/points.txt"
//!
//! [scoring.default_weights]
//! location = 0.4
//! view = 0.4
//! difficulty = 0.2
//! light_pollution = 0.0
//!
//! [cache]
//! weather_ttl_secs = 1800
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ErrorContext, StargazeError, StargazeResult};
use crate::models::GeoPoint;
use crate::services::light_pollution::LightPollutionConfig;
use crate::services::scoring::ScoringConfig;
use crate::services::terrain::TerrainConfig;

/// File name searched for by [`AppConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "stargaze.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub light_pollution: LightPollutionConfig,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Observer location used for sky coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_latitude")]
    pub latitude: f64,
    #[serde(default = "default_site_longitude")]
    pub longitude: f64,
}

impl SiteSettings {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            latitude: default_site_latitude(),
            longitude: default_site_longitude(),
        }
    }
}

/// Locations of the file-backed stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_points_file")]
    pub points_file: PathBuf,
    /// Directory holding elevation cache files.
    #[serde(default = "default_terrain_cache_dir")]
    pub terrain_cache_dir: PathBuf,
    /// JSON weather report written by the external fetcher.
    #[serde(default = "default_weather_file")]
    pub weather_file: PathBuf,
}

impl DataSettings {
    /// Anchor relative paths at `base`, normally the config file's directory.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.points_file,
            &mut self.terrain_cache_dir,
            &mut self.weather_file,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            points_file: default_points_file(),
            terrain_cache_dir: default_terrain_cache_dir(),
            weather_file: default_weather_file(),
        }
    }
}

/// In-memory cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_weather_ttl_secs")]
    pub weather_ttl_secs: u64,
}

impl CacheSettings {
    pub fn weather_ttl(&self) -> Duration {
        Duration::from_secs(self.weather_ttl_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            weather_ttl_secs: default_weather_ttl_secs(),
        }
    }
}

fn default_site_name() -> String {
    "Sanshan Island".to_string()
}

fn default_site_latitude() -> f64 {
    31.03
}

fn default_site_longitude() -> f64 {
    120.29
}

fn default_points_file() -> PathBuf {
    PathBuf::from("data/points.txt")
}

fn default_terrain_cache_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_weather_file() -> PathBuf {
    PathBuf::from("data/weather.json")
}

fn default_weather_ttl_secs() -> u64 {
    1800
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> StargazeResult<Self> {
        toml::from_str(content).map_err(|e| {
            StargazeError::configuration(
                format!("Failed to parse config: {}", e),
                ErrorContext::new("parse_config"),
            )
        })
    }

    /// Load configuration from a TOML file.
    ///
    /// Relative data paths are resolved against the file's directory.
    ///
    /// # Errors
    /// `Configuration` if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> StargazeResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            StargazeError::configuration(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_entity_id(path.display()),
            )
        })?;

        let mut config = Self::from_toml_str(&content).map_err(|e| match e {
            StargazeError::Configuration { message, context } => StargazeError::Configuration {
                message,
                context: context.with_entity_id(path.display()),
            },
            other => other,
        })?;

        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `stargaze.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> StargazeResult<Self> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(StargazeError::configuration(
            "No stargaze.toml found in standard locations",
            ErrorContext::new("load_config"),
        ))
    }

    /// Load from `path` if given, else from the default location, else defaults.
    pub fn load(path: Option<&Path>) -> StargazeResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::from_default_location() {
                Ok(config) => Ok(config),
                Err(e) => {
                    log::info!("Using built-in configuration: {}", e);
                    Ok(Self::default())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.site.latitude, 31.03);
        assert_eq!(config.cache.weather_ttl_secs, 1800);
        assert_eq!(config.data.points_file, PathBuf::from("data/points.txt"));
        assert_eq!(config.terrain.top_n, 10);
        assert_eq!(config.scoring.difficulty_costs.cost(Difficulty::Hard), 80.0);
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
[site]
latitude = 31.5

[scoring.difficulty_costs]
easy = 10.0

[cache]
weather_ttl_secs = 60
"#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.site.latitude, 31.5);
        assert_eq!(config.site.longitude, 120.29);
        assert_eq!(config.scoring.difficulty_costs.cost(Difficulty::Easy), 10.0);
        assert_eq!(config.scoring.difficulty_costs.cost(Difficulty::Medium), 50.0);
        assert_eq!(config.cache.weather_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let err = AppConfig::from_toml_str("[site\nlatitude = ").unwrap_err();
        assert!(matches!(err, StargazeError::Configuration { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[terrain]\nmin_elevation = 8.0\ntop_n = 5").unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.terrain.min_elevation, 8.0);
        assert_eq!(config.terrain.top_n, 5);
    }

    #[test]
    fn test_data_paths_follow_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[data]\npoints_file = \"points.txt\"\nweather_file = \"/srv/weather.json\"\n",
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.data.points_file, dir.path().join("points.txt"));
        assert_eq!(config.data.terrain_cache_dir, dir.path().join("data"));
        assert_eq!(config.data.weather_file, PathBuf::from("/srv/weather.json"));

        // Parsed text has no file to anchor to
        let inline = AppConfig::from_toml_str("[data]\npoints_file = \"points.txt\"").unwrap();
        assert_eq!(inline.data.points_file, PathBuf::from("points.txt"));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = AppConfig::from_file("/nonexistent/stargaze.toml").unwrap_err();
        assert!(matches!(err, StargazeError::Configuration { .. }));
    }
}
