//! File-backed elevation sample cache.
//!
//! Samples are fetched by an external job and written as a JSON array of
//! `{latitude, longitude, elevation}`. The file name carries a hash of the
//! grid parameters so a changed bounding box or grid size never reads a
//! stale cache.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, StargazeError, StargazeResult};
use crate::models::{BoundingBox, ElevationSample, GeoPoint};
use crate::services::terrain::grid_locations;

/// Cache key for a sampling grid.
pub fn grid_cache_key(bounds: &BoundingBox, grid_size: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(
        format!(
            "{:.6}:{:.6}:{:.6}:{:.6}:{}",
            bounds.lat_min, bounds.lat_max, bounds.lon_min, bounds.lon_max, grid_size
        )
        .as_bytes(),
    );
    hex::encode(hasher.finalize())
}

/// Elevation samples for one grid, cached under a directory.
#[derive(Debug, Clone)]
pub struct TerrainStore {
    dir: PathBuf,
    bounds: BoundingBox,
    grid_size: usize,
}

impl TerrainStore {
    pub fn new(dir: impl Into<PathBuf>, bounds: BoundingBox, grid_size: usize) -> Self {
        Self {
            dir: dir.into(),
            bounds,
            grid_size,
        }
    }

    pub fn cache_path(&self) -> PathBuf {
        let key = grid_cache_key(&self.bounds, self.grid_size);
        self.dir.join(format!("terrain_{}.json", &key[..16]))
    }

    /// Locations the external fetcher should sample.
    pub fn grid(&self) -> Vec<GeoPoint> {
        grid_locations(&self.bounds, self.grid_size)
    }

    /// Cached samples, `None` when the cache is missing, empty or unreadable.
    ///
    /// An unreadable cache is logged and treated as absent so the external
    /// fetcher can overwrite it.
    pub fn load(&self) -> StargazeResult<Option<Vec<ElevationSample>>> {
        let path = self.cache_path();
        if !path.exists() {
            log::debug!("No terrain cache at {}", path.display());
            return Ok(None);
        }

        let samples = match read_samples(&path) {
            Ok(samples) => samples,
            Err(e) => {
                log::warn!("Ignoring unreadable terrain cache: {}", e);
                return Ok(None);
            }
        };

        if samples.is_empty() {
            return Ok(None);
        }
        log::info!("Loaded {} elevation samples from {}", samples.len(), path.display());
        Ok(Some(samples))
    }

    /// Write samples to the cache, creating the directory if needed.
    pub fn save(&self, samples: &[ElevationSample]) -> StargazeResult<PathBuf> {
        let path = self.cache_path();
        fs::create_dir_all(&self.dir).map_err(|e| io_error("save_terrain", &self.dir, e))?;
        let json = serde_json::to_string(samples).map_err(|e| io_error("save_terrain", &path, e))?;
        fs::write(&path, json).map_err(|e| io_error("save_terrain", &path, e))?;
        Ok(path)
    }
}

fn read_samples(path: &Path) -> StargazeResult<Vec<ElevationSample>> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_terrain", path, e))?;
    serde_json::from_str(&content).map_err(|e| io_error("load_terrain", path, e))
}

fn io_error(operation: &str, path: &Path, e: impl std::fmt::Display) -> StargazeError {
    StargazeError::io(
        e.to_string(),
        ErrorContext::new(operation)
            .with_entity("terrain_cache")
            .with_entity_id(path.display()),
    )
}
