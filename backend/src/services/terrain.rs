//! Terrain suitability analysis over a sampled elevation grid.
//!
//! Samples at or below the lake water level are dropped. The rest are scored
//! on elevation, distance from the island center and, when a target is
//! given, how well their bearing from the center lines up with the target.
//! With a target below [`TerrainConfig::occlusion_max_altitude`], samples
//! whose line of sight is blocked by higher nearby terrain are excluded.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::algorithms::{alignment_score, angular_difference, bearing, haversine_distance_m};
use crate::models::{BoundingBox, ElevationSample, GeoPoint, ScoredTerrainSpot, TerrainReport};
use crate::services::scoring::TargetDirection;

/// Weights of the terrain composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub elevation: f64,
    pub edge: f64,
    #[serde(default)]
    pub direction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    #[serde(default)]
    pub bounds: BoundingBox,
    /// Samples per side of the grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Water-level threshold in meters. Samples at or below it are dropped.
    #[serde(default = "default_min_elevation")]
    pub min_elevation: f64,
    /// Targets above this altitude are never occluded.
    #[serde(default = "default_occlusion_max_altitude")]
    pub occlusion_max_altitude: f64,
    /// Azimuth tolerance either side of the target.
    #[serde(default = "default_occlusion_half_angle")]
    pub occlusion_half_angle: f64,
    /// Occluders closer than this are ignored.
    #[serde(default = "default_occlusion_min_distance_m")]
    pub occlusion_min_distance_m: f64,
    /// Edge score per degree of distance from the center.
    #[serde(default = "default_edge_scale")]
    pub edge_scale: f64,
    #[serde(default = "default_targeted_weights")]
    pub targeted_weights: CompositeWeights,
    #[serde(default = "default_untargeted_weights")]
    pub untargeted_weights: CompositeWeights,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::default(),
            grid_size: default_grid_size(),
            min_elevation: default_min_elevation(),
            occlusion_max_altitude: default_occlusion_max_altitude(),
            occlusion_half_angle: default_occlusion_half_angle(),
            occlusion_min_distance_m: default_occlusion_min_distance_m(),
            edge_scale: default_edge_scale(),
            targeted_weights: default_targeted_weights(),
            untargeted_weights: default_untargeted_weights(),
            top_n: default_top_n(),
        }
    }
}

fn default_grid_size() -> usize {
    15
}

fn default_min_elevation() -> f64 {
    5.0
}

fn default_occlusion_max_altitude() -> f64 {
    60.0
}

fn default_occlusion_half_angle() -> f64 {
    10.0
}

fn default_occlusion_min_distance_m() -> f64 {
    10.0
}

fn default_edge_scale() -> f64 {
    1000.0
}

fn default_targeted_weights() -> CompositeWeights {
    CompositeWeights {
        elevation: 0.3,
        edge: 0.1,
        direction: 0.6,
    }
}

fn default_untargeted_weights() -> CompositeWeights {
    CompositeWeights {
        elevation: 0.7,
        edge: 0.3,
        direction: 0.0,
    }
}

fn default_top_n() -> usize {
    10
}

/// Sampling grid over `bounds`, row-major from the south-west corner.
///
/// Coordinates are rounded to 4 decimals. The far edges are not included.
pub fn grid_locations(bounds: &BoundingBox, grid_size: usize) -> Vec<GeoPoint> {
    if grid_size == 0 {
        return Vec::new();
    }
    let lat_step = (bounds.lat_max - bounds.lat_min) / grid_size as f64;
    let lon_step = (bounds.lon_max - bounds.lon_min) / grid_size as f64;

    let mut locations = Vec::with_capacity(grid_size * grid_size);
    for i in 0..grid_size {
        for j in 0..grid_size {
            let lat = bounds.lat_min + i as f64 * lat_step;
            let lon = bounds.lon_min + j as f64 * lon_step;
            locations.push(GeoPoint::new(round_to(lat, 4), round_to(lon, 4)));
        }
    }
    locations
}

/// Whether higher terrain in `candidates` blocks the view from `sample` toward `target`.
pub fn is_occluded(
    sample: &ElevationSample,
    candidates: &[ElevationSample],
    target: TargetDirection,
    config: &TerrainConfig,
) -> bool {
    if target.altitude > config.occlusion_max_altitude {
        return false;
    }

    candidates.iter().any(|other| {
        if other.elevation <= sample.elevation {
            return false;
        }
        let distance = haversine_distance_m(
            sample.latitude,
            sample.longitude,
            other.latitude,
            other.longitude,
        );
        if distance < config.occlusion_min_distance_m {
            return false;
        }
        let toward = bearing(
            sample.latitude,
            sample.longitude,
            other.latitude,
            other.longitude,
        );
        if angular_difference(toward, target.azimuth) > config.occlusion_half_angle {
            return false;
        }
        let elevation_angle = (other.elevation - sample.elevation)
            .atan2(distance)
            .to_degrees();
        elevation_angle > target.altitude
    })
}

/// Score the grid and return the best spots.
pub fn analyze(
    samples: &[ElevationSample],
    target: Option<TargetDirection>,
    config: &TerrainConfig,
) -> TerrainReport {
    let valid: Vec<ElevationSample> = samples
        .iter()
        .filter(|s| s.elevation.is_finite() && s.elevation > config.min_elevation)
        .copied()
        .collect();

    let evaluated = valid.len();
    if valid.is_empty() {
        return TerrainReport {
            spots: Vec::new(),
            evaluated,
            occluded: 0,
        };
    }

    let max_elevation = valid
        .iter()
        .map(|s| s.elevation)
        .fold(f64::NEG_INFINITY, f64::max);
    let center = config.bounds.center();

    let mut occluded = 0usize;
    let mut spots = Vec::with_capacity(valid.len());
    for sample in &valid {
        if let Some(t) = target {
            if is_occluded(sample, &valid, t, config) {
                occluded += 1;
                continue;
            }
        }
        spots.push(score_sample(sample, target, max_elevation, center, config));
    }

    spots.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    spots.truncate(config.top_n);

    log::debug!(
        "Terrain analysis: {} evaluated, {} occluded, {} returned",
        evaluated,
        occluded,
        spots.len()
    );

    TerrainReport {
        spots,
        evaluated,
        occluded,
    }
}

fn score_sample(
    sample: &ElevationSample,
    target: Option<TargetDirection>,
    max_elevation: f64,
    center: GeoPoint,
    config: &TerrainConfig,
) -> ScoredTerrainSpot {
    let elevation_score = if max_elevation > 0.0 {
        100.0 * sample.elevation / max_elevation
    } else {
        0.0
    };

    let offset = ((sample.latitude - center.latitude).powi(2)
        + (sample.longitude - center.longitude).powi(2))
    .sqrt();
    let edge_score = (offset * config.edge_scale).min(100.0);

    let (score, direction_score) = match target {
        Some(t) => {
            let from_center = bearing(
                center.latitude,
                center.longitude,
                sample.latitude,
                sample.longitude,
            );
            let direction = alignment_score(t.azimuth, from_center);
            let w = &config.targeted_weights;
            (
                w.elevation * elevation_score + w.edge * edge_score + w.direction * direction,
                Some(direction),
            )
        }
        None => {
            let w = &config.untargeted_weights;
            (w.elevation * elevation_score + w.edge * edge_score, None)
        }
    };

    ScoredTerrainSpot {
        latitude: sample.latitude,
        longitude: sample.longitude,
        elevation: sample.elevation,
        score: round_to(score, 1),
        elevation_score,
        edge_score,
        direction_score,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
