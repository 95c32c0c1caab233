use serde::{Deserialize, Serialize};

use super::observation_point::GeoPoint;

/// One cell of the elevation sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level.
    pub elevation: f64,
}

impl ElevationSample {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
        }
    }
}

/// Latitude/longitude rectangle covering the island.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            lat_min: 31.015,
            lat_max: 31.045,
            lon_min: 120.275,
            lon_max: 120.315,
        }
    }
}

/// A terrain sample that survived filtering, with its composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTerrainSpot {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    pub score: f64,
    pub elevation_score: f64,
    pub edge_score: f64,
    pub direction_score: Option<f64>,
}

/// Outcome of one terrain analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainReport {
    pub spots: Vec<ScoredTerrainSpot>,
    /// Samples above the water-level threshold.
    pub evaluated: usize,
    /// Samples dropped because higher terrain blocks the target.
    pub occluded: usize,
}
