#![allow(dead_code)]

use chrono::{DateTime, Utc};
use std::sync::Arc;

use stargaze::astro::CoordinateProjector;
use stargaze::models::{
    BodyKind, CatalogEntry, CelestialPosition, ElevationSample, GeoPoint, LightPollutionReading,
};
use stargaze::services::{LightPollutionEstimator, ScoringConfig, StargazeService};

/// Three points splitting the horizon into 120° sectors, plus a comment and
/// a malformed line the loader skips.
pub const SECTOR_POINTS: &str = "\
# longitude latitude difficulty view_start view_end name
120.300 31.040 简单 0 120 东北观景台
120.290 31.020 中等 120 240 南坡平台
120.280 31.030 困难 240 360 西崖

not a point
";

/// Points whose windows all cover the south, at different distances and
/// difficulties.
pub const SOUTH_FACING_POINTS: &str = "\
120.2900 31.0300 简单 150 250 中心草坪
120.3100 31.0450 简单 150 250 远端码头
120.2905 31.0302 困难 150 250 中心岩台
";

pub const WEATHER_REPORT: &str = r#"{
  "current": {
    "cloud_cover": 10,
    "humidity": 65,
    "temperature": 24.5,
    "wind_speed": 9.0,
    "moon_phase": 0.0,
    "sunrise": "05:21",
    "sunset": "18:52"
  },
  "hourly": [
    {"time": "2024-08-12T12:00:00Z", "temperature": 25.0, "humidity": 70, "cloud_cover": 20},
    {"time": "2024-08-12T13:00:00Z", "temperature": 24.0, "humidity": 72, "cloud_cover": 15},
    {"time": "2024-08-12T14:00:00Z", "temperature": 23.5, "humidity": 75, "cloud_cover": 5}
  ]
}"#;

/// Projector with hand-placed targets: `(name, azimuth, altitude)`.
pub struct FixedSky(pub Vec<(&'static str, f64, f64)>);

impl FixedSky {
    pub fn standard() -> Self {
        Self(vec![
            ("Antares", 200.0, 30.0),
            ("Capella", 40.0, 12.0),
            ("Canopus", 180.0, -20.0),
        ])
    }
}

impl CoordinateProjector for FixedSky {
    fn resolve(&self, body: &str, _at: DateTime<Utc>) -> Option<CelestialPosition> {
        self.0
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(body.trim()))
            .map(|(name, azimuth, altitude)| CelestialPosition {
                name: name.to_string(),
                local_name: name.to_string(),
                kind: BodyKind::Star,
                azimuth: *azimuth,
                altitude: *altitude,
                ra: 0.0,
                dec: 0.0,
                magnitude: Some(1.0),
            })
    }

    fn catalog(&self) -> Vec<CatalogEntry> {
        self.0
            .iter()
            .map(|(name, _, _)| CatalogEntry {
                name: name.to_string(),
                local_name: name.to_string(),
                kind: BodyKind::Star,
                magnitude: Some(1.0),
            })
            .collect()
    }
}

/// Same sky reading everywhere, so light pollution never separates points.
pub struct UniformSky(pub Option<LightPollutionReading>);

impl LightPollutionEstimator for UniformSky {
    fn estimate(&self, _name: &str, _lat: f64, _lon: f64) -> Option<LightPollutionReading> {
        self.0
    }
}

pub fn island_center() -> GeoPoint {
    GeoPoint::new(31.03, 120.29)
}

pub fn fixed_service(points_text: &str) -> StargazeService {
    StargazeService::new(
        stargaze::io::parse_points(points_text),
        Arc::new(FixedSky::standard()),
        Arc::new(UniformSky(None)),
        ScoringConfig::default(),
        island_center(),
    )
}

/// A ridge running east-west through the middle of the island, with the
/// shoreline rows at sea level.
pub fn ridge_samples() -> Vec<ElevationSample> {
    let bounds = stargaze::models::BoundingBox::default();
    let mid = bounds.center().latitude;
    stargaze::services::grid_locations(&bounds, 15)
        .into_iter()
        .map(|p| {
            let d = (p.latitude - mid).abs();
            let elevation = if d > 0.012 { 2.0 } else { 60.0 - d * 4000.0 };
            ElevationSample::new(p.latitude, p.longitude, elevation)
        })
        .collect()
}
