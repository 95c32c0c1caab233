//! Per-point sky brightness estimates.
//!
//! No free high-resolution light-pollution feed covers the island, so the
//! default [`HeuristicEstimator`] models sky quality from a site-wide base
//! reading, adjusted by keywords in the point's name and a small
//! deterministic per-coordinate offset. Anything that can produce a
//! [`LightPollutionReading`] may stand in via [`LightPollutionEstimator`].

use serde::{Deserialize, Serialize};

use crate::models::LightPollutionReading;

/// Source of per-point sky brightness.
pub trait LightPollutionEstimator: Send + Sync {
    /// Estimate for a point, `None` when unavailable.
    fn estimate(&self, name: &str, latitude: f64, longitude: f64) -> Option<LightPollutionReading>;
}

/// SQM adjustment applied when a point name contains any of `keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordModifier {
    pub keywords: Vec<String>,
    pub delta: f64,
}

impl KeywordModifier {
    fn new(keywords: &[&str], delta: f64) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            delta,
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightPollutionConfig {
    /// Island-wide baseline, mag/arcsec².
    #[serde(default = "default_base_sqm")]
    pub base_sqm: f64,
    /// Checked in order; the first match applies.
    #[serde(default = "default_modifiers")]
    pub modifiers: Vec<KeywordModifier>,
    /// SQM per unit of coordinate offset.
    #[serde(default = "default_jitter_scale")]
    pub jitter_scale: f64,
    #[serde(default = "default_min_sqm")]
    pub min_sqm: f64,
    #[serde(default = "default_max_sqm")]
    pub max_sqm: f64,
}

impl Default for LightPollutionConfig {
    fn default() -> Self {
        Self {
            base_sqm: default_base_sqm(),
            modifiers: default_modifiers(),
            jitter_scale: default_jitter_scale(),
            min_sqm: default_min_sqm(),
            max_sqm: default_max_sqm(),
        }
    }
}

fn default_base_sqm() -> f64 {
    20.45
}

fn default_modifiers() -> Vec<KeywordModifier> {
    vec![
        KeywordModifier::new(&["山顶"], 0.15),
        KeywordModifier::new(&["山腰"], 0.08),
        KeywordModifier::new(&["居民", "村", "宿"], -0.45),
        KeywordModifier::new(&["码头", "游客中心"], -0.35),
        KeywordModifier::new(&["湖边", "湿地"], -0.15),
        KeywordModifier::new(&["观景台"], -0.05),
    ]
}

fn default_jitter_scale() -> f64 {
    0.01
}

fn default_min_sqm() -> f64 {
    18.0
}

fn default_max_sqm() -> f64 {
    22.0
}

/// Name- and coordinate-based sky quality model.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEstimator {
    config: LightPollutionConfig,
}

impl HeuristicEstimator {
    pub fn new(config: LightPollutionConfig) -> Self {
        Self { config }
    }

    /// Unrounded SQM for a point.
    fn raw_sqm(&self, name: &str, latitude: f64, longitude: f64) -> f64 {
        let mut sqm = self.config.base_sqm;

        if let Some(modifier) = self.config.modifiers.iter().find(|m| m.matches(name)) {
            sqm += modifier.delta;
        }

        // Stable per-point offset in [-5, 5) scaled units
        let geo_hash = (latitude * 1000.0 + longitude * 1000.0).rem_euclid(10.0);
        sqm += (geo_hash - 5.0) * self.config.jitter_scale;

        sqm.clamp(self.config.min_sqm, self.config.max_sqm)
    }
}

impl LightPollutionEstimator for HeuristicEstimator {
    fn estimate(&self, name: &str, latitude: f64, longitude: f64) -> Option<LightPollutionReading> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        let sqm = self.raw_sqm(name, latitude, longitude);
        Some(LightPollutionReading {
            sqm: round2(sqm),
            bortle: sqm_to_bortle(sqm),
            radiance: sqm_to_radiance(sqm),
        })
    }
}

/// Bortle class for a sky quality reading.
pub fn sqm_to_bortle(sqm: f64) -> u8 {
    const THRESHOLDS: [(f64, u8); 8] = [
        (21.99, 1),
        (21.89, 2),
        (21.69, 3),
        (20.49, 4),
        (19.50, 5),
        (18.94, 6),
        (18.38, 7),
        (17.80, 8),
    ];
    THRESHOLDS
        .iter()
        .find(|(min, _)| sqm >= *min)
        .map(|(_, class)| *class)
        .unwrap_or(9)
}

/// Approximate artificial radiance in 10^-9 W/cm²/sr, rounded to 2 decimals.
pub fn sqm_to_radiance(sqm: f64) -> f64 {
    round2(10f64.powf((26.2 - sqm) / 2.5) / 1000.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
