//! Multi-criteria suitability scoring for observation points.
//!
//! Each criterion produces a sub-score in `[0, 100]`:
//!
//! - **geographic**: how well the point's bearing from the island centroid
//!   matches the target azimuth (east-side points for eastern targets)
//! - **view**: how close the target sits to the middle of the point's window
//! - **difficulty**: how easy the point is to reach
//! - **light pollution**: how dark the sky is at the point
//!
//! The total is the weighted sum of the four. Every function here is total.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::algorithms::{alignment_score, angular_difference, bearing};
use crate::models::{
    CriterionWeights, Difficulty, GeoPoint, LightPollutionReading, ObservationPoint, ScoreBreakdown,
    ScoredPoint,
};

/// Access cost per difficulty category, on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyCosts {
    #[serde(default = "default_easy_cost")]
    pub easy: f64,
    #[serde(default = "default_medium_cost")]
    pub medium: f64,
    #[serde(default = "default_hard_cost")]
    pub hard: f64,
    #[serde(default = "default_unrated_cost")]
    pub unrated: f64,
}

impl DifficultyCosts {
    pub fn cost(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Unrated => self.unrated,
        }
    }
}

impl Default for DifficultyCosts {
    fn default() -> Self {
        Self {
            easy: default_easy_cost(),
            medium: default_medium_cost(),
            hard: default_hard_cost(),
            unrated: default_unrated_cost(),
        }
    }
}

fn default_easy_cost() -> f64 {
    20.0
}

fn default_medium_cost() -> f64 {
    50.0
}

fn default_hard_cost() -> f64 {
    80.0
}

fn default_unrated_cost() -> f64 {
    50.0
}

/// Tunables of the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub difficulty_costs: DifficultyCosts,
    #[serde(default)]
    pub default_weights: CriterionWeights,
    /// Light-pollution sub-score used when no estimate is available.
    #[serde(default = "default_neutral_light_score")]
    pub neutral_light_pollution_score: f64,
    /// SQM mapped to a light-pollution score of 0.
    #[serde(default = "default_sqm_floor")]
    pub sqm_floor: f64,
    /// SQM mapped to a light-pollution score of 100.
    #[serde(default = "default_sqm_ceiling")]
    pub sqm_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            difficulty_costs: DifficultyCosts::default(),
            default_weights: CriterionWeights::default(),
            neutral_light_pollution_score: default_neutral_light_score(),
            sqm_floor: default_sqm_floor(),
            sqm_ceiling: default_sqm_ceiling(),
        }
    }
}

fn default_neutral_light_score() -> f64 {
    50.0
}

fn default_sqm_floor() -> f64 {
    18.0
}

fn default_sqm_ceiling() -> f64 {
    22.0
}

/// Direction of the object being ranked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetDirection {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Everything shared by all candidates of one ranking.
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    /// Centroid of every loaded observation point.
    pub centroid: GeoPoint,
    pub weights: CriterionWeights,
    pub config: &'a ScoringConfig,
    /// Island-wide stargazing index, copied into each breakdown.
    pub weather_index: Option<f64>,
}

/// Alignment between the target azimuth and the point's bearing from the centroid.
pub fn geographic_score(point: &ObservationPoint, target_azimuth: f64, centroid: GeoPoint) -> f64 {
    let point_bearing = bearing(
        centroid.latitude,
        centroid.longitude,
        point.latitude,
        point.longitude,
    );
    alignment_score(target_azimuth, point_bearing)
}

/// Closeness of the target to the center of the point's view window.
pub fn view_score(point: &ObservationPoint, target_azimuth: f64) -> f64 {
    let half_width = point.view_half_width();
    if half_width <= 0.0 {
        return 100.0;
    }
    let offset = angular_difference(target_azimuth, point.view_center());
    100.0 * (1.0 - offset / half_width).max(0.0)
}

/// Ease of access.
pub fn difficulty_score(point: &ObservationPoint, costs: &DifficultyCosts) -> f64 {
    (100.0 - costs.cost(point.difficulty)).clamp(0.0, 100.0)
}

/// Sky darkness. Higher SQM means a darker sky and a better score.
pub fn light_pollution_score(reading: Option<&LightPollutionReading>, config: &ScoringConfig) -> f64 {
    let span = config.sqm_ceiling - config.sqm_floor;
    match reading {
        Some(r) if span > 0.0 && r.sqm.is_finite() => {
            (100.0 * (r.sqm - config.sqm_floor) / span).clamp(0.0, 100.0)
        }
        _ => config.neutral_light_pollution_score.clamp(0.0, 100.0),
    }
}

/// Score one candidate point against a target.
pub fn score(
    point: &ObservationPoint,
    target: TargetDirection,
    ctx: &ScoringContext<'_>,
    light: Option<&LightPollutionReading>,
) -> ScoreBreakdown {
    let geographic = geographic_score(point, target.azimuth, ctx.centroid);
    let view = view_score(point, target.azimuth);
    let difficulty = difficulty_score(point, &ctx.config.difficulty_costs);
    let light_pollution = light_pollution_score(light, ctx.config);

    let w = &ctx.weights;
    let total = w.location * geographic
        + w.view * view
        + w.difficulty * difficulty
        + w.light_pollution * light_pollution;

    ScoreBreakdown {
        geographic,
        view,
        difficulty,
        light_pollution,
        weather: ctx.weather_index,
        total,
    }
}

/// Score and sort candidates, best first. Equal scores keep input order.
///
/// `light_readings[i]` belongs to `candidates[i]`; missing entries count as
/// unavailable.
pub fn rank(
    candidates: &[&ObservationPoint],
    target: TargetDirection,
    ctx: &ScoringContext<'_>,
    light_readings: &[Option<LightPollutionReading>],
) -> Vec<ScoredPoint> {
    let mut ranked: Vec<ScoredPoint> = candidates
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let light = light_readings.get(i).copied().flatten();
            ScoredPoint::new((*point).clone(), score(point, target, ctx, light.as_ref()))
                .with_light_pollution(light)
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}
