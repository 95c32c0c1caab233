use serde::{Deserialize, Serialize};

use super::observation_point::ObservationPoint;
use super::weather::LightPollutionReading;

/// Relative importance of the four scoring criteria. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionWeights {
    pub location: f64,
    pub view: f64,
    pub difficulty: f64,
    pub light_pollution: f64,
}

impl CriterionWeights {
    pub fn as_array(&self) -> [f64; 4] {
        [self.location, self.view, self.difficulty, self.light_pollution]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Scale so the weights sum to 1. Degenerate input falls back to equal weights.
    pub fn normalized(&self) -> Self {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 || self.as_array().iter().any(|w| *w < 0.0) {
            return Self {
                location: 0.25,
                view: 0.25,
                difficulty: 0.25,
                light_pollution: 0.25,
            };
        }
        Self {
            location: self.location / total,
            view: self.view / total,
            difficulty: self.difficulty / total,
            light_pollution: self.light_pollution / total,
        }
    }
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            location: 0.4,
            view: 0.4,
            difficulty: 0.2,
            light_pollution: 0.0,
        }
    }
}

/// Where the weights used for a ranking came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSource {
    Default,
    /// Derived from the caller's pairwise comparisons.
    User,
    /// Caller's comparisons were rejected; defaults used instead.
    Fallback,
}

/// Per-criterion sub-scores, each in `[0, 100]`, and the weighted total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub geographic: f64,
    pub view: f64,
    pub difficulty: f64,
    pub light_pollution: f64,
    /// Island-wide stargazing index. Reported for transparency, not weighted.
    pub weather: Option<f64>,
    pub total: f64,
}

/// An observation point paired with its score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub point: ObservationPoint,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Sky brightness estimate that fed the light-pollution sub-score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_pollution: Option<LightPollutionReading>,
}

impl ScoredPoint {
    pub fn new(point: ObservationPoint, breakdown: ScoreBreakdown) -> Self {
        Self {
            score: breakdown.total,
            point,
            breakdown,
            light_pollution: None,
        }
    }

    pub fn with_light_pollution(mut self, reading: Option<LightPollutionReading>) -> Self {
        self.light_pollution = reading;
        self
    }
}
