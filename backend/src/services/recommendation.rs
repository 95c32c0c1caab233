//! Recommendation orchestration.
//!
//! [`StargazeService`] owns the loaded observation points and the
//! collaborators that the pure scoring code needs: a coordinate projector and
//! a light-pollution estimator. A recommendation runs in fixed steps:
//!
//! 1. resolve the target to azimuth/altitude at the requested time
//! 2. reject targets at or below the horizon
//! 3. keep the points whose view window covers the azimuth
//! 4. resolve weights (defaults, user AHP, or defaults on bad input)
//! 5. gather light-pollution readings, score, and rank
//!
//! Weather is an island-wide input and is attached to the result rather than
//! weighted into each point's total.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use crate::algorithms::{consistency_ratio, derive_weights, PairwiseComparisons};
use crate::astro::{CatalogProjector, CoordinateProjector};
use crate::config::AppConfig;
use crate::error::{NoRecommendation, StargazeResult};
use crate::models::{
    CatalogEntry, CelestialPosition, CriterionWeights, GeoPoint, LightPollutionReading,
    ObservationPoint, ScoredPoint, StargazingConditions, WeatherSnapshot, WeightSource,
};
use crate::services::light_pollution::{HeuristicEstimator, LightPollutionEstimator};
use crate::services::scoring::{rank, ScoringConfig, ScoringContext, TargetDirection};
use crate::services::sky::{self, PointSky, TargetInfo};
use crate::services::visibility::filter_observable;
use crate::services::weather::conditions;

/// Weights chosen for one ranking and where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedWeights {
    pub weights: CriterionWeights,
    pub source: WeightSource,
    /// Saaty consistency ratio of the user's comparisons.
    pub consistency_ratio: Option<f64>,
}

/// Ranked observation points for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub target: CelestialPosition,
    pub best: ScoredPoint,
    /// Every covering point, best first.
    pub ranking: Vec<ScoredPoint>,
    pub weights: CriterionWeights,
    pub weight_source: WeightSource,
    pub consistency_ratio: Option<f64>,
    pub conditions: Option<StargazingConditions>,
}

/// Observation-point recommendations and sky queries for one site.
#[derive(Clone)]
pub struct StargazeService {
    points: Vec<ObservationPoint>,
    centroid: GeoPoint,
    projector: Arc<dyn CoordinateProjector>,
    estimator: Arc<dyn LightPollutionEstimator>,
    scoring: ScoringConfig,
}

impl StargazeService {
    /// Build a service over `points`.
    ///
    /// Points are taken in load order; a later point reusing an earlier name is
    /// dropped. `fallback_center` stands in for the centroid when there are
    /// no points.
    pub fn new(
        points: Vec<ObservationPoint>,
        projector: Arc<dyn CoordinateProjector>,
        estimator: Arc<dyn LightPollutionEstimator>,
        scoring: ScoringConfig,
        fallback_center: GeoPoint,
    ) -> Self {
        let mut seen = HashSet::new();
        let points: Vec<ObservationPoint> = points
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.name.clone());
                if !fresh {
                    log::warn!("Duplicate observation point '{}' ignored", p.name);
                }
                fresh
            })
            .collect();

        let centroid = GeoPoint::centroid(points.iter().map(|p| p.location())).unwrap_or(fallback_center);

        Self {
            points,
            centroid,
            projector,
            estimator,
            scoring,
        }
    }

    /// Service using the built-in projector and light-pollution heuristic.
    pub fn from_config(points: Vec<ObservationPoint>, config: &AppConfig) -> Self {
        let site = config.site.location();
        Self::new(
            points,
            Arc::new(CatalogProjector::new(site)),
            Arc::new(HeuristicEstimator::new(config.light_pollution.clone())),
            config.scoring.clone(),
            site,
        )
    }

    pub fn points(&self) -> &[ObservationPoint] {
        &self.points
    }

    pub fn point(&self, name: &str) -> Option<&ObservationPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    pub fn centroid(&self) -> GeoPoint {
        self.centroid
    }

    pub fn projector(&self) -> &dyn CoordinateProjector {
        self.projector.as_ref()
    }

    /// Pick the weights for a ranking.
    ///
    /// Comparisons that fail validation fall back to the configured defaults
    /// instead of failing the request.
    pub fn resolve_weights(&self, comparisons: Option<&PairwiseComparisons>) -> ResolvedWeights {
        let defaults = self.scoring.default_weights.normalized();
        let Some(comparisons) = comparisons else {
            return ResolvedWeights {
                weights: defaults,
                source: WeightSource::Default,
                consistency_ratio: None,
            };
        };

        match derive_weights(comparisons) {
            Ok(weights) => ResolvedWeights {
                weights,
                source: WeightSource::User,
                consistency_ratio: consistency_ratio(comparisons).ok(),
            },
            Err(e) => {
                log::warn!("Rejected pairwise comparisons, using default weights: {}", e);
                ResolvedWeights {
                    weights: defaults,
                    source: WeightSource::Fallback,
                    consistency_ratio: None,
                }
            }
        }
    }

    /// Rank observation points for `target_name`.
    ///
    /// # Errors
    /// `NotFound` when the target is unknown, below the horizon, or outside
    /// every point's view window.
    pub fn recommend(
        &self,
        target_name: &str,
        at: Option<DateTime<Utc>>,
        comparisons: Option<&PairwiseComparisons>,
        weather: Option<&WeatherSnapshot>,
    ) -> StargazeResult<Recommendation> {
        let at = at.unwrap_or_else(Utc::now);

        let target = self
            .projector
            .resolve(target_name, at)
            .ok_or_else(|| NoRecommendation::UnknownTarget(target_name.to_string()))?;

        if !target.is_above_horizon() {
            return Err(NoRecommendation::BelowHorizon {
                target: target.name.clone(),
                altitude: target.altitude,
            }
            .into());
        }

        let candidates = filter_observable(&self.points, target.azimuth);
        if candidates.is_empty() {
            return Err(NoRecommendation::NoCoveringPoint {
                target: target.name.clone(),
                azimuth: target.azimuth,
            }
            .into());
        }

        let resolved = self.resolve_weights(comparisons);
        let light: Vec<Option<LightPollutionReading>> = candidates
            .iter()
            .map(|p| self.estimator.estimate(&p.name, p.latitude, p.longitude))
            .collect();
        let assessment = weather.cloned().map(conditions);

        let ctx = ScoringContext {
            centroid: self.centroid,
            weights: resolved.weights,
            config: &self.scoring,
            weather_index: assessment.as_ref().map(|c| c.stargazing_score),
        };
        let direction = TargetDirection {
            azimuth: target.azimuth,
            altitude: target.altitude,
        };
        let ranking = rank(&candidates, direction, &ctx, &light);

        // candidates is non-empty, so the ranking is too
        let best = ranking[0].clone();

        log::info!(
            "Recommended '{}' for {} (az {:.1}°, alt {:.1}°) out of {} candidates",
            best.point.name,
            target.name,
            target.azimuth,
            target.altitude,
            ranking.len()
        );

        Ok(Recommendation {
            target,
            best,
            ranking,
            weights: resolved.weights,
            weight_source: resolved.source,
            consistency_ratio: resolved.consistency_ratio,
            conditions: assessment,
        })
    }

    /// Every resolvable object at or above `min_altitude`, highest first.
    pub fn visible_objects(&self, at: Option<DateTime<Utc>>, min_altitude: f64) -> Vec<CelestialPosition> {
        sky::visible_objects(self.projector(), at.unwrap_or_else(Utc::now), min_altitude)
    }

    /// Position and equipment advice for one object.
    pub fn target_info(&self, name: &str, at: Option<DateTime<Utc>>) -> StargazeResult<TargetInfo> {
        sky::target_info(self.projector(), name, at.unwrap_or_else(Utc::now))
            .ok_or_else(|| NoRecommendation::UnknownTarget(name.to_string()).into())
    }

    /// Objects currently in view from a named point.
    pub fn point_sky(&self, point_name: &str, at: Option<DateTime<Utc>>) -> StargazeResult<PointSky> {
        let point = self
            .point(point_name)
            .ok_or_else(|| NoRecommendation::UnknownPoint(point_name.to_string()))?;
        Ok(sky::point_sky(self.projector(), point, at.unwrap_or_else(Utc::now)))
    }

    /// All known objects, brightest first.
    pub fn catalog(&self) -> Vec<CatalogEntry> {
        sky::catalog_by_magnitude(self.projector())
    }
}
