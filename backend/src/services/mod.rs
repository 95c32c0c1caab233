//! Service layer for recommendation logic.
//!
//! The scoring, visibility and terrain modules are pure functions over
//! in-memory data. [`recommendation::StargazeService`] composes them with the
//! coordinate projector and light-pollution estimator; the weather module
//! defines the async weather source seam and its TTL-cached wrapper.

pub mod light_pollution;
pub mod recommendation;
pub mod scoring;
pub mod sky;
pub mod terrain;
pub mod visibility;
pub mod weather;

pub use light_pollution::{HeuristicEstimator, LightPollutionConfig, LightPollutionEstimator};
pub use recommendation::{Recommendation, ResolvedWeights, StargazeService};
pub use scoring::{ScoringConfig, TargetDirection};
pub use sky::{equipment_for, PointSky, TargetInfo};
pub use terrain::{analyze as analyze_terrain, grid_locations, TerrainConfig};
pub use visibility::{can_observe, filter_observable};
pub use weather::{CachedWeatherSource, WeatherSource};
