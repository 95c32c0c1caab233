//! Pure numerical building blocks: spherical geometry and AHP weighting.

pub mod ahp;
pub mod geodesy;

pub use ahp::{consistency_ratio, derive_weights, PairwiseComparisons};
pub use geodesy::{alignment_score, angular_difference, bearing, haversine_distance_m, normalize_azimuth};
