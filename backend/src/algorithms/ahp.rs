//! Analytic Hierarchy Process weight derivation.
//!
//! A user expresses preferences as six pairwise ratios between the four scoring
//! criteria. The ratios populate a 4x4 reciprocal comparison matrix whose
//! priority vector (column-normalization method) becomes the criterion weights.
//!
//! Criterion order in the matrix is location, view, difficulty, light pollution.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorContext, StargazeError, StargazeResult};
use crate::models::CriterionWeights;

/// Number of criteria compared.
pub const CRITERIA_COUNT: usize = 4;

/// Saaty random consistency index for a 4x4 matrix.
const RANDOM_INDEX_4: f64 = 0.90;

/// Reciprocal comparison matrix.
pub type ComparisonMatrix = [[f64; CRITERIA_COUNT]; CRITERIA_COUNT];

/// Pairwise preference ratios, each typically in `[1/9, 9]`.
///
/// A value above 1 means the first criterion of the pair matters more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairwiseComparisons {
    pub location_vs_view: f64,
    pub location_vs_difficulty: f64,
    pub view_vs_difficulty: f64,
    pub location_vs_light_pollution: f64,
    pub view_vs_light_pollution: f64,
    pub difficulty_vs_light_pollution: f64,
}

impl PairwiseComparisons {
    /// All criteria equally important.
    pub fn uniform() -> Self {
        Self::from_ratios([1.0; 6])
    }

    /// Build from ratios in the canonical pair order.
    pub fn from_ratios(ratios: [f64; 6]) -> Self {
        Self {
            location_vs_view: ratios[0],
            location_vs_difficulty: ratios[1],
            view_vs_difficulty: ratios[2],
            location_vs_light_pollution: ratios[3],
            view_vs_light_pollution: ratios[4],
            difficulty_vs_light_pollution: ratios[5],
        }
    }

    /// `(row, column, ratio, label)` for every upper-triangle cell.
    fn cells(&self) -> [(usize, usize, f64, &'static str); 6] {
        [
            (0, 1, self.location_vs_view, "location_vs_view"),
            (0, 2, self.location_vs_difficulty, "location_vs_difficulty"),
            (1, 2, self.view_vs_difficulty, "view_vs_difficulty"),
            (0, 3, self.location_vs_light_pollution, "location_vs_light_pollution"),
            (1, 3, self.view_vs_light_pollution, "view_vs_light_pollution"),
            (2, 3, self.difficulty_vs_light_pollution, "difficulty_vs_light_pollution"),
        ]
    }

    /// Build the reciprocal comparison matrix.
    ///
    /// # Errors
    /// `InvalidInput` if any ratio is zero, negative or not finite.
    pub fn matrix(&self) -> StargazeResult<ComparisonMatrix> {
        let mut m = [[1.0; CRITERIA_COUNT]; CRITERIA_COUNT];
        for (i, j, ratio, label) in self.cells() {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(StargazeError::invalid_input(
                    format!("pairwise ratio must be a positive number, got {}", ratio),
                    ErrorContext::new("build_comparison_matrix")
                        .with_entity("comparison")
                        .with_entity_id(label),
                ));
            }
            m[i][j] = ratio;
            m[j][i] = 1.0 / ratio;
        }
        Ok(m)
    }
}

impl Default for PairwiseComparisons {
    fn default() -> Self {
        Self::uniform()
    }
}

/// Priority vector of a comparison matrix by column normalization.
fn priority_vector(m: &ComparisonMatrix) -> [f64; CRITERIA_COUNT] {
    let mut column_sums = [0.0; CRITERIA_COUNT];
    for row in m {
        for (j, value) in row.iter().enumerate() {
            column_sums[j] += value;
        }
    }

    let mut weights = [0.0; CRITERIA_COUNT];
    for (i, row) in m.iter().enumerate() {
        let normalized_sum: f64 = row
            .iter()
            .zip(column_sums.iter())
            .map(|(value, sum)| value / sum)
            .sum();
        weights[i] = normalized_sum / CRITERIA_COUNT as f64;
    }
    weights
}

/// Derive criterion weights from pairwise comparisons.
///
/// # Errors
/// `InvalidInput` on a zero, negative or non-finite ratio.
pub fn derive_weights(comparisons: &PairwiseComparisons) -> StargazeResult<CriterionWeights> {
    let m = comparisons.matrix()?;
    let [location, view, difficulty, light_pollution] = priority_vector(&m);
    Ok(CriterionWeights {
        location,
        view,
        difficulty,
        light_pollution,
    })
}

/// Saaty consistency ratio of the comparisons. Values below 0.1 are
/// conventionally considered acceptable.
pub fn consistency_ratio(comparisons: &PairwiseComparisons) -> StargazeResult<f64> {
    let m = comparisons.matrix()?;
    let w = priority_vector(&m);

    let lambda_max: f64 = m
        .iter()
        .zip(w.iter())
        .map(|(row, wi)| {
            let weighted: f64 = row.iter().zip(w.iter()).map(|(a, wj)| a * wj).sum();
            weighted / wi
        })
        .sum::<f64>()
        / CRITERIA_COUNT as f64;

    let n = CRITERIA_COUNT as f64;
    let consistency_index = (lambda_max - n) / (n - 1.0);
    Ok((consistency_index / RANDOM_INDEX_4).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_uniform_comparisons_give_equal_weights() {
        let w = derive_weights(&PairwiseComparisons::uniform()).unwrap();
        for value in w.as_array() {
            assert!((value - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_matrix_is_reciprocal() {
        let c = PairwiseComparisons::from_ratios([3.0, 5.0, 2.0, 7.0, 4.0, 0.5]);
        let m = c.matrix().unwrap();
        for i in 0..CRITERIA_COUNT {
            assert_eq!(m[i][i], 1.0);
            for j in 0..CRITERIA_COUNT {
                assert!((m[i][j] * m[j][i] - 1.0).abs() < 1e-12);
            }
        }
        assert_eq!(m[0][1], 3.0);
        assert_eq!(m[3][2], 2.0);
    }

    #[test]
    fn test_preferred_criterion_gets_largest_weight() {
        // location strongly preferred over everything
        let c = PairwiseComparisons::from_ratios([5.0, 5.0, 1.0, 5.0, 1.0, 1.0]);
        let w = derive_weights(&c).unwrap();
        assert!(w.location > w.view);
        assert!(w.location > w.difficulty);
        assert!(w.location > w.light_pollution);
        assert!((w.view - w.difficulty).abs() < 1e-12);
    }

    #[test]
    fn test_zero_ratio_rejected() {
        let c = PairwiseComparisons::from_ratios([1.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        let err = derive_weights(&c).unwrap_err();
        assert!(matches!(err, StargazeError::InvalidInput { .. }));
        assert_eq!(
            err.context().and_then(|ctx| ctx.entity_id.as_deref()),
            Some("location_vs_difficulty")
        );
    }

    #[test]
    fn test_negative_and_nan_ratios_rejected() {
        let negative = PairwiseComparisons::from_ratios([1.0, 1.0, -2.0, 1.0, 1.0, 1.0]);
        assert!(derive_weights(&negative).is_err());
        let nan = PairwiseComparisons::from_ratios([1.0, 1.0, 1.0, f64::NAN, 1.0, 1.0]);
        assert!(derive_weights(&nan).is_err());
    }

    #[test]
    fn test_consistent_matrix_has_zero_ratio() {
        // Weights 4:2:1:1 expressed exactly
        let c = PairwiseComparisons::from_ratios([2.0, 4.0, 2.0, 4.0, 2.0, 1.0]);
        let cr = consistency_ratio(&c).unwrap();
        assert!(cr < 1e-9, "cr = {}", cr);
        let w = derive_weights(&c).unwrap();
        assert!((w.location - 0.5).abs() < 1e-9);
        assert!((w.view - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_inconsistent_matrix_flagged() {
        // location > view > difficulty, but difficulty > location
        let c = PairwiseComparisons::from_ratios([9.0, 1.0 / 9.0, 9.0, 1.0, 1.0, 1.0]);
        assert!(consistency_ratio(&c).unwrap() > 0.1);
    }

    proptest! {
        #[test]
        fn prop_weights_sum_to_one(ratios in proptest::array::uniform6(1.0f64 / 9.0..9.0)) {
            let w = derive_weights(&PairwiseComparisons::from_ratios(ratios)).unwrap();
            prop_assert!((w.sum() - 1.0).abs() < 1e-9);
            for value in w.as_array() {
                prop_assert!(value > 0.0);
            }
        }
    }
}
