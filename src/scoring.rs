//! Heuristic scoring of normalized candidate features.

use crate::normalize::NormalizedFeatures;

/// Weights of the five-feature convex combination behind the heuristic
/// score. Fixed configuration, not learned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    pub routed_distance: f64,
    pub direct_distance: f64,
    pub utilization: f64,
    pub demand: f64,
    pub category: f64,
}

impl Default for ScoreWeights {
    /// The distance-dominant policy: routed and direct distance carry 60%
    /// of the score (physical build cost), with a secondary penalty for
    /// saturated or unhealthy ODPs.
    fn default() -> Self {
        Self {
            routed_distance: 0.45,
            direct_distance: 0.15,
            utilization: 0.20,
            demand: 0.10,
            category: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Sum of the five weights. 1.0 keeps the score a convex combination
    /// of features that are themselves in [0,1].
    pub fn sum(&self) -> f64 {
        self.routed_distance + self.direct_distance + self.utilization + self.demand + self.category
    }
}

/// Weighted sum of the normalized features.
pub fn heuristic_score(normalized: &NormalizedFeatures, weights: &ScoreWeights) -> f64 {
    weights.routed_distance * normalized.routed_distance
        + weights.direct_distance * normalized.direct_distance
        + weights.utilization * normalized.utilization
        + weights.demand * normalized.demand
        + weights.category * normalized.category
}
