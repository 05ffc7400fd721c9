//! Preference-model input preparation.
//!
//! The pretrained classifier and its feature scaler were fitted together
//! on one fixed feature ordering. This module is the only producer of that
//! vector, so callers cannot invoke the model with features reordered or
//! missing.

use serde::{Deserialize, Serialize};

use crate::features::CandidateFeatures;
use crate::traits::MODEL_FEATURES;

/// Build the classifier input for one candidate.
///
/// Raw (pre-scaling) values in the fitted order: direct distance, routed
/// distance, road distance class, utilization ratio, category rank, demand
/// count, heuristic score.
pub fn model_features(features: &CandidateFeatures, heuristic_score: f64) -> [f64; MODEL_FEATURES] {
    [
        features.distance_direct_m,
        features.distance_routed_m,
        f64::from(features.road_distance_class),
        features.utilization_ratio,
        f64::from(features.category_rank),
        f64::from(features.nearby_demand),
        heuristic_score,
    ]
}

/// Fitted standard-scaler parameters, one mean/scale pair per feature.
///
/// The parameters travel as data (serde) rather than living in ambient
/// state; [`FeatureScaler::identity`] stands in when a model needs no
/// scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    pub mean: [f64; MODEL_FEATURES],
    pub scale: [f64; MODEL_FEATURES],
}

impl FeatureScaler {
    /// A scaler that passes features through unchanged.
    pub fn identity() -> Self {
        Self {
            mean: [0.0; MODEL_FEATURES],
            scale: [1.0; MODEL_FEATURES],
        }
    }

    /// Apply the fitted transform: `(x - mean) / scale` per entry.
    ///
    /// A zero `scale` entry marks a zero-variance column in the training
    /// data; the centered value passes through undivided, as the upstream
    /// scaler does.
    pub fn transform(&self, features: [f64; MODEL_FEATURES]) -> [f64; MODEL_FEATURES] {
        let mut scaled = [0.0; MODEL_FEATURES];
        for (i, value) in features.iter().enumerate() {
            let centered = value - self.mean[i];
            scaled[i] = if self.scale[i] == 0.0 {
                centered
            } else {
                centered / self.scale[i]
            };
        }
        scaled
    }
}
