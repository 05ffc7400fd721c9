//! Min-max normalization of feature columns.
//!
//! Features arrive in incompatible units (meters, ratios, counts); scoring
//! needs them on a common [0,1] scale oriented so that 1.0 is always "more
//! attractive". Columns are normalized independently across the current
//! candidate set.

use crate::features::CandidateFeatures;

/// Which end of a raw column maps to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Lower raw values are preferable (distances, utilization).
    SmallerIsBetter,
    /// Higher raw values are preferable (demand, category rank).
    LargerIsBetter,
}

/// Substitute for every value of a column with zero spread. Keeps the
/// column score-neutral instead of dividing by zero.
const DEGENERATE_VALUE: f64 = 0.5;

/// The five scoring features of one candidate, each rescaled to [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedFeatures {
    pub routed_distance: f64,
    pub direct_distance: f64,
    pub utilization: f64,
    pub demand: f64,
    pub category: f64,
}

/// Min-max rescale one column to [0,1].
///
/// Inverted (`1 - scaled`) for smaller-is-better columns so the best raw
/// value always lands on 1.0. A column where every value is equal maps to
/// 0.5 throughout.
pub fn normalize_column(values: &[f64], orientation: Orientation) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &value| {
            (min.min(value), max.max(value))
        });

    if max - min == 0.0 {
        return vec![DEGENERATE_VALUE; values.len()];
    }

    values
        .iter()
        .map(|&value| {
            let scaled = (value - min) / (max - min);
            match orientation {
                Orientation::SmallerIsBetter => 1.0 - scaled,
                Orientation::LargerIsBetter => scaled,
            }
        })
        .collect()
}

/// Normalize the five scoring columns across the candidate set.
///
/// Distances and utilization are smaller-is-better; demand and category
/// rank are larger-is-better (denser demand and healthier categories are
/// preferable). Output order matches the input order.
pub fn normalize_features(features: &[CandidateFeatures]) -> Vec<NormalizedFeatures> {
    let column = |extract: fn(&CandidateFeatures) -> f64, orientation| {
        let values: Vec<f64> = features.iter().map(extract).collect();
        normalize_column(&values, orientation)
    };

    let routed = column(|f| f.distance_routed_m, Orientation::SmallerIsBetter);
    let direct = column(|f| f.distance_direct_m, Orientation::SmallerIsBetter);
    let utilization = column(|f| f.utilization_ratio, Orientation::SmallerIsBetter);
    let demand = column(|f| f64::from(f.nearby_demand), Orientation::LargerIsBetter);
    let category = column(|f| f64::from(f.category_rank), Orientation::LargerIsBetter);

    (0..features.len())
        .map(|i| NormalizedFeatures {
            routed_distance: routed[i],
            direct_distance: direct[i],
            utilization: utilization[i],
            demand: demand[i],
            category: category[i],
        })
        .collect()
}
