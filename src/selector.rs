//! Candidate scoring and selection pipeline.
//!
//! Turns the raw ODP table into a ranked, reproducible choice for one
//! requester: radius filter, per-candidate feature derivation, capacity
//! and category eligibility, column normalization, heuristic scoring, the
//! learned preference probability, and the final blended ranking.

use std::cmp::Ordering;

use tracing::debug;

use crate::features::{build_features, CandidateFeatures};
use crate::haversine::haversine_m;
use crate::model::{model_features, FeatureScaler};
use crate::normalize::{normalize_features, NormalizedFeatures};
use crate::records::{Category, Coordinate, OdpRecord, PlaceRecord};
use crate::scoring::{heuristic_score, ScoreWeights};
use crate::traits::{PreferenceModel, RoadDistanceProvider};

/// Search radius shared by the candidate filter and demand counting.
pub const DEFAULT_RADIUS_M: f64 = 250.0;

#[derive(Debug, Clone)]
pub struct SelectorOptions {
    /// Candidates beyond this great-circle distance are not considered;
    /// customers beyond it do not count toward a candidate's demand.
    pub radius_m: f64,
    /// Weights of the heuristic score.
    pub weights: ScoreWeights,
    /// Share of the heuristic score in the combined score.
    pub heuristic_weight: f64,
    /// Share of the learned probability in the combined score.
    pub model_weight: f64,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            radius_m: DEFAULT_RADIUS_M,
            weights: ScoreWeights::default(),
            heuristic_weight: 0.6,
            model_weight: 0.4,
        }
    }
}

/// One fully annotated candidate in the final ranking.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: OdpRecord,
    pub features: CandidateFeatures,
    pub normalized: NormalizedFeatures,
    pub heuristic_score: f64,
    pub choose_probability: f64,
    pub combined_score: f64,
    /// True for exactly one candidate per ranking.
    pub selected: bool,
}

/// The annotated candidate set, best candidate first.
#[derive(Debug, Clone)]
pub struct Ranking {
    candidates: Vec<ScoredCandidate>,
}

impl Ranking {
    /// All candidates, descending by combined score.
    pub fn candidates(&self) -> &[ScoredCandidate] {
        &self.candidates
    }

    /// The candidate flagged as selected.
    pub fn selected(&self) -> Option<&ScoredCandidate> {
        self.candidates.iter().find(|candidate| candidate.selected)
    }

    /// Consumes the ranking and returns the owned candidates.
    pub fn into_candidates(self) -> Vec<ScoredCandidate> {
        self.candidates
    }
}

/// Terminal state of one selection query.
///
/// The empty outcomes are valid results, not errors: they tell the caller
/// why no ODP could be assigned.
#[derive(Debug, Clone)]
pub enum SelectionOutcome {
    /// At least one eligible candidate was ranked.
    Ranked(Ranking),
    /// No ODP within the search radius.
    EmptyRadius,
    /// Every in-radius ODP was saturated or in the critical category.
    NoEligibleCandidate,
}

impl SelectionOutcome {
    /// The ranking, if the pipeline produced one.
    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            SelectionOutcome::Ranked(ranking) => Some(ranking),
            _ => None,
        }
    }
}

/// Rank the ODPs around a requested installation address and pick the one
/// to assign.
///
/// Routed-distance lookups are issued once per in-radius candidate, before
/// the eligibility stage. The preference model is only invoked for
/// candidates that survive both filter stages; when either stage empties
/// the set, the corresponding outcome is returned and no collaborator is
/// called beyond that point.
pub fn select<R, M>(
    requester: Coordinate,
    odps: &[OdpRecord],
    customers: &[PlaceRecord],
    roads: &R,
    model: &M,
    scaler: &FeatureScaler,
    options: SelectorOptions,
) -> SelectionOutcome
where
    R: RoadDistanceProvider,
    M: PreferenceModel,
{
    // Stage 1: radius filter on great-circle distance.
    let in_radius: Vec<(&OdpRecord, f64)> = odps
        .iter()
        .map(|record| (record, haversine_m(requester, record.location())))
        .filter(|(_, distance)| *distance <= options.radius_m)
        .collect();

    if in_radius.is_empty() {
        debug!("no ODP within {} m of requester", options.radius_m);
        return SelectionOutcome::EmptyRadius;
    }
    debug!("{} of {} ODPs within {} m", in_radius.len(), odps.len(), options.radius_m);

    // Feature derivation, one independent transform per candidate. The
    // routed lookups happen here, for every in-radius candidate.
    let candidates: Vec<(&OdpRecord, CandidateFeatures)> = in_radius
        .into_iter()
        .map(|(record, distance_direct_m)| {
            let features = build_features(
                record,
                requester,
                distance_direct_m,
                customers,
                options.radius_m,
                roads,
            );
            (record, features)
        })
        .collect();

    // Stage 2: drop saturated and critical-category candidates.
    let eligible: Vec<(&OdpRecord, CandidateFeatures)> = candidates
        .into_iter()
        .filter(|(record, features)| {
            features.utilization_ratio < 1.0 && record.category != Category::Critical
        })
        .collect();

    if eligible.is_empty() {
        debug!("all in-radius ODPs are saturated or critical");
        return SelectionOutcome::NoEligibleCandidate;
    }

    // Columns are normalized across the eligible set only.
    let (records, features): (Vec<&OdpRecord>, Vec<CandidateFeatures>) =
        eligible.into_iter().unzip();
    let normalized = normalize_features(&features);

    let mut scored: Vec<ScoredCandidate> = records
        .into_iter()
        .zip(features)
        .zip(normalized)
        .map(|((record, features), normalized)| {
            let heuristic = heuristic_score(&normalized, &options.weights);
            let vector = scaler.transform(model_features(&features, heuristic));
            let probability = model.choose_probability(&vector);
            let combined = options.heuristic_weight * heuristic + options.model_weight * probability;

            ScoredCandidate {
                record: record.clone(),
                features,
                normalized,
                heuristic_score: heuristic,
                choose_probability: probability,
                combined_score: combined,
                selected: false,
            }
        })
        .collect();

    scored.sort_by(rank_order);
    let ranked = scored.len();
    if let Some(best) = scored.first_mut() {
        best.selected = true;
        debug!(
            "selected {} (combined score {:.3}) out of {} candidates",
            best.record.name, best.combined_score, ranked
        );
    }

    SelectionOutcome::Ranked(Ranking { candidates: scored })
}

/// Total order for the final ranking: descending combined score, ties
/// broken by ascending routed distance, then by name. Makes the ranking
/// and the selected candidate independent of input order.
fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.combined_score
        .total_cmp(&a.combined_score)
        .then_with(|| {
            a.features
                .distance_routed_m
                .total_cmp(&b.features.distance_routed_m)
        })
        .then_with(|| a.record.name.cmp(&b.record.name))
}
