//! Collaborator contracts for the selection pipeline.
//!
//! The pipeline never reaches for ambient state; the routing service and
//! the pretrained classifier are injected through these traits.

use crate::polyline::Polyline;
use crate::records::Coordinate;

/// Number of entries in the preference-model feature vector.
pub const MODEL_FEATURES: usize = 7;

/// A successfully routed leg between two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadRoute {
    /// Travel distance along the route, in meters. Always finite and
    /// non-negative; adapters must reject anything else as malformed.
    pub distance_m: f64,
    /// The path geometry, requester first.
    pub geometry: Polyline,
}

/// Failure modes of a routed-distance lookup.
///
/// None of these are fatal to the pipeline: the feature builder substitutes
/// the direct-distance fallback and moves on.
#[derive(Debug)]
pub enum RouteLookupError {
    /// Transport failure: connect error, timeout, non-success status, or an
    /// undecodable body.
    Http(reqwest::Error),
    /// The service answered but carried no route.
    NoRoute,
    /// The response decoded but violated the contract (e.g. a negative or
    /// non-finite distance).
    Malformed(String),
}

impl From<reqwest::Error> for RouteLookupError {
    fn from(err: reqwest::Error) -> Self {
        RouteLookupError::Http(err)
    }
}

/// Provides routed travel distance and path geometry between coordinates.
///
/// Treated as idempotent and retryless: the pipeline issues exactly one
/// call per candidate and handles failure locally.
pub trait RoadDistanceProvider {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RoadRoute, RouteLookupError>;
}

/// A pretrained classifier estimating how likely a candidate is to be the
/// chosen ODP.
///
/// The input is the fixed-order feature vector built by
/// [`model_features`](crate::model::model_features), already passed through
/// the fitted [`FeatureScaler`](crate::model::FeatureScaler). Scaler and
/// classifier were fitted together on that exact ordering; the fixed-size
/// array keeps callers from reordering or resizing it.
pub trait PreferenceModel {
    /// Probability in [0, 1] that this candidate would be chosen,
    /// independent of the other candidates in the batch.
    fn choose_probability(&self, features: &[f64; MODEL_FEATURES]) -> f64;
}
