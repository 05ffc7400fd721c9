//! Per-candidate scoring features.
//!
//! Each candidate's features are derived independently from fields that are
//! already known: one transform per record, nothing recomputed once set.

use rayon::prelude::*;
use tracing::warn;

use crate::haversine::haversine_m;
use crate::polyline::Polyline;
use crate::records::{Coordinate, OdpRecord, PlaceRecord};
use crate::traits::RoadDistanceProvider;

/// Multiplier applied to the direct distance when the routed lookup fails.
///
/// The deployed scoring policy fixed this approximation at 1.3; ranked
/// output must be stable across reimplementations, so it stays exact.
pub const ROUTED_FALLBACK_FACTOR: f64 = 1.3;

/// Scoring features for one candidate ODP.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFeatures {
    /// Great-circle distance to the requester, meters.
    pub distance_direct_m: f64,
    /// Routed travel distance to the requester, meters. Falls back to
    /// `distance_direct_m * 1.3` when the lookup fails.
    pub distance_routed_m: f64,
    /// Routed path geometry; absent when the fallback was used.
    pub route_geometry: Option<Polyline>,
    /// (used + reserved) / total ports.
    pub utilization_ratio: f64,
    /// Ordinal of the capacity category, worst = 0.
    pub category_rank: u8,
    /// Customers within the search radius of this ODP.
    pub nearby_demand: u32,
    /// Routed-distance bucket, 5 (closest) down to 0.
    pub road_distance_class: u8,
}

/// Derive the full feature set for one in-radius candidate.
///
/// `distance_direct_m` was computed by the radius filter and is carried in
/// rather than recomputed. The routed lookup is a single blocking call; any
/// failure is downgraded to the fallback distance and logged.
pub fn build_features<R: RoadDistanceProvider>(
    record: &OdpRecord,
    requester: Coordinate,
    distance_direct_m: f64,
    customers: &[PlaceRecord],
    radius_m: f64,
    roads: &R,
) -> CandidateFeatures {
    let (distance_routed_m, route_geometry) = match roads.route(requester, record.location()) {
        Ok(route) => (route.distance_m, Some(route.geometry)),
        Err(err) => {
            warn!(
                "road distance lookup for {} failed ({:?}), falling back to {} * direct distance",
                record.name, err, ROUTED_FALLBACK_FACTOR
            );
            (distance_direct_m * ROUTED_FALLBACK_FACTOR, None)
        }
    };

    CandidateFeatures {
        distance_direct_m,
        distance_routed_m,
        route_geometry,
        utilization_ratio: utilization_ratio(record.used, record.reserved, record.total),
        category_rank: record.category.rank(),
        nearby_demand: nearby_demand(customers, record.location(), radius_m),
        road_distance_class: road_distance_class(distance_routed_m),
    }
}

/// Fraction of an ODP's ports that are used or reserved.
///
/// An ODP reporting zero total ports cannot take a subscriber: its ratio is
/// defined as 1.0 so the eligibility filter drops it and the value stays
/// finite.
pub fn utilization_ratio(used: u32, reserved: u32, total: u32) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (f64::from(used) + f64::from(reserved)) / f64::from(total)
}

/// Count customers within `radius_m` of a point (great-circle, boundary
/// inclusive). Pure and order-free, so the scan parallelizes over the
/// customer table.
pub fn nearby_demand(customers: &[PlaceRecord], around: Coordinate, radius_m: f64) -> u32 {
    customers
        .par_iter()
        .filter(|customer| haversine_m(around, customer.location()) <= radius_m)
        .count() as u32
}

/// Bucket a routed distance into the fixed 0–5 class table.
pub fn road_distance_class(distance_m: f64) -> u8 {
    match distance_m {
        d if d <= 50.0 => 5,
        d if d <= 100.0 => 4,
        d if d <= 150.0 => 3,
        d if d <= 200.0 => 2,
        d if d <= 250.0 => 1,
        _ => 0,
    }
}
