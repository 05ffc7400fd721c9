//! Great-circle distance between coordinates.
//!
//! Straight-line (surface) distance over a spherical Earth. The radius
//! filter and the routing fallback both depend on this, so the constants
//! and formulation must not drift.

use crate::records::Coordinate;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Uses the `atan2` formulation, which stays well-conditioned for
/// near-coincident and near-antipodal points. Symmetric, non-negative,
/// zero for identical inputs.
pub fn haversine_m(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
