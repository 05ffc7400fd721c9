//! OSRM HTTP adapter for routed distances.

use serde::Deserialize;

use crate::polyline::Polyline;
use crate::records::Coordinate;
use crate::traits::{RoadDistanceProvider, RoadRoute, RouteLookupError};

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    /// Per-request timeout. A lookup that exceeds it is treated like any
    /// other failed lookup.
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl RoadDistanceProvider for OsrmClient {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<RoadRoute, RouteLookupError> {
        let url = format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&geometries=geojson",
            self.config.base_url, self.config.profile, from.lon, from.lat, to.lon, to.lat
        );

        let response: OsrmRouteResponse = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())?;

        let route = response
            .routes
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(RouteLookupError::NoRoute)?;

        if !route.distance.is_finite() || route.distance < 0.0 {
            return Err(RouteLookupError::Malformed(format!(
                "route distance {} out of range",
                route.distance
            )));
        }

        Ok(RoadRoute {
            distance_m: route.distance,
            geometry: Polyline::from_geojson(route.geometry.coordinates),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    routes: Option<Vec<OsrmRouteLeg>>,
}

#[derive(Debug, Deserialize)]
struct OsrmRouteLeg {
    distance: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}
