//! Polyline representation for routed path geometries.
//!
//! Stores the path a fiber drop would follow from the requester to an ODP
//! as decoded coordinates. Wire-format conversion (GeoJSON ordering)
//! happens at the boundary, not inside the pipeline.

use serde::{Deserialize, Serialize};

use crate::records::Coordinate;

/// A routed path as an ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a polyline from latitude/longitude points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Creates a polyline from GeoJSON position pairs, which arrive in
    /// `[lon, lat]` order and are flipped here.
    pub fn from_geojson(positions: Vec<[f64; 2]>) -> Self {
        let points = positions
            .into_iter()
            .map(|[lon, lat]| Coordinate::new(lat, lon))
            .collect();
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}
