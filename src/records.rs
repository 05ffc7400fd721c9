//! Record types for the selection pipeline.
//!
//! These mirror the shape of the upstream ODP / customer / POI tables.
//! Serde aliases accept the original export headers so records deserialize
//! straight from those tables; ingestion itself (file formats, validation)
//! lives outside this crate.

use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Capacity health category of an ODP, ordered worst to best.
///
/// The upstream tables label these HITAM / MERAH / KUNING / HIJAU; the
/// aliases keep those exports deserializable. Scoring uses the fixed
/// ordinal from [`Category::rank`], never the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "HITAM")]
    Critical,
    #[serde(alias = "MERAH")]
    Warning,
    #[serde(alias = "KUNING")]
    Caution,
    #[serde(alias = "HIJAU")]
    Healthy,
}

impl Category {
    /// Fixed ordinal encoding: critical=0, warning=1, caution=2, healthy=3.
    pub fn rank(self) -> u8 {
        match self {
            Category::Critical => 0,
            Category::Warning => 1,
            Category::Caution => 2,
            Category::Healthy => 3,
        }
    }
}

/// An optical distribution point with its port-capacity counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdpRecord {
    #[serde(alias = "nama")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Ports already in service.
    #[serde(alias = "USED")]
    pub used: u32,
    /// Ports held by pending orders.
    #[serde(alias = "RSV")]
    pub reserved: u32,
    /// Total ports installed.
    #[serde(alias = "IS_TOTAL")]
    pub total: u32,
    #[serde(alias = "Kategori")]
    pub category: Category,
}

impl OdpRecord {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// A named point on the map: an existing customer or a point of interest.
///
/// Customer tables feed demand-density counting; POI tables ride along for
/// downstream consumers (map rendering) and are not read by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(alias = "nama")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceRecord {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
