//! odp-selector core pipeline
//!
//! Ranks candidate optical distribution points (ODPs) near a requested
//! installation address and selects the one to assign.

pub mod records;
pub mod traits;
pub mod haversine;
pub mod polyline;
pub mod features;
pub mod normalize;
pub mod scoring;
pub mod model;
pub mod selector;
pub mod osrm;
pub mod osrm_data;
