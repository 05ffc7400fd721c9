//! Test fixtures for odp-selector.
//!
//! Provides realistic test data: real Mataram (Lombok) locations for ODP
//! pole sites, customer homes, landmarks, and installation addresses.

pub mod mataram_locations;

pub use mataram_locations::*;
