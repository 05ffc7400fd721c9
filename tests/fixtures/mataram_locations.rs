//! Real Mataram (Lombok) locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real, routable
//! locations inside the OSRM Nusa Tenggara extract, grouped the way the
//! deployment data is: ODP pole sites, customer homes, and landmarks.

use odp_selector::records::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

// ============================================================================
// ODP Pole Sites / Cakranegara (around the Mayura / Pejanggik grid)
// ============================================================================

pub const CAKRANEGARA_ODP_SITES: &[Location] = &[
    Location::new("ODP-CKR-021", -8.5832, 116.1211),
    Location::new("ODP-CKR-022", -8.5845, 116.1222),
    Location::new("ODP-CKR-023", -8.5827, 116.1226),
    Location::new("ODP-CKR-024", -8.5852, 116.1201),
    Location::new("ODP-CKR-025", -8.5860, 116.1240),
    Location::new("ODP-CKR-026", -8.5810, 116.1190),
];

// ============================================================================
// ODP Pole Sites / Ampenan old town (coastal west side, ~4.5 km away)
// ============================================================================

pub const AMPENAN_ODP_SITES: &[Location] = &[
    Location::new("ODP-AMP-007", -8.5668, 116.0771),
    Location::new("ODP-AMP-008", -8.5679, 116.0783),
    Location::new("ODP-AMP-009", -8.5655, 116.0790),
    Location::new("ODP-AMP-010", -8.5690, 116.0762),
];

// ============================================================================
// Customer Homes / Cakranegara
// ============================================================================

pub const CAKRANEGARA_HOMES: &[Location] = &[
    Location::new("Rumah Jl. Pejanggik 41", -8.5834, 116.1208),
    Location::new("Rumah Jl. Pejanggik 44", -8.5835, 116.1218),
    Location::new("Toko Sinar Cakra", -8.5840, 116.1214),
    Location::new("Rumah Jl. Selaparang 12", -8.5829, 116.1220),
    Location::new("Rumah Jl. Selaparang 15", -8.5826, 116.1213),
    Location::new("Warung Bu Eka", -8.5843, 116.1227),
    Location::new("Rumah Jl. Gede Ngurah 3", -8.5848, 116.1206),
    Location::new("Rumah Jl. Gede Ngurah 8", -8.5855, 116.1209),
    Location::new("Kos Putra Mayura", -8.5841, 116.1238),
    Location::new("Rumah Tohpati 2", -8.5819, 116.1196),
    Location::new("Rumah Tohpati 9", -8.5814, 116.1201),
    Location::new("Bengkel Cakra Timur", -8.5857, 116.1233),
];

// ============================================================================
// Customer Homes / Ampenan
// ============================================================================

pub const AMPENAN_HOMES: &[Location] = &[
    Location::new("Rumah Jl. Yos Sudarso 21", -8.5664, 116.0775),
    Location::new("Rumah Jl. Yos Sudarso 30", -8.5671, 116.0780),
    Location::new("Toko Pantai Ampenan", -8.5676, 116.0768),
    Location::new("Rumah Jl. Saleh Sungkar 5", -8.5684, 116.0776),
    Location::new("Rumah Kampung Melayu 11", -8.5659, 116.0784),
    Location::new("Warung Pesisir", -8.5694, 116.0759),
];

// ============================================================================
// Landmarks (points of interest carried for map consumers)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Mataram Mall", -8.5855, 116.1119),
    Location::new("Lombok Epicentrum Mall", -8.5921, 116.1057),
    Location::new("Islamic Center NTB", -8.5779, 116.1022),
    Location::new("Mayura Water Palace", -8.5837, 116.1245),
    Location::new("Pura Meru", -8.5842, 116.1233),
];

// ============================================================================
// Requested installation addresses
// ============================================================================

/// Inside the Cakranegara ODP cluster; four sites within 250 m.
pub const REQUESTER_CAKRANEGARA: Location =
    Location::new("Perumahan Taman Indah Blok C", -8.5838, 116.1215);

/// Inside the Ampenan cluster.
pub const REQUESTER_AMPENAN: Location =
    Location::new("Ruko Ampenan Utara", -8.5668, 116.0782);

/// Pagesangan, more than a kilometer from every fixture ODP.
pub const REQUESTER_PAGESANGAN: Location =
    Location::new("BTN Pagesangan Indah", -8.5990, 116.1105);

// ============================================================================
// Combined views
// ============================================================================

/// Every ODP site across both districts.
pub fn all_odp_sites() -> Vec<Location> {
    let mut all = Vec::with_capacity(CAKRANEGARA_ODP_SITES.len() + AMPENAN_ODP_SITES.len());
    all.extend_from_slice(CAKRANEGARA_ODP_SITES);
    all.extend_from_slice(AMPENAN_ODP_SITES);
    all
}

/// Every customer home across both districts.
pub fn all_homes() -> Vec<Location> {
    let mut all = Vec::with_capacity(CAKRANEGARA_HOMES.len() + AMPENAN_HOMES.len());
    all.extend_from_slice(CAKRANEGARA_HOMES);
    all.extend_from_slice(AMPENAN_HOMES);
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use odp_selector::haversine::haversine_m;

    #[test]
    fn coordinates_are_in_the_mataram_area() {
        for loc in all_odp_sites().iter().chain(all_homes().iter()).chain(LANDMARKS) {
            assert!(
                loc.lat > -8.7 && loc.lat < -8.5,
                "{} lat out of range: {}",
                loc.name,
                loc.lat
            );
            assert!(
                loc.lon > 116.0 && loc.lon < 116.2,
                "{} lon out of range: {}",
                loc.name,
                loc.lon
            );
        }
    }

    #[test]
    fn cakranegara_requester_has_sites_in_radius() {
        let within = CAKRANEGARA_ODP_SITES
            .iter()
            .filter(|site| haversine_m(REQUESTER_CAKRANEGARA.coord(), site.coord()) <= 250.0)
            .count();
        assert_eq!(within, 4, "expected four Cakranegara sites within 250 m");
    }

    #[test]
    fn pagesangan_requester_is_isolated() {
        for site in all_odp_sites() {
            let d = haversine_m(REQUESTER_PAGESANGAN.coord(), site.coord());
            assert!(d > 1_000.0, "{} unexpectedly close: {} m", site.name, d);
        }
    }

    #[test]
    fn site_names_are_unique() {
        let mut names: Vec<&str> = all_odp_sites().iter().map(|site| site.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all_odp_sites().len());
    }
}
