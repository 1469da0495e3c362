//! Static longitudinal station catalog.
//!
//! Stations are fixed percentage-of-`Lwl` positions along the hull, not
//! derived from input: `C0` at the bow reference (0%) through `C10` at
//! the stern reference (100%) in 5% steps, plus auxiliary stations
//! (`Car2` forward of the bow, `Cav1`/`Cav2` aft of the stern) that
//! extend beyond the physical hull for symmetry and reference purposes.
//! Catalog order is significant: the offset table and downstream CAD
//! sketch placement follow it.

/// A named longitudinal section at a fixed percentage of `Lwl`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Section name (`Car2`, `C0`..`C10`, `Cav1`, `Cav2`).
    pub name: &'static str,
    /// Position as a percentage of waterline length.
    pub pct: f64,
}

/// The fixed, order-significant station catalog.
pub static STATIONS: [Station; 24] = [
    Station { name: "Car2", pct: -5.0 },
    Station { name: "C0", pct: 0.0 },
    Station { name: "C0.5", pct: 5.0 },
    Station { name: "C1", pct: 10.0 },
    Station { name: "C1.5", pct: 15.0 },
    Station { name: "C2", pct: 20.0 },
    Station { name: "C2.5", pct: 25.0 },
    Station { name: "C3", pct: 30.0 },
    Station { name: "C3.5", pct: 35.0 },
    Station { name: "C4", pct: 40.0 },
    Station { name: "C4.5", pct: 45.0 },
    Station { name: "C5", pct: 50.0 },
    Station { name: "C5.5", pct: 55.0 },
    Station { name: "C6", pct: 60.0 },
    Station { name: "C6.5", pct: 65.0 },
    Station { name: "C7", pct: 70.0 },
    Station { name: "C7.5", pct: 75.0 },
    Station { name: "C8", pct: 80.0 },
    Station { name: "C8.5", pct: 85.0 },
    Station { name: "C9", pct: 90.0 },
    Station { name: "C9.5", pct: 95.0 },
    Station { name: "C10", pct: 100.0 },
    Station { name: "Cav1", pct: 110.0 },
    Station { name: "Cav2", pct: 120.0 },
];

impl Station {
    /// Absolute X position in meters for a given waterline length.
    pub fn x_position(&self, lwl: f64) -> f64 {
        (self.pct / 100.0) * lwl
    }

    /// Longitudinal position normalized to the 0–100% range.
    ///
    /// Auxiliary stations fall outside [0, 1] and intentionally
    /// extrapolate the shape polynomial.
    pub fn x_norm(&self) -> f64 {
        self.pct / 100.0
    }
}

/// Look up a station by name.
pub fn find(name: &str) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_24_stations() {
        assert_eq!(STATIONS.len(), 24);
    }

    #[test]
    fn catalog_order_is_bow_to_stern() {
        for pair in STATIONS.windows(2) {
            assert!(pair[0].pct < pair[1].pct, "{} >= {}", pair[0].name, pair[1].name);
        }
        assert_eq!(STATIONS[0].name, "Car2");
        assert_eq!(STATIONS[23].name, "Cav2");
    }

    #[test]
    fn main_stations_step_in_5_percent_increments() {
        // C0..C10 occupy indices 1..=21
        for (i, station) in STATIONS[1..=21].iter().enumerate() {
            assert_eq!(station.pct, i as f64 * 5.0);
        }
    }

    #[test]
    fn x_position_scales_with_lwl() {
        let c5 = find("C5").unwrap();
        assert_eq!(c5.x_position(8.0), 4.0);
        assert_eq!(c5.x_position(10.0), 5.0);
    }

    #[test]
    fn auxiliary_stations_extend_beyond_hull() {
        assert_eq!(find("Car2").unwrap().x_norm(), -0.05);
        assert_eq!(find("Cav1").unwrap().x_norm(), 1.1);
        assert_eq!(find("Cav2").unwrap().x_norm(), 1.2);
    }

    #[test]
    fn unknown_station_is_none() {
        assert!(find("C11").is_none());
    }
}
