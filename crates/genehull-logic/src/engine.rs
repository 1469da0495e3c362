//! The hull-offset computation pipeline.
//!
//! `compute()` is a pure, deterministic transform from a parameter set to
//! an offset table: dimension derivation, station layout, per-station
//! per-level shape evaluation, and table assembly in catalog order.
//! Calling it twice with the same parameter set yields a bit-identical
//! table — downstream CAD geometry construction depends on that.
//!
//! Output coordinates are centimeters (input meters × 100) rounded to
//! 2 decimal places.

use serde::{Deserialize, Serialize};

use crate::dimensions::HullDimensions;
use crate::error::InvalidParameterError;
use crate::levels::{vertical_levels, LEVEL_COUNT};
use crate::params::{defaults, ParameterSet};
use crate::shape::{depth_ratio, half_beam};
use crate::stations::STATIONS;
use crate::table::{OffsetPoint, OffsetTable};

/// Every parameter key the engine consumes, with its documented default.
///
/// All of these must resolve to a number before any geometry is
/// computed; a malformed supplied value aborts the whole call.
pub const CONSUMED_PARAMETERS: [(&str, f64); 14] = [
    ("Lwl", defaults::LWL),
    ("Tc", defaults::TC),
    ("X_Tc", defaults::X_TC),
    ("Bg", defaults::BG),
    ("X_Bg", defaults::X_BG),
    ("Xbow", defaults::XBOW),
    ("Zbow", defaults::ZBOW),
    ("X_tab_ar", defaults::X_TAB_AR),
    ("Z_tab_ar", defaults::Z_TAB_AR),
    ("X_liv_ar", defaults::X_LIV_AR),
    ("Z_liv_m", defaults::Z_LIV_M),
    ("Z_liv_ar", defaults::Z_LIV_AR),
    ("Cet", defaults::CET),
    ("Pui_liv_y", defaults::PUI_LIV_Y),
];

/// Result of one compute call: derived dimensions plus the offset table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedHull {
    /// Intermediate dimension set, retained for diagnostics and export.
    pub dimensions: HullDimensions,
    /// The complete ordered offset table.
    pub table: OffsetTable,
}

/// Scale meters to centimeters and round to 2 decimals.
fn to_cm(meters: f64) -> f64 {
    (meters * 100.0 * 100.0).round() / 100.0
}

/// Compute the full offset table for a parameter set.
///
/// Pure and synchronous: no I/O, no shared state, no hidden caches.
/// Fails only when a supplied parameter value cannot be coerced to a
/// number; absent keys fall back to their documented defaults.
pub fn compute(params: &ParameterSet) -> Result<ComputedHull, InvalidParameterError> {
    // Resolve every consumed key up front so a malformed value fails
    // before any geometry is produced.
    for (name, default) in CONSUMED_PARAMETERS {
        params.resolve(name, default)?;
    }

    let dimensions = HullDimensions::derive(params)?;
    let lwl = dimensions.lwl;
    let tc = dimensions.tc;
    let bg = dimensions.bg;
    let pui_liv_y = params.resolve("Pui_liv_y", defaults::PUI_LIV_Y)?;

    let levels = vertical_levels(tc);
    let mut points = Vec::with_capacity(STATIONS.len() * LEVEL_COUNT);

    for station in &STATIONS {
        let x = station.x_position(lwl);
        let x_norm = station.x_norm();
        for &z in &levels {
            let z_norm = depth_ratio(z, tc);
            let y = half_beam(bg, pui_liv_y, x_norm, z, z_norm);
            points.push(OffsetPoint {
                section: station.name.to_string(),
                x: to_cm(x),
                y: to_cm(y),
                z: to_cm(z),
                z_level: z,
            });
        }
    }

    Ok(ComputedHull {
        dimensions,
        table: OffsetTable::from_points(points),
    })
}
