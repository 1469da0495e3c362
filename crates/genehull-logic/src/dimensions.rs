//! Derived hull dimensions.
//!
//! A handful of named parameters are extracted up front and two synthetic
//! dimensions are derived from them. The result is retained alongside the
//! offset table for diagnostics and export; the engine itself does not
//! consume it further.

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;
use crate::params::{defaults, ParameterSet};

/// Raw and derived principal dimensions for one compute run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullDimensions {
    /// Length over all: `Xbow + |X_tab_ar|` (m).
    pub loa: f64,
    /// Length of waterline (m).
    pub lwl: f64,
    /// Beam over all: `Bg · 1.2` (m). A fixed multiplicative
    /// approximation, not a modeled relationship.
    pub boa: f64,
    /// Sheer line width (m).
    pub bg: f64,
    /// Maximum draft (m).
    pub tc: f64,
    /// Bow freeboard (m).
    pub zbow: f64,
    /// Midship freeboard (m).
    pub z_liv_m: f64,
    /// Aft freeboard (m).
    pub z_liv_ar: f64,
}

impl HullDimensions {
    /// Derive dimensions from a parameter set.
    pub fn derive(params: &ParameterSet) -> Result<Self, InvalidParameterError> {
        let lwl = params.resolve("Lwl", defaults::LWL)?;
        let tc = params.resolve("Tc", defaults::TC)?;
        let bg = params.resolve("Bg", defaults::BG)?;
        let xbow = params.resolve("Xbow", defaults::XBOW)?;
        let zbow = params.resolve("Zbow", defaults::ZBOW)?;
        let x_tab_ar = params.resolve("X_tab_ar", defaults::X_TAB_AR)?;
        let z_liv_m = params.resolve("Z_liv_m", defaults::Z_LIV_M)?;
        let z_liv_ar = params.resolve("Z_liv_ar", defaults::Z_LIV_AR)?;

        Ok(Self {
            loa: xbow + x_tab_ar.abs(),
            lwl,
            boa: bg * 1.2,
            bg,
            tc,
            zbow,
            z_liv_m,
            z_liv_ar,
        })
    }
}
