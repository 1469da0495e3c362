//! Two-branch half-beam shape polynomial.
//!
//! Half-beam Y at a given longitudinal position and height is computed
//! by one of two independent formulas depending on whether the sample
//! lies above or below the waterline:
//!
//! - `Z >= 0`: `Y = 0.1·Bg·(1 − x²)·(1 + 0.1·x)`
//! - `Z <  0`: `Y = Bg·(1 − x^P)·(1 + |z/Tc|·0.3)` with `P = Pui_liv_y`
//!
//! The two branches are not guaranteed to meet in value at `Z = 0`; that
//! discontinuity is inherited from the source model and is preserved
//! verbatim — downstream consumers were built against this exact shape.

/// Vertical position normalized by draft: `z / tc`, 0 when `tc == 0`.
pub fn depth_ratio(z: f64, tc: f64) -> f64 {
    if tc == 0.0 {
        0.0
    } else {
        z / tc
    }
}

/// Half-beam at normalized longitudinal position `x_norm` and height `z`.
///
/// `x_norm` is 0 at the bow reference and 1 at the stern reference;
/// auxiliary stations outside [0, 1] extrapolate the polynomial.
pub fn half_beam(bg: f64, pui_liv_y: f64, x_norm: f64, z: f64, z_norm: f64) -> f64 {
    if z >= 0.0 {
        0.1 * bg * (1.0 - x_norm.powi(2)) * (1.0 + 0.1 * x_norm)
    } else {
        bg * (1.0 - x_norm.powf(pui_liv_y)) * (1.0 + z_norm.abs() * 0.3)
    }
}
