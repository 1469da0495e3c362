//! Pure parametric hull-offset computation for GeneHull.
//!
//! This crate contains the complete hull-offset engine independent of any
//! GUI, CAD host, or spreadsheet runtime. Functions take plain data and
//! return results, making them unit-testable and portable across the
//! native CLI, CAD integrations, and batch tooling.
//!
//! The engine maps a resolved parameter set (~43 named design parameters:
//! waterline length, draft, beam, bow/stern geometry, shape-polynomial
//! exponents) to an ordered table of (section, X, Y, Z) offset points
//! sampled at fixed longitudinal stations and draft-scaled vertical
//! levels. Output coordinates are centimeters rounded to 2 decimals.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dimensions`] | Derived hull dimensions (Loa, Boa) from raw inputs |
//! | [`engine`] | `compute()` — parameter set → offset table pipeline |
//! | [`error`] | Schema, parameter, and export error types |
//! | [`export`] | JSON document and CSV table writers |
//! | [`levels`] | Draft-scaled vertical sampling levels per station |
//! | [`params`] | Parameter set with documented default fallbacks |
//! | [`report`] | Plain-text preview and per-section statistics |
//! | [`schema`] | Bundled 43-entry input parameter catalog |
//! | [`shape`] | Two-branch half-beam shape polynomial |
//! | [`stations`] | Static longitudinal station catalog (Car2..Cav2) |
//! | [`table`] | Offset point and offset table output records |

pub mod dimensions;
pub mod engine;
pub mod error;
pub mod export;
pub mod levels;
pub mod params;
pub mod report;
pub mod schema;
pub mod shape;
pub mod stations;
pub mod table;
