//! Offset table output records.
//!
//! The table is the sole product of a compute call: one row per
//! (station, level) pair, in station-catalog order then level order.
//! All coordinates are centimeters; `z_level` additionally carries the
//! raw pre-scaled level in meters for consumers that re-derive the
//! sampling grid.

use serde::{Deserialize, Serialize};

/// One sampled hull-surface point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetPoint {
    /// Station identifier (`Car2`, `C0`..`C10`, `Cav1`, `Cav2`).
    pub section: String,
    /// Longitudinal position (cm).
    pub x: f64,
    /// Half-beam (cm).
    pub y: f64,
    /// Height (cm).
    pub z: f64,
    /// Raw vertical sampling level (m), before unit scaling.
    pub z_level: f64,
}

/// Ordered collection of offset points from one compute call.
///
/// Immutable once returned; export and report components consume it
/// read-only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OffsetTable {
    points: Vec<OffsetPoint>,
}

impl OffsetTable {
    pub(crate) fn from_points(points: Vec<OffsetPoint>) -> Self {
        Self { points }
    }

    /// All points in table order.
    pub fn points(&self) -> &[OffsetPoint] {
        &self.points
    }

    /// Total point count.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of distinct stations represented, in table order.
    pub fn station_count(&self) -> usize {
        let mut count = 0;
        let mut last: Option<&str> = None;
        for p in &self.points {
            if last != Some(p.section.as_str()) {
                count += 1;
                last = Some(p.section.as_str());
            }
        }
        count
    }

    /// Points belonging to one station, preserving level order.
    pub fn section<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a OffsetPoint> + 'a {
        self.points.iter().filter(move |p| p.section == name)
    }
}

impl<'a> IntoIterator for &'a OffsetTable {
    type Item = &'a OffsetPoint;
    type IntoIter = std::slice::Iter<'a, OffsetPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
