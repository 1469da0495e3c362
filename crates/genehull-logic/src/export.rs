//! Export adapters — structured JSON document and flat CSV table.
//!
//! Both adapters serialize the same offset table; they must agree on row
//! count and numeric values (modulo format). File writers go through a
//! temporary sibling path and rename into place, so a failed export
//! never leaves a partial file behind.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::dimensions::HullDimensions;
use crate::engine::ComputedHull;
use crate::error::ExportError;
use crate::params::ParameterSet;
use crate::table::OffsetTable;

/// Unit label attached to every export.
pub const UNITS: &str = "cm";

/// Document trailer: totals and the unit label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub total_points: usize,
    pub stations: usize,
    pub units: &'static str,
}

/// The full structured export document.
#[derive(Debug, Serialize)]
pub struct OffsetDocument<'a> {
    /// The resolved input parameter set.
    pub inputs: &'a ParameterSet,
    /// Derived hull dimensions.
    pub intermediate: &'a HullDimensions,
    /// The offset table, one entry per point.
    pub outputs: &'a OffsetTable,
    pub metadata: Metadata,
}

/// Assemble the export document for one compute run.
pub fn document<'a>(params: &'a ParameterSet, hull: &'a ComputedHull) -> OffsetDocument<'a> {
    OffsetDocument {
        inputs: params,
        intermediate: &hull.dimensions,
        outputs: &hull.table,
        metadata: Metadata {
            total_points: hull.table.len(),
            stations: hull.table.station_count(),
            units: UNITS,
        },
    }
}

/// Serialize the structured document to pretty-printed JSON.
pub fn to_json(params: &ParameterSet, hull: &ComputedHull) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&document(params, hull))?)
}

/// Serialize the offset table to CSV: one header row, then one row per
/// point in table order, numeric fields with 2 decimal places.
pub fn to_csv(table: &OffsetTable) -> String {
    let mut out = String::from("Section,X(cm),Y(cm),Z(cm)\n");
    for point in table {
        out.push_str(&format!(
            "{},{:.2},{:.2},{:.2}\n",
            point.section, point.x, point.y, point.z
        ));
    }
    out
}

/// Write the JSON document to `path` atomically.
pub fn write_json(
    path: &Path,
    params: &ParameterSet,
    hull: &ComputedHull,
) -> Result<(), ExportError> {
    let contents = to_json(params, hull)?;
    write_atomic(path, &contents)
}

/// Write the CSV table to `path` atomically.
pub fn write_csv(path: &Path, table: &OffsetTable) -> Result<(), ExportError> {
    write_atomic(path, &to_csv(table))
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ExportError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, contents).map_err(|source| ExportError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}
