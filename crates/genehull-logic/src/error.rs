//! Error types for schema loading, parameter resolution, and export.
//!
//! Three failure classes, one per boundary:
//! - [`SchemaLoadError`] — the parameter catalog document is missing or
//!   structurally invalid; fatal before any computation.
//! - [`InvalidParameterError`] — a supplied value cannot be coerced to a
//!   number; fatal to that compute call only. Absent keys never produce
//!   this error (they fall back to documented defaults).
//! - [`ExportError`] — an export target could not be written; no partial
//!   file is left behind.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The input schema document could not be loaded.
#[derive(Debug, Error)]
pub enum SchemaLoadError {
    /// The schema file could not be read from disk.
    #[error("cannot read schema document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON or does not match the expected shape.
    #[error("schema document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but contains no `inputs` entries.
    #[error("schema document has an empty `inputs` table")]
    Empty,
}

/// A supplied parameter value could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter `{name}` is not numeric: `{value}`")]
pub struct InvalidParameterError {
    /// Name of the offending parameter.
    pub name: String,
    /// The raw value as supplied.
    pub value: String,
}

/// An offset-table export failed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The target path (or its temporary sibling) was not writable.
    #[error("cannot write export file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document could not be serialized.
    #[error("export serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
