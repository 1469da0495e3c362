//! Input parameter catalog — names, defaults, units, and descriptions.
//!
//! The canonical 43-entry catalog ships with the crate as a JSON document
//! (`data/input_schema.json`) and can also be loaded from an external
//! file, e.g. one regenerated from a legacy spreadsheet. The schema
//! carries no validation logic beyond shape: it is a data table consumed
//! by the engine and by GUI/CAD collaborators.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SchemaLoadError;
use crate::params::{ParamValue, ParameterSet};

/// Bundled catalog document, embedded at build time.
const SCHEMA_JSON: &str = include_str!("../../../data/input_schema.json");

/// One catalog entry: default value plus descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Default numeric value.
    pub value: f64,
    /// Human-readable description.
    pub comment: String,
    /// Unit label (`m`, `% Lwl`, `-` for dimensionless), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Source row in the original spreadsheet, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    inputs: BTreeMap<String, ParameterSpec>,
}

/// Parse a schema document from JSON text.
pub fn catalog_from_str(text: &str) -> Result<BTreeMap<String, ParameterSpec>, SchemaLoadError> {
    let doc: SchemaDocument = serde_json::from_str(text)?;
    if doc.inputs.is_empty() {
        return Err(SchemaLoadError::Empty);
    }
    Ok(doc.inputs)
}

/// Load the bundled catalog.
pub fn catalog() -> Result<BTreeMap<String, ParameterSpec>, SchemaLoadError> {
    catalog_from_str(SCHEMA_JSON)
}

/// Load a catalog from an external schema file.
pub fn catalog_from_path(path: &Path) -> Result<BTreeMap<String, ParameterSpec>, SchemaLoadError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    catalog_from_str(&text)
}

/// Build a fully-populated parameter set from a catalog's defaults.
pub fn defaults_from(catalog: &BTreeMap<String, ParameterSpec>) -> ParameterSet {
    catalog
        .iter()
        .map(|(name, spec)| (name.clone(), ParamValue::Number(spec.value)))
        .collect()
}

/// Build the default parameter set from the bundled catalog.
pub fn load_defaults() -> Result<ParameterSet, SchemaLoadError> {
    Ok(defaults_from(&catalog()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::defaults;

    #[test]
    fn bundled_catalog_has_43_parameters() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 43);
    }

    #[test]
    fn every_entry_has_a_comment() {
        let catalog = catalog().unwrap();
        for (name, spec) in &catalog {
            assert!(!spec.comment.is_empty(), "{name} has no comment");
        }
    }

    #[test]
    fn catalog_defaults_match_engine_fallback_constants() {
        let catalog = catalog().unwrap();
        let expected = [
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
        for (name, value) in expected {
            let spec = catalog.get(name).unwrap_or_else(|| panic!("missing {name}"));
            assert_eq!(spec.value, value, "default mismatch for {name}");
        }
    }

    #[test]
    fn load_defaults_covers_whole_catalog() {
        let params = load_defaults().unwrap();
        assert_eq!(params.len(), 43);
        assert!(params.contains("Lwl"));
        assert!(params.contains("V_carene"));
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = catalog_from_str("not json at all").unwrap_err();
        assert!(matches!(err, SchemaLoadError::Parse(_)));
    }

    #[test]
    fn empty_inputs_table_is_rejected() {
        let err = catalog_from_str(r#"{"inputs": {}}"#).unwrap_err();
        assert!(matches!(err, SchemaLoadError::Empty));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = catalog_from_path(Path::new("/nonexistent/schema.json")).unwrap_err();
        match err {
            SchemaLoadError::Read { path, .. } => {
                assert!(path.ends_with("schema.json"));
            }
            other => panic!("expected Read error, got {other:?}"),
        }
    }
}
