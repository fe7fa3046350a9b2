//! Specification document loading and validation.
//!
//! Documents are JSON (the native format) or YAML, dispatched on file
//! extension. Validation enforces the structural rules the editor relies
//! on: contiguous `tab_<N>` identifiers, components namespaced under their
//! tab, and geometry that fits the tab's grid. Malformed `position` strings
//! are tolerated here — the layout model degrades them to the origin — but
//! a position that parses must land inside the grid.

use std::path::Path;

use crate::error::{LayoutError, Result};
use crate::layout::geometry;
use crate::types::spec::SpecDoc;


/// Parse and validate a JSON document.
pub fn from_json(input: &str) -> Result<SpecDoc> {
    let doc: SpecDoc = serde_json::from_str(input)?;
    validate(&doc)?;
    Ok(doc)
}


/// Parse and validate a YAML document.
pub fn from_yaml(input: &str) -> Result<SpecDoc> {
    let doc: SpecDoc = serde_yaml::from_str(input)?;
    validate(&doc)?;
    Ok(doc)
}


/// Load a document from a file path, dispatching on the extension.
/// Anything that is not `.yaml`/`.yml` is treated as JSON.
pub fn from_file(path: &Path) -> Result<SpecDoc> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => from_yaml(&content),
        _ => from_json(&content),
    }
}


/// Check the structural invariants of a parsed document.
pub fn validate(doc: &SpecDoc) -> Result<()> {
    if doc.tabs.is_empty() {
        return Err(LayoutError::invalid_document("no tabs defined"));
    }

    // Tab ids must be tab_<N>, contiguous from 1.
    let mut indices = Vec::new();
    for tab_id in doc.tabs.keys() {
        indices.push(geometry::tab_index(tab_id).map_err(|_| {
            LayoutError::invalid_document(format!("bad tab identifier: '{}'", tab_id))
        })?);
    }
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() != indices.len() || sorted != (1..=indices.len() as u32).collect::<Vec<_>>() {
        return Err(LayoutError::invalid_document(
            "tab identifiers must be contiguous from tab_1",
        ));
    }

    for (tab_id, tab) in &doc.tabs {
        if tab.columns < 1 || tab.rows < 1 {
            return Err(LayoutError::invalid_document(format!(
                "'{}' must have at least a 1x1 grid",
                tab_id
            )));
        }

        let prefix = format!("{}_comp_", tab_id);
        for (key, record) in &tab.components {
            let suffix_ok = key
                .strip_prefix(&prefix)
                .map(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
                .unwrap_or(false);
            if !suffix_ok {
                return Err(LayoutError::invalid_document(format!(
                    "component '{}' is not namespaced under '{}'",
                    key, tab_id
                )));
            }

            if record.width < 1 || record.height < 1 {
                return Err(LayoutError::invalid_document(format!(
                    "'{}' must be at least 1x1",
                    key
                )));
            }
            if record.width > tab.columns || record.height > tab.rows {
                return Err(LayoutError::invalid_document(format!(
                    "'{}' does not fit the {}x{} grid",
                    key, tab.columns, tab.rows
                )));
            }
            if let Ok(pos) = geometry::parse_position(&record.position) {
                if pos.col + record.width > tab.columns || pos.row + record.height > tab.rows {
                    return Err(LayoutError::invalid_document(format!(
                        "'{}' at {} overflows the {}x{} grid",
                        key, record.position, tab.columns, tab.rows
                    )));
                }
            }
        }
    }
    Ok(())
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
