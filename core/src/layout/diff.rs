//! Diff extraction — reduce a committed session to the minimal patch.
//!
//! Only components in the changed-set appear, and only their three geometry
//! fields; identity and payload fields are never included. Tab and key order
//! follow changed-set insertion order.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::types::spec::SpecDoc;


/// `{ tab -> { component key -> geometry } }`, insertion-ordered.
pub type DiffDoc = IndexMap<String, IndexMap<String, GeometryPatch>>;

/// Instruction header prepended to the clipboard payload.
pub const CLIPBOARD_INSTRUCTION: &str = "Edit the latest spec with the following details:\n";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeometryPatch {
    pub position: String,
    pub width: u32,
    pub height: u32,
}


/// Extract the minimal subset document for the changed components.
///
/// Entries that no longer resolve in the working copy are skipped silently.
pub fn extract(changed: &IndexSet<(String, String)>, working: &SpecDoc) -> DiffDoc {
    let mut subset = DiffDoc::new();
    for (tab, key) in changed {
        let Some(record) = working.component(tab, key) else {
            continue;
        };
        subset.entry(tab.clone()).or_default().insert(
            key.clone(),
            GeometryPatch {
                position: record.position.clone(),
                width: record.width,
                height: record.height,
            },
        );
    }
    subset
}


/// The full clipboard payload: fixed instruction plus the pretty-printed diff.
pub fn clipboard_payload(diff: &DiffDoc) -> String {
    let body = serde_json::to_string_pretty(diff).unwrap_or_else(|_| "{}".into());
    format!("{}{}", CLIPBOARD_INSTRUCTION, body)
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
