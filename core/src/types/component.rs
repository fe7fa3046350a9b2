//! Session-scoped view of a component: identity plus parsed 0-based geometry.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::geometry;
use crate::types::spec::{ComponentRecord, Representation};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadedComponent {
    pub id: String,
    pub kind: Representation,
    pub data: serde_json::Value,
    pub micro_prompt: String,
    pub image_src: String,
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<serde_json::Value>,
}


impl LoadedComponent {
    /// Derive a loaded component from its record. Fails only on a malformed
    /// `position`; the layout-model loader decides how to recover.
    pub fn from_record(key: &str, record: &ComponentRecord) -> Result<LoadedComponent> {
        let pos = geometry::parse_position(&record.position)?;
        Ok(LoadedComponent {
            id: key.to_string(),
            kind: record.representation_type,
            data: record.data.clone(),
            micro_prompt: record.micro_prompt.clone(),
            image_src: record.image_src.clone().unwrap_or_default(),
            row: pos.row,
            col: pos.col,
            width: record.width,
            height: record.height,
            importance: record.importance.clone(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    fn record(position: &str) -> ComponentRecord {
        ComponentRecord {
            representation_type: Representation::Table,
            data: serde_json::json!({ "columns": ["a"], "rows": [["1"]] }),
            micro_prompt: "breakdown table".into(),
            image_src: None,
            position: position.into(),
            width: 2,
            height: 1,
            importance: None,
        }
    }

    #[test]
    fn derives_zero_based_geometry() {
        let c = LoadedComponent::from_record("tab_1_comp_3", &record("Tab1!R2C4")).unwrap();
        assert_eq!(c.id, "tab_1_comp_3");
        assert_eq!(c.row, 1);
        assert_eq!(c.col, 3);
        assert_eq!(c.width, 2);
        assert_eq!(c.height, 1);
        assert_eq!(c.image_src, "");
    }

    #[test]
    fn malformed_position_is_an_error() {
        let err = LoadedComponent::from_record("tab_1_comp_1", &record("R2C4")).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedPosition { .. }));
    }

    #[test]
    fn serializes_camel_case_for_the_view() {
        let c = LoadedComponent::from_record("tab_1_comp_1", &record("Tab1!R1C1")).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"microPrompt\""));
        assert!(json.contains("\"imageSrc\""));
    }
}
