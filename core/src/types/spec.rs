//! The declarative specification document.
//!
//! The root maps tab identifiers (`tab_<N>`, contiguous from 1) to tabs; a
//! tab carries its grid dimensions and its components keyed by
//! `<tabId>_comp_<M>`. All maps are insertion-ordered — document key order
//! defines layout-model order and selection cycling, so it must survive
//! parse/serialize round trips.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpecDoc {
    #[serde(flatten)]
    pub tabs: IndexMap<String, TabSpec>,
}


impl SpecDoc {
    /// Tab identifiers in document order.
    pub fn tab_ids(&self) -> Vec<&str> {
        self.tabs.keys().map(|k| k.as_str()).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn get(&self, tab: &str) -> Option<&TabSpec> {
        self.tabs.get(tab)
    }

    /// Look up a component record by tab and key.
    pub fn component(&self, tab: &str, key: &str) -> Option<&ComponentRecord> {
        self.tabs.get(tab)?.components.get(key)
    }

    pub fn component_mut(&mut self, tab: &str, key: &str) -> Option<&mut ComponentRecord> {
        self.tabs.get_mut(tab)?.components.get_mut(key)
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSpec {
    pub columns: u32,
    pub rows: u32,
    #[serde(flatten)]
    pub components: IndexMap<String, ComponentRecord>,
}


/// One positioned visual element on a tab's grid.
///
/// Identity fields (`representation_type`, `data`, `micro_prompt`,
/// `image_src`) never change during an edit session; only the geometry
/// fields (`position`, `width`, `height`) mutate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentRecord {
    pub representation_type: Representation,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub micro_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    /// `Tab<N>!R<row>C<col>`, 1-based.
    pub position: String,
    pub width: u32,
    pub height: u32,
    /// Opaque ranking hint; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<serde_json::Value>,
}


#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Kpi,
    Chart,
    Table,
    #[serde(other)]
    Other,
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "tab_1": {
            "columns": 4,
            "rows": 3,
            "tab_1_comp_1": {
                "representation_type": "kpi",
                "data": { "label": "Revenue", "value": 120000, "unit": "$", "change": "+4.2%", "comparison_label": "vs last month" },
                "micro_prompt": "Total revenue KPI",
                "position": "Tab1!R1C1",
                "width": 2,
                "height": 1,
                "importance": 1
            },
            "tab_1_comp_2": {
                "representation_type": "chart",
                "data": {},
                "micro_prompt": "Revenue trend line chart",
                "image_src": "",
                "position": "Tab1!R2C1",
                "width": 4,
                "height": 2
            }
        }
    }"#;

    #[test]
    fn parses_tabs_and_components() {
        let doc: SpecDoc = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(doc.tab_count(), 1);
        let tab = doc.get("tab_1").unwrap();
        assert_eq!(tab.columns, 4);
        assert_eq!(tab.rows, 3);
        assert_eq!(tab.components.len(), 2);
    }

    #[test]
    fn component_lookup() {
        let doc: SpecDoc = serde_json::from_str(SAMPLE).unwrap();
        let comp = doc.component("tab_1", "tab_1_comp_1").unwrap();
        assert_eq!(comp.representation_type, Representation::Kpi);
        assert_eq!(comp.position, "Tab1!R1C1");
        assert_eq!(comp.width, 2);
        assert!(doc.component("tab_1", "tab_1_comp_9").is_none());
        assert!(doc.component("tab_9", "tab_1_comp_1").is_none());
    }

    #[test]
    fn key_order_survives_round_trip() {
        let doc: SpecDoc = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        let back: SpecDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
        let keys: Vec<&str> = back.get("tab_1").unwrap().components.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["tab_1_comp_1", "tab_1_comp_2"]);
    }

    #[test]
    fn unknown_representation_falls_back_to_other() {
        let json = r#"{
            "tab_1": {
                "columns": 2, "rows": 2,
                "tab_1_comp_1": {
                    "representation_type": "gauge",
                    "position": "Tab1!R1C1",
                    "width": 1, "height": 1
                }
            }
        }"#;
        let doc: SpecDoc = serde_json::from_str(json).unwrap();
        let comp = doc.component("tab_1", "tab_1_comp_1").unwrap();
        assert_eq!(comp.representation_type, Representation::Other);
    }

    #[test]
    fn geometry_mutation_round_trips() {
        let mut doc: SpecDoc = serde_json::from_str(SAMPLE).unwrap();
        let comp = doc.component_mut("tab_1", "tab_1_comp_1").unwrap();
        comp.position = "Tab1!R2C2".into();
        comp.width = 1;
        let json = serde_json::to_string(&doc).unwrap();
        let back: SpecDoc = serde_json::from_str(&json).unwrap();
        let comp = back.component("tab_1", "tab_1_comp_1").unwrap();
        assert_eq!(comp.position, "Tab1!R2C2");
        assert_eq!(comp.width, 1);
        // identity untouched
        assert_eq!(comp.micro_prompt, "Total revenue KPI");
    }
}
