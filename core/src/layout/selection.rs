//! Selection — at most one selected component, with cyclic next-traversal.

use crate::types::component::LoadedComponent;


#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<String>,
}


impl Selection {
    pub fn new() -> Selection {
        Selection { selected: None }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Deselect the previous component and select the new one.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    /// Cleared on tab switch and when the edit session closes.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Advance to the next component in model order, wrapping at the end.
    /// With nothing selected the first component is chosen; an empty
    /// collection is a no-op. Returns the newly selected id.
    pub fn select_next<'a>(&mut self, components: &'a [LoadedComponent]) -> Option<&'a str> {
        if components.is_empty() {
            return None;
        }
        let next_index = match self
            .selected
            .as_ref()
            .and_then(|id| components.iter().position(|c| &c.id == id))
        {
            Some(current) => (current + 1) % components.len(),
            None => 0,
        };
        let id = components[next_index].id.as_str();
        self.selected = Some(id.to_string());
        Some(id)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::spec::Representation;

    fn comps(ids: &[&str]) -> Vec<LoadedComponent> {
        ids.iter()
            .map(|id| LoadedComponent {
                id: id.to_string(),
                kind: Representation::Kpi,
                data: serde_json::Value::Null,
                micro_prompt: String::new(),
                image_src: String::new(),
                row: 0,
                col: 0,
                width: 1,
                height: 1,
                importance: None,
            })
            .collect()
    }

    #[test]
    fn select_replaces_previous() {
        let mut sel = Selection::new();
        sel.select("c1");
        sel.select("c2");
        assert_eq!(sel.selected(), Some("c2"));
    }

    #[test]
    fn next_with_none_selected_picks_first() {
        let mut sel = Selection::new();
        let list = comps(&["c1", "c2", "c3"]);
        assert_eq!(sel.select_next(&list), Some("c1"));
    }

    #[test]
    fn next_cycles_and_wraps() {
        let mut sel = Selection::new();
        let list = comps(&["c1", "c2", "c3"]);
        sel.select_next(&list);
        assert_eq!(sel.select_next(&list), Some("c2"));
        assert_eq!(sel.select_next(&list), Some("c3"));
        assert_eq!(sel.select_next(&list), Some("c1"));
    }

    #[test]
    fn next_on_empty_collection_is_a_noop() {
        let mut sel = Selection::new();
        assert_eq!(sel.select_next(&[]), None);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn stale_selection_restarts_from_first() {
        // Selected id no longer in the collection (e.g. after reload).
        let mut sel = Selection::new();
        sel.select("gone");
        let list = comps(&["c1", "c2"]);
        assert_eq!(sel.select_next(&list), Some("c1"));
    }

    #[test]
    fn clear_deselects() {
        let mut sel = Selection::new();
        sel.select("c1");
        sel.clear();
        assert_eq!(sel.selected(), None);
    }
}
