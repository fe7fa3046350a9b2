//! Layout model — the active tab's components with bounds-enforced mutation.
//!
//! Components keep document key order. Moves and resizes are all-or-nothing:
//! the candidate geometry either satisfies every grid invariant and is fully
//! applied, or the component is left untouched and the operation is rejected
//! as `OutOfBounds`.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::layout::geometry::GridPos;
use crate::types::component::LoadedComponent;
use crate::types::spec::TabSpec;


/// Which side of a component a resize targets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
}


#[derive(Debug, Clone, Default)]
pub struct LayoutModel {
    tab_id: String,
    columns: u32,
    rows: u32,
    components: Vec<LoadedComponent>,
}


impl LayoutModel {
    /// Build the model for one tab. Components with a malformed `position`
    /// are kept at the grid origin rather than dropped; the defect is logged
    /// so corrupt documents stay visible.
    pub fn load(tab_id: &str, tab: &TabSpec) -> LayoutModel {
        let components = tab
            .components
            .iter()
            .map(|(key, record)| {
                LoadedComponent::from_record(key, record).unwrap_or_else(|err| {
                    tracing::warn!(component = %key, %err, "defaulting position to origin");
                    LoadedComponent {
                        id: key.clone(),
                        kind: record.representation_type,
                        data: record.data.clone(),
                        micro_prompt: record.micro_prompt.clone(),
                        image_src: record.image_src.clone().unwrap_or_default(),
                        row: 0,
                        col: 0,
                        width: record.width,
                        height: record.height,
                        importance: record.importance.clone(),
                    }
                })
            })
            .collect();
        LayoutModel {
            tab_id: tab_id.to_string(),
            columns: tab.columns,
            rows: tab.rows,
            components,
        }
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Components in document key order.
    pub fn components(&self) -> &[LoadedComponent] {
        &self.components
    }

    pub fn find(&self, id: &str) -> Option<&LoadedComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut LoadedComponent> {
        self.components
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| LayoutError::UnknownComponent { key: id.into() })
    }

    /// Move a component by logical deltas. Either the whole move fits the
    /// grid or nothing changes.
    pub fn move_by(&mut self, id: &str, d_row: i32, d_col: i32) -> Result<GridPos> {
        let (columns, rows) = (self.columns, self.rows);
        let comp = self.find_mut(id)?;

        let new_row = comp.row as i64 + d_row as i64;
        let new_col = comp.col as i64 + d_col as i64;
        let fits = new_row >= 0
            && new_col >= 0
            && new_col + comp.width as i64 <= columns as i64
            && new_row + comp.height as i64 <= rows as i64;
        if !fits {
            return Err(LayoutError::OutOfBounds {
                key: id.into(),
                columns,
                rows,
            });
        }

        comp.row = new_row as u32;
        comp.col = new_col as u32;
        Ok(GridPos {
            row: comp.row,
            col: comp.col,
        })
    }

    /// Resize a component by `delta` units along one dimension. The size
    /// floor is 1 and the far edge must stay inside the grid.
    pub fn resize(&mut self, id: &str, dimension: Dimension, delta: i32) -> Result<(u32, u32)> {
        let (columns, rows) = (self.columns, self.rows);
        let comp = self.find_mut(id)?;

        let (origin, current, bound) = match dimension {
            Dimension::Width => (comp.col, comp.width, columns),
            Dimension::Height => (comp.row, comp.height, rows),
        };
        let candidate = current as i64 + delta as i64;
        if candidate < 1 || origin as i64 + candidate > bound as i64 {
            return Err(LayoutError::OutOfBounds {
                key: id.into(),
                columns,
                rows,
            });
        }

        match dimension {
            Dimension::Width => comp.width = candidate as u32,
            Dimension::Height => comp.height = candidate as u32,
        }
        Ok((comp.width, comp.height))
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
