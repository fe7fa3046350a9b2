use serde_json::json;

use crate::command::Command;
use crate::error::{LayoutError, Result};
use crate::layout::addressing;
use crate::layout::diff;
use crate::layout::geometry;
use crate::layout::model::{Dimension, LayoutModel};
use crate::layout::selection::Selection;
use crate::layout::session::EditSession;
use crate::types::config::DashSettings;
use crate::types::response::{Action, Response};
use crate::types::spec::SpecDoc;


/// Toast shown when the commit payload reaches the clipboard.
pub const TOAST_SAVED: &str =
    "Layout has been copied to clipboard. Please paste the layout in chat to maintain sync.";

/// Toast shown when the clipboard write fails and the session stays open.
pub const TOAST_CLIPBOARD_FAILED: &str = "Failed to copy to clipboard. Please try again.";


/// Central runtime for DashUX. Owns the canonical document, the active tab's
/// layout model, the edit session and the selection, and dispatches every
/// command.
pub struct Sys {
    doc: SpecDoc,
    settings: DashSettings,
    active_tab: String,
    model: LayoutModel,
    session: EditSession,
    selection: Selection,
    actions: Vec<Action>,
}


impl Sys {
    pub fn new(doc: SpecDoc, settings: DashSettings) -> Sys {
        let active_tab = doc
            .tab_ids()
            .first()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "tab_1".to_string());
        let model = doc
            .get(&active_tab)
            .map(|tab| LayoutModel::load(&active_tab, tab))
            .unwrap_or_default();
        Sys {
            doc,
            settings,
            active_tab,
            model,
            session: EditSession::new(),
            selection: Selection::new(),
            actions: Vec::new(),
        }
    }

    /// Return a reference to the current settings.
    pub fn settings(&self) -> &DashSettings {
        &self.settings
    }

    pub fn doc(&self) -> &SpecDoc {
        &self.doc
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn model(&self) -> &LayoutModel {
        &self.model
    }

    pub fn session_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn session_dirty(&self) -> bool {
        self.session.is_dirty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// The single dispatch method.
    pub fn execute(&mut self, cmd: Command) -> Response {
        self.actions.clear();
        match cmd {
            Command::Status { format } => self.cmd_status(format),
            Command::Help { topic } => self.cmd_help(topic),
            Command::TabList => self.cmd_tab_list(),
            Command::TabSwitch { tab } => self.cmd_tab_switch(tab),
            Command::ComponentList => self.cmd_component_list(),
            Command::Select { target } => self.cmd_select(target),
            Command::SelectNext => self.cmd_select_next(),
            Command::Move { target, rows, cols } => self.cmd_move(target, rows, cols),
            Command::Resize {
                target,
                dimension,
                delta,
            } => self.cmd_resize(target, dimension, delta),
            Command::EditOpen => self.cmd_edit_open(),
            Command::EditToggle { enabled } => self.cmd_edit_toggle(enabled),
            Command::EditCommit => self.cmd_edit_commit(),
            Command::EditAck { ok } => self.cmd_edit_ack(ok),
            Command::EditRollback => self.cmd_edit_rollback(),
        }
    }

    /// Actions emitted during the last execute() call.
    pub fn pending_actions(&self) -> &[Action] {
        &self.actions
    }

    /// Take and clear accumulated actions.
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// The document the view reflects: the working copy while a session is
    /// open, the canonical document otherwise.
    fn current_doc(&self) -> &SpecDoc {
        self.session.working().unwrap_or(&self.doc)
    }

    fn reload_model(&mut self) {
        let tab = self.current_doc().get(&self.active_tab).cloned();
        self.model = match tab {
            Some(tab) => LayoutModel::load(&self.active_tab, &tab),
            None => LayoutModel::default(),
        };
    }

    /// Target of a gesture: an explicit target string, or the selection.
    fn gesture_target(&self, target: Option<String>) -> Result<String> {
        match target {
            Some(t) => addressing::resolve(&t, &self.active_tab),
            None => self
                .selection
                .selected()
                .map(str::to_string)
                .ok_or_else(|| LayoutError::bad_target("no component selected")),
        }
    }

    /// Propagate a component's post-mutation geometry into the session.
    fn record_mutation(&mut self, key: &str) -> Result<String> {
        let Some(comp) = self.model.find(key) else {
            return Err(LayoutError::UnknownComponent { key: key.into() });
        };
        let (row, col, width, height) = (comp.row, comp.col, comp.width, comp.height);
        let index = geometry::tab_index(&self.active_tab)?;
        let position = geometry::format_position(index, row, col);
        self.session
            .record_change(&self.active_tab, key, position.clone(), width, height)?;
        Ok(position)
    }

    fn respond(result: Result<String>) -> Response {
        match result {
            Ok(output) => Response::Ok { output },
            Err(e) => Response::Error {
                message: e.to_string(),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Status / Help
    // -----------------------------------------------------------------------

    fn cmd_status(&self, format: Option<String>) -> Response {
        if format.as_deref() == Some("json") {
            return Response::ok(
                json!({
                    "tabs": self.current_doc().tab_count(),
                    "active_tab": self.active_tab,
                    "components": self.model.components().len(),
                    "session_open": self.session.is_open(),
                    "dirty": self.session.is_dirty(),
                    "selected": self.selection.selected(),
                })
                .to_string(),
            );
        }
        let session = if self.session.is_dirty() {
            "open (unsaved changes)"
        } else if self.session.is_open() {
            "open"
        } else {
            "closed"
        };
        Response::ok(format!(
            "DashUX: {} tabs, active {} ({}x{}, {} components), session {}",
            self.current_doc().tab_count(),
            self.active_tab,
            self.model.columns(),
            self.model.rows(),
            self.model.components().len(),
            session,
        ))
    }

    fn cmd_help(&self, topic: Option<String>) -> Response {
        Response::ok(crate::help::help_text(topic.as_deref()))
    }

    // -----------------------------------------------------------------------
    // Tab commands
    // -----------------------------------------------------------------------

    fn cmd_tab_list(&self) -> Response {
        let tabs: Vec<serde_json::Value> = self
            .current_doc()
            .tabs
            .iter()
            .map(|(id, tab)| {
                json!({
                    "id": id,
                    "columns": tab.columns,
                    "rows": tab.rows,
                    "components": tab.components.len(),
                })
            })
            .collect();
        Response::ok(serde_json::Value::Array(tabs).to_string())
    }

    fn cmd_tab_switch(&mut self, tab: String) -> Response {
        if self.current_doc().get(&tab).is_none() {
            return Response::error(LayoutError::UnknownTab { tab }.to_string());
        }
        self.active_tab = tab;
        self.selection.clear();
        self.reload_model();
        Response::ok(format!("Switched to {}", self.active_tab))
    }

    // -----------------------------------------------------------------------
    // Component commands
    // -----------------------------------------------------------------------

    fn cmd_component_list(&self) -> Response {
        let unit = self.settings.unit_size;
        let comps: Vec<serde_json::Value> = self
            .model
            .components()
            .iter()
            .map(|c| {
                let mut value = serde_json::to_value(c).unwrap_or(serde_json::Value::Null);
                if let Some(obj) = value.as_object_mut() {
                    let px = geometry::to_pixels(c.row, c.col, c.width, c.height, unit);
                    obj.insert(
                        "pixels".into(),
                        serde_json::to_value(px).unwrap_or(serde_json::Value::Null),
                    );
                    obj.insert(
                        "selected".into(),
                        serde_json::Value::Bool(self.selection.selected() == Some(c.id.as_str())),
                    );
                }
                value
            })
            .collect();
        Response::ok(serde_json::Value::Array(comps).to_string())
    }

    fn cmd_select(&mut self, target: String) -> Response {
        let result = addressing::resolve(&target, &self.active_tab).and_then(|key| {
            if self.model.find(&key).is_none() {
                return Err(LayoutError::UnknownComponent { key });
            }
            self.selection.select(&key);
            Ok(format!("Selected {}", key))
        });
        Self::respond(result)
    }

    fn cmd_select_next(&mut self) -> Response {
        match self.selection.select_next(self.model.components()) {
            Some(id) => Response::ok(format!("Selected {}", id)),
            None => Response::ok("No components to select"),
        }
    }

    fn cmd_move(&mut self, target: Option<String>, rows: i32, cols: i32) -> Response {
        let result = (|| {
            if !self.session.is_open() {
                return Err(LayoutError::SessionNotOpen);
            }
            let key = self.gesture_target(target)?;
            self.model.move_by(&key, rows, cols)?;
            let position = self.record_mutation(&key)?;
            Ok(format!("Moved {} to {}", key, position))
        })();
        Self::respond(result)
    }

    fn cmd_resize(&mut self, target: Option<String>, dimension: Dimension, delta: i32) -> Response {
        let result = (|| {
            if !self.session.is_open() {
                return Err(LayoutError::SessionNotOpen);
            }
            let key = self.gesture_target(target)?;
            let (width, height) = self.model.resize(&key, dimension, delta)?;
            self.record_mutation(&key)?;
            Ok(format!("Resized {} to {}x{}", key, width, height))
        })();
        Self::respond(result)
    }

    // -----------------------------------------------------------------------
    // Edit-session commands
    // -----------------------------------------------------------------------

    fn cmd_edit_open(&mut self) -> Response {
        match self.session.open(&self.doc) {
            Ok(()) => Response::ok("Edit session opened"),
            Err(e) => Response::error(e.to_string()),
        }
    }

    fn cmd_edit_toggle(&mut self, enabled: bool) -> Response {
        if enabled {
            return self.cmd_edit_open();
        }
        if !self.session.is_open() {
            return Response::error(LayoutError::SessionNotOpen.to_string());
        }
        if self.session.is_dirty() {
            self.actions.push(Action::ConfirmUnsaved);
            return Response::ok(
                "Unsaved changes; choose 'edit commit' or 'edit rollback' to close",
            );
        }
        let result = self.session.rollback(&mut self.doc).map(|()| {
            self.selection.clear();
            self.reload_model();
            "Edit session closed".to_string()
        });
        Self::respond(result)
    }

    fn cmd_edit_commit(&mut self) -> Response {
        match self.session.commit(&mut self.doc) {
            Err(e) => Response::error(e.to_string()),
            Ok(None) => {
                self.selection.clear();
                self.reload_model();
                Response::ok("No changes to commit")
            }
            Ok(Some(extracted)) => {
                let payload = diff::clipboard_payload(&extracted);
                self.actions.push(Action::CopyToClipboard {
                    text: payload.clone(),
                });
                Response::ok(payload)
            }
        }
    }

    fn cmd_edit_ack(&mut self, ok: bool) -> Response {
        match self.session.ack(ok) {
            Err(e) => Response::error(e.to_string()),
            Ok(true) => {
                self.selection.clear();
                self.reload_model();
                self.actions.push(Action::ShowToast {
                    message: TOAST_SAVED.into(),
                });
                Response::ok("Edit session closed")
            }
            Ok(false) => {
                self.actions.push(Action::ShowToast {
                    message: TOAST_CLIPBOARD_FAILED.into(),
                });
                Response::ok("Commit not acknowledged; edit session remains open")
            }
        }
    }

    fn cmd_edit_rollback(&mut self) -> Response {
        let result = self.session.rollback(&mut self.doc).map(|()| {
            self.selection.clear();
            self.reload_model();
            "Edits discarded".to_string()
        });
        Self::respond(result)
    }
}
