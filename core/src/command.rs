//! Command — the typed interface for all DashUX operations.
//!
//! Every user gesture (move, resize, select, edit-session toggle) maps 1:1
//! to a command; the CLI and the GUI shell both speak this enum.

use serde::{Deserialize, Serialize};

use crate::layout::model::Dimension;


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    // -----------------------------------------------------------------
    // Top-level commands
    // -----------------------------------------------------------------

    #[serde(rename = "status")]
    Status {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    #[serde(rename = "help")]
    Help {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        topic: Option<String>,
    },

    // -----------------------------------------------------------------
    // Tab commands
    // -----------------------------------------------------------------

    #[serde(rename = "tab.list")]
    TabList,

    #[serde(rename = "tab.switch")]
    TabSwitch {
        tab: String,
    },

    // -----------------------------------------------------------------
    // Component commands
    // -----------------------------------------------------------------

    #[serde(rename = "comp.list")]
    ComponentList,

    #[serde(rename = "comp.select")]
    Select {
        target: String,
    },

    #[serde(rename = "comp.next")]
    SelectNext,

    #[serde(rename = "comp.move")]
    Move {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        rows: i32,
        cols: i32,
    },

    #[serde(rename = "comp.resize")]
    Resize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
        dimension: Dimension,
        delta: i32,
    },

    // -----------------------------------------------------------------
    // Edit-session commands
    // -----------------------------------------------------------------

    #[serde(rename = "edit.open")]
    EditOpen,

    #[serde(rename = "edit.toggle")]
    EditToggle {
        enabled: bool,
    },

    #[serde(rename = "edit.commit")]
    EditCommit,

    #[serde(rename = "edit.ack")]
    EditAck {
        ok: bool,
    },

    #[serde(rename = "edit.rollback")]
    EditRollback,
}
