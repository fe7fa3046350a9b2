//! Response and shell-action types.
//!
//! `Sys::execute` answers every command with a `Response`. Side effects that
//! must be performed by the surrounding shell (clipboard writes, toasts,
//! unsaved-changes confirmation) are queued as `Action`s during execution
//! and drained by the shell afterwards.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Response {
    Ok { output: String },
    Error { message: String },
}


impl Response {
    pub fn ok(output: impl Into<String>) -> Response {
        Response::Ok {
            output: output.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Response {
        Response::Error {
            message: message.into(),
        }
    }
}


/// A side effect the shell must carry out after `execute()` returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action")]
pub enum Action {
    /// Write `text` to the system clipboard. Emitted exactly once per commit;
    /// the shell reports the outcome back via `edit.ack`.
    #[serde(rename = "clipboard.copy")]
    CopyToClipboard { text: String },

    /// Show a transient user-visible notification.
    #[serde(rename = "toast.show")]
    ShowToast { message: String },

    /// A close was requested while unsaved changes exist. The shell must
    /// present save/discard and issue `edit.commit` or `edit.rollback`.
    #[serde(rename = "edit.confirm_unsaved")]
    ConfirmUnsaved,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_constructors() {
        assert_eq!(
            Response::ok("done"),
            Response::Ok {
                output: "done".into()
            }
        );
        assert_eq!(
            Response::error("bad"),
            Response::Error {
                message: "bad".into()
            }
        );
    }

    #[test]
    fn clipboard_action_round_trip() {
        let a = Action::CopyToClipboard {
            text: "payload".into(),
        };
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"action\":\"clipboard.copy\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn toast_action_round_trip() {
        let a = Action::ShowToast {
            message: "saved".into(),
        };
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"action\":\"toast.show\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn confirm_action_round_trip() {
        let a = Action::ConfirmUnsaved;
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"action\":\"edit.confirm_unsaved\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
