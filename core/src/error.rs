//! Error taxonomy for DashUX core operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// A move or resize would violate the grid invariants. Not fatal: the
    /// operation is rejected and the component is left unchanged.
    #[error("'{key}' would leave the {columns}x{rows} grid")]
    OutOfBounds { key: String, columns: u32, rows: u32 },

    /// A position string does not match `Tab<N>!R<r>C<c>`.
    #[error("malformed position string: '{value}'")]
    MalformedPosition { value: String },

    #[error("an edit session is already open")]
    SessionAlreadyOpen,

    #[error("no edit session is open")]
    SessionNotOpen,

    /// An acknowledgement arrived for a commit that was never issued.
    #[error("no commit is awaiting acknowledgement")]
    NoPendingCommit,

    #[error("unknown component: '{key}'")]
    UnknownComponent { key: String },

    #[error("unknown tab: '{tab}'")]
    UnknownTab { tab: String },

    #[error("invalid target: {message}")]
    BadTarget { message: String },

    #[error("invalid spec document: {message}")]
    InvalidDocument { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl LayoutError {
    #[must_use]
    pub fn bad_target(message: impl Into<String>) -> Self {
        Self::BadTarget {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}
