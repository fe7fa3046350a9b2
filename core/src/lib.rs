//! DashUX domain logic — spec documents, layout model, edit sessions.
//!
//! A declarative specification document (tabs × grid dimensions × positioned
//! components) is loaded once, rendered by a shell (CLI or GUI), and edited
//! through a transactional session: mutations stage into a working copy,
//! commit reduces them to a minimal patch for the clipboard, rollback
//! restores the snapshot. All operations flow through the typed `Command`
//! enum dispatched by `sys::Sys`; shell side effects (clipboard, toasts,
//! confirmation) are queued as `types::response::Action`s.

pub mod command;
pub mod data;
pub mod error;
pub mod help;
pub mod layout;
pub mod notify;
pub mod sys;
pub mod types;
