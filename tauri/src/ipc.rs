//! Tauri IPC command handlers for DashUX.
//!
//! Each function is a Tauri command that bridges the frontend JavaScript to
//! the core Sys runtime via AppState. Handlers that can queue shell actions
//! (clipboard, toasts, confirmation) absorb them before returning, so the
//! frontend only ever polls `dash_poll_toasts` / `dash_confirm_pending`.

use dashux_core::layout::model::Dimension;
use dashux_core::types::response::Response;
use serde::{Deserialize, Serialize};
use tauri::State;

use crate::AppState;


/// Uniform response type for all IPC commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpcResponse {
    pub ok: bool,
    pub data: String,
}


impl IpcResponse {
    pub fn success(data: String) -> Self {
        IpcResponse { ok: true, data }
    }

    pub fn error(msg: String) -> Self {
        IpcResponse { ok: false, data: msg }
    }
}


fn to_ipc(resp: Response) -> IpcResponse {
    match resp {
        Response::Ok { output } => IpcResponse::success(output),
        Response::Error { message } => IpcResponse::error(message),
    }
}


// ---------------------------------------------------------------------------
// Top-level commands
// ---------------------------------------------------------------------------

#[tauri::command]
pub fn dash_status(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.status())
}

#[tauri::command]
pub fn dash_help(state: State<'_, AppState>, topic: Option<String>) -> IpcResponse {
    to_ipc(state.help(topic))
}

#[tauri::command]
pub fn dash_get_settings(state: State<'_, AppState>) -> IpcResponse {
    IpcResponse::success(state.get_settings())
}


// ---------------------------------------------------------------------------
// Tab commands
// ---------------------------------------------------------------------------

#[tauri::command]
pub fn dash_tab_list(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.tab_list())
}

#[tauri::command]
pub fn dash_tab_switch(state: State<'_, AppState>, tab: String) -> IpcResponse {
    to_ipc(state.tab_switch(tab))
}


// ---------------------------------------------------------------------------
// Component commands
// ---------------------------------------------------------------------------

#[tauri::command]
pub fn dash_comp_list(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.comp_list())
}

#[tauri::command]
pub fn dash_comp_select(state: State<'_, AppState>, target: String) -> IpcResponse {
    to_ipc(state.select(target))
}

#[tauri::command]
pub fn dash_comp_next(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.select_next())
}

#[tauri::command]
pub fn dash_comp_move(
    state: State<'_, AppState>,
    target: Option<String>,
    rows: i32,
    cols: i32,
) -> IpcResponse {
    to_ipc(state.move_by(target, rows, cols))
}

#[tauri::command]
pub fn dash_comp_resize(
    state: State<'_, AppState>,
    target: Option<String>,
    dimension: Dimension,
    delta: i32,
) -> IpcResponse {
    to_ipc(state.resize(target, dimension, delta))
}


// ---------------------------------------------------------------------------
// Edit-session commands
// ---------------------------------------------------------------------------

#[tauri::command]
pub fn dash_edit_open(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.edit_open())
}

#[tauri::command]
pub fn dash_edit_toggle(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    enabled: bool,
) -> IpcResponse {
    let resp = state.edit_toggle(enabled);
    state.absorb_actions(Some(&app));
    to_ipc(resp)
}

#[tauri::command]
pub fn dash_edit_commit(app: tauri::AppHandle, state: State<'_, AppState>) -> IpcResponse {
    let resp = state.edit_commit();
    state.absorb_actions(Some(&app));
    to_ipc(resp)
}

#[tauri::command]
pub fn dash_edit_rollback(state: State<'_, AppState>) -> IpcResponse {
    to_ipc(state.edit_rollback())
}


// ---------------------------------------------------------------------------
// Shell state polled by the frontend
// ---------------------------------------------------------------------------

#[tauri::command]
pub fn dash_poll_toasts(state: State<'_, AppState>) -> Vec<String> {
    state.active_toasts()
}

#[tauri::command]
pub fn dash_confirm_pending(state: State<'_, AppState>) -> bool {
    state.take_pending_confirm()
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
