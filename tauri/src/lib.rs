//! DashUX Tauri application library.
//!
//! This crate provides the Tauri backend for the DashUX GUI (the wireframe
//! editor). It bridges the frontend JavaScript (webview) to the core `Sys`
//! runtime via IPC commands.
//!
//! # Architecture
//!
//! 1. **AppState** (this module) -- wraps `Sys` in a `Mutex` for thread-safe
//!    access from Tauri command handlers, and carries the shell-side state
//!    (toast tray, pending unsaved-changes confirmation).
//!
//! 2. **IPC handlers** (`ipc` module) -- thin `#[tauri::command]` functions
//!    that pull `AppState` from Tauri's managed state and delegate to it.
//!
//! 3. **`run()`** -- loads the spec document, assembles the Tauri
//!    application, registers all IPC handlers, the tray icon and the global
//!    edit hotkey, and starts the event loop.

pub mod ipc;

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use dashux_core::command::Command;
use dashux_core::data::spec_doc;
use dashux_core::notify::ToastTray;
use dashux_core::sys::Sys;
use dashux_core::types::config::DashSettings;
use dashux_core::types::response::{Action, Response};
use dashux_core::types::spec::SpecDoc;
use tauri::{Emitter, Manager};
use tauri_plugin_clipboard_manager::ClipboardExt;


/// Built-in document shown when no `DASH_SPEC` is configured.
const DEMO_SPEC: &str = include_str!("../demo-spec.json");

/// Menu item IDs used by the tray icon menu.
///
/// Exposed as constants so they can be tested and referenced consistently.
pub mod tray_menu_ids {
    pub const TOGGLE_EDIT: &str = "toggle_edit";
    pub const HELP: &str = "help";
    pub const QUIT: &str = "quit";
}


fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}


/// Application state shared across Tauri commands.
///
/// Wraps the core `Sys` runtime in a `Mutex` so that IPC command handlers
/// can safely access it from arbitrary threads. The toast tray and the
/// pending-confirmation flag are shell concerns and live beside it.
pub struct AppState {
    sys: Mutex<Sys>,
    toasts: Mutex<ToastTray>,
    pending_confirm: Mutex<bool>,
}


impl AppState {
    /// Create a new AppState around a loaded document.
    pub fn new(doc: SpecDoc, settings: DashSettings) -> AppState {
        let tray = ToastTray::new(settings.toast_duration_ms);
        AppState {
            sys: Mutex::new(Sys::new(doc, settings)),
            toasts: Mutex::new(tray),
            pending_confirm: Mutex::new(false),
        }
    }

    /// Execute an arbitrary Command through the core runtime.
    pub fn execute(&self, cmd: Command) -> Response {
        let mut sys = self.sys.lock().unwrap();
        sys.execute(cmd)
    }

    /// Drain and return accumulated actions.
    pub fn drain_actions(&self) -> Vec<Action> {
        let mut sys = self.sys.lock().unwrap();
        sys.drain_actions()
    }

    pub fn session_open(&self) -> bool {
        self.sys.lock().unwrap().session_open()
    }

    /// Drain queued actions and carry them out against this shell: clipboard
    /// writes (when an app handle is available), toast tracking, and the
    /// unsaved-changes confirmation flag. The acknowledgement of a clipboard
    /// write can queue follow-up toasts, so draining loops until empty.
    pub fn absorb_actions(&self, app: Option<&tauri::AppHandle>) {
        loop {
            let actions = self.drain_actions();
            if actions.is_empty() {
                break;
            }
            for action in actions {
                match action {
                    Action::CopyToClipboard { text } => {
                        let ok = match app {
                            Some(handle) => match handle.clipboard().write_text(text) {
                                Ok(()) => true,
                                Err(e) => {
                                    eprintln!("[dashux] clipboard write failed: {}", e);
                                    false
                                }
                            },
                            None => false,
                        };
                        let _ = self.execute(Command::EditAck { ok });
                    }
                    Action::ShowToast { message } => self.push_toast(message),
                    Action::ConfirmUnsaved => {
                        *self.pending_confirm.lock().unwrap() = true;
                    }
                }
            }
        }
    }

    /// Return frontend-relevant settings as a JSON string.
    pub fn get_settings(&self) -> String {
        let sys = self.sys.lock().unwrap();
        let s = sys.settings();
        serde_json::json!({
            "unit_size": s.unit_size,
            "toast_duration_ms": s.toast_duration_ms,
        })
        .to_string()
    }

    // -------------------------------------------------------------------
    // Toasts and confirmation
    // -------------------------------------------------------------------

    pub fn push_toast(&self, message: String) {
        self.toasts.lock().unwrap().push(message, now_ms());
    }

    /// Messages still on screen; expired toasts are dropped first.
    pub fn active_toasts(&self) -> Vec<String> {
        let mut tray = self.toasts.lock().unwrap();
        tray.expire(now_ms());
        tray.active().iter().map(|t| t.message.clone()).collect()
    }

    /// Take the pending unsaved-changes confirmation flag, clearing it.
    pub fn take_pending_confirm(&self) -> bool {
        std::mem::take(&mut *self.pending_confirm.lock().unwrap())
    }

    // -------------------------------------------------------------------
    // Top-level commands
    // -------------------------------------------------------------------

    pub fn status(&self) -> Response {
        self.execute(Command::Status {
            format: Some("json".into()),
        })
    }

    pub fn help(&self, topic: Option<String>) -> Response {
        self.execute(Command::Help { topic })
    }

    // -------------------------------------------------------------------
    // Tab commands
    // -------------------------------------------------------------------

    pub fn tab_list(&self) -> Response {
        self.execute(Command::TabList)
    }

    pub fn tab_switch(&self, tab: String) -> Response {
        self.execute(Command::TabSwitch { tab })
    }

    // -------------------------------------------------------------------
    // Component commands
    // -------------------------------------------------------------------

    pub fn comp_list(&self) -> Response {
        self.execute(Command::ComponentList)
    }

    pub fn select(&self, target: String) -> Response {
        self.execute(Command::Select { target })
    }

    pub fn select_next(&self) -> Response {
        self.execute(Command::SelectNext)
    }

    pub fn move_by(&self, target: Option<String>, rows: i32, cols: i32) -> Response {
        self.execute(Command::Move { target, rows, cols })
    }

    pub fn resize(
        &self,
        target: Option<String>,
        dimension: dashux_core::layout::model::Dimension,
        delta: i32,
    ) -> Response {
        self.execute(Command::Resize {
            target,
            dimension,
            delta,
        })
    }

    // -------------------------------------------------------------------
    // Edit-session commands
    // -------------------------------------------------------------------

    pub fn edit_open(&self) -> Response {
        self.execute(Command::EditOpen)
    }

    pub fn edit_toggle(&self, enabled: bool) -> Response {
        self.execute(Command::EditToggle { enabled })
    }

    pub fn edit_commit(&self) -> Response {
        self.execute(Command::EditCommit)
    }

    pub fn edit_rollback(&self) -> Response {
        self.execute(Command::EditRollback)
    }
}


/// Resolve the configuration directory: `DASH_CONFIG_DIR`, or the platform
/// config dir plus `dashux`.
fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("DASH_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("dashux")
}


/// Load settings from `<config dir>/settings.json`, falling back to defaults.
fn load_settings(spec_path: String) -> DashSettings {
    let path = resolve_config_dir().join("settings.json");
    let mut settings = match std::fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            eprintln!("[dashux] ignoring malformed {}: {}", path.display(), e);
            DashSettings::default()
        }),
        Err(_) => DashSettings::default(),
    };
    settings.spec_path = spec_path;
    settings
}


/// Load the spec document named by `DASH_SPEC`, or fall back to the built-in
/// demo document.
fn load_document() -> (SpecDoc, String) {
    if let Ok(path) = std::env::var("DASH_SPEC") {
        match spec_doc::from_file(std::path::Path::new(&path)) {
            Ok(doc) => return (doc, path),
            Err(e) => {
                eprintln!("[dashux] failed to load '{}': {} — using demo document", path, e)
            }
        }
    }
    match spec_doc::from_json(DEMO_SPEC) {
        Ok(doc) => (doc, String::new()),
        Err(e) => {
            eprintln!("[dashux] demo document failed to parse: {}", e);
            (SpecDoc::default(), String::new())
        }
    }
}


/// Handle the global hotkey / tray toggle: flip the edit session and tell
/// the webview to re-render.
fn hotkey_toggle_edit(handle: &tauri::AppHandle) {
    let state: tauri::State<AppState> = handle.state();
    let enabled = !state.session_open();
    eprintln!(
        "[dashux] toggle: turning edit session {}",
        if enabled { "on" } else { "off" }
    );
    let resp = state.edit_toggle(enabled);
    state.absorb_actions(Some(handle));
    if let Response::Error { message } = resp {
        eprintln!("[dashux] toggle failed: {}", message);
    }
    if let Err(e) = handle.emit("dashux://refresh", ()) {
        eprintln!("[dashux] refresh event failed: {}", e);
    }
}


/// Assemble and run the Tauri application.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let (doc, spec_path) = load_document();
    let settings = load_settings(spec_path);
    let state = AppState::new(doc, settings);

    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            // Top-level
            ipc::dash_status,
            ipc::dash_help,
            // Settings
            ipc::dash_get_settings,
            // Tabs
            ipc::dash_tab_list,
            ipc::dash_tab_switch,
            // Components
            ipc::dash_comp_list,
            ipc::dash_comp_select,
            ipc::dash_comp_next,
            ipc::dash_comp_move,
            ipc::dash_comp_resize,
            // Edit session
            ipc::dash_edit_open,
            ipc::dash_edit_toggle,
            ipc::dash_edit_commit,
            ipc::dash_edit_rollback,
            // Shell state
            ipc::dash_poll_toasts,
            ipc::dash_confirm_pending,
        ])
        .setup(move |app| {
            // ---------------------------------------------------------------
            // Tray icon setup
            // ---------------------------------------------------------------
            {
                use tauri::menu::{MenuBuilder, MenuItemBuilder};
                use tauri::tray::TrayIconBuilder;

                eprintln!("[dashux] setting up tray icon...");

                let toggle_item = MenuItemBuilder::with_id(
                    tray_menu_ids::TOGGLE_EDIT, "Toggle Edit Mode",
                ).build(app)?;
                let help_item = MenuItemBuilder::with_id(
                    tray_menu_ids::HELP, "Help",
                ).build(app)?;
                let quit_item = MenuItemBuilder::with_id(
                    tray_menu_ids::QUIT, "Quit",
                ).build(app)?;

                let menu = MenuBuilder::new(app)
                    .item(&toggle_item)
                    .separator()
                    .item(&help_item)
                    .separator()
                    .item(&quit_item)
                    .build()?;

                let handle_for_tray = app.handle().clone();

                let mut builder = TrayIconBuilder::new()
                    .title("DashUX")
                    .tooltip("DashUX — Wireframe Editor")
                    .menu(&menu);
                if let Some(icon) = app.default_window_icon().cloned() {
                    builder = builder.icon(icon);
                }
                let _tray = builder
                    .on_menu_event(move |_app, event| {
                        match event.id().as_ref() {
                            tray_menu_ids::TOGGLE_EDIT => {
                                hotkey_toggle_edit(&handle_for_tray);
                            }
                            tray_menu_ids::QUIT => {
                                std::process::exit(0);
                            }
                            _ => {} // help — placeholder for now
                        }
                    })
                    .build(app)?;
            }

            // ---------------------------------------------------------------
            // Global hotkey: Ctrl+Shift+E (all platforms)
            // ---------------------------------------------------------------
            #[cfg(desktop)]
            {
                use tauri_plugin_global_shortcut::{
                    Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState,
                };

                let shortcut = Shortcut::new(
                    Some(Modifiers::CONTROL | Modifiers::SHIFT),
                    Code::KeyE,
                );

                eprintln!("[dashux] registering global shortcut Ctrl+Shift+E...");
                let handle = app.handle().clone();
                app.handle().plugin(
                    tauri_plugin_global_shortcut::Builder::new()
                        .with_handler(move |_app, fired, event| {
                            if fired == &shortcut
                                && matches!(event.state(), ShortcutState::Pressed)
                            {
                                hotkey_toggle_edit(&handle);
                            }
                        })
                        .build(),
                )?;

                match app.global_shortcut().register(shortcut) {
                    Ok(_) => eprintln!("[dashux] shortcut registered successfully"),
                    Err(e) => eprintln!("[dashux] shortcut registration FAILED: {}", e),
                }
            }

            eprintln!("[dashux] setup complete");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
