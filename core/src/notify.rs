//! Toast tray — tracks shown notifications and determines which are due for
//! auto-dismissal after a fixed display duration.

/// A transient user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at_ms: u64,
}


/// Tracks active toasts and expires them after a configurable duration.
pub struct ToastTray {
    duration_ms: u64,
    toasts: Vec<Toast>,
}


impl ToastTray {
    /// Create a new tray with the given display duration in milliseconds.
    pub fn new(duration_ms: u64) -> Self {
        ToastTray {
            duration_ms,
            toasts: Vec::new(),
        }
    }

    /// Show a toast at the given timestamp.
    pub fn push(&mut self, message: impl Into<String>, now_ms: u64) {
        self.toasts.push(Toast {
            message: message.into(),
            shown_at_ms: now_ms,
        });
    }

    /// Drop toasts whose display duration has elapsed; returns how many
    /// were dismissed.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.toasts.len();
        let duration = self.duration_ms;
        self.toasts
            .retain(|t| now_ms.saturating_sub(t.shown_at_ms) < duration);
        before - self.toasts.len()
    }

    /// Toasts still on screen, oldest first.
    pub fn active(&self) -> &[Toast] {
        &self.toasts
    }

    /// Return the configured display duration.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
