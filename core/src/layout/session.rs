//! Edit session — snapshot, working copy, changed-set, commit/rollback.
//!
//! The session is a two-state machine (closed/open). While open, accepted
//! mutations land in the working copy and their `(tab, component)` pair
//! joins an insertion-ordered changed-set. Commit overwrites the canonical
//! document with the working copy and extracts the minimal diff; the session
//! then stays open until the shell acknowledges the clipboard write, so a
//! failed write can be retried and reproduces the identical payload.
//! Rollback restores the canonical document from the snapshot.

use indexmap::IndexSet;

use crate::error::{LayoutError, Result};
use crate::layout::diff::{self, DiffDoc};
use crate::types::spec::SpecDoc;


#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: Option<OpenSession>,
}


#[derive(Debug, Clone)]
struct OpenSession {
    snapshot: SpecDoc,
    working: SpecDoc,
    changed: IndexSet<(String, String)>,
    committed: bool,
}


impl EditSession {
    pub fn new() -> EditSession {
        EditSession { state: None }
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Open with unsaved (uncommitted or unacknowledged) changes.
    pub fn is_dirty(&self) -> bool {
        self.state
            .as_ref()
            .map(|s| !s.changed.is_empty())
            .unwrap_or(false)
    }

    pub fn changed_count(&self) -> usize {
        self.state.as_ref().map(|s| s.changed.len()).unwrap_or(0)
    }

    /// The working copy, while the session is open.
    pub fn working(&self) -> Option<&SpecDoc> {
        self.state.as_ref().map(|s| &s.working)
    }

    /// Capture the snapshot and working copy from the canonical document.
    pub fn open(&mut self, canonical: &SpecDoc) -> Result<()> {
        if self.state.is_some() {
            return Err(LayoutError::SessionAlreadyOpen);
        }
        tracing::info!("edit session opened");
        self.state = Some(OpenSession {
            snapshot: canonical.clone(),
            working: canonical.clone(),
            changed: IndexSet::new(),
            committed: false,
        });
        Ok(())
    }

    /// Record an accepted mutation: write the new geometry into the working
    /// copy and add the component to the changed-set (idempotently).
    ///
    /// Returns `false` when the component does not resolve in the working
    /// copy; nothing is recorded in that case.
    pub fn record_change(
        &mut self,
        tab: &str,
        key: &str,
        position: String,
        width: u32,
        height: u32,
    ) -> Result<bool> {
        let open = self.state.as_mut().ok_or(LayoutError::SessionNotOpen)?;
        let Some(record) = open.working.component_mut(tab, key) else {
            return Ok(false);
        };
        record.position = position;
        record.width = width;
        record.height = height;
        open.changed.insert((tab.to_string(), key.to_string()));
        Ok(true)
    }

    /// Merge the working copy into the canonical document and extract the
    /// minimal diff.
    ///
    /// With an empty changed-set this is a no-op close and returns `None`.
    /// Otherwise the canonical document is fully overwritten with the
    /// working copy, the diff is returned, and the session remains open
    /// until `ack(true)` — re-invoking commit before then reproduces the
    /// same diff.
    pub fn commit(&mut self, canonical: &mut SpecDoc) -> Result<Option<DiffDoc>> {
        let open = self.state.as_mut().ok_or(LayoutError::SessionNotOpen)?;
        if open.changed.is_empty() {
            tracing::info!("edit session closed with no changes");
            self.state = None;
            return Ok(None);
        }
        *canonical = open.working.clone();
        let extracted = diff::extract(&open.changed, &open.working);
        open.committed = true;
        tracing::info!(components = extracted.values().map(|t| t.len()).sum::<usize>(), "edit session committed");
        Ok(Some(extracted))
    }

    /// Shell acknowledgement of the clipboard write. `true` closes the
    /// session; `false` keeps it (and the changed-set) intact for a retry.
    pub fn ack(&mut self, ok: bool) -> Result<bool> {
        let open = self.state.as_ref().ok_or(LayoutError::SessionNotOpen)?;
        if !open.committed {
            return Err(LayoutError::NoPendingCommit);
        }
        if ok {
            self.state = None;
            tracing::info!("edit session closed");
        } else {
            tracing::warn!("commit not acknowledged; session stays open");
        }
        Ok(ok)
    }

    /// Discard the working copy, restore the canonical document from the
    /// snapshot, and close.
    pub fn rollback(&mut self, canonical: &mut SpecDoc) -> Result<()> {
        let open = self.state.take().ok_or(LayoutError::SessionNotOpen)?;
        *canonical = open.snapshot;
        tracing::info!("edit session rolled back");
        Ok(())
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> SpecDoc {
        serde_json::from_str(
            r#"{
            "tab_1": {
                "columns": 4, "rows": 3,
                "tab_1_comp_1": {
                    "representation_type": "kpi",
                    "position": "Tab1!R1C1", "width": 2, "height": 1
                },
                "tab_1_comp_2": {
                    "representation_type": "table",
                    "position": "Tab1!R2C1", "width": 1, "height": 1
                }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn starts_closed() {
        let s = EditSession::new();
        assert!(!s.is_open());
        assert!(!s.is_dirty());
    }

    #[test]
    fn double_open_fails_loudly() {
        let canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        assert!(matches!(
            s.open(&canonical),
            Err(LayoutError::SessionAlreadyOpen)
        ));
    }

    #[test]
    fn commit_while_closed_fails_loudly() {
        let mut canonical = doc();
        let mut s = EditSession::new();
        assert!(matches!(
            s.commit(&mut canonical),
            Err(LayoutError::SessionNotOpen)
        ));
        assert!(matches!(
            s.rollback(&mut canonical),
            Err(LayoutError::SessionNotOpen)
        ));
        assert!(matches!(s.ack(true), Err(LayoutError::SessionNotOpen)));
    }

    #[test]
    fn record_change_updates_working_not_canonical() {
        let canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();

        let working = s.working().unwrap();
        assert_eq!(
            working.component("tab_1", "tab_1_comp_1").unwrap().position,
            "Tab1!R2C1"
        );
        // canonical untouched
        assert_eq!(
            canonical.component("tab_1", "tab_1_comp_1").unwrap().position,
            "Tab1!R1C1"
        );
        assert!(s.is_dirty());
    }

    #[test]
    fn record_change_is_idempotent_in_the_changed_set() {
        let canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R3C1".into(), 2, 1)
            .unwrap();
        assert_eq!(s.changed_count(), 1);
    }

    #[test]
    fn record_change_skips_unresolvable_components() {
        let canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        let recorded = s
            .record_change("tab_1", "tab_1_comp_9", "Tab1!R1C1".into(), 1, 1)
            .unwrap();
        assert!(!recorded);
        assert_eq!(s.changed_count(), 0);
    }

    #[test]
    fn commit_with_no_changes_is_a_noop_close() {
        let mut canonical = doc();
        let before = canonical.clone();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        let diff = s.commit(&mut canonical).unwrap();
        assert!(diff.is_none());
        assert!(!s.is_open());
        assert_eq!(canonical, before);
    }

    #[test]
    fn commit_merges_and_stays_open_until_ack() {
        let mut canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();

        let diff = s.commit(&mut canonical).unwrap().unwrap();
        assert_eq!(
            canonical.component("tab_1", "tab_1_comp_1").unwrap().position,
            "Tab1!R2C1"
        );
        assert_eq!(diff["tab_1"]["tab_1_comp_1"].position, "Tab1!R2C1");
        assert!(s.is_open());

        assert!(s.ack(true).unwrap());
        assert!(!s.is_open());
    }

    #[test]
    fn failed_ack_allows_identical_retry() {
        let mut canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();

        let first = s.commit(&mut canonical).unwrap().unwrap();
        assert!(!s.ack(false).unwrap());
        assert!(s.is_open());

        let second = s.commit(&mut canonical).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ack_without_commit_is_misuse() {
        let canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        assert!(matches!(s.ack(true), Err(LayoutError::NoPendingCommit)));
        assert!(s.is_open());
    }

    #[test]
    fn rollback_restores_pre_session_state() {
        let mut canonical = doc();
        let before = canonical.clone();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R3C2".into(), 1, 1)
            .unwrap();
        s.record_change("tab_1", "tab_1_comp_2", "Tab1!R1C4".into(), 1, 2)
            .unwrap();

        s.rollback(&mut canonical).unwrap();
        assert!(!s.is_open());
        assert_eq!(canonical, before);
    }

    #[test]
    fn rollback_after_unacknowledged_commit_restores_snapshot() {
        let mut canonical = doc();
        let before = canonical.clone();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();
        s.commit(&mut canonical).unwrap();
        assert_ne!(canonical, before);

        s.rollback(&mut canonical).unwrap();
        assert_eq!(canonical, before);
    }

    #[test]
    fn reopen_after_commit_starts_from_committed_state() {
        let mut canonical = doc();
        let mut s = EditSession::new();
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_1", "Tab1!R2C1".into(), 2, 1)
            .unwrap();
        s.commit(&mut canonical).unwrap();
        s.ack(true).unwrap();

        // Second session's snapshot is the just-committed state, so a
        // rollback now must NOT revert the first session's edit.
        s.open(&canonical).unwrap();
        s.record_change("tab_1", "tab_1_comp_2", "Tab1!R3C1".into(), 1, 1)
            .unwrap();
        s.rollback(&mut canonical).unwrap();
        assert_eq!(
            canonical.component("tab_1", "tab_1_comp_1").unwrap().position,
            "Tab1!R2C1"
        );
        assert_eq!(
            canonical.component("tab_1", "tab_1_comp_2").unwrap().position,
            "Tab1!R2C1"
        );
    }
}
