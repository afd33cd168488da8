//! Task store — client-side cache of the remote list plus edit state.
//!
//! The list is always a full replacement snapshot from the last successful
//! fetch; nothing patches individual tasks in place. The store also holds
//! the active [`Draft`] and a transient notice with its dismissal sequence.

use std::time::Duration;

use crate::task::{Draft, Task};

/// How long a notice stays visible before auto-dismissal.
pub const NOTICE_TTL: Duration = Duration::from_millis(1500);

/// Severity label attached to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// A mutation completed.
    Success,
    /// Informational outcome (e.g. a delete).
    Info,
    /// Something failed.
    Error,
}

/// A transient status message shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic sequence number; guards dismissal against stale timers.
    pub seq: u64,
    /// Severity label.
    pub level: NoticeLevel,
    /// Human-readable message.
    pub message: String,
}

/// In-memory application state: task list, active draft, current notice.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    draft: Option<Draft>,
    notice: Option<Notice>,
    next_seq: u64,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last-known task list, in server order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Overwrites the list wholesale with a fresh server snapshot.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// The active edit buffer, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    /// Mutable access to the active edit buffer for field-by-field edits.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Replaces the edit buffer.
    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = Some(draft);
    }

    /// Discards the edit buffer.
    pub fn clear_draft(&mut self) {
        self.draft = None;
    }

    /// Shows a notice, replacing any current one, and returns its sequence
    /// number for later dismissal.
    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.notice = Some(Notice { seq, level, message: message.into() });
        seq
    }

    /// The currently visible notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismisses the notice with the given sequence number.
    ///
    /// A stale `seq` (the notice was already replaced) is a no-op, so a
    /// rapid sequence of actions cannot be blanked by an old timer.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::DraftMode;

    fn task(id: &str, name: &str) -> Task {
        Task { id: id.to_string(), name: name.to_string(), description: String::new() }
    }

    #[test]
    fn replace_all_is_a_full_snapshot() {
        let mut store = TaskStore::new();
        store.replace_all(vec![task("1", "a"), task("2", "b")]);
        store.replace_all(vec![task("3", "c")]);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, "3");
    }

    #[test]
    fn replace_all_preserves_server_order() {
        let mut store = TaskStore::new();
        store.replace_all(vec![task("2", "b"), task("1", "a")]);
        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn draft_lifecycle() {
        let mut store = TaskStore::new();
        assert!(store.draft().is_none());

        store.set_draft(Draft::create());
        store.draft_mut().unwrap().name = Some("Buy milk".to_string());
        assert_eq!(store.draft().unwrap().name.as_deref(), Some("Buy milk"));
        assert_eq!(store.draft().unwrap().mode, DraftMode::Create);

        store.clear_draft();
        assert!(store.draft().is_none());
    }

    #[test]
    fn notify_replaces_previous_notice() {
        let mut store = TaskStore::new();
        store.notify(NoticeLevel::Success, "first");
        store.notify(NoticeLevel::Info, "second");
        assert_eq!(store.notice().unwrap().message, "second");
    }

    #[test]
    fn stale_dismiss_is_a_no_op() {
        let mut store = TaskStore::new();
        let first = store.notify(NoticeLevel::Success, "first");
        let second = store.notify(NoticeLevel::Info, "second");

        store.dismiss(first);
        assert_eq!(store.notice().unwrap().message, "second");

        store.dismiss(second);
        assert!(store.notice().is_none());
    }
}
