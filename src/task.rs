//! Task and draft data model.

use serde::{Deserialize, Serialize};

/// A todo item as served by the remote API.
///
/// Ids are opaque and assigned server-side; the client never invents them.
/// The backend names the id field `_id` on the wire, so the deserializer
/// accepts both spellings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned opaque identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Short task name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Whether a draft will be submitted as a create or an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    /// A new task; no id yet.
    #[default]
    Create,
    /// An edit of an existing task identified by `Draft::id`.
    Update,
}

/// In-flight edit buffer for a create or update, not yet persisted.
///
/// Instantiated empty for "add", prefilled from a [`Task`] for "edit",
/// mutated field-by-field as the user supplies values, and consumed on a
/// successful save or discarded on cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    /// Target task id; set only for updates.
    pub id: Option<String>,
    /// Pending task name.
    pub name: Option<String>,
    /// Pending description.
    pub description: Option<String>,
    /// Create or update routing for [`save`](crate::sync::SyncController::save).
    pub mode: DraftMode,
}

impl Draft {
    /// An empty draft for creating a new task.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// A draft prefilled from an existing task, ready to update it.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            id: Some(task.id.clone()),
            name: Some(task.name.clone()),
            description: Some(task.description.clone()),
            mode: DraftMode::Update,
        }
    }
}
