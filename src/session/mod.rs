//! Edit session — the modal state machine driven by the presentation layer.
//!
//! Transitions: `Closed → Open` when the user asks to add or edit a task,
//! `Open → Closed` on cancel (draft discarded) or on a successful save
//! (draft consumed, list refreshed). Deletes never open the modal but must
//! pass a confirmation prompt before the request is dispatched.

use crate::error::Error;
use crate::ports::prompt::Prompter;
use crate::sync::SyncController;
use crate::task::Draft;

/// Whether the edit modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modal {
    /// No edit in progress.
    #[default]
    Closed,
    /// A draft is being edited; its mode says create vs. update.
    Open,
}

/// Presentation-layer state: the controller plus the modal flag.
pub struct Session {
    sync: SyncController,
    modal: Modal,
}

impl Session {
    /// Wraps a controller in a fresh session with the modal closed.
    #[must_use]
    pub fn new(sync: SyncController) -> Self {
        Self { sync, modal: Modal::Closed }
    }

    /// The underlying controller, for list access and rendering.
    #[must_use]
    pub fn sync(&self) -> &SyncController {
        &self.sync
    }

    /// Mutable controller access, for operations outside the modal flow.
    pub fn sync_mut(&mut self) -> &mut SyncController {
        &mut self.sync
    }

    /// Current modal state.
    #[must_use]
    pub fn modal(&self) -> Modal {
        self.modal
    }

    /// Opens the modal with an empty create draft ("Add Task").
    pub fn open_create(&mut self) {
        self.sync.store_mut().set_draft(Draft::create());
        self.modal = Modal::Open;
    }

    /// Opens the modal with a draft prefilled from the identified task.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTask`] when the id is not in the current list.
    pub fn open_edit(&mut self, id: &str) -> Result<(), Error> {
        let task = self
            .sync
            .store()
            .tasks()
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTask(id.to_string()))?;
        let draft = Draft::edit(task);
        self.sync.store_mut().set_draft(draft);
        self.modal = Modal::Open;
        Ok(())
    }

    /// Sets the draft's name, as the user types into the name field.
    pub fn edit_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.sync.store_mut().draft_mut() {
            draft.name = Some(name.into());
        }
    }

    /// Sets the draft's description.
    pub fn edit_description(&mut self, description: impl Into<String>) {
        if let Some(draft) = self.sync.store_mut().draft_mut() {
            draft.description = Some(description.into());
        }
    }

    /// Discards the draft and closes the modal.
    pub fn cancel(&mut self) {
        self.sync.store_mut().clear_draft();
        self.modal = Modal::Closed;
    }

    /// Saves the draft; on success the modal closes, on failure it stays
    /// open with the draft retained so the user can retry.
    ///
    /// # Errors
    ///
    /// Whatever [`SyncController::save`] reports.
    pub async fn save(&mut self) -> Result<(), Error> {
        self.sync.save().await?;
        self.modal = Modal::Closed;
        Ok(())
    }

    /// Deletes the identified task after explicit confirmation.
    ///
    /// Returns `Ok(false)` when the user declines; no request is dispatched
    /// in that case.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTask`] for an id not in the list, [`Error::Prompt`]
    /// when the answer cannot be read, plus the failure modes of
    /// [`SyncController::remove`].
    pub async fn remove(&mut self, id: &str, prompter: &dyn Prompter) -> Result<bool, Error> {
        let name = self
            .sync
            .store()
            .tasks()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.clone())
            .ok_or_else(|| Error::UnknownTask(id.to_string()))?;
        let confirmed = prompter
            .confirm(&format!("Delete {name}?"))
            .map_err(|e| Error::Prompt(e.to_string()))?;
        if !confirmed {
            return Ok(false);
        }
        self.sync.remove(id).await?;
        Ok(true)
    }
}
