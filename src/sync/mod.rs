//! Sync controller — maps user intents to REST calls and store updates.
//!
//! The controller owns the [`TaskStore`] and a boxed [`Transport`], so all
//! application state flows through one object. Every successful mutation
//! re-fetches the list to reconcile; nothing is patched client-side.

use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::ports::http::{HttpResponse, Transport};
use crate::store::{NoticeLevel, TaskStore, NOTICE_TTL};
use crate::task::{Draft, DraftMode, Task};

/// Page requested when refreshing after a mutation.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size requested when refreshing after a mutation.
pub const DEFAULT_LIMIT: u32 = 10;

const TODO_PATH: &str = "/todo";

/// Sort order hint for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Oldest first.
    Asc,
    /// Newest first; the service default.
    #[default]
    Desc,
}

impl Order {
    /// The wire value for the `orderby` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// List response envelope: the task array sits two `data` levels deep.
#[derive(Deserialize)]
struct ListEnvelope {
    data: ListPage,
}

/// Inner page of a list response.
#[derive(Deserialize)]
struct ListPage {
    data: Vec<Task>,
}

/// Orchestrates the four CRUD operations against the remote task service.
pub struct SyncController {
    transport: Box<dyn Transport>,
    store: TaskStore,
}

impl SyncController {
    /// Creates a controller with an empty store over the given transport.
    #[must_use]
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport, store: TaskStore::new() }
    }

    /// Read access to the application state.
    #[must_use]
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Mutable access to the application state (draft edits, notices).
    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    /// Fetches a page of tasks and replaces the store's list with it.
    ///
    /// On failure the store keeps its previous snapshot.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`], [`Error::Status`], or [`Error::Decode`].
    pub async fn list(&mut self, page: u32, limit: u32, order: Order) -> Result<(), Error> {
        let query = [
            ("page".to_string(), page.to_string()),
            ("limit".to_string(), limit.to_string()),
            ("orderby".to_string(), order.as_str().to_string()),
        ];
        let response = self
            .transport
            .get(TODO_PATH, &query)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let body = ok_body(response)?;
        let envelope: ListEnvelope =
            serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))?;
        self.store.replace_all(envelope.data.data);
        Ok(())
    }

    /// Re-fetches the list with the default paging used after mutations.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`SyncController::list`].
    pub async fn refresh(&mut self) -> Result<(), Error> {
        self.list(DEFAULT_PAGE, DEFAULT_LIMIT, Order::Desc).await
    }

    /// Submits the store's draft, routing on its mode.
    ///
    /// This is the single entry point for the presentation layer's save
    /// action: drafts in update mode go to the update path, everything else
    /// to the create path.
    ///
    /// # Errors
    ///
    /// [`Error::NoDraft`] when no draft is active, plus the failure modes of
    /// [`SyncController::create`] and [`SyncController::update`].
    pub async fn save(&mut self) -> Result<(), Error> {
        let draft = self.store.draft().cloned().ok_or(Error::NoDraft)?;
        match draft.mode {
            DraftMode::Update => self.update(&draft).await,
            DraftMode::Create => self.create(&draft).await,
        }
    }

    /// Creates a new task from the draft.
    ///
    /// On success the draft is consumed, a success notice is shown, and the
    /// list is re-fetched. On failure the draft stays in the store so the
    /// user can retry.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyName`] before dispatch, otherwise transport-level
    /// failures.
    pub async fn create(&mut self, draft: &Draft) -> Result<(), Error> {
        let body = draft_body(draft)?;
        let response = self
            .transport
            .post(TODO_PATH, &body)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        ok_body(response)?;
        // The mutation is committed server-side from here on.
        self.store.clear_draft();
        self.store.notify(NoticeLevel::Success, "Add todo success");
        self.refresh().await
    }

    /// Overwrites the task identified by `draft.id` with the draft's fields.
    ///
    /// Same success and failure contract as [`SyncController::create`].
    ///
    /// # Errors
    ///
    /// [`Error::MissingId`] or [`Error::EmptyName`] before dispatch,
    /// otherwise transport-level failures.
    pub async fn update(&mut self, draft: &Draft) -> Result<(), Error> {
        let id = draft.id.as_deref().ok_or(Error::MissingId)?;
        let body = draft_body(draft)?;
        let path = format!("{TODO_PATH}/{id}");
        let response = self
            .transport
            .put(&path, &body)
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        ok_body(response)?;
        self.store.clear_draft();
        self.store.notify(NoticeLevel::Info, "Update todo success");
        self.refresh().await
    }

    /// Deletes the identified task, then re-fetches the list.
    ///
    /// Confirmation is the presentation layer's job; by the time this runs
    /// the user has already agreed.
    ///
    /// # Errors
    ///
    /// Transport-level failures; the store is left untouched on error.
    pub async fn remove(&mut self, id: &str) -> Result<(), Error> {
        let path = format!("{TODO_PATH}/{id}");
        let response =
            self.transport.delete(&path).await.map_err(|e| Error::Transport(e.to_string()))?;
        ok_body(response)?;
        self.store.notify(NoticeLevel::Info, "Delete todo success");
        self.refresh().await
    }

    /// Dismisses the given notice after [`NOTICE_TTL`] has elapsed.
    ///
    /// Dismissal is sequence-guarded: if a newer notice replaced this one in
    /// the meantime, the expiry is a no-op.
    pub async fn expire_notice(&mut self, seq: u64) {
        tokio::time::sleep(NOTICE_TTL).await;
        self.store.dismiss(seq);
    }
}

/// Validates the draft and builds the JSON body shared by create and update.
fn draft_body(draft: &Draft) -> Result<serde_json::Value, Error> {
    let name = draft.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    let Some(name) = name else {
        return Err(Error::EmptyName);
    };
    let description = draft.description.as_deref().unwrap_or("");
    Ok(json!({ "name": name, "description": description }))
}

/// Maps a completed exchange to its body, rejecting non-2xx statuses.
fn ok_body(response: HttpResponse) -> Result<String, Error> {
    if (200..300).contains(&response.status) {
        Ok(response.body)
    } else {
        Err(Error::Status { status: response.status, body: response.body })
    }
}
