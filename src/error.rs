//! Tagged error type for sync operations.

use thiserror::Error;

/// Everything that can go wrong while syncing with the remote task service.
///
/// The first three variants mirror the failure taxonomy of the transport
/// boundary (network failure, non-2xx response, malformed body); the rest are
/// client-side rejections raised before any request is dispatched.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never completed (DNS, connect, TLS, read failure).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// A draft was submitted without a usable name.
    #[error("task name must not be empty")]
    EmptyName,

    /// An update was requested for a draft that has no task id.
    #[error("draft has no task id to update")]
    MissingId,

    /// Save was called with no active draft in the store.
    #[error("no draft in progress")]
    NoDraft,

    /// A referenced task id is not present in the current list.
    #[error("no task with id {0}")]
    UnknownTask(String),

    /// The confirmation prompt could not be read.
    #[error("prompt failed: {0}")]
    Prompt(String),
}
