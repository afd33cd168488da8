//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external collaborator (the HTTP task service, the interactive terminal).
//! Implementations live in `src/adapters/`.

pub mod http;
pub mod prompt;

pub use http::{HttpResponse, Transport, TransportFuture};
pub use prompt::Prompter;
