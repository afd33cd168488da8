//! Live adapters backed by the real network and terminal.

pub mod http;
pub mod prompt;

pub use http::LiveTransport;
pub use prompt::StdinPrompter;
