//! HTTP transport port for talking to the remote task service.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`Transport`] to keep the trait
/// dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A raw HTTP response as seen by the application core.
///
/// The transport reports every completed exchange, 2xx or not; interpreting
/// the status code is the caller's job.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, read to completion.
    pub body: String,
}

/// Dispatches requests against the task service's base URL.
///
/// `path` is appended to the configured base URL (e.g. `/todo` or
/// `/todo/{id}`). Abstracting the transport lets tests script responses and
/// record dispatched calls without a network.
pub trait Transport: Send + Sync {
    /// Sends a GET with the given query pairs.
    ///
    /// # Errors
    ///
    /// The future resolves to an error only when the exchange itself fails
    /// (connect, TLS, read); a non-2xx response is a success at this layer.
    fn get(&self, path: &str, query: &[(String, String)]) -> TransportFuture<'_>;

    /// Sends a POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Same contract as [`Transport::get`].
    fn post(&self, path: &str, body: &serde_json::Value) -> TransportFuture<'_>;

    /// Sends a PUT with a JSON body.
    ///
    /// # Errors
    ///
    /// Same contract as [`Transport::get`].
    fn put(&self, path: &str, body: &serde_json::Value) -> TransportFuture<'_>;

    /// Sends a DELETE.
    ///
    /// # Errors
    ///
    /// Same contract as [`Transport::get`].
    fn delete(&self, path: &str) -> TransportFuture<'_>;
}
