//! Live adapter for the `Transport` port using reqwest.

use reqwest::{Client, RequestBuilder};

use crate::config::ApiConfig;
use crate::ports::http::{HttpResponse, Transport, TransportFuture};

/// Live HTTP transport that calls the configured task service.
pub struct LiveTransport {
    client: Client,
    base_url: String,
    secret_key: Option<String>,
}

impl LiveTransport {
    /// Creates a transport for the given service configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            secret_key: config.secret_key.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.secret_key {
            Some(key) => builder.header("x-api-key", key),
            None => builder,
        }
    }

    fn exchange(&self, builder: RequestBuilder) -> TransportFuture<'_> {
        let builder = self.authed(builder);
        Box::pin(async move {
            let response = builder
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { e.to_string().into() })?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read response body: {e}").into()
                },
            )?;
            Ok(HttpResponse { status, body })
        })
    }
}

impl Transport for LiveTransport {
    fn get(&self, path: &str, query: &[(String, String)]) -> TransportFuture<'_> {
        self.exchange(self.client.get(self.url(path)).query(query))
    }

    fn post(&self, path: &str, body: &serde_json::Value) -> TransportFuture<'_> {
        self.exchange(self.client.post(self.url(path)).json(body))
    }

    fn put(&self, path: &str, body: &serde_json::Value) -> TransportFuture<'_> {
        self.exchange(self.client.put(self.url(path)).json(body))
    }

    fn delete(&self, path: &str) -> TransportFuture<'_> {
        self.exchange(self.client.delete(self.url(path)))
    }
}
