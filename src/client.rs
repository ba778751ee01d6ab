//! Client configuration and shared request plumbing
//!
//! `Client` bundles the OAuth client credentials with one reusable
//! `reqwest::Client` so every call shares pooled connections and a single
//! timeout policy. All endpoint invokers funnel through [`Client::execute`],
//! which owns the status-code contract: exactly 200 is success, anything
//! else surfaces the status and the raw body.

use std::time::Duration;

use tracing::debug;

use crate::constants::{API_BASE_URL, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};

/// Configuration holder for Letterboxd API calls.
///
/// Immutable after construction and cheap to clone; all invokers take
/// `&self`, so one instance can serve concurrent tasks without locking.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) client_id: String,
    pub(crate) client_secret: String,
    pub(crate) http: reqwest::Client,
}

impl Client {
    /// Create a client against the production API with the default timeout.
    ///
    /// Credentials are not validated locally; empty or wrong values only
    /// surface when the token endpoint rejects the exchange.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::builder(client_id, client_secret).build()
    }

    /// Start a builder to override the base URL, timeout, or transport.
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> ClientBuilder {
        ClientBuilder {
            base_url: API_BASE_URL.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a prepared request and apply the shared response contract.
    ///
    /// Transport failures are classified (timeout vs. other) before the
    /// status branch; non-200 responses are read in full so the error
    /// carries the body verbatim.
    pub(crate) async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(Error::transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::transport)?;
        debug!(status, bytes = body.len(), "API response");

        if status != 200 {
            return Err(Error::api(status, body));
        }
        Ok(body)
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    client_id: String,
    client_secret: String,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Point the client at a different deployment (staging, mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Supply a caller-configured transport. The builder timeout is not
    /// applied; the provided client's own policy governs.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Http(format!("building HTTP client: {e}")))?,
        };

        Ok(Client {
            base_url: self.base_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_base_url() {
        let client = Client::new("cid", "secret").unwrap();
        assert_eq!(client.base_url(), "https://api.letterboxd.com/api/v0");
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = Client::builder("cid", "secret")
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(client.url("/me"), "http://127.0.0.1:9999/me");
    }

    #[tokio::test]
    async fn unresponsive_server_fails_with_timeout() {
        // Bound but never accepted: the TCP handshake completes via the
        // kernel backlog and the response read then stalls.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = Client::builder("cid", "secret")
            .base_url(format!("http://{addr}"))
            .timeout(Duration::from_millis(250))
            .build()
            .unwrap();

        let started = std::time::Instant::now();
        let err = client.get_current_member("at_token").await.unwrap_err();
        assert!(
            matches!(err, Error::Timeout(_)),
            "expected timeout, got {err:?}"
        );
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "timeout must fire near the configured bound"
        );
        drop(listener);
    }

    #[tokio::test]
    async fn injected_http_client_is_used() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let client = Client::builder("cid", "secret")
            .base_url(format!("http://{addr}"))
            .timeout(Duration::from_secs(60))
            .http_client(http)
            .build()
            .unwrap();

        // The injected client's 100ms timeout wins over the builder's 60s.
        let started = std::time::Instant::now();
        let err = client.get_current_member("at_token").await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(5));
        drop(listener);
    }
}
