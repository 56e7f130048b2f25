//! Blocking HTTP transport

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::error::HttpError;
use crate::response::Response;

/// Blocking transport that requests are executed on
///
/// Cloning is cheap and clones share the underlying client, so one
/// `HttpClient` can serve several threads.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a transport with default settings
    ///
    /// There is no timeout and redirects are returned to the caller
    /// instead of being followed.
    pub fn new() -> Response<Self> {
        Self::builder().build()
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from a blocking reqwest client
    pub fn from_reqwest(client: Client) -> Self {
        Self { inner: client }
    }

    pub(crate) fn inner(&self) -> &Client {
        &self.inner
    }
}

/// HTTP client builder for configuring timeouts
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Limit the whole exchange, from connecting to reading the body
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Limit connection establishment only
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> Response<HttpClient> {
        // reqwest's blocking client defaults to a 30s timeout and follows
        // redirects; neither applies here unless asked for.
        let client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        tracing::trace!("Built blocking HTTP client");
        Ok(HttpClient { inner: client })
    }
}
