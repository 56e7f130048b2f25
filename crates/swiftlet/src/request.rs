//! HTTP request builder

use reqwest::header::{HeaderName, HeaderValue};
use tracing::instrument;
use url::Url;

use crate::client::HttpClient;
use crate::error::HttpError;
use crate::headers::Headers;
use crate::method::Method;
use crate::response::{RawResponse, Response};

/// Content type added by [`Request::json`]
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A configurable, reusable HTTP request.
///
/// Mutators take `&mut self` and hand the same request back, so a chain of
/// calls configures one instance:
///
/// ```no_run
/// # fn main() -> Result<(), swiftlet::HttpError> {
/// let response = swiftlet::post("https://api.example.com/data")?
///     .json(r#"{"key": "value"}"#)
///     .header("Authorization", "Bearer TOKEN")
///     .as_string()?;
/// # Ok(())
/// # }
/// ```
///
/// Sending never changes the request. It can be inspected or sent again
/// afterwards, and every send is a separate network exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url: Url,
    headers: Headers,
    body: Option<String>,
}

impl Request {
    /// Create a request for an absolute URL
    pub fn new(url: &str, method: Method) -> Response<Self> {
        let url = Url::parse(url)?;
        Ok(Self::from_url(url, method))
    }

    /// Create a request for an already parsed URL
    pub fn from_url(url: Url, method: Method) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
            body: None,
        }
    }

    /// Add a header value.
    ///
    /// Repeating a name adds another value rather than replacing the
    /// previous one. Names and values are not validated here; the transport
    /// rejects illegal ones when the request is sent.
    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.append(name, value);
        self
    }

    /// Set a plain text body, replacing any previous body
    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.body = Some(text.into());
        self
    }

    /// Set a JSON body and add `Content-Type: application/json`.
    ///
    /// The header is appended on every call, so calling this twice leaves
    /// two content type entries.
    pub fn json(&mut self, json: impl Into<String>) -> &mut Self {
        self.header("Content-Type", JSON_CONTENT_TYPE);
        self.body = Some(json.into());
        self
    }

    /// The configured method
    pub fn get_method(&self) -> Method {
        self.method
    }

    /// The target URL
    pub fn get_url(&self) -> &Url {
        &self.url
    }

    /// Headers accumulated so far
    pub fn get_headers(&self) -> &Headers {
        &self.headers
    }

    /// The body, if one was set
    pub fn get_body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Send the request and return the response body as text.
    ///
    /// Blocks until the whole body has been read. Error status codes are not
    /// errors: a 404 page is returned like any other body. A new default
    /// transport is created for every call.
    pub fn as_string(&self) -> Response<String> {
        self.send()
    }

    /// Same as [`Request::as_string`]
    pub fn send(&self) -> Response<String> {
        self.send_raw().map(RawResponse::into_text)
    }

    /// Send on a configured transport and return the response body as text
    pub fn send_with(&self, client: &HttpClient) -> Response<String> {
        self.send_raw_with(client).map(RawResponse::into_text)
    }

    /// Send the request and return status, headers and body
    pub fn send_raw(&self) -> Response<RawResponse> {
        let client = HttpClient::new().map_err(|e| HttpError::Transport(e.to_string()))?;
        self.send_raw_with(&client)
    }

    /// Send on a configured transport and return status, headers and body
    #[instrument(skip_all, fields(method = %self.method, url = %self.url))]
    pub fn send_raw_with(&self, client: &HttpClient) -> Response<RawResponse> {
        let response = self
            .exchange(client)
            .inspect_err(|err| tracing::warn!("Request failed: {}", err))?;
        tracing::debug!(status = response.status(), "Received response");
        Ok(response)
    }

    fn exchange(&self, client: &HttpClient) -> Response<RawResponse> {
        let request = self.to_reqwest(client)?;
        let response = client.inner().execute(request)?;
        RawResponse::read(response)
    }

    /// Snapshot the current state into a transport request
    fn to_reqwest(&self, client: &HttpClient) -> Response<reqwest::blocking::Request> {
        let mut builder = client
            .inner()
            .request(self.method.into(), self.url.clone());

        for (name, value) in self.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                HttpError::Transport(format!("Invalid header name '{name}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                HttpError::Transport(format!("Invalid value for header '{name}': {e}"))
            })?;
            builder = builder.header(header_name, header_value);
        }

        if let Some(body) = &self.body {
            builder = builder.body(body.clone());
        }

        builder.build().map_err(HttpError::from)
    }
}
