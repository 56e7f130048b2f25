//! HTTP response types

use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Result of every fallible operation in this crate
pub type Response<R, E = HttpError> = Result<R, E>;

/// Fully read HTTP response with status code and headers
///
/// Status codes are reported, never turned into errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
}

impl RawResponse {
    /// Read a blocking reqwest response to the end
    pub(crate) fn read(response: reqwest::blocking::Response) -> Response<Self> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().map_err(HttpError::from)?;

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Response headers as received, lower-cased names
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of a response header, matched case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Get the response body as text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Take the response body
    pub fn into_text(self) -> String {
        self.body
    }

    /// Deserialize the response body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Response<T> {
        serde_json::from_str(&self.body).map_err(HttpError::from)
    }
}
