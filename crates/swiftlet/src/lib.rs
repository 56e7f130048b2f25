//! Minimal fluent HTTP requests
//!
//! This crate wraps a blocking HTTP client behind a small builder: pick a method
//! and URL, add headers and a body, then send and read the response body as text.
//! Connection handling, protocol details and cancellation belong to the
//! underlying transport (reqwest).
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), swiftlet::HttpError> {
//! let body = swiftlet::get("https://httpbin.org/get")?
//!     .header("Accept", "application/json")
//!     .as_string()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod headers;
mod method;
mod request;
mod response;

pub use client::{HttpClient, HttpClientBuilder};
pub use error::HttpError;
pub use headers::Headers;
pub use method::Method;
pub use request::{Request, JSON_CONTENT_TYPE};
pub use response::{RawResponse, Response};

/// Create a GET request for `url`
pub fn get(url: &str) -> Response<Request> {
    Request::new(url, Method::Get)
}

/// Create a POST request for `url`
pub fn post(url: &str) -> Response<Request> {
    Request::new(url, Method::Post)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_facade() {
        let request = get("https://httpbin.org/get").expect("Valid URL");
        assert_eq!(request.get_method(), Method::Get);
        assert_eq!(
            request.get_url(),
            &url::Url::parse("https://httpbin.org/get").expect("Valid URL")
        );
    }

    #[test]
    fn test_post_facade() {
        let request = post("http://localhost:3338/v1/mint").expect("Valid URL");
        assert_eq!(request.get_method(), Method::Post);
        assert_eq!(request.get_url().as_str(), "http://localhost:3338/v1/mint");
    }

    #[test]
    fn test_facade_rejects_malformed_url() {
        assert!(matches!(get("not a url"), Err(HttpError::InvalidUri(_))));
        assert!(matches!(post(""), Err(HttpError::InvalidUri(_))));
    }

    #[test]
    fn test_request_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Request>();
        assert_send_sync::<HttpClient>();
    }
}
