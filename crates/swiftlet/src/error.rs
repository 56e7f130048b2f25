//! HTTP error types

use std::error::Error as StdError;
use std::io;

use thiserror::Error;

/// Errors that can occur while building or sending a request
#[derive(Debug, Error)]
pub enum HttpError {
    /// The URL could not be parsed as an absolute URI
    #[error("Invalid URI: {0}")]
    InvalidUri(String),
    /// Connection, transmission or response read failure
    #[error("Transport error: {0}")]
    Transport(String),
    /// The blocking call was interrupted before a response arrived
    ///
    /// Best effort: reqwest's blocking client runs the exchange on its own
    /// thread, so an interrupt on the calling thread is usually not seen.
    #[error("Request interrupted")]
    Interrupted,
    /// A timeout configured on the transport elapsed
    #[error("Request timeout")]
    Timeout,
    /// Unknown HTTP method name
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
}

impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::InvalidUri(err.to_string())
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if is_interrupted(&err) {
            HttpError::Interrupted
        } else {
            // Status codes are never errors here, so everything else is a
            // failure to connect, transmit or read.
            HttpError::Transport(describe(&err))
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

/// Walk the source chain looking for an interrupted I/O operation
pub(crate) fn is_interrupted(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::Interrupted {
                return true;
            }
        }
        current = e.source();
    }
    false
}

/// reqwest's top level message omits the cause, so append the chain
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        message.push_str(": ");
        message.push_str(&e.to_string());
        current = e.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Wrapper(io::Error);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_http_error_invalid_uri_display() {
        let error = HttpError::InvalidUri("relative URL without a base".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid URI: relative URL without a base"
        );
    }

    #[test]
    fn test_http_error_transport_display() {
        let error = HttpError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Transport error: connection refused");
    }

    #[test]
    fn test_http_error_interrupted_display() {
        assert_eq!(format!("{}", HttpError::Interrupted), "Request interrupted");
    }

    #[test]
    fn test_http_error_timeout_display() {
        assert_eq!(format!("{}", HttpError::Timeout), "Request timeout");
    }

    #[test]
    fn test_http_error_unsupported_method_display() {
        let error = HttpError::UnsupportedMethod("PATCH".to_string());
        assert_eq!(format!("{}", error), "Unsupported HTTP method: PATCH");
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").expect_err("Relative input should not parse");
        let http_error: HttpError = err.into();
        assert!(matches!(http_error, HttpError::InvalidUri(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let result: Result<String, _> = serde_json::from_str("not valid json");
        let json_error = result.expect_err("Invalid JSON should produce an error");
        let http_error: HttpError = json_error.into();

        match http_error {
            HttpError::Serialization(msg) => {
                assert!(
                    msg.contains("expected"),
                    "Error message should describe JSON error"
                );
            }
            _ => panic!("Expected HttpError::Serialization"),
        }
    }

    #[test]
    fn test_is_interrupted_direct() {
        let err = io::Error::new(io::ErrorKind::Interrupted, "signal");
        assert!(is_interrupted(&err));
    }

    #[test]
    fn test_is_interrupted_nested() {
        let err = Wrapper(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        assert!(is_interrupted(&err));
    }

    #[test]
    fn test_is_interrupted_other_kind() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert!(!is_interrupted(&err));
    }

    #[test]
    fn test_describe_includes_sources() {
        let err = Wrapper(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(describe(&err), "wrapped: refused");
    }
}
