//! Error types for Letterboxd API operations

use serde::{Deserialize, Serialize};

/// Structured error body the token endpoint includes with 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OAuthError {
    /// Machine-readable code, e.g. `invalid_grant`
    pub error: String,
    #[serde(rename = "errorDescription", default)]
    pub error_description: String,
}

/// Errors from Letterboxd API operations.
///
/// Remote rejections keep the HTTP status and the raw body so callers can
/// branch programmatically instead of string-matching the message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request construction or transport failure (DNS, TLS, connect)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The request exceeded the client-side timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The API answered with a non-200 status
    #[error("API returned {status}: {body}")]
    Api {
        status: u16,
        /// Raw response body, preserved verbatim
        body: String,
        /// Structured OAuth error, when the body parses as one
        oauth: Option<OAuthError>,
    },

    /// A 200 response whose body did not match the expected shape
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl Error {
    /// Classify a transport failure, keeping timeouts distinguishable.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }

    /// Build the non-200 error, attempting the structured OAuth body first
    /// and falling back to the raw text.
    pub(crate) fn api(status: u16, body: String) -> Self {
        let oauth = serde_json::from_str::<OAuthError>(&body).ok();
        Self::Api {
            status,
            body,
            oauth,
        }
    }

    /// HTTP status code, for remote rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed OAuth error body, when the server sent one.
    pub fn oauth_error(&self) -> Option<&OAuthError> {
        match self {
            Self::Api {
                oauth: Some(oauth), ..
            } => Some(oauth),
            _ => None,
        }
    }
}

/// Result alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_parses_structured_body() {
        let err = Error::api(
            400,
            r#"{"error":"invalid_grant","errorDescription":"Code expired"}"#.into(),
        );
        assert_eq!(err.status(), Some(400));
        let oauth = err.oauth_error().expect("structured body must parse");
        assert_eq!(oauth.error, "invalid_grant");
        assert_eq!(oauth.error_description, "Code expired");
    }

    #[test]
    fn api_error_falls_back_to_raw_text() {
        let err = Error::api(502, "upstream unavailable".into());
        assert_eq!(err.status(), Some(502));
        assert!(err.oauth_error().is_none());
        match err {
            Error::Api { body, .. } => assert_eq!(body, "upstream unavailable"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn oauth_error_description_defaults_when_absent() {
        let err = Error::api(400, r#"{"error":"invalid_request"}"#.into());
        let oauth = err.oauth_error().unwrap();
        assert_eq!(oauth.error, "invalid_request");
        assert_eq!(oauth.error_description, "");
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = Error::api(401, "nope".into());
        assert_eq!(err.to_string(), "API returned 401: nope");
    }

    #[test]
    fn status_is_none_for_non_api_errors() {
        let err = Error::Decode("truncated".into());
        assert_eq!(err.status(), None);
        assert!(err.oauth_error().is_none());
    }
}
