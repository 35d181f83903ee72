//
//  community-sdk
//  api/common/errors.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for Community API operations.
//!
//! Every failure a client method can produce is an [`ApiError`]. Status
//! failures are first raised generically by the request executor and then
//! passed through [`translate`], which consults [`ERROR_MESSAGES`] to attach
//! the documented meaning of that status code for the endpoint that was
//! called.
//!
//! # Taxonomy
//!
//! | Variant | Cause |
//! |---------|-------|
//! | `Status` | Non-2xx response with no documented meaning for the endpoint |
//! | `Endpoint` | Non-2xx response translated through the message table |
//! | `Transport` | DNS, connect, TLS, timeout or body read failures |
//! | `Parse` | Response body is not the expected JSON shape |
//! | `Serialize` | Request body could not be encoded as JSON |
//! | `InvalidUrl` | Configured base URL does not parse |
//! | `Config` | Client configuration is incomplete |
//!
//! # Example
//!
//! ```rust
//! use community_sdk::api::common::{translate, ApiError, Endpoint};
//!
//! let raw = ApiError::Status {
//!     status: 404,
//!     url: "https://community.example.com/api/core/v3/people/42".to_string(),
//!     message: "Not Found".to_string(),
//! };
//!
//! let translated = translate(Endpoint::Person, raw);
//! assert_eq!(translated.to_string(), "person not found");
//! assert_eq!(translated.status(), Some(404));
//! ```

use std::fmt;

use thiserror::Error;

/// Unified error type for all Community API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    ///
    /// `message` is the server-supplied error message when the body carries
    /// one, otherwise the canonical reason phrase for the status.
    #[error("HTTP {status} from {url}: {message}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
        /// Diagnostic message.
        message: String,
    },

    /// A status failure with a documented meaning for the endpoint called.
    ///
    /// The `Display` output is exactly the documented message.
    #[error("{message}")]
    Endpoint {
        /// Endpoint class the call belonged to.
        endpoint: Endpoint,
        /// Numeric HTTP status code.
        status: u16,
        /// Documented meaning of `status` for `endpoint`.
        message: &'static str,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not decode into the expected shape.
    #[error("Malformed response from {url}: {source}")]
    Parse {
        /// The URL whose response failed to decode.
        url: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The client configuration is incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the HTTP status code for status failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Endpoint { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Endpoint classes that share one set of documented status meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Person,
    People,
    Followers,
    Following,
    Content,
    Contents,
    CreateContent,
    UpdateContent,
    DeleteContent,
    Comments,
    CreateComment,
    Likes,
    Place,
    Places,
    PlaceContents,
    Activities,
    Inbox,
    Search,
    ActivityExport,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Person => "person",
            Self::People => "people",
            Self::Followers => "followers",
            Self::Following => "following",
            Self::Content => "content",
            Self::Contents => "contents",
            Self::CreateContent => "create content",
            Self::UpdateContent => "update content",
            Self::DeleteContent => "delete content",
            Self::Comments => "comments",
            Self::CreateComment => "create comment",
            Self::Likes => "likes",
            Self::Place => "place",
            Self::Places => "places",
            Self::PlaceContents => "place contents",
            Self::Activities => "activities",
            Self::Inbox => "inbox",
            Self::Search => "search",
            Self::ActivityExport => "activity export",
        };
        f.write_str(name)
    }
}

const MALFORMED: &str = "input field missing or malformed";
const FORBIDDEN: &str = "not allowed to perform this operation";
const CONFLICT: &str = "conflicts with business rules";

/// Documented status meanings, keyed by endpoint class and status code.
pub static ERROR_MESSAGES: &[(Endpoint, u16, &str)] = &[
    (Endpoint::Person, 403, "not allowed to access this person"),
    (Endpoint::Person, 404, "person not found"),
    (Endpoint::People, 400, MALFORMED),
    (Endpoint::People, 403, "not allowed to list people"),
    (Endpoint::Followers, 403, "not allowed to access followers of this person"),
    (Endpoint::Followers, 404, "person not found"),
    (Endpoint::Following, 403, "not allowed to access people followed by this person"),
    (Endpoint::Following, 404, "person not found"),
    (Endpoint::Content, 403, "not allowed to access this content"),
    (Endpoint::Content, 404, "content not found"),
    (Endpoint::Contents, 400, MALFORMED),
    (Endpoint::CreateContent, 400, MALFORMED),
    (Endpoint::CreateContent, 403, FORBIDDEN),
    (Endpoint::CreateContent, 409, CONFLICT),
    (Endpoint::UpdateContent, 400, MALFORMED),
    (Endpoint::UpdateContent, 403, FORBIDDEN),
    (Endpoint::UpdateContent, 404, "content not found"),
    (Endpoint::UpdateContent, 409, CONFLICT),
    (Endpoint::DeleteContent, 403, FORBIDDEN),
    (Endpoint::DeleteContent, 404, "content not found"),
    (Endpoint::Comments, 403, "not allowed to access comments on this content"),
    (Endpoint::Comments, 404, "content not found"),
    (Endpoint::CreateComment, 400, MALFORMED),
    (Endpoint::CreateComment, 403, FORBIDDEN),
    (Endpoint::CreateComment, 404, "content not found"),
    (Endpoint::CreateComment, 409, CONFLICT),
    (Endpoint::Likes, 403, "not allowed to access likes on this content"),
    (Endpoint::Likes, 404, "content not found"),
    (Endpoint::Place, 403, "not allowed to access this place"),
    (Endpoint::Place, 404, "place not found"),
    (Endpoint::Places, 400, MALFORMED),
    (Endpoint::PlaceContents, 400, MALFORMED),
    (Endpoint::PlaceContents, 403, "not allowed to access this place"),
    (Endpoint::PlaceContents, 404, "place not found"),
    (Endpoint::PlaceContents, 410, "place no longer exists"),
    (Endpoint::Activities, 400, MALFORMED),
    (Endpoint::Activities, 403, FORBIDDEN),
    (Endpoint::Inbox, 400, MALFORMED),
    (Endpoint::Inbox, 403, FORBIDDEN),
    (Endpoint::Search, 400, "search terms missing or malformed"),
    (Endpoint::Search, 403, FORBIDDEN),
    (Endpoint::ActivityExport, 400, MALFORMED),
    (Endpoint::ActivityExport, 403, "not allowed to export activity"),
];

/// Looks up the documented message for a status code on an endpoint.
pub fn message_for(endpoint: Endpoint, status: u16) -> Option<&'static str> {
    ERROR_MESSAGES
        .iter()
        .find(|(e, s, _)| *e == endpoint && *s == status)
        .map(|(_, _, message)| *message)
}

/// Attaches the documented meaning of a status failure for `endpoint`.
///
/// Status codes absent from [`ERROR_MESSAGES`] and non-status errors are
/// returned unchanged.
pub fn translate(endpoint: Endpoint, error: ApiError) -> ApiError {
    match error {
        ApiError::Status { status, .. } => match message_for(endpoint, status) {
            Some(message) => ApiError::Endpoint {
                endpoint,
                status,
                message,
            },
            None => error,
        },
        other => other,
    }
}

/// Routes the error side of a result through [`translate`].
pub trait EndpointResultExt<T> {
    /// Translates a failure using the message table for `endpoint`.
    fn for_endpoint(self, endpoint: Endpoint) -> Result<T, ApiError>;
}

impl<T> EndpointResultExt<T> for Result<T, ApiError> {
    fn for_endpoint(self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.map_err(|e| translate(endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ApiError {
        ApiError::Status {
            status,
            url: "https://community.example.com/api/core/v3/contents".to_string(),
            message: "Conflict".to_string(),
        }
    }

    #[test]
    fn test_translate_documented_status() {
        let error = translate(Endpoint::CreateContent, status_error(409));
        assert_eq!(error.to_string(), "conflicts with business rules");
        assert_eq!(error.status(), Some(409));
        assert!(matches!(
            error,
            ApiError::Endpoint {
                endpoint: Endpoint::CreateContent,
                ..
            }
        ));
    }

    #[test]
    fn test_translate_undocumented_status_is_unchanged() {
        let error = translate(Endpoint::Person, status_error(500));
        match error {
            ApiError::Status {
                status,
                ref message,
                ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Conflict");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wording_differs_per_endpoint() {
        assert_eq!(message_for(Endpoint::Person, 404), Some("person not found"));
        assert_eq!(message_for(Endpoint::Place, 404), Some("place not found"));
        assert_eq!(message_for(Endpoint::Contents, 404), None);
        assert_ne!(
            message_for(Endpoint::Followers, 403),
            message_for(Endpoint::Following, 403)
        );
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        for (i, (endpoint, status, _)) in ERROR_MESSAGES.iter().enumerate() {
            let duplicates = ERROR_MESSAGES[i + 1..]
                .iter()
                .filter(|(e, s, _)| e == endpoint && s == status)
                .count();
            assert_eq!(duplicates, 0, "{endpoint} {status} listed twice");
        }
    }

    #[test]
    fn test_non_status_errors_pass_through() {
        let error = translate(Endpoint::Person, ApiError::Config("missing url".into()));
        assert!(matches!(error, ApiError::Config(_)));
    }
}
