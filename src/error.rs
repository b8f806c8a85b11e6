//! Error types for the Scryfall client library.

use serde::Deserialize;
use thiserror::Error;

use crate::types::serde_helpers::null_as_default;

/// The main error type for all Scryfall client operations.
#[derive(Error, Debug)]
pub enum ScryfallError {
    /// Both an application secret and a grant secret were configured
    #[error("multiple secrets configured: set either a client secret or a grant secret, not both")]
    MultipleSecrets,

    /// A header value (user agent or bearer token) contains invalid characters
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// URL parsing or resolution against the base URL failed
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Scryfall API returned an error object
    #[error("Scryfall API error: {0}")]
    Api(ApiError),

    /// A non-200 response whose body is not a Scryfall error object
    #[error("failed to read error response (HTTP {status}): {source}")]
    ErrorBody {
        /// HTTP status code of the response
        status: u16,
        /// Decoding failure
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string encoding error
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),
}

impl ScryfallError {
    /// Returns the API error if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ScryfallError::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Check if the request failed because of a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ScryfallError::Http(e) => e.is_timeout(),
            ScryfallError::HttpMiddleware(reqwest_middleware::Error::Reqwest(e)) => e.is_timeout(),
            _ => false,
        }
    }
}

/// A Scryfall API error object.
///
/// Returned by the API together with any non-200 status code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// HTTP status code of the error.
    pub status: u16,
    /// Computer-friendly string describing the error (e.g. "not_found").
    pub code: String,
    /// Human-readable explanation of the error.
    pub details: String,
    /// Further categorization of the error, e.g. "ambiguous" for fuzzy name lookups.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Non-fatal issues the API discovered with the request.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub warnings: Vec<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.details)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error from status, code and details.
    pub fn new(status: u16, code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            details: details.into(),
            error_type: None,
            warnings: Vec::new(),
        }
    }

    /// Check if the requested object or method does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.code == codes::NOT_FOUND
    }

    /// Check if the request was malformed (bad query, invalid parameters).
    pub fn is_bad_request(&self) -> bool {
        self.status == 400 || self.code == codes::BAD_REQUEST
    }

    /// Check if the request lacked valid credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Check if the credentials lack the rights for this method.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Check if the API rejected the request for exceeding its rate limit.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429 || self.code == codes::RATE_LIMITED
    }

    /// Check if a fuzzy name lookup matched more than one card.
    pub fn is_ambiguous(&self) -> bool {
        self.error_type.as_deref() == Some(codes::TYPE_AMBIGUOUS)
    }
}

/// Known Scryfall error codes for pattern matching.
pub mod codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const BAD_REQUEST: &str = "bad_request";
    pub const RATE_LIMITED: &str = "rate_limited";

    /// Error `type` for fuzzy lookups that match several cards.
    pub const TYPE_AMBIGUOUS: &str = "ambiguous";
}
