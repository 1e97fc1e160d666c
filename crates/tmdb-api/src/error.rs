//! Error type shared by every client operation.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the TMDB client.
#[derive(Debug, Error)]
pub enum Error {
    /// The dispatcher received a resource name it does not know.
    #[error("the API type \"{name}\" is not supported")]
    UnsupportedResource {
        /// Offending resource name.
        name: String,
    },

    /// The resource has no lookup by identifier.
    #[error("the API type \"{resource}\" has no lookup by id")]
    NoLookup {
        /// Canonical resource name.
        resource: &'static str,
    },

    /// A declared field could not be applied to a model.
    #[error("failed to call {accessor} for field \"{field}\" on \"{model}\": {source}")]
    Hydration {
        /// Model type name.
        model: &'static str,
        /// JSON key of the field.
        field: String,
        /// Conventional setter name of the field (e.g. `setReleaseDate`).
        accessor: String,
        /// Underlying conversion failure.
        #[source]
        source: serde_json::Error,
    },

    /// An option outside the declared set was read or written.
    #[error("undefined option called: \"{name}\"")]
    UndefinedOption {
        /// Offending option name.
        name: String,
    },

    /// A response body did not have the expected JSON shape.
    #[error("unexpected payload: expected {expected}")]
    Payload {
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// TMDB answered with an error body.
    #[error("TMDB API error (HTTP {status}): code={code}, message={message}")]
    Api {
        /// HTTP status.
        status: StatusCode,
        /// TMDB `status_code`.
        code: u32,
        /// TMDB `status_message`.
        message: String,
    },

    /// Non-success response without a TMDB error body.
    #[error("TMDB API error (HTTP {status}): {body}")]
    Status {
        /// HTTP status.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// HTTP 429 persisted through every retry.
    #[error("TMDB API rate limit exceeded after {retries} retries: {path}")]
    RateLimited {
        /// Retries attempted.
        retries: u32,
        /// Request path.
        path: String,
    },

    /// Transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON decoding failure.
    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid base URL or request path.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Client configuration is incomplete.
    #[error("{0}")]
    Builder(String),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
