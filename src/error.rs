//! Error types for the TinySRC SDK and CLI

use thiserror::Error;

use crate::client::context::ContextError;
use crate::client::models::ErrorResponse;

/// Result type alias for TinySRC operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The relative request path could not be resolved against the base URL
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request body could not be encoded; no request was sent
    #[error("JSON encoding failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A caller-supplied value cannot be sent as given; no request was sent
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    Context(#[from] ContextError),

    /// The API answered with a non-2xx status
    #[error("{0}")]
    Api(ErrorResponse),

    /// The API answered 2xx but the body did not match the expected model
    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl Error {
    /// HTTP status of an API error, `None` for failures that happened before
    /// a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(response) => response.status,
            _ => None,
        }
    }

    /// Flatten into the wire-shaped [`ErrorResponse`].
    ///
    /// API errors pass through untouched. Everything else becomes a single
    /// general error message with no status code.
    pub fn into_error_response(self) -> ErrorResponse {
        match self {
            Error::Api(response) => response,
            other => ErrorResponse::from_message(other.to_string()),
        }
    }
}

impl From<Error> for ErrorResponse {
    fn from(err: Error) -> Self {
        err.into_error_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network("Request timed out".to_string())
        } else if err.is_connect() {
            Error::Network(format!("Failed to connect to API: {}", err))
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration file not found. Run `tinysrc init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API key not configured. Run `tinysrc init` or set TINYSRC_API_KEY.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
