//! Error types for the screenshot client

use thiserror::Error;

/// Result type alias for websnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while requesting or handling screenshots
#[derive(Error, Debug)]
pub enum Error {
    /// The request never produced a response (connect refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with something that is not the expected JSON
    #[error("Invalid response from screenshot service: {0}")]
    Protocol(String),

    /// The endpoint reported `success: false`
    #[error("Screenshot failed: {0}")]
    Service(String),

    /// A payload could not be decoded into bytes or pixels
    #[error("Failed to decode image payload: {0}")]
    Decode(String),

    /// Filesystem error while saving screenshots
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced element (canvas id, ...) does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Capture parameters rejected before sending
    #[error("Invalid parameter: {0}")]
    Validation(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Protocol(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}
