//! Error handling for the sget crate.
//!
//! This module provides centralized error handling with the error types that
//! can occur while fetching a file. All errors implement the standard Error
//! trait and carry enough context to render a useful message to the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using sget.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a provided URL cannot be parsed or does not contain a
    /// path segment a destination filename could be derived from.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A rate-limit string which is not `<number><k|K|m|M>`.
    #[error("Invalid rate limit \"{0}\": expected <number><k|m>, e.g. 500k or 40M")]
    InvalidRateLimit(String),

    /// The response did not declare a usable Content-Length.
    ///
    /// Streaming without a known total size is out of scope, so a missing or
    /// non-numeric Content-Length header fails the whole transfer before the
    /// destination file is created.
    #[error("Missing or invalid Content-Length in response from {0}")]
    MissingContentLength(String),

    /// The URL list given to the batch driver could not be read.
    #[error("Cannot read URL list {path}: {source}")]
    BatchList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O Error.
    ///
    /// Wraps standard I/O errors raised while creating or writing the
    /// destination file.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Wraps HTTP client errors, including connection failures, error status
    /// codes, and body streaming errors.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

/// Result type alias for operations that can fail with an sget [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
