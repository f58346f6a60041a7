//! Error types for the todo front end.
//!
//! # Design
//! Every failed call collapses into one handled-failure path, so `ApiError`
//! does not single out particular status codes: any non-2xx response is
//! `Status` with the raw code and body kept for the log line. `AppError`
//! adds the two outcomes that never reach the network.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and by transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Form input rejected before any request is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Outcome of a user operation that did not complete.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The user declined the confirmation prompt.
    #[error("cancelled by user")]
    Cancelled,
}
