//! Error types for the student API client.
//!
//! # Design
//! A failed operation is either a `Transport` failure (the exchange never
//! completed) or a `Status` failure (a response arrived with a non-2xx
//! status). 4xx and 5xx are not told apart; the raw status and body travel
//! with the error for logging.

use thiserror::Error;

/// The host could not complete an HTTP exchange.
#[derive(Debug, Clone, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors returned by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a status outside 200..=299.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The draft in the modal form cannot be turned into a request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("age is required")]
    MissingAge,

    #[error("age must be a whole number, got {0:?}")]
    InvalidAge(String),
}
