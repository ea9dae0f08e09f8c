//! Error types for the todo API client.
//!
//! # Design
//! The client performs no status-code check, so there is no "not found" or
//! "HTTP error" variant: a response that arrives is a response. What remains
//! is a failed round-trip and bodies that do not (de)serialize.

use thiserror::Error;

/// Errors produced while talking to the todo backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response: connection refused, timeout,
    /// unreadable body, or a transport task that died.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Invalid client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}
