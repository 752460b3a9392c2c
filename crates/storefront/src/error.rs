//! Error types for storefront.
//!
//! This module defines all error types used throughout the storefront crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::net::SocketAddr;

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for storefront operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Upstream Errors ===
    /// The request to the catalog API could not be completed.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog API answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    UpstreamStatus {
        /// The HTTP status code returned upstream.
        status: u16,
    },

    /// The catalog API has no product with this ID.
    #[error("product with ID {id} not found")]
    ProductNotFound {
        /// The requested product ID.
        id: u64,
    },

    /// The catalog API returned a body that does not match the product schema.
    #[error("invalid data format received from API")]
    InvalidPayload {
        /// What failed to validate.
        detail: String,
    },

    // === Request Errors ===
    /// A product ID in a path or argument is not a positive integer.
    #[error("invalid product id: {raw:?}")]
    InvalidProductId {
        /// The rejected input.
        raw: String,
    },

    // === Server Errors ===
    /// Failed to bind the HTTP listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to listen on.
        addr: SocketAddr,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system or socket operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for storefront operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a payload validation error.
    #[must_use]
    pub fn invalid_payload(detail: impl Into<String>) -> Self {
        Self::InvalidPayload {
            detail: detail.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the requested product does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound { .. } | Self::InvalidProductId { .. }
        )
    }

    /// Check if this error was caused by the catalog API.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::UpstreamStatus { .. } | Self::InvalidPayload { .. }
        )
    }

    /// The HTTP status a page should be served with when this error ends a request.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
