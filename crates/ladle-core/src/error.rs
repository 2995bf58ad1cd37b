//! Error types for the recipe client library.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Comprehensive error type for all client operations.
#[derive(Error, Debug)]
pub enum LadleError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("Transport error during {operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered, but reported a failure
    #[error("Server error during {operation}: {message}")]
    Remote {
        operation: &'static str,
        message: String,
    },
    /// A remote call did not resolve within the configured timeout
    #[error("{operation} timed out after {}s", after.as_secs_f64())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
    /// Recipe not found for the given identifier
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: String },
    /// The base recipe write failed, so nothing else was attempted
    #[error("Failed to create recipe: {source}")]
    CreateRecipe {
        #[source]
        source: Box<LadleError>,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> LadleError {
        LadleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl LadleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a server-side failure for the named operation.
    pub fn remote(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Remote {
            operation,
            message: message.into(),
        }
    }

    /// Whether this error means the requested entity does not exist, as
    /// opposed to the request itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecipeNotFound { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to LadleError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| LadleError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Specialized extension trait for HTTP results.
pub trait TransportResultExt<T> {
    /// Map reqwest errors to a transport error for the named operation.
    fn transport(self, operation: &'static str) -> Result<T>;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport(self, operation: &'static str) -> Result<T> {
        self.map_err(|source| LadleError::Transport { operation, source })
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, LadleError>;
