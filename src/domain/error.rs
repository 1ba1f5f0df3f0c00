//! Error types for MiniStream.
//!
//! This module defines the centralized error type [`MiniStreamError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. Resolver rejections
//! are not errors in this sense; they live in [`Rejection`](super::Rejection) and are
//! surfaced to the user as a message.

use thiserror::Error;

/// The main error type for MiniStream operations.
///
/// None of these conditions is fatal: the shell logs them and keeps serving
/// events. Script load failures in particular never reach the user, they only
/// leave the full embed unmounted.
///
/// # Examples
///
/// ```
/// use ministream::domain::MiniStreamError;
///
/// fn validate_config() -> Result<(), MiniStreamError> {
///     Err(MiniStreamError::Config("unknown theme \"sepia\"".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum MiniStreamError {
    /// Configuration is invalid or could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The embed script could not be loaded.
    #[error("Embed script error: {0}")]
    ScriptLoad(#[from] ScriptLoadError),

    /// The host refused to mount an embed instance.
    #[error("Embed error: {0}")]
    Embed(String),
}

/// Failure to load the third-party embed script.
///
/// Cloneable because every waiter on the shared load observes the same
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load {url}: {reason}")]
pub struct ScriptLoadError {
    /// Script resource that failed.
    pub url: String,
    /// Host-provided description of the failure.
    pub reason: String,
}

/// A specialized `Result` type for MiniStream operations.
pub type Result<T> = std::result::Result<T, MiniStreamError>;
