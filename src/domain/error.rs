//! Error types for the character-finder plugin.
//!
//! This module defines the crate-level error type [`FinderError`] and a type alias
//! [`Result`] for plumbing failures: configuration, theme loading, URL handling
//! and request-context routing. User-facing search failures are
//! modelled separately by [`Failure`](super::Failure), which is what the view
//! layer displays.

use thiserror::Error;

/// The main error type for character-finder plugin operations.
///
/// Most variants wrap underlying errors from external crates using `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use character_finder::FinderError;
///
/// fn validate_config() -> Result<(), FinderError> {
///     Err(FinderError::Config("base_url must not be empty".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum FinderError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog URL could not be built or parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A web request reply carried a context map that does not describe one of
    /// our catalog requests.
    #[error("Request context error: {0}")]
    Context(String),
}

/// A specialized `Result` type for character-finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
