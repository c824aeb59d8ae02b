//! Error types for numwords-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Inputs that cannot be rendered as words.
///
/// The `Display` output of each variant is the sentinel string returned by
/// [`num_to_words`](crate::num_to_words) in place of words.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// The input is not numeric in any recognizable form.
    #[error("not a number")]
    NotANumber,

    /// The input is infinite, or too large to represent.
    #[error("infinity")]
    Infinity,
}

/// Result type alias using [`ConversionError`].
pub type ConversionResult<T> = Result<T, ConversionError>;
