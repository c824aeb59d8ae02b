//! Core library for numwords.
//!
//! Converts signed integers into English words, American or British style:
//! 123456 becomes "one hundred twenty-three thousand four hundred fifty-six".
//!
//! # Modules
//!
//! - [`compose`] - Word composition and the public conversion functions
//! - [`magnitudes`] - The table of named place-values
//! - [`rules`] - Hyphenation, "one" prefixing and British separators
//! - [`input`] - Coercion of number-like values to integers
//! - [`options`] - Rendering options
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use numwords_core::{ConversionOptions, num_to_words, number_to_words};
//!
//! assert_eq!(number_to_words(-77), "negative seventy-seven");
//! assert_eq!(
//!     num_to_words(111, Some(ConversionOptions::default().with_and(true))),
//!     "one hundred and eleven"
//! );
//! assert_eq!(number_to_words("test"), "not a number");
//! ```
#![deny(unsafe_code)]

pub mod compose;
pub mod config;
pub mod error;
pub mod input;
pub mod magnitudes;
pub mod options;
pub mod rules;

pub use compose::{
    ConversionReport, convert, integer_to_words, num_to_words, number_to_words, try_num_to_words,
};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, Style};
pub use error::{ConfigError, ConfigResult, ConversionError, ConversionResult};
pub use input::NumberInput;
pub use options::ConversionOptions;
