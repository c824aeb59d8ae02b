//! Rendering options.

use serde::{Deserialize, Serialize};

/// Controls the British-English separators inserted between segments.
///
/// The default renders American style: no "and", no commas.
///
/// Configuration files and JSON use the historical keys `ands` and `commas`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Insert "and" after "hundred" and before small trailing remainders.
    #[serde(rename = "ands", alias = "use_and")]
    pub use_and: bool,
    /// Insert a comma after thousand-and-larger segments.
    #[serde(rename = "commas", alias = "use_commas")]
    pub use_commas: bool,
}

impl ConversionOptions {
    /// American style ("one hundred one").
    pub const fn american() -> Self {
        Self {
            use_and: false,
            use_commas: false,
        }
    }

    /// British style with both "and" and commas
    /// ("one thousand, one hundred and one").
    pub const fn british() -> Self {
        Self {
            use_and: true,
            use_commas: true,
        }
    }

    /// Set whether "and" is inserted.
    pub const fn with_and(mut self, use_and: bool) -> Self {
        self.use_and = use_and;
        self
    }

    /// Set whether commas are inserted.
    pub const fn with_commas(mut self, use_commas: bool) -> Self {
        self.use_commas = use_commas;
        self
    }

    /// Returns `true` if either British separator is enabled.
    pub const fn is_british(&self) -> bool {
        self.use_and || self.use_commas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_american() {
        let options = ConversionOptions::default();
        assert_eq!(options, ConversionOptions::american());
        assert!(!options.is_british());
    }

    #[test]
    fn either_flag_makes_it_british() {
        assert!(ConversionOptions::default().with_and(true).is_british());
        assert!(ConversionOptions::default().with_commas(true).is_british());
        assert!(ConversionOptions::british().is_british());
    }

    #[test]
    fn deserializes_historical_keys() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"ands": true, "commas": false}"#).unwrap();
        assert!(options.use_and);
        assert!(!options.use_commas);
    }

    #[test]
    fn missing_keys_default_to_false() {
        let options: ConversionOptions = serde_json::from_str(r#"{"commas": true}"#).unwrap();
        assert_eq!(options, ConversionOptions::default().with_commas(true));
    }
}
