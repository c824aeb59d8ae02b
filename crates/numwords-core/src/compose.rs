//! Number-to-words composition.
//!
//! A value is written in terms of the largest named magnitude below it:
//! `quotient * base + remainder`. The quotient and remainder are composed
//! recursively and joined around the base word, so 123456 becomes
//! "one hundred twenty-three" + "thousand" + "four hundred fifty-six".
//!
//! Values past the largest named magnitude compose the same way, with the
//! trillion quotient rendered recursively ("one thousand trillion").

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ConversionResult;
use crate::input::NumberInput;
use crate::magnitudes;
use crate::options::ConversionOptions;
use crate::rules;

/// Result of converting one piece of user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// The input as given.
    pub input: String,
    /// The integer the input coerced to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i128>,
    /// The words, or a sentinel when the input was not convertible.
    pub words: String,
}

impl ConversionReport {
    /// Returns `true` if `words` holds a sentinel rather than a rendering.
    pub const fn is_sentinel(&self) -> bool {
        self.value.is_none()
    }
}

/// Convert a number into American-style English words.
///
/// Inputs that are not numbers yield `"not a number"`; infinite inputs yield
/// `"infinity"`.
///
/// ```
/// use numwords_core::number_to_words;
///
/// assert_eq!(number_to_words(0), "zero");
/// assert_eq!(number_to_words(10001), "ten thousand one");
/// assert_eq!(number_to_words(111), "one hundred eleven");
/// assert_eq!(number_to_words(-77), "negative seventy-seven");
/// ```
pub fn number_to_words<T: Into<NumberInput>>(value: T) -> String {
    num_to_words(value, None)
}

/// Convert a number into words, British style when `options` asks for it.
///
/// ```
/// use numwords_core::{ConversionOptions, num_to_words};
///
/// let british = ConversionOptions::british();
/// assert_eq!(
///     num_to_words(1101, Some(british)),
///     "one thousand, one hundred and one"
/// );
/// assert_eq!(num_to_words("test", Some(british)), "not a number");
/// ```
pub fn num_to_words<T: Into<NumberInput>>(value: T, options: Option<ConversionOptions>) -> String {
    try_num_to_words(value, options.unwrap_or_default()).unwrap_or_else(|err| err.to_string())
}

/// Convert a number into words, reporting unconvertible input as an error.
#[tracing::instrument(level = "trace", skip_all, fields(british = options.is_british()))]
pub fn try_num_to_words<T: Into<NumberInput>>(
    value: T,
    options: ConversionOptions,
) -> ConversionResult<String> {
    let input = value.into();
    let integer = input.to_integer().inspect_err(|err| {
        trace!(input = ?input, error = %err, "input not convertible");
    })?;
    Ok(integer_to_words(integer, options))
}

/// Convert an integer into words. Never fails.
pub fn integer_to_words(value: i128, options: ConversionOptions) -> String {
    let mut words = String::new();
    if value < 0 {
        words.push_str("negative ");
    }
    compose(value.unsigned_abs(), options, &mut words);

    let trimmed = words.trim_end().len();
    words.truncate(trimmed);
    words
}

/// Convert one piece of text and describe the outcome.
#[tracing::instrument(skip(options), fields(british = options.is_british()))]
pub fn convert(text: &str, options: ConversionOptions) -> ConversionReport {
    let input = NumberInput::from(text.trim());
    let (value, words) = match input.to_integer() {
        Ok(value) => (Some(value), integer_to_words(value, options)),
        Err(err) => {
            debug!(error = %err, "conversion produced a sentinel");
            (None, err.to_string())
        }
    };
    ConversionReport {
        input: text.to_string(),
        value,
        words,
    }
}

/// Append the words for `value` to `words`.
fn compose(value: u128, options: ConversionOptions, words: &mut String) {
    let lookup = magnitudes::find_entry(value);
    let base = lookup.entry;

    if lookup.matched_exactly {
        if rules::prefix_with_one(base.value) {
            words.push_str("one ");
        }
        words.push_str(base.word);
        return;
    }

    // Exact matches cover 0 and 1, so base.value >= 1 here.
    let quotient = value / base.value;
    let remainder = value - quotient * base.value;

    if quotient != 1 || rules::prefix_with_one(base.value) {
        compose(quotient, options, words);
        words.push(' ');
    }
    words.push_str(base.word);

    if remainder > 0 {
        words.push_str(rules::separator(base.value, remainder, options).as_str());
        compose(remainder, options, words);
    }
}
