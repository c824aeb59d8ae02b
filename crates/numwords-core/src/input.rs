//! Number-like input values and their coercion to integers.
//!
//! Callers hand the composer whatever they have: machine integers, floats,
//! user-typed text, or loosely typed JSON. Everything is reduced to an
//! `i128` the same way:
//!
//! - integers pass through
//! - floats truncate toward zero
//! - text yields its leading integer (`"12abc"` is 12, `"12.9"` is 12)
//! - booleans, missing values, objects and arrays are not numbers
//!
//! Infinite values, and values whose magnitude does not fit in 128 bits,
//! coerce to [`ConversionError::Infinity`].

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConversionError, ConversionResult};

/// Optional whitespace, optional sign, then ASCII digits.
static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").expect("valid regex"));

/// `inf` / `infinity` in any case, optionally signed.
static INFINITY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*[+-]?inf(?:inity)?\b").expect("valid regex"));

/// 2^127, the first float magnitude outside the `i128` range.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A value that may or may not describe a number.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// An integer.
    Integer(i128),
    /// A floating point value; the fractional part is discarded.
    Float(f64),
    /// Text whose leading integer is used.
    Text(String),
    /// A boolean. Never a number.
    Boolean(bool),
    /// An absent value (null, `None`, unit).
    Missing,
    /// Any other structured value, such as a JSON object or array.
    Other,
}

impl NumberInput {
    /// Coerce to an integer, truncating toward zero.
    pub fn to_integer(&self) -> ConversionResult<i128> {
        match self {
            Self::Integer(value) => Ok(*value),
            Self::Float(value) => float_to_integer(*value),
            Self::Text(text) => text_to_integer(text),
            Self::Boolean(_) | Self::Missing | Self::Other => Err(ConversionError::NotANumber),
        }
    }
}

fn float_to_integer(value: f64) -> ConversionResult<i128> {
    if value.is_nan() {
        return Err(ConversionError::NotANumber);
    }
    let truncated = value.trunc();
    if truncated.is_infinite() || truncated >= I128_BOUND || truncated < -I128_BOUND {
        return Err(ConversionError::Infinity);
    }
    Ok(truncated as i128)
}

fn text_to_integer(text: &str) -> ConversionResult<i128> {
    if INFINITY_LITERAL.is_match(text) {
        return Err(ConversionError::Infinity);
    }
    let captures = LEADING_INTEGER
        .captures(text)
        .ok_or(ConversionError::NotANumber)?;

    // Only overflow can fail here: the capture is all ASCII digits.
    let magnitude: u128 = captures[2]
        .parse()
        .map_err(|_| ConversionError::Infinity)?;

    let value = if &captures[1] == "-" {
        0i128.checked_sub_unsigned(magnitude)
    } else {
        i128::try_from(magnitude).ok()
    };
    value.ok_or(ConversionError::Infinity)
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for NumberInput {
                fn from(value: $ty) -> Self {
                    Self::Integer(i128::from(value))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for NumberInput {
    fn from(value: isize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<usize> for NumberInput {
    fn from(value: usize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<u128> for NumberInput {
    fn from(value: u128) -> Self {
        i128::try_from(value).map_or(Self::Float(f64::INFINITY), Self::Integer)
    }
}

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for NumberInput {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<()> for NumberInput {
    fn from((): ()) -> Self {
        Self::Missing
    }
}

impl<T: Into<NumberInput>> From<Option<T>> for NumberInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl From<&serde_json::Value> for NumberInput {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Missing,
            Value::Bool(b) => Self::Boolean(*b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::from)
                .or_else(|| n.as_u64().map(Self::from))
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Other),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Other,
        }
    }
}

impl From<serde_json::Value> for NumberInput {
    fn from(value: serde_json::Value) -> Self {
        Self::from(&value)
    }
}
