//! The table of named place-values that every rendering is built from.
//!
//! Entries run from "trillion" down to "zero". Anything not listed here is
//! expressed as a multiple of the largest smaller entry plus a remainder.

/// A canonical magnitude and the English word for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagnitudeEntry {
    /// Numeric value of the magnitude.
    pub value: u128,
    /// Word used when the magnitude appears in a rendering.
    pub word: &'static str,
}

impl MagnitudeEntry {
    const fn new(value: u128, word: &'static str) -> Self {
        Self { value, word }
    }
}

/// Named magnitudes, strictly descending by value.
pub static MAGNITUDES: [MagnitudeEntry; 33] = [
    MagnitudeEntry::new(1_000_000_000_000, "trillion"),
    MagnitudeEntry::new(1_000_000_000, "billion"),
    MagnitudeEntry::new(1_000_000, "million"),
    MagnitudeEntry::new(1_000, "thousand"),
    MagnitudeEntry::new(100, "hundred"),
    MagnitudeEntry::new(90, "ninety"),
    MagnitudeEntry::new(80, "eighty"),
    MagnitudeEntry::new(70, "seventy"),
    MagnitudeEntry::new(60, "sixty"),
    MagnitudeEntry::new(50, "fifty"),
    MagnitudeEntry::new(40, "forty"),
    MagnitudeEntry::new(30, "thirty"),
    MagnitudeEntry::new(20, "twenty"),
    MagnitudeEntry::new(19, "nineteen"),
    MagnitudeEntry::new(18, "eighteen"),
    MagnitudeEntry::new(17, "seventeen"),
    MagnitudeEntry::new(16, "sixteen"),
    MagnitudeEntry::new(15, "fifteen"),
    MagnitudeEntry::new(14, "fourteen"),
    MagnitudeEntry::new(13, "thirteen"),
    MagnitudeEntry::new(12, "twelve"),
    MagnitudeEntry::new(11, "eleven"),
    MagnitudeEntry::new(10, "ten"),
    MagnitudeEntry::new(9, "nine"),
    MagnitudeEntry::new(8, "eight"),
    MagnitudeEntry::new(7, "seven"),
    MagnitudeEntry::new(6, "six"),
    MagnitudeEntry::new(5, "five"),
    MagnitudeEntry::new(4, "four"),
    MagnitudeEntry::new(3, "three"),
    MagnitudeEntry::new(2, "two"),
    MagnitudeEntry::new(1, "one"),
    MagnitudeEntry::new(0, "zero"),
];

/// Outcome of looking a value up in [`MAGNITUDES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    /// `true` when `entry.value` equals the value looked up.
    pub matched_exactly: bool,
    /// The exact match, or the largest entry strictly below the value.
    pub entry: &'static MagnitudeEntry,
}

/// Find the entry for `n`, or the largest entry strictly smaller than it.
///
/// Always succeeds because the table ends with zero.
pub fn find_entry(n: u128) -> Lookup {
    // The table is tiny; a descending scan finds the first entry <= n.
    let entry = MAGNITUDES
        .iter()
        .find(|entry| entry.value <= n)
        .unwrap_or(&MAGNITUDES[MAGNITUDES.len() - 1]);

    Lookup {
        matched_exactly: entry.value == n,
        entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_descending() {
        for pair in MAGNITUDES.windows(2) {
            assert!(
                pair[0].value > pair[1].value,
                "{} should come before {}",
                pair[0].word,
                pair[1].word
            );
        }
    }

    #[test]
    fn table_covers_required_values() {
        let required = (0..=20)
            .chain((30..=90).step_by(10))
            .chain([100, 1_000, 1_000_000, 1_000_000_000, 1_000_000_000_000]);
        for value in required {
            assert!(
                MAGNITUDES.iter().any(|entry| entry.value == value),
                "missing entry for {value}"
            );
        }
    }

    #[test]
    fn table_ends_with_zero() {
        assert_eq!(MAGNITUDES[MAGNITUDES.len() - 1].word, "zero");
    }

    #[test]
    fn exact_match() {
        let lookup = find_entry(1_000);
        assert!(lookup.matched_exactly);
        assert_eq!(lookup.entry.word, "thousand");
    }

    #[test]
    fn zero_is_an_exact_match() {
        let lookup = find_entry(0);
        assert!(lookup.matched_exactly);
        assert_eq!(lookup.entry.word, "zero");
    }

    #[test]
    fn falls_back_to_largest_smaller_entry() {
        let lookup = find_entry(55);
        assert!(!lookup.matched_exactly);
        assert_eq!(lookup.entry.value, 50);

        let lookup = find_entry(999);
        assert!(!lookup.matched_exactly);
        assert_eq!(lookup.entry.word, "hundred");
    }

    #[test]
    fn values_beyond_trillion_use_trillion() {
        let lookup = find_entry(1_000_000_000_000_025);
        assert!(!lookup.matched_exactly);
        assert_eq!(lookup.entry.word, "trillion");

        let lookup = find_entry(u128::MAX);
        assert_eq!(lookup.entry.word, "trillion");
    }
}
