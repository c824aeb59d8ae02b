//! Formatting rules applied where segments are joined.

use crate::options::ConversionOptions;

/// Checks whether a magnitude keeps a leading "one" when its multiplier is 1.
///
/// "one hundred", but "ten" rather than "one ten".
pub const fn prefix_with_one(n: u128) -> bool {
    n >= 100
}

/// Checks whether a magnitude is joined to its remainder with a hyphen.
///
/// "ninety-nine", but "one hundred one".
pub const fn hyphenate(n: u128) -> bool {
    n >= 20 && n <= 99
}

/// Token placed between a magnitude word and the rendering of its remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `"-"`, as in "twenty-one".
    Hyphen,
    /// `" "`, the American default.
    Space,
    /// `", "` after a thousand-or-larger segment.
    Comma,
    /// `", and "` after a thousand-or-larger segment with a small remainder.
    CommaAnd,
    /// `" and "` after "hundred", or after a larger segment without commas.
    And,
}

impl Separator {
    /// Returns the literal text of the separator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Space => " ",
            Self::Comma => ", ",
            Self::CommaAnd => ", and ",
            Self::And => " and ",
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the separator between `base` and a non-zero `remainder`.
///
/// Hyphenation wins over the British rules, which only apply from "hundred"
/// upwards.
pub const fn separator(base: u128, remainder: u128, options: ConversionOptions) -> Separator {
    if hyphenate(base) {
        return Separator::Hyphen;
    }
    if base < 100 {
        return Separator::Space;
    }

    if base < 1_000 {
        return if options.use_and {
            Separator::And
        } else {
            Separator::Space
        };
    }

    match (options.use_commas, options.use_and && remainder < 100) {
        (true, true) => Separator::CommaAnd,
        (true, false) => Separator::Comma,
        (false, true) => Separator::And,
        (false, false) => Separator::Space,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_with_one_from_hundred() {
        assert!(!prefix_with_one(10));
        assert!(!prefix_with_one(99));
        assert!(prefix_with_one(100));
        assert!(prefix_with_one(1_000_000));
    }

    #[test]
    fn hyphenate_tens_only() {
        assert!(!hyphenate(10));
        assert!(!hyphenate(19));
        assert!(hyphenate(20));
        assert!(hyphenate(21));
        assert!(hyphenate(99));
        assert!(!hyphenate(100));
    }

    #[test]
    fn american_uses_hyphen_or_space() {
        let american = ConversionOptions::american();
        assert_eq!(separator(20, 1, american), Separator::Hyphen);
        assert_eq!(separator(100, 1, american), Separator::Space);
        assert_eq!(separator(1_000, 1, american), Separator::Space);
        assert_eq!(separator(1_000, 500, american), Separator::Space);
    }

    #[test]
    fn hyphen_wins_in_british_mode() {
        assert_eq!(
            separator(90, 9, ConversionOptions::british()),
            Separator::Hyphen
        );
    }

    #[test]
    fn hundred_gets_and_without_comma() {
        assert_eq!(
            separator(100, 1, ConversionOptions::british()),
            Separator::And
        );
        assert_eq!(
            separator(100, 1, ConversionOptions::default().with_commas(true)),
            Separator::Space
        );
    }

    #[test]
    fn thousands_get_comma_and_small_remainders_get_and() {
        let british = ConversionOptions::british();
        assert_eq!(separator(1_000, 101, british), Separator::Comma);
        assert_eq!(separator(1_000, 16, british), Separator::CommaAnd);
        assert_eq!(separator(1_000_000_000, 1, british), Separator::CommaAnd);
    }

    #[test]
    fn ands_only_skips_commas() {
        let ands = ConversionOptions::default().with_and(true);
        assert_eq!(separator(1_000, 16, ands), Separator::And);
        assert_eq!(separator(1_000, 101, ands), Separator::Space);
    }

    #[test]
    fn commas_only_skips_and() {
        let commas = ConversionOptions::default().with_commas(true);
        assert_eq!(separator(1_000, 16, commas), Separator::Comma);
    }

    #[test]
    fn separator_text() {
        assert_eq!(Separator::CommaAnd.to_string(), ", and ");
        assert_eq!(Separator::Hyphen.as_str(), "-");
    }
}
