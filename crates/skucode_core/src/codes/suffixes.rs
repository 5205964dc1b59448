//! Suffix feature patterns.
//!
//! Suffix tokens (the hyphen-delimited parts after the main product code) may encode a typed feature instead of an
//! option code. Each feature is recognized by a single-capture-group pattern matched against **one token**, never
//! against the whole SKU.
//!
//! | Feature        | Pattern          | Example  | Capture |
//! |----------------|------------------|----------|---------|
//! | Post count     | `([0-9])P$`      | `3P`     | `3`     |
//! | Special height | `SH\.([0-9]+)`   | `SH.42`  | `42`    |
//! | Grommet        | `GR\.([A-Z])`    | `GR.A`   | `A`     |
//!
//! ## Notes
//! - Character classes are ASCII-only (`\d` in `regex` is Unicode-aware, so it is not used here).
//! - The order in [`SUFFIX_FEATURES`] is the recognition priority the parser applies before falling back to the
//!   option table.
//!
//! ## Examples
//! ```rust
//! use skucode_core::codes::suffixes;
//!
//! assert_eq!(suffixes::post_count("3P"), Some(3));
//! assert_eq!(suffixes::special_height("SH.42"), Some("42"));
//! assert_eq!(suffixes::grommet("GR.A"), Some('A'));
//! assert_eq!(suffixes::post_count("LC"), None);
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Stable identifier for a suffix feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixFeature {
    PostCount,
    SpecialHeight,
    Grommet,
}

/// Metadata for a suffix feature pattern.
#[derive(Debug, Clone, Copy)]
pub struct SuffixFeatureInfo {
    pub feature: SuffixFeature,
    pub name: &'static str,
    /// Pattern source; always exactly one capture group.
    pub pattern: &'static str,
    pub example: &'static str,
    pub description: &'static str,
}

/// All suffix features, in recognition priority order.
pub const SUFFIX_FEATURES: &[SuffixFeatureInfo] = &[
    SuffixFeatureInfo {
        feature: SuffixFeature::PostCount,
        name: "Post count",
        pattern: POST_COUNT_PATTERN,
        example: "3P",
        description: "Number of support posts",
    },
    SuffixFeatureInfo {
        feature: SuffixFeature::SpecialHeight,
        name: "Special height",
        pattern: SPECIAL_HEIGHT_PATTERN,
        example: "SH.42",
        description: "Non-standard top height in inches",
    },
    SuffixFeatureInfo {
        feature: SuffixFeature::Grommet,
        name: "Grommet",
        pattern: GROMMET_PATTERN,
        example: "GR.A",
        description: "Grommet position letter",
    },
];

const POST_COUNT_PATTERN: &str = r"([0-9])P$";
const SPECIAL_HEIGHT_PATTERN: &str = r"SH\.([0-9]+)";
const GROMMET_PATTERN: &str = r"GR\.([A-Z])";

/// Compiled post-count pattern.
pub static POST_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(POST_COUNT_PATTERN).expect("INVARIANT: post-count pattern compiles"));

/// Compiled special-height pattern.
pub static SPECIAL_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPECIAL_HEIGHT_PATTERN).expect("INVARIANT: special-height pattern compiles"));

/// Compiled grommet pattern.
pub static GROMMET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GROMMET_PATTERN).expect("INVARIANT: grommet pattern compiles"));

/// Return the compiled pattern for a feature.
pub fn regex(feature: SuffixFeature) -> &'static Regex {
    match feature {
        SuffixFeature::PostCount => &POST_COUNT,
        SuffixFeature::SpecialHeight => &SPECIAL_HEIGHT,
        SuffixFeature::Grommet => &GROMMET,
    }
}

/// Return the first capture of `feature`'s pattern in `token`, if it matches.
pub fn capture(feature: SuffixFeature, token: &str) -> Option<&str> {
    regex(feature).captures(token)?.get(1).map(|m| m.as_str())
}

/// Return the feature that would claim `token`, honouring priority order.
pub fn classify(token: &str) -> Option<SuffixFeature> {
    SUFFIX_FEATURES
        .iter()
        .map(|f| f.feature)
        .find(|&f| regex(f).is_match(token))
}

/// Extract a post count from a token such as `3P`.
pub fn post_count(token: &str) -> Option<u8> {
    capture(SuffixFeature::PostCount, token)?.parse().ok()
}

/// Extract the special height digits from a token such as `SH.42`.
pub fn special_height(token: &str) -> Option<&str> {
    capture(SuffixFeature::SpecialHeight, token)
}

/// Extract the grommet position letter from a token such as `GR.A`.
pub fn grommet(token: &str) -> Option<char> {
    capture(SuffixFeature::Grommet, token)?.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_count_requires_trailing_p() {
        assert_eq!(post_count("3P"), Some(3));
        assert_eq!(post_count("P3"), None);
        assert_eq!(post_count("3PX"), None);
    }

    #[test]
    fn post_count_captures_last_digit_before_p() {
        // Only the digit adjacent to `P` is captured.
        assert_eq!(post_count("12P"), Some(2));
    }

    #[test]
    fn special_height_is_a_substring_match() {
        assert_eq!(special_height("SH.42"), Some("42"));
        assert_eq!(special_height("XSH.30"), Some("30"));
        assert_eq!(special_height("SH42"), None);
        assert_eq!(special_height("SH."), None);
    }

    #[test]
    fn grommet_takes_one_uppercase_letter() {
        assert_eq!(grommet("GR.A"), Some('A'));
        assert_eq!(grommet("GR.a"), None);
        assert_eq!(grommet("GR.1"), None);
    }

    #[test]
    fn digit_class_is_ascii_only() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert_eq!(post_count("\u{0663}P"), None);
        assert_eq!(special_height("SH.\u{0663}"), None);
    }

    #[test]
    fn classify_follows_priority_order() {
        assert_eq!(classify("3P"), Some(SuffixFeature::PostCount));
        assert_eq!(classify("SH.42"), Some(SuffixFeature::SpecialHeight));
        assert_eq!(classify("GR.B"), Some(SuffixFeature::Grommet));
        // Matches both height and post count; post count wins.
        assert_eq!(classify("SH.4P"), Some(SuffixFeature::PostCount));
        assert_eq!(classify("LC"), None);
    }
}
