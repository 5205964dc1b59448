use std::collections::HashMap;

use skucode_core::codes::{bases, options, series, shapes, suffixes};

#[test]
fn series_codes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, series::SeriesId> = HashMap::new();

    for info in series::SERIES {
        assert_eq!(
            series::from_code(info.code),
            Some(info.id),
            "series code not resolvable: {}",
            info.code
        );
        assert_eq!(series::as_code(info.id), info.code, "series as_code mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.code, info.id) {
            panic!("duplicate series code {:?}: {:?} and {:?}", info.code, prev, info.id);
        }
    }
}

#[test]
fn shape_codes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, shapes::ShapeId> = HashMap::new();

    for info in shapes::SHAPES {
        assert_eq!(
            shapes::from_code(info.code),
            Some(info.id),
            "shape code not resolvable: {}",
            info.code
        );
        assert_eq!(shapes::as_code(info.id), info.code, "shape as_code mismatch for {:?}", info.id);
        assert!(!info.icon.is_empty(), "shape {:?} has no icon tag", info.id);

        if let Some(prev) = seen.insert(info.code, info.id) {
            panic!("duplicate shape code {:?}: {:?} and {:?}", info.code, prev, info.id);
        }
    }
}

#[test]
fn base_codes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, bases::BaseId> = HashMap::new();

    for info in bases::BASES {
        assert_eq!(
            bases::from_code(info.code),
            Some(info.id),
            "base code not resolvable: {}",
            info.code
        );
        assert_eq!(bases::as_code(info.id), info.code, "base as_code mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.code, info.id) {
            panic!("duplicate base code {:?}: {:?} and {:?}", info.code, prev, info.id);
        }
    }
}

#[test]
fn option_codes_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, options::OptionId> = HashMap::new();

    for info in options::OPTIONS {
        assert_eq!(
            options::from_code(info.code),
            Some(info.id),
            "option code not resolvable: {}",
            info.code
        );
        assert_eq!(options::as_code(info.id), info.code, "option as_code mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.code, info.id) {
            panic!("duplicate option code {:?}: {:?} and {:?}", info.code, prev, info.id);
        }
    }
}

// The checks below tie the tables to the SKU grammar: a code the parser can never produce is dead data.

#[test]
fn series_codes_are_two_ascii_digits() {
    for info in series::SERIES {
        assert!(
            info.code.len() == 2 && info.code.bytes().all(|b| b.is_ascii_digit()),
            "series code {:?} is not two ASCII digits",
            info.code
        );
    }
}

#[test]
fn shape_codes_are_two_uppercase_letters() {
    for info in shapes::SHAPES {
        assert!(
            info.code.len() == 2 && info.code.bytes().all(|b| b.is_ascii_uppercase()),
            "shape code {:?} is not two uppercase ASCII letters",
            info.code
        );
    }
}

#[test]
fn base_codes_are_uppercase_letters_only() {
    for info in bases::BASES {
        assert!(
            !info.code.is_empty() && info.code.bytes().all(|b| b.is_ascii_uppercase()),
            "base code {:?} must be uppercase ASCII letters (digits are read as width)",
            info.code
        );
    }
}

#[test]
fn option_codes_are_reachable() {
    for info in options::OPTIONS {
        assert!(
            !info.code.is_empty() && !info.code.contains('-'),
            "option code {:?} cannot appear as a single suffix token",
            info.code
        );
        assert!(
            info.code.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
            "option code {:?} is not upper-case alphanumeric",
            info.code
        );
        assert_eq!(
            suffixes::classify(info.code),
            None,
            "option code {:?} is shadowed by a suffix feature pattern",
            info.code
        );
    }
}

#[test]
fn unknown_codes_are_absent_not_errors() {
    assert_eq!(series::from_code("77"), None);
    assert_eq!(shapes::from_code("ZZ"), None);
    assert_eq!(bases::from_code("QQ"), None);
    assert_eq!(options::from_code("ZZ"), None);
    // Lookups are case-sensitive; the parser normalizes first.
    assert_eq!(options::from_code("lc"), None);
}

#[test]
fn suffix_feature_patterns_have_one_capture_group() {
    for info in suffixes::SUFFIX_FEATURES {
        let re = suffixes::regex(info.feature);
        assert_eq!(re.as_str(), info.pattern);
        // captures_len counts the implicit whole-match group.
        assert_eq!(re.captures_len(), 2, "pattern {:?} must have exactly one capture group", info.pattern);
        assert!(
            re.is_match(info.example),
            "example {:?} does not match its own pattern",
            info.example
        );
    }
}

#[test]
fn checked_in_reference_is_up_to_date() {
    let checked_in = include_str!("../../../docs/reference/codes.md");
    assert_eq!(
        checked_in,
        skucode_core::reference::render_markdown(),
        "docs/reference/codes.md is stale; run `cargo run -p skucode_core --bin generate_code_reference`"
    );
}
