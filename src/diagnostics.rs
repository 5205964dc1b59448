//! User-facing diagnostics for SKUs that cannot be decoded.
//!
//! The parser reports an unparseable SKU as `valid == false`. The CLI turns that into a [`InvalidSku`] report
//! that points at the series position with the fixed "check the format" message.

use miette::{Diagnostic, NamedSource, SourceSpan};
use skucode_syntax::ParsedSku;
use thiserror::Error;

/// A SKU whose leading series code is missing or malformed.
#[derive(Debug, Error, Diagnostic)]
#[error("Could not parse SKU '{raw}', check the format")]
#[diagnostic(
    code(skucode::invalid_sku),
    help("A SKU starts with a two-digit series code, e.g. 01TC1860T18-3P-LC")
)]
pub struct InvalidSku {
    pub raw: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("expected a two-digit series code here")]
    span: SourceSpan,
}

impl InvalidSku {
    /// Build a report for an invalid parse result.
    ///
    /// ## Parameters
    /// - `origin`: where the SKU came from (`"argument"`, a link, `catalog.csv:12`), shown as the source name.
    pub fn new(origin: impl AsRef<str>, sku: &ParsedSku) -> Self {
        // Highlight up to the first two chars, the width of a series code.
        let len = sku
            .raw
            .char_indices()
            .nth(2)
            .map_or(sku.raw.len(), |(idx, _)| idx);
        Self {
            raw: sku.raw.clone(),
            src: NamedSource::new(origin, sku.raw.clone()),
            span: (0, len).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skucode_syntax::parser;

    #[test]
    fn test_message_uses_normalized_sku() {
        let diag = InvalidSku::new("argument", &parser::parse(" ab12 "));
        assert_eq!(diag.to_string(), "Could not parse SKU 'AB12', check the format");
        assert_eq!(diag.span, SourceSpan::from((0, 2)));
    }

    #[test]
    fn test_span_respects_char_boundaries() {
        let diag = InvalidSku::new("argument", &parser::parse("ÉÉÉ"));
        assert_eq!(diag.span, SourceSpan::from((0, 4)));
    }

    #[test]
    fn test_span_on_empty_input() {
        let diag = InvalidSku::new("argument", &parser::parse(""));
        assert_eq!(diag.span, SourceSpan::from((0, 0)));
    }
}
