//! Deep-link entry point.
//!
//! Catalog listings link to the decoder with the SKU in a query parameter, e.g.
//! `https://dashboard.example.com/decoder?sku=01TC1860T18-3P-LC`. This module pulls the SKU out of such a link.
//! It does no validation of its own; whatever the parameter holds goes straight to the parser.

use thiserror::Error;
use url::Url;

/// Query parameter carrying the SKU.
pub const SKU_QUERY_PARAM: &str = "sku";

/// Base used to resolve path-only links such as `/decoder?sku=...`.
const RELATIVE_BASE: &str = "http://localhost/";

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid link '{link}': {source}")]
    InvalidUrl {
        link: String,
        #[source]
        source: url::ParseError,
    },

    #[error("link has no 'sku' query parameter")]
    MissingSku,

    #[error("link 'sku' query parameter is empty")]
    EmptySku,
}

/// Extract the SKU from a deep link.
///
/// Accepts absolute URLs and path-only links. Percent-encoding and `+` are decoded. When the parameter repeats,
/// the first occurrence wins.
pub fn sku_from_link(link: &str) -> Result<String, LinkError> {
    let url = parse_link(link).map_err(|source| LinkError::InvalidUrl {
        link: link.to_string(),
        source,
    })?;

    let sku = url
        .query_pairs()
        .find(|(key, _)| key == SKU_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .ok_or(LinkError::MissingSku)?;

    if sku.trim().is_empty() {
        return Err(LinkError::EmptySku);
    }
    Ok(sku)
}

fn parse_link(link: &str) -> Result<Url, url::ParseError> {
    match Url::parse(link) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)?.join(link),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_link() {
        let sku = sku_from_link("https://dash.example.com/decoder?sku=01TC1860T18-3P-LC").unwrap();
        assert_eq!(sku, "01TC1860T18-3P-LC");
    }

    #[test]
    fn test_path_only_link() {
        let sku = sku_from_link("/catalog/decoder?tab=detail&sku=99SQ3030QD16").unwrap();
        assert_eq!(sku, "99SQ3030QD16");
    }

    #[test]
    fn test_percent_decoding() {
        let sku = sku_from_link("https://dash.example.com/d?sku=01SQ30-SH%2E42+").unwrap();
        assert_eq!(sku, "01SQ30-SH.42 ");
    }

    #[test]
    fn test_first_parameter_wins() {
        let sku = sku_from_link("/d?sku=01SQ30&sku=02RD36").unwrap();
        assert_eq!(sku, "01SQ30");
    }

    #[test]
    fn test_missing_parameter() {
        let err = sku_from_link("https://dash.example.com/d?q=01SQ30").unwrap_err();
        assert!(matches!(err, LinkError::MissingSku));
    }

    #[test]
    fn test_empty_parameter() {
        let err = sku_from_link("/d?sku=").unwrap_err();
        assert!(matches!(err, LinkError::EmptySku));
    }

    #[test]
    fn test_invalid_url() {
        let err = sku_from_link("http://[::1").unwrap_err();
        assert!(matches!(err, LinkError::InvalidUrl { .. }));
    }
}
