//! Catalog batch decoding.
//!
//! A catalog file is an export of product rows keyed by SKU. Two shapes are accepted:
//! - one SKU per line, or
//! - a simple CSV export whose **first** column is the SKU (an optional `sku` header row is skipped).
//!
//! Blank lines and `#` comment lines are ignored. Every remaining line becomes a [`CatalogRow`], valid or not;
//! a bad row never stops the batch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use skucode_syntax::{ParsedSku, parser};
use thiserror::Error;

/// Maximum catalog file size (16 MB)
///
/// Catalog exports are a few thousand rows; anything far larger is almost certainly the wrong file.
pub const MAX_CATALOG_SIZE: u64 = 16 * 1024 * 1024;

/// Errors that occur while reading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog '{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: PathBuf, size: u64, max: u64 },
}

/// One decoded catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub sku: ParsedSku,
}

/// All decoded rows of a catalog, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub rows: Vec<CatalogRow>,
}

impl CatalogReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.rows.iter().filter(|r| r.sku.valid).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }

    /// Valid rows where at least one code decoded through a fallback.
    pub fn unknown_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.sku.valid && !r.sku.is_fully_known())
            .count()
    }

    /// Rows whose series code did not match.
    pub fn invalid_rows(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter().filter(|r| !r.sku.valid)
    }
}

/// Decode every SKU in catalog text.
///
/// A leading UTF-8 byte-order mark (as written by spreadsheet "CSV UTF-8" exports) is ignored.
pub fn decode_catalog(source: &str) -> CatalogReport {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let rows = source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let sku = sku_field(line)?;
            if idx == 0 && sku.eq_ignore_ascii_case("sku") {
                return None;
            }
            Some(CatalogRow {
                line: idx + 1,
                sku: parser::parse(sku),
            })
        })
        .collect();
    CatalogReport { rows }
}

/// Read and decode a catalog file.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds [`MAX_CATALOG_SIZE`]
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_catalog(path: &Path) -> Result<CatalogReport, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(io_err)?;
    if metadata.len() > MAX_CATALOG_SIZE {
        return Err(CatalogError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_CATALOG_SIZE,
        });
    }

    let source = fs::read_to_string(path).map_err(io_err)?;
    let report = decode_catalog(&source);
    tracing::debug!(
        rows = report.len(),
        invalid = report.invalid_count(),
        "decoded catalog"
    );
    Ok(report)
}

/// The SKU text of one catalog line, or `None` for blank/comment lines.
fn sku_field(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let field = line.split(',').next().unwrap_or(line).trim();
    let field = field
        .strip_prefix('"')
        .and_then(|f| f.strip_suffix('"'))
        .unwrap_or(field);
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_with_comments() {
        let report = decode_catalog("# studio line\n01TC1860T18-3P-LC\n\n77SQ3030\nnot-a-sku\n");
        assert_eq!(report.len(), 3);
        assert_eq!(report.rows[0].line, 2);
        assert_eq!(report.rows[1].line, 4);
        assert_eq!(report.rows[2].line, 5);
        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.invalid_count(), 1);
        assert_eq!(report.unknown_count(), 1);
    }

    #[test]
    fn test_csv_first_column_and_header() {
        let report = decode_catalog("SKU,Description,List\n\"01TC1860T18\",Studio table,1200\n99SQ3030QD16,Custom,900\n");
        assert_eq!(report.len(), 2);
        assert_eq!(report.rows[0].sku.raw, "01TC1860T18");
        assert_eq!(report.rows[1].sku.raw, "99SQ3030QD16");
    }

    #[test]
    fn test_header_only_skipped_on_first_line() {
        let report = decode_catalog("01SQ30\nsku\n");
        assert_eq!(report.len(), 2);
        assert!(!report.rows[1].sku.valid);
    }

    #[test]
    fn test_byte_order_mark_before_header() {
        let report = decode_catalog("\u{FEFF}sku,description\n01TC1860T18-3P-LC,Studio\n");
        assert_eq!(report.len(), 1);
        assert_eq!(report.invalid_count(), 0);
        assert_eq!(report.rows[0].line, 2);
        assert_eq!(report.rows[0].sku.raw, "01TC1860T18-3P-LC");
    }

    #[test]
    fn test_byte_order_mark_before_first_sku() {
        let report = decode_catalog("\u{FEFF}01TC1860T18-3P-LC\n99SQ3030QD16\n");
        assert_eq!(report.len(), 2);
        assert!(report.rows[0].sku.valid);
        assert_eq!(report.rows[0].sku.raw, "01TC1860T18-3P-LC");
        assert_eq!(report.invalid_count(), 0);
    }

    #[test]
    fn test_invalid_rows_iterator() {
        let report = decode_catalog("01SQ30\nXX\nYY\n");
        let lines: Vec<usize> = report.invalid_rows().map(|r| r.line).collect();
        assert_eq!(lines, [2, 3]);
    }

    #[test]
    fn test_empty_catalog() {
        let report = decode_catalog("");
        assert!(report.is_empty());
        assert_eq!(report.invalid_count(), 0);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_catalog(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn test_read_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        fs::write(&path, "01TC1860T18-3P-LC\n02RD48D-GL\n").unwrap();
        let report = read_catalog(&path).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.valid_count(), 2);
    }
}
