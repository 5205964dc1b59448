//! Terminal and JSON rendering of decoded SKUs.
//!
//! Text output mirrors the dashboard: a row of colored chips (one per segment) followed by a detail card with the
//! decoded value of each segment. JSON output is the `ParsedSku` shape the presentation layer consumes.

use serde::Serialize;
use skucode_syntax::ParsedSku;
use skucode_syntax::sku::{Segment, SegmentKind};

use crate::catalog::{CatalogReport, CatalogRow};
use crate::config::RenderConfig;

const RESET: &str = "\x1b[0m";

/// Render the segment chips on one line: `[Series 01] [Shape TC] ...`.
pub fn render_chips(sku: &ParsedSku, color: bool) -> String {
    sku.segments
        .iter()
        .map(|seg| {
            let chip = format!("[{} {}]", seg.label, seg.raw_value);
            if color {
                format!("{}{chip}{RESET}", seg.color.ansi())
            } else {
                chip
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the detail card: one aligned line per segment.
pub fn render_details(sku: &ParsedSku, show_descriptions: bool) -> String {
    let mut out = String::new();
    for seg in &sku.segments {
        let mut line = format!("  {:<7}  {:<8}  {}", seg.label, seg.raw_value, seg.decoded_text);
        if show_descriptions {
            if let Some(desc) = description_for(sku, seg) {
                line.push_str(&format!(" ({desc})"));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render one decoded SKU for the terminal.
///
/// Expects a valid SKU. Invalid input is reported through [`crate::diagnostics::InvalidSku`] instead.
pub fn render_text(sku: &ParsedSku, config: &RenderConfig) -> String {
    let mut out = String::new();
    out.push_str(&sku.raw);
    out.push('\n');

    out.push_str("  ");
    out.push_str(&render_chips(sku, config.color.enabled()));
    out.push('\n');

    if config.show_details {
        out.push_str(&render_details(sku, config.show_descriptions));
    }

    let unknown = sku.unknown_codes();
    if !unknown.is_empty() {
        out.push_str(&format!("  note: not in the code registry: {}\n", unknown.join(", ")));
    }
    out
}

/// Render one catalog row as a summary line.
pub fn render_catalog_row(row: &CatalogRow) -> String {
    let status = if !row.sku.valid {
        "invalid"
    } else if row.sku.is_fully_known() {
        "ok"
    } else {
        "unknown"
    };
    format!("{:>5}  {:<7}  {}", row.line, status, row.sku)
}

/// Render the totals line for a catalog.
pub fn render_catalog_summary(report: &CatalogReport) -> String {
    format!(
        "{} rows: {} valid, {} invalid, {} with unknown codes",
        report.len(),
        report.valid_count(),
        report.invalid_count(),
        report.unknown_count()
    )
}

/// Render any serializable value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Registry description backing a segment, where the registry has one.
fn description_for<'a>(sku: &'a ParsedSku, seg: &Segment) -> Option<&'a str> {
    match seg.kind {
        SegmentKind::Series => sku.series.as_ref().map(|s| s.description.as_str()),
        SegmentKind::Base => sku.base.as_ref().map(|b| b.description.as_str()),
        SegmentKind::Option => sku
            .options
            .iter()
            .find(|o| o.code == seg.raw_value)
            .map(|o| o.description.as_str()),
        _ => None,
    }
}
