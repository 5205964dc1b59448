//! Command implementations for the skucode CLI.
//!
//! Each function returns `CliResult<ExitCode>`. Invalid SKUs are reported, not raised: the command still prints
//! everything it decoded and signals the failure through the exit code.

use std::path::Path;

use skucode_syntax::{ParsedSku, parser};

use super::{CliResult, ExitCode};
use crate::catalog;
use crate::config::RenderConfig;
use crate::diagnostics::InvalidSku;
use crate::link;
use crate::render;

/// Decode SKUs given on the command line.
///
/// With `--json` the output is always an array, one object per SKU, even for a single argument.
pub fn decode_skus(inputs: &[String], config: &RenderConfig) -> CliResult<ExitCode> {
    let skus: Vec<ParsedSku> = inputs.iter().map(|s| parser::parse(s)).collect();
    let stdout = if config.is_json() {
        render::render_json(&skus)?
    } else {
        decoded_text(&skus, config)
    };
    emit_decoded(&stdout, &skus, "argument", config)
}

/// Decode the SKU carried by a deep link.
///
/// A link carries exactly one SKU, so `--json` emits a single object.
pub fn decode_link(url: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    let sku = link::sku_from_link(url)?;
    tracing::debug!(%sku, "sku from link");
    let skus = [parser::parse(&sku)];
    let stdout = if config.is_json() {
        render::render_json(&skus[0])?
    } else {
        decoded_text(&skus, config)
    };
    emit_decoded(&stdout, &skus, url, config)
}

/// Decode every SKU in a catalog file and print per-row results plus totals.
pub fn decode_catalog_file(path: &Path, strict: bool, config: &RenderConfig) -> CliResult<ExitCode> {
    let report = catalog::read_catalog(path)?;

    if config.is_json() {
        println!("{}", render::render_json(&report.rows)?);
    } else {
        for row in &report.rows {
            println!("{}", render::render_catalog_row(row));
        }
        println!("{}", render::render_catalog_summary(&report));
    }

    if strict && report.invalid_count() > 0 {
        if !config.is_json() {
            let name = path.display().to_string();
            for row in report.invalid_rows() {
                report_invalid(&format!("{name}:{}", row.line), &row.sku);
            }
        }
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the code registry reference.
pub fn print_registry() -> CliResult<ExitCode> {
    print!("{}", skucode_core::reference::render_markdown());
    Ok(ExitCode::SUCCESS)
}

/// Text output for the valid SKUs. Invalid ones are reported on stderr instead (see [`report_invalid`]).
fn decoded_text(skus: &[ParsedSku], config: &RenderConfig) -> String {
    skus.iter()
        .filter(|sku| sku.valid)
        .map(|sku| render::render_text(sku, config))
        .collect()
}

fn emit_decoded(stdout: &str, skus: &[ParsedSku], origin: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    if config.is_json() {
        println!("{stdout}");
    } else {
        print!("{stdout}");
        for sku in skus.iter().filter(|sku| !sku.valid) {
            report_invalid(origin, sku);
        }
    }

    if skus.iter().all(|s| s.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn report_invalid(origin: &str, sku: &ParsedSku) {
    eprintln!("{:?}", miette::Report::new(InvalidSku::new(origin, sku)));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{ColorMode, OutputFormat};

    fn parse_all(inputs: &[&str]) -> Vec<ParsedSku> {
        inputs.iter().map(|s| parser::parse(s)).collect()
    }

    #[test]
    fn test_json_for_one_sku_is_still_an_array() {
        let skus = parse_all(&["01TC1860T18-3P-LC"]);
        let json = render::render_json(&skus).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["raw"], "01TC1860T18-3P-LC");
    }

    #[test]
    fn test_decode_json_exit_code_for_one_sku() {
        let config = RenderConfig::new().with_output(OutputFormat::Json);
        let code = decode_skus(&["01SQ30".to_string()], &config).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_text_output_leaves_out_invalid_skus() {
        let config = RenderConfig::new().with_color(ColorMode::Never).with_details(false);
        let text = decoded_text(&parse_all(&["01SQ30", "nope"]), &config);
        assert_eq!(text, "01SQ30\n  [Series 01] [Shape SQ] [Size 30]\n");
    }
}
