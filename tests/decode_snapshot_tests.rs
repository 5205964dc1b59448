//! Snapshot tests for rendered SKU output
//!
//! These tests render decoded SKUs as the CLI would print them and compare against stored snapshots.
//! Run `cargo insta review` to update snapshots after intentional changes.

use skucode::config::{ColorMode, RenderConfig};
use skucode::parse;
use skucode::render::{render_chips, render_text};

fn plain() -> RenderConfig {
    RenderConfig::new().with_color(ColorMode::Never)
}

fn render(sku: &str) -> String {
    render_text(&parse(sku), &plain())
}

#[test]
fn test_full_sku() {
    let text = render("01TC1860T18-3P-LC");
    insta::assert_snapshot!("full_sku", text);
}

#[test]
fn test_unregistered_codes() {
    let text = render("77ZZ30QQ5-LC-ZZ");
    insta::assert_snapshot!("unregistered_codes", text);
}

#[test]
fn test_typed_suffixes() {
    let text = render("03SQ42QD-SH.30-GR.B");
    insta::assert_snapshot!("typed_suffixes", text);
}

#[test]
fn test_chips_without_details() {
    let text = render_text(&parse("01rd36"), &plain().with_details(false));
    assert_eq!(text, "01RD36\n  [Series 01] [Shape RD] [Size 36]\n");
}

#[test]
fn test_colored_chips_wrap_each_segment() {
    let chips = render_chips(&parse("01SQ"), true);
    assert_eq!(chips.matches("\x1b[0m").count(), 2);
    assert!(chips.contains("[Series 01]"));
    assert!(chips.contains("[Shape SQ]"));
}
