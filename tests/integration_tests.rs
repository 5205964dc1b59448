//! Integration tests for the skucode decoding pipeline
//!
//! Exercises the library surface end to end: deep link to SKU to decoded result, JSON output, and the CLI command
//! functions with their exit codes.

use std::io::Write;

use skucode::cli::ExitCode;
use skucode::cli::commands::{decode_catalog_file, decode_link, decode_skus, print_registry};
use skucode::config::{ColorMode, OutputFormat, RenderConfig};
use skucode::render::render_json;
use skucode::{parse, sku_from_link};

fn quiet() -> RenderConfig {
    RenderConfig::new().with_color(ColorMode::Never)
}

#[test]
fn test_link_to_decoded_sku() {
    let sku = sku_from_link("https://dashboard.example.com/decoder?sku=01tc1860t18-3p-lc&ref=catalog").unwrap();
    let parsed = parse(&sku);
    assert!(parsed.valid);
    assert_eq!(parsed.raw, "01TC1860T18-3P-LC");
    assert_eq!(
        parsed.segment_labels(),
        vec!["Series", "Shape", "Size", "Base", "Posts", "Option"]
    );
}

#[test]
fn test_json_shape_for_presentation_layer() {
    let json = render_json(&parse("01TC1860T18-3P-LC")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["valid"], true);
    assert_eq!(value["raw"], "01TC1860T18-3P-LC");
    assert_eq!(value["postConfig"], 3);
    assert_eq!(value["specialHeight"], serde_json::Value::Null);
    assert_eq!(value["size"]["width"], "18\"");
    assert_eq!(value["size"]["depth"], "60\"");
    assert_eq!(value["base"]["width"], "18\"");
    assert_eq!(value["options"][0]["code"], "LC");

    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 6);
    assert_eq!(segments[0]["label"], "Series");
    assert_eq!(segments[0]["rawValue"], "01");
    assert_eq!(segments[0]["decodedText"], "Studio");
    assert_eq!(segments[0]["color"], "blue");
}

#[test]
fn test_json_for_invalid_sku() {
    let json = render_json(&parse("hello")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["raw"], "HELLO");
    assert_eq!(value["segments"].as_array().unwrap().len(), 0);
}

#[test]
fn test_decode_exit_codes() {
    let ok = decode_skus(&["01SQ36T".to_string()], &quiet()).unwrap();
    assert_eq!(ok, ExitCode::SUCCESS);

    let mixed = decode_skus(&["01SQ36T".to_string(), "SQ36".to_string()], &quiet()).unwrap();
    assert_eq!(mixed, ExitCode::FAILURE);
}

#[test]
fn test_decode_link_errors_are_cli_errors() {
    let err = decode_link("https://example.com/decoder?ref=x", &quiet()).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("sku"));
}

#[test]
fn test_catalog_strict_mode() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "01TC1860T18-3P-LC").unwrap();
    writeln!(file, "TC1860").unwrap();
    let config = RenderConfig {
        output: OutputFormat::Json,
        ..quiet()
    };

    assert_eq!(decode_catalog_file(file.path(), false, &config).unwrap(), ExitCode::SUCCESS);
    assert_eq!(decode_catalog_file(file.path(), true, &config).unwrap(), ExitCode::FAILURE);
}

#[test]
fn test_registry_prints() {
    assert_eq!(print_registry().unwrap(), ExitCode::SUCCESS);
}
