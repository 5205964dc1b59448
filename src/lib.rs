#![forbid(unsafe_code)]
//! skucode: decode furniture product SKUs.
//!
//! A SKU such as `01TC1860T18-3P-LC` packs a product's series, top shape, size, base and options into one string.
//! This crate is the tooling layer over the decoder: CLI, catalog batch decoding, deep-link extraction, and
//! terminal/JSON rendering.
//!
//! - `skucode_core` holds the code registries (what each code means).
//! - `skucode_syntax` holds the parser (where each code sits).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a bug (e.g. a static pattern failing to compile), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod link;
pub mod render;
pub mod version;

pub use skucode_syntax::{ParsedSku, parse, parser};

pub use catalog::{CatalogReport, decode_catalog, read_catalog};
pub use config::RenderConfig;
pub use link::sku_from_link;
