//! SKU decoding frontend for skucode: scanner, parser, decoded result model.
//!
//! This crate is dependency-light and shared by the CLI, the catalog tooling and any service that needs to turn
//! a product identifier into typed components.
//!
//! ## Notes
//! - Parsing is total: [`parser::parse`] never fails and never panics. A SKU whose leading series code is missing
//!   comes back with `valid == false`; every other problem degrades to an absent field or a fallback label.
//! - Code meanings come from `skucode_core::codes` registries; this crate only knows the positional layout.
//!
//! ## Examples
//! ```rust
//! use skucode_syntax::parser;
//!
//! let sku = parser::parse("01TC1860T18-3P-LC");
//! assert!(sku.valid);
//! assert_eq!(sku.post_config, Some(3));
//! assert_eq!(sku.segment_labels(), ["Series", "Shape", "Size", "Base", "Posts", "Option"]);
//! ```

pub mod parser;
pub mod scanner;
pub mod sku;

pub use parser::parse;
pub use sku::ParsedSku;
