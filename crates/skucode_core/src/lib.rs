//! Provide the canonical product-code vocabulary for the skucode SKU decoder.
//!
//! This crate is intentionally small. It holds the static tables that give meaning to the fixed-width codes
//! embedded in a SKU, and nothing that knows how a SKU is laid out:
//! - the code registries (series, shapes, bases, option suffixes) and the suffix feature patterns, and
//! - the display palette used to color decoded segments.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no mutable global state, no parser types.
//! - Positional grammar (what comes after what) lives in `skucode_syntax`.

pub mod codes;
pub mod palette;
pub mod reference;
