//! skucode version information.
//!
//! This module exposes the crate version as a single constant so the CLI and JSON output agree on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The skucode version string (for example, `0.1.0`).
pub const SKUCODE_VERSION: &str = env!("CARGO_PKG_VERSION");
