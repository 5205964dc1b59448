//! SKU code registries.
//!
//! This module is the “front door” for product-code vocabulary: series, top shapes, bases, option suffixes, and
//! the patterns used to recognize suffix features.
//!
//! Callers work with **stable IDs** (e.g. `SeriesId`, `ShapeId`) and look up codes/metadata via registry tables
//! instead of matching on code strings.
//!
//! ## Notes
//! - Registries are **pure**: no parser types, no IO, no side effects.
//! - A lookup miss is a normal runtime condition (`None`), not an error. Callers decide the fallback display.
//! - Lookups are case-sensitive; the parser upper-cases input before it reaches a registry.
//!
//! ## Examples
//! ```rust
//! use skucode_core::codes::series::{self, SeriesId};
//!
//! assert_eq!(series::from_code("01"), Some(SeriesId::Studio));
//! assert_eq!(series::as_code(SeriesId::Studio), "01");
//! assert_eq!(series::from_code("77"), None);
//! ```
//!
//! ## See also
//! - `cargo run -p skucode_core --bin generate_code_reference` to regenerate the Markdown reference tables.

pub mod bases;
pub mod options;
pub mod registry;
pub mod series;
pub mod shapes;
pub mod suffixes;
