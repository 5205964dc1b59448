//! Parser for product SKUs.
//!
//! Decodes a SKU such as `01TC1860T18-3P-LC` into a [`ParsedSku`]. The grammar is positional:
//!
//! ```text
//! SKU       := MAIN ( "-" SUFFIX )*
//! MAIN      := SERIES SHAPE? SIZE? BASE?
//! SERIES    := DIGIT DIGIT                  (mandatory)
//! SHAPE     := UPPER UPPER
//! SIZE      := DIGIT+
//! BASE      := UPPER+ DIGIT*
//! SUFFIX    := post count | special height | grommet | option code | anything else
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use skucode_syntax::parser;
//!
//! let sku = parser::parse("  99sq3030qd16-3p  ");
//! assert_eq!(sku.raw, "99SQ3030QD16-3P");
//! assert_eq!(sku.size.unwrap().display(), "30\"");
//! ```

use skucode_core::codes::{options, suffixes};

use crate::scanner::Cursor;
use crate::sku::{Base, OptionSuffix, ParsedSku, Segment, SegmentKind, Series, Shape, Size, Span, inches};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping each
// stage of the scan in its own file.

include!("parser/core.rs");
include!("parser/main_part.rs");
include!("parser/suffix.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
