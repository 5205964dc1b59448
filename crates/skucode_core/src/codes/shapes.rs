//! Top shape vocabulary.
//!
//! The shape is the two-letter code immediately after the series digits, e.g. `TC` in `01TC1860T18`.
//! Unlike the other tables, shape entries carry an icon tag for the presentation layer instead of a description.
//!
//! ## Notes
//! - Codes are exactly two uppercase ASCII letters.
//! - Lookup via [`from_code`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use skucode_core::codes::shapes::{self, ShapeId};
//!
//! assert_eq!(shapes::from_code("TC"), Some(ShapeId::Rectangular));
//! assert_eq!(shapes::icon(ShapeId::Round), "circle");
//! ```

use super::registry::Status;

/// Stable identifier for a registered top shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeId {
    Square,
    Round,
    Rectangular,
    Racetrack,
    Boat,
    HalfRound,
    Trapezoid,
    Kidney,
}

/// Metadata for a top shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInfo {
    pub id: ShapeId,
    pub code: &'static str,
    pub name: &'static str,
    /// Icon tag understood by the presentation layer.
    pub icon: &'static str,
    pub status: Status,
}

/// Registry of all top shapes.
pub const SHAPES: &[ShapeInfo] = &[
    info(ShapeId::Square, "SQ", "Square", "square"),
    info(ShapeId::Round, "RD", "Round", "circle"),
    info(ShapeId::Rectangular, "TC", "Rectangular", "rectangle"),
    info(ShapeId::Racetrack, "RT", "Racetrack", "racetrack"),
    info(ShapeId::Boat, "BT", "Boat", "boat"),
    info(ShapeId::HalfRound, "HR", "Half Round", "half-circle"),
    info(ShapeId::Trapezoid, "TZ", "Trapezoid", "trapezoid"),
    ShapeInfo {
        id: ShapeId::Kidney,
        code: "KD",
        name: "Kidney",
        icon: "kidney",
        status: Status::Discontinued,
    },
];

/// Resolve a two-letter code to a [`ShapeId`].
pub fn from_code(code: &str) -> Option<ShapeId> {
    lookup(code).map(|s| s.id)
}

/// Return the full metadata entry for a code, if registered.
pub fn lookup(code: &str) -> Option<&'static ShapeInfo> {
    SHAPES.iter().find(|s| s.code == code)
}

/// Return the code spelling for a shape.
pub fn as_code(id: ShapeId) -> &'static str {
    info_for(id).code
}

/// Return the icon tag for a shape.
pub fn icon(id: ShapeId) -> &'static str {
    info_for(id).icon
}

/// Return the full metadata entry for a shape.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ShapeId) -> &'static ShapeInfo {
    SHAPES
        .iter()
        .find(|s| s.id == id)
        .expect("INVARIANT: shape info missing")
}

const fn info(id: ShapeId, code: &'static str, name: &'static str, icon: &'static str) -> ShapeInfo {
    ShapeInfo {
        id,
        code,
        name,
        icon,
        status: Status::Active,
    }
}
