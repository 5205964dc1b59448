//! Product series vocabulary.
//!
//! A series is the product family/design line, encoded as the two leading digits of every SKU.
//!
//! ## Notes
//! - Codes are exactly two ASCII digits. The registry guardrail tests enforce this.
//! - An unregistered series is still decodable: the parser synthesizes `"Series NN"` for display.
//!
//! ## Examples
//! ```rust
//! use skucode_core::codes::series::{self, SeriesId};
//!
//! assert_eq!(series::from_code("01"), Some(SeriesId::Studio));
//! assert_eq!(series::info_for(SeriesId::Studio).name, "Studio");
//! ```

use super::registry::{CodeInfo, active, discontinued};

/// Stable identifier for a registered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesId {
    Studio,
    Meridian,
    Atlas,
    Harbor,
    Summit,
    Ledger,
    Foundry,
    Custom,
}

/// Metadata for a series.
pub type SeriesInfo = CodeInfo<SeriesId>;

/// Registry of all series codes.
pub const SERIES: &[SeriesInfo] = &[
    active(SeriesId::Studio, "01", "Studio", "Open-plan collaborative tables"),
    active(SeriesId::Meridian, "02", "Meridian", "Conference and boardroom tables"),
    active(SeriesId::Atlas, "03", "Atlas", "Heavy-duty training tables"),
    active(SeriesId::Harbor, "04", "Harbor", "Cafe and breakroom tables"),
    active(SeriesId::Summit, "05", "Summit", "Height-adjustable workstations"),
    active(SeriesId::Ledger, "10", "Ledger", "Executive desks and returns"),
    discontinued(SeriesId::Foundry, "20", "Foundry", "Industrial work benches"),
    active(SeriesId::Custom, "99", "Custom", "Special-order and custom builds"),
];

/// Resolve a two-digit code to a [`SeriesId`].
///
/// ## Returns
/// - `Some(SeriesId)` if `code` is registered.
/// - `None` otherwise.
pub fn from_code(code: &str) -> Option<SeriesId> {
    lookup(code).map(|s| s.id)
}

/// Return the full metadata entry for a code, if registered.
pub fn lookup(code: &str) -> Option<&'static SeriesInfo> {
    SERIES.iter().find(|s| s.code == code)
}

/// Return the code spelling for a series.
pub fn as_code(id: SeriesId) -> &'static str {
    info_for(id).code
}

/// Return the full metadata entry for a series.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: SeriesId) -> &'static SeriesInfo {
    SERIES
        .iter()
        .find(|s| s.id == id)
        .expect("INVARIANT: series info missing")
}
