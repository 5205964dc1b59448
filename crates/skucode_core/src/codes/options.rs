//! Option suffix vocabulary.
//!
//! Option suffixes are hyphen-delimited tokens after the main product code, e.g. `LC` in `01TC1860T18-3P-LC`.
//! A token only resolves here on an exact whole-token match, and only after the suffix feature patterns
//! (post count, special height, grommet) have declined it.
//!
//! ## Notes
//! - An option code must never match a suffix feature pattern, or it would be unreachable. The registry
//!   guardrail tests enforce this.
//!
//! ## Examples
//! ```rust
//! use skucode_core::codes::options::{self, OptionId};
//!
//! assert_eq!(options::from_code("LC"), Some(OptionId::LockingCasters));
//! assert_eq!(options::info_for(OptionId::LockingCasters).name, "Locking Casters");
//! ```

use super::registry::{CodeInfo, active, discontinued};

/// Stable identifier for a registered option suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionId {
    LockingCasters,
    Glides,
    PowerModule,
    WireManagement,
    ModestyPanel,
    FlipTop,
    GangingConnectors,
    EdgeBand,
    KnifeEdge,
}

/// Metadata for an option suffix.
pub type OptionInfo = CodeInfo<OptionId>;

/// Registry of all option suffix codes.
pub const OPTIONS: &[OptionInfo] = &[
    active(OptionId::LockingCasters, "LC", "Locking Casters", "Swivel casters with wheel locks"),
    active(OptionId::Glides, "GL", "Leveling Glides", "Adjustable glides for uneven floors"),
    active(OptionId::PowerModule, "PM", "Power Module", "Flush-mount power and data module"),
    active(OptionId::WireManagement, "WM", "Wire Management", "Under-top cable tray"),
    active(OptionId::ModestyPanel, "MP", "Modesty Panel", "Front modesty panel"),
    active(OptionId::FlipTop, "FT", "Flip Top", "Flip-top nesting mechanism"),
    active(OptionId::GangingConnectors, "GC", "Ganging Connectors", "Brackets to join adjacent tables"),
    active(OptionId::EdgeBand, "EB", "Edge Band", "Contrasting edge banding"),
    discontinued(OptionId::KnifeEdge, "KE", "Knife Edge", "Beveled knife-edge top profile"),
];

/// Resolve an option suffix token to an [`OptionId`].
///
/// ## Notes
/// - Matching is exact and whole-token: `LC2` does not resolve to `LC`.
pub fn from_code(code: &str) -> Option<OptionId> {
    lookup(code).map(|o| o.id)
}

/// Return the full metadata entry for a code, if registered.
pub fn lookup(code: &str) -> Option<&'static OptionInfo> {
    OPTIONS.iter().find(|o| o.code == code)
}

/// Return the code spelling for an option suffix.
pub fn as_code(id: OptionId) -> &'static str {
    info_for(id).code
}

/// Return the full metadata entry for an option suffix.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OptionId) -> &'static OptionInfo {
    OPTIONS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: option info missing")
}
