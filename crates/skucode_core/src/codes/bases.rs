//! Base (under-structure) vocabulary.
//!
//! The base code is the letter run that follows the size digits, e.g. `QD` in `99SQ3030QD16`. Trailing digits
//! after the letters are a physical width, not part of the code.
//!
//! ## Notes
//! - Codes are one or more uppercase ASCII letters, never digits (digits would be swallowed as width).

use super::registry::{CodeInfo, active, discontinued};

/// Stable identifier for a registered base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseId {
    TBase,
    XBase,
    QuadBase,
    Cylinder,
    Disc,
    Sled,
    Leg,
    Panel,
    HFrame,
}

/// Metadata for a base.
pub type BaseInfo = CodeInfo<BaseId>;

/// Registry of all base codes.
pub const BASES: &[BaseInfo] = &[
    active(BaseId::TBase, "T", "T-Base", "Single column on a T-shaped foot"),
    active(BaseId::XBase, "X", "X-Base", "Column on a cross-shaped foot"),
    active(BaseId::QuadBase, "QD", "Quad Base", "Column on a four-prong spider foot"),
    active(BaseId::Cylinder, "C", "Cylinder", "Full drum cylinder base"),
    active(BaseId::Disc, "D", "Disc", "Column on a flat round disc"),
    active(BaseId::Sled, "SL", "Sled", "Cantilevered sled legs"),
    active(BaseId::Leg, "L", "Leg", "Four corner legs"),
    active(BaseId::Panel, "PL", "Panel", "Full-height panel end legs"),
    discontinued(BaseId::HFrame, "H", "H-Frame", "Welded H-frame with stretcher"),
];

/// Resolve a base code to a [`BaseId`].
pub fn from_code(code: &str) -> Option<BaseId> {
    lookup(code).map(|b| b.id)
}

/// Return the full metadata entry for a code, if registered.
pub fn lookup(code: &str) -> Option<&'static BaseInfo> {
    BASES.iter().find(|b| b.code == code)
}

/// Return the code spelling for a base.
pub fn as_code(id: BaseId) -> &'static str {
    info_for(id).code
}

/// Return the full metadata entry for a base.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BaseId) -> &'static BaseInfo {
    BASES.iter().find(|b| b.id == id).expect("INVARIANT: base info missing")
}
