//! Shareable metadata for `skucode_core::codes` registries.
//!
//! Every code table is a `const` slice of `Copy` records so it can be consumed from any thread without
//! initialization. This submodule provides the small metadata types reused across those tables.
//!
//! ## Notes
//! - Metadata is meant for decoding, tooling and docs. Grammar rules live in the parser.

/// Lifecycle status of a product code.
///
/// ## Notes
/// - Discontinued codes still decode normally; old quotes and catalog rows keep referencing them.
///
/// ## Examples
/// ```rust
/// use skucode_core::codes::registry::Status;
///
/// let s = Status::Active;
/// assert_eq!(format!("{s:?}"), "Active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Discontinued,
}

/// Shared metadata shape for code tables whose entries carry a name and description.
///
/// Tables that need different per-entry data (e.g. shapes carry an icon tag) define their own info type.
///
/// ## Notes
/// - `description` is mandatory to keep the generated reference complete.
/// - This type is `Copy` so it can live in `const` tables.
#[derive(Debug, Clone, Copy)]
pub struct CodeInfo<Id> {
    pub id: Id,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub status: Status,
}

/// Build an active [`CodeInfo`] entry.
pub(crate) const fn active<Id>(
    id: Id,
    code: &'static str,
    name: &'static str,
    description: &'static str,
) -> CodeInfo<Id> {
    CodeInfo {
        id,
        code,
        name,
        description,
        status: Status::Active,
    }
}

/// Build a discontinued [`CodeInfo`] entry.
pub(crate) const fn discontinued<Id>(
    id: Id,
    code: &'static str,
    name: &'static str,
    description: &'static str,
) -> CodeInfo<Id> {
    CodeInfo {
        id,
        code,
        name,
        description,
        status: Status::Discontinued,
    }
}
