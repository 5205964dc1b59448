//! Decoded SKU model.
//!
//! [`ParsedSku`] is the value returned by every parse call: typed fields for the components that were recognized,
//! plus an ordered list of display [`Segment`]s. It owns all of its data and is never mutated after the parser
//! returns it.

use std::fmt;

use skucode_core::codes::{bases, options, series, shapes};
use skucode_core::palette::{SegmentCategory, SegmentColor};

/// Byte range in the normalized SKU (`ParsedSku::raw`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Which recognizer produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SegmentKind {
    Series,
    Shape,
    Size,
    Base,
    Posts,
    Height,
    Grommet,
    /// Suffix token resolved against the option table.
    Option,
    /// Suffix token no recognizer claimed; echoed as-is.
    Unrecognized,
}

impl SegmentKind {
    /// Display label. Unrecognized suffixes share the `"Option"` label with known ones.
    pub const fn label(self) -> &'static str {
        match self {
            SegmentKind::Series => "Series",
            SegmentKind::Shape => "Shape",
            SegmentKind::Size => "Size",
            SegmentKind::Base => "Base",
            SegmentKind::Posts => "Posts",
            SegmentKind::Height => "Height",
            SegmentKind::Grommet => "Grommet",
            SegmentKind::Option | SegmentKind::Unrecognized => "Option",
        }
    }

    pub const fn category(self) -> SegmentCategory {
        match self {
            SegmentKind::Series => SegmentCategory::Series,
            SegmentKind::Shape => SegmentCategory::Shape,
            SegmentKind::Size => SegmentCategory::Size,
            SegmentKind::Base => SegmentCategory::Base,
            SegmentKind::Posts | SegmentKind::Height | SegmentKind::Grommet => SegmentCategory::Feature,
            SegmentKind::Option | SegmentKind::Unrecognized => SegmentCategory::Option,
        }
    }
}

/// One recognized token of a SKU, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Segment {
    pub kind: SegmentKind,
    pub label: &'static str,
    /// Exact text taken from the normalized SKU.
    pub raw_value: String,
    /// Human-readable decoding.
    pub decoded_text: String,
    pub color: SegmentColor,
    pub span: Span,
}

impl Segment {
    pub fn new(kind: SegmentKind, raw_value: impl Into<String>, decoded_text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            label: kind.label(),
            raw_value: raw_value.into(),
            decoded_text: decoded_text.into(),
            color: kind.category().color(),
            span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Series {
    /// Decode a series code, synthesizing display data for unregistered codes.
    pub fn decode(code: &str) -> Self {
        match series::lookup(code) {
            Some(info) => Self {
                code: code.to_string(),
                name: info.name.to_string(),
                description: info.description.to_string(),
            },
            None => {
                tracing::debug!(code, "unregistered series code");
                Self {
                    code: code.to_string(),
                    name: format!("Series {code}"),
                    description: "Unknown series".to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shape {
    pub code: String,
    pub name: String,
    /// Icon tag; `None` for unregistered shapes.
    pub icon: Option<String>,
}

impl Shape {
    /// Decode a shape code, echoing the raw code as the name when unregistered.
    pub fn decode(code: &str) -> Self {
        match shapes::lookup(code) {
            Some(info) => Self {
                code: code.to_string(),
                name: info.name.to_string(),
                icon: Some(info.icon.to_string()),
            },
            None => {
                tracing::debug!(code, "unregistered shape code");
                Self {
                    code: code.to_string(),
                    name: code.to_string(),
                    icon: None,
                }
            }
        }
    }
}

/// Top dimensions decoded from the size digit run.
///
/// Decoding depends only on the run length:
///
/// | Length | Width        | Depth        | Example            |
/// |--------|--------------|--------------|--------------------|
/// | 4      | digits 1-2   | digits 3-4   | `1860` → 18" x 60" |
/// | 3      | digits 1-2   | digit 3      | `248` → 24" x 8"   |
/// | 2      | both         | same         | `36` → 36"         |
/// | other  | whole run    | empty        | `5` → 5"           |
///
/// The 3-digit rule is a fixed catalog convention, not a general decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Size {
    pub raw: String,
    pub width: String,
    /// Empty when the run length has no decomposition rule.
    pub depth: String,
}

impl Size {
    pub fn decode(digits: &str) -> Self {
        let len = if digits.is_ascii() { digits.len() } else { 0 };
        let (width, depth) = match len {
            3 | 4 => (inches(&digits[..2]), inches(&digits[2..])),
            2 => (inches(digits), inches(digits)),
            _ => (inches(digits), String::new()),
        };
        Self {
            raw: digits.to_string(),
            width,
            depth,
        }
    }

    /// Display label: a single dimension for square/round tops (or undecomposed runs), else `W x D`.
    pub fn display(&self) -> String {
        if self.depth.is_empty() || self.width == self.depth {
            self.width.clone()
        } else {
            format!("{} x {}", self.width, self.depth)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Base {
    pub code: String,
    pub name: String,
    pub description: String,
    /// Physical width with inch mark, from the digits after the base letters.
    pub width: Option<String>,
}

impl Base {
    /// Decode a base code and its optional width digits.
    pub fn decode(code: &str, width_digits: Option<&str>) -> Self {
        let (name, description) = match bases::lookup(code) {
            Some(info) => (info.name.to_string(), info.description.to_string()),
            None => {
                tracing::debug!(code, "unregistered base code");
                (code.to_string(), "Unknown base".to_string())
            }
        };
        Self {
            code: code.to_string(),
            name,
            description,
            width: width_digits.map(inches),
        }
    }

    /// Display label: the base name followed by its width, if any.
    pub fn display(&self) -> String {
        match &self.width {
            Some(w) => format!("{} {}", self.name, w),
            None => self.name.clone(),
        }
    }
}

/// A suffix token resolved against the option table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionSuffix {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl From<&options::OptionInfo> for OptionSuffix {
    fn from(info: &options::OptionInfo) -> Self {
        Self {
            code: info.code.to_string(),
            name: info.name.to_string(),
            description: info.description.to_string(),
        }
    }
}

/// Result of decoding one SKU string.
///
/// ## Notes
/// - `segments` follows left-to-right scan order: series, shape, size, base, then suffix tokens as written.
/// - Every populated field has a matching segment; absent fields have none.
/// - `valid == false` means the leading series code did not match. All fields are then empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParsedSku {
    pub valid: bool,
    /// Trimmed, upper-cased input.
    pub raw: String,
    pub segments: Vec<Segment>,
    pub series: Option<Series>,
    pub shape: Option<Shape>,
    pub size: Option<Size>,
    pub base: Option<Base>,
    pub post_config: Option<u8>,
    pub options: Vec<OptionSuffix>,
    pub special_height: Option<String>,
    pub grommet: Option<char>,
}

impl ParsedSku {
    /// An empty result for input whose series code did not match.
    pub fn invalid(raw: impl Into<String>) -> Self {
        Self {
            valid: false,
            ..Self::empty(raw)
        }
    }

    pub(crate) fn empty(raw: impl Into<String>) -> Self {
        Self {
            valid: true,
            raw: raw.into(),
            segments: Vec::new(),
            series: None,
            shape: None,
            size: None,
            base: None,
            post_config: None,
            options: Vec::new(),
            special_height: None,
            grommet: None,
        }
    }

    /// Segment labels in emission order.
    pub fn segment_labels(&self) -> Vec<&'static str> {
        self.segments.iter().map(|s| s.label).collect()
    }

    /// Codes that decoded through a fallback instead of a registry entry, in scan order.
    ///
    /// Includes suffix tokens that no recognizer claimed.
    pub fn unknown_codes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for seg in &self.segments {
            let known = match seg.kind {
                SegmentKind::Series => series::lookup(&seg.raw_value).is_some(),
                SegmentKind::Shape => shapes::lookup(&seg.raw_value).is_some(),
                SegmentKind::Base => self.base.as_ref().is_some_and(|b| bases::lookup(&b.code).is_some()),
                SegmentKind::Unrecognized => false,
                _ => true,
            };
            if !known {
                match (seg.kind, &self.base) {
                    (SegmentKind::Base, Some(b)) => out.push(b.code.as_str()),
                    _ => out.push(seg.raw_value.as_str()),
                }
            }
        }
        out
    }

    /// `true` when the SKU is valid and every recognized code resolved against the registry.
    pub fn is_fully_known(&self) -> bool {
        self.valid && self.unknown_codes().is_empty()
    }
}

impl fmt::Display for ParsedSku {
    /// Compact one-line rendering: `RAW: label=decoded, ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "{}: invalid", self.raw);
        }
        write!(f, "{}:", self.raw)?;
        for (i, seg) in self.segments.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{}={}", seg.label, seg.decoded_text)?;
        }
        Ok(())
    }
}

/// Append the inch mark to a dimension.
pub(crate) fn inches(digits: &str) -> String {
    format!("{digits}\"")
}
