//! Segment display palette.
//!
//! Decoded SKU segments are rendered as colored chips. The color is a fixed function of the field category, so
//! the same SKU always renders the same way in the dashboard and in the terminal.

/// Field category a segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentCategory {
    Series,
    Shape,
    Size,
    Base,
    /// Typed suffix features: post count, special height, grommet.
    Feature,
    Option,
}

/// Color tag understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentColor {
    Blue,
    Violet,
    Emerald,
    Amber,
    Rose,
    Slate,
}

impl SegmentCategory {
    /// Return the fixed palette color for this category.
    pub const fn color(self) -> SegmentColor {
        match self {
            SegmentCategory::Series => SegmentColor::Blue,
            SegmentCategory::Shape => SegmentColor::Violet,
            SegmentCategory::Size => SegmentColor::Emerald,
            SegmentCategory::Base => SegmentColor::Amber,
            SegmentCategory::Feature => SegmentColor::Rose,
            SegmentCategory::Option => SegmentColor::Slate,
        }
    }
}

impl SegmentColor {
    /// Return the color tag as the presentation layer spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            SegmentColor::Blue => "blue",
            SegmentColor::Violet => "violet",
            SegmentColor::Emerald => "emerald",
            SegmentColor::Amber => "amber",
            SegmentColor::Rose => "rose",
            SegmentColor::Slate => "slate",
        }
    }

    /// Return the closest ANSI SGR escape for terminal rendering.
    pub const fn ansi(self) -> &'static str {
        match self {
            SegmentColor::Blue => "\x1b[1;34m",
            SegmentColor::Violet => "\x1b[1;35m",
            SegmentColor::Emerald => "\x1b[1;32m",
            SegmentColor::Amber => "\x1b[1;33m",
            SegmentColor::Rose => "\x1b[1;31m",
            SegmentColor::Slate => "\x1b[1;37m",
        }
    }
}

impl std::fmt::Display for SegmentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_a_distinct_color() {
        let all = [
            SegmentCategory::Series,
            SegmentCategory::Shape,
            SegmentCategory::Size,
            SegmentCategory::Base,
            SegmentCategory::Feature,
            SegmentCategory::Option,
        ];
        let colors: HashSet<_> = all.iter().map(|c| c.color()).collect();
        assert_eq!(colors.len(), all.len());
    }

    #[test]
    fn color_tags_are_lowercase_names() {
        assert_eq!(SegmentCategory::Series.color().as_str(), "blue");
        assert_eq!(SegmentCategory::Option.color().to_string(), "slate");
    }
}
