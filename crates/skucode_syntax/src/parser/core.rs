/// Parser state.
///
/// ## Notes
/// - The scan is single-pass and left to right. Fields after the series code are independently optional: a miss
///   leaves the cursor in place and the next field is attempted from the same position.
/// - Nothing in here can fail. The only early exit is a missing series code, which yields an invalid result.
pub struct Parser<'a> {
    /// Normalized SKU; `raw` of the result.
    source: &'a str,
    /// Everything before the first hyphen.
    main: Cursor<'a>,
    /// Everything after the first hyphen, if there was one.
    suffix_tail: Option<&'a str>,
    sku: ParsedSku,
}

impl<'a> Parser<'a> {
    /// Create a parser over an already-normalized SKU (see [`normalize`]).
    pub fn new(source: &'a str) -> Self {
        let (main, suffix_tail) = match source.split_once('-') {
            Some((main, tail)) => (main, Some(tail)),
            None => (source, None),
        };
        Self {
            source,
            main: Cursor::new(main),
            suffix_tail,
            sku: ParsedSku::empty(source),
        }
    }

    /// Run every recognizer and return the decoded SKU.
    pub fn parse(mut self) -> ParsedSku {
        if !self.series() {
            tracing::debug!(raw = self.source, "no leading series code");
            return ParsedSku::invalid(self.source);
        }

        self.shape();
        self.size();
        self.base();
        self.suffixes();

        self.sku
    }

    fn push(&mut self, segment: Segment) {
        tracing::trace!(label = segment.label, raw = %segment.raw_value, "recognized segment");
        self.sku.segments.push(segment);
    }
}
