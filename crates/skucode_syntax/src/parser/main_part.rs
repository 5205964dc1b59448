/// Main-part recognizers: series, shape, size, base.
///
/// Each reads from the shared cursor. Only the series code is mandatory.
impl Parser<'_> {
    /// Exactly two leading digits. Returns `false` when absent, which invalidates the whole SKU.
    fn series(&mut self) -> bool {
        let start = self.main.pos();
        let Some(code) = self.main.take_exact(2, |b| b.is_ascii_digit()) else {
            return false;
        };
        let series = Series::decode(code);
        let span = Span::new(start, self.main.pos());
        self.push(Segment::new(SegmentKind::Series, code, series.name.clone(), span));
        self.sku.series = Some(series);
        true
    }

    /// Exactly two uppercase letters.
    fn shape(&mut self) {
        let start = self.main.pos();
        let Some(code) = self.main.take_exact(2, |b| b.is_ascii_uppercase()) else {
            return;
        };
        let shape = Shape::decode(code);
        let span = Span::new(start, self.main.pos());
        self.push(Segment::new(SegmentKind::Shape, code, shape.name.clone(), span));
        self.sku.shape = Some(shape);
    }

    /// A digit run, decoded by length (see [`Size`]).
    fn size(&mut self) {
        let start = self.main.pos();
        let Some(digits) = self.main.take_while(|b| b.is_ascii_digit()) else {
            return;
        };
        let size = Size::decode(digits);
        let span = Span::new(start, self.main.pos());
        self.push(Segment::new(SegmentKind::Size, digits, size.display(), span));
        self.sku.size = Some(size);
    }

    /// Uppercase letters (the code) then optional digits (the width). Anything after it is ignored.
    fn base(&mut self) {
        let start = self.main.pos();
        let Some(code) = self.main.take_while(|b| b.is_ascii_uppercase()) else {
            return;
        };
        let width = self.main.take_while(|b| b.is_ascii_digit());
        let base = Base::decode(code, width);
        let span = Span::new(start, self.main.pos());
        let raw = self.main.since(start);
        self.push(Segment::new(SegmentKind::Base, raw, base.display(), span));
        self.sku.base = Some(base);

        if !self.main.is_at_end() {
            tracing::debug!(trailing = self.main.rest(), "ignoring text after base");
        }
    }
}
