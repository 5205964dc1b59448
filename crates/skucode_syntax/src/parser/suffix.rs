/// What a suffix recognizer claimed a token as.
#[derive(Debug, Clone, Copy)]
enum Recognized<'t> {
    Posts(u8),
    /// Height digits, without the inch mark.
    Height(&'t str),
    Grommet(char),
    Option(&'static options::OptionInfo),
}

/// A suffix recognizer either claims a token or declines it.
type SuffixRecognizer = for<'t> fn(&'t str) -> Option<Recognized<'t>>;

/// Suffix recognizers in priority order.
///
/// The first recognizer to claim a token wins and the rest are skipped for that token. The typed feature
/// patterns run before the option table so that e.g. `3P` can never be read as an option code. A token that no
/// recognizer claims still becomes a segment (see [`Parser::suffix`]).
const SUFFIX_RECOGNIZERS: &[SuffixRecognizer] = &[
    recognize_post_count,
    recognize_special_height,
    recognize_grommet,
    recognize_option,
];

fn recognize_post_count(token: &str) -> Option<Recognized<'_>> {
    suffixes::post_count(token).map(Recognized::Posts)
}

fn recognize_special_height(token: &str) -> Option<Recognized<'_>> {
    suffixes::special_height(token).map(Recognized::Height)
}

fn recognize_grommet(token: &str) -> Option<Recognized<'_>> {
    suffixes::grommet(token).map(Recognized::Grommet)
}

fn recognize_option(token: &str) -> Option<Recognized<'_>> {
    options::lookup(token).map(Recognized::Option)
}

impl Parser<'_> {
    /// Recognize every hyphen-delimited suffix token, in order.
    ///
    /// Empty tokens (from `--` or a trailing `-`) carry nothing and are skipped. This differs from a literal
    /// split-and-emit, which would show each empty token as a blank `Option` segment.
    fn suffixes(&mut self) {
        let Some(tail) = self.suffix_tail else {
            return;
        };
        let mut offset = self.source.len() - tail.len();
        for token in tail.split('-') {
            let span = Span::new(offset, offset + token.len());
            offset += token.len() + 1;
            if token.is_empty() {
                continue;
            }
            self.suffix(token, span);
        }
    }

    /// Recognize one suffix token. A later typed feature overrides an earlier one; each keeps its segment.
    fn suffix(&mut self, token: &str, span: Span) {
        let segment = match SUFFIX_RECOGNIZERS.iter().find_map(|recognize| recognize(token)) {
            Some(Recognized::Posts(count)) => {
                self.sku.post_config = Some(count);
                Segment::new(SegmentKind::Posts, token, format!("{count}-post configuration"), span)
            }
            Some(Recognized::Height(digits)) => {
                let height = inches(digits);
                let decoded = format!("Special height {height}");
                self.sku.special_height = Some(height);
                Segment::new(SegmentKind::Height, token, decoded, span)
            }
            Some(Recognized::Grommet(position)) => {
                self.sku.grommet = Some(position);
                Segment::new(SegmentKind::Grommet, token, format!("Grommet position {position}"), span)
            }
            Some(Recognized::Option(info)) => {
                self.sku.options.push(OptionSuffix::from(info));
                Segment::new(SegmentKind::Option, token, info.name, span)
            }
            None => {
                tracing::trace!(token, "unrecognized suffix token");
                Segment::new(SegmentKind::Unrecognized, token, token, span)
            }
        };
        self.push(segment);
    }
}
