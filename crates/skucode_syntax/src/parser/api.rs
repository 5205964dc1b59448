/// Normalize raw input the way every parse does: trim surrounding whitespace, upper-case everything.
///
/// The normalized string is both the parse source and [`ParsedSku::raw`].
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Decode a SKU string.
///
/// This is the main public entrypoint for parsing. It is total: malformed input yields `valid == false`, never a
/// panic or an error.
///
/// ## Parameters
/// - `input`: SKU as typed or stored; case and surrounding whitespace are ignored.
#[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParsedSku {
    let raw = normalize(input);
    Parser::new(&raw).parse()
}
