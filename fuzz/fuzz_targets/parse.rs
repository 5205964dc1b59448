#![no_main]

use libfuzzer_sys::fuzz_target;
use skucode_syntax::parser;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let sku = parser::parse(s);
        // Every segment must index the normalized string it came from.
        for seg in &sku.segments {
            assert_eq!(sku.raw.get(seg.span.start..seg.span.end), Some(seg.raw_value.as_str()));
        }
        if !sku.valid {
            assert!(sku.segments.is_empty());
        }
    }
});
