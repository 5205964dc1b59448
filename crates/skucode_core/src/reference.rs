//! Render the code registries as Markdown reference tables.
//!
//! Used by the `generate_code_reference` binary (which writes `docs/reference/codes.md`) and by
//! `skucode registry` (which prints the same text to stdout).
//!
//! ## Notes
//! - Output is deterministic: tables are emitted in registry order.

use crate::codes::registry::{CodeInfo, Status};
use crate::codes::{bases, options, series, shapes, suffixes};

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn start_section(out: &mut String, heading: &str) {
    trim_trailing_newlines_to_at_most_two(out);
    if !out.is_empty() && !out.ends_with("\n\n") {
        out.push_str(if out.ends_with('\n') { "\n" } else { "\n\n" });
    }
    out.push_str(heading);
    out.push_str("\n\n");
}

fn status_cell(status: Status) -> &'static str {
    match status {
        Status::Active => "",
        Status::Discontinued => "discontinued",
    }
}

/// Render the full code reference document.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# SKU code reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    Regenerate with: `cargo run -p skucode_core --bin generate_code_reference`\n\n");

    out.push_str("SKU layout: `SS` series, `HH` shape, size digits, base letters + width, then `-` suffixes.\n");
    out.push_str("Example: `01TC1860T18-3P-LC`.\n");

    render_code_table(&mut out, "## Series", series::SERIES);
    render_shapes(&mut out);
    render_code_table(&mut out, "## Bases", bases::BASES);
    render_code_table(&mut out, "## Options", options::OPTIONS);
    render_suffix_features(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn render_code_table<Id>(out: &mut String, heading: &str, table: &[CodeInfo<Id>]) {
    start_section(out, heading);
    out.push_str("| Code | Name | Description | Status |\n");
    out.push_str("|---|---|---|---|\n");
    for entry in table {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            entry.code,
            entry.name,
            entry.description,
            status_cell(entry.status)
        ));
    }
}

fn render_shapes(out: &mut String) {
    start_section(out, "## Shapes");
    out.push_str("| Code | Name | Icon | Status |\n");
    out.push_str("|---|---|---|---|\n");
    for s in shapes::SHAPES {
        out.push_str(&format!(
            "| `{}` | {} | `{}` | {} |\n",
            s.code,
            s.name,
            s.icon,
            status_cell(s.status)
        ));
    }
}

fn render_suffix_features(out: &mut String) {
    start_section(out, "## Suffix features");
    out.push_str("Checked in this order for every suffix token, before the option table.\n\n");
    out.push_str("| Feature | Pattern | Example | Description |\n");
    out.push_str("|---|---|---|---|\n");
    for f in suffixes::SUFFIX_FEATURES {
        out.push_str(&format!(
            "| {} | `{}` | `{}` | {} |\n",
            f.name, f.pattern, f.example, f.description
        ));
    }
}
