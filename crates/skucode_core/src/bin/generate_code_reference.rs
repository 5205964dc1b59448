//! Generate the Markdown code reference from `skucode_core::codes` registries.
//!
//! Writes `docs/reference/codes.md` at the workspace root.
//!
//! ## Notes
//! - The generated file is checked in and treated as a derived artifact. Update the registries, not the Markdown.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p skucode_core --bin generate_code_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/reference");
    fs::create_dir_all(&out_dir).expect("create docs/reference/");

    let path = out_dir.join("codes.md");
    fs::write(&path, skucode_core::reference::render_markdown()).expect("write codes.md");
    println!("wrote {}", path.display());
}

fn workspace_root() -> PathBuf {
    // crates/skucode_core -> workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(PathBuf::from)
        .expect("resolve workspace root")
}
