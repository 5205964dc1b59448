//! CLI module for skucode
//!
//! This module provides the command-line interface for the SKU decoder.
//!
//! ## Commands
//!
//! - `decode <SKU>...` - Decode one or more SKUs
//! - `link <URL>` - Decode the SKU carried by a dashboard deep link
//! - `catalog <FILE>` - Decode every SKU in a catalog export
//! - `registry` - Print the code registry as Markdown
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorMode, OutputFormat, RenderConfig};
use crate::version::SKUCODE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<crate::catalog::CatalogError> for CliError {
    fn from(e: crate::catalog::CatalogError) -> Self {
        CliError::failure(format!("Error: {e}"))
    }
}

impl From<crate::link::LinkError> for CliError {
    fn from(e: crate::link::LinkError) -> Self {
        CliError::failure(format!("Error: {e}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::failure(format!("Error serializing JSON: {e}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Decode furniture product SKUs into series, shape, size, base and options
#[derive(Parser, Debug)]
#[command(name = "skucode")]
#[command(version = SKUCODE_VERSION)]
#[command(about = "Decode furniture product SKUs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode one or more SKUs (with `--json`, always a JSON array)
    Decode {
        /// SKUs to decode (case and surrounding whitespace are ignored)
        #[arg(value_name = "SKU", required = true)]
        skus: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decode the SKU carried by a dashboard deep link (`...?sku=...`)
    Link {
        /// Absolute URL or path-only link
        #[arg(value_name = "URL")]
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decode every SKU in a catalog export (one per line, or CSV with SKU first)
    Catalog {
        /// Catalog file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Exit with failure if any row is invalid
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the code registry as Markdown tables
    Registry,
}

/// Output flags shared by the decoding commands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// When to color segment chips
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Hide the per-segment detail card
    #[arg(long)]
    pub no_details: bool,
    /// Include registry descriptions in the detail card
    #[arg(long)]
    pub descriptions: bool,
}

impl OutputArgs {
    pub fn render_config(&self) -> RenderConfig {
        let output = if self.json { OutputFormat::Json } else { OutputFormat::Text };
        RenderConfig::new()
            .with_color(self.color)
            .with_details(!self.no_details)
            .with_descriptions(self.descriptions)
            .with_output(output)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Decode { skus, output } => commands::decode_skus(&skus, &output.render_config()),
        Command::Link { url, output } => commands::decode_link(&url, &output.render_config()),
        Command::Catalog { file, strict, output } => {
            commands::decode_catalog_file(&file, strict, &output.render_config())
        }
        Command::Registry => commands::print_registry(),
    }
}

// ============================================================================
// Tests
// ============================================================================
