//! Output configuration for the skucode CLI
//!
//! Built from command-line flags; library callers construct it directly with the builder methods.

use std::io::IsTerminal;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// When to emit ANSI colors for segment chips
    pub color: ColorMode,
    /// Whether to print the per-segment detail card under the chips
    pub show_details: bool,
    /// Whether the detail card includes registry descriptions
    pub show_descriptions: bool,
    /// Text for humans or JSON for the presentation layer
    pub output: OutputFormat,
}

/// When to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl ColorMode {
    /// Decide whether to emit color right now.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            show_details: true,
            show_descriptions: false,
            output: OutputFormat::Text,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color mode
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Show or hide the detail card
    pub fn with_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    /// Show or hide registry descriptions in the detail card
    pub fn with_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    /// Set the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    pub fn is_json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}
