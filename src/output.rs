//! # Output Configuration
//!
//! Controls how plans and status lines look on the terminal.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dotplan::output::{OutputConfig, render_plan};
//!
//! let config = OutputConfig::from_env_and_flag("auto");
//! println!("{}", render_plan(&batch, &config));
//! ```

use std::env;

use console::Style;

use crate::batch::OperationBatch;
use crate::operation::{Operation, OperationKind};

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if:
    /// - `NO_COLOR` environment variable is set (any value, including empty)
    /// - `CLICOLOR=0` is set
    /// - `TERM=dumb` is set
    /// - stdout is not a TTY (unless `CLICOLOR_FORCE=1`)
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

fn kind_style(kind: OperationKind) -> Style {
    let style = match kind {
        OperationKind::Mkdir => Style::new().blue(),
        OperationKind::Copy => Style::new().green(),
        OperationKind::Move => Style::new().yellow(),
        OperationKind::Link => Style::new().cyan(),
        OperationKind::Remove => Style::new().red(),
        OperationKind::Custom => Style::new().magenta(),
    };
    style.bold()
}

fn render_operation(operation: &Operation, config: &OutputConfig) -> String {
    let line = operation.describe();
    let kind = operation.kind();

    // Custom actions render themselves; only built-ins start with the kind name
    if !config.use_color || kind == OperationKind::Custom {
        return line;
    }

    match line.strip_prefix(kind.as_str()) {
        Some(rest) => format!(
            "{}{}",
            kind_style(kind).force_styling(true).apply_to(kind.as_str()),
            rest
        ),
        None => line,
    }
}

/// Render a batch one operation per line, like its `Display` form, with
/// the kind word colored when colors are enabled.
pub fn render_plan(batch: &OperationBatch, config: &OutputConfig) -> String {
    batch
        .iter()
        .map(|operation| render_operation(operation, config))
        .collect::<Vec<_>>()
        .join("\n")
}
