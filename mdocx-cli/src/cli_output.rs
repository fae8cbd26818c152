// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Formats errors and follow-up hints on stderr

use mdocx_sdk::BundleError;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

const STRICT_RETRY_HINT: &str = "Retry with --strict=false to relax integrity checks";

/// Follow-up hints for a failed command, from the first bundle error in the chain
pub fn error_hints(error: &anyhow::Error) -> Vec<&'static str> {
    let Some(bundle_error) = error.chain().find_map(|c| c.downcast_ref::<BundleError>()) else {
        return Vec::new();
    };

    let mut hints: Vec<&'static str> = bundle_error.help_text().into_iter().collect();
    if bundle_error.is_strictness_related() {
        hints.push(STRICT_RETRY_HINT);
    }
    hints
}

pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    /// Create new CLI output utility with TTY detection
    pub fn new() -> Self {
        Self {
            use_color: std::io::stderr().is_terminal(),
        }
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn format_error(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "error:".red().bold(), message)
        } else {
            format!("error: {}", message)
        }
    }

    pub fn format_hint(&self, message: &str) -> String {
        if self.use_color {
            format!("{} {}", "hint:".cyan(), message.dimmed())
        } else {
            format!("hint: {}", message)
        }
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", self.format_error(message));
    }

    pub fn hint(&self, message: &str) {
        eprintln!("{}", self.format_hint(message));
    }
}

impl Default for CliOutput {
    fn default() -> Self {
        Self::new()
    }
}
