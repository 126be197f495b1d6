//! Errors surfaced by the facade

use component_linter::ConfigError;
use thiserror::Error;

/// Failures that stop a file from being linted.
///
/// Rule violations are not errors; they come back as diagnostics.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Failed to parse {filename}: {}", .messages.join("; "))]
    Parse {
        filename: String,
        messages: Vec<String>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
