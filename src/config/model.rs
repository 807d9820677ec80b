use serde::Deserialize;

use crate::error::{DiffLintError, Result};
use crate::output::Color;

/// Top-level configuration, read from `.diff-lint.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub diff: DiffConfig,

    #[serde(default)]
    pub checkers: CheckersConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub colors: ColorsConfig,
}

/// Diff provider settings [diff].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiffConfig {
    /// Git reference compared against when `--ref` is not given.
    #[serde(default = "default_reference")]
    pub reference: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
        }
    }
}

/// The two checkers [checkers.style] and [checkers.correctness].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckersConfig {
    /// Style checker; its findings render as warnings.
    #[serde(default = "default_style_checker")]
    pub style: CheckerConfig,

    /// Correctness checker; its findings render as errors.
    #[serde(default = "default_correctness_checker")]
    pub correctness: CheckerConfig,
}

impl Default for CheckersConfig {
    fn default() -> Self {
        Self {
            style: default_style_checker(),
            correctness: default_correctness_checker(),
        }
    }
}

/// A checker command. The target file is appended as the last argument.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckerConfig {
    pub command: Vec<String>,
}

/// Annotation column layout [layout].
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Raw characters of diff text kept left of the message.
    #[serde(default = "default_text_width")]
    pub text_width: usize,

    /// Column the message block starts after, before escape/tab adjustment.
    #[serde(default = "default_column_width")]
    pub column_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_width: default_text_width(),
            column_width: default_column_width(),
        }
    }
}

/// Annotation colors [colors].
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColorsConfig {
    #[serde(default = "default_warning_color")]
    pub warning: Color,

    #[serde(default = "default_error_color")]
    pub error: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            warning: default_warning_color(),
            error: default_error_color(),
        }
    }
}

impl Config {
    /// Check semantic constraints serde cannot express.
    ///
    /// # Errors
    /// Returns a `Config` error naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.diff.reference.trim().is_empty() {
            return Err(DiffLintError::Config(
                "diff.reference cannot be empty".to_string(),
            ));
        }

        for (name, checker) in [
            ("style", &self.checkers.style),
            ("correctness", &self.checkers.correctness),
        ] {
            match checker.command.first() {
                None => {
                    return Err(DiffLintError::Config(format!(
                        "checkers.{name}.command cannot be empty"
                    )));
                }
                Some(program) if program.trim().is_empty() => {
                    return Err(DiffLintError::Config(format!(
                        "checkers.{name}.command has an empty program name"
                    )));
                }
                Some(_) => {}
            }
        }

        if self.layout.text_width == 0 {
            return Err(DiffLintError::Config(
                "layout.text_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_reference() -> String {
    "HEAD".to_string()
}

fn default_style_checker() -> CheckerConfig {
    CheckerConfig {
        command: vec!["pycodestyle".to_string()],
    }
}

fn default_correctness_checker() -> CheckerConfig {
    CheckerConfig {
        command: vec!["pyflakes".to_string()],
    }
}

const fn default_text_width() -> usize {
    70
}

const fn default_column_width() -> usize {
    80
}

const fn default_warning_color() -> Color {
    Color::Yellow
}

const fn default_error_color() -> Color {
    Color::Red
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
