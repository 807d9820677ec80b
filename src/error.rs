use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffLintError {
    #[error("Checker output line {line:?} does not match the ':<line>:' pattern")]
    MalformedFinding { line: String },

    #[error("Malformed hunk header at diff line {index}: {line:?}")]
    MalformedHunkHeader { index: usize, line: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run {checker} checker")]
    CheckerSpawn {
        checker: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Git error: {0}")]
    Git(String),
}

impl DiffLintError {
    /// Short category name used in diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedFinding { .. } | Self::CheckerSpawn { .. } => "Checker",
            Self::MalformedHunkHeader { .. } => "Diff",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::Git(_) => "Git",
        }
    }

    /// True when an external tool produced output this crate cannot align.
    #[must_use]
    pub const fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedFinding { .. } | Self::MalformedHunkHeader { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DiffLintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
