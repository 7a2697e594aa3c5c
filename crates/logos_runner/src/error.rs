//! Error types for the runner module.

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while invoking the formatter.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("clang-format not available: {0}")]
    FormatterUnavailable(String),

    #[error("clang-format exited with code {code}:\n{diagnostics}")]
    FormatterError { code: i32, diagnostics: String },

    #[error("clang-format produced non UTF-8 output: {0}")]
    InvalidOutput(String),

    #[error("Invalid formatter configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
