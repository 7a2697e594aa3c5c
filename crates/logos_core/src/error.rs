//! Error types for the core module.

use std::path::PathBuf;

use logos_dialect::DialectError;
use logos_runner::RunnerError;
use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while formatting files.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Dialect masking error in {path}: {source}")]
    DialectMasking {
        path: PathBuf,
        #[source]
        source: DialectError,
    },

    #[error("Formatting {path} failed: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: RunnerError,
    },

    #[error("File IO error on {path}: {source}")]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Runner error: {0}")]
    Runner(#[from] RunnerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error category reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DialectMasking,
    FormatterUnavailable,
    FormatterError,
    FileIo,
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DialectMasking => write!(f, "DialectMaskingError"),
            Self::FormatterUnavailable => write!(f, "FormatterUnavailable"),
            Self::FormatterError => write!(f, "FormatterError"),
            Self::FileIo => write!(f, "FileIOError"),
            Self::Config => write!(f, "ConfigError"),
        }
    }
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DialectMasking { .. } => ErrorKind::DialectMasking,
            Self::Format { source, .. } | Self::Runner(source) => runner_kind(source),
            Self::FileIo { .. } | Self::Io(_) => ErrorKind::FileIo,
        }
    }

    pub(crate) fn file_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }
}

fn runner_kind(error: &RunnerError) -> ErrorKind {
    match error {
        RunnerError::FormatterUnavailable(_) => ErrorKind::FormatterUnavailable,
        RunnerError::FormatterError { .. } | RunnerError::InvalidOutput(_) | RunnerError::Io(_) => {
            ErrorKind::FormatterError
        }
        RunnerError::InvalidConfig(_) | RunnerError::Toml(_) => ErrorKind::Config,
    }
}
