//! Formatter trait and types.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::FormatConfig;
use crate::error::RunnerResult;

/// Result of one formatter invocation.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    /// Exit code reported by the formatter
    pub exit_code: i32,
    /// Formatted source (stdout)
    pub stdout: String,
    /// Diagnostics (stderr)
    pub stderr: String,
    /// Invocation start time
    pub started_at: DateTime<Utc>,
    /// Invocation end time
    pub finished_at: DateTime<Utc>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl InvocationResult {
    /// Check if the formatter succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Diagnostic text, if the formatter wrote any.
    pub fn diagnostics(&self) -> Option<&str> {
        let trimmed = self.stderr.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Formatter trait.
pub trait Formatter {
    /// Check if the formatter can be run.
    fn is_available(&self) -> bool;

    /// Get the formatter's version string.
    fn version(&self) -> RunnerResult<String>;

    /// Format `content` as if it were the file at `assume_filename`.
    ///
    /// A non-zero exit status is returned as `RunnerError::FormatterError`
    /// carrying the formatter's diagnostics unchanged.
    fn format(
        &self,
        content: &str,
        assume_filename: &Path,
        config: &FormatConfig,
    ) -> RunnerResult<InvocationResult>;
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn version(&self) -> RunnerResult<String> {
        (**self).version()
    }

    fn format(
        &self,
        content: &str,
        assume_filename: &Path,
        config: &FormatConfig,
    ) -> RunnerResult<InvocationResult> {
        (**self).format(content, assume_filename, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(exit_code: i32, stderr: &str) -> InvocationResult {
        let now = Utc::now();
        InvocationResult {
            exit_code,
            stdout: String::new(),
            stderr: stderr.to_string(),
            started_at: now,
            finished_at: now,
            duration_ms: 0,
        }
    }

    #[test]
    fn test_success_and_diagnostics() {
        let ok = result(0, "  \n");
        assert!(ok.success());
        assert_eq!(ok.diagnostics(), None);

        let warned = result(0, "warning: unknown key 'Foo'\n");
        assert_eq!(warned.diagnostics(), Some("warning: unknown key 'Foo'"));

        assert!(!result(1, "").success());
    }
}
