//! clang-format subprocess runner.
//!
//! Source is piped on stdin and `--assume-filename` names the real file, so
//! clang-format picks the language from the extension and resolves the
//! project's `.clang-format` relative to the file being formatted.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use chrono::Utc;
use tracing::{debug, error, info};

use crate::config::FormatConfig;
use crate::error::{RunnerError, RunnerResult};
use crate::runner::{Formatter, InvocationResult};

/// Executable name looked up on `PATH`.
pub const CLANG_FORMAT_BIN: &str = "clang-format";

/// Environment variable naming an explicit clang-format executable.
pub const CLANG_FORMAT_ENV: &str = "LOGOS_FORMAT_CLANG_FORMAT";

/// clang-format driven as a subprocess.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    executable: PathBuf,
}

impl ClangFormat {
    /// Locate clang-format from the configuration or `PATH`.
    pub fn locate(config: &FormatConfig) -> RunnerResult<Self> {
        let executable = match &config.clang_format {
            Some(path) => which::which(path).map_err(|e| {
                RunnerError::FormatterUnavailable(format!("{}: {}", path.display(), e))
            })?,
            None => which::which(CLANG_FORMAT_BIN).map_err(|e| {
                RunnerError::FormatterUnavailable(format!(
                    "{} not found on PATH ({}); install it or set {}",
                    CLANG_FORMAT_BIN, e, CLANG_FORMAT_ENV
                ))
            })?,
        };

        info!("Using clang-format: {}", executable.display());
        Ok(Self { executable })
    }

    /// Use a specific executable without any lookup.
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Build the command line arguments for formatting one file.
    fn build_args(&self, assume_filename: &Path, config: &FormatConfig) -> RunnerResult<Vec<String>> {
        let mut args = vec![format!("--style={}", config.style_arg()?)];

        if let Some(fallback) = &config.fallback_style {
            args.push(format!("--fallback-style={}", fallback));
        }

        args.push(format!("--assume-filename={}", assume_filename.display()));
        args.extend(config.extra_args.iter().cloned());

        Ok(args)
    }

    /// Format command for logging.
    fn format_command(&self, args: &[String]) -> String {
        let mut cmd = self.executable.display().to_string();
        for arg in args {
            if arg.contains(' ') {
                cmd.push_str(&format!(" '{}'", arg));
            } else {
                cmd.push_str(&format!(" {}", arg));
            }
        }
        cmd
    }

    fn spawn_error(&self, e: std::io::Error) -> RunnerError {
        match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                RunnerError::FormatterUnavailable(format!("{}: {}", self.executable.display(), e))
            }
            _ => RunnerError::Io(e),
        }
    }
}

/// Kill and reap a formatter that can no longer be fed.
fn abort(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!("Failed to kill clang-format (pid {}): {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        debug!("Failed to reap clang-format (pid {}): {}", child.id(), e);
    }
}

impl Formatter for ClangFormat {
    fn is_available(&self) -> bool {
        Command::new(&self.executable)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn version(&self) -> RunnerResult<String> {
        let output = Command::new(&self.executable)
            .arg("--version")
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(RunnerError::FormatterError {
                code: output.status.code().unwrap_or(-1),
                diagnostics: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
    }

    fn format(
        &self,
        content: &str,
        assume_filename: &Path,
        config: &FormatConfig,
    ) -> RunnerResult<InvocationResult> {
        let args = self.build_args(assume_filename, config)?;
        debug!("Executing: {}", self.format_command(&args));

        let started_at = Utc::now();
        let mut child = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // clang-format reads all of stdin before writing, so this cannot
        // block on a full stdout pipe.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(content.as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    abort(&mut child);
                    return Err(RunnerError::Io(e));
                }
                debug!("clang-format closed stdin early");
            }
        }

        let output = child.wait_with_output()?;
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            error!(
                "clang-format failed with exit code {} after {}ms",
                exit_code, duration_ms
            );
            return Err(RunnerError::FormatterError {
                code: exit_code,
                diagnostics: stderr,
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| RunnerError::InvalidOutput(e.to_string()))?;
        debug!("clang-format completed in {}ms", duration_ms);

        Ok(InvocationResult {
            exit_code,
            stdout,
            stderr,
            started_at,
            finished_at,
            duration_ms,
        })
    }
}
