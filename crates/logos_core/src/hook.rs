//! Pre-commit hook adapter.
//!
//! Runs the pipeline over the files handed over by the hook framework and
//! reports the conventional exit code: 0 when nothing changed, 1 when a file
//! was rewritten or anything failed.

use std::io::Write;
use std::path::{Path, PathBuf};

use logos_runner::{FormatConfig, Formatter, RunnerError};
use tracing::{error, info};

use crate::error::{CoreError, CoreResult, ErrorKind};
use crate::pipeline::FormatPipeline;
use crate::source_file::SourceFile;
use crate::temps::TempStore;

/// Exit code when no file needed changes.
pub const EXIT_CLEAN: i32 = 0;
/// Exit code when a file was changed or an error occurred.
pub const EXIT_CHANGED_OR_FAILED: i32 = 1;

/// Where formatted content goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Overwrite files whose content changed.
    InPlace,
    /// Write every formatted file to the given sink, leave files untouched.
    Stdout,
}

/// Outcome for a single file.
#[derive(Debug)]
pub enum FileOutcome {
    Unchanged,
    Reformatted,
    Failed(CoreError),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file outcomes of one run, in input order.
#[derive(Debug, Default)]
pub struct HookReport {
    pub files: Vec<FileReport>,
}

/// Counts and paths of a [`HookReport`], for the final status line.
#[derive(Debug, Clone)]
pub struct HookSummary {
    pub checked: usize,
    pub reformatted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, ErrorKind)>,
    pub exit_code: i32,
}

impl HookReport {
    pub fn reformatted(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Reformatted))
            .map(|f| f.path.as_path())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &CoreError)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed(e) => Some((f.path.as_path(), e)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn is_clean(&self) -> bool {
        self.files
            .iter()
            .all(|f| matches!(f.outcome, FileOutcome::Unchanged))
    }

    /// Pre-commit exit code.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_CLEAN
        } else {
            EXIT_CHANGED_OR_FAILED
        }
    }

    pub fn summary(&self) -> HookSummary {
        HookSummary {
            checked: self.files.len(),
            reformatted: self.reformatted().map(Path::to_path_buf).collect(),
            failed: self
                .failures()
                .map(|(path, e)| (path.to_path_buf(), e.kind()))
                .collect(),
            exit_code: self.exit_code(),
        }
    }
}

/// Entry point used by the pre-commit hook and the format command.
pub struct HookAdapter<F: Formatter> {
    pipeline: FormatPipeline<F>,
}

impl<F: Formatter> HookAdapter<F> {
    pub fn new(formatter: F, config: FormatConfig) -> Self {
        Self {
            pipeline: FormatPipeline::new(formatter, config),
        }
    }

    pub fn with_temps(mut self, temps: TempStore) -> Self {
        self.pipeline = self.pipeline.with_temps(temps);
        self
    }

    pub fn pipeline(&self) -> &FormatPipeline<F> {
        &self.pipeline
    }

    /// Format `paths` in place and return the pre-commit exit code.
    pub fn run(&self, paths: &[PathBuf]) -> i32 {
        match self.process(paths, OutputMode::InPlace, &mut std::io::sink()) {
            Ok(report) => {
                for (path, e) in report.failures() {
                    error!("{}: {:?}: {}", e.kind(), path, e);
                }
                report.exit_code()
            }
            Err(e) => {
                error!("{}: {}", e.kind(), e);
                EXIT_CHANGED_OR_FAILED
            }
        }
    }

    /// Format `paths` one after another.
    ///
    /// Fails up front, touching nothing, when the formatter is unavailable.
    /// Per-file failures are recorded in the report and do not stop the run.
    pub fn process<W: Write>(
        &self,
        paths: &[PathBuf],
        mode: OutputMode,
        out: &mut W,
    ) -> CoreResult<HookReport> {
        if !self.pipeline.formatter().is_available() {
            return Err(CoreError::Runner(RunnerError::FormatterUnavailable(
                "formatter did not respond to --version".to_string(),
            )));
        }

        let mut report = HookReport::default();
        for (index, path) in paths.iter().enumerate() {
            let outcome = match self.process_file(index, path, mode, out) {
                Ok(true) => FileOutcome::Reformatted,
                Ok(false) => FileOutcome::Unchanged,
                Err(e) => FileOutcome::Failed(e),
            };
            report.files.push(FileReport {
                path: path.clone(),
                outcome,
            });
        }

        info!(
            "Checked {} file(s), {} reformatted",
            report.files.len(),
            report.reformatted().count()
        );
        Ok(report)
    }

    /// Returns whether the formatted content differs from the file.
    fn process_file<W: Write>(
        &self,
        index: usize,
        path: &Path,
        mode: OutputMode,
        out: &mut W,
    ) -> CoreResult<bool> {
        let mut file = SourceFile::read(path)?;
        self.pipeline.format_file(index, &mut file)?;

        match mode {
            OutputMode::InPlace => file.write_back(),
            OutputMode::Stdout => {
                out.write_all(file.transformed().as_bytes())?;
                out.flush()?;
                Ok(file.is_changed())
            }
        }
    }
}
