//! Source files processed by the pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use logos_dialect::SourceKind;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};

/// A file read for formatting.
///
/// Holds the original content and the transformed buffer produced by the
/// pipeline. Nothing is written to disk unless the two differ.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    kind: SourceKind,
    original: String,
    transformed: String,
}

impl SourceFile {
    /// Read a file from disk.
    pub fn read(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        debug!("Reading {:?}", path);

        let original = fs::read_to_string(path).map_err(|e| CoreError::file_io(path, e))?;
        Ok(Self::from_content(path, original))
    }

    /// Build a source file from content already in memory.
    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let original = content.into();
        Self {
            kind: SourceKind::from_path(&path),
            transformed: original.clone(),
            original,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn transformed(&self) -> &str {
        &self.transformed
    }

    pub fn set_transformed(&mut self, content: String) {
        self.transformed = content;
    }

    /// Path the formatter should assume for language and style lookup.
    pub fn assumed_path(&self) -> PathBuf {
        self.kind.assumed_path(&self.path)
    }

    pub fn is_changed(&self) -> bool {
        self.original != self.transformed
    }

    /// Write the transformed content back if it differs from the original.
    ///
    /// Returns whether the file was written.
    pub fn write_back(&self) -> CoreResult<bool> {
        if !self.is_changed() {
            return Ok(false);
        }

        info!("Overwriting {:?} with formatted content", self.path);
        fs::write(&self.path, &self.transformed).map_err(|e| CoreError::file_io(&self.path, e))?;
        Ok(true)
    }
}
