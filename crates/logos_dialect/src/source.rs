//! File kind detection for Logos sources.

use std::path::{Path, PathBuf};

/// Extensions of files written in the Logos dialect.
pub const LOGOS_EXTENSIONS: [&str; 4] = ["x", "xi", "xm", "xmi"];

/// Kind of source file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Logos on top of Objective-C (`.x`, `.xi`).
    LogosObjc,
    /// Logos on top of Objective-C++ (`.xm`, `.xmi`).
    LogosObjcxx,
    /// Anything else; formatted without masking.
    Plain,
}

impl SourceKind {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some("x") | Some("xi") => Self::LogosObjc,
            Some("xm") | Some("xmi") => Self::LogosObjcxx,
            _ => Self::Plain,
        }
    }

    pub fn is_logos(&self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Host-language extension the formatter should assume.
    pub fn host_extension(&self) -> Option<&'static str> {
        match self {
            Self::LogosObjc => Some("m"),
            Self::LogosObjcxx => Some("mm"),
            Self::Plain => None,
        }
    }

    /// Path to report to the formatter so it picks the right language and
    /// still resolves `.clang-format` next to the real file.
    pub fn assumed_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match self.host_extension() {
            Some(ext) => path.with_extension(ext),
            None => path.to_path_buf(),
        }
    }
}
