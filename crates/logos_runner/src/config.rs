//! Formatter configuration types.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{RunnerError, RunnerResult};

/// Style that makes clang-format look up the nearest `.clang-format`.
pub const FILE_STYLE: &str = "file";

/// Configuration passed through to clang-format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FormatConfig {
    /// Value for `--style` (`file`, a preset name, `file:<path>` or inline YAML)
    pub style: String,
    /// Value for `--fallback-style`
    pub fallback_style: Option<String>,
    /// Line length override
    pub column_limit: Option<u32>,
    /// Explicit clang-format executable
    pub clang_format: Option<PathBuf>,
    /// Extra arguments appended verbatim
    pub extra_args: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: FILE_STYLE.to_string(),
            fallback_style: None,
            column_limit: None,
            clang_format: None,
            extra_args: Vec::new(),
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> RunnerResult<Self> {
        let path = path.as_ref();
        debug!("Reading formatter config from {:?}", path);

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> RunnerResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn fallback_style(mut self, style: impl Into<String>) -> Self {
        self.fallback_style = Some(style.into());
        self
    }

    pub fn column_limit(mut self, limit: u32) -> Self {
        self.column_limit = Some(limit);
        self
    }

    pub fn clang_format(mut self, path: impl Into<PathBuf>) -> Self {
        self.clang_format = Some(path.into());
        self
    }

    pub fn extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    pub fn extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args.extend(args);
        self
    }

    /// Value for `--style`, folding in the column limit override.
    pub fn style_arg(&self) -> RunnerResult<String> {
        let Some(limit) = self.column_limit else {
            return Ok(self.style.clone());
        };

        let style = self.style.trim();
        if style == FILE_STYLE {
            return Ok(format!(
                "{{BasedOnStyle: InheritParentConfig, ColumnLimit: {}}}",
                limit
            ));
        }
        if style.starts_with("file:") {
            return Err(RunnerError::InvalidConfig(format!(
                "column limit cannot be combined with style '{}'",
                style
            )));
        }
        if let Some(inline) = style.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            let inline = inline.trim();
            if inline.is_empty() {
                return Ok(format!("{{ColumnLimit: {}}}", limit));
            }
            return Ok(format!("{{{}, ColumnLimit: {}}}", inline, limit));
        }
        Ok(format!("{{BasedOnStyle: {}, ColumnLimit: {}}}", style, limit))
    }
}
