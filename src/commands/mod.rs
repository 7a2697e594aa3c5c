//! CLI command definitions.
//!
//! `hook` is the pre-commit entry point, `format` mirrors clang-format's own
//! stdout / `-i` behaviour for Logos files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use logos_core::{CoreError, HookAdapter, TempStore};
use logos_runner::{ClangFormat, FormatConfig, CLANG_FORMAT_ENV};

pub mod format;
pub mod hook;
pub mod version;

/// Invalid command line or configuration input.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct ArgumentError(pub String);

/// Wrap a pipeline error so the message leads with its reported kind.
pub fn kind_error(e: CoreError) -> anyhow::Error {
    let kind = e.kind();
    anyhow::Error::new(e).context(kind.to_string())
}

/// logos-format - clang-format with Theos/Logos compatibility
#[derive(Parser)]
#[command(name = "logos-format")]
#[command(version, about = "clang-format with Theos/Logos compatibility")]
#[command(long_about = r#"
logos-format runs clang-format over Theos/Logos sources (.x, .xi, .xm, .xmi).
Logos directives such as %hook, %orig and %end are hidden from clang-format
and restored afterwards, so the rest of the file is formatted normally.

COMMANDS:
  hook     → Pre-commit hook: format files in place, fail if anything changed
  format   → Print formatted files to stdout, or rewrite them with -i
  version  → Show logos-format and clang-format versions

EXIT CODES:
  0 - Success, no changes
  1 - Files changed, or an error occurred
  2 - Invalid arguments
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose operation of logos-format
    #[arg(long = "verbose-logos", global = true)]
    pub verbose_logos: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format files in place for a pre-commit hook
    Hook(hook::HookArgs),

    /// Format files to stdout or in place
    Format(format::FormatArgs),

    /// Show logos-format and clang-format versions
    Version,
}

/// Options shared by every command that runs clang-format.
#[derive(Args, Debug, Default)]
pub struct FormatterArgs {
    /// clang-format style (file, LLVM, Google, ..., or inline YAML)
    #[arg(long)]
    pub style: Option<String>,

    /// Style used when --style=file finds no .clang-format
    #[arg(long)]
    pub fallback_style: Option<String>,

    /// Override the line length (ColumnLimit)
    #[arg(long, alias = "line-length", value_name = "COLUMNS")]
    pub column_limit: Option<u32>,

    /// Path to the clang-format executable
    #[arg(long = "clang-format", env = CLANG_FORMAT_ENV, value_name = "PATH")]
    pub clang_format: Option<PathBuf>,

    /// TOML file with formatter settings (flags take precedence)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Don't delete temporary logos-format files
    #[arg(long = "save-logos-temps")]
    pub save_logos_temps: bool,
}

impl FormatterArgs {
    /// Build the formatter configuration from the config file and flags.
    pub fn to_config(&self, extra_args: &[String]) -> Result<FormatConfig> {
        let mut config = match &self.config {
            Some(path) => FormatConfig::load(path).map_err(|e| {
                ArgumentError(format!("Invalid config file {}: {}", path.display(), e))
            })?,
            None => FormatConfig::default(),
        };

        if let Some(style) = &self.style {
            config = config.style(style.clone());
        }
        if let Some(fallback) = &self.fallback_style {
            config = config.fallback_style(fallback.clone());
        }
        if let Some(limit) = self.column_limit {
            config = config.column_limit(limit);
        }
        if let Some(path) = &self.clang_format {
            config = config.clang_format(path.clone());
        }
        config = config.extra_args(extra_args.to_vec());

        // Surface style conflicts before any file is touched
        config
            .style_arg()
            .map_err(|e| ArgumentError(e.to_string()))?;

        debug!("Formatter config: {:?}", config);
        Ok(config)
    }

    /// Locate clang-format and build the adapter.
    pub fn build_adapter(&self, extra_args: &[String]) -> Result<HookAdapter<ClangFormat>> {
        let config = self.to_config(extra_args)?;
        let clang = ClangFormat::locate(&config).map_err(|e| kind_error(e.into()))?;

        let mut adapter = HookAdapter::new(clang, config);
        if self.save_logos_temps {
            let store = TempStore::create_in(std::env::current_dir()?).map_err(kind_error)?;
            adapter = adapter.with_temps(store);
        }
        Ok(adapter)
    }
}
