//! # logos_core
//!
//! Formatting pipeline and pre-commit hook adapter for logos-format.
//!
//! # Architecture
//!
//! - **SourceFile**: original and transformed content of one file
//! - **FormatPipeline**: mask, format, unmask for a single file
//! - **HookAdapter**: sequential run over a file list with pre-commit exit codes
//! - **TempStore**: kept intermediates for `--save-logos-temps`
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use logos_core::HookAdapter;
//! use logos_runner::{ClangFormat, FormatConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FormatConfig::default();
//!     let clang = ClangFormat::locate(&config)?;
//!     let adapter = HookAdapter::new(clang, config);
//!
//!     let exit_code = adapter.run(&[PathBuf::from("Tweak.xm")]);
//!     std::process::exit(exit_code);
//! }
//! ```

pub mod error;
pub mod hook;
pub mod pipeline;
pub mod source_file;
pub mod temps;

pub use error::{CoreError, CoreResult, ErrorKind};
pub use hook::{
    FileOutcome, FileReport, HookAdapter, HookReport, HookSummary, OutputMode, EXIT_CHANGED_OR_FAILED,
    EXIT_CLEAN,
};
pub use pipeline::FormatPipeline;
pub use source_file::SourceFile;
pub use temps::{TempStore, TEMP_DIR_PREFIX};
