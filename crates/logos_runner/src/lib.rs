//! # logos_runner
//!
//! clang-format invocation shim for logos-format.
//!
//! # Features
//!
//! - **Subprocess Runner**: pipes source through clang-format on stdin
//! - **Executable Discovery**: explicit path, `LOGOS_FORMAT_CLANG_FORMAT`, or `PATH`
//! - **Style Overrides**: column limit folded into the `--style` argument
//! - **Mock Formatter**: for testing without clang-format installed
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use logos_runner::{ClangFormat, FormatConfig, Formatter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FormatConfig::new().column_limit(100);
//!     let clang = ClangFormat::locate(&config)?;
//!
//!     let result = clang.format("int  x ;\n", Path::new("Tweak.m"), &config)?;
//!     print!("{}", result.stdout);
//!
//!     Ok(())
//! }
//! ```

pub mod clang;
pub mod config;
pub mod error;
pub mod mock;
pub mod runner;

pub use clang::{ClangFormat, CLANG_FORMAT_BIN, CLANG_FORMAT_ENV};
pub use config::{FormatConfig, FILE_STYLE};
pub use error::{RunnerError, RunnerResult};
pub use mock::{CapturedCall, MockFormatter, MockOutput, MockResponse, TransformFn};
pub use runner::{Formatter, InvocationResult};
