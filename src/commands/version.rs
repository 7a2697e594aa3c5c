//! Version command - logos-format and clang-format versions.

use anyhow::Result;

use logos_runner::{ClangFormat, FormatConfig, Formatter, CLANG_FORMAT_ENV};

use crate::ExitCodes;

pub fn execute() -> Result<u8> {
    println!("logos-format version {}", env!("CARGO_PKG_VERSION"));

    let mut config = FormatConfig::default();
    if let Some(path) = std::env::var_os(CLANG_FORMAT_ENV) {
        config = config.clang_format(path);
    }

    match ClangFormat::locate(&config).and_then(|clang| clang.version()) {
        Ok(version) => {
            println!("{}", version);
            Ok(ExitCodes::SUCCESS)
        }
        Err(e) => {
            eprintln!("⚠️  {}", e);
            Ok(ExitCodes::CHANGED_OR_FAILED)
        }
    }
}
