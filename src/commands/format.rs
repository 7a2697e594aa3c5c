//! Format command - clang-format compatible stdout / in-place formatting.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use logos_core::OutputMode;

use super::{kind_error, FormatterArgs};
use crate::ExitCodes;

#[derive(Args, Debug)]
pub struct FormatArgs {
    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Inplace edit files instead of printing to stdout
    #[arg(short = 'i')]
    pub in_place: bool,

    /// Files to format
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Extra arguments passed to clang-format unchanged
    #[arg(last = true, value_name = "CLANG_FORMAT_ARGS")]
    pub clang_format_args: Vec<String>,
}

pub fn execute(args: FormatArgs) -> Result<u8> {
    let mode = if args.in_place {
        info!("logos-format operating in in-place mode");
        OutputMode::InPlace
    } else {
        info!("logos-format will output formatted code to stdout");
        OutputMode::Stdout
    };

    let adapter = args.formatter.build_adapter(&args.clang_format_args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = adapter
        .process(&args.files, mode, &mut out)
        .map_err(kind_error)?;
    out.flush()?;

    if args.in_place {
        for path in report.reformatted() {
            info!("Reformatted {}", path.display());
        }
    }

    if report.has_failures() {
        for (_, e) in report.failures() {
            eprintln!("❌ {}: {}", e.kind(), e);
        }
        return Ok(ExitCodes::CHANGED_OR_FAILED);
    }

    Ok(ExitCodes::SUCCESS)
}
