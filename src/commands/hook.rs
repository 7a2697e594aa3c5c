//! Hook command - pre-commit entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use logos_core::OutputMode;

use super::{kind_error, FormatterArgs};
use crate::ExitCodes;

#[derive(Args, Debug)]
pub struct HookArgs {
    #[command(flatten)]
    pub formatter: FormatterArgs,

    /// Files passed by the hook framework
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn execute(args: HookArgs) -> Result<u8> {
    info!("Running pre-commit hook on {} file(s)", args.files.len());

    let adapter = args.formatter.build_adapter(&[])?;
    let report = adapter
        .process(&args.files, OutputMode::InPlace, &mut std::io::sink())
        .map_err(kind_error)?;

    for path in report.reformatted() {
        println!("reformatted {}", path.display());
    }
    for (_, e) in report.failures() {
        eprintln!("❌ {}: {}", e.kind(), e);
    }

    let summary = report.summary();
    if report.is_clean() {
        println!("✅ {} file(s) left unchanged", summary.checked);
    } else {
        println!(
            "❌ {} file(s) reformatted, {} failed",
            summary.reformatted.len(),
            summary.failed.len()
        );
    }

    Ok(u8::try_from(summary.exit_code).unwrap_or(ExitCodes::CHANGED_OR_FAILED))
}
