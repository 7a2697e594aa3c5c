//! logos-format CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success, nothing to change
//! - 1: Files were changed, or an error occurred
//! - 2: Invalid arguments

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// Pre-commit compatible exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const CHANGED_OR_FAILED: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries formatted source in format mode
    let default_filter = if cli.verbose_logos {
        "logos=info,warn"
    } else {
        "logos=warn"
    };
    let log_result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    if cli.verbose_logos {
        tracing::info!("logos-format: verbose-logos mode enabled");
    }

    let result = match cli.command {
        Commands::Hook(args) => commands::hook::execute(args),
        Commands::Format(args) => commands::format::execute(args),
        Commands::Version => commands::version::execute(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if e.downcast_ref::<commands::ArgumentError>().is_some() {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::CHANGED_OR_FAILED
    }
}
