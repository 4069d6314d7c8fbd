//! Pinwarden CLI - checks that CI action references are pinned
//!
//! Usage: pinwarden [OPTIONS] [COMMAND]
//!
//! Commands:
//!   check   Check workflow and action files for unpinned references (default)

use std::process::ExitCode;

use clap::Parser;
use pinwarden::presentation::Cli;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    commands::dispatch(cli)
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
