//! burrows: authorship attribution with Burrows' Delta.
//!
//! Reads a PAN/TIRA style corpus of candidate authors and unknown texts, picks
//! a vocabulary size by re-classifying the training texts, and attributes each
//! unknown text to the author with the smallest delta.

#![warn(missing_docs)]

mod cli;

use std::{io, process::ExitCode};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{CommandContext, args::parse_cli, commands};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level from `warn`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
