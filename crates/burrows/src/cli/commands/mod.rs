//! Command implementations and dispatch.

pub mod attribute;
pub mod config;
pub mod deltas;
pub mod init;
mod shared;
pub mod train;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Attribute(cmd) => attribute::run(ctx, &cmd),
        Commands::Train(cmd) => train::run(ctx, &cmd),
        Commands::Deltas(cmd) => deltas::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
