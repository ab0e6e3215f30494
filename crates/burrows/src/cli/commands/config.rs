//! Implementation of `burrows config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::print_config_warnings};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    print!("{}", config.settings_to_toml());
    print_config_warnings(&config.validate());
    ExitCode::SUCCESS
}
