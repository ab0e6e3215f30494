//! Implementation of `burrows train`.

use std::process::ExitCode;

use super::shared::{prepare, train};
use crate::cli::{
    args::TrainCommand,
    context::CommandContext,
    output::{dim, print_json, selection_table},
};

/// Re-classifies the training texts at every candidate size.
pub fn run(ctx: &CommandContext, cmd: &TrainCommand) -> ExitCode {
    let (settings, mut prepared) = match prepare(ctx, &cmd.corpus, &cmd.model) {
        Ok(v) => v,
        Err(code) => return code,
    };
    let selection = match train(&mut prepared, &settings) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if cmd.json {
        return print_json(&selection);
    }

    println!(
        "{}",
        dim(&format!(
            "tokenizer: {}, real words only: {}",
            settings.tokenizer, settings.real_words
        ))
    );
    println!("{}", selection_table(&selection));
    println!("chosen: {} words", selection.chosen);
    ExitCode::SUCCESS
}
