//! Implementation of `burrows attribute`.

use std::{path::Path, process::ExitCode};

use burrows_corpus::{Answer, JsonAnswerSink, ResultSink};
use burrows_model::Selection;
use serde::Serialize;
use tracing::info;

use super::shared::{classifier_for, prepare, report, train};
use crate::cli::{
    args::AttributeCommand,
    context::CommandContext,
    output::{AnswerRow, answer_table, dim, header, print_json, selection_table},
};

/// JSON output of one attribution run.
#[derive(Serialize)]
struct AttributeSummary<'a> {
    /// Size selection and its tallies.
    selection: &'a Selection,
    /// Open-set threshold, if one was applied.
    threshold: Option<f64>,
    /// One row per unknown text.
    answers: &'a [AnswerRow],
    /// Answer file written.
    output: &'a Path,
}

/// Trains on the candidates, attributes every unknown text and writes answers.
pub fn run(ctx: &CommandContext, cmd: &AttributeCommand) -> ExitCode {
    let (settings, mut prepared) = match prepare(ctx, &cmd.corpus, &cmd.model) {
        Ok(v) => v,
        Err(code) => return code,
    };
    let selection = match train(&mut prepared, &settings) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let classifier = match classifier_for(&mut prepared, &settings, selection.chosen) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let threshold = cmd
        .threshold
        .or_else(|| ctx.config.open_set.thresholds.first().copied());

    let mut answers = Vec::with_capacity(prepared.unknowns.len());
    let mut rows = Vec::with_capacity(prepared.unknowns.len());
    for text in &prepared.unknowns {
        let attribution = match classifier.classify(text) {
            Ok(a) => a,
            Err(e) => return report(&e),
        };
        let author = match threshold {
            Some(t) => attribution.decide(t).author().map(str::to_string),
            None => Some(attribution.author.clone()),
        };
        info!(text = %text.id(), author = ?author, "attributed");
        rows.push(AnswerRow::new(&attribution.deltas, author.clone()));
        answers.push(Answer::new(text.id(), author));
    }

    let output = cmd.output.as_deref().map_or_else(
        || ctx.resolve(&cmd.corpus).join(&ctx.config.corpus.output_file),
        |path| ctx.resolve(path),
    );
    let mut sink = JsonAnswerSink::new(output);
    if let Err(e) = sink.write(&answers) {
        return report(&e);
    }

    if cmd.json {
        return print_json(&AttributeSummary {
            selection: &selection,
            threshold,
            answers: &rows,
            output: sink.path(),
        });
    }

    println!("{}", header("Vocabulary size"));
    println!("{}", selection_table(&selection));
    println!();
    println!("{}", header("Answers"));
    println!("{}", answer_table(&rows));
    if let Some(t) = threshold {
        println!("{}", dim(&format!("open-set threshold: {t}")));
    }
    println!();
    println!("Wrote {}", sink.path().display());
    ExitCode::SUCCESS
}
