//! Implementation of `burrows deltas`.

use std::process::ExitCode;

use burrows_model::{Classifier, Deltas, open_set_decision};

use super::shared::{classifier_for, prepare, report};
use crate::cli::{
    args::DeltasCommand,
    context::CommandContext,
    output::{format_score, subheader},
};

/// Prints every author's delta for every unknown text and candidate size.
pub fn run(ctx: &CommandContext, cmd: &DeltasCommand) -> ExitCode {
    let (settings, mut prepared) = match prepare(ctx, &cmd.corpus, &cmd.model) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let mut classifiers: Vec<(usize, Classifier)> = Vec::with_capacity(settings.sizes.len());
    for &size in &settings.sizes {
        match classifier_for(&mut prepared, &settings, size) {
            Ok(c) => classifiers.push((size, c)),
            Err(code) => return code,
        }
    }

    let thresholds = if cmd.thresholds.is_empty() {
        &ctx.config.open_set.thresholds
    } else {
        &cmd.thresholds
    };

    if !cmd.csv {
        println!("real_words: {}", settings.real_words);
    }
    for text in &prepared.unknowns {
        let mut per_size = Vec::with_capacity(classifiers.len());
        for (size, classifier) in &classifiers {
            match classifier.deltas(text) {
                Ok(d) => per_size.push((*size, d)),
                Err(e) => return report(&e),
            }
        }
        if cmd.csv {
            print!("{}", csv_block(&per_size));
        } else {
            println!();
            println!("{}", subheader(&format!("Deltas for {}", text.id())));
            for (size, deltas) in &per_size {
                print!("{}", report_block(*size, deltas, cmd.sort, thresholds));
            }
        }
    }
    ExitCode::SUCCESS
}

/// One size's deltas and open-set decisions for one text.
fn report_block(size: usize, deltas: &Deltas, sort: bool, thresholds: &[f64]) -> String {
    let mut out = format!("\nconsidered_words: {size}\n");
    let entries: Vec<_> = if sort {
        deltas.sorted()
    } else {
        deltas.entries.iter().collect()
    };
    for entry in entries {
        out.push_str(&format!("{}: {}\n", entry.author, format_score(entry.delta)));
    }
    for &t in thresholds {
        let decision = open_set_decision(deltas, t);
        out.push_str(&format!(
            "Threshold {t}: {}\n",
            decision.author().unwrap_or("None")
        ));
    }
    out
}

/// A CSV table for one text: a header row of sizes, then a row per author.
fn csv_block(per_size: &[(usize, Deltas)]) -> String {
    let mut out = String::from("author");
    for (size, _) in per_size {
        out.push_str(&format!(",{size}"));
    }
    out.push('\n');

    let Some((_, first)) = per_size.first() else {
        return out;
    };
    for entry in &first.entries {
        out.push_str(&entry.author);
        for (_, deltas) in per_size {
            let value = deltas.get(&entry.author).unwrap_or(f64::NAN);
            out.push_str(&format!(",{value}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deltas(values: &[(&str, f64)]) -> Deltas {
        let mut d = Deltas::new("unknown00001.txt");
        for (author, delta) in values {
            d.push(*author, *delta);
        }
        d
    }

    #[test]
    fn report_lists_authors_in_corpus_order() {
        let out = report_block(150, &deltas(&[("B", 2.0), ("A", 1.0)]), false, &[]);
        assert_eq!(out, "\nconsidered_words: 150\nB: 2.0000\nA: 1.0000\n");
    }

    #[test]
    fn report_sorts_ascending() {
        let out = report_block(150, &deltas(&[("B", 2.0), ("A", 1.0)]), true, &[]);
        assert!(out.find("A:").unwrap() < out.find("B:").unwrap());
    }

    #[test]
    fn report_decisions_per_threshold() {
        let out = report_block(
            0,
            &deltas(&[("A", 1.0), ("B", 1.1)]),
            false,
            &[1.05, 1.2],
        );
        assert!(out.contains("Threshold 1.05: A\n"));
        assert!(out.contains("Threshold 1.2: None\n"));
    }

    #[test]
    fn csv_has_a_column_per_size() {
        let out = csv_block(&[
            (100, deltas(&[("A", 1.5), ("B", 2.0)])),
            (200, deltas(&[("A", 1.25), ("B", 3.0)])),
        ]);
        assert_eq!(out, "author,100,200\nA,1.5,1.25\nB,2,3\n");
    }
}
