//! Terminal styling, tables and JSON rendering for CLI output.

use std::process::ExitCode;

use burrows_config::ConfigWarning;
use burrows_model::{Deltas, Selection};
use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;

/// ANSI escape codes for terminal output.
mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Indents every line of `content` for display under a subheader.
pub fn indent_content(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("    {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints configuration warnings to stderr.
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("{} {w}", warning("warning:"));
    }
}

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a delta or ratio for display.
pub fn format_score(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{value:.4}")
    }
}

/// Creates a table with the shared preset.
fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header.to_vec());
    table
}

/// One row per candidate size; the chosen size is starred.
pub fn selection_table(selection: &Selection) -> Table {
    let mut table = new_table(&["Words", "Vocabulary", "Correct", "Accuracy", ""]);
    for tally in &selection.tallies {
        let chosen = if tally.considered_words == selection.chosen {
            "*"
        } else {
            ""
        };
        table.add_row(vec![
            Cell::new(tally.considered_words),
            Cell::new(tally.vocabulary),
            Cell::new(format!("{}/{}", tally.correct, tally.total)),
            Cell::new(format!("{:.1}%", tally.accuracy() * 100.0)),
            Cell::new(chosen),
        ]);
    }
    table
}

/// A summary line for one attributed text.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRow {
    /// Unknown text name.
    pub text: String,
    /// Attributed author, `None` when declined.
    pub author: Option<String>,
    /// Closest author regardless of the open-set rule.
    pub closest: String,
    /// Smallest delta.
    pub delta: f64,
    /// Second-smallest delta divided by the smallest.
    pub margin: Option<f64>,
}

impl AnswerRow {
    /// Summarizes the deltas of one text.
    pub fn new(deltas: &Deltas, author: Option<String>) -> Self {
        let sorted = deltas.sorted();
        let best = sorted.first();
        let margin = match (best, sorted.get(1)) {
            (Some(b), Some(r)) if b.delta > 0.0 => Some(r.delta / b.delta),
            (Some(_), Some(_)) => Some(f64::INFINITY),
            _ => None,
        };
        Self {
            text: deltas.text.clone(),
            author,
            closest: best.map(|b| b.author.clone()).unwrap_or_default(),
            delta: best.map_or(0.0, |b| b.delta),
            margin,
        }
    }
}

/// One row per unknown text.
pub fn answer_table(rows: &[AnswerRow]) -> Table {
    let mut table = new_table(&["Text", "Author", "Delta", "Margin"]);
    for row in rows {
        let author = row
            .author
            .clone()
            .unwrap_or_else(|| format!("none (closest: {})", row.closest));
        table.add_row(vec![
            Cell::new(&row.text),
            Cell::new(author),
            Cell::new(format_score(row.delta)),
            Cell::new(row.margin.map(format_score).unwrap_or_default()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use burrows_model::Tally;

    use super::*;

    fn deltas(values: &[(&str, f64)]) -> Deltas {
        let mut d = Deltas::new("u1.txt");
        for (author, delta) in values {
            d.push(*author, *delta);
        }
        d
    }

    #[test]
    fn styles_wrap_and_reset() {
        for styled in [header("h"), subheader("s"), dim("d"), warning("w")] {
            assert!(styled.starts_with("\x1b["));
            assert!(styled.ends_with(colors::RESET));
        }
    }

    #[test]
    fn indent_prefixes_lines() {
        assert_eq!(indent_content("a\nb"), "    a\n    b");
    }

    #[test]
    fn format_score_handles_infinity() {
        assert_eq!(format_score(1.23456), "1.2346");
        assert_eq!(format_score(f64::INFINITY), "inf");
    }

    #[test]
    fn answer_row_margin() {
        let row = AnswerRow::new(&deltas(&[("A", 3.0), ("B", 2.0)]), Some("B".into()));
        assert_eq!(row.closest, "B");
        assert_eq!(row.delta, 2.0);
        assert_eq!(row.margin, Some(1.5));

        let single = AnswerRow::new(&deltas(&[("A", 3.0)]), None);
        assert_eq!(single.margin, None);

        let zero = AnswerRow::new(&deltas(&[("A", 0.0), ("B", 1.0)]), None);
        assert_eq!(zero.margin, Some(f64::INFINITY));
    }

    #[test]
    fn answer_table_names_closest_when_declined() {
        let row = AnswerRow::new(&deltas(&[("A", 2.0), ("B", 2.01)]), None);
        let rendered = answer_table(&[row]).to_string();
        assert!(rendered.contains("none (closest: A)"));
        assert!(rendered.contains("u1.txt"));
    }

    #[test]
    fn selection_table_marks_choice() {
        let selection = Selection {
            chosen: 200,
            tallies: vec![
                Tally {
                    considered_words: 150,
                    vocabulary: 150,
                    correct: 6,
                    total: 10,
                },
                Tally {
                    considered_words: 200,
                    vocabulary: 180,
                    correct: 8,
                    total: 10,
                },
            ],
        };
        let rendered = selection_table(&selection).to_string();
        assert!(rendered.contains("8/10"));
        assert!(rendered.contains("80.0%"));
        assert!(rendered.contains('*'));
    }
}
