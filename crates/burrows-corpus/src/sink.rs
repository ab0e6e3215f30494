//! Answer output.

use std::{
    fs,
    path::{Path, PathBuf},
};

use burrows_model::Decision;
use serde::Serialize;
use tracing::info;

use crate::CorpusError;

/// The answer for one unknown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Name of the unknown text.
    pub unknown_text: String,
    /// Attributed author; `None` when the classifier declined to decide.
    pub author: Option<String>,
    /// Confidence score; always 1.
    pub score: u32,
}

impl Answer {
    /// An answer naming `author`.
    pub fn new(unknown_text: impl Into<String>, author: Option<String>) -> Self {
        Self {
            unknown_text: unknown_text.into(),
            author,
            score: 1,
        }
    }

    /// An answer from an open-set decision.
    pub fn from_decision(unknown_text: impl Into<String>, decision: &Decision) -> Self {
        Self::new(unknown_text, decision.author().map(str::to_string))
    }
}

/// Destination for the answers of one run.
pub trait ResultSink {
    /// Stores answers in order.
    fn write(&mut self, answers: &[Answer]) -> Result<(), CorpusError>;
}

/// Top-level shape of the answer file.
#[derive(Serialize)]
struct AnswerFile<'a> {
    /// Answers in unknown-text order.
    answers: &'a [Answer],
}

/// Writes `{"answers": [...]}` as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonAnswerSink {
    /// Output file.
    path: PathBuf,
}

impl JsonAnswerSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The output file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders answers in the answer file format.
pub fn answers_to_json(answers: &[Answer]) -> Result<String, CorpusError> {
    Ok(serde_json::to_string_pretty(&AnswerFile { answers })?)
}

impl ResultSink for JsonAnswerSink {
    fn write(&mut self, answers: &[Answer]) -> Result<(), CorpusError> {
        let json = answers_to_json(answers)?;
        fs::write(&self.path, json).map_err(|source| CorpusError::WriteFile {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), answers = answers.len(), "wrote answers");
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn answer_file_shape() {
        let answers = [
            Answer::new("unknown00001.txt", Some("candidate00002".into())),
            Answer::from_decision("unknown00002.txt", &Decision::NoDecision),
        ];
        let value: Value = serde_json::from_str(&answers_to_json(&answers).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "answers": [
                    {"unknown_text": "unknown00001.txt", "author": "candidate00002", "score": 1},
                    {"unknown_text": "unknown00002.txt", "author": null, "score": 1}
                ]
            })
        );
    }

    #[test]
    fn pretty_printed_with_two_spaces() {
        let json = answers_to_json(&[Answer::new("u", Some("a".into()))]).unwrap();
        assert!(json.starts_with("{\n  \"answers\": [\n    {\n"));
    }

    #[test]
    fn sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonAnswerSink::new(dir.path().join("out.json"));
        sink.write(&[Answer::from_decision(
            "u",
            &Decision::Author("A".into()),
        )])
        .unwrap();

        let written = fs::read_to_string(sink.path()).unwrap();
        assert!(written.contains("\"author\": \"A\""));
    }

    #[test]
    fn sink_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = JsonAnswerSink::new(dir.path().join("missing/out.json"));
        assert!(matches!(
            sink.write(&[]),
            Err(CorpusError::WriteFile { .. })
        ));
    }
}
