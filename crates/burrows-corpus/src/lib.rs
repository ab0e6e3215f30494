//! Corpus loading and answer output for burrows.
//!
//! A [`CorpusLoader`] produces the raw candidates, training texts and unknown
//! texts of one attribution problem; [`PanCorpus`] reads the PAN/TIRA layout
//! driven by `meta-file.json`. [`build_corpus`] tokenizes the result into model
//! types, and a [`ResultSink`] stores the answers.

#![warn(missing_docs)]

mod build;
mod error;
mod loader;
mod pan;
mod sink;

pub use build::{PreparedCorpus, build_corpus};
pub use error::CorpusError;
pub use loader::{Candidate, CorpusLoader, LoadedCorpus, RawText};
pub use pan::PanCorpus;
pub use sink::{Answer, JsonAnswerSink, ResultSink, answers_to_json};
