//! Authorship attribution with Burrows' Delta.
//!
//! Texts are tokenized and counted, authors aggregate their texts, and a corpus
//! of authors yields a ranked vocabulary. Relative frequencies of vocabulary
//! words are standardized against the corpus, and an unknown text is attributed
//! to the author whose standardized profile is closest by summed absolute
//! difference:
//!
//! 1. **Counting**: [`CorpusModel::calc_counter`] aggregates word counts bottom-up
//! 2. **Vocabulary**: [`CorpusModel::reconfigure`] ranks words and returns a
//!    [`CorpusSnapshot`] for one [`VocabularyPolicy`]
//! 3. **Scoring**: [`Classifier`] computes [`Deltas`] and picks the closest
//!    author, with an optional open-set refusal via [`open_set_decision`]
//!
//! [`ParameterSelector`] picks the vocabulary size by re-classifying the
//! training texts.

#![warn(missing_docs)]

mod author;
mod classify;
mod corpus;
mod counter;
mod delta;
mod error;
mod select;
mod standardize;
mod stats;
mod text;
mod token;

pub use author::{AuthorModel, CountState};
pub use classify::{Attribution, Classifier, Decision, open_set_decision};
pub use corpus::{CorpusModel, CorpusSnapshot, VocabularyPolicy, WordStats};
pub use counter::Counter;
pub use delta::{AuthorDelta, Deltas, delta};
pub use error::ModelError;
pub use select::{ParameterSelector, Selection, Tally, pick_best};
pub use standardize::{ZScores, text_zscores};
pub use stats::Moments;
pub use text::TextModel;
pub use token::{AlphabeticTokenizer, Token, Tokenizer, TokenizerKind, WordTokenizer};
