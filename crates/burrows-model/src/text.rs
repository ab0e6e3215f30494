//! A single text: its tokens, counts and relative frequencies.

use std::collections::HashMap;

use tracing::debug;

use crate::{Counter, ModelError, Token, Tokenizer};

/// One tokenized and counted text.
///
/// Counts and relative frequencies are computed once, on construction. The
/// frequency denominator is the number of tokens in this text.
#[derive(Debug, Clone)]
pub struct TextModel {
    /// Identifier of the text.
    id: String,
    /// The raw source.
    raw: String,
    /// Tokens in the order they occur.
    tokens: Vec<Token>,
    /// Occurrences per token.
    counter: Counter,
    /// Relative frequency per token.
    frequencies: HashMap<Token, f64>,
}

impl TextModel {
    /// Tokenizes and counts `raw` with the given tokenizer.
    pub fn new(id: impl Into<String>, raw: impl Into<String>, tokenizer: &dyn Tokenizer) -> Self {
        let id = id.into();
        let raw = raw.into();
        debug!(text = %id, "tokenizing");
        let tokens = tokenizer.tokenize(&raw);
        Self::from_tokens(id, raw, tokens)
    }

    /// Builds a text from tokens produced elsewhere (e.g. by a tagger).
    pub fn from_tokens(id: impl Into<String>, raw: impl Into<String>, tokens: Vec<Token>) -> Self {
        let id = id.into();
        debug!(text = %id, tokens = tokens.len(), "counting");
        let counter = Counter::from_tokens(&tokens);
        let total = tokens.len() as f64;
        let frequencies = counter
            .iter()
            .map(|(token, count)| (token.clone(), count as f64 / total))
            .collect();

        Self {
            id,
            raw: raw.into(),
            tokens,
            counter,
            frequencies,
        }
    }

    /// Identifier of the text.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw source.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Tokens in order of occurrence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Occurrence counts.
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Total number of tokens.
    pub fn total(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the token occurs in this text.
    pub fn contains(&self, token: &Token) -> bool {
        self.frequencies.contains_key(token)
    }

    /// Relative frequency of `token`; 0 when absent.
    pub fn frequency(&self, token: &Token) -> f64 {
        self.frequencies.get(token).copied().unwrap_or(0.0)
    }

    /// Relative frequencies of all distinct tokens.
    pub fn frequencies(&self) -> &HashMap<Token, f64> {
        &self.frequencies
    }

    /// Whether the text's tokens are tagged; `None` for an empty text.
    ///
    /// Fails when some tokens carry a tag and others do not.
    pub fn tagging(&self) -> Result<Option<bool>, ModelError> {
        let Some(first) = self.tokens.first() else {
            return Ok(None);
        };
        let tagged = first.is_tagged();
        if self.tokens.iter().all(|t| t.is_tagged() == tagged) {
            Ok(Some(tagged))
        } else {
            Err(ModelError::MixedTagging {
                text: self.id.clone(),
            })
        }
    }
}
