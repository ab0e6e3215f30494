//! Z-score standardization against a corpus snapshot.

use std::collections::HashMap;

use crate::{CorpusSnapshot, ModelError, TextModel, Token, VocabularyPolicy};

/// Z-scores of one text or author, tied to the snapshot they were computed
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct ZScores {
    /// Policy of the snapshot these scores belong to.
    policy: VocabularyPolicy,
    /// Count generation of the snapshot these scores belong to.
    generation: u64,
    /// Score per token.
    scores: HashMap<Token, f64>,
}

impl ZScores {
    /// Creates an empty score set for `snapshot`.
    pub fn new(snapshot: &CorpusSnapshot) -> Self {
        Self {
            policy: snapshot.policy(),
            generation: snapshot.generation(),
            scores: HashMap::new(),
        }
    }

    /// Sets the score of a token.
    pub fn insert(&mut self, token: Token, score: f64) {
        self.scores.insert(token, score);
    }

    /// Policy of the snapshot these scores belong to.
    pub fn policy(&self) -> VocabularyPolicy {
        self.policy
    }

    /// Score of a token, if it has one.
    pub fn get(&self, token: &Token) -> Option<f64> {
        self.scores.get(token).copied()
    }

    /// Number of scored tokens.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if no token is scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Fails unless these scores were computed against `snapshot`'s policy
    /// and counts.
    pub fn ensure_current(&self, snapshot: &CorpusSnapshot) -> Result<(), ModelError> {
        if self.policy == snapshot.policy() && self.generation == snapshot.generation() {
            Ok(())
        } else {
            Err(ModelError::StaleScores {
                expected: format!("{}, generation {}", snapshot.policy(), snapshot.generation()),
                found: format!("{}, generation {}", self.policy, self.generation),
            })
        }
    }
}

/// Standardizes a text's relative frequencies against a snapshot.
///
/// Every vocabulary token occurring in the text gets
/// `(frequency - corpus mean) / corpus stdev`, or 0 when the corpus deviation
/// is 0. The text must use the same tagging as the corpus.
pub fn text_zscores(text: &TextModel, snapshot: &CorpusSnapshot) -> Result<ZScores, ModelError> {
    if let (Some(corpus), Some(own)) = (snapshot.tagging(), text.tagging()?)
        && corpus != own
    {
        return Err(ModelError::MixedTagging {
            text: text.id().to_string(),
        });
    }

    let mut zscores = ZScores::new(snapshot);
    for token in snapshot.vocabulary() {
        if !text.contains(token) {
            continue;
        }
        if let Some(moments) = snapshot.moments(token) {
            zscores.insert(token.clone(), moments.zscore(text.frequency(token)));
        }
    }
    Ok(zscores)
}
