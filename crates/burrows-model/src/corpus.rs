//! The corpus of known authors and its vocabulary snapshots.
//!
//! A [`CorpusModel`] owns the authors and the unrestricted global counter.
//! Restricting the vocabulary never mutates it: [`CorpusModel::reconfigure`]
//! derives an immutable [`CorpusSnapshot`] for one [`VocabularyPolicy`], so
//! trying several vocabulary sizes always starts from the full counts.

use std::{
    collections::HashMap,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::Serialize;
use tracing::{debug, info};

use crate::{AuthorModel, CountState, Counter, ModelError, Moments, TextModel, Token};

/// Count generations, unique across every corpus in the process.
static GENERATIONS: AtomicU64 = AtomicU64::new(1);

/// How the corpus vocabulary is restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VocabularyPolicy {
    /// Keep only the N most frequent tokens; 0 keeps all of them.
    pub considered_words: usize,
    /// Drop tokens without any alphabetic character.
    pub real_words_only: bool,
}

impl VocabularyPolicy {
    /// Creates a policy.
    pub fn new(considered_words: usize, real_words_only: bool) -> Self {
        Self {
            considered_words,
            real_words_only,
        }
    }

    /// Same policy with a different vocabulary size.
    #[must_use]
    pub fn with_considered_words(self, considered_words: usize) -> Self {
        Self {
            considered_words,
            ..self
        }
    }
}

impl fmt::Display for VocabularyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "considered_words={}, real_words_only={}",
            self.considered_words, self.real_words_only
        )
    }
}

/// Global statistics for one vocabulary token.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordStats {
    /// Occurrences across the whole corpus.
    pub count: u64,
    /// Mean and deviation of the relative frequency across every text.
    pub moments: Moments,
}

/// An immutable view of the corpus under one vocabulary policy.
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    /// Policy this snapshot was built with.
    policy: VocabularyPolicy,
    /// Count generation of the corpus the snapshot was built from.
    generation: u64,
    /// Number of texts the statistics were computed over.
    text_count: usize,
    /// Whether the corpus tokens are tagged; `None` if every text is empty.
    tagging: Option<bool>,
    /// Restricted vocabulary, most frequent first.
    vocabulary: Vec<Token>,
    /// Statistics per vocabulary token.
    stats: HashMap<Token, WordStats>,
}

impl CorpusSnapshot {
    /// Policy the snapshot was built with.
    pub fn policy(&self) -> VocabularyPolicy {
        self.policy
    }

    /// Count generation the snapshot was built from.
    ///
    /// Every recount of any corpus gets a new generation, so snapshots with
    /// equal policies but different underlying counts are told apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of texts in the corpus.
    pub fn text_count(&self) -> usize {
        self.text_count
    }

    /// Whether the corpus tokens are tagged.
    pub fn tagging(&self) -> Option<bool> {
        self.tagging
    }

    /// Vocabulary tokens, most frequent first.
    pub fn vocabulary(&self) -> &[Token] {
        &self.vocabulary
    }

    /// Vocabulary size.
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Returns true if no token survived the restriction.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }

    /// Returns true if `token` is in the restricted vocabulary.
    pub fn contains(&self, token: &Token) -> bool {
        self.stats.contains_key(token)
    }

    /// Statistics for a vocabulary token.
    pub fn stats(&self, token: &Token) -> Option<&WordStats> {
        self.stats.get(token)
    }

    /// Global mean and deviation for a vocabulary token.
    pub fn moments(&self, token: &Token) -> Option<Moments> {
        self.stats.get(token).map(|s| s.moments)
    }
}

/// The known authors and their aggregated counts.
#[derive(Debug, Clone)]
pub struct CorpusModel {
    /// Authors in insertion order.
    authors: Vec<AuthorModel>,
    /// Whether `counter` and `text_count` are current.
    state: CountState,
    /// Unrestricted token counts summed over all authors.
    counter: Counter,
    /// Number of texts over all authors.
    text_count: usize,
    /// Whether tokens are tagged, fixed by the first non-empty text.
    tagging: Option<bool>,
    /// Generation of the current counts; 0 before the first count.
    generation: u64,
}

impl Default for CorpusModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusModel {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self {
            authors: Vec::new(),
            state: CountState::Uncounted,
            counter: Counter::new(),
            text_count: 0,
            tagging: None,
            generation: 0,
        }
    }

    /// Adds an author.
    ///
    /// Names must be unique, and all texts must agree on whether tokens are tagged.
    pub fn add_author(&mut self, author: AuthorModel) -> Result<(), ModelError> {
        if self.author(author.name()).is_some() {
            return Err(ModelError::DuplicateAuthor {
                name: author.name().to_string(),
            });
        }
        let mut tagging = self.tagging;
        for text in author.texts() {
            check_tagging(&mut tagging, text)?;
        }
        self.tagging = tagging;
        self.authors.push(author);
        self.state = CountState::Uncounted;
        Ok(())
    }

    /// Authors in insertion order.
    pub fn authors(&self) -> &[AuthorModel] {
        &self.authors
    }

    /// Looks up an author by name.
    pub fn author(&self, name: &str) -> Option<&AuthorModel> {
        self.authors.iter().find(|a| a.name() == name)
    }

    /// Current counting state.
    pub fn state(&self) -> CountState {
        self.state
    }

    /// Unrestricted global counts, available once counted.
    pub fn counter(&self) -> Option<&Counter> {
        match self.state {
            CountState::Counted => Some(&self.counter),
            CountState::Uncounted => None,
        }
    }

    /// Number of texts, available once counted.
    pub fn text_count(&self) -> usize {
        self.text_count
    }

    /// Whether tokens are tagged; `None` until a non-empty text was added.
    pub fn tagging(&self) -> Option<bool> {
        self.tagging
    }

    /// Aggregates counts over all authors, cascading to each author's counter.
    ///
    /// The global counter is rebuilt from scratch on every call.
    pub fn calc_counter(&mut self) -> Result<(), ModelError> {
        if self.authors.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }
        info!("corpus: counting");
        let mut counter = Counter::new();
        let mut text_count = 0;
        for author in &mut self.authors {
            author.calc_counter();
            if let Some(own) = author.counter() {
                counter.merge(own);
            }
            text_count += author.texts().len();
        }
        self.counter = counter;
        self.text_count = text_count;
        self.generation = GENERATIONS.fetch_add(1, Ordering::Relaxed);
        self.state = CountState::Counted;
        Ok(())
    }

    /// Counts if needed, profiles every author, then builds a snapshot.
    pub fn process(&mut self, policy: VocabularyPolicy) -> Result<CorpusSnapshot, ModelError> {
        if self.state == CountState::Uncounted {
            self.calc_counter()?;
        }
        for author in &mut self.authors {
            if !author.is_profiled() {
                author.calc_mean_stdev()?;
            }
        }
        self.reconfigure(policy)
    }

    /// Builds the snapshot for `policy` from the unrestricted counts.
    ///
    /// Real-word filtering is applied before the top-N truncation. Ties in
    /// count keep the order in which tokens were first counted.
    pub fn reconfigure(&self, policy: VocabularyPolicy) -> Result<CorpusSnapshot, ModelError> {
        if self.state != CountState::Counted {
            return Err(ModelError::NotCounted {
                entity: "corpus".to_string(),
            });
        }

        let mut ranked: Vec<(&Token, u64)> = self
            .counter
            .ranked()
            .into_iter()
            .filter(|(token, _)| !policy.real_words_only || token.is_real_word())
            .collect();
        if policy.considered_words > 0 {
            ranked.truncate(policy.considered_words);
        }
        info!(%policy, vocabulary = ranked.len(), "corpus: calculating mean and stdev");

        let texts: Vec<&TextModel> = self.authors.iter().flat_map(|a| a.texts()).collect();
        let mut stats = HashMap::with_capacity(ranked.len());
        let mut vocabulary = Vec::with_capacity(ranked.len());
        for (token, count) in ranked {
            let sample: Vec<f64> = texts.iter().map(|t| t.frequency(token)).collect();
            let moments = Moments::of(&sample);
            if moments.stdev == 0.0 {
                debug!(token = %token, "zero deviation across corpus");
            }
            stats.insert(token.clone(), WordStats { count, moments });
            vocabulary.push(token.clone());
        }

        Ok(CorpusSnapshot {
            policy,
            generation: self.generation,
            text_count: self.text_count,
            tagging: self.tagging,
            vocabulary,
            stats,
        })
    }
}

/// Records the tagging of `text`, failing if it disagrees with earlier texts.
fn check_tagging(expected: &mut Option<bool>, text: &TextModel) -> Result<(), ModelError> {
    let Some(tagged) = text.tagging()? else {
        return Ok(());
    };
    if expected.is_some_and(|previous| previous != tagged) {
        return Err(ModelError::MixedTagging {
            text: text.id().to_string(),
        });
    }
    *expected = Some(tagged);
    Ok(())
}
