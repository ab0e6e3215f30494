//! Per-author usage profiles.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::{Counter, CorpusSnapshot, ModelError, Moments, TextModel, Token, ZScores};

/// Whether an aggregate counter has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountState {
    /// Counts have not been aggregated (or were invalidated by new texts).
    Uncounted,
    /// Counts are aggregated and current.
    Counted,
}

/// An author and the texts known to be theirs.
#[derive(Debug, Clone)]
pub struct AuthorModel {
    /// Name, unique within a corpus.
    name: String,
    /// Training texts in insertion order.
    texts: Vec<TextModel>,
    /// Whether `counter` is current.
    state: CountState,
    /// Token counts summed over all texts.
    counter: Counter,
    /// Mean and deviation per token across this author's texts.
    profile: Option<HashMap<Token, Moments>>,
}

impl AuthorModel {
    /// Creates an author with no texts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            texts: Vec::new(),
            state: CountState::Uncounted,
            counter: Counter::new(),
            profile: None,
        }
    }

    /// Adds a text, invalidating any aggregated counts and profile.
    pub fn add_text(&mut self, text: TextModel) {
        self.texts.push(text);
        self.state = CountState::Uncounted;
        self.counter = Counter::new();
        self.profile = None;
    }

    /// Builder-style variant of [`Self::add_text`].
    #[must_use]
    pub fn with_text(mut self, text: TextModel) -> Self {
        self.add_text(text);
        self
    }

    /// The author's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The author's texts.
    pub fn texts(&self) -> &[TextModel] {
        &self.texts
    }

    /// Current counting state.
    pub fn state(&self) -> CountState {
        self.state
    }

    /// Aggregated counts, available once counted.
    pub fn counter(&self) -> Option<&Counter> {
        match self.state {
            CountState::Counted => Some(&self.counter),
            CountState::Uncounted => None,
        }
    }

    /// Sums the counts of all texts.
    ///
    /// Returns `false` without doing anything if the author is already counted,
    /// so a corpus-level cascade never double counts.
    pub fn calc_counter(&mut self) -> bool {
        if self.state == CountState::Counted {
            debug!(author = %self.name, "counter already calculated");
            return false;
        }
        info!(author = %self.name, "calculating counter");
        let mut counter = Counter::new();
        for text in &self.texts {
            counter.merge(text.counter());
        }
        self.counter = counter;
        self.state = CountState::Counted;
        true
    }

    /// Computes mean and sample deviation of every token's relative frequency
    /// across this author's texts. A text lacking a token contributes 0.
    pub fn calc_mean_stdev(&mut self) -> Result<(), ModelError> {
        if self.state != CountState::Counted {
            return Err(ModelError::NotCounted {
                entity: format!("author '{}'", self.name),
            });
        }
        if self.texts.is_empty() {
            return Err(ModelError::AuthorWithoutTexts {
                name: self.name.clone(),
            });
        }

        info!(author = %self.name, "calculating mean and stdev");
        let profile = self
            .counter
            .iter()
            .map(|(token, _)| {
                let sample: Vec<f64> = self.texts.iter().map(|t| t.frequency(token)).collect();
                (token.clone(), Moments::of(&sample))
            })
            .collect();
        self.profile = Some(profile);
        Ok(())
    }

    /// Mean and deviation for one token, if profiled and seen.
    pub fn moments(&self, token: &Token) -> Option<Moments> {
        self.profile.as_ref()?.get(token).copied()
    }

    /// Returns true once [`Self::calc_mean_stdev`] has run.
    pub fn is_profiled(&self) -> bool {
        self.profile.is_some()
    }

    /// Standardizes this author's mean frequencies against a corpus snapshot.
    ///
    /// Only tokens inside the snapshot vocabulary get a score.
    pub fn calc_zscores(&self, snapshot: &CorpusSnapshot) -> Result<ZScores, ModelError> {
        let Some(profile) = &self.profile else {
            return Err(ModelError::NotProfiled {
                name: self.name.clone(),
            });
        };

        let mut zscores = ZScores::new(snapshot);
        for (token, _) in self.counter.iter() {
            if let (Some(own), Some(global)) = (profile.get(token), snapshot.moments(token)) {
                zscores.insert(token.clone(), global.zscore(own.mean));
            }
        }
        Ok(zscores)
    }

    /// Counts, profiles and standardizes in one go.
    pub fn calc_cmsz(&mut self, snapshot: &CorpusSnapshot) -> Result<ZScores, ModelError> {
        self.calc_counter();
        self.calc_mean_stdev()?;
        self.calc_zscores(snapshot)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AlphabeticTokenizer, CorpusModel, VocabularyPolicy};

    fn text(id: &str, raw: &str) -> TextModel {
        TextModel::new(id, raw, &AlphabeticTokenizer)
    }

    #[test]
    fn calc_counter_is_idempotent() {
        let mut author = AuthorModel::new("A")
            .with_text(text("a1", "x y x"))
            .with_text(text("a2", "x z"));
        assert_eq!(author.state(), CountState::Uncounted);
        assert!(author.counter().is_none());

        assert!(author.calc_counter());
        assert!(!author.calc_counter());

        let counter = author.counter().unwrap();
        assert_eq!(counter.get(&Token::new("x")), 3);
        assert_eq!(counter.get(&Token::new("z")), 1);
    }

    #[test]
    fn adding_text_resets_state() {
        let mut author = AuthorModel::new("A").with_text(text("a1", "x"));
        author.calc_counter();
        author.calc_mean_stdev().unwrap();

        author.add_text(text("a2", "x y"));
        assert_eq!(author.state(), CountState::Uncounted);
        assert!(!author.is_profiled());

        author.calc_counter();
        assert_eq!(author.counter().unwrap().get(&Token::new("x")), 2);
    }

    #[test]
    fn mean_stdev_requires_counter() {
        let mut author = AuthorModel::new("A").with_text(text("a1", "x"));
        assert!(matches!(
            author.calc_mean_stdev(),
            Err(ModelError::NotCounted { .. })
        ));
    }

    #[test]
    fn mean_stdev_requires_texts() {
        let mut author = AuthorModel::new("Empty");
        author.calc_counter();
        assert_eq!(
            author.calc_mean_stdev(),
            Err(ModelError::AuthorWithoutTexts {
                name: "Empty".into()
            })
        );
    }

    #[test]
    fn single_text_author_has_zero_stdev() {
        let mut author = AuthorModel::new("A").with_text(text("a1", "one two two three"));
        author.calc_counter();
        author.calc_mean_stdev().unwrap();
        for (token, _) in author.counter().unwrap().iter() {
            assert_eq!(author.moments(token).unwrap().stdev, 0.0);
        }
        assert_eq!(author.moments(&Token::new("two")).unwrap().mean, 0.5);
    }

    #[test]
    fn absent_tokens_count_as_zero() {
        let mut author = AuthorModel::new("A")
            .with_text(text("a1", "x x"))
            .with_text(text("a2", "y y"));
        author.calc_counter();
        author.calc_mean_stdev().unwrap();

        // x: frequencies [1.0, 0.0]
        let x = author.moments(&Token::new("x")).unwrap();
        assert!((x.mean - 0.5).abs() < 1e-12);
        assert!((x.stdev - 0.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zscores_require_profile() {
        let mut corpus = CorpusModel::new();
        corpus
            .add_author(AuthorModel::new("A").with_text(text("a1", "x y")))
            .unwrap();
        let snapshot = corpus.process(VocabularyPolicy::default()).unwrap();

        let fresh = AuthorModel::new("B").with_text(text("b1", "x"));
        assert!(matches!(
            fresh.calc_zscores(&snapshot),
            Err(ModelError::NotProfiled { .. })
        ));
    }
}
