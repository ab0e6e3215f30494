//! Choosing the vocabulary size by re-classifying the training texts.
//!
//! Each candidate size is scored by how many known texts are attributed to
//! their own author. The training texts are part of the corpus they are scored
//! against, so the estimate is optimistic; it ranks sizes, it does not measure
//! accuracy on unseen texts.

use serde::Serialize;
use tracing::info;

use crate::{Classifier, CorpusModel, ModelError, VocabularyPolicy};

/// Re-classification result for one candidate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Requested vocabulary size (0 = unlimited).
    pub considered_words: usize,
    /// Size of the vocabulary actually used.
    pub vocabulary: usize,
    /// Training texts attributed to their own author.
    pub correct: usize,
    /// Training texts classified.
    pub total: usize,
}

impl Tally {
    /// Fraction of training texts attributed correctly.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// The chosen size and the tallies it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// The winning vocabulary size.
    pub chosen: usize,
    /// One tally per candidate, in candidate order.
    pub tallies: Vec<Tally>,
}

/// Picks `considered_words` by re-classification of the training texts.
#[derive(Debug, Clone)]
pub struct ParameterSelector {
    /// Candidate sizes, tried in order.
    candidates: Vec<usize>,
    /// Real-word filtering applied to every candidate.
    real_words_only: bool,
}

impl ParameterSelector {
    /// Creates a selector over `candidates`.
    pub fn new(candidates: Vec<usize>, real_words_only: bool) -> Self {
        Self {
            candidates,
            real_words_only,
        }
    }

    /// Candidate sizes in the order they are tried.
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Scores every candidate size and returns the best one.
    ///
    /// Ties go to the earliest candidate.
    pub fn select(&self, corpus: &mut CorpusModel) -> Result<Selection, ModelError> {
        if self.candidates.is_empty() {
            return Err(ModelError::NoCandidateSizes);
        }
        info!(candidates = ?self.candidates, "start training");

        let mut tallies = Vec::with_capacity(self.candidates.len());
        for &size in &self.candidates {
            info!(considered_words = size, "checking vocabulary size");
            let policy = VocabularyPolicy::new(size, self.real_words_only);
            let snapshot = corpus.process(policy)?;
            let classifier = Classifier::new(corpus, snapshot)?;
            tallies.push(evaluate(corpus, &classifier)?);
        }

        let chosen = pick_best(&tallies)
            .map(|t| t.considered_words)
            .ok_or(ModelError::NoCandidateSizes)?;
        info!(considered_words = chosen, "chose vocabulary size");
        Ok(Selection { chosen, tallies })
    }
}

/// Re-classifies every training text and counts correct attributions.
fn evaluate(corpus: &CorpusModel, classifier: &Classifier) -> Result<Tally, ModelError> {
    let mut correct = 0;
    let mut total = 0;
    for author in corpus.authors() {
        for text in author.texts() {
            let attribution = classifier.classify(text)?;
            if attribution.author == author.name() {
                correct += 1;
            }
            total += 1;
        }
    }
    let snapshot = classifier.snapshot();
    Ok(Tally {
        considered_words: snapshot.policy().considered_words,
        vocabulary: snapshot.len(),
        correct,
        total,
    })
}

/// The tally with the most correct attributions; the earliest one on ties.
pub fn pick_best(tallies: &[Tally]) -> Option<&Tally> {
    tallies.iter().fold(None, |best, t| match best {
        Some(b) if b.correct >= t.correct => Some(b),
        _ => Some(t),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{AlphabeticTokenizer, AuthorModel, TextModel};

    fn tally(considered_words: usize, correct: usize) -> Tally {
        Tally {
            considered_words,
            vocabulary: considered_words,
            correct,
            total: 10,
        }
    }

    fn text(id: &str, raw: &str) -> TextModel {
        TextModel::new(id, raw, &AlphabeticTokenizer)
    }

    fn corpus() -> CorpusModel {
        let mut corpus = CorpusModel::new();
        corpus
            .add_author(
                AuthorModel::new("Cats")
                    .with_text(text("c1", "cat mat purr cat mat"))
                    .with_text(text("c2", "cat purr mat mat cat")),
            )
            .unwrap();
        corpus
            .add_author(
                AuthorModel::new("Dogs")
                    .with_text(text("d1", "dog bark run dog"))
                    .with_text(text("d2", "bark dog run dog")),
            )
            .unwrap();
        corpus
    }

    #[test]
    fn picks_highest_tally() {
        let tallies = [tally(10, 6), tally(20, 8)];
        assert_eq!(pick_best(&tallies).unwrap().considered_words, 20);
    }

    #[test]
    fn ties_go_to_first_candidate() {
        let tallies = [tally(10, 5), tally(20, 8), tally(30, 8)];
        assert_eq!(pick_best(&tallies).unwrap().considered_words, 20);
        assert!(pick_best(&[]).is_none());
    }

    #[test]
    fn empty_candidates_fail() {
        let mut corpus = corpus();
        let selector = ParameterSelector::new(vec![], true);
        assert_eq!(
            selector.select(&mut corpus),
            Err(ModelError::NoCandidateSizes)
        );
    }

    #[test]
    fn select_tallies_every_candidate() {
        let mut corpus = corpus();
        let selector = ParameterSelector::new(vec![1, 5, 0], true);
        assert_eq!(selector.candidates(), &[1, 5, 0]);
        let selection = selector.select(&mut corpus).unwrap();

        assert_eq!(selection.tallies.len(), 3);
        assert_eq!(
            selection
                .tallies
                .iter()
                .map(|t| t.considered_words)
                .collect::<Vec<_>>(),
            vec![1, 5, 0]
        );
        assert!(selection.tallies.iter().all(|t| t.total == 4));
        assert_eq!(selection.tallies[0].vocabulary, 1);
        assert_eq!(selection.tallies[1].vocabulary, 5);

        let best = pick_best(&selection.tallies).unwrap();
        assert_eq!(selection.chosen, best.considered_words);
    }

    #[test]
    fn full_vocabulary_separates_distinct_authors() {
        let mut corpus = corpus();
        let selection = ParameterSelector::new(vec![0], true)
            .select(&mut corpus)
            .unwrap();
        assert_eq!(selection.chosen, 0);
        assert_eq!(selection.tallies[0].correct, 4);
    }

    #[test]
    fn larger_vocabulary_wins_when_it_separates_authors() {
        // "the" and "of" have the same frequency in every text, so two words
        // give every author a delta of 0 and the first author takes all texts.
        let mut corpus = CorpusModel::new();
        corpus
            .add_author(
                AuthorModel::new("A")
                    .with_text(text("a1", "the the the of of cat cat mat"))
                    .with_text(text("a2", "the the the of of cat mat mat")),
            )
            .unwrap();
        corpus
            .add_author(
                AuthorModel::new("B")
                    .with_text(text("b1", "the the the of of dog dog bone"))
                    .with_text(text("b2", "the the the of of dog bone bone")),
            )
            .unwrap();

        let selection = ParameterSelector::new(vec![2, 6], true)
            .select(&mut corpus)
            .unwrap();

        assert_eq!(selection.tallies[0].vocabulary, 2);
        assert_eq!(selection.tallies[0].correct, 2);
        assert_eq!(selection.tallies[1].vocabulary, 6);
        assert_eq!(selection.tallies[1].correct, 4);
        assert_eq!(selection.chosen, 6);
    }

    #[test]
    fn accuracy() {
        assert!((tally(10, 8).accuracy() - 0.8).abs() < 1e-12);
        let empty = Tally {
            considered_words: 0,
            vocabulary: 0,
            correct: 0,
            total: 0,
        };
        assert_eq!(empty.accuracy(), 0.0);
    }
}
