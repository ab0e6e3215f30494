//! Burrows' Delta distance between a text and author profiles.

use std::cmp::Ordering;

use serde::Serialize;

use crate::{CorpusSnapshot, ModelError, ZScores};

/// Burrows' Delta between a standardized text and a standardized author.
///
/// Sums, over vocabulary tokens the text contains, the absolute difference of
/// the two z-scores; a token the author has no score for contributes the
/// text's full `|z|`. The sum is not normalized by vocabulary size. Smaller is
/// more similar.
pub fn delta(
    text: &ZScores,
    author: &ZScores,
    snapshot: &CorpusSnapshot,
) -> Result<f64, ModelError> {
    text.ensure_current(snapshot)?;
    author.ensure_current(snapshot)?;

    let sum = snapshot
        .vocabulary()
        .iter()
        .filter_map(|token| {
            let z = text.get(token)?;
            Some(match author.get(token) {
                Some(a) => (z - a).abs(),
                None => z.abs(),
            })
        })
        .fold(0.0, |acc, d| acc + d);
    Ok(sum)
}

/// The delta of one candidate author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorDelta {
    /// Author name.
    pub author: String,
    /// Distance to the text.
    pub delta: f64,
}

/// Deltas of one text to every author, in corpus order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Deltas {
    /// Identifier of the scored text.
    pub text: String,
    /// One entry per author, in corpus order.
    pub entries: Vec<AuthorDelta>,
}

impl Deltas {
    /// Creates an empty set for a text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entries: Vec::new(),
        }
    }

    /// Appends an author's delta.
    pub fn push(&mut self, author: impl Into<String>, delta: f64) {
        self.entries.push(AuthorDelta {
            author: author.into(),
            delta,
        });
    }

    /// The author with the smallest delta; the first one in corpus order on ties.
    pub fn best(&self) -> Option<&AuthorDelta> {
        self.best_index().map(|i| &self.entries[i])
    }

    /// Position of [`Self::best`] in corpus order.
    pub fn best_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, entry)| match best {
                Some((_, d)) if d <= entry.delta => best,
                _ => Some((i, entry.delta)),
            })
            .map(|(i, _)| i)
    }

    /// Delta of a named author.
    pub fn get(&self, author: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.author == author)
            .map(|e| e.delta)
    }

    /// Entries sorted by ascending delta, ties in corpus order.
    pub fn sorted(&self) -> Vec<&AuthorDelta> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.delta.partial_cmp(&b.delta).unwrap_or(Ordering::Equal));
        sorted
    }

    /// Each delta divided by the minimum delta, in corpus order.
    ///
    /// With a minimum of 0, zero deltas get ratio 1 and all others infinity.
    pub fn ratios(&self) -> Vec<(&str, f64)> {
        let Some(min) = self.best().map(|b| b.delta) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .map(|e| {
                let ratio = if min == 0.0 {
                    if e.delta == 0.0 { 1.0 } else { f64::INFINITY }
                } else {
                    e.delta / min
                };
                (e.author.as_str(), ratio)
            })
            .collect()
    }
}
