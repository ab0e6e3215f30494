//! Closed- and open-set classification of unknown texts.

use serde::Serialize;
use tracing::debug;

use crate::{
    CorpusModel, CorpusSnapshot, Deltas, ModelError, TextModel, ZScores, delta, text_zscores,
};

/// Scores texts against every author of a corpus under one snapshot.
#[derive(Debug, Clone)]
pub struct Classifier {
    /// The vocabulary and statistics scores are computed against.
    snapshot: CorpusSnapshot,
    /// Author names with their z-scores, in corpus order.
    authors: Vec<(String, ZScores)>,
}

impl Classifier {
    /// Standardizes every author of `corpus` against `snapshot`.
    ///
    /// The corpus must have at least one author, and every author must be
    /// profiled (see [`CorpusModel::process`]).
    pub fn new(corpus: &CorpusModel, snapshot: CorpusSnapshot) -> Result<Self, ModelError> {
        if corpus.authors().is_empty() {
            return Err(ModelError::EmptyCorpus);
        }
        let authors = corpus
            .authors()
            .iter()
            .map(|a| Ok((a.name().to_string(), a.calc_zscores(&snapshot)?)))
            .collect::<Result<Vec<_>, ModelError>>()?;
        Ok(Self { snapshot, authors })
    }

    /// The snapshot this classifier scores against.
    pub fn snapshot(&self) -> &CorpusSnapshot {
        &self.snapshot
    }

    /// Deltas of `text` to every author, in corpus order.
    pub fn deltas(&self, text: &TextModel) -> Result<Deltas, ModelError> {
        let zscores = text_zscores(text, &self.snapshot)?;
        let mut deltas = Deltas::new(text.id());
        for (name, author) in &self.authors {
            let d = delta(&zscores, author, &self.snapshot)?;
            debug!(text = %text.id(), author = %name, delta = d, "delta");
            deltas.push(name.clone(), d);
        }
        Ok(deltas)
    }

    /// Attributes `text` to the author with the smallest delta.
    pub fn classify(&self, text: &TextModel) -> Result<Attribution, ModelError> {
        let deltas = self.deltas(text)?;
        let author = deltas
            .best()
            .map(|b| b.author.clone())
            .ok_or(ModelError::EmptyCorpus)?;
        Ok(Attribution { author, deltas })
    }
}

/// The closed-set answer for one text, with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribution {
    /// Author with the smallest delta.
    pub author: String,
    /// Deltas to every author.
    pub deltas: Deltas,
}

impl Attribution {
    /// Applies the open-set rule with one threshold.
    pub fn decide(&self, threshold: f64) -> Decision {
        open_set_decision(&self.deltas, threshold)
    }
}

/// Outcome of open-set classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Decision {
    /// The text is attributed to this author.
    Author(String),
    /// A competitor was too close to call; none of the above.
    NoDecision,
}

impl Decision {
    /// The chosen author, if any.
    pub fn author(&self) -> Option<&str> {
        match self {
            Self::Author(name) => Some(name),
            Self::NoDecision => None,
        }
    }
}

/// Open-set rule: refuse to decide when another author is too close.
///
/// Every delta is divided by the minimum. If any author other than the best has
/// a ratio strictly between 1 and `threshold`, or ties the minimum exactly, the
/// result is [`Decision::NoDecision`]; otherwise the best author.
pub fn open_set_decision(deltas: &Deltas, threshold: f64) -> Decision {
    let Some(best) = deltas.best_index() else {
        return Decision::NoDecision;
    };
    let contested = deltas
        .ratios()
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != best)
        .any(|(_, (_, ratio))| ratio == 1.0 || (ratio > 1.0 && ratio < threshold));

    if contested {
        Decision::NoDecision
    } else {
        Decision::Author(deltas.entries[best].author.clone())
    }
}
