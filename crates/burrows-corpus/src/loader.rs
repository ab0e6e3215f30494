//! Raw corpus contents and the loader seam.

use crate::CorpusError;

/// A named raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    /// File name, relative to the directory it was read from.
    pub name: String,
    /// File contents.
    pub raw: String,
}

impl RawText {
    /// Creates a named text.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// A candidate author with their training texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Author name.
    pub name: String,
    /// Training texts in load order.
    pub texts: Vec<RawText>,
}

/// Everything an attribution run reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedCorpus {
    /// Candidate authors in declaration order.
    pub candidates: Vec<Candidate>,
    /// Texts to attribute in declaration order.
    pub unknowns: Vec<RawText>,
}

impl LoadedCorpus {
    /// Total number of training texts.
    pub fn training_count(&self) -> usize {
        self.candidates.iter().map(|c| c.texts.len()).sum()
    }
}

/// Source of candidates, training texts and unknown texts.
pub trait CorpusLoader {
    /// Reads the whole corpus.
    fn load(&self) -> Result<LoadedCorpus, CorpusError>;
}

impl CorpusLoader for LoadedCorpus {
    fn load(&self) -> Result<LoadedCorpus, CorpusError> {
        Ok(self.clone())
    }
}
