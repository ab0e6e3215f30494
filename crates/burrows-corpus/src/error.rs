//! Error types for the burrows-corpus crate.

use std::{io, path::PathBuf};

use burrows_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading a corpus or writing answers.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The corpus description is not valid JSON or lacks required fields.
    #[error("failed to parse {path}: {source}")]
    ParseMeta {
        /// Path to the description file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A candidate author has no training directory.
    #[error("training directory for '{author}' not found: {path}")]
    MissingCandidate {
        /// Candidate author name.
        author: String,
        /// Expected directory.
        path: PathBuf,
    },

    /// Walking a training directory failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// The answer file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Path to the answer file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Answers could not be serialized.
    #[error("failed to serialize answers: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The loaded texts do not form a valid corpus.
    #[error(transparent)]
    Model(#[from] ModelError),
}
