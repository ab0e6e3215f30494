//! Error types for the attribution model.

use thiserror::Error;

/// Errors raised when the model is used out of order or with an invalid corpus.
///
/// Degenerate statistics (a zero standard deviation) are never errors; every
/// variant here is a misuse of the model or a corpus that cannot be modelled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The corpus has no authors.
    #[error("corpus has no authors")]
    EmptyCorpus,

    /// Two authors share a name.
    #[error("duplicate author name: {name}")]
    DuplicateAuthor {
        /// The repeated name.
        name: String,
    },

    /// An author has no texts, so no profile can be computed.
    #[error("author '{name}' has no texts")]
    AuthorWithoutTexts {
        /// Name of the author.
        name: String,
    },

    /// Statistics were requested before the counter was aggregated.
    #[error("{entity} has not been counted yet")]
    NotCounted {
        /// Description of the entity, e.g. `author 'A'` or `corpus`.
        entity: String,
    },

    /// Author z-scores were requested before its mean and deviation exist.
    #[error("author '{name}' has no mean/stdev profile yet")]
    NotProfiled {
        /// Name of the author.
        name: String,
    },

    /// Two score sets computed against different vocabularies were compared.
    #[error("z-scores were computed against a different vocabulary ({found}, expected {expected})")]
    StaleScores {
        /// Policy of the snapshot the delta was requested against.
        expected: String,
        /// Policy the offending scores were computed with.
        found: String,
    },

    /// Tagged and untagged texts were mixed in one corpus.
    #[error("corpus mixes tagged and untagged tokens (text '{text}')")]
    MixedTagging {
        /// Identifier of the first text that disagrees with the rest.
        text: String,
    },

    /// Parameter selection was run without any candidate vocabulary sizes.
    #[error("no candidate vocabulary sizes given")]
    NoCandidateSizes,
}
