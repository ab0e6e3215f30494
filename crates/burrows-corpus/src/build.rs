//! Turning loaded texts into models.

use burrows_model::{AuthorModel, CorpusModel, TextModel, Tokenizer};
use tracing::info;

use crate::{CorpusError, LoadedCorpus};

/// A corpus ready for training and the texts to attribute.
#[derive(Debug, Clone)]
pub struct PreparedCorpus {
    /// Candidate authors with their tokenized training texts.
    pub model: CorpusModel,
    /// Tokenized unknown texts in declaration order.
    pub unknowns: Vec<TextModel>,
}

/// Tokenizes a loaded corpus.
///
/// Author order follows candidate order. Training texts are identified as
/// `"<author> <file>"`; unknown texts keep their file name.
pub fn build_corpus(
    loaded: &LoadedCorpus,
    tokenizer: &dyn Tokenizer,
) -> Result<PreparedCorpus, CorpusError> {
    let mut model = CorpusModel::new();
    for candidate in &loaded.candidates {
        let mut author = AuthorModel::new(&candidate.name);
        for text in &candidate.texts {
            let id = format!("{} {}", candidate.name, text.name);
            author.add_text(TextModel::new(id, &text.raw, tokenizer));
        }
        model.add_author(author)?;
    }

    let unknowns = loaded
        .unknowns
        .iter()
        .map(|text| TextModel::new(&text.name, &text.raw, tokenizer))
        .collect();

    info!(
        authors = model.authors().len(),
        texts = loaded.training_count(),
        "built corpus"
    );
    Ok(PreparedCorpus { model, unknowns })
}
