//! Shared helpers for command implementations.

use std::{fmt::Display, path::Path, process::ExitCode};

use burrows_config::Config;
use burrows_corpus::{CorpusLoader, PanCorpus, PreparedCorpus, build_corpus};
use burrows_model::{Classifier, ParameterSelector, Selection, TokenizerKind, VocabularyPolicy};

use crate::cli::{args::ModelArgs, context::CommandContext, output::print_config_warnings};

/// Model settings after applying CLI overrides to the configuration.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Tokenizer for training and unknown texts.
    pub tokenizer: TokenizerKind,
    /// Only rank tokens containing a letter.
    pub real_words: bool,
    /// Candidate vocabulary sizes, in order.
    pub sizes: Vec<usize>,
    /// Corpus description file name.
    pub meta_file: String,
}

impl RunSettings {
    /// Applies `args` on top of `config`.
    pub fn resolve(config: &Config, args: &ModelArgs) -> Result<Self, ExitCode> {
        let tokenizer = match args.tokenizer {
            Some(kind) => kind,
            None => config
                .model
                .tokenizer
                .parse()
                .map_err(|e: String| report(&e))?,
        };
        let sizes = if args.sizes.is_empty() {
            config.training.candidate_sizes.clone()
        } else {
            args.sizes.clone()
        };
        Ok(Self {
            tokenizer,
            real_words: config.model.real_words && !args.all_words,
            sizes,
            meta_file: args
                .meta_file
                .clone()
                .unwrap_or_else(|| config.corpus.meta_file.clone()),
        })
    }

    /// The vocabulary policy for one size.
    pub fn policy(&self, considered_words: usize) -> VocabularyPolicy {
        VocabularyPolicy::new(considered_words, self.real_words)
    }
}

/// Prints an error and returns the failure exit code.
pub fn report(e: &dyn Display) -> ExitCode {
    eprintln!("error: {e}");
    ExitCode::FAILURE
}

/// Resolves settings, then loads and tokenizes the corpus at `corpus`.
pub fn prepare(
    ctx: &CommandContext,
    corpus: &Path,
    args: &ModelArgs,
) -> Result<(RunSettings, PreparedCorpus), ExitCode> {
    print_config_warnings(&ctx.config.validate());
    let settings = RunSettings::resolve(&ctx.config, args)?;

    let dir = ctx.resolve(corpus);
    let loaded = PanCorpus::open(&dir, &settings.meta_file)
        .and_then(|pan| pan.load())
        .map_err(|e| report(&e))?;
    let tokenizer = settings.tokenizer.tokenizer();
    let prepared = build_corpus(&loaded, tokenizer.as_ref()).map_err(|e| report(&e))?;
    Ok((settings, prepared))
}

/// Scores every candidate size against the training texts.
pub fn train(
    prepared: &mut PreparedCorpus,
    settings: &RunSettings,
) -> Result<Selection, ExitCode> {
    ParameterSelector::new(settings.sizes.clone(), settings.real_words)
        .select(&mut prepared.model)
        .map_err(|e| report(&e))
}

/// Profiles the corpus at one size and builds a classifier for it.
pub fn classifier_for(
    prepared: &mut PreparedCorpus,
    settings: &RunSettings,
    considered_words: usize,
) -> Result<Classifier, ExitCode> {
    let snapshot = prepared
        .model
        .process(settings.policy(considered_words))
        .map_err(|e| report(&e))?;
    Classifier::new(&prepared.model, snapshot).map_err(|e| report(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let config = Config::default();
        let args = ModelArgs {
            sizes: vec![100],
            tokenizer: Some(TokenizerKind::Word),
            all_words: true,
            meta_file: Some("meta.json".into()),
        };
        let settings = RunSettings::resolve(&config, &args).unwrap();
        assert_eq!(settings.sizes, vec![100]);
        assert_eq!(settings.tokenizer, TokenizerKind::Word);
        assert!(!settings.real_words);
        assert_eq!(settings.meta_file, "meta.json");
    }

    #[test]
    fn config_fills_gaps() {
        let settings = RunSettings::resolve(&Config::default(), &ModelArgs::default()).unwrap();
        assert_eq!(settings.sizes, vec![150, 200, 250, 300]);
        assert_eq!(settings.tokenizer, TokenizerKind::Alphabetic);
        assert!(settings.real_words);
        assert_eq!(settings.meta_file, "meta-file.json");
    }

    #[test]
    fn unknown_configured_tokenizer_fails() {
        let mut config = Config::default();
        config.model.tokenizer = "nltk".into();
        assert!(RunSettings::resolve(&config, &ModelArgs::default()).is_err());
    }
}
