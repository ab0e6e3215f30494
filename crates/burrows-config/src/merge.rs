//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`.

use std::path::PathBuf;

use crate::{
    Config, CorpusSettings, ModelSettings, OpenSetSettings, TrainingSettings,
    parse::{
        RawConfig, RawCorpusSettings, RawModelSettings, RawOpenSetSettings, RawTrainingSettings,
    },
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config). Every field takes its first defined value; lists
/// are replaced as a whole, never concatenated.
pub fn merge_configs(configs: &[ParsedConfig]) -> Config {
    let mut config = Config::default();

    // Lowest precedence first so higher precedence overwrites.
    for parsed in configs.iter().rev() {
        let raw = &parsed.config;
        if let Some(model) = &raw.model {
            apply_model(&mut config.model, model);
        }
        if let Some(training) = &raw.training {
            apply_training(&mut config.training, training);
        }
        if let Some(open_set) = &raw.open_set {
            apply_open_set(&mut config.open_set, open_set);
        }
        if let Some(corpus) = &raw.corpus {
            apply_corpus(&mut config.corpus, corpus);
        }
    }

    config
}

/// Applies raw model settings, overwriting any present values.
fn apply_model(result: &mut ModelSettings, raw: &RawModelSettings) {
    if let Some(v) = &raw.tokenizer {
        result.tokenizer.clone_from(v);
    }
    if let Some(v) = raw.real_words {
        result.real_words = v;
    }
}

/// Applies raw training settings.
fn apply_training(result: &mut TrainingSettings, raw: &RawTrainingSettings) {
    if let Some(v) = &raw.candidate_sizes {
        result.candidate_sizes.clone_from(v);
    }
}

/// Applies raw open-set settings.
fn apply_open_set(result: &mut OpenSetSettings, raw: &RawOpenSetSettings) {
    if let Some(v) = &raw.thresholds {
        result.thresholds.clone_from(v);
    }
}

/// Applies raw corpus settings.
fn apply_corpus(result: &mut CorpusSettings, raw: &RawCorpusSettings) {
    if let Some(v) = &raw.meta_file {
        result.meta_file.clone_from(v);
    }
    if let Some(v) = &raw.output_file {
        result.output_file.clone_from(v);
    }
}
