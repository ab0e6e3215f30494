//! Configuration validation.
//!
//! Reports settings that load fine but will not behave as intended.

use std::{fmt, str::FromStr};

use burrows_model::TokenizerKind;

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// No candidate vocabulary sizes are configured, so training cannot run.
    NoCandidateSizes,
    /// Candidate sizes are repeated or out of order.
    CandidateSizesNotAscending {
        /// The configured sizes.
        sizes: Vec<usize>,
    },
    /// An open-set threshold can never reject anything.
    ThresholdNotAboveOne {
        /// The offending threshold.
        threshold: f64,
    },
    /// The tokenizer name is not recognized.
    UnknownTokenizer {
        /// The configured name.
        name: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidateSizes => write!(f, "no candidate vocabulary sizes configured"),
            Self::CandidateSizesNotAscending { sizes } => {
                write!(f, "candidate sizes are not strictly ascending: {sizes:?}")
            }
            Self::ThresholdNotAboveOne { threshold } => {
                write!(
                    f,
                    "open-set threshold {threshold} is not greater than 1 and only rejects exact ties"
                )
            }
            Self::UnknownTokenizer { name } => write!(f, "unknown tokenizer '{name}'"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    let sizes = &config.training.candidate_sizes;
    if sizes.is_empty() {
        warnings.push(ConfigWarning::NoCandidateSizes);
    } else if sizes.windows(2).any(|w| w[0] >= w[1]) {
        warnings.push(ConfigWarning::CandidateSizesNotAscending {
            sizes: sizes.clone(),
        });
    }

    warnings.extend(
        config
            .open_set
            .thresholds
            .iter()
            .filter(|t| **t <= 1.0)
            .map(|&threshold| ConfigWarning::ThresholdNotAboveOne { threshold }),
    );

    if TokenizerKind::from_str(&config.model.tokenizer).is_err() {
        warnings.push(ConfigWarning::UnknownTokenizer {
            name: config.model.tokenizer.clone(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_empty());
    }

    #[test]
    fn test_validate_no_candidate_sizes() {
        let mut config = Config::default();
        config.training.candidate_sizes.clear();
        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::NoCandidateSizes]
        );
    }

    #[test]
    fn test_validate_unordered_sizes() {
        let mut config = Config::default();
        config.training.candidate_sizes = vec![200, 150, 150];
        assert_eq!(
            validate_config(&config),
            vec![ConfigWarning::CandidateSizesNotAscending {
                sizes: vec![200, 150, 150]
            }]
        );
    }

    #[test]
    fn test_validate_thresholds() {
        let mut config = Config::default();
        config.open_set.thresholds = vec![1.05, 1.0, 0.5];
        let warnings = validate_config(&config);
        assert_eq!(
            warnings,
            vec![
                ConfigWarning::ThresholdNotAboveOne { threshold: 1.0 },
                ConfigWarning::ThresholdNotAboveOne { threshold: 0.5 },
            ]
        );
    }

    #[test]
    fn test_validate_unknown_tokenizer() {
        let mut config = Config::default();
        config.model.tokenizer = "nltk".into();
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].to_string(), "unknown tokenizer 'nltk'");

        config.model.tokenizer = "word".into();
        assert!(validate_config(&config).is_empty());
    }
}
