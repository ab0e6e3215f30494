//! Tokens and the tokenizers that produce them.
//!
//! A [`Token`] is an opaque, comparable unit of text: a surface form with an
//! optional grammatical tag. The model never looks inside a token except to ask
//! whether it is a real word.

use std::{fmt, iter::Peekable, mem, str};

use serde::Serialize;

/// A word-level token.
///
/// Equality and hashing cover both the surface form and the tag, so a tagged
/// token never equals an untagged one with the same surface form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Token {
    /// Surface form as it appears in the text (possibly normalized).
    surface: String,
    /// Grammatical tag, if the pipeline tags tokens.
    tag: Option<String>,
}

impl Token {
    /// Creates an untagged token.
    pub fn new(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: None,
        }
    }

    /// Creates a token paired with a grammatical tag.
    pub fn tagged(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: Some(tag.into()),
        }
    }

    /// The surface form.
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// The grammatical tag, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns true if the token carries a tag.
    pub fn is_tagged(&self) -> bool {
        self.tag.is_some()
    }

    /// Returns true if the surface form contains at least one alphabetic character.
    ///
    /// Words like "middle-age" or "I'll" count, pure punctuation does not.
    pub fn is_real_word(&self) -> bool {
        self.surface.chars().any(char::is_alphabetic)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{}/{}", self.surface, tag),
            None => write!(f, "{}", self.surface),
        }
    }
}

/// Turns raw text into an ordered sequence of tokens.
pub trait Tokenizer {
    /// Tokenizes `raw`, preserving the order in which tokens occur.
    fn tokenize(&self, raw: &str) -> Vec<Token>;
}

/// Naive tokenizer: whitespace-separated words reduced to their alphabetic
/// characters and lowercased. Words with no alphabetic character are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticTokenizer;

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, raw: &str) -> Vec<Token> {
        raw.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c| c.is_alphabetic())
                    .flat_map(char::to_lowercase)
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .map(Token::new)
            .collect()
    }
}

/// Word tokenizer that keeps punctuation.
///
/// Runs of alphanumeric characters form words (an apostrophe or hyphen between
/// two alphanumerics stays inside the word); every other non-whitespace
/// character becomes a token of its own. Case is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Characters that join two alphanumeric runs into one word.
    fn is_joiner(c: char) -> bool {
        matches!(c, '\'' | '’' | '-')
    }

    /// Returns true if the next character continues a word.
    fn continues_word(chars: &mut Peekable<str::Chars<'_>>) -> bool {
        chars.peek().is_some_and(|next| next.is_alphanumeric())
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, raw: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut word = String::new();
        let mut chars = raw.chars().peekable();

        while let Some(c) = chars.next() {
            if c.is_alphanumeric()
                || (Self::is_joiner(c) && !word.is_empty() && Self::continues_word(&mut chars))
            {
                word.push(c);
                continue;
            }
            if !word.is_empty() {
                tokens.push(Token::new(mem::take(&mut word)));
            }
            if !c.is_whitespace() {
                tokens.push(Token::new(c.to_string()));
            }
        }
        if !word.is_empty() {
            tokens.push(Token::new(word));
        }

        tokens
    }
}

/// Tokenizers selectable by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    /// [`AlphabeticTokenizer`].
    #[default]
    Alphabetic,
    /// [`WordTokenizer`].
    Word,
}

impl TokenizerKind {
    /// Builds the tokenizer for this kind.
    pub fn tokenizer(self) -> Box<dyn Tokenizer> {
        match self {
            Self::Alphabetic => Box::new(AlphabeticTokenizer),
            Self::Word => Box::new(WordTokenizer),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabetic => write!(f, "alphabetic"),
            Self::Word => write!(f, "word"),
        }
    }
}

impl str::FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alphabetic" | "alpha" => Ok(Self::Alphabetic),
            "word" | "words" => Ok(Self::Word),
            _ => Err(format!(
                "unknown tokenizer '{s}', expected one of: alphabetic, word"
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn surfaces(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::surface).collect()
    }

    #[test]
    fn tagged_and_untagged_tokens_differ() {
        assert_ne!(Token::new("run"), Token::tagged("run", "VB"));
        assert_eq!(Token::tagged("run", "VB"), Token::tagged("run", "VB"));
        assert_ne!(Token::tagged("run", "VB"), Token::tagged("run", "NN"));
    }

    #[test]
    fn real_words() {
        assert!(Token::new("dog").is_real_word());
        assert!(Token::new("middle-age").is_real_word());
        assert!(Token::new("I'll").is_real_word());
        assert!(!Token::new(".").is_real_word());
        assert!(!Token::new("--").is_real_word());
        assert!(!Token::new("1984").is_real_word());
    }

    #[test]
    fn display_includes_tag() {
        assert_eq!(Token::new("cat").to_string(), "cat");
        assert_eq!(Token::tagged("cat", "NN").to_string(), "cat/NN");
    }

    #[test]
    fn alphabetic_lowercases_and_strips() {
        let tokens = AlphabeticTokenizer.tokenize("The cat, the HAT! 42 ...");
        assert_eq!(surfaces(&tokens), vec!["the", "cat", "the", "hat"]);
        assert!(tokens.iter().all(|t| !t.is_tagged()));
    }

    #[test]
    fn alphabetic_joins_inner_punctuation() {
        let tokens = AlphabeticTokenizer.tokenize("don't middle-age");
        assert_eq!(surfaces(&tokens), vec!["dont", "middleage"]);
    }

    #[test]
    fn word_tokenizer_splits_punctuation() {
        let tokens = WordTokenizer.tokenize("Hello, world. It's mid-day!");
        assert_eq!(
            surfaces(&tokens),
            vec!["Hello", ",", "world", ".", "It's", "mid-day", "!"]
        );
    }

    #[test]
    fn word_tokenizer_trailing_joiner_is_punctuation() {
        let tokens = WordTokenizer.tokenize("rock- roll'");
        assert_eq!(surfaces(&tokens), vec!["rock", "-", "roll", "'"]);
    }

    #[test]
    fn word_tokenizer_empty_input() {
        assert!(WordTokenizer.tokenize("   \n\t").is_empty());
    }

    #[test]
    fn tokenizer_kind_parse_and_display() {
        assert_eq!("alphabetic".parse(), Ok(TokenizerKind::Alphabetic));
        assert_eq!("WORD".parse(), Ok(TokenizerKind::Word));
        assert!("nltk".parse::<TokenizerKind>().is_err());
        assert_eq!(TokenizerKind::Word.to_string(), "word");
        assert_eq!(TokenizerKind::default(), TokenizerKind::Alphabetic);
    }

    #[test]
    fn tokenizer_kind_builds_tokenizer() {
        let tokens = TokenizerKind::Word.tokenizer().tokenize("a.");
        assert_eq!(surfaces(&tokens), vec!["a", "."]);
    }
}
