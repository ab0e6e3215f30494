//! An insertion-ordered token counter.
//!
//! Ranking the vocabulary needs a deterministic tie-break, so the counter keeps
//! tokens in the order they were first seen and sorts stably by count.

use indexmap::IndexMap;

use crate::Token;

/// Counts token occurrences, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    /// Occurrence count per token, in first-seen order.
    counts: IndexMap<Token, u64>,
}

impl Counter {
    /// Creates an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every token of a sequence.
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut counter = Self::new();
        for token in tokens {
            counter.add(token, 1);
        }
        counter
    }

    /// Adds `n` occurrences of `token`.
    pub fn add(&mut self, token: &Token, n: u64) {
        if let Some(count) = self.counts.get_mut(token) {
            *count += n;
        } else {
            self.counts.insert(token.clone(), n);
        }
    }

    /// Adds every count of `other`, visiting its tokens in their first-seen order.
    pub fn merge(&mut self, other: &Self) {
        for (token, count) in other.iter() {
            self.add(token, count);
        }
    }

    /// Occurrences of `token` (0 if never seen).
    pub fn get(&self, token: &Token) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns true if `token` has been counted.
    pub fn contains(&self, token: &Token) -> bool {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if nothing has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(t, &n)| (t, n))
    }

    /// Tokens ranked by descending count, ties kept in first-seen order.
    pub fn ranked(&self) -> Vec<(&Token, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(*w)).collect()
    }

    #[test]
    fn counts_and_total() {
        let toks = tokens(&["a", "b", "a", "c", "a"]);
        let counter = Counter::from_tokens(&toks);
        assert_eq!(counter.get(&Token::new("a")), 3);
        assert_eq!(counter.get(&Token::new("b")), 1);
        assert_eq!(counter.get(&Token::new("z")), 0);
        assert_eq!(counter.len(), 3);
        assert_eq!(counter.total(), 5);
    }

    #[test]
    fn ranked_ties_keep_first_seen_order() {
        let toks = tokens(&["x", "y", "z", "y", "x", "w"]);
        let counter = Counter::from_tokens(&toks);
        let ranked: Vec<_> = counter.ranked().into_iter().map(|(t, _)| t.surface()).collect();
        assert_eq!(ranked, vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn merge_appends_new_tokens_in_order() {
        let mut first = Counter::from_tokens(&tokens(&["b", "a"]));
        let second = Counter::from_tokens(&tokens(&["c", "a", "d"]));
        first.merge(&second);

        let order: Vec<_> = first.iter().map(|(t, _)| t.surface()).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
        assert_eq!(first.get(&Token::new("a")), 2);
    }

    #[test]
    fn repeated_counts_do_not_move_tokens() {
        let mut counter = Counter::new();
        counter.add(&Token::new("late"), 1);
        counter.add(&Token::new("early"), 1);
        counter.add(&Token::new("late"), 4);
        let order: Vec<_> = counter.iter().map(|(t, n)| (t.surface(), n)).collect();
        assert_eq!(order, vec![("late", 5), ("early", 1)]);
        assert!(!counter.is_empty());
        assert!(counter.contains(&Token::new("early")));
    }
}
