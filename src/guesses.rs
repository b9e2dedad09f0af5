use std::collections::BTreeMap;

/// Guesses keyed by author. A later guess from the same author replaces the
/// earlier one.
#[derive(Debug, Default, Clone)]
pub struct Guesses {
    by_author: BTreeMap<String, i64>,
}

impl Guesses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess, returning the author's previous guess if there was one.
    pub fn record(&mut self, author: impl Into<String>, value: i64) -> Option<i64> {
        self.by_author.insert(author.into(), value)
    }

    pub fn get(&self, author: &str) -> Option<i64> {
        self.by_author.get(author).copied()
    }

    pub fn len(&self) -> usize {
        self.by_author.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_author.is_empty()
    }

    /// All guesses, lowest value first. Equal values keep author order.
    pub fn sorted(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> = self
            .by_author
            .iter()
            .map(|(author, value)| (author.as_str(), *value))
            .collect();
        entries.sort_by_key(|&(_, value)| value);
        entries
    }
}
