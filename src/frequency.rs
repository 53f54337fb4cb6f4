//! Word frequency table.

use crate::tokenize::Token;
use std::collections::HashMap;

/// Occurrence counts of content tokens across a whole document.
///
/// Counts are raw: no length normalization and no inverse document weighting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count every token in `tokens`
    pub fn build<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for `token`, 0 when absent
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of counts over `tokens`. Tokens missing from the table add nothing.
    pub fn score<'t, I>(&self, tokens: I) -> usize
    where
        I: IntoIterator<Item = &'t Token>,
    {
        tokens.into_iter().map(|token| self.get(&token.text)).sum()
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Most frequent tokens, highest count first, ties alphabetical.
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }
}

/// Build a [`FrequencyTable`] from a document's content tokens
pub fn build_frequency_table<I, S>(content_tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FrequencyTable::build(content_tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn test_counts() {
        let table = build_frequency_table(["care", "medicine", "care", "care"]);
        assert_eq!(table.get("care"), 3);
        assert_eq!(table.get("medicine"), 1);
        assert_eq!(table.get("absent"), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = build_frequency_table(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(table.score(&tokenize("anything at all")), 0);
    }

    #[test]
    fn test_score_ignores_missing_tokens() {
        let table = build_frequency_table(["care", "care", "medicine"]);
        // "the", "of" and "." are not in the table and contribute nothing
        let tokens = tokenize("The care of medicine.");
        assert_eq!(table.score(&tokens), 3);
    }

    #[test]
    fn test_top() {
        let table = build_frequency_table(["b", "a", "c", "c", "b", "c"]);
        assert_eq!(table.top(2), vec![("c", 3), ("b", 2)]);
        assert_eq!(table.top(10).len(), 3);
        let tied = build_frequency_table(["zeta", "alpha"]);
        assert_eq!(tied.top(1), vec![("alpha", 1)]);
    }
}
