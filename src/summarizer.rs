//! Frequency-salience sentence ranking and selection.
//!
//! A sentence's score is the sum, over every token in it, of that token's
//! count in the document-wide [`FrequencyTable`]. The table only holds content
//! tokens, so stop-words and punctuation are tokenized during scoring but
//! never add to it.

use crate::frequency::FrequencyTable;
use crate::segment::{segment, Sentence};
use crate::stopwords::{self, StopWords, StopWordsError};
use crate::tokenize::{content_tokens, tokenize};
use thiserror::Error;
use tracing::debug;

/// Sentence count used when a caller does not ask for one
pub const DEFAULT_SENTENCES: i64 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("summarizer is not ready: {0}")]
    NotReady(#[from] StopWordsError),
}

/// Salience score of one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceScore {
    pub index: usize,
    pub score: usize,
}

/// Extractive summarizer bound to a stop-word set.
#[derive(Debug, Clone, Copy)]
pub struct Summarizer<'s> {
    stop_words: &'s StopWords,
}

impl<'s> Summarizer<'s> {
    pub fn new(stop_words: &'s StopWords) -> Self {
        Self { stop_words }
    }

    /// Summarizer over the process-wide stop-word set.
    ///
    /// Fails if [`stopwords::init`] has not run.
    pub fn global() -> Result<Summarizer<'static>, SummarizeError> {
        Ok(Summarizer::new(stopwords::global()?))
    }

    /// Reduce `text` to its `num_sentences` most salient sentences, in
    /// original order, joined by single spaces.
    ///
    /// Empty text gives an empty string. Text with no more sentences than
    /// requested comes back unchanged. A non-positive count selects nothing.
    pub fn summarize(&self, text: &str, num_sentences: i64) -> String {
        self.summarize_sentences(text, &segment(text), num_sentences)
    }

    /// [`Summarizer::summarize`] over `sentences` already segmented from `text`.
    pub fn summarize_sentences(
        &self,
        text: &str,
        sentences: &[Sentence<'_>],
        num_sentences: i64,
    ) -> String {
        if text.is_empty() {
            return String::new();
        }

        if i64::try_from(sentences.len()).map_or(false, |n| n <= num_sentences) {
            return text.to_string();
        }

        let table = self.frequency_table(text);
        let scores = self.score_sentences(sentences, &table);
        let keep = usize::try_from(num_sentences).unwrap_or(0);
        let selected = select(&scores, keep);

        debug!(
            sentences = sentences.len(),
            distinct_words = table.len(),
            ?selected,
            "summarized"
        );

        selected
            .iter()
            .map(|&index| sentences[index].text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Frequency table over all content tokens of `text`
    pub fn frequency_table(&self, text: &str) -> FrequencyTable {
        FrequencyTable::build(content_tokens(text, self.stop_words))
    }

    /// Score every sentence against `table` using its full tokenization.
    pub fn score_sentences(
        &self,
        sentences: &[Sentence<'_>],
        table: &FrequencyTable,
    ) -> Vec<SentenceScore> {
        sentences
            .iter()
            .map(|sentence| SentenceScore {
                index: sentence.index,
                score: table.score(&tokenize(sentence.text)),
            })
            .collect()
    }
}

/// Pick the `n` highest-scoring sentences and return their indices in
/// ascending order.
///
/// The ranking sort is stable, so among equal scores the earlier sentence wins.
pub fn select(scores: &[SentenceScore], n: usize) -> Vec<usize> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let mut indices: Vec<usize> = ranked.iter().take(n).map(|s| s.index).collect();
    indices.sort_unstable();
    indices
}

/// Summarize with the process-wide stop-word set.
pub fn summarize(text: &str, num_sentences: i64) -> Result<String, SummarizeError> {
    Ok(Summarizer::global()?.summarize(text, num_sentences))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEDICAL: &str = "Doctors treat patients. Hospitals provide care. Medicine cures disease. \
                           Research finds treatments. Health improves lives.";

    fn summarize_en(text: &str, n: i64) -> String {
        let stop_words = StopWords::english();
        Summarizer::new(&stop_words).summarize(text, n)
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(summarize_en("", 3), "");
        assert_eq!(summarize_en("", 0), "");
        assert_eq!(summarize_en("", -4), "");
    }

    #[test]
    fn test_short_text_is_returned_unchanged() {
        let text = "  One sentence here.   Two   sentences there.\n";
        assert_eq!(summarize_en(text, 2), text);
        assert_eq!(summarize_en(text, 5), text);
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        // every sentence carries three distinct content words once
        assert_eq!(
            summarize_en(MEDICAL, 2),
            "Doctors treat patients. Hospitals provide care."
        );
    }

    #[test]
    fn test_selects_most_salient_in_original_order() {
        let text = "Cats sleep. Dogs bark loudly at cats. Birds sing. Cats and dogs chase birds.";
        // cats=3 dogs=2 birds=2 bark=1 loudly=1 sleep=1 sing=1 chase=1
        // scores: 0 -> 4, 1 -> 7, 2 -> 3, 3 -> 8
        assert_eq!(
            summarize_en(text, 2),
            "Dogs bark loudly at cats. Cats and dogs chase birds."
        );
        assert_eq!(summarize_en(text, 1), "Cats and dogs chase birds.");
    }

    #[test]
    fn test_zero_and_negative_counts_select_nothing() {
        assert_eq!(summarize_en(MEDICAL, 0), "");
        assert_eq!(summarize_en(MEDICAL, -1), "");
        assert_eq!(summarize_en("   ", -1), "");
    }

    #[test]
    fn test_stopwords_count_only_through_table() {
        let stop_words = StopWords::english();
        let summarizer = Summarizer::new(&stop_words);
        let text = "The the the the the. Data data.";
        let table = summarizer.frequency_table(text);
        assert_eq!(table.get("the"), 0);
        assert_eq!(table.get("data"), 2);

        let sentences = segment(text);
        let scores = summarizer.score_sentences(&sentences, &table);
        assert_eq!(
            scores,
            vec![
                SentenceScore { index: 0, score: 0 },
                SentenceScore { index: 1, score: 4 },
            ]
        );
    }

    #[test]
    fn test_summarize_sentences_reuses_segmentation() {
        let stop_words = StopWords::english();
        let summarizer = Summarizer::new(&stop_words);
        let text = "Cats sleep. Dogs bark loudly at cats. Birds sing. Cats and dogs chase birds.";
        let sentences = segment(text);

        assert_eq!(
            summarizer.summarize_sentences(text, &sentences, 2),
            summarizer.summarize(text, 2)
        );
        assert_eq!(summarizer.summarize_sentences(text, &sentences, 4), text);
        assert_eq!(summarizer.summarize_sentences("", &[], 1), "");
    }

    #[test]
    fn test_select_orders_by_index() {
        let scores = [
            SentenceScore { index: 0, score: 1 },
            SentenceScore { index: 1, score: 5 },
            SentenceScore { index: 2, score: 5 },
            SentenceScore { index: 3, score: 9 },
        ];
        assert_eq!(select(&scores, 2), vec![1, 3]);
        assert_eq!(select(&scores, 0), Vec::<usize>::new());
        assert_eq!(select(&scores, 10), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_custom_stop_words_change_ranking() {
        let text = "Alpha beta. Gamma gamma. Beta beta alpha.";
        let plain = StopWords::from_list(&["zzz"]).unwrap();
        let no_beta = StopWords::from_list(&["beta"]).unwrap();
        // alpha=2 beta=3 gamma=2 -> scores 5, 4, 8
        assert_eq!(Summarizer::new(&plain).summarize(text, 1), "Beta beta alpha.");
        // alpha=2 gamma=2 -> scores 2, 4, 2
        assert_eq!(Summarizer::new(&no_beta).summarize(text, 1), "Gamma gamma.");
    }
}
