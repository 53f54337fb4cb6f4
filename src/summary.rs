//! Summary struct - the summarized text plus the figures callers report with it.

use crate::segment::segment;
use crate::summarizer::Summarizer;
use serde::{Deserialize, Serialize};

/// A summary and its derived statistics.
///
/// Lengths are counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The selected sentences, joined in original order
    pub summary: String,
    /// Character length of the original text
    pub original_length: usize,
    /// Character length of the summary
    pub summary_length: usize,
    /// Sentence count the caller asked for
    pub sentences_requested: i64,
    /// Sentence count of the original text
    pub sentences_in_original: usize,
}

impl Summary {
    /// Summarize `text` and collect the statistics
    pub fn create(summarizer: &Summarizer<'_>, text: &str, sentences_requested: i64) -> Self {
        let sentences = segment(text);
        let summary = summarizer.summarize_sentences(text, &sentences, sentences_requested);
        Self {
            original_length: text.chars().count(),
            summary_length: summary.chars().count(),
            sentences_requested,
            sentences_in_original: sentences.len(),
            summary,
        }
    }

    /// Check if the summary has any content
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// Summary length as a whole percentage of the original length
    pub fn compression_percent(&self) -> u32 {
        if self.original_length == 0 {
            return 0;
        }
        let ratio = self.summary_length as f64 / self.original_length as f64;
        (ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopWords;

    #[test]
    fn test_create_collects_statistics() {
        let stop_words = StopWords::english();
        let summarizer = Summarizer::new(&stop_words);
        let text = "Café owners brew coffee. Coffee lovers drink coffee. Rain falls.";
        let summary = Summary::create(&summarizer, text, 1);

        assert_eq!(summary.summary, "Coffee lovers drink coffee.");
        assert_eq!(summary.original_length, text.chars().count());
        assert_eq!(summary.summary_length, 27);
        assert_eq!(summary.sentences_requested, 1);
        assert_eq!(summary.sentences_in_original, 3);
        assert_eq!(summary.compression_percent(), 42);
    }

    #[test]
    fn test_short_text_statistics() {
        let stop_words = StopWords::english();
        let summarizer = Summarizer::new(&stop_words);
        let text = "Dr. Lee met J. R. Smith. They talked.";
        let summary = Summary::create(&summarizer, text, 2);

        assert_eq!(summary.summary, text);
        assert_eq!(summary.sentences_in_original, 2);
        assert_eq!(summary.compression_percent(), 100);
    }

    #[test]
    fn test_empty_summary() {
        let stop_words = StopWords::english();
        let summary = Summary::create(&Summarizer::new(&stop_words), "", 3);
        assert!(summary.is_empty());
        assert_eq!(summary.compression_percent(), 0);
        assert_eq!(summary.sentences_in_original, 0);
    }

    #[test]
    fn test_serializes_with_response_field_names() {
        let summary = Summary {
            summary: "A.".to_string(),
            original_length: 4,
            summary_length: 2,
            sentences_requested: 1,
            sentences_in_original: 2,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["summary"], "A.");
        assert_eq!(value["original_length"], 4);
        assert_eq!(value["sentences_in_original"], 2);
    }
}
