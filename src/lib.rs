//! # freqsum
//!
//! Extractive summarisation by word-frequency salience.
//!
//! ## How it works
//!
//! - **Segmentation**: the text is split into sentences
//! - **Frequency table**: content words (not stop-words, not punctuation) are counted
//!   across the whole document
//! - **Ranking**: each sentence scores the sum of its words' counts; the top N are kept
//!   and returned in their original order
//!
//! The stop-word set is process-wide and must be initialized with
//! [`stopwords::init`] before [`summarize`] is called.

pub mod api;
pub mod config;
pub mod demo;
pub mod frequency;
pub mod logging;
pub mod scraper;
pub mod segment;
pub mod source;
pub mod stopwords;
pub mod summarizer;
pub mod summary;
pub mod tokenize;

pub use api::{ApiError, RequestHandler, Response, SummarizeRequest};
pub use config::Config;
pub use frequency::{build_frequency_table, FrequencyTable};
pub use segment::{segment, Sentence};
pub use stopwords::StopWords;
pub use summarizer::{summarize, SummarizeError, Summarizer, DEFAULT_SENTENCES};
pub use summary::Summary;
pub use tokenize::{tokenize, Token, TokenKind};
