//! English stop-word set.
//!
//! The set is process-wide and read-only. It is built once by [`init`] before
//! any summarization runs, and [`global`] refuses to hand out a set that was
//! never initialized.

use std::collections::HashSet;
use std::sync::OnceLock;
use stop_words::LANGUAGE;
use thiserror::Error;
use tracing::{debug, warn};

static GLOBAL: OnceLock<StopWords> = OnceLock::new();

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StopWordsError {
    #[error("stop-word set has not been initialized; call stopwords::init first")]
    NotInitialized,
    #[error("stop-word set is empty")]
    Empty,
}

/// A set of lowercase words excluded from frequency accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The NLTK English set.
    pub fn english() -> Self {
        Self {
            words: stop_words::get(LANGUAGE::English)
                .iter()
                .map(|w| normalize(w))
                .collect(),
        }
    }

    /// Build a set from a custom list. An empty list is rejected.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Result<Self, StopWordsError> {
        let words: HashSet<String> = words
            .iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(StopWordsError::Empty);
        }
        Ok(Self { words })
    }

    /// Merge additional words into the set
    pub fn with_extra<S: AsRef<str>>(mut self, extra: &[S]) -> Self {
        for word in extra {
            let word = normalize(word.as_ref());
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
        self
    }

    /// Check membership of an already-lowercased token
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('\u{2019}', "'")
}

/// Initialize the process-wide set from the English list plus `extra`.
///
/// The first call wins. Later calls return the existing set and log a warning
/// if they asked for a different one.
pub fn init<S: AsRef<str>>(extra: &[S]) -> Result<&'static StopWords, StopWordsError> {
    let requested = StopWords::english().with_extra(extra);
    if requested.is_empty() {
        return Err(StopWordsError::Empty);
    }

    let mut fresh = false;
    let set = GLOBAL.get_or_init(|| {
        fresh = true;
        requested.clone()
    });

    if fresh {
        debug!(words = set.len(), "stop-word set initialized");
    } else if *set != requested {
        warn!(
            words = set.len(),
            "stop-word set already initialized; ignoring different configuration"
        );
    }
    Ok(set)
}

/// The process-wide set, if [`init`] has run.
pub fn global() -> Result<&'static StopWords, StopWordsError> {
    let set = GLOBAL.get().ok_or(StopWordsError::NotInitialized)?;
    if set.is_empty() {
        return Err(StopWordsError::Empty);
    }
    Ok(set)
}
