//! Word tokenization and normalization.
//!
//! Words follow Unicode word boundaries, so internal apostrophes stay inside
//! them (`don't`); words split at a hyphen are joined back (`top-notch`).
//! Every token is lowercased. Adjacent non-word segments form a single
//! punctuation token.

use crate::stopwords::StopWords;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
}

/// A normalized token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    /// Content tokens are words outside the stop-word set.
    pub fn is_content(&self, stop_words: &StopWords) -> bool {
        self.kind == TokenKind::Word && !stop_words.contains(&self.text)
    }
}

/// Tokenize `s` into every word and punctuation token, in order.
///
/// This is the variant used for scoring: stop-words and punctuation are kept
/// and simply never match the frequency table.
pub fn tokenize(s: &str) -> Vec<Token> {
    let mut segments = s.split_word_bounds().peekable();
    let mut tokens: Vec<Token> = Vec::new();
    let mut touching = false;

    while let Some(segment) = segments.next() {
        if segment.chars().all(char::is_whitespace) {
            touching = false;
            continue;
        }

        if is_word(segment) {
            let mut text = normalize_word(segment);
            while segments.peek() == Some(&"-") {
                let mut ahead = segments.clone();
                ahead.next();
                match ahead.next() {
                    Some(next) if is_word(next) => {
                        text.push('-');
                        text.push_str(&normalize_word(next));
                        segments = ahead;
                    }
                    _ => break,
                }
            }
            tokens.push(Token {
                text,
                kind: TokenKind::Word,
            });
        } else {
            match tokens.last_mut() {
                Some(last) if touching && last.kind == TokenKind::Punctuation => {
                    last.text.push_str(segment);
                }
                _ => tokens.push(Token {
                    text: segment.to_string(),
                    kind: TokenKind::Punctuation,
                }),
            }
        }
        touching = true;
    }

    tokens
}

/// Tokenize `s` keeping only content tokens.
///
/// This is the variant used to build the frequency table.
pub fn content_tokens(s: &str, stop_words: &StopWords) -> Vec<String> {
    tokenize(s)
        .into_iter()
        .filter(|token| token.is_content(stop_words))
        .map(|token| token.text)
        .collect()
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn normalize_word(segment: &str) -> String {
    segment.to_lowercase().replace('\u{2019}', "'")
}
