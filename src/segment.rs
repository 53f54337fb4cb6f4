//! Sentence segmentation.
//!
//! Splits English text after terminal punctuation that is followed by
//! whitespace or the end of the text. A period does not end a sentence when it
//! closes a known abbreviation or an initial inside a name, or when the next
//! word starts in lowercase.

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::ops::Range;

lazy_static! {
    /// Abbreviations (lowercase, without the final period) that never end a sentence.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        // titles
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "hon", "gov", "sen",
        "rep", "capt", "col", "gen", "lt", "sgt", "cmdr", "adm", "messrs",
        // latin and reference forms
        "e.g", "i.e", "vs", "cf", "al", "viz", "approx", "ca", "fig", "figs", "eq", "vol",
        "pp", "ch", "sec", "dept", "univ", "assn", "bros", "ft",
        // months
        "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .into_iter()
    .collect();
}

/// A sentence borrowed from its source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// 0-based position in the document
    pub index: usize,
    /// Sentence text with surrounding whitespace trimmed
    pub text: &'a str,
    /// Byte range of `text` within the document
    pub span: Range<usize>,
}

/// Split `text` into sentences in document order.
///
/// Empty or whitespace-only input yields no sentences. Any other input yields
/// at least one; trailing text without terminal punctuation becomes the last
/// sentence.
pub fn segment(text: &str) -> Vec<Sentence<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !is_terminal(c) {
            i += 1;
            continue;
        }

        // Absorb runs like "?!" or "..", then any closing quotes or brackets.
        let mut j = i + 1;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        let single_period = c == '.' && j == i + 1;
        while j < chars.len() && is_closing(chars[j].1) {
            j += 1;
        }

        let end = chars.get(j).map_or(text.len(), |&(p, _)| p);
        let at_gap = chars.get(j).map_or(true, |&(_, next)| next.is_whitespace());

        if at_gap && !(single_period && period_continues(text, start, pos, &chars[j..])) {
            push(&mut sentences, text, start..end);
            start = end;
        }
        i = j;
    }

    push(&mut sentences, text, start..text.len());
    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}

fn is_closing(c: char) -> bool {
    matches!(
        c,
        '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}' | '\u{00BB}'
    )
}

/// Whether the period at byte `period` sits inside a sentence rather than ending it.
fn period_continues(
    text: &str,
    sentence_start: usize,
    period: usize,
    rest: &[(usize, char)],
) -> bool {
    let mut words = text[sentence_start..period].rsplit(char::is_whitespace);
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    let previous = words.find(|w| !w.is_empty()).unwrap_or("");

    let next: String = rest
        .iter()
        .map(|&(_, c)| c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect();

    if !word.is_empty() && ABBREVIATIONS.contains(word.to_lowercase().as_str()) {
        return true;
    }

    // "J. R. Tolkien", "J. Smith" at the start of a sentence. The pronoun "I"
    // and letters like "vitamin C." or "Plan B." end sentences.
    if is_capital_letter(word) && word != "I" {
        let opens_sentence = previous.is_empty() && starts_uppercase(&next);
        if opens_sentence || is_initial(previous) || is_initial(&next) {
            return true;
        }
    }

    next.chars().next().is_some_and(char::is_lowercase)
}

fn is_capital_letter(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// A single capital letter followed by a period, like "R."
fn is_initial(word: &str) -> bool {
    word.strip_suffix('.').is_some_and(is_capital_letter)
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn push<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str, range: Range<usize>) {
    let raw = &text[range.clone()];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }

    let offset = range.start + (raw.len() - raw.trim_start().len());
    sentences.push(Sentence {
        index: sentences.len(),
        text: trimmed,
        span: offset..offset + trimmed.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        segment(text).iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(
            texts("Doctors treat patients. Hospitals provide care! Is it working? Yes."),
            vec![
                "Doctors treat patients.",
                "Hospitals provide care!",
                "Is it working?",
                "Yes."
            ]
        );
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_trailing_fragment_without_punctuation() {
        assert_eq!(
            texts("First sentence. and a fragment"),
            vec!["First sentence. and a fragment"]
        );
        assert_eq!(
            texts("First sentence. Then a fragment"),
            vec!["First sentence.", "Then a fragment"]
        );
        assert_eq!(texts("no punctuation at all"), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        assert_eq!(
            texts("Dr. Smith met Mr. Jones. They talked, e.g. about cells vs. germs."),
            vec![
                "Dr. Smith met Mr. Jones.",
                "They talked, e.g. about cells vs. germs."
            ]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            texts("The paper by J. R. Tolkien was read. It was long."),
            vec!["The paper by J. R. Tolkien was read.", "It was long."]
        );
    }

    #[test]
    fn test_initial_opening_a_sentence() {
        assert_eq!(
            texts("J. Smith wrote it. He left."),
            vec!["J. Smith wrote it.", "He left."]
        );
    }

    #[test]
    fn test_single_letters_ending_sentences() {
        assert_eq!(
            texts("Patients need vitamin C. Doctors prescribe it. So do I. Nurses agree."),
            vec![
                "Patients need vitamin C.",
                "Doctors prescribe it.",
                "So do I.",
                "Nurses agree."
            ]
        );
        assert_eq!(
            texts("It ended World War I. We chose Plan B. Then we left."),
            vec!["It ended World War I.", "We chose Plan B.", "Then we left."]
        );
    }

    #[test]
    fn test_decimals_and_inner_periods() {
        assert_eq!(
            texts("Pi is 3.14 roughly. See example.com for more."),
            vec!["Pi is 3.14 roughly.", "See example.com for more."]
        );
    }

    #[test]
    fn test_punctuation_runs_and_closers() {
        assert_eq!(
            texts("He asked \"why?\" She said nothing... Really?! Yes (mostly.) Done"),
            vec![
                "He asked \"why?\"",
                "She said nothing...",
                "Really?!",
                "Yes (mostly.)",
                "Done"
            ]
        );
    }

    #[test]
    fn test_indices_and_spans() {
        let text = "  One here.   Two there.\nThree everywhere.  ";
        let sentences = segment(text);
        assert_eq!(sentences.len(), 3);
        for (i, sentence) in sentences.iter().enumerate() {
            assert_eq!(sentence.index, i);
            assert_eq!(&text[sentence.span.clone()], sentence.text);
        }
        assert!(sentences.windows(2).all(|w| w[0].span.end <= w[1].span.start));
    }

    #[test]
    fn test_unicode_is_safe() {
        assert_eq!(
            texts("Ça va? Très bien! 日本語のテキスト。 Ünïcödé… Ende."),
            vec!["Ça va?", "Très bien!", "日本語のテキスト。 Ünïcödé…", "Ende."]
        );
        assert_eq!(texts("\u{2019}.\u{2026}"), vec!["\u{2019}.\u{2026}"]);
    }

    #[test]
    fn test_double_period_at_end() {
        let text = "Engineering matters. Technology advances technology..";
        assert_eq!(
            texts(text),
            vec!["Engineering matters.", "Technology advances technology.."]
        );
    }
}
