//! Reference-text segmentation: the task text split into sentences and
//! words, used to name "the word/sentence currently being typed".

use std::sync::OnceLock;

use regex::Regex;
use tracing::warn;

use crate::unicode::WORD_TRAILING_PUNCTUATION;


/// Sentence end candidate: `.` or `?` followed by one whitespace char.
fn boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.?]\s").expect("boundary pattern is valid"))
}

/// Dotted abbreviation such as `h.D.` in "Ph.D." or `S.A.`.
fn dotted_abbrev_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w\.\w.$").expect("abbreviation pattern is valid"))
}

/// Title abbreviation such as `Mr.`, `Jr.`, `Dr.`.
fn title_abbrev_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z][a-z]\.$").expect("title pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    /// Whitespace-separated words, trailing `,;!?.` stripped.
    pub words: Vec<String>,
}

/// The task text as an ordered list of sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceText {
    full: String,
    sentences: Vec<Sentence>,
}

impl ReferenceText {
    pub fn split(text: &str) -> Self {
        let sentences = split_sentences(text)
            .into_iter()
            .map(|s| Sentence {
                words: split_words(s),
                text: s.to_string(),
            })
            .collect();
        Self {
            full: text.to_string(),
            sentences,
        }
    }

    pub fn full_text(&self) -> &str {
        &self.full
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Sentence at `index`, or `None` past the end of the text.
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        let count = self.sentences.len();
        if index >= count {
            warn!(index, count, "sentence index out of range");
            return None;
        }
        Some(&self.sentences[index])
    }

    /// Word `word_index` of sentence `sentence_index`, or `None` past the end.
    pub fn word(&self, sentence_index: usize, word_index: usize) -> Option<&str> {
        let sentence = self.sentence(sentence_index)?;
        let count = sentence.words.len();
        if word_index >= count {
            warn!(sentence_index, word_index, count, "word index out of range");
            return None;
        }
        Some(&sentence.words[word_index])
    }
}

/// Split on the whitespace that follows `.` or `?`, except after
/// abbreviations like "Mr." or "Ph.D.".
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in boundary_re().find_iter(text) {
        // The whitespace char is everything after the one-byte terminator.
        let ws_start = m.start() + 1;
        if is_abbreviation(&text[..ws_start]) {
            continue;
        }
        sentences.push(&text[start..ws_start]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_abbreviation(before: &str) -> bool {
    let tail: Vec<char> = before.chars().rev().take(4).collect();
    let last = |n: usize| -> Option<String> {
        (tail.len() >= n).then(|| tail[..n].iter().rev().collect())
    };
    last(4).is_some_and(|s| dotted_abbrev_re().is_match(&s))
        || last(3).is_some_and(|s| title_abbrev_re().is_match(&s))
}

pub fn split_words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|w| w.trim_end_matches(WORD_TRAILING_PUNCTUATION).to_string())
        .collect()
}
