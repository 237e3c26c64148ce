//! Candidate index: the deduplicated, ordered vocabulary answering prefix
//! queries for the completion popup.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::corpus::{self, CorpusError, CorpusFormat};


/// Ordered set of distinct terms, immutable after construction.
///
/// Terms keep the position of their first occurrence in the corpus, which
/// is also the only ranking applied to query results.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    /// Lowercase form of `terms[i]`, for case-insensitive matching.
    folded: Vec<String>,
    members: HashSet<String>,
}

impl Vocabulary {
    /// Build from corpus tokens, keeping the first occurrence of each term.
    pub fn build<I, S>(corpus_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut members = HashSet::new();
        let mut terms = Vec::new();
        let mut total = 0usize;
        for word in corpus_words {
            total += 1;
            let word = word.into();
            if members.contains(&word) {
                continue;
            }
            members.insert(word.clone());
            terms.push(word);
        }
        let folded = terms.iter().map(|t| t.to_lowercase()).collect();
        debug!(tokens = total, terms = terms.len(), "vocabulary built");
        Self {
            terms,
            folded,
            members,
        }
    }

    /// Read a corpus file and build the vocabulary from its tokens.
    pub fn load(path: &Path, format: CorpusFormat) -> Result<Self, CorpusError> {
        let words = corpus::load_words(path, format)?;
        Ok(Self::build(words))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.members.contains(term)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms starting with `prefix`, in vocabulary order.
    ///
    /// The iterator is lazy and finite; call `query` again to restart it.
    pub fn query<'a>(&'a self, prefix: &str, case_insensitive: bool) -> Query<'a> {
        let needle = if case_insensitive {
            prefix.to_lowercase()
        } else {
            prefix.to_string()
        };
        Query {
            vocab: self,
            needle,
            case_insensitive,
            pos: 0,
        }
    }
}

/// Lazy prefix scan over a [`Vocabulary`].
pub struct Query<'a> {
    vocab: &'a Vocabulary,
    needle: String,
    case_insensitive: bool,
    pos: usize,
}

impl<'a> Iterator for Query<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.vocab.terms.len() {
            let i = self.pos;
            self.pos += 1;
            let haystack = if self.case_insensitive {
                &self.vocab.folded[i]
            } else {
                &self.vocab.terms[i]
            };
            if haystack.starts_with(&self.needle) {
                return Some(&self.vocab.terms[i]);
            }
        }
        None
    }
}

/// Take at most `k` candidates, preserving order.
pub fn truncate<'a, I>(candidates: I, k: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates.into_iter().take(k).map(str::to_string).collect()
}
