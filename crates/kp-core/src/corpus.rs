//! Corpus sources for the candidate vocabulary.
//!
//! The study uses a CoNLL-09 treebank export (one token per row, tab
//! separated, blank line between sentences). Plain whitespace-separated
//! word lists are accepted as well.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// Tab-separated rows; the word form lives in `word_column` (zero-based).
    Conll { word_column: usize },
    /// Whitespace-separated tokens, any number per line.
    Plain,
}

/// Failure to read or parse the corpus. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corpus line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("corpus contains no words")]
    Empty,
}

/// Read all word tokens from `path`, in corpus order (duplicates kept).
pub fn load_words(path: &Path, format: CorpusFormat) -> Result<Vec<String>, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_words(BufReader::new(file), format).map_err(|e| match e {
        CorpusError::Io { source, .. } => CorpusError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    debug!(path = %path.display(), tokens = words.len(), "corpus loaded");
    Ok(words)
}

/// Parse word tokens from any buffered reader.
pub fn parse_words<R: BufRead>(reader: R, format: CorpusFormat) -> Result<Vec<String>, CorpusError> {
    let mut words = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CorpusError::Io {
            path: PathBuf::new(),
            source,
        })?;
        let line_no = idx + 1;
        match format {
            CorpusFormat::Conll { word_column } => {
                let trimmed = line.trim_end_matches(['\r', '\n']);
                if trimmed.trim().is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                let Some(word) = trimmed.split('\t').nth(word_column) else {
                    return Err(CorpusError::Parse {
                        line: line_no,
                        reason: format!("expected at least {} tab-separated columns", word_column + 1),
                    });
                };
                let word = word.trim();
                if word.is_empty() {
                    return Err(CorpusError::Parse {
                        line: line_no,
                        reason: format!("empty word form in column {word_column}"),
                    });
                }
                words.push(word.to_string());
            }
            CorpusFormat::Plain => {
                words.extend(line.split_whitespace().map(str::to_string));
            }
        }
    }
    if words.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(words)
}
