pub mod config_ops;
pub mod query_ops;
pub mod replay_ops;
pub mod split_ops;

use kp_core::corpus::CorpusFormat;
use kp_core::settings::{settings, CorpusFormatName};

/// Corpus format from the command line, falling back to `[corpus]` settings.
pub fn resolve_format(explicit: Option<CorpusFormatName>) -> CorpusFormat {
    let corpus = &settings().corpus;
    match explicit {
        Some(CorpusFormatName::Conll) => CorpusFormat::Conll {
            word_column: corpus.word_column,
        },
        Some(CorpusFormatName::Plain) => CorpusFormat::Plain,
        None => corpus.corpus_format(),
    }
}
