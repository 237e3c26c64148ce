use std::path::Path;
use std::process;

use kp_core::corpus::CorpusFormat;
use kp_core::settings::settings;
use kp_core::vocab::{truncate, Vocabulary};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Up to `limit` vocabulary terms starting with `prefix`, in corpus order.
pub fn matches(vocab: &Vocabulary, prefix: &str, limit: usize) -> Vec<String> {
    truncate(
        vocab.query(prefix, settings().completion.case_insensitive),
        limit,
    )
}

pub fn query(corpus: &str, format: CorpusFormat, prefix: &str, limit: usize) {
    let vocab = die!(
        Vocabulary::load(Path::new(corpus), format),
        "Error loading corpus {corpus}: {}"
    );
    eprintln!("Vocabulary: {} terms", vocab.len());

    let hits = matches(&vocab, prefix, limit);
    if hits.is_empty() {
        eprintln!("No terms start with {prefix:?}");
        return;
    }
    for (i, term) in hits.iter().enumerate() {
        println!("{:>3}  {term}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_respects_limit_and_order() {
        let vocab = Vocabulary::build(["Haus", "Hund", "Hausaufgabe", "Haustür", "hausen"]);
        assert_eq!(matches(&vocab, "Hau", 2), vec!["Haus", "Hausaufgabe"]);
        assert_eq!(
            matches(&vocab, "hau", 10),
            vec!["Haus", "Hausaufgabe", "Haustür", "hausen"]
        );
    }

    #[test]
    fn matches_empty_when_nothing_fits() {
        let vocab = Vocabulary::build(["Haus"]);
        assert!(matches(&vocab, "xyz", 3).is_empty());
    }
}
