use std::fs;
use std::process;

use serde::Serialize;

use kp_core::segment::ReferenceText;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, Serialize)]
struct SentenceOut<'a> {
    index: usize,
    text: &'a str,
    words: &'a [String],
}

fn sentences_json(reference: &ReferenceText) -> serde_json::Result<String> {
    let out: Vec<SentenceOut> = reference
        .sentences()
        .iter()
        .enumerate()
        .map(|(index, s)| SentenceOut {
            index,
            text: &s.text,
            words: &s.words,
        })
        .collect();
    serde_json::to_string_pretty(&out)
}

pub fn split(text_file: &str, json: bool) {
    let text = die!(fs::read_to_string(text_file), "Error reading {text_file}: {}");
    let reference = ReferenceText::split(&text);

    if json {
        println!("{}", die!(sentences_json(&reference), "Error: {}"));
        return;
    }

    for (i, s) in reference.sentences().iter().enumerate() {
        println!("[{i}] {}", s.text);
        println!("    {}", s.words.join(" | "));
    }
    eprintln!(
        "{} sentences, {} words",
        reference.sentence_count(),
        reference
            .sentences()
            .iter()
            .map(|s| s.words.len())
            .sum::<usize>()
    );
}
