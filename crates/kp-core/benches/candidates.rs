use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kp_core::vocab::{truncate, Vocabulary};

/// A few thousand synthetic German-looking terms sharing common prefixes.
fn bench_vocab() -> Vocabulary {
    let stems = [
        "haus", "hand", "zeit", "welt", "wald", "stadt", "liebe", "leben", "arbeit", "abend",
    ];
    let suffixes = ["", "e", "en", "er", "es", "ung", "lich", "chen", "heit", "keit"];
    let mut words = Vec::new();
    for stem in stems {
        for (i, suffix) in suffixes.iter().enumerate() {
            for n in 0..40 {
                let word = format!("{stem}{suffix}{n}");
                if i % 2 == 0 {
                    words.push(word.to_uppercase());
                }
                words.push(word);
            }
        }
    }
    Vocabulary::build(words)
}

fn bench_query(c: &mut Criterion) {
    let vocab = bench_vocab();
    let mut group = c.benchmark_group("query_top3");
    for prefix in ["hau", "stadt", "zzz"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), prefix, |b, p| {
            b.iter(|| truncate(vocab.query(p, true), 3))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let terms: Vec<String> = bench_vocab().terms().to_vec();
    c.bench_function("build", |b| b.iter(|| Vocabulary::build(terms.iter().cloned())));
}

criterion_group!(benches, bench_query, bench_build);
criterion_main!(benches);
