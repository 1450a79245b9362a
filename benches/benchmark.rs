use criterion::{criterion_group, criterion_main, Criterion};
use term_doc_vectorizer::{
    build_matrix, collapse_duplicates, pipeline, Config, Corpus, CountVectorizer, Document,
    DocumentId,
};

const WORDS: &[&str] = &[
    "river", "stone", "market", "signal", "garden", "engine", "winter", "harbor", "lantern",
    "orbit", "meadow", "copper", "thunder", "valley", "archive", "compass",
];

/// Deterministic synthetic corpus: `topics` folders of `per_topic` documents.
fn synthetic_corpus(topics: usize, per_topic: usize, words_per_doc: usize) -> Corpus {
    let mut documents = Vec::new();
    let mut seed = 0x2545_f491_u64;
    for t in 0..topics {
        for d in 0..per_topic {
            let mut text = String::new();
            for _ in 0..words_per_doc {
                seed ^= seed << 13;
                seed ^= seed >> 7;
                seed ^= seed << 17;
                text.push_str(WORDS[(seed % WORDS.len() as u64) as usize]);
                text.push_str(if seed % 11 == 0 { ". " } else { " " });
            }
            documents.push(Document::new(
                DocumentId::new(format!("topic{t}"), format!("{d}.txt")),
                text,
            ));
        }
    }
    Corpus::new("bench", documents)
}

fn matrix_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(4, 100, 400);

    c.bench_function("fit_and_vectorize", |b| {
        b.iter(|| {
            let vectorizer = CountVectorizer::fit(&corpus, None).unwrap();
            vectorizer.transform(&corpus)
        });
    });

    let vectors = CountVectorizer::fit(&corpus, None).unwrap().transform(&corpus);
    c.bench_function("build_and_collapse", |b| {
        b.iter(|| collapse_duplicates(&build_matrix(&vectors).unwrap()));
    });

    let config = Config::new("bench", "unused.txt").with_tfidf(true).with_svd(8);
    c.bench_function("tfidf_svd", |b| {
        b.iter(|| pipeline::build(&corpus, &config).unwrap());
    });
}

criterion_group!(benches, matrix_benchmark);
criterion_main!(benches);
