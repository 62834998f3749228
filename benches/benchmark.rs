use criterion::{black_box, criterion_group, criterion_main, Criterion};
use note_similarity::{tokenize_all, CollisionPolicy, Document, TFIDFVectorizer};

const WORDS: &[&str] = &[
    "the", "borrow", "checker", "don't", "garden", "it's", "tomato", "rust's", "compiler",
    "can't", "harvest", "memory", "soil", "thread", "won't", "seed", "lifetime", "water",
    "trait", "sun", "async", "leaf", "queue", "root",
];

// Deterministic synthetic notes, no network or disk access
fn synthetic_notes(count: usize, words_per_note: usize) -> Vec<Document> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    (0..count)
        .map(|i| {
            let text = (0..words_per_note)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    WORDS[(state % WORDS.len() as u64) as usize]
                })
                .collect::<Vec<_>>()
                .join(" ");
            Document::new(format!("notes/{i:04}.md"), text)
        })
        .collect()
}

fn similarity_benchmark(c: &mut Criterion) {
    let notes = synthetic_notes(200, 300);
    let texts: Vec<&str> = notes.iter().map(|d| d.text.as_str()).collect();

    c.bench_function("tokenize_all", |b| b.iter(|| tokenize_all(black_box(&texts))));

    c.bench_function("fit", |b| {
        b.iter(|| TFIDFVectorizer::<f64>::fit(black_box(&notes)))
    });

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::fit(&notes);
    c.bench_function("similarity_matrix", |b| {
        b.iter(|| vectorizer.similarity_matrix(CollisionPolicy::Overwrite))
    });

    let vectorizer_f32: TFIDFVectorizer<f32> = TFIDFVectorizer::fit(&notes);
    c.bench_function("similarity_matrix_f32", |b| {
        b.iter(|| vectorizer_f32.similarity_matrix(CollisionPolicy::Overwrite))
    });
}

criterion_group!(benches, similarity_benchmark);
criterion_main!(benches);
