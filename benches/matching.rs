use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use overlap::{
    Document, MatchConfig, Normalizer, ScorerKind, TokenizeConfig, compare_documents,
};

const WORDS: &[&str] = &[
    "river", "valley", "glacier", "stone", "water", "slowly", "carve", "over", "many", "years",
    "the", "of", "and", "mountain", "rain", "erosion", "sediment", "delta", "flood", "plain",
];

/// Pseudo-essay of `len` words; `shift` rotates the vocabulary so two
/// essays share runs without being identical.
fn essay(len: usize, shift: usize) -> String {
    (0..len)
        .map(|i| WORDS[(i * 7 + shift + i / 13) % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn corpus(docs: usize, len: usize) -> Vec<Document> {
    let cfg = TokenizeConfig::default();
    (0..docs)
        .map(|i| {
            Document::from_text(format!("doc{i}.txt"), &essay(len, i % 3), &cfg)
                .expect("bench document")
        })
        .collect()
}

fn scorer_bench(c: &mut Criterion) {
    let docs = corpus(2, 2_000);
    let normalizer = Arc::new(Normalizer::english());
    for kind in ScorerKind::ALL {
        let scorer = kind.build(false, &normalizer);
        c.bench_function(&format!("score_{kind}_2000_words"), |b| {
            b.iter(|| {
                let score = scorer
                    .score(black_box(docs[0].tokens()), black_box(docs[1].tokens()))
                    .expect("bench score");
                black_box(score);
            });
        });
    }
}

fn compare_bench(c: &mut Criterion) {
    let docs = corpus(8, 500);
    let normalizer = Arc::new(Normalizer::english());
    let scorer = ScorerKind::Ratio.build(false, &normalizer);

    for parallel in [false, true] {
        let cfg = MatchConfig::default().with_parallel(parallel);
        let label = if parallel { "parallel" } else { "sequential" };
        c.bench_function(&format!("compare_8_docs_{label}"), |b| {
            b.iter(|| {
                let report =
                    compare_documents(black_box(&docs), &cfg, scorer.as_ref()).expect("bench compare");
                black_box(report);
            });
        });
    }
}

criterion_group!(benches, scorer_bench, compare_bench);
criterion_main!(benches);
