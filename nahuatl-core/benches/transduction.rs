//! Throughput of the grapheme scanner and the per-orthography emitters

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nahuatl_core::{Orthography, Phoneme, Transducer};
use std::hint::black_box;

/// Generate a word list with the specified number of entries
fn generate_words(num_words: usize) -> Vec<String> {
    let words = vec![
        "calli",
        "cihuatl",
        "quetzalcoatl",
        "tlahtolli",
        "āmoxtli",
        "yōllōtl",
        "cuauhtli",
        "xochitl",
        "tèhuan",
        "kuali",
    ];

    words
        .iter()
        .cycle()
        .take(num_words)
        .map(|w| w.to_string())
        .collect()
}

fn benchmark_g2p(c: &mut Criterion) {
    let mut group = c.benchmark_group("g2p");
    let transducer = Transducer::new();

    for size in [10, 100, 1000].iter() {
        let words = generate_words(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    let _ = transducer.grapheme_to_phoneme(black_box(word));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_p2g(c: &mut Criterion) {
    let mut group = c.benchmark_group("p2g");
    let transducer = Transducer::new();

    let phonemes: Vec<Vec<Phoneme>> = generate_words(100)
        .iter()
        .filter_map(|w| transducer.grapheme_to_phoneme(w).ok())
        .map(|t| t.into_phonemes())
        .collect();

    for orthography in Orthography::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(orthography),
            &phonemes,
            |b, phonemes| {
                b.iter(|| {
                    for word in phonemes {
                        let _ = transducer.emit(black_box(word), orthography);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_g2p, benchmark_p2g);
criterion_main!(benches);
