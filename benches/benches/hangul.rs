use criterion::{black_box, criterion_group, criterion_main, Criterion};
use icu_normalizer::DecomposingNormalizer;
use unicode_character_source::expansion::canonical_decomposition;
use unicode_character_source::expansion::hangul::{decompose_hangul, HANGUL_S_BASE, HANGUL_S_LAST};

mod group;

/// декомпозиция всех слогов хангыль: NFD через ICU и алгоритмическая
fn hangul(c: &mut Criterion)
{
    let mut group = c.benchmark_group("hangul");
    let normalizer = DecomposingNormalizer::new_nfd();

    group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

    group.bench_function("icu", |b| {
        b.iter(|| {
            (HANGUL_S_BASE ..= HANGUL_S_LAST)
                .map(|code| canonical_decomposition(black_box(code), &normalizer).len())
                .sum::<usize>()
        })
    });

    group.bench_function("algorithmic", |b| {
        b.iter(|| {
            (HANGUL_S_BASE ..= HANGUL_S_LAST)
                .filter_map(|code| decompose_hangul(black_box(code)))
                .map(|d| d.len())
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, hangul);
criterion_main!(benches);
