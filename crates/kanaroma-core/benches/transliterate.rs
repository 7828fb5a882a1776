use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kanaroma_core::romaji::kata_to_romaji;
use kanaroma_core::unicode::to_katakana;
use kanaroma_core::MoraMap;

const NAMES: &[&str] = &[
    "タナカ",
    "やまだ たろう",
    "ｽｽﾞｷ ｲﾁﾛｳ",
    "シンイチ",
    "マッチャ",
    "フォード・モーター",
];

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for name in NAMES {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| to_katakana(name))
        });
    }
    group.finish();
}

fn bench_transliterate(c: &mut Criterion) {
    let map = MoraMap::global();
    let mut group = c.benchmark_group("transliterate");
    for name in NAMES {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| kata_to_romaji(name, map))
        });
    }
    group.finish();

    let column: Vec<String> = NAMES.iter().cycle().take(1000).map(|s| s.to_string()).collect();
    c.bench_function("transliterate_column_1000", |b| {
        b.iter(|| {
            column
                .iter()
                .map(|s| kata_to_romaji(s, map))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_normalize, bench_transliterate);
criterion_main!(benches);
