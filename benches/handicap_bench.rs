use archerymath::classifications::{agb_outdoor_classification_scores, Category};
use archerymath::handicaps::{rating_range, HandicapTable, SchemeName, TableOptions};
use archerymath::rounds::builtin;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_score_for_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_for_round");
    for codename in ["wa1440_90", "york", "portsmouth", "wa_field_24_red_marked"] {
        let round = builtin().get(codename).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(codename), round, |b, round| {
            b.iter(|| {
                SchemeName::Agb
                    .scheme()
                    .score_for_round(black_box(42.0), round, None, true)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_handicap_from_score(c: &mut Criterion) {
    let round = builtin().get("wa720_70").unwrap();
    let mut group = c.benchmark_group("handicap_from_score");
    for name in SchemeName::ALL {
        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                name.scheme()
                    .handicap_from_score(black_box(500.0), round, true, None)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_table(c: &mut Criterion) {
    let rounds: Vec<_> = ["wa1440_90", "wa1440_70", "york", "hereford", "portsmouth"]
        .iter()
        .map(|codename| builtin().get(codename).unwrap().clone())
        .collect();
    let ratings = rating_range(0.0, 150.0, 1.0);
    c.bench_function("handicap_table_151x5", |b| {
        b.iter(|| {
            HandicapTable::new(
                SchemeName::Agb,
                black_box(&ratings),
                &rounds,
                TableOptions::default(),
            )
            .unwrap()
        })
    });
}

fn bench_classification(c: &mut Criterion) {
    let category = Category::parse("recurve", "female", "under18").unwrap();
    c.bench_function("outdoor_classification_scores", |b| {
        b.iter(|| agb_outdoor_classification_scores(black_box("wa1440_70"), category).unwrap())
    });
}

criterion_group!(
    benches,
    bench_score_for_round,
    bench_handicap_from_score,
    bench_table,
    bench_classification
);
criterion_main!(benches);
