use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_chart::{Gender, PillarConfig, four_pillars_lenient};
use saju_score::{
    FortuneCategory, FortuneConfig, PairContext, Partner, fortune, full_compatibility,
    rank_candidates,
};
use saju_time::CivilDate;

fn partner(y: i64, m: i64, d: i64, h: i64, gender: Gender) -> Partner {
    Partner::new(
        four_pillars_lenient(y, m, d, h, 0, &PillarConfig::default()),
        Some(gender),
    )
}

fn compatibility_bench(c: &mut Criterion) {
    let a = partner(1971, 11, 17, 4, Gender::Male);
    let b = partner(1976, 9, 16, 9, Gender::Female);
    let candidates: Vec<(usize, Partner)> = (0..256)
        .map(|i| {
            let i64i = i as i64;
            (i, partner(1950 + i64i % 50, 1 + i64i % 12, 1 + i64i % 28, i64i % 24, Gender::Female))
        })
        .collect();

    let mut group = c.benchmark_group("compatibility");
    group.bench_function("pair_context", |bn| {
        bn.iter(|| PairContext::new(black_box(&a), black_box(&b)))
    });
    group.bench_function("full_compatibility", |bn| {
        bn.iter(|| full_compatibility(black_box(&a), black_box(&b)))
    });
    group.bench_function("rank_256", |bn| {
        bn.iter(|| rank_candidates(black_box(&a), &candidates))
    });
    group.finish();
}

fn fortune_bench(c: &mut Criterion) {
    let pillars = PillarConfig::default();
    let natal = four_pillars_lenient(1971, 11, 17, 4, 0, &pillars);
    let cfg = FortuneConfig::default();
    let target = CivilDate::lenient(2024, 6, 15);

    let mut group = c.benchmark_group("fortune");
    group.bench_function("overall", |bn| {
        bn.iter(|| fortune(black_box(&natal), target, FortuneCategory::Overall, &cfg, &pillars))
    });
    group.finish();
}

criterion_group!(benches, compatibility_bench, fortune_bench);
criterion_main!(benches);
