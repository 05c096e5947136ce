use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_chart::{
    PhaseBalance, PillarConfig, RoleProfile, day_pillar, four_pillars, four_pillars_lenient,
};
use saju_time::{CivilDate, CivilDateTime};

fn pillar_bench(c: &mut Criterion) {
    let cfg = PillarConfig::default();
    let dt = CivilDateTime::lenient(1971, 11, 17, 4, 0);

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(dt), &cfg))
    });
    group.bench_function("four_pillars_lenient_overflow", |b| {
        b.iter(|| four_pillars_lenient(black_box(2023), 14, 32, 25, 61, &cfg))
    });
    group.bench_function("day_pillar", |b| {
        let d = CivilDate::lenient(1976, 9, 16);
        b.iter(|| day_pillar(black_box(d), &cfg))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let chart = four_pillars(
        CivilDateTime::lenient(1976, 9, 16, 9, 40),
        &PillarConfig::default(),
    );

    let mut group = c.benchmark_group("analysis");
    group.bench_function("phase_balance", |b| {
        b.iter(|| PhaseBalance::from_chart(black_box(&chart)))
    });
    group.bench_function("role_profile", |b| {
        b.iter(|| RoleProfile::from_chart(black_box(&chart)))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, analysis_bench);
criterion_main!(benches);
