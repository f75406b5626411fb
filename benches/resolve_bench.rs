use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use kuruma::{Engine, RuleSet, StaticReference};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn engine() -> Engine<StaticReference, RuleSet> {
    Engine::builtin().as_of(test_date())
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_builtin", |b| {
        b.iter(|| black_box(engine()));
    });
}

fn bench_vin_resolution(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("resolve_vin", |b| {
        b.iter(|| black_box(engine.resolve_identity(black_box("JN1CV6AP4FM123456"))));
    });
}

fn bench_alias_resolution(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("resolve_alias", |b| {
        b.iter(|| black_box(engine.resolve_identity(black_box("r32"))));
    });
}

fn bench_partial_extraction(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("resolve_partial", |b| {
        b.iter(|| black_box(engine.resolve_identity(black_box("1995 nissan skyline gt-r"))));
    });
}

fn bench_full_assessment(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("resolve_and_infer_all_countries", |b| {
        b.iter(|| black_box(engine.resolve_and_infer(black_box("r32"), &[])));
    });
}

fn bench_unresolved(c: &mut Criterion) {
    let engine = engine();
    c.bench_function("resolve_unresolvable", |b| {
        b.iter(|| black_box(engine.resolve_and_infer(black_box("blue car"), &["US"])));
    });
}

criterion_group!(
    benches,
    bench_engine_construction,
    bench_vin_resolution,
    bench_alias_resolution,
    bench_partial_extraction,
    bench_full_assessment,
    bench_unresolved,
);
criterion_main!(benches);
