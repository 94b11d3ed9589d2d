use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_base::{
    AyanamsaStandard, Varga, formula_ayanamsa_deg, resolve, varga_placement, vimshottari_timeline,
};

const BIRTH_JD: f64 = 2_448_026.708_333;

fn bench_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("vimshottari");
    for depth in 1..=3u8 {
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| vimshottari_timeline(black_box(123.456), black_box(BIRTH_JD), depth))
        });
    }
    group.finish();
}

fn bench_placement(c: &mut Criterion) {
    c.bench_function("resolve", |b| b.iter(|| resolve(black_box(271.83))));
    c.bench_function("navamsa", |b| {
        b.iter(|| varga_placement(Varga::D9, black_box(271.83)))
    });
    c.bench_function("true_chitra_formula", |b| {
        b.iter(|| formula_ayanamsa_deg(AyanamsaStandard::TrueChitra, black_box(BIRTH_JD)))
    });
}

criterion_group!(benches, bench_timeline, bench_placement);
criterion_main!(benches);
