use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ziwei_base::{BirthDate, BirthInput, Gender, TimeSlot};
use ziwei_chart::{cast, generate_chart};

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::new(BirthDate::new(2024, 5, 1), TimeSlot::Wu, Gender::Male);

    let mut group = c.benchmark_group("chart_generation");
    group.bench_function("generate_chart", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| generate_chart(black_box(&input), &mut rng))
    });
    group.bench_function("cast", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| cast(black_box(&input), &mut rng))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
