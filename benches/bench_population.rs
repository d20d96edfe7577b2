use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genmax::{evolution::EvolutionOptions, population::Population};

fn sphere(x: &[f64]) -> f64 {
    -x.iter().map(|v| (v - 50.0).powi(2)).sum::<f64>()
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_iterate");
    for size in [10, 60, 500, 2000].iter() {
        let options = EvolutionOptions::builder()
            .dimensions(8)
            .population_size(*size)
            .seed(1)
            .build();
        let mut population = Population::new(sphere, &options).unwrap();

        group.bench_function(&format!("iterate_{}", size), |b| {
            b.iter(|| black_box(population.iterate().unwrap()))
        });
    }
    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_initialize");
    for dimensions in [2, 16, 64].iter() {
        let options = EvolutionOptions::builder()
            .dimensions(*dimensions)
            .population_size(60)
            .build();

        group.bench_function(&format!("initialize_{}d", dimensions), |b| {
            b.iter(|| Population::new(sphere, black_box(&options)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iterate, bench_initialize);
criterion_main!(benches);
