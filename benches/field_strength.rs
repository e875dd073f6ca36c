use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use field_samples::fields::{ElectricFieldSample, MagneticFieldSample};

fn bench_field_strength(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_strength");
    let distances: Vec<f64> = (0..10_000).map(|i| i as f64 * 1.0e-3).collect();

    group.bench_function(BenchmarkId::new("coulomb", distances.len()), |b| {
        let mut sample = ElectricFieldSample::new(1.0e5, 10.9, 1.7e2);
        b.iter(|| {
            for &r in &distances {
                black_box(sample.calculate_field_strength(black_box(1.0e-6), r));
            }
        })
    });

    group.bench_function(BenchmarkId::new("ampere", distances.len()), |b| {
        let mut sample = MagneticFieldSample::new(2.5, 5.3, 7.1);
        b.iter(|| {
            for &r in &distances {
                black_box(sample.calculate_field_strength(black_box(10.0), r));
            }
        })
    });
    group.finish();
}

fn bench_sample_addition(c: &mut Criterion) {
    let a = ElectricFieldSample::new(1.0e5, 10.9, 1.7e2);
    let b = ElectricFieldSample::new(2.0, 3.0, 4.0);
    c.bench_function("electric_sample_add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });
}

criterion_group!(benches, bench_field_strength, bench_sample_addition);
criterion_main!(benches);
