#![allow(missing_docs)]
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use orient_core::math::Quat;

fn rotations(n: usize) -> Vec<Quat> {
    (0..n)
        .map(|i| {
            let t = i as f32;
            Quat::from_axis_angle(t.sin(), t.cos(), 0.5, t * 7.0)
        })
        .collect()
}

fn bench_multiply_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("quat_multiply_chain");
    for &n in &[1usize, 16, 256, 4_096] {
        let qs = rotations(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &qs, |b, qs| {
            b.iter(|| {
                qs.iter()
                    .fold(Quat::identity(), |acc, q| acc.multiply(black_box(q)))
            });
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let raw = Quat::new(0.1, 0.2, 0.3, 0.4).scaled(3.0);
    c.bench_function("quat_normalize_non_unit", |b| {
        b.iter(|| {
            let mut q = black_box(raw);
            q.normalize()
        });
    });
    c.bench_function("quat_normalize_degenerate", |b| {
        b.iter(|| {
            let mut q = black_box(Quat::identity().scaled(0.0));
            q.normalize()
        });
    });
}

fn bench_axis_angle(c: &mut Criterion) {
    c.bench_function("quat_from_axis_angle", |b| {
        b.iter(|| {
            Quat::from_axis_angle(black_box(0.3), black_box(-0.2), black_box(0.9), black_box(42.0))
        });
    });
}

fn bench_equality(c: &mut Criterion) {
    let a = Quat::from_axis_angle(0.0, 1.0, 0.0, 30.0);
    let b = Quat::from_axis_angle(0.0, 1.0, 0.0, 30.0001);
    c.bench_function("quat_tolerant_eq", |bench| {
        bench.iter(|| black_box(a) == black_box(b));
    });
}

criterion_group!(
    benches,
    bench_multiply_chain,
    bench_normalize,
    bench_axis_angle,
    bench_equality
);
criterion_main!(benches);
