use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::{Affine, BaseField, RandomScalar, Scalar};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_element(rng: &mut StdRng) -> BaseField {
    BaseField::new(Scalar::random(rng).value().clone())
}

fn bench_base_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_element(&mut rng);
    let b = random_element(&mut rng);
    c.bench_function("base_mul", |bencher| {
        bencher.iter(|| black_box(black_box(&a) * black_box(&b)))
    });
}

fn bench_base_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_element(&mut rng);
    c.bench_function("base_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(&a).inverse()))
    });
}

fn bench_base_sqrt(c: &mut Criterion) {
    let g = Affine::generator();
    let y2 = g.y().square();
    c.bench_function("base_sqrt", |bencher| {
        bencher.iter(|| black_box(black_box(&y2).sqrt(false)))
    });
}

fn bench_scalar_mod_order(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);
    let product = &a * &b;
    c.bench_function("scalar_mod_order", |bencher| {
        bencher.iter(|| black_box(black_box(&product).mod_order()))
    });
}

criterion_group!(
    benches,
    bench_base_mul,
    bench_base_inverse,
    bench_base_sqrt,
    bench_scalar_mod_order
);
criterion_main!(benches);
