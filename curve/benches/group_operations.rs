use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curve::{Group, Point, RandomScalar, Scalar};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn random_scalar(rng: &mut StdRng) -> Scalar {
    Scalar::try_random(rng).expect("infallible rng")
}

fn bench_point_add(c: &mut Criterion) {
    let g = Point::generator();
    let h = g.double();
    c.bench_function("point_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(Point::mul_generator(black_box(&scalar))))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = Point::mul_generator(&random_scalar(&mut rng));
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(p).scalar_mul(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul_basepoint(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = Point::mul_generator(&random_scalar(&mut rng));
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(Point::double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&p),
                black_box(&b),
            ))
        })
    });
}

fn bench_point_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bytes = Point::mul_generator(&random_scalar(&mut rng)).to_bytes();

    c.bench_function("point_decode", |bencher| {
        bencher.iter(|| black_box(Point::from_bytes(black_box(&bytes))))
    });
}

fn bench_scalar_from_bytes_with_clamping(c: &mut Criterion) {
    let bytes = [0xa5u8; 32];
    c.bench_function("scalar_from_bytes_with_clamping", |bencher| {
        bencher.iter(|| black_box(Scalar::from_bytes_with_clamping(black_box(&bytes))))
    });
}

criterion_group!(
    benches,
    bench_point_add,
    bench_mul_generator,
    bench_scalar_mul,
    bench_double_scalar_mul_basepoint,
    bench_point_decode,
    bench_scalar_from_bytes_with_clamping
);
criterion_main!(benches);
