use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nizk::{HashSuite, Nizk};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

fn message_and_stamp(rng: &mut StdRng) -> (Vec<u8>, Vec<u8>) {
    let mut message = vec![0u8; 4096];
    let mut stamp = vec![0u8; 1024];
    rng.fill_bytes(&mut message);
    rng.fill_bytes(&mut stamp);
    (message, stamp)
}

fn bench_fingerprint(c: &mut Criterion) {
    let mut group = c.benchmark_group("fingerprint");
    let mut rng = StdRng::seed_from_u64(42);
    let (message, _) = message_and_stamp(&mut rng);

    for suite in HashSuite::ALL {
        let zk = Nizk::new(suite);
        group.bench_with_input(BenchmarkId::from_parameter(suite), &message, |bencher, msg| {
            bencher.iter(|| black_box(zk.fingerprint(black_box(msg)).expect("fingerprint")))
        });
    }
    group.finish();
}

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("prove");
    let mut rng = StdRng::seed_from_u64(42);
    let (message, stamp) = message_and_stamp(&mut rng);

    for suite in HashSuite::ALL {
        let zk = Nizk::new(suite);
        group.bench_function(BenchmarkId::from_parameter(suite), |bencher| {
            bencher.iter(|| {
                let proof = zk
                    .prove_with_rng(&mut rng, black_box(&message), black_box(&stamp))
                    .expect("prove");
                black_box(proof);
            })
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("verify");
    let mut rng = StdRng::seed_from_u64(42);
    let (message, stamp) = message_and_stamp(&mut rng);

    for suite in HashSuite::ALL {
        let zk = Nizk::new(suite);
        let (proof, fingerprint) = zk
            .prove_with_rng(&mut rng, &message, &stamp)
            .expect("prove");
        let proof = proof.to_bytes();

        group.bench_function(BenchmarkId::from_parameter(suite), |bencher| {
            bencher.iter(|| {
                let ok = zk
                    .verify(
                        black_box(fingerprint.as_bytes()),
                        black_box(&stamp),
                        black_box(&proof),
                    )
                    .expect("verify");
                assert!(ok, "failed verification");
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fingerprint, bench_prove, bench_verify);
criterion_main!(benches);
