use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sss::{SecretSharer, ShamirSecretSharing};

fn shamir_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("shamir");
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    for (parties, threshold) in [(5, 3), (32, 16), (64, 48)] {
        let scheme = ShamirSecretSharing::new(parties, threshold).unwrap();
        let shares = scheme.generate_shares(1234, &mut rng).unwrap();

        group.bench_function(format!("generate_shares/{threshold}-of-{parties}"), |b| {
            b.iter(|| scheme.generate_shares(1234, &mut rng).unwrap())
        });

        group.bench_function(format!("reconstruct/{threshold}-of-{parties}"), |b| {
            b.iter(|| scheme.reconstruct(&shares[..threshold]).unwrap())
        });
    }

    group.finish();
}

criterion_group!(shamir, shamir_benchmark);
criterion_main!(shamir);
