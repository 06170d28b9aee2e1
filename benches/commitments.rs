use ark_bls12_381::{Bls12_381, Fr, G1Projective};
use ark_ec::CurveGroup;
use ark_std::{test_rng, UniformRand};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pedersen_pok::{batch_prove, batch_verify_multi_vk, setup, SetupConfig};

fn random_basis(n: usize, rng: &mut impl ark_std::rand::RngCore) -> Vec<ark_bls12_381::G1Affine> {
    (0..n)
        .map(|_| G1Projective::rand(rng).into_affine())
        .collect()
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("pedersen_commit");
    let mut rng = test_rng();

    for log_size in [8, 10, 12].iter() {
        let size = 1usize << log_size;

        let basis = random_basis(size, &mut rng);
        let values: Vec<Fr> = (0..size).map(|_| Fr::rand(&mut rng)).collect();
        let (pks, _) = setup::<Bls12_381, _>(&[basis], &SetupConfig::default(), &mut rng).unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("n=2^{}", log_size)),
            &size,
            |b, _| {
                b.iter(|| black_box(pks[0].commit(black_box(&values)).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("pedersen_verify");
    let mut rng = test_rng();

    let size = 1usize << 10;
    let basis = random_basis(size, &mut rng);
    let values: Vec<Fr> = (0..size).map(|_| Fr::rand(&mut rng)).collect();
    let (pks, vk) = setup::<Bls12_381, _>(&[basis], &SetupConfig::default(), &mut rng).unwrap();
    let commitment = pks[0].commit(&values).unwrap();
    let proof = pks[0].prove_knowledge(&values).unwrap();

    group.bench_function("single", |b| {
        b.iter(|| vk.verify(black_box(&commitment), black_box(&proof)).unwrap());
    });
    group.finish();
}

fn bench_batch_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("pedersen_batch_verify");
    let mut rng = test_rng();

    for num_keys in [2, 8, 32].iter() {
        let bases: Vec<_> = (0..*num_keys).map(|_| random_basis(64, &mut rng)).collect();
        let values: Vec<Vec<Fr>> = (0..*num_keys)
            .map(|_| (0..64).map(|_| Fr::rand(&mut rng)).collect())
            .collect();
        let (pks, vk) = setup::<Bls12_381, _>(&bases, &SetupConfig::default(), &mut rng).unwrap();

        let commitments: Vec<_> = pks
            .iter()
            .zip(&values)
            .map(|(pk, v)| pk.commit(v).unwrap())
            .collect();
        let coeff = Fr::rand(&mut rng);
        let folded = batch_prove(&pks, &values, coeff).unwrap();
        let vks = vec![vk; *num_keys];

        group.throughput(Throughput::Elements(*num_keys as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("keys={}", num_keys)),
            num_keys,
            |b, _| {
                b.iter(|| {
                    batch_verify_multi_vk(
                        black_box(&vks),
                        black_box(&commitments),
                        black_box(&[folded]),
                        coeff,
                    )
                    .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_commit, bench_verify, bench_batch_verify);
criterion_main!(benches);
