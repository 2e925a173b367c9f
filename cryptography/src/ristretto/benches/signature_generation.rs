use criterion::{criterion_group, BatchSize, Criterion};
use curvesig_cryptography::{engine::KeyBytes, KeyEngine, KEY_LENGTH};
use rand::{thread_rng, Rng};
use std::hint::black_box;

fn benchmark_signature_generation(c: &mut Criterion) {
    let engine = KeyEngine::new();
    for msg_len in [0, 32, 1024] {
        let mut msg = vec![0u8; msg_len];
        thread_rng().fill(msg.as_mut_slice());
        c.bench_function(&format!("{}/msg_len={}", module_path!(), msg_len), |b| {
            b.iter_batched(
                || {
                    let keypair = KeyEngine::new().random_keypair().unwrap();
                    let mut private: KeyBytes = [0u8; KEY_LENGTH];
                    private.copy_from_slice(keypair.private_key().as_ref());
                    private
                },
                |private| black_box(engine.sign(&private, &msg).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_generation
}
