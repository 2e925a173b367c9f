use criterion::{criterion_group, BatchSize, Criterion};
use curvesig_cryptography::{engine::KeyBytes, KeyEngine, KEY_LENGTH};
use rand::{thread_rng, Rng};
use std::hint::black_box;

fn benchmark_signature_verification(c: &mut Criterion) {
    let engine = KeyEngine::new();
    let mut msg = [0u8; 32];
    thread_rng().fill(&mut msg);
    c.bench_function(&format!("{}/msg_len={}", module_path!(), msg.len()), |b| {
        b.iter_batched(
            || {
                let keypair = KeyEngine::new().random_keypair().unwrap();
                let mut private: KeyBytes = [0u8; KEY_LENGTH];
                private.copy_from_slice(keypair.private_key().as_ref());
                let mut public: KeyBytes = [0u8; KEY_LENGTH];
                public.copy_from_slice(keypair.public_key().as_ref());
                let (r, s) = engine.sign(&private, &msg).unwrap();
                (public, r, s)
            },
            |(public, r, s)| {
                assert!(black_box(engine.verify(&public, &msg, &r, &s)));
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = benchmark_signature_verification
}
