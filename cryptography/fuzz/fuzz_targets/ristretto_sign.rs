#![no_main]

use arbitrary::Arbitrary;
use curvesig_cryptography::{ristretto::PrivateKey, Decode, KeyEngine, Signer, KEY_LENGTH};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    private: [u8; KEY_LENGTH],
    message: Vec<u8>,
    tamper: Option<(usize, u8)>,
}

fn fuzz(input: FuzzInput) {
    let engine = KeyEngine::new();
    let Ok((r, s)) = engine.sign(&input.private, &input.message) else {
        return;
    };
    assert_eq!(engine.sign(&input.private, &input.message).unwrap(), (r, s));

    // Sign only accepts keys that decode.
    let private = PrivateKey::decode(&input.private).unwrap();
    let public = private.public_key().point().to_bytes();
    assert!(engine.verify(&public, &input.message, &r, &s));

    if let Some((index, mask)) = input.tamper {
        if mask == 0 || input.message.is_empty() {
            return;
        }
        let mut tampered = input.message.clone();
        let index = index % tampered.len();
        tampered[index] ^= mask;
        assert!(!engine.verify(&public, &tampered, &r, &s));
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
