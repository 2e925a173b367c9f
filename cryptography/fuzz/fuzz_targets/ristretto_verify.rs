#![no_main]

use arbitrary::Arbitrary;
use curvesig_cryptography::{KeyEngine, KEY_LENGTH};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    public: [u8; KEY_LENGTH],
    message: Vec<u8>,
    r: [u8; KEY_LENGTH],
    s: [u8; KEY_LENGTH],
}

fuzz_target!(|input: FuzzInput| {
    // Arbitrary inputs must never panic and essentially never verify.
    let engine = KeyEngine::new();
    assert!(!engine.verify(&input.public, &input.message, &input.r, &input.s));
});
