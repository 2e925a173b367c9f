#![no_main]

use arbitrary::Arbitrary;
use curvesig_cryptography::{
    commitment::Commitment,
    ristretto::{Point, PrivateKey, PublicKey, Scalar, Signature},
    Decode, Encode,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Scalar(Vec<u8>),
    Point(Vec<u8>),
    PrivateKey(Vec<u8>),
    PublicKey(Vec<u8>),
    Signature(Vec<u8>),
    Commitment(Vec<u8>),
}

fn check<T: Decode + Encode>(data: &[u8]) {
    // Anything that decodes must re-encode to the same bytes.
    if let Ok(value) = T::decode(data) {
        assert_eq!(value.encode(), data);
    }
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Scalar(data) => check::<Scalar>(&data),
        FuzzInput::Point(data) => check::<Point>(&data),
        FuzzInput::PrivateKey(data) => check::<PrivateKey>(&data),
        FuzzInput::PublicKey(data) => {
            if let Ok(public_key) = PublicKey::decode(&data) {
                assert!(!public_key.point().is_identity());
            }
            check::<PublicKey>(&data)
        }
        FuzzInput::Signature(data) => {
            if let Ok(signature) = Signature::decode(&data) {
                assert!(!signature.r().is_identity());
                assert!(!signature.s().is_zero());
            }
            check::<Signature>(&data)
        }
        FuzzInput::Commitment(data) => check::<Commitment>(&data),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
