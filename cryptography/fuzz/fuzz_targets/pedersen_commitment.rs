#![no_main]

use arbitrary::Arbitrary;
use curvesig_cryptography::{
    commitment::{ExtendedPedersenCommitmentFactory, PedersenCommitmentFactory},
    ristretto::Scalar,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    blinding_1: u64,
    value_1: u32,
    blinding_2: u64,
    value_2: u32,
}

fuzz_target!(|input: FuzzInput| {
    let factory = PedersenCommitmentFactory::default();
    let k1 = Scalar::from_u64(input.blinding_1);
    let k2 = Scalar::from_u64(input.blinding_2);
    let c1 = factory.commit_value(&k1, input.value_1 as u64);
    let c2 = factory.commit_value(&k2, input.value_2 as u64);

    assert!(factory.open_value(&k1, input.value_1 as u64, &c1));
    assert!(factory.open_value(
        &(&k1 + &k2),
        input.value_1 as u64 + input.value_2 as u64,
        &(c1 + c2)
    ));
    assert!(factory.open(
        &(&k1 - &k2),
        &(&Scalar::from_u64(input.value_1 as u64) - &Scalar::from_u64(input.value_2 as u64)),
        &(c1 - c2)
    ));

    // A single blinding factor reproduces the default factory.
    let extended = ExtendedPedersenCommitmentFactory::new_with_extension_degree(1).unwrap();
    assert_eq!(
        extended.commit_value_extended(&[k1.clone()], input.value_1 as u64).unwrap(),
        c1
    );
    let both = extended
        .commit_value_extended(&[k1, k2], input.value_2 as u64)
        .unwrap();
    assert!(extended
        .open_value_extended(
            &[Scalar::from_u64(input.blinding_1), Scalar::from_u64(input.blinding_2)],
            input.value_2 as u64,
            &both
        )
        .unwrap());
});
