//! Pedersen commitments over Ristretto255.
//!
//! A commitment to value `v` with blinding factor `k` is `C = k * G + v * H`. It hides `v`
//! (for uniformly random `k`) and binds the committer to `(k, v)` as long as nobody knows the
//! discrete logarithm of `H` with respect to `G`. `H` is derived by hashing the encoding of
//! `G` to the group, so no such logarithm is known.
//!
//! Commitments are additively homomorphic: `C(k1, v1) + C(k2, v2) == C(k1 + k2, v1 + v2)`.
//!
//! [ExtendedPedersenCommitmentFactory] generalizes this to several blinding factors,
//! `C = sum(k_i * G_i) + v * H`, where `G_0 = G` and every further `G_i` is hashed to the group.

use crate::{
    codec::{Decode, Encode, FixedSize},
    ristretto::{Point, Scalar, POINT_LENGTH},
    Error,
};
use core::{
    iter::{once, Sum},
    ops::{Add, Sub},
};

/// Domain separation tag for the additional blinding generators.
const EXTENDED_GENERATOR_DOMAIN: &[u8] = b"CURVESIG_PEDERSEN_G";

/// Largest supported number of additional blinding generators.
pub const MAX_EXTENSION_DEGREE: usize = 6;

/// A Pedersen commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Commitment(Point);

impl Commitment {
    /// Returns the underlying group element.
    pub fn as_point(&self) -> &Point {
        &self.0
    }
}

impl Add for Commitment {
    type Output = Commitment;

    fn add(self, rhs: Commitment) -> Commitment {
        Commitment(self.0 + rhs.0)
    }
}

impl Sub for Commitment {
    type Output = Commitment;

    fn sub(self, rhs: Commitment) -> Commitment {
        Commitment(self.0 - rhs.0)
    }
}

impl Sum for Commitment {
    fn sum<I: Iterator<Item = Commitment>>(iter: I) -> Commitment {
        iter.fold(Commitment(Point::identity()), Add::add)
    }
}

impl<'a> Sum<&'a Commitment> for Commitment {
    fn sum<I: Iterator<Item = &'a Commitment>>(iter: I) -> Commitment {
        iter.copied().sum()
    }
}

impl FixedSize for Commitment {
    const SIZE: usize = POINT_LENGTH;
}

impl Encode for Commitment {}

impl Decode for Commitment {
    fn read(buf: &[u8]) -> Result<Self, Error> {
        Point::read(buf).map(Self)
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// Creates and opens Pedersen commitments for a fixed pair of generators.
#[derive(Clone, Debug)]
pub struct PedersenCommitmentFactory {
    g: Point,
    h: Point,
}

impl Default for PedersenCommitmentFactory {
    /// Uses the Ristretto basepoint as `G` and its hash to the group as `H`.
    fn default() -> Self {
        let g = Point::generator();
        let h = value_generator(&g);
        Self { g, h }
    }
}

fn value_generator(g: &Point) -> Point {
    Point::hash_from_bytes(g.as_ref())
}

impl PedersenCommitmentFactory {
    /// Creates a factory with custom generators.
    ///
    /// The generators must be distinct, non-identity, and have an unknown discrete-log relation.
    pub fn new(g: Point, h: Point) -> Result<Self, Error> {
        if g.is_identity() || h.is_identity() {
            return Err(Error::MalformedInput("generator", "identity"));
        }
        if g == h {
            return Err(Error::MalformedInput("generator", "not distinct"));
        }
        Ok(Self { g, h })
    }

    /// Returns the blinding generator `G`.
    pub fn g(&self) -> &Point {
        &self.g
    }

    /// Returns the value generator `H`.
    pub fn h(&self) -> &Point {
        &self.h
    }

    /// Commits to `value` with blinding factor `blinding`.
    pub fn commit(&self, blinding: &Scalar, value: &Scalar) -> Commitment {
        Commitment(self.g * blinding + self.h * value)
    }

    /// Commits to an integer value.
    pub fn commit_value(&self, blinding: &Scalar, value: u64) -> Commitment {
        self.commit(blinding, &Scalar::from_u64(value))
    }

    /// Returns the commitment to zero with a zero blinding factor (the identity).
    pub fn zero(&self) -> Commitment {
        Commitment(Point::identity())
    }

    /// Returns true if `commitment` opens to `(blinding, value)`.
    pub fn open(&self, blinding: &Scalar, value: &Scalar, commitment: &Commitment) -> bool {
        self.commit(blinding, value) == *commitment
    }

    /// Returns true if `commitment` opens to `(blinding, value)` for an integer value.
    pub fn open_value(&self, blinding: &Scalar, value: u64, commitment: &Commitment) -> bool {
        self.open(blinding, &Scalar::from_u64(value), commitment)
    }
}

/// Creates and opens Pedersen commitments with up to `extension_degree + 1` blinding factors.
///
/// With a single blinding factor, commitments are identical to those of the default
/// [PedersenCommitmentFactory].
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedPedersenCommitmentFactory {
    h: Point,
    g_vec: Vec<Point>,
    extension_degree: usize,
}

impl ExtendedPedersenCommitmentFactory {
    /// Creates a factory with `extension_degree` generators beyond `G`.
    ///
    /// Fails with [Error::ExtensionDegree] above [MAX_EXTENSION_DEGREE].
    pub fn new_with_extension_degree(extension_degree: usize) -> Result<Self, Error> {
        if extension_degree > MAX_EXTENSION_DEGREE {
            return Err(Error::ExtensionDegree {
                max: MAX_EXTENSION_DEGREE + 1,
                found: extension_degree + 1,
            });
        }
        let g = Point::generator();
        let h = value_generator(&g);
        let g_vec = once(g)
            .chain((1..=extension_degree as u64).map(|i| {
                let mut input = EXTENDED_GENERATOR_DOMAIN.to_vec();
                input.extend_from_slice(&i.to_le_bytes());
                Point::hash_from_bytes(&input)
            }))
            .collect();
        Ok(Self {
            h,
            g_vec,
            extension_degree,
        })
    }

    /// Returns the number of generators beyond `G`.
    pub fn extension_degree(&self) -> usize {
        self.extension_degree
    }

    /// Returns the blinding generators `G_0..=G_d`.
    pub fn g_vec(&self) -> &[Point] {
        &self.g_vec
    }

    /// Returns the value generator `H`.
    pub fn h(&self) -> &Point {
        &self.h
    }

    /// Commits to `value` with one blinding factor per generator, starting at `G_0`.
    ///
    /// `blindings` must hold between one and `extension_degree + 1` factors.
    pub fn commit_extended(
        &self,
        blindings: &[Scalar],
        value: &Scalar,
    ) -> Result<Commitment, Error> {
        if blindings.is_empty() || blindings.len() > self.g_vec.len() {
            return Err(Error::ExtensionDegree {
                max: self.g_vec.len(),
                found: blindings.len(),
            });
        }
        let scalars = once(value).chain(blindings);
        let points = once(&self.h).chain(&self.g_vec);
        Ok(Commitment(Point::multiscalar_mul(scalars, points)))
    }

    /// Commits to an integer value.
    pub fn commit_value_extended(
        &self,
        blindings: &[Scalar],
        value: u64,
    ) -> Result<Commitment, Error> {
        self.commit_extended(blindings, &Scalar::from_u64(value))
    }

    /// Returns the commitment to zero with zero blinding factors (the identity).
    pub fn zero_extended(&self) -> Commitment {
        Commitment(Point::identity())
    }

    /// Returns true if `commitment` opens to `(blindings, value)`.
    pub fn open_extended(
        &self,
        blindings: &[Scalar],
        value: &Scalar,
        commitment: &Commitment,
    ) -> Result<bool, Error> {
        Ok(self.commit_extended(blindings, value)? == *commitment)
    }

    /// Returns true if `commitment` opens to `(blindings, value)` for an integer value.
    pub fn open_value_extended(
        &self,
        blindings: &[Scalar],
        value: u64,
        commitment: &Commitment,
    ) -> Result<bool, Error> {
        self.open_extended(blindings, &Scalar::from_u64(value), commitment)
    }
}

impl Default for ExtendedPedersenCommitmentFactory {
    /// A factory of extension degree zero, equivalent to [PedersenCommitmentFactory::default].
    fn default() -> Self {
        let g = Point::generator();
        Self {
            h: value_generator(&g),
            g_vec: vec![g],
            extension_degree: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn check_default_base() {
        let factory = PedersenCommitmentFactory::default();
        assert_eq!(*factory.g(), Point::generator());
        assert_ne!(factory.g(), factory.h());
        assert!(!factory.h().is_identity());
    }

    #[test]
    fn check_open() {
        let factory = PedersenCommitmentFactory::default();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..16 {
            let k = Scalar::random(&mut rng).unwrap();
            let v = Scalar::random(&mut rng).unwrap();
            let commitment = factory.commit(&k, &v);
            assert!(factory.open(&k, &v, &commitment));
            assert!(!factory.open(&(&k + &Scalar::from_u64(1)), &v, &commitment));
            assert!(!factory.open(&k, &(&v + &Scalar::from_u64(1)), &commitment));
        }
    }

    #[test]
    fn check_open_value() {
        let factory = PedersenCommitmentFactory::default();
        let mut rng = StdRng::seed_from_u64(1);
        let k = Scalar::random(&mut rng).unwrap();
        let commitment = factory.commit_value(&k, 42);
        assert!(factory.open_value(&k, 42, &commitment));
        assert!(!factory.open_value(&k, 43, &commitment));
        assert_eq!(commitment, factory.commit(&k, &Scalar::from_u64(42)));
    }

    #[test]
    fn check_homomorphism() {
        let factory = PedersenCommitmentFactory::default();
        let mut rng = StdRng::seed_from_u64(2);
        let k1 = Scalar::random(&mut rng).unwrap();
        let k2 = Scalar::random(&mut rng).unwrap();
        let c1 = factory.commit_value(&k1, 100);
        let c2 = factory.commit_value(&k2, 250);
        assert!(factory.open_value(&(&k1 + &k2), 350, &(c1 + c2)));
        assert!(factory.open_value(&(&k2 - &k1), 150, &(c2 - c1)));
    }

    #[test]
    fn check_zero() {
        let factory = PedersenCommitmentFactory::default();
        let zero = factory.zero();
        assert!(zero.as_point().is_identity());
        assert!(factory.open(&Scalar::ZERO, &Scalar::ZERO, &zero));
        let c = factory.commit_value(&Scalar::from_u64(9), 9);
        assert_eq!(c + zero, c);
    }

    #[test]
    fn check_homomorphism_with_public_key() {
        // A commitment to zero value is a public key for its blinding factor.
        let factory = PedersenCommitmentFactory::default();
        let k = Scalar::from_u64(12345);
        assert_eq!(*factory.commit_value(&k, 0).as_point(), Point::mul_base(&k));
    }

    #[test]
    fn check_custom_generators() {
        let g = Point::generator();
        let h = Point::hash_from_bytes(b"custom");
        let factory = PedersenCommitmentFactory::new(g, h).unwrap();
        let k = Scalar::from_u64(5);
        assert!(factory.open_value(&k, 7, &factory.commit_value(&k, 7)));
        assert!(PedersenCommitmentFactory::new(g, g).is_err());
        assert!(PedersenCommitmentFactory::new(Point::identity(), h).is_err());
    }

    fn random_blindings(rng: &mut StdRng, count: usize) -> Vec<Scalar> {
        (0..count).map(|_| Scalar::random(rng).unwrap()).collect()
    }

    #[test]
    fn check_extended_default_base() {
        let factory = ExtendedPedersenCommitmentFactory::default();
        assert_eq!(
            factory,
            ExtendedPedersenCommitmentFactory::new_with_extension_degree(0).unwrap()
        );
        assert_eq!(factory.extension_degree(), 0);
        assert_eq!(factory.g_vec(), &[Point::generator()]);
    }

    #[test]
    fn check_extended_bases_between_factories() {
        let single = PedersenCommitmentFactory::default();
        for extension_degree in 0..=MAX_EXTENSION_DEGREE {
            let factory =
                ExtendedPedersenCommitmentFactory::new_with_extension_degree(extension_degree)
                    .unwrap();
            assert_eq!(factory.extension_degree(), extension_degree);
            assert_eq!(factory.g_vec().len(), extension_degree + 1);
            assert_eq!(factory.g_vec()[0], *single.g());
            assert_eq!(factory.h(), single.h());
        }
    }

    #[test]
    fn check_extended_generators_distinct() {
        let factory =
            ExtendedPedersenCommitmentFactory::new_with_extension_degree(MAX_EXTENSION_DEGREE)
                .unwrap();
        let mut generators = factory.g_vec().to_vec();
        generators.push(*factory.h());
        for (i, a) in generators.iter().enumerate() {
            assert!(!a.is_identity());
            for b in &generators[i + 1..] {
                assert_ne!(a, b);
            }
        }

        // Generators do not depend on the degree.
        let smaller = ExtendedPedersenCommitmentFactory::new_with_extension_degree(2).unwrap();
        assert_eq!(smaller.g_vec(), &factory.g_vec()[..3]);
    }

    #[test]
    fn check_extension_degree_too_large() {
        assert_eq!(
            ExtendedPedersenCommitmentFactory::new_with_extension_degree(MAX_EXTENSION_DEGREE + 1),
            Err(Error::ExtensionDegree {
                max: MAX_EXTENSION_DEGREE + 1,
                found: MAX_EXTENSION_DEGREE + 2,
            })
        );
    }

    #[test]
    fn check_open_extended() {
        let mut rng = StdRng::seed_from_u64(3);
        for extension_degree in 1..=MAX_EXTENSION_DEGREE {
            let factory =
                ExtendedPedersenCommitmentFactory::new_with_extension_degree(extension_degree)
                    .unwrap();
            for count in 1..=extension_degree + 1 {
                let v = Scalar::random(&mut rng).unwrap();
                let k_vec = random_blindings(&mut rng, count);
                let commitment = factory.commit_extended(&k_vec, &v).unwrap();

                let mut expected = *factory.h() * &v;
                for (k, g) in k_vec.iter().zip(factory.g_vec()) {
                    expected = expected + *g * k;
                }
                assert_eq!(*commitment.as_point(), expected);

                assert!(factory.open_extended(&k_vec, &v, &commitment).unwrap());
                assert!(!factory.open_extended(&k_vec, &(&v + &v), &commitment).unwrap());
                let mut not_k = k_vec.clone();
                not_k[0] = &not_k[0] + &v;
                assert!(!factory.open_extended(&not_k, &v, &commitment).unwrap());
            }
        }
    }

    #[test]
    fn check_extended_matches_single_factory() {
        let single = PedersenCommitmentFactory::default();
        let factory = ExtendedPedersenCommitmentFactory::new_with_extension_degree(3).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let k = Scalar::random(&mut rng).unwrap();
        let extended = factory.commit_value_extended(&[k.clone()], 77).unwrap();
        assert_eq!(extended, single.commit_value(&k, 77));
        assert!(factory.open_value_extended(&[k.clone()], 77, &extended).unwrap());
        assert!(!factory.open_value_extended(&[k], 78, &extended).unwrap());
    }

    #[test]
    fn check_homomorphism_extended() {
        let mut rng = StdRng::seed_from_u64(5);
        for extension_degree in 1..=MAX_EXTENSION_DEGREE {
            let factory =
                ExtendedPedersenCommitmentFactory::new_with_extension_degree(extension_degree)
                    .unwrap();
            let count = extension_degree + 1;
            let v1 = Scalar::random(&mut rng).unwrap();
            let v2 = Scalar::random(&mut rng).unwrap();
            let k1_vec = random_blindings(&mut rng, count);
            let k2_vec = random_blindings(&mut rng, count);
            let k_sum: Vec<Scalar> = k1_vec.iter().zip(&k2_vec).map(|(a, b)| a + b).collect();
            let v_sum = &v1 + &v2;

            let c1 = factory.commit_extended(&k1_vec, &v1).unwrap();
            let c2 = factory.commit_extended(&k2_vec, &v2).unwrap();
            assert_eq!(c1 + c2, factory.commit_extended(&k_sum, &v_sum).unwrap());
            assert!(factory.open_extended(&k_sum, &v_sum, &(c1 + c2)).unwrap());
        }
    }

    #[test]
    fn check_homomorphism_with_public_key_extended() {
        // Adding a public key only shifts the blinding factor on G_0.
        let mut rng = StdRng::seed_from_u64(6);
        let factory = ExtendedPedersenCommitmentFactory::new_with_extension_degree(2).unwrap();
        let v = Scalar::random(&mut rng).unwrap();
        let mut k_vec = random_blindings(&mut rng, 3);
        let commitment = factory.commit_extended(&k_vec, &v).unwrap();
        let k = Scalar::random(&mut rng).unwrap();
        let shifted = Commitment(*commitment.as_point() + Point::mul_base(&k));
        k_vec[0] = &k_vec[0] + &k;
        assert!(factory.open_extended(&k_vec, &v, &shifted).unwrap());
    }

    #[test]
    fn sum_commitment_vector_extended() {
        let mut rng = StdRng::seed_from_u64(7);
        let factory = ExtendedPedersenCommitmentFactory::new_with_extension_degree(1).unwrap();
        let mut k_sum = vec![Scalar::ZERO, Scalar::ZERO];
        let mut commitments = Vec::new();
        for value in 0..10u64 {
            let k_vec = random_blindings(&mut rng, 2);
            commitments.push(factory.commit_value_extended(&k_vec, value).unwrap());
            for (sum, k) in k_sum.iter_mut().zip(&k_vec) {
                *sum = &*sum + k;
            }
        }
        let total: Commitment = commitments.iter().sum();
        assert!(factory.open_value_extended(&k_sum, 45, &total).unwrap());
        assert_eq!(commitments.into_iter().sum::<Commitment>(), total);
        let empty: Commitment = core::iter::empty::<Commitment>().sum();
        assert_eq!(empty, factory.zero_extended());
    }

    #[test]
    fn check_blinding_count_rejected() {
        let factory = ExtendedPedersenCommitmentFactory::new_with_extension_degree(1).unwrap();
        let v = Scalar::from_u64(1);
        assert_eq!(
            factory.commit_extended(&[], &v),
            Err(Error::ExtensionDegree { max: 2, found: 0 })
        );
        let too_many = vec![Scalar::from_u64(2); 3];
        assert_eq!(
            factory.commit_extended(&too_many, &v),
            Err(Error::ExtensionDegree { max: 2, found: 3 })
        );
        let commitment = factory.commit_value_extended(&too_many[..2], 1).unwrap();
        assert!(factory.open_extended(&too_many, &v, &commitment).is_err());
    }

    #[test]
    fn serialize_deserialize() {
        let factory = PedersenCommitmentFactory::default();
        let commitment = factory.commit_value(&Scalar::from_u64(3), 4);
        let decoded = Commitment::decode(&commitment.encode()).unwrap();
        assert_eq!(decoded, commitment);
        assert!(Commitment::decode(&[0xff; POINT_LENGTH]).is_err());
    }
}
