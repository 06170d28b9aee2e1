//! Linear-combination helpers for batched proving and verification
//!
//! Independent proofs are folded into one via powers of a combination
//! coefficient: block i is scaled by coeff^i, block 0 unscaled. Soundness of
//! the folded check relies on the coefficient being unpredictable to the
//! prover, so in a non-interactive setting it must be derived via
//! Fiat-Shamir from the commitments themselves.

use crate::errors::Result;
use crate::utils::msm::{msm, MsmConfig};
use ark_ec::CurveGroup;
use ark_ff::{Field, PrimeField};
use ark_std::One;
use ark_serialize::CanonicalSerialize;
use sha3::{Digest, Sha3_256};

/// Powers of `coeff`: [1, coeff, coeff^2, ..., coeff^(n-1)].
pub fn powers<F: Field>(coeff: F, n: usize) -> Vec<F> {
    let mut out = Vec::with_capacity(n);
    let mut current = F::one();
    for _ in 0..n {
        out.push(current);
        current *= coeff;
    }
    out
}

/// Fold points into one: Σ coeff^i * points[i].
pub fn fold_points<G: CurveGroup>(
    points: &[G::Affine],
    coeff: G::ScalarField,
    config: &MsmConfig,
) -> G {
    msm(points, &powers(coeff, points.len()), config)
}

/// Derive a combination coefficient via Fiat-Shamir.
///
/// Hashes a domain-separation label and the compressed encoding of every
/// item (typically the commitments being batched) with SHA3-256. Both sides
/// of the protocol must derive the coefficient from the same transcript.
pub fn combination_coefficient<F: PrimeField, T: CanonicalSerialize>(
    label: &[u8],
    items: &[T],
) -> Result<F> {
    let mut hasher = Sha3_256::new();
    hasher.update(label);
    for item in items {
        let mut bytes = Vec::new();
        item.serialize_compressed(&mut bytes)?;
        hasher.update(&bytes);
    }
    Ok(F::from_le_bytes_mod_order(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Projective};
    use ark_std::{test_rng, One, UniformRand, Zero};

    #[test]
    fn powers_start_at_one() {
        let p = powers(Fr::from(3u64), 5);
        assert_eq!(p.len(), 5);
        assert_eq!(p[0], Fr::one());
        assert_eq!(p[1], Fr::from(3u64));
        assert_eq!(p[2], Fr::from(9u64));
        assert_eq!(p[3], Fr::from(27u64));
        assert_eq!(p[4], Fr::from(81u64));
    }

    #[test]
    fn powers_empty() {
        assert!(powers(Fr::from(7u64), 0).is_empty());
    }

    #[test]
    fn fold_matches_manual_sum() {
        let mut rng = test_rng();
        let points: Vec<_> = (0..5)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();
        let coeff = Fr::rand(&mut rng);

        let folded: G1Projective = fold_points(&points, coeff, &MsmConfig::default());

        let mut expected = G1Projective::zero();
        let mut power = Fr::one();
        for p in &points {
            expected += *p * power;
            power *= coeff;
        }
        assert_eq!(folded, expected);
    }

    #[test]
    fn fold_empty_is_identity() {
        let folded: G1Projective = fold_points(&[], Fr::from(2u64), &MsmConfig::default());
        assert_eq!(folded, G1Projective::zero());
    }

    #[test]
    fn coefficient_is_deterministic() {
        let mut rng = test_rng();
        let points: Vec<_> = (0..3)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();

        let a: Fr = combination_coefficient(b"pedersen-batch", &points).unwrap();
        let b: Fr = combination_coefficient(b"pedersen-batch", &points).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn coefficient_depends_on_transcript() {
        let mut rng = test_rng();
        let points: Vec<_> = (0..3)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();
        let other: Vec<_> = (0..3)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();

        let a: Fr = combination_coefficient(b"pedersen-batch", &points).unwrap();
        let b: Fr = combination_coefficient(b"pedersen-batch", &other).unwrap();
        let c: Fr = combination_coefficient(b"other-label", &points).unwrap();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
