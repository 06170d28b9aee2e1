//! Trusted setup for Pedersen vector commitments
//!
//! [`setup`] generates one [`ProvingKey`] per basis and a single shared
//! [`VerifyingKey`] from an ephemeral secret exponent sigma. The keys are
//! immutable after construction and safe for concurrent read-only use.
//!
//! NB: this is a trusted setup. Sigma is local to the [`setup`] call and is
//! never stored, logged, or returned; anyone retaining the randomness used
//! here can forge proofs of knowledge.

use crate::errors::{PedersenError, Result};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::PrimeField;
use ark_std::rand::RngCore;
use ark_std::Zero;

/// Key for committing and proving knowledge over one basis.
///
/// `basis_exp_sigma[i] = basis[i] * sigma` for the setup secret sigma.
/// Invariant: both sequences have the same length, enforced on construction
/// and on decode.
pub struct ProvingKey<E: Pairing> {
    pub basis: Vec<E::G1Affine>,
    pub basis_exp_sigma: Vec<E::G1Affine>,
}

/// Key for verifying proofs of knowledge.
///
/// `g_sigma_neg = g * (-sigma)`. Several proving keys share one verifying
/// key when produced by a single [`setup`] call.
pub struct VerifyingKey<E: Pairing> {
    pub g: E::G2Affine,
    pub g_sigma_neg: E::G2Affine,
}

/// Setup configuration.
///
/// When `g2_generator` is `None` the G2 point is sampled randomly. Callers
/// batching verification across independently-generated verifying keys must
/// fix the generator so it is identical across all of them.
pub struct SetupConfig<E: Pairing> {
    pub g2_generator: Option<E::G2Affine>,
}

impl<E: Pairing> SetupConfig<E> {
    pub fn with_g2_generator(g2: E::G2Affine) -> Self {
        Self {
            g2_generator: Some(g2),
        }
    }
}

impl<E: Pairing> Default for SetupConfig<E> {
    fn default() -> Self {
        Self { g2_generator: None }
    }
}

/// Generate proving keys for the given bases and the shared verifying key.
///
/// The bases do not have to be of the same length. The elements within each
/// basis should be linearly independent of each other; otherwise a prover
/// can construct multiple valid openings for a commitment. This is the
/// caller's responsibility and is not checked here.
#[tracing::instrument(skip_all, fields(num_bases = bases.len()))]
pub fn setup<E: Pairing, R: RngCore>(
    bases: &[Vec<E::G1Affine>],
    config: &SetupConfig<E>,
    rng: &mut R,
) -> Result<(Vec<ProvingKey<E>>, VerifyingKey<E>)> {
    let g = match config.g2_generator {
        Some(g2) => g2,
        None => (E::G2Affine::generator() * random_nonzero_scalar::<E::ScalarField, R>(rng)?)
            .into_affine(),
    };

    // The setup secret. Lives only until the end of this call.
    let sigma = random_nonzero_scalar::<E::ScalarField, R>(rng)?;

    let g_sigma_neg = (g * -sigma).into_affine();

    let pks = bases
        .iter()
        .map(|basis| {
            let scaled: Vec<E::G1> = basis.iter().map(|p| *p * sigma).collect();
            ProvingKey {
                basis: basis.clone(),
                basis_exp_sigma: E::G1::normalize_batch(&scaled),
            }
        })
        .collect();

    Ok((pks, VerifyingKey { g, g_sigma_neg }))
}

/// Sample a uniformly random nonzero scalar from fallible entropy.
fn random_nonzero_scalar<F: PrimeField, R: RngCore>(rng: &mut R) -> Result<F> {
    let mut bytes = [0u8; 64];
    loop {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| PedersenError::Randomness(e.to_string()))?;
        let s = F::from_le_bytes_mod_order(&bytes);
        if !s.is_zero() {
            return Ok(s);
        }
    }
}

impl<E: Pairing> Clone for ProvingKey<E> {
    fn clone(&self) -> Self {
        Self {
            basis: self.basis.clone(),
            basis_exp_sigma: self.basis_exp_sigma.clone(),
        }
    }
}

impl<E: Pairing> core::fmt::Debug for ProvingKey<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProvingKey")
            .field("basis", &self.basis)
            .field("basis_exp_sigma", &self.basis_exp_sigma)
            .finish()
    }
}

impl<E: Pairing> PartialEq for ProvingKey<E> {
    fn eq(&self, other: &Self) -> bool {
        self.basis == other.basis && self.basis_exp_sigma == other.basis_exp_sigma
    }
}

impl<E: Pairing> Eq for ProvingKey<E> {}

impl<E: Pairing> Clone for VerifyingKey<E> {
    fn clone(&self) -> Self {
        Self {
            g: self.g,
            g_sigma_neg: self.g_sigma_neg,
        }
    }
}

impl<E: Pairing> core::fmt::Debug for VerifyingKey<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VerifyingKey")
            .field("g", &self.g)
            .field("g_sigma_neg", &self.g_sigma_neg)
            .finish()
    }
}

impl<E: Pairing> PartialEq for VerifyingKey<E> {
    fn eq(&self, other: &Self) -> bool {
        self.g == other.g && self.g_sigma_neg == other.g_sigma_neg
    }
}

impl<E: Pairing> Eq for VerifyingKey<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
    use ark_std::{test_rng, UniformRand};

    fn random_basis(n: usize) -> Vec<ark_bls12_381::G1Affine> {
        let mut rng = test_rng();
        (0..n)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect()
    }

    #[test]
    fn setup_produces_matching_lengths() {
        let mut rng = test_rng();
        let bases = vec![random_basis(2), random_basis(3), random_basis(5)];

        let (pks, _vk) =
            setup::<Bls12_381, _>(&bases, &SetupConfig::default(), &mut rng).unwrap();

        assert_eq!(pks.len(), 3);
        for (pk, basis) in pks.iter().zip(&bases) {
            assert_eq!(pk.basis, *basis);
            assert_eq!(pk.basis.len(), pk.basis_exp_sigma.len());
        }
    }

    #[test]
    fn setup_respects_fixed_g2_generator() {
        let mut rng = test_rng();
        let g2 = G2Projective::rand(&mut rng).into_affine();
        let bases = vec![random_basis(2)];

        let (_, vk1) =
            setup::<Bls12_381, _>(&bases, &SetupConfig::with_g2_generator(g2), &mut rng).unwrap();
        let (_, vk2) =
            setup::<Bls12_381, _>(&bases, &SetupConfig::with_g2_generator(g2), &mut rng).unwrap();

        assert_eq!(vk1.g, g2);
        assert_eq!(vk2.g, g2);
        // Independent ceremonies still use independent secrets.
        assert_ne!(vk1.g_sigma_neg, vk2.g_sigma_neg);
    }

    #[test]
    fn setup_samples_nondegenerate_keys() {
        let mut rng = test_rng();
        let bases = vec![random_basis(3)];

        let (pks, vk) =
            setup::<Bls12_381, _>(&bases, &SetupConfig::default(), &mut rng).unwrap();

        assert!(!vk.g.into_group().is_zero());
        assert!(!vk.g_sigma_neg.into_group().is_zero());
        // sigma != 0, so scaled basis elements differ from the originals.
        for (b, bs) in pks[0].basis.iter().zip(&pks[0].basis_exp_sigma) {
            assert_ne!(b, bs);
        }
    }

    #[test]
    fn scaled_basis_uses_one_sigma_across_keys() {
        // e(basis[j], g_sigma_neg) * e(basis_exp_sigma[j], g) == 1 must hold
        // for every element of every key produced by one setup call.
        use ark_ff::One;

        let mut rng = test_rng();
        let bases = vec![random_basis(2), random_basis(4)];
        let (pks, vk) =
            setup::<Bls12_381, _>(&bases, &SetupConfig::default(), &mut rng).unwrap();

        for pk in &pks {
            for (b, bs) in pk.basis.iter().zip(&pk.basis_exp_sigma) {
                let product = Bls12_381::multi_pairing([*b, *bs], [vk.g_sigma_neg, vk.g]);
                assert!(product.0.is_one());
            }
        }
    }

    #[test]
    fn random_nonzero_scalar_is_nonzero() {
        let mut rng = test_rng();
        for _ in 0..100 {
            let s: Fr = random_nonzero_scalar(&mut rng).unwrap();
            assert!(!s.is_zero());
        }
    }
}
