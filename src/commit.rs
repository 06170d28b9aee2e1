//! Committing and proving knowledge of committed values
//!
//! A commitment is C = Σ values[i] * basis[i]; the proof of knowledge is the
//! same combination over the sigma-scaled basis, P = Σ values[i] *
//! basis_exp_sigma[i] = sigma * C. [`batch_prove`] folds proofs over several
//! keys into one group element with a single MSM.

use crate::errors::{PedersenError, Result};
use crate::setup::ProvingKey;
use crate::utils::msm::{msm, MsmConfig};
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;

impl<E: Pairing> ProvingKey<E> {
    /// Commit to the values over this key's basis.
    pub fn commit(&self, values: &[E::ScalarField]) -> Result<E::G1Affine> {
        self.commit_with_config(values, &MsmConfig::default())
    }

    /// Commit with an explicit MSM worker configuration.
    pub fn commit_with_config(
        &self,
        values: &[E::ScalarField],
        config: &MsmConfig,
    ) -> Result<E::G1Affine> {
        if values.len() != self.basis.len() {
            return Err(PedersenError::LengthMismatch(
                "must have as many values as basis elements",
            ));
        }
        Ok(msm::<E::G1>(&self.basis, values, config).into_affine())
    }

    /// Prove knowledge of a commitment to the values over this key's basis.
    pub fn prove_knowledge(&self, values: &[E::ScalarField]) -> Result<E::G1Affine> {
        self.prove_knowledge_with_config(values, &MsmConfig::default())
    }

    /// Prove knowledge with an explicit MSM worker configuration.
    pub fn prove_knowledge_with_config(
        &self,
        values: &[E::ScalarField],
        config: &MsmConfig,
    ) -> Result<E::G1Affine> {
        if values.len() != self.basis.len() {
            return Err(PedersenError::LengthMismatch(
                "must have as many values as basis elements",
            ));
        }
        Ok(msm::<E::G1>(&self.basis_exp_sigma, values, config).into_affine())
    }
}

/// Compute a single proof of knowledge for multiple commitments.
///
/// Value block i is scaled by coeff^i (block 0 unscaled); the exponent is
/// per proving key, not per individual value. The same coefficient must be
/// used when folding the commitments for verification: random from the
/// verifier in an interactive setting, Fiat-Shamir otherwise (see
/// [`crate::utils::batching::combination_coefficient`]).
pub fn batch_prove<E: Pairing>(
    pks: &[ProvingKey<E>],
    value_vectors: &[Vec<E::ScalarField>],
    coeff: E::ScalarField,
) -> Result<E::G1Affine> {
    batch_prove_with_config(pks, value_vectors, coeff, &MsmConfig::default())
}

/// [`batch_prove`] with an explicit MSM worker configuration.
#[tracing::instrument(skip_all, fields(num_keys = pks.len()))]
pub fn batch_prove_with_config<E: Pairing>(
    pks: &[ProvingKey<E>],
    value_vectors: &[Vec<E::ScalarField>],
    coeff: E::ScalarField,
    config: &MsmConfig,
) -> Result<E::G1Affine> {
    if pks.len() != value_vectors.len() {
        return Err(PedersenError::LengthMismatch(
            "must have as many value vectors as proving keys",
        ));
    }
    if pks.is_empty() {
        return Ok(E::G1Affine::zero());
    }
    if pks.len() == 1 {
        // No folding overhead for a single key.
        return pks[0].prove_knowledge_with_config(&value_vectors[0], config);
    }

    let mut total = 0;
    for (pk, values) in pks.iter().zip(value_vectors) {
        if values.len() != pk.basis.len() {
            return Err(PedersenError::LengthMismatch(
                "must have as many values as basis elements",
            ));
        }
        total += values.len();
    }

    // One amalgamated MSM over the concatenated scaled bases.
    let mut basis = Vec::with_capacity(total);
    let mut scaled_values = Vec::with_capacity(total);
    let mut power = E::ScalarField::one();
    for (pk, values) in pks.iter().zip(value_vectors) {
        basis.extend_from_slice(&pk.basis_exp_sigma);
        scaled_values.extend(values.iter().map(|v| *v * power));
        power *= coeff;
    }

    Ok(msm::<E::G1>(&basis, &scaled_values, config).into_affine())
}
