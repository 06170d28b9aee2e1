//! Verification of proofs of knowledge
//!
//! A single proof is checked with the two-pairing equation
//! e(C, g_sigma_neg) * e(P, g) == 1: for an honest P = sigma * C the
//! exponents cancel. [`batch_verify_multi_vk`] reduces n independent checks
//! (2n pairings) to one n+1-pairing product via a randomized linear
//! combination; a prover who could satisfy the combined equation without
//! satisfying each individual one would have to predict the coefficient.

use crate::errors::{PedersenError, Result};
use crate::setup::VerifyingKey;
use crate::utils::batching::{fold_points, powers};
use crate::utils::msm::MsmConfig;
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::One;
use ark_serialize::Valid;

impl<E: Pairing> VerifyingKey<E> {
    /// Check a proof of knowledge against a commitment.
    ///
    /// Both inputs are untrusted: membership in the prime-order subgroup is
    /// checked before they reach the pairing. Rejection is definitive, never
    /// a transient condition.
    pub fn verify(&self, commitment: &E::G1Affine, proof: &E::G1Affine) -> Result<()> {
        ensure_in_subgroup(commitment, "commitment")?;
        ensure_in_subgroup(proof, "proof of knowledge")?;

        if pairing_product_is_identity::<E>(
            vec![*commitment, *proof],
            vec![self.g_sigma_neg, self.g],
        )? {
            Ok(())
        } else {
            Err(PedersenError::ProofRejected)
        }
    }
}

/// Verify multiple proofs of knowledge with n+1 pairings instead of 2n.
///
/// The verifying keys may come from different setup ceremonies, but their G2
/// point must be identical; this is enforced with
/// [`crate::setup::SetupConfig::with_g2_generator`] at setup time.
///
/// `proofs` either matches `vks` in length or contains a single proof that
/// the prover already folded with the same coefficient scheme (per-key
/// powers of `coeff`, block 0 unscaled).
#[tracing::instrument(skip_all, fields(num_keys = vks.len()))]
pub fn batch_verify_multi_vk<E: Pairing>(
    vks: &[VerifyingKey<E>],
    commitments: &[E::G1Affine],
    proofs: &[E::G1Affine],
    coeff: E::ScalarField,
) -> Result<()> {
    if commitments.len() != vks.len() {
        return Err(PedersenError::LengthMismatch(
            "must have as many commitments as verifying keys",
        ));
    }
    if proofs.len() != vks.len() && proofs.len() != 1 {
        return Err(PedersenError::LengthMismatch(
            "proofs must match verifying keys in number or be pre-folded into one",
        ));
    }
    // An empty batch is vacuously valid.
    if vks.is_empty() {
        return Ok(());
    }

    for vk in vks.iter().skip(1) {
        if vk.g != vks[0].g {
            return Err(PedersenError::GeneratorMismatch);
        }
    }
    for commitment in commitments {
        ensure_in_subgroup(commitment, "commitment")?;
    }
    for proof in proofs {
        ensure_in_subgroup(proof, "proof of knowledge")?;
    }

    // Left side: commitments[i] * coeff^i, then the folded proof.
    let coeff_powers = powers(coeff, vks.len());
    let mut g1_side: Vec<E::G1> = commitments
        .iter()
        .zip(&coeff_powers)
        .map(|(commitment, power)| *commitment * *power)
        .collect();
    let folded_proof: E::G1 = if proofs.len() == 1 {
        proofs[0].into_group()
    } else {
        fold_points(proofs, coeff, &MsmConfig::default())
    };
    g1_side.push(folded_proof);

    // Right side: each key's g_sigma_neg, then the shared g.
    let mut g2_side: Vec<E::G2Affine> = vks.iter().map(|vk| vk.g_sigma_neg).collect();
    g2_side.push(vks[0].g);

    if pairing_product_is_identity::<E>(E::G1::normalize_batch(&g1_side), g2_side)? {
        Ok(())
    } else {
        Err(PedersenError::ProofRejected)
    }
}

fn ensure_in_subgroup<A: AffineRepr>(point: &A, what: &'static str) -> Result<()> {
    point
        .check()
        .map_err(|_| PedersenError::SubgroupCheckFailed(what))
}

/// Whether the multi-pairing product of the given pairs is the identity.
#[tracing::instrument(skip_all, name = "pairing_product", fields(len = g1.len()))]
fn pairing_product_is_identity<E: Pairing>(
    g1: Vec<E::G1Affine>,
    g2: Vec<E::G2Affine>,
) -> Result<bool> {
    let miller = E::multi_miller_loop(g1, g2);
    let product = E::final_exponentiation(miller).ok_or(PedersenError::Pairing)?;
    Ok(product.0.is_one())
}
