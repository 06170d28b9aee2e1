//! Multi-Scalar Multiplication (MSM) using Pippenger's Algorithm
//!
//! Computes Σ scalars[i] * bases[i] over elliptic curve points with the
//! bucket method, reducing complexity from O(n) scalar multiplications to
//! O(n/log n) group operations.
//!
//! The parallel path partitions the index range into disjoint chunks. Each
//! worker accumulates its chunk into an independent partial result; partials
//! are combined on the calling thread. No accumulator is ever shared between
//! workers.

use ark_ec::CurveGroup;
use ark_ff::{AdditiveGroup, BigInteger, PrimeField};
use ark_std::Zero;
use rayon::prelude::*;

/// Use naive scalar multiplications below this size.
const NAIVE_THRESHOLD: usize = 32;
/// Split across workers above this size.
const PARALLEL_THRESHOLD: usize = 256;

/// Worker configuration for multi-scalar multiplications.
///
/// `num_tasks: None` uses one task per available rayon thread. `Some(1)`
/// forces sequential execution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MsmConfig {
    pub num_tasks: Option<usize>,
}

impl MsmConfig {
    pub fn with_tasks(num_tasks: usize) -> Self {
        Self {
            num_tasks: Some(num_tasks),
        }
    }
}

/// Multi-scalar multiplication: Σ scalars[i] * bases[i]
///
/// # Panics
/// Panics if `bases` and `scalars` differ in length. Callers expose this as
/// a typed length-mismatch error before reaching the group layer.
#[tracing::instrument(skip_all, name = "msm", fields(len = bases.len()))]
pub fn msm<G: CurveGroup>(
    bases: &[G::Affine],
    scalars: &[G::ScalarField],
    config: &MsmConfig,
) -> G {
    assert_eq!(
        bases.len(),
        scalars.len(),
        "msm: bases and scalars length mismatch"
    );

    let n = bases.len();
    if n == 0 {
        return G::zero();
    }
    if n == 1 {
        return bases[0] * scalars[0];
    }

    let num_tasks = config
        .num_tasks
        .unwrap_or_else(rayon::current_num_threads)
        .max(1);

    if num_tasks == 1 || n < PARALLEL_THRESHOLD {
        return msm_serial(bases, scalars);
    }

    // Partition-then-reduce: disjoint index ranges, independent partials,
    // single-threaded combine at the end.
    let chunk = (n + num_tasks - 1) / num_tasks;
    let partials: Vec<G> = bases
        .par_chunks(chunk)
        .zip(scalars.par_chunks(chunk))
        .map(|(b, s)| msm_serial(b, s))
        .collect();

    partials.into_iter().fold(G::zero(), |acc, p| acc + p)
}

/// Sequential MSM over one index range.
fn msm_serial<G: CurveGroup>(bases: &[G::Affine], scalars: &[G::ScalarField]) -> G {
    let n = bases.len();
    if n == 0 {
        return G::zero();
    }
    if n < NAIVE_THRESHOLD {
        return msm_naive(bases, scalars);
    }

    let c = window_size(n);
    let num_buckets = 1usize << c;
    let scalar_bits = <G::ScalarField as PrimeField>::MODULUS_BIT_SIZE as usize;
    let num_windows = (scalar_bits + c - 1) / c;

    let mut result = G::zero();

    // Most significant window first; shift by c bits between windows.
    for window_idx in (0..num_windows).rev() {
        for _ in 0..c {
            result.double_in_place();
        }

        let mut buckets = vec![G::zero(); num_buckets];
        for (base, scalar) in bases.iter().zip(scalars) {
            let bucket_idx = window_bits(scalar, window_idx, c);
            if bucket_idx > 0 {
                // Mixed addition: affine base into projective bucket.
                buckets[bucket_idx] += *base;
            }
        }

        result += combine_buckets(&buckets);
    }

    result
}

/// Naive MSM, used where bucket overhead dominates.
fn msm_naive<G: CurveGroup>(bases: &[G::Affine], scalars: &[G::ScalarField]) -> G {
    bases
        .iter()
        .zip(scalars)
        .map(|(base, scalar)| *base * *scalar)
        .fold(G::zero(), |acc, p| acc + p)
}

/// Extract `c` bits of `scalar` at window `window_idx` (LSB window = 0).
fn window_bits<F: PrimeField>(scalar: &F, window_idx: usize, c: usize) -> usize {
    let bytes = scalar.into_bigint().to_bytes_le();
    let start_bit = window_idx * c;

    let mut result = 0usize;
    for i in 0..c {
        let bit_pos = start_bit + i;
        let byte_idx = bit_pos / 8;
        if byte_idx < bytes.len() {
            let bit = (bytes[byte_idx] >> (bit_pos % 8)) & 1;
            result |= (bit as usize) << i;
        }
    }
    result
}

/// Σ i * buckets[i] via the running-sum technique.
fn combine_buckets<G: CurveGroup>(buckets: &[G]) -> G {
    let mut running_sum = G::zero();
    let mut result = G::zero();
    for bucket in buckets.iter().skip(1).rev() {
        running_sum += bucket;
        result += running_sum;
    }
    result
}

/// Window size c ≈ log2(n), capped to keep bucket memory bounded.
fn window_size(n: usize) -> usize {
    match n {
        0..=31 => 1,
        32..=127 => 2,
        128..=511 => 3,
        512..=2047 => 4,
        2048..=8191 => 5,
        8192..=32767 => 6,
        32768..=131071 => 7,
        _ => 8,
    }
}
