//! # pedersen-pok: Vector Pedersen commitments with batched proofs of knowledge
//!
//! A prover commits to a vector of scalars against a public basis of G1
//! elements and proves knowledge of the committed values without revealing
//! them; a verifier checks single or batched proofs with bilinear pairings.
//! Generic over any arkworks [`Pairing`](ark_ec::pairing::Pairing) engine.
//!
//! ## Structure
//!
//! - `setup`: Trusted setup producing proving keys and a shared verifying key
//! - `commit`: Committing, proving knowledge, and batch proving
//! - `verify`: Single and batched (n+1 pairings) verification
//! - `utils`: MSM (partitioned parallel Pippenger) and folding helpers
//! - `errors`: Error types
//!
//! ## Usage
//!
//! ```ignore
//! use pedersen_pok::{setup, SetupConfig};
//!
//! let (pks, vk) = setup::<Bls12_381, _>(&[basis], &SetupConfig::default(), &mut rng)?;
//! let commitment = pks[0].commit(&values)?;
//! let proof = pks[0].prove_knowledge(&values)?;
//! vk.verify(&commitment, &proof)?;
//! ```
//!
//! The setup is a trusted ceremony: the secret exponent is local to the
//! [`setup`] call and the randomness used there must be discarded. Anyone
//! retaining it can forge proofs.

pub mod commit;
pub mod errors;
pub mod setup;
pub mod utils;
pub mod verify;

mod serialization;

pub use commit::{batch_prove, batch_prove_with_config};
pub use errors::{PedersenError, Result};
pub use setup::{setup, ProvingKey, SetupConfig, VerifyingKey};
pub use utils::batching::combination_coefficient;
pub use utils::msm::MsmConfig;
pub use verify::batch_verify_multi_vk;
