//! Error types for the Pedersen commitment protocol

use ark_serialize::SerializationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedersenError {
    #[error("randomness source failure: {0}")]
    Randomness(String),

    #[error("length mismatch: {0}")]
    LengthMismatch(&'static str),

    #[error("parameter mismatch: G2 generator differs across verifying keys")]
    GeneratorMismatch,

    #[error("subgroup check failed for {0}")]
    SubgroupCheckFailed(&'static str),

    #[error("pairing computation failed")]
    Pairing,

    #[error("proof rejected")]
    ProofRejected,

    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

pub type Result<T> = core::result::Result<T, PedersenError>;
