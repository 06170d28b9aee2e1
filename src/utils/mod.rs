//! Utility functions

pub mod batching;
pub mod msm;
