//! Engine error type.
//!
//! The per-turn engine is total and never returns errors; `EpiError` covers
//! the construction boundary (bad grid dimensions).  Sub-crates keep their
//! own error enums and wrap `EpiError` as one variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EpiError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Shorthand result type for the `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
