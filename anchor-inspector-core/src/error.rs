//! Structured error types for the inspector core.
//!
//! Every failure crossing the core boundary is one of these variants,
//! returned as a value. Nothing here logs or panics.

use thiserror::Error;

use crate::pda::{MAX_SEEDS, MAX_SEED_LEN};

/// Result alias used throughout the core.
pub type InspectorResult<T> = Result<T, InspectorError>;

/// Structured error type for seed parsing, derivation and storage.
///
/// # Example
/// ```rust
/// use anchor_inspector_core::error::InspectorError;
/// use anchor_inspector_core::pda::derive_pda;
/// use anchor_inspector_core::pubkey::Pubkey;
///
/// let program_id = Pubkey::from([7u8; 32]);
/// let long = [0u8; 33];
/// let err = derive_pda(&[&long[..]], &program_id).unwrap_err();
/// assert!(matches!(err, InspectorError::SeedTooLong { index: 0, len: 33 }));
/// assert_eq!(err.error_code(), 1002);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// Program identifier does not decode to exactly 32 bytes
    #[error("Invalid program id '{input}': {reason}")]
    InvalidProgramId {
        input: String,
        reason: String,
    },

    /// A public key string (address book, IDL) failed to decode
    #[error("Invalid public key '{input}': {reason}")]
    InvalidPubkey {
        input: String,
        reason: String,
    },

    /// A single seed exceeds the per-seed byte limit
    #[error("Seed {index} is {len} bytes, max {}", MAX_SEED_LEN)]
    SeedTooLong {
        index: usize,
        len: usize,
    },

    /// More seeds than the derivation primitive accepts
    #[error("Too many seeds: got {count}, max {}", MAX_SEEDS)]
    TooManySeeds {
        count: usize,
    },

    /// The candidate address lies on the ed25519 curve
    #[error("Provided seeds do not result in a valid address")]
    InvalidSeeds,

    /// Every bump from 255 down to 0 produced an on-curve point
    #[error("Unable to find a viable program address bump seed")]
    NotFound,

    /// Persistence port failure or corrupt stored data
    #[error("Address storage error: {message}")]
    Storage {
        message: String,
    },

    /// IDL could not be parsed or lacks the requested item
    #[error("IDL error: {message}")]
    Idl {
        message: String,
    },
}

impl InspectorError {
    pub fn storage(message: impl Into<String>) -> Self {
        InspectorError::Storage {
            message: message.into(),
        }
    }

    pub fn idl(message: impl Into<String>) -> Self {
        InspectorError::Idl {
            message: message.into(),
        }
    }

    /// Get a numeric error code for front-end handling.
    pub fn error_code(&self) -> u32 {
        match self {
            InspectorError::InvalidProgramId { .. } => 1000,
            InspectorError::InvalidPubkey { .. } => 1001,
            InspectorError::SeedTooLong { .. } => 1002,
            InspectorError::TooManySeeds { .. } => 1003,
            InspectorError::InvalidSeeds => 1004,
            InspectorError::NotFound => 1005,
            InspectorError::Storage { .. } => 1006,
            InspectorError::Idl { .. } => 1007,
        }
    }
}
