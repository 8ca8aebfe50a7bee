//! PDA (Program Derived Address) derivation.
//!
//! An address is `sha256(seeds.. || bump || program_id || PDA_MARKER)` for the
//! highest bump whose digest is not a valid ed25519 point.

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};

use crate::error::{InspectorError, InspectorResult};
use crate::pubkey::{Pubkey, PUBKEY_BYTES};
use crate::seed::classify_all;

/// Maximum length of a single derivation seed
pub const MAX_SEED_LEN: usize = 32;
/// Maximum number of seeds
pub const MAX_SEEDS: usize = 16;

const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// A derived address and the bump that took it off the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Reject seed lists the primitive cannot hash, before any work is done.
pub fn validate_seeds<S: AsRef<[u8]>>(seeds: &[S]) -> InspectorResult<()> {
    if seeds.len() > MAX_SEEDS {
        return Err(InspectorError::TooManySeeds { count: seeds.len() });
    }
    for (index, seed) in seeds.iter().enumerate() {
        let len = seed.as_ref().len();
        if len > MAX_SEED_LEN {
            return Err(InspectorError::SeedTooLong { index, len });
        }
    }
    Ok(())
}

/// Whether 32 bytes decompress to a point on the ed25519 curve.
pub fn is_on_curve(bytes: &[u8; PUBKEY_BYTES]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

fn hash_candidate<S: AsRef<[u8]>>(
    seeds: &[S],
    bump: Option<u8>,
    program_id: &Pubkey,
) -> [u8; PUBKEY_BYTES] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed.as_ref());
    }
    if let Some(bump) = bump {
        hasher.update([bump]);
    }
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    let mut out = [0u8; PUBKEY_BYTES];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Compute the address for exactly these seeds, with no bump search.
///
/// Fails with [`InspectorError::InvalidSeeds`] when the digest is on the curve.
pub fn create_program_address<S: AsRef<[u8]>>(
    seeds: &[S],
    program_id: &Pubkey,
) -> InspectorResult<Pubkey> {
    validate_seeds(seeds)?;
    let hash = hash_candidate(seeds, None, program_id);
    if is_on_curve(&hash) {
        return Err(InspectorError::InvalidSeeds);
    }
    Ok(Pubkey::from(hash))
}

/// Find the canonical PDA for `seeds` under `program_id`.
///
/// Bumps are tried from 255 downward; the first off-curve digest wins.
pub fn derive_pda<S: AsRef<[u8]>>(
    seeds: &[S],
    program_id: &Pubkey,
) -> InspectorResult<DerivedAddress> {
    validate_seeds(seeds)?;
    (0..=u8::MAX)
        .rev()
        .find_map(|bump| {
            let hash = hash_candidate(seeds, Some(bump), program_id);
            (!is_on_curve(&hash)).then(|| DerivedAddress {
                address: Pubkey::from(hash),
                bump,
            })
        })
        .ok_or(InspectorError::NotFound)
}

/// Parse a program id and raw seed strings, then derive.
pub fn derive_pda_from_strings<S: AsRef<str>>(
    raw_seeds: &[S],
    raw_program_id: &str,
) -> InspectorResult<DerivedAddress> {
    let program_id = Pubkey::parse_program_id(raw_program_id)?;
    let seeds = classify_all(raw_seeds);
    derive_pda(&seeds, &program_id)
}
