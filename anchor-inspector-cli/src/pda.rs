//! PDA (Program Derived Address) computation from IDL seed definitions.

use std::collections::HashMap;

use anchor_inspector_core::idl::{IdlPda, IdlSeed};
use anchor_inspector_core::pda::{derive_pda, DerivedAddress};
use anchor_inspector_core::pubkey::Pubkey;

use crate::cli::snake_to_kebab;
use crate::parse::{parse_const, parse_value};

/// CLI flag (without leading dashes) that supplies an account seed.
pub fn account_flag(path: &str) -> String {
    format!("{}-account", path_flag(path))
}

/// CLI flag (without leading dashes) that supplies an arg seed.
pub fn path_flag(path: &str) -> String {
    snake_to_kebab(&path.replace('.', "_"))
}

/// Bytes for a single IDL seed.
///
/// `args` maps kebab-case flag names to raw CLI strings.
pub fn resolve_seed(seed: &IdlSeed, args: &HashMap<String, String>) -> Result<Vec<u8>, String> {
    match seed {
        IdlSeed::Const { type_, value } => parse_const(value, type_)
            .map(|v| v.to_seed_bytes())
            .map_err(|e| format!("const seed: {}", e)),
        IdlSeed::Account { path, .. } => {
            let key = account_flag(path);
            let raw = args
                .get(&key)
                .ok_or_else(|| format!("seed references account '{}'; provide --{}", path, key))?;
            crate::hex::decode_pubkey(raw)
                .map(|k| k.to_bytes().to_vec())
                .map_err(|e| format!("--{}: {}", key, e))
        }
        IdlSeed::Arg { type_, path } => {
            let key = path_flag(path);
            let raw = args
                .get(&key)
                .ok_or_else(|| format!("seed references arg '{}'; provide --{}", path, key))?;
            parse_value(raw, type_)
                .map(|v| v.to_seed_bytes())
                .map_err(|e| format!("--{}: {}", key, e))
        }
    }
}

/// Every CLI flag a PDA's seed layout needs, in seed order.
pub fn required_flags(pda: &IdlPda) -> Vec<String> {
    pda.seeds
        .iter()
        .chain(pda.program_id.iter())
        .filter_map(|seed| match seed {
            IdlSeed::Const { .. } => None,
            IdlSeed::Account { path, .. } => Some(account_flag(path)),
            IdlSeed::Arg { path, .. } => Some(path_flag(path)),
        })
        .collect()
}

/// Compute a PDA from its IDL seed layout.
///
/// A layout with its own `programId` seed derives against that program
/// instead of `program_id`.
pub fn compute_pda_from_seeds(
    pda: &IdlPda,
    program_id: &Pubkey,
    args: &HashMap<String, String>,
) -> Result<DerivedAddress, String> {
    let seeds = pda
        .seeds
        .iter()
        .enumerate()
        .map(|(i, seed)| resolve_seed(seed, args).map_err(|e| format!("Seed [{}]: {}", i, e)))
        .collect::<Result<Vec<_>, _>>()?;

    let program_id = match &pda.program_id {
        Some(seed) => {
            let bytes = resolve_seed(seed, args).map_err(|e| format!("programId: {}", e))?;
            Pubkey::from_slice(&bytes)
                .ok_or_else(|| format!("programId seed resolved to {} bytes, expected 32", bytes.len()))?
        }
        None => *program_id,
    };

    derive_pda(&seeds, &program_id).map_err(|e| e.to_string())
}
