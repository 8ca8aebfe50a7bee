//! Hex encoding/decoding utilities.

use anchor_inspector_core::pubkey::Pubkey;

pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn hex_decode(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err(format!("Hex string has odd length: {}", hex.len()));
    }
    if !hex.is_ascii() {
        return Err("Hex string contains non-ASCII characters".to_string());
    }
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let byte = u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| format!("Invalid hex at position {}: {}", i, e))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Decode a 32-byte key from base58 or (optionally 0x-prefixed) hex.
pub fn decode_pubkey(input: &str) -> Result<Pubkey, String> {
    if let Ok(key) = input.parse::<Pubkey>() {
        return Ok(key);
    }

    let hex = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let bytes = hex_decode(hex)
        .map_err(|e| format!("'{}' is neither a base58 key nor hex: {}", input, e))?;
    Pubkey::from_slice(&bytes).ok_or_else(|| {
        format!(
            "Expected 32 bytes, got {} (provide base58 or 64 hex chars)",
            bytes.len()
        )
    })
}
