//! 32-byte account addresses with a base58 text form.

use std::fmt;
use std::str::FromStr;

use base58::{FromBase58, ToBase58};
use serde::{Deserialize, Serialize};

use crate::error::InspectorError;

/// Number of bytes in a pubkey
pub const PUBKEY_BYTES: usize = 32;

/// Longest base58 text that can decode to `PUBKEY_BYTES` bytes.
const MAX_BASE58_LEN: usize = 44;

/// An account address or program identifier.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pubkey([u8; PUBKEY_BYTES]);

impl Pubkey {
    /// Build from a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; PUBKEY_BYTES]>::try_from(bytes).ok().map(Self)
    }

    pub const fn to_bytes(self) -> [u8; PUBKEY_BYTES] {
        self.0
    }

    pub fn to_base58(&self) -> String {
        self.0.to_base58()
    }

    /// Parse a program id, reporting failure as [`InspectorError::InvalidProgramId`].
    pub fn parse_program_id(s: &str) -> Result<Self, InspectorError> {
        decode_base58_32(s)
            .map(Self)
            .map_err(|reason| InspectorError::InvalidProgramId {
                input: s.to_string(),
                reason,
            })
    }
}

/// Decode base58 text into exactly 32 bytes, describing the failure otherwise.
pub(crate) fn decode_base58_32(input: &str) -> Result<[u8; PUBKEY_BYTES], String> {
    // base58 0.2 underflows on long runs of leading '1's
    if input.len() > MAX_BASE58_LEN {
        return Err(format!("{} characters, at most {} expected", input.len(), MAX_BASE58_LEN));
    }
    let bytes = input
        .from_base58()
        .map_err(|e| format!("not valid base58 ({:?})", e))?;
    <[u8; PUBKEY_BYTES]>::try_from(bytes.as_slice())
        .map_err(|_| format!("decoded to {} bytes, expected {}", bytes.len(), PUBKEY_BYTES))
}

impl FromStr for Pubkey {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_base58_32(s)
            .map(Self)
            .map_err(|reason| InspectorError::InvalidPubkey {
                input: s.to_string(),
                reason,
            })
    }
}

impl TryFrom<String> for Pubkey {
    type Error = InspectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pubkey> for String {
    fn from(key: Pubkey) -> Self {
        key.to_base58()
    }
}

impl From<[u8; PUBKEY_BYTES]> for Pubkey {
    #[inline]
    fn from(from: [u8; PUBKEY_BYTES]) -> Self {
        Self(from)
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}
