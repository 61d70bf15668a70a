use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// 160-bit account identifier.
///
/// Opaque fixed-width bytes. Ordering is byte-lexicographic, which is the
/// order used to canonicalize unordered account pairs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct AccountId([u8; 20]);

impl AccountId {
    /// Width in bytes.
    pub const LEN: usize = 20;

    /// The native asset's pseudo-issuer (all zeros).
    pub const fn xrp() -> Self {
        Self([0u8; 20])
    }

    /// Placeholder for "no account" (the value 1).
    pub const fn none() -> Self {
        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_xrp(&self) -> bool {
        *self == Self::xrp()
    }

    /// Uppercase hex, 40 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Parse from 40 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != Self::LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 20]> for AccountId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}
