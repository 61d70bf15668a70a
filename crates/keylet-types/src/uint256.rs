use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::strhex::{char_unhex, str_unhex};

/// A 256-bit unsigned integer stored as 32 big-endian bytes.
///
/// Every ledger state object lives under a `Uint256` key. Because the bytes
/// are big-endian, the derived byte-lexicographic `Ord` is exactly unsigned
/// integer order, which is what the state store iterates by.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Uint256([u8; 32]);

impl Uint256 {
    /// Width in bytes.
    pub const LEN: usize = 32;

    /// Zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// 2^256 - 1.
    pub const MAX: Self = Self([0xffu8; 32]);

    /// Wrap raw big-endian bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// The raw big-endian bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Uppercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode_upper(&self.0[..4])
    }

    /// Parse exactly 64 hex digits, either case.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = str_unhex(s)?;
        if bytes.len() != Self::LEN {
            return Err(TypeError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Parse a numeric hex literal of up to 64 digits.
    ///
    /// An optional `0x` prefix is accepted and short inputs are right-aligned,
    /// so `"10000000000000000"` parses to 2^64.
    pub fn from_hex_text(s: &str) -> Result<Self, TypeError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s)
            .as_bytes();
        if digits.is_empty() || digits.len() > 2 * Self::LEN {
            return Err(TypeError::InvalidHex(format!(
                "expected 1 to 64 hex digits, got {}",
                digits.len()
            )));
        }

        let mut arr = [0u8; 32];
        // Walk from the least significant digit so short inputs land on the right.
        for (pos, &c) in digits.iter().rev().enumerate() {
            let nibble = char_unhex(c)
                .ok_or_else(|| TypeError::InvalidHex(format!("non-hex digit in {s:?}")))?;
            let byte = Self::LEN - 1 - pos / 2;
            arr[byte] |= if pos % 2 == 0 { nibble } else { nibble << 4 };
        }
        Ok(Self(arr))
    }

    /// Full-width addition, reporting whether the sum overflowed 2^256.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u8; 32];
        let mut carry = 0u16;
        for i in (0..Self::LEN).rev() {
            let sum = self.0[i] as u16 + rhs.0[i] as u16 + carry;
            out[i] = sum as u8;
            carry = sum >> 8;
        }
        (Self(out), carry != 0)
    }

    /// Full-width addition modulo 2^256.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// The trailing 8 bytes as a big-endian `u64`.
    pub fn low_u64(&self) -> u64 {
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&self.0[24..]);
        u64::from_be_bytes(tail)
    }

    /// A copy of `self` with the trailing 8 bytes replaced by `value`
    /// (big-endian). The leading 24 bytes are unchanged.
    pub fn with_low_u64(&self, value: u64) -> Self {
        let mut out = self.0;
        out[24..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }
}

impl Add for Uint256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }
}

impl fmt::Debug for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint256({})", self.short_hex())
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Uint256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<Uint256> for [u8; 32] {
    fn from(value: Uint256) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Uint256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
