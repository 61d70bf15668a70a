use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Characters permitted in a three-letter currency code.
const ISO_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789<>(){}[]|?!@#$%^&*";

/// Offset of the three-letter code inside a standard currency.
const ISO_OFFSET: usize = 12;

/// 160-bit currency identifier.
///
/// A standard currency carries its three-letter code at bytes 12..15 with
/// every other byte zero. Non-standard currencies are arbitrary 20-byte
/// values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Currency([u8; 20]);

impl Currency {
    /// Width in bytes.
    pub const LEN: usize = 20;

    /// The native asset (all zeros).
    pub const fn xrp() -> Self {
        Self([0u8; 20])
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

    /// Build a currency from a three-character code or 40 hex digits.
    ///
    /// `"XRP"` names the native asset.
    pub fn from_iso(code: &str) -> Result<Self, TypeError> {
        if code == "XRP" {
            return Ok(Self::xrp());
        }
        let chars = code.as_bytes();
        if chars.len() == 3 && chars.iter().all(|c| ISO_CHARSET.contains(c)) {
            let mut bytes = [0u8; 20];
            bytes[ISO_OFFSET..ISO_OFFSET + 3].copy_from_slice(chars);
            return Ok(Self(bytes));
        }
        if chars.len() == 2 * Self::LEN {
            let raw = hex::decode(code).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(&raw);
            return Ok(Self(bytes));
        }
        Err(TypeError::InvalidCurrency(code.to_string()))
    }

    /// The three-letter code, if this currency uses the standard layout.
    pub fn iso_code(&self) -> Option<String> {
        if self.is_xrp() {
            return Some("XRP".to_string());
        }
        let code = &self.0[ISO_OFFSET..ISO_OFFSET + 3];
        let padding_clear = self.0[..ISO_OFFSET].iter().all(|b| *b == 0)
            && self.0[ISO_OFFSET + 3..].iter().all(|b| *b == 0);
        if padding_clear && code.iter().all(|c| ISO_CHARSET.contains(c)) {
            String::from_utf8(code.to_vec()).ok()
        } else {
            None
        }
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iso_code() {
            Some(code) => write!(f, "Currency({code})"),
            None => write!(f, "Currency({})", hex::encode_upper(self.0)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.iso_code() {
            Some(code) => write!(f, "{code}"),
            None => write!(f, "{}", hex::encode_upper(self.0)),
        }
    }
}
