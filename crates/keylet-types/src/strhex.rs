//! Hex-digit decoding through a shared lookup table.

use std::sync::LazyLock;

use crate::error::TypeError;

const INVALID: u8 = 0xff;

static UNHEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut table = [INVALID; 256];
    for (i, c) in (b'0'..=b'9').enumerate() {
        table[c as usize] = i as u8;
    }
    for (i, (upper, lower)) in (b'A'..=b'F').zip(b'a'..=b'f').enumerate() {
        table[upper as usize] = 10 + i as u8;
        table[lower as usize] = 10 + i as u8;
    }
    table
});

/// Value of a single hex digit, or `None` if `c` is not one.
pub fn char_unhex(c: u8) -> Option<u8> {
    match UNHEX[c as usize] {
        INVALID => None,
        nibble => Some(nibble),
    }
}

/// Decode an even-length hex string.
pub fn str_unhex(s: &str) -> Result<Vec<u8>, TypeError> {
    let digits = s.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(TypeError::InvalidHex(format!("odd number of digits in {s:?}")));
    }
    digits
        .chunks_exact(2)
        .map(|pair| match (char_unhex(pair[0]), char_unhex(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(TypeError::InvalidHex(format!("non-hex digit in {s:?}"))),
        })
        .collect()
}
